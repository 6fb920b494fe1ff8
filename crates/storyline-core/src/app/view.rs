impl<SRC, IN, H> StoryViewer<SRC, IN, H>
where
    SRC: StorySource,
    IN: InputProvider,
    H: ViewerHost,
{
    pub fn new(source: SRC, input: IN, host: H, mut config: ViewerConfig) -> Self {
        config.default_story_secs = config.default_story_secs.max(1);
        config.frame_gap_ms = config.frame_gap_ms.max(1);
        config.swipe_activation_px = config.swipe_activation_px.max(1);
        config.min_swipe_px = config.min_swipe_px.max(config.swipe_activation_px);
        config.transition_ms = config.transition_ms.max(1);
        config.viewport_width_px = config.viewport_width_px.max(1);
        config.tap_previous_zone_pct = config.tap_previous_zone_pct.min(100);

        Self {
            source,
            input,
            host,
            config,
            ui: UiState::Closed,
            current_user: UserId::new(),
            swipe: SwipeController::new(config.swipe()),
            suspended: false,
            pending_redraw: true,
            transition: None,
            last_progress_pct: None,
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);

        let rendered = match self.ui {
            UiState::Viewing { .. } => self.tick_viewing(now_ms),
            UiState::Closed => self.take_redraw(),
        };

        if self.transition_frame(now_ms).is_some() {
            TickResult::RenderRequested
        } else {
            rendered
        }
    }

    pub fn with_screen<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let UiState::Viewing { index, timer } = self.ui else {
            f(Screen::Closed);
            return;
        };

        let Some((group, story)) = self.current_story(index) else {
            f(Screen::Closed);
            return;
        };

        f(Screen::Story {
            user: group,
            story,
            segments: ProgressSegments {
                current: index,
                total: group.story_count(),
                progress_pct: timer.progress_pct(),
            },
            paused: self.playback_held(),
            transform: self.swipe.transform(now_ms),
            animation: self.transition_frame(now_ms),
        });
    }

    pub fn is_open(&self) -> bool {
        matches!(self.ui, UiState::Viewing { .. })
    }

    pub fn cursor(&self) -> Option<PlaybackCursor<'_>> {
        match self.ui {
            UiState::Viewing { index, timer } => Some(PlaybackCursor {
                user_id: self.current_user.as_str(),
                index,
                progress_pct: timer.progress_pct(),
            }),
            UiState::Closed => None,
        }
    }

    pub fn progress_pct(&self) -> u8 {
        self.cursor().map_or(0, |cursor| cursor.progress_pct)
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn config(&self) -> ViewerConfig {
        self.config
    }

    pub fn source(&self) -> &SRC {
        &self.source
    }

    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    fn current_story(&self, index: u16) -> Option<(UserStories<'_>, StoryItem<'_>)> {
        let group = self.source.stories_for(self.current_user.as_str())?;
        let story = group.story_at(index)?;
        Some((group, story))
    }

    fn playback_held(&self) -> bool {
        self.suspended || self.swipe.holds_playback()
    }

    fn take_redraw(&mut self) -> TickResult {
        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }
}
