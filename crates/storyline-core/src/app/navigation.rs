impl<SRC, IN, H> StoryViewer<SRC, IN, H>
where
    SRC: StorySource,
    IN: InputProvider,
    H: ViewerHost,
{
    /// Open on the first story of `user_id`. On error the viewer stays
    /// closed and no timer runs.
    pub fn open(&mut self, user_id: &str, now_ms: u64) -> Result<(), OpenError> {
        if self.is_open() {
            self.teardown(now_ms);
        }

        let id = UserId::try_from(user_id).map_err(|_| OpenError::UserIdTooLong)?;
        let Some(group) = self.source.stories_for(user_id) else {
            warn!("story-nav: open rejected user={} status=unknown_user", user_id);
            return Err(OpenError::UnknownUser);
        };
        if !is_eligible(&self.source, &group) {
            warn!("story-nav: open rejected user={} status=no_active_stories", user_id);
            return Err(OpenError::NoActiveStories);
        }

        info!(
            "story-nav: open user={} stories={}",
            user_id,
            group.story_count()
        );
        self.current_user = id;
        self.enter_story(0, now_ms);
        self.start_transition(AnimationKind::Fade, now_ms, ANIM_OPEN_MS);
        Ok(())
    }

    /// Dismiss the viewer and notify the host. No-op when already closed.
    pub fn close(&mut self, now_ms: u64) {
        if !self.is_open() {
            return;
        }

        info!("story-nav: close user={}", self.current_user);
        self.teardown(now_ms);
        self.host.close();
    }

    /// Tap right or timer expiry.
    pub fn next_story(&mut self, now_ms: u64) {
        let UiState::Viewing { index, .. } = self.ui else {
            return;
        };

        let total = self
            .source
            .stories_for(self.current_user.as_str())
            .map_or(0, |group| group.story_count());
        debug!(
            "story-nav: next story user={} index={}/{}",
            self.current_user,
            index.saturating_add(1),
            total
        );

        if index.saturating_add(1) < total {
            self.enter_story(index + 1, now_ms);
            return;
        }

        if self.jump_user(Direction::Next, Some(AnimationKind::SlideLeft), now_ms) {
            return;
        }

        info!(
            "story-nav: end of queue user={} index={}",
            self.current_user, index
        );
        self.close(now_ms);
    }

    /// Tap left. At the very first story this only restarts playback.
    pub fn previous_story(&mut self, now_ms: u64) {
        let UiState::Viewing { index, .. } = self.ui else {
            return;
        };

        debug!(
            "story-nav: previous story user={} index={}",
            self.current_user, index
        );

        if index > 0 {
            self.enter_story(index - 1, now_ms);
            return;
        }

        if self.jump_user(Direction::Previous, Some(AnimationKind::SlideRight), now_ms) {
            return;
        }

        debug!(
            "story-nav: start of queue user={}, restarting story",
            self.current_user
        );
        self.enter_story(0, now_ms);
    }

    /// Jump straight to the next eligible user's first story. Returns `false`
    /// and leaves the cursor alone when there is none.
    pub fn next_user(&mut self, now_ms: u64) -> bool {
        self.jump_user_now(Direction::Next, AnimationKind::SlideLeft, now_ms)
    }

    /// Jump straight to the previous eligible user's first story.
    pub fn previous_user(&mut self, now_ms: u64) -> bool {
        self.jump_user_now(Direction::Previous, AnimationKind::SlideRight, now_ms)
    }

    fn jump_user_now(&mut self, direction: Direction, kind: AnimationKind, now_ms: u64) -> bool {
        if !self.is_open() {
            return false;
        }

        self.swipe.reset();
        if self.jump_user(direction, Some(kind), now_ms) {
            return true;
        }

        debug!(
            "story-nav: user jump rejected user={} direction={:?}",
            self.current_user, direction
        );
        self.pending_redraw = true;
        false
    }

    fn jump_user(
        &mut self,
        direction: Direction,
        animation: Option<AnimationKind>,
        now_ms: u64,
    ) -> bool {
        let Some(target) =
            adjacent_eligible_user(&self.source, self.current_user.as_str(), direction)
                .and_then(|group| UserId::try_from(group.user_id).ok())
        else {
            return false;
        };

        debug!(
            "story-nav: user {} -> {} direction={:?}",
            self.current_user, target, direction
        );
        self.current_user = target;
        self.enter_story(0, now_ms);
        if let Some(kind) = animation {
            self.start_transition(kind, now_ms, ANIM_USER_MS);
        }
        true
    }

    /// Make `index` of the current user the active story. The previous timer
    /// is replaced in the same step, so two stories never play at once.
    fn enter_story(&mut self, index: u16, now_ms: u64) {
        let Some(timer) = self.story_duration_timer(index) else {
            warn!(
                "story-nav: story missing user={} index={}, closing",
                self.current_user, index
            );
            self.close(now_ms);
            return;
        };

        self.ui = UiState::Viewing { index, timer };
        self.last_progress_pct = None;
        self.pending_redraw = true;

        if let Some(story) = self
            .source
            .stories_for(self.current_user.as_str())
            .and_then(|group| group.story_at(index))
        {
            self.host.story_shown(self.current_user.as_str(), story.id);
        }
    }

    /// Drop the session: timer, swipe animation, pending commit.
    fn teardown(&mut self, now_ms: u64) {
        debug!(
            "story-nav: teardown user={} at={}",
            self.current_user, now_ms
        );
        self.ui = UiState::Closed;
        self.swipe.reset();
        self.transition = None;
        self.last_progress_pct = None;
        self.current_user.clear();
        self.pending_redraw = true;
    }
}
