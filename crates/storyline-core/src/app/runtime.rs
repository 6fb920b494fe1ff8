impl<SRC, IN, H> StoryViewer<SRC, IN, H>
where
    SRC: StorySource,
    IN: InputProvider,
    H: ViewerHost,
{
    fn tick_viewing(&mut self, now_ms: u64) -> TickResult {
        if let Some(settled) = self.swipe.poll(now_ms) {
            self.pending_redraw = true;
            match settled {
                Settled::Committed(direction) => {
                    // The index only changes here, after the exit animation.
                    if !self.jump_user(direction, None, now_ms) {
                        debug!(
                            "story-nav: swipe target vanished user={} direction={:?}",
                            self.current_user, direction
                        );
                    }
                }
                Settled::Cancelled => {
                    debug!("story-swipe: snapped back user={}", self.current_user);
                }
            }
        }

        let UiState::Viewing { index, timer } = self.ui else {
            return self.take_redraw();
        };

        let held = self.playback_held();
        let (timer, step) = timer.advance(now_ms, held);
        self.ui = UiState::Viewing { index, timer };

        match step {
            PlaybackStep::Completed => {
                debug!(
                    "story-timer: completed user={} index={} duration_ms={}",
                    self.current_user,
                    index,
                    timer.duration_ms()
                );
                self.next_story(now_ms);
                self.pending_redraw = false;
                return TickResult::RenderRequested;
            }
            PlaybackStep::Running { progress_pct } => {
                if self.last_progress_pct != Some(progress_pct) {
                    self.last_progress_pct = Some(progress_pct);
                    self.pending_redraw = true;
                }
            }
            PlaybackStep::Stopped => {}
        }

        if self.swipe.is_settling() {
            self.pending_redraw = false;
            return TickResult::RenderRequested;
        }

        self.take_redraw()
    }

    fn story_duration_timer(&self, index: u16) -> Option<PlaybackTimer> {
        let (_, story) = self.current_story(index)?;
        Some(PlaybackTimer::for_story(
            &story,
            self.config.default_story_secs,
            self.config.frame_gap_ms,
        ))
    }

    fn start_transition(&mut self, kind: AnimationKind, now_ms: u64, duration_ms: u16) {
        self.transition = Some(AnimationSpec::new(kind, now_ms, duration_ms));
    }

    fn transition_frame(&self, now_ms: u64) -> Option<crate::render::AnimationFrame> {
        self.transition.and_then(|anim| anim.frame(now_ms))
    }
}
