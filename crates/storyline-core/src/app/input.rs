impl<SRC, IN, H> StoryViewer<SRC, IN, H>
where
    SRC: StorySource,
    IN: InputProvider,
    H: ViewerHost,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("story-input: provider error, dropping remaining events this tick");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::Suspend => {
                if !self.suspended {
                    debug!("story-timer: suspended at={}", now_ms);
                }
                self.suspended = true;
                self.pending_redraw = true;
                return;
            }
            InputEvent::Resume => {
                if self.suspended {
                    debug!("story-timer: resumed at={}", now_ms);
                }
                self.suspended = false;
                self.pending_redraw = true;
                return;
            }
            _ => {}
        }

        if !self.is_open() {
            debug!("story-input: closed viewer ignored event={:?}", event);
            return;
        }

        match event {
            InputEvent::Close | InputEvent::Back => self.close(now_ms),
            InputEvent::TouchStart { x, y } => {
                if !self.swipe.touch_start(x, y) {
                    debug!("story-swipe: touch ignored while settling x={} y={}", x, y);
                }
            }
            InputEvent::TouchMove { x, y } => {
                if self.swipe.touch_move(x, y) {
                    self.pending_redraw = true;
                }
            }
            InputEvent::TouchEnd { x, y } => self.apply_release(x, y, now_ms),
            InputEvent::TouchCancel => {
                self.swipe.touch_cancel(now_ms);
                self.pending_redraw = true;
            }
            InputEvent::Suspend | InputEvent::Resume => {}
        }
    }

    fn apply_release(&mut self, x: i32, y: i32, now_ms: u64) {
        let source = &self.source;
        let user_id = self.current_user.as_str();
        let release = self.swipe.touch_end(x, y, now_ms, |direction| {
            adjacent_eligible_user(source, user_id, direction).is_some()
        });

        match release {
            Release::Tap { x, y } => self.apply_tap(x, y, now_ms),
            Release::Commit(direction) => {
                debug!(
                    "story-nav: swipe committed user={} direction={:?}",
                    self.current_user, direction
                );
                self.pending_redraw = true;
            }
            Release::Cancel => {
                debug!("story-nav: swipe cancelled user={}", self.current_user);
                self.pending_redraw = true;
            }
            Release::Ignored | Release::None => {}
        }
    }

    fn apply_tap(&mut self, x: i32, y: i32, now_ms: u64) {
        if y < self.config.header_height_px as i32 {
            self.open_profile(now_ms);
            return;
        }

        let zone_px =
            (self.config.viewport_width_px as i32 * self.config.tap_previous_zone_pct as i32) / 100;
        if x < zone_px {
            debug!("story-nav: tap previous x={} zone={}", x, zone_px);
            self.previous_story(now_ms);
        } else {
            debug!("story-nav: tap next x={} zone={}", x, zone_px);
            self.next_story(now_ms);
        }
    }

    fn open_profile(&mut self, now_ms: u64) {
        let user_id = self.current_user.clone();
        info!("story-nav: header tapped, opening profile user={}", user_id);
        self.teardown(now_ms);
        self.host.open_profile(user_id.as_str());
    }
}
