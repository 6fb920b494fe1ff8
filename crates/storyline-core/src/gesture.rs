//! Swipe transition controller.
//!
//! Turns raw touch positions into taps, ignored drags, or horizontal swipes
//! that either snap back or carry the current story off-screen before a
//! user-to-user jump. The navigation itself is only reported once the exit
//! animation has settled.

use log::debug;

use crate::{content::Direction, render::SwipeTransform};

/// Bound on tracked drag deltas, far beyond any real touch surface.
const MAX_DRAG_PX: i32 = u16::MAX as i32;

fn drag_delta(to: i32, from: i32) -> i32 {
    to.saturating_sub(from).clamp(-MAX_DRAG_PX, MAX_DRAG_PX)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SwipeConfig {
    /// Movement on either axis that turns a touch into a drag.
    pub activation_px: u16,
    /// Horizontal distance required to commit a user transition.
    pub min_swipe_px: u16,
    pub transition_ms: u16,
    pub viewport_width_px: u16,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            activation_px: 10,
            min_swipe_px: 50,
            transition_ms: 300,
            viewport_width_px: 390,
        }
    }
}

/// Outcome of lifting the finger.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Release {
    /// No touch was being tracked.
    None,
    /// Touch never crossed the activation distance.
    Tap { x: i32, y: i32 },
    /// Vertical or diagonal drag; not a navigation gesture.
    Ignored,
    /// Exit animation started towards the adjacent user.
    Commit(Direction),
    /// Snap-back animation started.
    Cancel,
}

/// Reported by [`SwipeController::poll`] once an animation finishes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Settled {
    Committed(Direction),
    Cancelled,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum SwipePhase {
    Idle,
    Tracking {
        start_x: i32,
        start_y: i32,
        dx: i32,
        dy: i32,
        dragging: bool,
    },
    Settling {
        from_px: i32,
        to_px: i32,
        start_ms: u64,
        commit: Option<Direction>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SwipeController {
    config: SwipeConfig,
    phase: SwipePhase,
}

impl SwipeController {
    pub fn new(mut config: SwipeConfig) -> Self {
        config.activation_px = config.activation_px.max(1);
        config.min_swipe_px = config.min_swipe_px.max(config.activation_px);
        config.transition_ms = config.transition_ms.max(1);
        config.viewport_width_px = config.viewport_width_px.max(1);

        Self {
            config,
            phase: SwipePhase::Idle,
        }
    }

    pub const fn config(&self) -> SwipeConfig {
        self.config
    }

    /// Start tracking a touch. Ignored while an animation is settling.
    pub fn touch_start(&mut self, x: i32, y: i32) -> bool {
        if matches!(self.phase, SwipePhase::Settling { .. }) {
            return false;
        }

        self.phase = SwipePhase::Tracking {
            start_x: x,
            start_y: y,
            dx: 0,
            dy: 0,
            dragging: false,
        };
        true
    }

    /// Update the tracked touch. Returns `true` when the visual offset moved.
    pub fn touch_move(&mut self, x: i32, y: i32) -> bool {
        let SwipePhase::Tracking {
            start_x,
            start_y,
            dx: old_dx,
            dy: old_dy,
            dragging,
        } = self.phase
        else {
            return false;
        };

        let was_horizontal = self.is_horizontal_swipe();
        let dx = drag_delta(x, start_x);
        let dy = drag_delta(y, start_y);
        let activation = self.config.activation_px as u32;
        let dragging =
            dragging || dx.unsigned_abs() > activation || dy.unsigned_abs() > activation;

        self.phase = SwipePhase::Tracking {
            start_x,
            start_y,
            dx,
            dy,
            dragging,
        };

        let horizontal = self.is_horizontal_swipe();
        (horizontal && (dx, dy) != (old_dx, old_dy)) || horizontal != was_horizontal
    }

    /// Lift the finger at `(x, y)`.
    ///
    /// `can_navigate` reports whether an eligible user exists in a direction;
    /// a swipe towards a missing neighbour snaps back.
    pub fn touch_end<F>(&mut self, x: i32, y: i32, now_ms: u64, can_navigate: F) -> Release
    where
        F: FnOnce(Direction) -> bool,
    {
        if matches!(self.phase, SwipePhase::Tracking { .. }) {
            self.touch_move(x, y);
        }

        let SwipePhase::Tracking { dx, dy, dragging, .. } = self.phase else {
            return Release::None;
        };

        if !dragging {
            self.phase = SwipePhase::Idle;
            return Release::Tap { x, y };
        }

        if dx.unsigned_abs() <= dy.unsigned_abs() {
            debug!("story-swipe: drag ignored dx={} dy={}", dx, dy);
            self.phase = SwipePhase::Idle;
            return Release::Ignored;
        }

        let direction = if dx < 0 {
            Direction::Next
        } else {
            Direction::Previous
        };

        if dx.unsigned_abs() >= self.config.min_swipe_px as u32 && can_navigate(direction) {
            let width = self.config.viewport_width_px as i32;
            let to_px = if dx < 0 { -width } else { width };
            debug!(
                "story-swipe: commit direction={:?} dx={} to_px={}",
                direction, dx, to_px
            );
            self.phase = SwipePhase::Settling {
                from_px: dx,
                to_px,
                start_ms: now_ms,
                commit: Some(direction),
            };
            Release::Commit(direction)
        } else {
            debug!(
                "story-swipe: cancel direction={:?} dx={} min={}",
                direction, dx, self.config.min_swipe_px
            );
            self.phase = SwipePhase::Settling {
                from_px: dx,
                to_px: 0,
                start_ms: now_ms,
                commit: None,
            };
            Release::Cancel
        }
    }

    /// Touch interrupted by the platform. Horizontal drags snap back.
    pub fn touch_cancel(&mut self, now_ms: u64) {
        let horizontal = self.is_horizontal_swipe();
        match self.phase {
            SwipePhase::Tracking { dx, .. } if horizontal => {
                self.phase = SwipePhase::Settling {
                    from_px: dx,
                    to_px: 0,
                    start_ms: now_ms,
                    commit: None,
                };
            }
            SwipePhase::Tracking { .. } => self.phase = SwipePhase::Idle,
            SwipePhase::Idle | SwipePhase::Settling { .. } => {}
        }
    }

    /// Finish an animation whose duration has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<Settled> {
        let SwipePhase::Settling {
            start_ms, commit, ..
        } = self.phase
        else {
            return None;
        };

        if now_ms.saturating_sub(start_ms) < self.config.transition_ms as u64 {
            return None;
        }

        self.phase = SwipePhase::Idle;
        Some(match commit {
            Some(direction) => Settled::Committed(direction),
            None => Settled::Cancelled,
        })
    }

    /// Drop any tracked touch or running animation without reporting it.
    pub fn reset(&mut self) {
        self.phase = SwipePhase::Idle;
    }

    /// Drag that currently counts as a horizontal swipe.
    pub fn is_horizontal_swipe(&self) -> bool {
        match self.phase {
            SwipePhase::Tracking {
                dx, dy, dragging, ..
            } => dragging && dx.unsigned_abs() > dy.unsigned_abs(),
            _ => false,
        }
    }

    pub fn is_settling(&self) -> bool {
        matches!(self.phase, SwipePhase::Settling { .. })
    }

    /// Whether story playback must hold: during a horizontal swipe and until
    /// its exit or snap-back animation settles.
    pub fn holds_playback(&self) -> bool {
        self.is_horizontal_swipe() || self.is_settling()
    }

    pub fn offset_px(&self, now_ms: u64) -> i32 {
        match self.phase {
            SwipePhase::Idle => 0,
            SwipePhase::Tracking { dx, .. } => {
                if self.is_horizontal_swipe() {
                    dx
                } else {
                    0
                }
            }
            SwipePhase::Settling {
                from_px,
                to_px,
                start_ms,
                ..
            } => {
                let duration = self.config.transition_ms.max(1) as i64;
                let elapsed = (now_ms.saturating_sub(start_ms) as i64).min(duration);
                let span = to_px as i64 - from_px as i64;
                (from_px as i64 + span * elapsed / duration) as i32
            }
        }
    }

    pub fn transform(&self, now_ms: u64) -> SwipeTransform {
        SwipeTransform::from_offset(self.offset_px(now_ms), self.config.viewport_width_px)
    }
}
