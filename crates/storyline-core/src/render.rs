//! View models and animation metadata handed to the renderer.

use crate::content::{StoryItem, UserStories};

/// Scale at full-width drag, in permille.
const MIN_SCALE_PERMILLE: u16 = 900;
/// Rotation at full-width drag, in tenths of a degree.
const MAX_ROTATION_DECIDEG: i32 = 50;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    SlideLeft,
    SlideRight,
    Fade,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    /// 0..=100
    pub progress_pct: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(kind: AnimationKind, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            start_ms,
            duration_ms,
        }
    }

    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= duration {
            return None;
        }

        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(AnimationFrame {
            kind: self.kind,
            progress_pct: progress,
        })
    }
}

/// Visual transform of the story card while it is dragged or animated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SwipeTransform {
    pub translate_x_px: i32,
    /// 1000 = natural size.
    pub scale_permille: u16,
    /// Tenths of a degree, positive is clockwise.
    pub rotation_decideg: i16,
}

impl SwipeTransform {
    pub const IDENTITY: Self = Self {
        translate_x_px: 0,
        scale_permille: 1000,
        rotation_decideg: 0,
    };

    /// Transform proportional to `offset_px` relative to the viewport width.
    pub fn from_offset(offset_px: i32, viewport_width_px: u16) -> Self {
        if offset_px == 0 {
            return Self::IDENTITY;
        }

        let width = viewport_width_px.max(1) as i32;
        let magnitude = offset_px.unsigned_abs().min(width as u32) as i32;
        let shrink = (magnitude * (1000 - MIN_SCALE_PERMILLE as i32)) / width;
        let rotation = (offset_px.clamp(-width, width) * MAX_ROTATION_DECIDEG) / width;

        Self {
            translate_x_px: offset_px,
            scale_permille: (1000 - shrink) as u16,
            rotation_decideg: rotation as i16,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SegmentState {
    Done,
    Active { progress_pct: u8 },
    Pending,
}

/// One progress bar per story of the current user.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProgressSegments {
    pub current: u16,
    pub total: u16,
    pub progress_pct: u8,
}

impl ProgressSegments {
    pub fn state(&self, index: u16) -> Option<SegmentState> {
        if index >= self.total {
            return None;
        }

        Some(match index.cmp(&self.current) {
            core::cmp::Ordering::Less => SegmentState::Done,
            core::cmp::Ordering::Equal => SegmentState::Active {
                progress_pct: self.progress_pct,
            },
            core::cmp::Ordering::Greater => SegmentState::Pending,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = SegmentState> + '_ {
        (0..self.total).filter_map(|index| self.state(index))
    }
}

/// View model consumed by the host renderer.
pub enum Screen<'a> {
    /// Viewer closed, or nothing left to show. Render nothing.
    Closed,
    Story {
        user: UserStories<'a>,
        story: StoryItem<'a>,
        segments: ProgressSegments,
        /// Playback held by a swipe or a host interruption.
        paused: bool,
        transform: SwipeTransform,
        animation: Option<AnimationFrame>,
    },
}
