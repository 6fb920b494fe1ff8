//! Story viewer state machine: open/close, story and user navigation,
//! playback timing and swipe handling.

use heapless::String;
use log::{debug, info, warn};

use crate::{
    content::{
        Direction, StoryItem, StorySource, UserStories, adjacent_eligible_user, is_eligible,
    },
    gesture::{Release, Settled, SwipeConfig, SwipeController},
    host::ViewerHost,
    input::{InputEvent, InputProvider},
    playback::{DEFAULT_FRAME_GAP_MS, DEFAULT_STORY_SECS, PlaybackStep, PlaybackTimer},
    render::{AnimationKind, AnimationSpec, ProgressSegments, Screen},
};

/// Longest user id the viewer can hold on to.
pub const USER_ID_BYTES: usize = 64;

const ANIM_OPEN_MS: u16 = 220;
const ANIM_USER_MS: u16 = 300;

type UserId = String<USER_ID_BYTES>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ViewerConfig {
    /// Used for stories without their own duration.
    pub default_story_secs: u16,
    /// Frame gaps longer than this count as a suspended host.
    pub frame_gap_ms: u64,
    pub swipe_activation_px: u16,
    pub min_swipe_px: u16,
    pub transition_ms: u16,
    pub viewport_width_px: u16,
    /// Taps above this line open the current user's profile.
    pub header_height_px: u16,
    /// Left share of the viewport that steps back on tap.
    pub tap_previous_zone_pct: u8,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            default_story_secs: DEFAULT_STORY_SECS,
            frame_gap_ms: DEFAULT_FRAME_GAP_MS,
            swipe_activation_px: 10,
            min_swipe_px: 50,
            transition_ms: 300,
            viewport_width_px: 390,
            header_height_px: 64,
            tap_previous_zone_pct: 50,
        }
    }
}

impl ViewerConfig {
    fn swipe(&self) -> SwipeConfig {
        SwipeConfig {
            activation_px: self.swipe_activation_px,
            min_swipe_px: self.min_swipe_px,
            transition_ms: self.transition_ms,
            viewport_width_px: self.viewport_width_px,
        }
    }
}

/// Why a viewer could not be opened. The viewer stays closed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OpenError {
    UnknownUser,
    NoActiveStories,
    UserIdTooLong,
}

/// What is playing right now.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlaybackCursor<'a> {
    pub user_id: &'a str,
    pub index: u16,
    pub progress_pct: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum UiState {
    Closed,
    Viewing { index: u16, timer: PlaybackTimer },
}

pub struct StoryViewer<SRC, IN, H>
where
    SRC: StorySource,
    IN: InputProvider,
    H: ViewerHost,
{
    source: SRC,
    input: IN,
    host: H,
    config: ViewerConfig,
    ui: UiState,
    current_user: UserId,
    swipe: SwipeController,
    suspended: bool,
    pending_redraw: bool,
    transition: Option<AnimationSpec>,
    last_progress_pct: Option<u8>,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("navigation.rs");
