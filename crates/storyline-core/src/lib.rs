#![cfg_attr(not(test), no_std)]

//! Story viewer engine: per-story playback timing, story/user navigation and
//! swipe-driven user transitions.

pub mod app;
pub mod content;
pub mod gesture;
pub mod host;
pub mod input;
pub mod playback;
pub mod render;
