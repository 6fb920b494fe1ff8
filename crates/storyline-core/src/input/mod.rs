//! Input abstraction layer.

pub mod mock;

/// Logical events consumed by the story viewer. Coordinates are viewport
/// pixels with the origin at the top-left corner.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    TouchStart { x: i32, y: i32 },
    TouchMove { x: i32, y: i32 },
    TouchEnd { x: i32, y: i32 },
    /// Touch stolen by the platform (scroll, system gesture).
    TouchCancel,
    /// Close button.
    Close,
    /// Browser or system back navigation.
    Back,
    /// Host went to the background or lost focus.
    Suspend,
    Resume,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
