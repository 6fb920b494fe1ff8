//! Callbacks from the viewer back into the hosting application.

/// Output side of the viewer. URL/history bookkeeping stays with the host.
pub trait ViewerHost {
    /// The user dismissed the viewer (explicit close, back navigation, or
    /// playing past the last story). Called once per session.
    fn close(&mut self);

    /// The header was tapped; the host should show this user's profile. The
    /// viewer has already torn its session down and will not call `close`.
    fn open_profile(&mut self, user_id: &str);

    /// A story became current.
    fn story_shown(&mut self, _user_id: &str, _story_id: &str) {}
}

impl<H: ViewerHost + ?Sized> ViewerHost for &mut H {
    fn close(&mut self) {
        (**self).close();
    }

    fn open_profile(&mut self, user_id: &str) {
        (**self).open_profile(user_id);
    }

    fn story_shown(&mut self, user_id: &str, story_id: &str) {
        (**self).story_shown(user_id, story_id);
    }
}

/// Host that ignores every callback.
#[derive(Default, Debug, Clone, Copy)]
pub struct NullHost;

impl ViewerHost for NullHost {
    fn close(&mut self) {}

    fn open_profile(&mut self, _user_id: &str) {}
}
