use heapless::String;
use log::info;
use storyline_core::{app::USER_ID_BYTES, host::ViewerHost};

/// Host callbacks for the shell: logs them and keeps a short summary.
#[derive(Debug, Default)]
pub(super) struct ShellHost {
    closed: bool,
    profile_request: Option<String<USER_ID_BYTES>>,
    stories_shown: u32,
}

impl ShellHost {
    pub(super) fn closed(&self) -> bool {
        self.closed
    }

    pub(super) fn profile_request(&self) -> Option<&str> {
        self.profile_request.as_ref().map(|id| id.as_str())
    }

    pub(super) fn stories_shown(&self) -> u32 {
        self.stories_shown
    }
}

impl ViewerHost for ShellHost {
    fn close(&mut self) {
        info!("host: viewer dismissed");
        self.closed = true;
    }

    fn open_profile(&mut self, user_id: &str) {
        info!("host: navigate to profile user={}", user_id);
        self.profile_request = String::try_from(user_id).ok();
    }

    fn story_shown(&mut self, user_id: &str, story_id: &str) {
        info!("host: story shown user={} story={}", user_id, story_id);
        self.stories_shown = self.stories_shown.saturating_add(1);
    }
}
