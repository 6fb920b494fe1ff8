use super::{StoryItem, StorySource, UserStories};

const DEMO_CREATED_AT_MS: u64 = 0;

const ANA_STORIES: [StoryItem<'static>; 2] = [
    StoryItem::new("ana-1", "media/ana/coffee.jpg", DEMO_CREATED_AT_MS).with_duration(3),
    StoryItem::new("ana-2", "media/ana/harbour.mp4", DEMO_CREATED_AT_MS).with_duration(4),
];

const BEN_STORIES: [StoryItem<'static>; 1] =
    [StoryItem::new("ben-1", "media/ben/trail.jpg", DEMO_CREATED_AT_MS)];

const CLEO_STORIES: [StoryItem<'static>; 0] = [];

const DEV_STORIES: [StoryItem<'static>; 3] = [
    StoryItem::new("dev-1", "media/dev/desk.jpg", DEMO_CREATED_AT_MS).with_duration(2),
    StoryItem::new("dev-2", "media/dev/keyboard.jpg", DEMO_CREATED_AT_MS).with_duration(2),
    StoryItem::new("dev-3", "media/dev/sunset.mp4", DEMO_CREATED_AT_MS),
];

/// Sample queue used by the host shell until a real backend is wired in.
pub const DEMO_QUEUE: [UserStories<'static>; 4] = [
    UserStories::new("ana", "Ana Lima", "avatars/ana.png", &ANA_STORIES),
    UserStories::new("ben", "Ben Okafor", "avatars/ben.png", &BEN_STORIES),
    UserStories::new("cleo", "Cleo", "avatars/cleo.png", &CLEO_STORIES),
    UserStories::new("dev", "Dev Patel", "avatars/dev.png", &DEV_STORIES),
];

pub fn demo_source() -> StaticStorySource<'static> {
    StaticStorySource::new(&DEMO_QUEUE)
}

/// Static in-memory story queue.
///
/// Without a wall clock nothing expires. Once a clock is set, a user is
/// active while at least one of their stories is younger than a day.
#[derive(Debug, Clone, Copy)]
pub struct StaticStorySource<'a> {
    groups: &'a [UserStories<'a>],
    wall_clock_ms: Option<u64>,
}

impl<'a> StaticStorySource<'a> {
    pub const fn new(groups: &'a [UserStories<'a>]) -> Self {
        Self {
            groups,
            wall_clock_ms: None,
        }
    }

    pub const fn with_wall_clock(mut self, now_ms: u64) -> Self {
        self.wall_clock_ms = Some(now_ms);
        self
    }
}

impl StorySource for StaticStorySource<'_> {
    fn user_count(&self) -> usize {
        self.groups.len()
    }

    fn user_at(&self, index: usize) -> Option<UserStories<'_>> {
        self.groups.get(index).copied()
    }

    fn has_active_story(&self, user_id: &str) -> bool {
        let Some(group) = self.groups.iter().find(|group| group.user_id == user_id) else {
            return false;
        };

        match self.wall_clock_ms {
            Some(now_ms) => group.items.iter().any(|item| !item.is_expired(now_ms)),
            None => !group.items.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::STORY_TTL_MS;

    #[test]
    fn demo_queue_keeps_source_order() {
        let src = demo_source();

        assert_eq!(src.user_count(), 4);
        assert_eq!(src.user_at(0).map(|g| g.user_id), Some("ana"));
        assert_eq!(src.user_at(3).map(|g| g.user_id), Some("dev"));
        assert!(src.user_at(4).is_none());
        assert_eq!(src.find_user("dev").map(|(index, _)| index), Some(3));
    }

    #[test]
    fn users_without_stories_are_inactive() {
        let src = demo_source();

        assert!(src.has_active_story("ana"));
        assert!(!src.has_active_story("cleo"));
        assert!(!src.has_active_story("nobody"));
    }

    #[test]
    fn wall_clock_expires_old_stories() {
        let fresh = [StoryItem::new("new", "m", STORY_TTL_MS)];
        let stale = [StoryItem::new("old", "m", 0)];
        let groups = [
            UserStories::new("fresh", "Fresh", "", &fresh),
            UserStories::new("stale", "Stale", "", &stale),
        ];
        let src = StaticStorySource::new(&groups).with_wall_clock(STORY_TTL_MS + 10);

        assert!(src.has_active_story("fresh"));
        assert!(!src.has_active_story("stale"));
    }
}
