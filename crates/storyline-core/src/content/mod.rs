//! Story queue sources consumed by the viewer.

pub mod static_source;

/// Stories older than this are expired.
pub const STORY_TTL_MS: u64 = 24 * 60 * 60 * 1_000;

/// One story media item. Owned by the source, only borrowed by the viewer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StoryItem<'a> {
    pub id: &'a str,
    pub media_ref: &'a str,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at_ms: u64,
    /// Display duration in seconds. `0` means "use the viewer default".
    pub duration_secs: u16,
}

impl<'a> StoryItem<'a> {
    pub const fn new(id: &'a str, media_ref: &'a str, created_at_ms: u64) -> Self {
        Self {
            id,
            media_ref,
            created_at_ms,
            duration_secs: 0,
        }
    }

    pub const fn with_duration(mut self, duration_secs: u16) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.created_at_ms) >= STORY_TTL_MS
    }
}

/// One user's stories, oldest first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UserStories<'a> {
    pub user_id: &'a str,
    pub display_name: &'a str,
    pub avatar_ref: &'a str,
    pub items: &'a [StoryItem<'a>],
}

impl<'a> UserStories<'a> {
    pub const fn new(
        user_id: &'a str,
        display_name: &'a str,
        avatar_ref: &'a str,
        items: &'a [StoryItem<'a>],
    ) -> Self {
        Self {
            user_id,
            display_name,
            avatar_ref,
            items,
        }
    }

    pub fn story_at(&self, index: u16) -> Option<StoryItem<'a>> {
        self.items.get(index as usize).copied()
    }

    pub fn story_count(&self) -> u16 {
        self.items.len().min(u16::MAX as usize) as u16
    }
}

/// Direction through the eligible user queue.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Next,
    Previous,
}

/// Read-only, ordered mapping from user id to that user's stories.
///
/// The order of `user_at` is the queue order used for cross-user navigation.
/// The viewer re-reads it on every navigation step and never caches it.
pub trait StorySource {
    fn user_count(&self) -> usize;

    fn user_at(&self, index: usize) -> Option<UserStories<'_>>;

    /// Whether the user has at least one unexpired story.
    fn has_active_story(&self, user_id: &str) -> bool {
        self.stories_for(user_id)
            .is_some_and(|group| !group.items.is_empty())
    }

    /// Queue position and stories for a user id.
    fn find_user(&self, user_id: &str) -> Option<(usize, UserStories<'_>)> {
        (0..self.user_count()).find_map(|index| {
            self.user_at(index)
                .filter(|group| group.user_id == user_id)
                .map(|group| (index, group))
        })
    }

    fn stories_for(&self, user_id: &str) -> Option<UserStories<'_>> {
        self.find_user(user_id).map(|(_, group)| group)
    }
}

/// Whether a user can be navigated to: active and with something to show.
pub fn is_eligible<S>(source: &S, group: &UserStories<'_>) -> bool
where
    S: StorySource + ?Sized,
{
    !group.items.is_empty() && source.has_active_story(group.user_id)
}

/// Nearest eligible user next to `user_id` in source order.
///
/// Returns `None` when `user_id` is no longer part of the source or when no
/// eligible user exists in that direction.
pub fn adjacent_eligible_user<'s, S>(
    source: &'s S,
    user_id: &str,
    direction: Direction,
) -> Option<UserStories<'s>>
where
    S: StorySource + ?Sized,
{
    let (position, _) = source.find_user(user_id)?;
    let eligible = |index: usize| {
        source
            .user_at(index)
            .filter(|group| is_eligible(source, group))
    };

    match direction {
        Direction::Next => (position + 1..source.user_count()).find_map(eligible),
        Direction::Previous => (0..position).rev().find_map(eligible),
    }
}

#[cfg(test)]
mod tests {
    use super::static_source::StaticStorySource;
    use super::*;

    const ONE: [StoryItem<'static>; 1] = [StoryItem::new("s1", "m1", 0)];
    const NONE: [StoryItem<'static>; 0] = [];
    const QUEUE: [UserStories<'static>; 4] = [
        UserStories::new("a", "A", "", &ONE),
        UserStories::new("b", "B", "", &NONE),
        UserStories::new("c", "C", "", &ONE),
        UserStories::new("d", "D", "", &ONE),
    ];

    #[test]
    fn adjacent_user_skips_users_without_stories() {
        let src = StaticStorySource::new(&QUEUE);

        let next = adjacent_eligible_user(&src, "a", Direction::Next).unwrap();
        assert_eq!(next.user_id, "c");

        let previous = adjacent_eligible_user(&src, "c", Direction::Previous).unwrap();
        assert_eq!(previous.user_id, "a");
    }

    #[test]
    fn adjacent_user_stops_at_queue_ends() {
        let src = StaticStorySource::new(&QUEUE);

        assert!(adjacent_eligible_user(&src, "d", Direction::Next).is_none());
        assert!(adjacent_eligible_user(&src, "a", Direction::Previous).is_none());
        assert!(adjacent_eligible_user(&src, "missing", Direction::Next).is_none());
    }

    #[test]
    fn expiry_uses_a_day_window() {
        let item = StoryItem::new("s", "m", 1_000);
        assert!(!item.is_expired(1_000 + STORY_TTL_MS - 1));
        assert!(item.is_expired(1_000 + STORY_TTL_MS));
    }
}
