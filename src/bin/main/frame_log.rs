use heapless::String;
use log::{debug, info};
use storyline_core::{
    app::USER_ID_BYTES,
    render::{Screen, SegmentState},
};

const SEGMENT_BAR_BYTES: usize = 96;
const PROGRESS_LOG_STEP_PCT: u8 = 25;

/// Stand-in renderer: describes frames in the log instead of drawing them.
#[derive(Debug, Default)]
pub(super) struct FrameLog {
    /// User and story index of the last logged frame. Story ids are not
    /// copied since the source does not bound their length.
    last_story: Option<(String<USER_ID_BYTES>, u16)>,
    last_step: u8,
    swiping: bool,
}

impl FrameLog {
    /// Returns `true` when the frame produced a story line in the log.
    pub(super) fn render(&mut self, screen: Screen<'_>) -> bool {
        let Screen::Story {
            user,
            story,
            segments,
            paused,
            transform,
            animation,
        } = screen
        else {
            if self.last_story.take().is_some() {
                info!("frame: viewer closed");
            }
            return false;
        };

        let step = segments.progress_pct / PROGRESS_LOG_STEP_PCT;
        let story_changed = !self.last_story.as_ref().is_some_and(|(user_id, index)| {
            user_id.as_str() == user.user_id && *index == segments.current
        });
        let logged = story_changed || step != self.last_step;

        if logged {
            let mut bar = String::<SEGMENT_BAR_BYTES>::new();
            for segment in segments.iter() {
                let glyph = match segment {
                    SegmentState::Done => '#',
                    SegmentState::Active { .. } => '>',
                    SegmentState::Pending => '.',
                };
                if bar.push(glyph).is_err() {
                    break;
                }
            }

            info!(
                "frame: {} [{}] story={} ({}/{}) media={} progress={}% paused={} animation={:?}",
                user.display_name,
                bar,
                story.id,
                segments.current.saturating_add(1),
                segments.total,
                story.media_ref,
                segments.progress_pct,
                paused,
                animation.map(|frame| frame.kind)
            );
            // The viewer only shows users whose id fits USER_ID_BYTES.
            self.last_story = String::try_from(user.user_id)
                .ok()
                .map(|user_id| (user_id, segments.current));
            self.last_step = step;
        }

        if !transform.is_identity() {
            self.swiping = true;
            debug!(
                "frame: swipe translate_x={} scale_permille={} rotation_decideg={}",
                transform.translate_x_px, transform.scale_permille, transform.rotation_decideg
            );
        } else if self.swiping {
            self.swiping = false;
            debug!("frame: swipe settled");
        }

        logged
    }
}

#[cfg(test)]
mod tests {
    use storyline_core::{
        content::{StoryItem, UserStories},
        render::{ProgressSegments, SwipeTransform},
    };

    use super::*;

    const LONG_STORY_ID: &str =
        "story-with-an-identifier-well-past-the-user-id-buffer-0123456789abcdef";

    fn story_screen<'a>(
        user: UserStories<'a>,
        story: StoryItem<'a>,
        current: u16,
        progress_pct: u8,
    ) -> Screen<'a> {
        Screen::Story {
            user,
            story,
            segments: ProgressSegments {
                current,
                total: 200,
                progress_pct,
            },
            paused: false,
            transform: SwipeTransform::IDENTITY,
            animation: None,
        }
    }

    #[test]
    fn long_story_ids_and_many_segments_log_once_per_step() {
        let user = UserStories::new("dev", "Dev", "", &[]);
        let story = StoryItem::new(LONG_STORY_ID, "media/long.jpg", 0);
        let mut frames = FrameLog::default();

        assert!(frames.render(story_screen(user, story, 150, 10)));
        assert!(!frames.render(story_screen(user, story, 150, 12)));
        assert!(frames.render(story_screen(user, story, 150, 30)));
        assert!(frames.render(story_screen(user, story, 151, 30)));

        assert!(!frames.render(Screen::Closed));
        assert!(frames.last_story.is_none());
    }
}
