//! Per-story playback timer.
//!
//! The timer is a plain value advanced once per frame. Pausing never stops a
//! clock: the recorded start is pushed forward by the frame gap instead, so
//! progress accrued before a pause is kept and throttled frames cannot make
//! the bar jump.

use crate::content::StoryItem;

pub const DEFAULT_STORY_SECS: u16 = 5;
pub const DEFAULT_FRAME_GAP_MS: u64 = 500;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaybackStep {
    /// Story is playing (or held) at this percentage.
    Running { progress_pct: u8 },
    /// Duration reached on this frame. Emitted once per timer.
    Completed,
    /// Timer already completed; nothing left to do.
    Stopped,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlaybackTimer {
    duration_ms: u64,
    frame_gap_ms: u64,
    started_ms: Option<u64>,
    last_frame_ms: u64,
    progress_pct: u8,
    finished: bool,
}

impl PlaybackTimer {
    pub const fn new(duration_ms: u64, frame_gap_ms: u64) -> Self {
        Self {
            duration_ms: if duration_ms == 0 {
                DEFAULT_STORY_SECS as u64 * 1_000
            } else {
                duration_ms
            },
            frame_gap_ms: if frame_gap_ms == 0 { 1 } else { frame_gap_ms },
            started_ms: None,
            last_frame_ms: 0,
            progress_pct: 0,
            finished: false,
        }
    }

    /// Timer for `item`, falling back to `default_secs` when the story does
    /// not carry its own duration.
    pub fn for_story(item: &StoryItem<'_>, default_secs: u16, frame_gap_ms: u64) -> Self {
        Self::new(
            story_duration_ms(item.duration_secs, default_secs),
            frame_gap_ms,
        )
    }

    /// Advance to `now_ms`. While `held` (active swipe, host suspended) the
    /// start is shifted by the whole frame gap and progress stays put.
    pub fn advance(self, now_ms: u64, held: bool) -> (Self, PlaybackStep) {
        if self.finished {
            return (self, PlaybackStep::Stopped);
        }

        let mut next = self;
        let Some(mut started_ms) = self.started_ms else {
            next.started_ms = Some(now_ms);
            next.last_frame_ms = now_ms;
            next.progress_pct = 0;
            return (next, PlaybackStep::Running { progress_pct: 0 });
        };

        let gap = now_ms.saturating_sub(self.last_frame_ms);
        if held || gap > self.frame_gap_ms {
            started_ms = started_ms.saturating_add(gap);
        }
        next.started_ms = Some(started_ms);
        next.last_frame_ms = now_ms.max(self.last_frame_ms);

        let elapsed = next.last_frame_ms.saturating_sub(started_ms);
        if elapsed >= self.duration_ms {
            next.progress_pct = 100;
            next.finished = true;
            return (next, PlaybackStep::Completed);
        }

        let pct = ((elapsed as u128 * 100) / self.duration_ms as u128).min(100) as u8;
        next.progress_pct = pct.max(self.progress_pct);
        (
            next,
            PlaybackStep::Running {
                progress_pct: next.progress_pct,
            },
        )
    }

    pub const fn progress_pct(&self) -> u8 {
        self.progress_pct
    }

    pub const fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub const fn is_started(&self) -> bool {
        self.started_ms.is_some()
    }

    pub const fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Story duration in milliseconds. Zero falls back to `default_secs`, and a
/// zero default falls back to [`DEFAULT_STORY_SECS`].
pub fn story_duration_ms(duration_secs: u16, default_secs: u16) -> u64 {
    let secs = match (duration_secs, default_secs) {
        (0, 0) => DEFAULT_STORY_SECS,
        (0, default_secs) => default_secs,
        (secs, _) => secs,
    };
    secs as u64 * 1_000
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: u64 = 16;

    fn run(timer: PlaybackTimer, from_ms: u64, to_ms: u64) -> (PlaybackTimer, u32, u8) {
        let mut timer = timer;
        let mut completions = 0;
        let mut last_pct = 0u8;
        let mut now = from_ms;
        while now <= to_ms {
            let (next, step) = timer.advance(now, false);
            timer = next;
            match step {
                PlaybackStep::Running { progress_pct } => {
                    assert!(progress_pct >= last_pct, "progress went backwards");
                    last_pct = progress_pct;
                }
                PlaybackStep::Completed => {
                    completions += 1;
                    last_pct = timer.progress_pct();
                }
                PlaybackStep::Stopped => {}
            }
            now += FRAME_MS;
        }
        (timer, completions, last_pct)
    }

    #[test]
    fn uninterrupted_run_completes_exactly_once() {
        for secs in [1u64, 3, 5, 7] {
            let timer = PlaybackTimer::new(secs * 1_000, DEFAULT_FRAME_GAP_MS);
            let (timer, completions, last_pct) = run(timer, 0, secs * 1_000 + 2_000);
            assert_eq!(completions, 1);
            assert_eq!(last_pct, 100);
            assert!(timer.is_finished());
        }
    }

    #[test]
    fn first_frame_records_start() {
        let timer = PlaybackTimer::new(5_000, DEFAULT_FRAME_GAP_MS);
        assert!(!timer.is_started());

        let (timer, step) = timer.advance(12_345, false);
        assert!(timer.is_started());
        assert_eq!(step, PlaybackStep::Running { progress_pct: 0 });

        let (_, step) = timer.advance(12_345 + 2_500, true);
        assert_eq!(step, PlaybackStep::Running { progress_pct: 0 });
    }

    #[test]
    fn long_frame_gap_keeps_accrued_progress() {
        let timer = PlaybackTimer::new(5_000, DEFAULT_FRAME_GAP_MS);
        let (timer, _, pct) = run(timer, 0, 1_008);
        assert_eq!(pct, 20);

        // Tab backgrounded for ten seconds.
        let (timer, step) = timer.advance(11_008, false);
        assert_eq!(step, PlaybackStep::Running { progress_pct: 20 });

        let (_, step) = timer.advance(11_008 + 400, false);
        assert_eq!(step, PlaybackStep::Running { progress_pct: 28 });
    }

    #[test]
    fn very_long_durations_do_not_overflow() {
        let timer = PlaybackTimer::new(u64::MAX, u64::MAX);
        let (timer, _) = timer.advance(0, false);

        let (timer, step) = timer.advance(u64::MAX / 10, false);
        assert_eq!(step, PlaybackStep::Running { progress_pct: 9 });
        assert!(!timer.is_finished());
    }

    #[test]
    fn held_frames_do_not_accrue() {
        let timer = PlaybackTimer::new(5_000, DEFAULT_FRAME_GAP_MS);
        let (mut timer, _, pct) = run(timer, 0, 2_496);
        assert_eq!(pct, 49);

        let mut now = 2_496;
        for _ in 0..200 {
            now += FRAME_MS;
            let (next, step) = timer.advance(now, true);
            timer = next;
            assert_eq!(step, PlaybackStep::Running { progress_pct: 49 });
        }
    }

    #[test]
    fn stopped_after_completion() {
        let timer = PlaybackTimer::new(1_000, DEFAULT_FRAME_GAP_MS);
        let (timer, completions, _) = run(timer, 0, 1_200);
        assert_eq!(completions, 1);

        let (_, step) = timer.advance(5_000, false);
        assert_eq!(step, PlaybackStep::Stopped);
    }

    #[test]
    fn zero_durations_use_the_default_floor() {
        assert_eq!(story_duration_ms(0, 5), 5_000);
        assert_eq!(story_duration_ms(0, 0), 5_000);
        assert_eq!(story_duration_ms(8, 5), 8_000);
        assert_eq!(PlaybackTimer::new(0, 0).duration_ms(), 5_000);

        let item = StoryItem::new("s", "m", 0);
        assert_eq!(PlaybackTimer::for_story(&item, 3, 500).duration_ms(), 3_000);
    }
}
