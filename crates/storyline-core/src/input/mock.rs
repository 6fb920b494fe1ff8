use super::{InputEvent, InputProvider};

/// Replays `(at_ms, event)` pairs once the clock reaches them.
///
/// The owner advances the clock with [`TimedScript::set_clock`] before each
/// viewer tick. Events must be sorted by time.
#[derive(Debug, Clone)]
pub struct TimedScript<'a> {
    events: &'a [(u64, InputEvent)],
    cursor: usize,
    now_ms: u64,
}

impl<'a> TimedScript<'a> {
    pub const fn new(events: &'a [(u64, InputEvent)]) -> Self {
        Self {
            events,
            cursor: 0,
            now_ms: 0,
        }
    }

    pub fn set_clock(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.events.len()
    }
}

impl InputProvider for TimedScript<'_> {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        match self.events.get(self.cursor) {
            Some(&(at_ms, event)) if at_ms <= self.now_ms => {
                self.cursor = self.cursor.saturating_add(1);
                Ok(Some(event))
            }
            _ => Ok(None),
        }
    }
}
