use storyline_core::input::InputEvent;

pub(super) const INITIAL_USER: &str = "ana";

/// Gesture script replayed against the demo queue, in loop milliseconds.
pub(super) const DEMO_SESSION: [(u64, InputEvent); 20] = [
    // Tap on the right half: ana-1 -> ana-2.
    (1_200, InputEvent::TouchStart { x: 300, y: 420 }),
    (1_260, InputEvent::TouchEnd { x: 302, y: 421 }),
    // Window loses focus for a while.
    (2_000, InputEvent::Suspend),
    (3_500, InputEvent::Resume),
    // Short drag, snaps back.
    (4_500, InputEvent::TouchStart { x: 320, y: 400 }),
    (4_550, InputEvent::TouchMove { x: 290, y: 402 }),
    (4_600, InputEvent::TouchEnd { x: 290, y: 402 }),
    // Mostly vertical drag, ignored.
    (5_500, InputEvent::TouchStart { x: 200, y: 400 }),
    (5_550, InputEvent::TouchMove { x: 220, y: 470 }),
    (5_600, InputEvent::TouchEnd { x: 225, y: 520 }),
    // Full swipe left: ana -> ben.
    (6_200, InputEvent::TouchStart { x: 330, y: 420 }),
    (6_250, InputEvent::TouchMove { x: 260, y: 424 }),
    (6_300, InputEvent::TouchMove { x: 190, y: 428 }),
    (6_350, InputEvent::TouchEnd { x: 190, y: 428 }),
    // Tap on the left half at ben's first story: back to ana.
    (8_000, InputEvent::TouchStart { x: 40, y: 400 }),
    (8_050, InputEvent::TouchEnd { x: 40, y: 400 }),
    // Swipe right at the first user: nothing to go back to.
    (9_000, InputEvent::TouchStart { x: 60, y: 400 }),
    (9_050, InputEvent::TouchMove { x: 180, y: 404 }),
    (9_100, InputEvent::TouchEnd { x: 180, y: 404 }),
    // Stray cancel with no touch in flight; playback then runs out.
    (9_400, InputEvent::TouchCancel),
];
