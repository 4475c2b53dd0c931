// Animation token system.

use zoon::*;

pub const DURATION_NORMAL: u32 = 300;
pub const DURATION_SLOW: u32 = 500;

/// Stagger step between hero entrance elements, mirroring the original
/// 0.2s animation-delay ladder.
pub const ENTRANCE_STAGGER: u32 = 200;

pub fn transition_colors() -> impl Style<'static> {
    Transitions::new([
        Transition::property("background-color").duration(DURATION_NORMAL),
        Transition::property("border-color").duration(DURATION_NORMAL),
        Transition::property("color").duration(DURATION_NORMAL),
    ])
}

pub fn transition_transform() -> impl Style<'static> {
    Transitions::new([Transition::property("transform").duration(DURATION_NORMAL)])
}
