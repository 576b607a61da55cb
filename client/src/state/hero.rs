//! Hero carousel position and transition direction.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

/// Auto-advance period for the hero carousel.
pub const HERO_INTERVAL_MS: u64 = 6000;

/// Which way the last transition moved; drives the slide-in side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// CSS modifier for the entering slide.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Forward => "hero__slide--from-right",
            Self::Backward => "hero__slide--from-left",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroAction {
    /// Timer-driven advance.
    Tick,
    Next,
    Prev,
    /// Jump to an indicator; direction follows index order.
    Goto(usize),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeroCarousel {
    pub current: usize,
    pub len: usize,
    pub direction: Direction,
    /// Bumped on manual navigation so the auto-advance timer restarts.
    pub manual_seq: u64,
}

impl HeroCarousel {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { current: 0, len, direction: Direction::Forward, manual_seq: 0 }
    }

    pub fn dispatch(&mut self, action: HeroAction) {
        *self = reduce(*self, action);
    }
}

/// Owner of the auto-advance loop: at most one loop runs per `manual_seq`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutoAdvance {
    armed: Option<u64>,
}

impl AutoAdvance {
    /// Claim the loop for `seq`. Returns `true` only when a new loop must be
    /// started; repeat calls with the running sequence return `false`.
    pub fn arm(&mut self, seq: u64) -> bool {
        if self.armed == Some(seq) {
            return false;
        }
        self.armed = Some(seq);
        true
    }
}

/// Whether the loop started for `seq` still owns the carousel.
#[must_use]
pub fn loop_is_current(state: &HeroCarousel, seq: u64) -> bool {
    state.manual_seq == seq
}

#[must_use]
pub fn reduce(mut state: HeroCarousel, action: HeroAction) -> HeroCarousel {
    if state.len == 0 {
        state.current = 0;
        return state;
    }
    match action {
        HeroAction::Tick => {
            state.current = (state.current + 1) % state.len;
            state.direction = Direction::Forward;
        }
        HeroAction::Next => {
            state.current = (state.current + 1) % state.len;
            state.direction = Direction::Forward;
            state.manual_seq += 1;
        }
        HeroAction::Prev => {
            state.current = (state.current + state.len - 1) % state.len;
            state.direction = Direction::Backward;
            state.manual_seq += 1;
        }
        HeroAction::Goto(index) => {
            let target = index % state.len;
            if target != state.current {
                state.direction = if target > state.current { Direction::Forward } else { Direction::Backward };
                state.current = target;
                state.manual_seq += 1;
            }
        }
    }
    state
}
