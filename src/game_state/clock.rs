//! Per-side countdown clocks in whole seconds.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::DEFAULT_CLOCK_SECONDS;
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    white: u32,
    black: u32,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(DEFAULT_CLOCK_SECONDS)
    }
}

impl Clock {
    pub const fn new(initial_seconds: u32) -> Self {
        Self {
            white: initial_seconds,
            black: initial_seconds,
        }
    }

    #[inline]
    pub const fn remaining(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Takes one second from `color`, stopping at zero.
    pub fn tick(&mut self, color: Color) {
        let slot = match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        *slot = slot.saturating_sub(1);
    }

    pub const fn is_flagged(&self) -> bool {
        self.white == 0 || self.black == 0
    }

    /// The side whose time ran out, white first if both did.
    pub const fn flagged_color(&self) -> Option<Color> {
        if self.white == 0 {
            Some(Color::White)
        } else if self.black == 0 {
            Some(Color::Black)
        } else {
            None
        }
    }
}
