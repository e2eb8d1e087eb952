//! Cumulative match score and player names.

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub name: String,
    pub value: u32,
}

/// Per-color scores, indexed by `Color::index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    scores: [Score; 2],
}

impl Scoreboard {
    pub fn new(white_name: &str, black_name: &str) -> Self {
        let score = |name: &str| Score {
            name: name.to_owned(),
            value: 0,
        };
        Self {
            scores: [score(white_name), score(black_name)],
        }
    }

    #[inline]
    pub fn score(&self, color: Color) -> &Score {
        &self.scores[color.index()]
    }

    #[inline]
    pub fn name(&self, color: Color) -> &str {
        &self.scores[color.index()].name
    }

    pub fn award(&mut self, color: Color) {
        self.scores[color.index()].value += 1;
    }

    /// Zeroes both scores; names are kept.
    pub fn reset(&mut self) {
        for score in &mut self.scores {
            score.value = 0;
        }
    }

    pub fn set_name(&mut self, color: Color, name: &str) {
        self.scores[color.index()].name = name.to_owned();
    }
}
