//! Dice.
//!
//! [`Dice`] sums `N` independent fair six-sided dice. Rule sets only see
//! the [`Roll`] trait, so tests can substitute [`LoadedDice`] and script
//! the exact sequence of values a session will see.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Error, Result};

use super::rng::GameRng;

/// Faces on every die.
pub const DIE_SIDES: u32 = 6;

/// Anything that can produce a dice total.
pub trait Roll {
    /// Roll and return the total.
    fn roll(&mut self) -> u32;
}

/// One six-sided die. Remembers its last value for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    last: Option<u32>,
}

impl Die {
    fn roll(&mut self, rng: &mut GameRng) -> u32 {
        let value = rng.gen_range(1..=DIE_SIDES);
        self.last = Some(value);
        value
    }

    /// Value shown after the most recent roll.
    #[must_use]
    pub fn last_value(&self) -> Option<u32> {
        self.last
    }
}

/// A fixed set of dice rolled together.
#[derive(Clone, Debug)]
pub struct Dice {
    dice: SmallVec<[Die; 2]>,
    rng: GameRng,
}

impl Dice {
    /// `count` dice seeded from OS entropy.
    pub fn new(count: usize) -> Result<Self> {
        Self::with_rng(count, GameRng::from_entropy())
    }

    /// `count` dice with a reproducible sequence.
    pub fn seeded(count: usize, seed: u64) -> Result<Self> {
        Self::with_rng(count, GameRng::new(seed))
    }

    fn with_rng(count: usize, rng: GameRng) -> Result<Self> {
        if count == 0 {
            return Err(Error::InvalidDiceCount(count));
        }
        Ok(Self {
            dice: SmallVec::from_elem(Die::default(), count),
            rng,
        })
    }

    /// Number of dice.
    #[must_use]
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// Largest total a single roll can produce.
    #[must_use]
    pub fn max_total(&self) -> u32 {
        self.dice.len() as u32 * DIE_SIDES
    }

    /// Individual values from the most recent roll.
    pub fn last_values(&self) -> impl Iterator<Item = Option<u32>> + '_ {
        self.dice.iter().map(Die::last_value)
    }
}

impl Roll for Dice {
    fn roll(&mut self) -> u32 {
        let rng = &mut self.rng;
        self.dice.iter_mut().map(|die| die.roll(rng)).sum()
    }
}

/// Scripted rolls, replayed in order and then cycled.
///
/// ```
/// use rust_boardgame::core::{LoadedDice, Roll};
///
/// let mut dice = LoadedDice::new([6, 1]);
/// assert_eq!(dice.roll(), 6);
/// assert_eq!(dice.roll(), 1);
/// assert_eq!(dice.roll(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct LoadedDice {
    script: VecDeque<u32>,
}

impl LoadedDice {
    /// An empty script rolls 1 forever.
    pub fn new(script: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl Roll for LoadedDice {
    fn roll(&mut self) -> u32 {
        match self.script.pop_front() {
            Some(value) => {
                self.script.push_back(value);
                value
            }
            None => 1,
        }
    }
}
