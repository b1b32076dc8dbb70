//! Dice sources.
//!
//! A die is anything that produces one positive face per call. The engine
//! never reaches for a global RNG: fair dice own a `GameRng`, and tests use
//! `TestDice` to replay a fixed sequence.
//!
//! ```
//! use rust_hog::core::{Dice, TestDice};
//!
//! let mut dice = TestDice::new(&[3, 1, 5, 6]).unwrap();
//! let faces: Vec<u32> = (0..6).map(|_| dice.roll().get()).collect();
//! assert_eq!(faces, vec![3, 1, 5, 6, 3, 1]);
//! ```

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::error::{HogError, Result};
use super::rng::GameRng;

/// A source of dice outcomes.
///
/// Outcomes are `NonZeroU32`, so a face of zero cannot be produced.
pub trait Dice: Send {
    /// Roll once.
    fn roll(&mut self) -> NonZeroU32;
}

impl<D: Dice + ?Sized> Dice for Box<D> {
    fn roll(&mut self) -> NonZeroU32 {
        (**self).roll()
    }
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn roll(&mut self) -> NonZeroU32 {
        (**self).roll()
    }
}

/// The two dice configurations of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiceKind {
    /// Four-sided dice, used during Hog Wild rounds.
    FourSided,
    /// Regular six-sided dice.
    SixSided,
}

impl DiceKind {
    /// Number of faces.
    #[must_use]
    pub const fn sides(self) -> u32 {
        match self {
            DiceKind::FourSided => 4,
            DiceKind::SixSided => 6,
        }
    }
}

impl std::fmt::Display for DiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Fair die with a fixed number of sides.
#[derive(Clone, Debug)]
pub struct FairDice {
    sides: NonZeroU32,
    rng: GameRng,
}

impl FairDice {
    /// Create a fair die. Panics if `sides` is zero.
    pub fn new(sides: u32, rng: GameRng) -> Self {
        let sides = NonZeroU32::new(sides).expect("dice must have at least one side");
        Self { sides, rng }
    }

    /// Four-sided die.
    pub fn four_sided(rng: GameRng) -> Self {
        Self::new(DiceKind::FourSided.sides(), rng)
    }

    /// Six-sided die.
    pub fn six_sided(rng: GameRng) -> Self {
        Self::new(DiceKind::SixSided.sides(), rng)
    }

    /// Number of sides.
    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides.get()
    }
}

impl Dice for FairDice {
    fn roll(&mut self) -> NonZeroU32 {
        // gen_range(1..=sides) never yields zero
        NonZeroU32::new(self.rng.roll(self.sides.get())).unwrap_or(NonZeroU32::MIN)
    }
}

/// Deterministic die that cycles through a fixed sequence of outcomes.
#[derive(Clone, Debug)]
pub struct TestDice {
    outcomes: Vec<NonZeroU32>,
    index: usize,
}

impl TestDice {
    /// Create test dice from a non-empty sequence of positive outcomes.
    pub fn new(outcomes: &[u32]) -> Result<Self> {
        if outcomes.is_empty() {
            return Err(HogError::EmptyDice);
        }

        let outcomes = outcomes
            .iter()
            .enumerate()
            .map(|(position, &face)| NonZeroU32::new(face).ok_or(HogError::ZeroFace { position }))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { outcomes, index: 0 })
    }

    /// Dice that always return the same outcome.
    pub fn constant(face: NonZeroU32) -> Self {
        Self {
            outcomes: vec![face],
            index: 0,
        }
    }
}

impl Dice for TestDice {
    fn roll(&mut self) -> NonZeroU32 {
        let face = self.outcomes[self.index];
        self.index = (self.index + 1) % self.outcomes.len();
        face
    }
}

/// One die per dice configuration, handed to the game loop explicitly.
pub struct DiceRack {
    four: Box<dyn Dice>,
    six: Box<dyn Dice>,
}

impl DiceRack {
    /// Build a rack from arbitrary dice.
    pub fn new(four: impl Dice + 'static, six: impl Dice + 'static) -> Self {
        Self {
            four: Box::new(four),
            six: Box::new(six),
        }
    }

    /// Fair four- and six-sided dice on independent forks of `rng`.
    pub fn fair(mut rng: GameRng) -> Self {
        let four = FairDice::four_sided(rng.fork());
        let six = FairDice::six_sided(rng.fork());
        Self::new(four, six)
    }

    /// The same scripted sequence for both configurations, each cycling
    /// independently.
    pub fn scripted(dice: TestDice) -> Self {
        Self::new(dice.clone(), dice)
    }

    /// The die for a configuration.
    pub fn get(&mut self, kind: DiceKind) -> &mut dyn Dice {
        match kind {
            DiceKind::FourSided => self.four.as_mut(),
            DiceKind::SixSided => self.six.as_mut(),
        }
    }
}

impl std::fmt::Debug for DiceRack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiceRack").finish_non_exhaustive()
    }
}
