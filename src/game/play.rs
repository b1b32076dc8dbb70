//! The game loop.
//!
//! Each round:
//! 1. pick the dice from the current scores (Hog Wild)
//! 2. ask the mover's strategy for a roll count
//! 3. resolve the turn
//! 4. credit the points (free bacon goes to the configured recipient)
//! 5. exchange the scores on a Swine Swap
//! 6. pass the move to the other player
//!
//! The goal is checked only at the top of a round, after any swap. A swap
//! can therefore push the mover below the goal and the opponent above it.
//!
//! Termination relies on scores growing. Contrived strategy pairs can keep
//! swapping forever; nothing here guards against that.

use log::{debug, trace};

use crate::core::{BonusRecipient, DiceRack, GameState, HogConfig, Player, Result};
use crate::rules::{is_swap, resolve_turn, select_dice};
use crate::strategy::Strategy;

use super::round::Round;

/// A game in progress between two strategies.
pub struct Game<'a> {
    state: GameState,
    config: HogConfig,
    strategies: [&'a dyn Strategy; 2],
    rack: &'a mut DiceRack,
}

impl<'a> Game<'a> {
    /// Set up a game. `first` moves first.
    pub fn new(
        first: &'a dyn Strategy,
        second: &'a dyn Strategy,
        rack: &'a mut DiceRack,
        config: HogConfig,
    ) -> Self {
        Self {
            state: GameState::new(&config),
            config,
            strategies: [first, second],
            rack,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play one round. Returns `None` once the game is finished.
    pub fn step(&mut self) -> Result<Option<Round>> {
        if self.state.is_finished() {
            return Ok(None);
        }

        let player = self.state.active_player;
        let opponent = player.other();
        let (score, opponent_score) = self.state.scores.perspective(player);

        let dice = select_dice(score, opponent_score);
        let num_rolls = self.strategies[player.index()].num_rolls(score, opponent_score);
        let turn = resolve_turn(num_rolls, opponent_score, self.rack.get(dice), self.state.goal)?;

        let (recipient, awarded) = self.award(player, num_rolls, turn.points, turn.is_pig_out());
        self.state.scores[recipient] += awarded;

        let (first, second) = self.state.scores.pair();
        let swapped = is_swap(first, second);
        if swapped {
            self.state.scores.swap();
        }

        self.state.active_player = opponent;
        self.state.rounds += 1;

        trace!(
            "round {}: {} rolled {} {} -> {} to {}{}, scores {:?}",
            self.state.rounds,
            player,
            num_rolls,
            dice,
            awarded,
            recipient,
            if swapped { " (swap)" } else { "" },
            self.state.scores.pair()
        );

        Ok(Some(Round {
            number: self.state.rounds,
            player,
            dice,
            num_rolls,
            turn,
            recipient,
            awarded,
            swapped,
            scores: self.state.scores,
        }))
    }

    /// Play until the game is finished and return the final scores,
    /// first player first.
    pub fn run(mut self) -> Result<(u32, u32)> {
        while self.step()?.is_some() {}

        debug!(
            "game finished after {} rounds with scores {:?}",
            self.state.rounds,
            self.state.scores.pair()
        );
        Ok(self.state.scores.pair())
    }

    fn award(&self, player: Player, num_rolls: u32, points: u32, pig_out: bool) -> (Player, u32) {
        if num_rolls == 0 {
            let recipient = match self.config.bonus_recipient {
                BonusRecipient::Opponent => player.other(),
                BonusRecipient::Mover => player,
            };
            (recipient, points)
        } else if pig_out && self.config.pig_out_gift {
            (player.other(), num_rolls)
        } else {
            (player, points)
        }
    }
}

/// Play a full game and return the final scores, first player first.
///
/// ```
/// use rust_hog::core::{DiceRack, GameRng, HogConfig};
/// use rust_hog::game::play;
/// use rust_hog::strategy::AlwaysRoll;
///
/// let mut rack = DiceRack::fair(GameRng::new(7));
/// let (first, second) = play(&AlwaysRoll(5), &AlwaysRoll(5), &mut rack, &HogConfig::default()).unwrap();
/// assert!(first.max(second) >= 100);
/// ```
pub fn play(
    first: &dyn Strategy,
    second: &dyn Strategy,
    rack: &mut DiceRack,
    config: &HogConfig,
) -> Result<(u32, u32)> {
    Game::new(first, second, rack, config.clone()).run()
}

/// Which player ends a game with the strictly higher score; ties go to the
/// second player.
pub fn winner(
    first: &dyn Strategy,
    second: &dyn Strategy,
    rack: &mut DiceRack,
    config: &HogConfig,
) -> Result<Player> {
    let (score0, score1) = play(first, second, rack, config)?;
    Ok(if score0 > score1 { Player::First } else { Player::Second })
}
