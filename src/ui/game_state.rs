//! Game state for the board window
//!
//! Wraps a [`Game`] and an [`Opponent`]. The opponent answers once the
//! pacing delay has passed, checked on every frame, so the window never
//! blocks.

use std::time::{Duration, Instant};

use crate::board::{Pos, Side};
use crate::engine::{Decision, Opponent};
use crate::error::PlayError;
use crate::game::{Event, Game};
use crate::rules::{winning_line, Line, Outcome};

pub struct GameState {
    pub game: Game,
    opponent: Opponent,
    pacing: Duration,
    seed: Option<u64>,
    /// When the opponent is allowed to move
    opponent_due: Option<Instant>,
    pub last_decision: Option<Decision>,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(pacing: Duration, seed: Option<u64>) -> Self {
        Self {
            game: Game::new(),
            opponent: make_opponent(seed),
            pacing,
            seed,
            opponent_due: None,
            last_decision: None,
            message: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.pacing, self.seed);
    }

    pub fn is_human_turn(&self) -> bool {
        !self.game.is_over() && self.game.turn() == Side::PlayerA
    }

    pub fn is_opponent_waiting(&self) -> bool {
        self.opponent_due.is_some()
    }

    /// Time left before the opponent moves
    pub fn opponent_remaining(&self) -> Option<Duration> {
        self.opponent_due
            .map(|due| due.saturating_duration_since(Instant::now()))
    }

    pub fn winning_line(&self) -> Option<Line> {
        winning_line(self.game.board()).map(|(_, line)| line)
    }

    pub fn status_text(&self) -> String {
        match self.game.outcome() {
            Outcome::Ongoing if self.is_human_turn() => Event::HumanTurn.to_string(),
            Outcome::Ongoing => Event::OpponentTurn.to_string(),
            outcome => Event::Finished(outcome).to_string(),
        }
    }

    /// Human click on a square
    pub fn try_place(&mut self, pos: Pos) -> Result<(), String> {
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        match self.game.play_at(pos) {
            Ok(outcome) => {
                self.message = None;
                if !outcome.is_terminal() {
                    self.opponent_due = Some(Instant::now() + self.pacing);
                }
                Ok(())
            }
            Err(PlayError::Move(err)) => {
                log::warn!("rejected click: {err}");
                Err(Event::InvalidSquare.to_string())
            }
            Err(err) => Err(err.to_string()),
        }
    }

    /// Let the opponent move if its delay has passed
    pub fn poll_opponent(&mut self) {
        let Some(due) = self.opponent_due else {
            return;
        };
        if Instant::now() < due {
            return;
        }
        self.opponent_due = None;

        let result = self
            .opponent
            .choose_move(self.game.board())
            .map_err(|e| e.to_string())
            .and_then(|decision| {
                self.game
                    .play_at(decision.pos)
                    .map(|_| decision)
                    .map_err(|e| e.to_string())
            });

        match result {
            Ok(decision) => self.last_decision = Some(decision),
            Err(msg) => {
                log::error!("opponent failed: {msg}");
                self.message = Some(msg);
            }
        }
    }
}

fn make_opponent(seed: Option<u64>) -> Opponent {
    match seed {
        Some(seed) => Opponent::with_seed(Side::PlayerB, seed),
        None => Opponent::new(Side::PlayerB),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_click_then_opponent_answers() {
        let mut state = GameState::new(Duration::ZERO, Some(1));
        state.try_place(Pos::new(0, 0)).unwrap();
        assert!(state.is_opponent_waiting());
        assert!(!state.is_human_turn());
        assert!(state.try_place(Pos::new(1, 0)).is_err());

        state.poll_opponent();
        assert!(!state.is_opponent_waiting());
        assert!(state.is_human_turn());
        assert_eq!(state.game.board().get(Pos::new(2, 2)), Cell::PlayerB);
    }

    #[test]
    fn test_occupied_click_is_rejected() {
        let mut state = GameState::new(Duration::ZERO, Some(1));
        state.try_place(Pos::new(0, 0)).unwrap();
        state.poll_opponent();
        assert_eq!(
            state.try_place(Pos::new(2, 2)),
            Err("Invalid square.".to_string())
        );
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_opponent_waits_for_pacing() {
        let mut state = GameState::new(Duration::from_secs(60), Some(1));
        state.try_place(Pos::new(0, 0)).unwrap();
        state.poll_opponent();
        assert!(state.is_opponent_waiting());
        assert_eq!(state.game.move_count(), 1);
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::new(Duration::ZERO, Some(1));
        state.try_place(Pos::new(0, 0)).unwrap();
        state.reset();
        assert_eq!(state.game.move_count(), 0);
        assert!(state.is_human_turn());
        assert_eq!(state.status_text(), "It is your turn.");
    }
}
