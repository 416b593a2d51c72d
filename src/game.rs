//! Game session and turn controller
//!
//! [`Game`] owns the board and the side to move; it is the only thing that
//! commits moves. [`Controller`] drives a session through
//! `HumanTurn -> OpponentTurn -> ... -> Terminal`, talking to the outside
//! world through [`InputProvider`], [`RenderSink`] and [`Pacer`].

use std::fmt;
use std::io;
use std::time::Duration;

use crate::board::{Board, Pos, Side};
use crate::engine::Opponent;
use crate::error::{ControlError, PlayError};
use crate::rules::{self, evaluate, Move, Outcome};

/// One game from the empty board to a result.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Side,
    outcome: Outcome,
    history: Vec<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Empty board, `PlayerA` to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Side::PlayerA,
            outcome: Outcome::Ongoing,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move. Unchanged once the game is over.
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Play `(row, col)` for the side to move and evaluate the result.
    ///
    /// A rejected move leaves the session exactly as it was.
    pub fn play(&mut self, row: usize, col: usize) -> Result<Outcome, PlayError> {
        if self.is_over() {
            return Err(PlayError::GameOver);
        }

        let side = self.turn;
        self.board = rules::apply(&self.board, row, col, side)?;
        self.history.push(Move::new(Pos::new(row as u8, col as u8), side));
        self.outcome = evaluate(&self.board);
        log::debug!(
            "move {}: {} at ({}, {}) -> {:?}",
            self.history.len(),
            side.name(),
            row,
            col,
            self.outcome
        );

        if !self.outcome.is_terminal() {
            self.turn = side.other();
        }
        Ok(self.outcome)
    }

    /// [`Game::play`] for a board position
    pub fn play_at(&mut self, pos: Pos) -> Result<Outcome, PlayError> {
        self.play(pos.row as usize, pos.col as usize)
    }
}

/// Where the controller is in the turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    HumanTurn,
    OpponentTurn,
    Terminal(Outcome),
}

impl Phase {
    /// Phase following a move, given the board's outcome and whose turn is next
    fn after(outcome: Outcome, next: Phase) -> Phase {
        if outcome.is_terminal() {
            Phase::Terminal(outcome)
        } else {
            next
        }
    }
}

/// A human move request answered by the input side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Zero-based coordinates, not yet validated against the board
    Square { row: usize, col: usize },
    /// Something that cannot name a square
    Rejected,
    /// No more input will come
    Closed,
}

/// Messages the controller asks the sink to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    HumanTurn,
    OpponentTurn,
    InvalidSquare,
    Finished(Outcome),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Event::HumanTurn => "It is your turn.",
            Event::OpponentTurn => "It is your opponent's turn.",
            Event::InvalidSquare => "Invalid square.",
            Event::Finished(Outcome::Won(Side::PlayerA)) => "You win!",
            Event::Finished(Outcome::Won(Side::PlayerB)) => "Your opponent wins!",
            Event::Finished(_) => "Draw!",
        };
        f.write_str(text)
    }
}

/// Supplies the human's moves.
pub trait InputProvider {
    fn request_move(&mut self) -> io::Result<Input>;
}

/// Shows the board and controller messages.
pub trait RenderSink {
    fn show_board(&mut self, board: &Board) -> io::Result<()>;

    fn announce(&mut self, event: Event) -> io::Result<()>;
}

/// Cosmetic pause before the opponent's move is shown.
pub trait Pacer {
    fn pause(&mut self);
}

/// Pacer that sleeps the current thread
#[derive(Debug, Clone, Copy)]
pub struct SleepPacer {
    delay: Duration,
}

impl SleepPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Pacer for SleepPacer {
    fn pause(&mut self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

/// Pacer that never waits
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pause(&mut self) {}
}

/// Runs a human-vs-opponent game to completion.
pub struct Controller<I, R, P> {
    game: Game,
    opponent: Opponent,
    input: I,
    sink: R,
    pacer: P,
    phase: Phase,
    announced: bool,
}

impl<I: InputProvider, R: RenderSink, P: Pacer> Controller<I, R, P> {
    /// Fresh game. The opponent must play `PlayerB`; the human moves first.
    pub fn new(opponent: Opponent, input: I, sink: R, pacer: P) -> Self {
        Self::resume(Game::new(), opponent, input, sink, pacer)
    }

    /// Pick up an existing session at whichever phase its state implies.
    pub fn resume(game: Game, opponent: Opponent, input: I, sink: R, pacer: P) -> Self {
        let phase = if game.is_over() {
            Phase::Terminal(game.outcome())
        } else if game.turn() == opponent.side() {
            Phase::OpponentTurn
        } else {
            Phase::HumanTurn
        };
        Self {
            game,
            opponent,
            input,
            sink,
            pacer,
            phase,
            announced: false,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Consume the controller, handing back its I/O ends
    pub fn into_parts(self) -> (Game, I, R, P) {
        (self.game, self.input, self.sink, self.pacer)
    }

    /// Play until the board shows a win or a draw.
    ///
    /// Once the outcome has been announced, later calls return it without
    /// touching the sink.
    pub fn run(&mut self) -> Result<Outcome, ControlError> {
        if let (Phase::Terminal(outcome), true) = (self.phase, self.announced) {
            return Ok(outcome);
        }
        if self.opponent.side() != Side::PlayerB {
            return Err(ControlError::OpponentSide(self.opponent.side()));
        }
        log::info!("new game");
        self.sink.show_board(self.game.board())?;

        loop {
            self.phase = match self.phase {
                Phase::HumanTurn => {
                    let outcome = self.human_turn()?;
                    Phase::after(outcome, Phase::OpponentTurn)
                }
                Phase::OpponentTurn => {
                    let outcome = self.opponent_turn()?;
                    Phase::after(outcome, Phase::HumanTurn)
                }
                Phase::Terminal(outcome) => {
                    log::info!("game over after {} moves: {:?}", self.game.move_count(), outcome);
                    self.sink.announce(Event::Finished(outcome))?;
                    self.announced = true;
                    return Ok(outcome);
                }
            };
        }
    }

    fn human_turn(&mut self) -> Result<Outcome, ControlError> {
        self.sink.announce(Event::HumanTurn)?;
        let outcome = loop {
            match self.input.request_move()? {
                Input::Square { row, col } => match self.game.play(row, col) {
                    Ok(outcome) => break outcome,
                    Err(PlayError::Move(err)) => {
                        log::warn!("rejected human move: {err}");
                        self.sink.announce(Event::InvalidSquare)?;
                    }
                    Err(err) => return Err(err.into()),
                },
                Input::Rejected => {
                    log::warn!("rejected unreadable human input");
                    self.sink.announce(Event::InvalidSquare)?;
                }
                Input::Closed => return Err(ControlError::InputClosed),
            }
        };
        self.sink.show_board(self.game.board())?;
        Ok(outcome)
    }

    fn opponent_turn(&mut self) -> Result<Outcome, ControlError> {
        self.sink.announce(Event::OpponentTurn)?;
        self.pacer.pause();
        let decision = self.opponent.choose_move(self.game.board())?;
        let outcome = self.game.play_at(decision.pos)?;
        self.sink.show_board(self.game.board())?;
        Ok(outcome)
    }
}
