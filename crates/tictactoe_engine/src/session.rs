use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};
use tictactoe_core::{completed_lines, Board, GameError, Mark, Outcome, Position};

use crate::{ai::select_move, Difficulty};

/// Whose input the session is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    AwaitingHumanMove,
    AwaitingAiMove,
    GameOver(Outcome),
}

/// One human-vs-computer game, restarted in place.
///
/// The session owns the board and is the only thing that mutates it: the
/// human's moves place X, the computer's moves place O. Moves that do not fit
/// the current state are ignored rather than reported.
pub struct GameSession {
    board: Board,
    difficulty: Difficulty,
    // Requested mid-game; takes effect on the next reset.
    pending_difficulty: Option<Difficulty>,
    state: SessionState,
    rng: StdRng,
}

impl GameSession {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::from_parts(
            Board::new(),
            difficulty,
            StdRng::from_entropy(),
            SessionState::AwaitingHumanMove,
        )
    }

    /// Same as `new`, but the computer's random choices are reproducible.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::from_parts(
            Board::new(),
            difficulty,
            StdRng::seed_from_u64(seed),
            SessionState::AwaitingHumanMove,
        )
    }

    /// Resumes from an existing position, working out whose turn it is from
    /// the mark counts. Positions no legal game reaches are rejected.
    pub fn from_board(board: Board, difficulty: Difficulty, seed: u64) -> Result<Self, GameError> {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        let x_lines = completed_lines(&board, Mark::X);
        let o_lines = completed_lines(&board, Mark::O);
        let x_moved_last = x == o + 1;

        let state = match board.outcome() {
            _ if x_lines > 0 && o_lines > 0 => return Err(GameError::InconsistentBoard { x, o }),
            // X moves first, so X's winning move leaves X one mark ahead and
            // O's leaves the counts level.
            Outcome::Win(Mark::X) if x_moved_last => SessionState::GameOver(Outcome::Win(Mark::X)),
            Outcome::Win(Mark::O) if x == o => SessionState::GameOver(Outcome::Win(Mark::O)),
            Outcome::Draw if x_moved_last => SessionState::GameOver(Outcome::Draw),
            Outcome::InProgress if x == o => SessionState::AwaitingHumanMove,
            Outcome::InProgress if x_moved_last => SessionState::AwaitingAiMove,
            _ => return Err(GameError::InconsistentBoard { x, o }),
        };
        Ok(Self::from_parts(board, difficulty, StdRng::seed_from_u64(seed), state))
    }

    fn from_parts(board: Board, difficulty: Difficulty, rng: StdRng, state: SessionState) -> Self {
        Self {
            board,
            difficulty,
            pending_difficulty: None,
            state,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Difficulty requested for the next game, if it differs from the
    /// current one.
    pub fn pending_difficulty(&self) -> Option<Difficulty> {
        self.pending_difficulty
    }

    /// Changes the difficulty. Before the first move or after the game has
    /// ended it applies at once; mid-game it waits for the next `reset`.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        let between_games = matches!(self.state, SessionState::GameOver(_))
            || (self.state == SessionState::AwaitingHumanMove && self.board == Board::new());

        if between_games {
            if self.difficulty != difficulty {
                info!("difficulty set to {}", difficulty);
            }
            self.difficulty = difficulty;
            self.pending_difficulty = None;
        } else if difficulty == self.difficulty {
            self.pending_difficulty = None;
        } else {
            info!("difficulty {} will apply from the next game", difficulty);
            self.pending_difficulty = Some(difficulty);
        }
    }

    /// Places the human's X. Returns `false` when the move was ignored: not
    /// the human's turn, or the square is off the board or already marked.
    pub fn apply_human_move(&mut self, pos: Position) -> bool {
        if self.state != SessionState::AwaitingHumanMove {
            debug!("ignoring human move at {} while {:?}", pos, self.state);
            return false;
        }
        if let Err(err) = self.board.place(pos, Mark::HUMAN) {
            debug!("ignoring human move: {}", err);
            return false;
        }
        self.advance(SessionState::AwaitingAiMove);
        true
    }

    /// Lets the computer place its O. Returns the square it chose, or `None`
    /// when it was not the computer's turn or no square was left.
    pub fn play_ai_move(&mut self) -> Option<Position> {
        if self.state != SessionState::AwaitingAiMove {
            debug!("ai move requested while {:?}", self.state);
            return None;
        }

        let pos = select_move(&self.board, self.difficulty, &mut self.rng)?;
        if let Err(err) = self.board.place(pos, Mark::AI) {
            // The selector only returns empty squares.
            debug!("ai move rejected: {}", err);
            return None;
        }
        self.advance(SessionState::AwaitingHumanMove);
        Some(pos)
    }

    /// A full turn: the human's move followed at once by the computer's
    /// reply, unless the human's move ended the game. Returns `false` when
    /// the human's move was ignored.
    pub fn play_turn(&mut self, pos: Position) -> bool {
        if !self.apply_human_move(pos) {
            return false;
        }
        if self.state == SessionState::AwaitingAiMove {
            self.play_ai_move();
        }
        true
    }

    /// Starts a fresh game, switching to any difficulty requested mid-game.
    pub fn reset(&mut self) {
        if let Some(difficulty) = self.pending_difficulty.take() {
            self.difficulty = difficulty;
        }
        info!("new game ({})", self.difficulty);
        self.board = Board::new();
        self.state = SessionState::AwaitingHumanMove;
    }

    fn advance(&mut self, next: SessionState) {
        let outcome = self.board.outcome();
        self.state = if outcome.is_terminal() {
            info!("game over: {}", outcome);
            debug!("final board:\n{}", self.board);
            SessionState::GameOver(outcome)
        } else {
            next
        };
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}
