//! Turn order and terminal-state tracking for one game session.

use super::board::{Board, LineKind};
use super::observer::{GameObserver, RoundEvent};
use super::rules::draw::{MAX_ROUNDS, is_draw};
use super::rules::win::winning_line;
use super::types::{
    Cell, DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, GameResult, Marker, Player, Seat,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The game already has a result.
    #[display("the game is over")]
    GameOver,
    /// Row or column outside 0-2.
    #[display("that cell is off the board")]
    OutOfBounds,
    /// Someone already claimed the cell.
    #[display("you can't place here")]
    CellClaimed,
}

/// What a call to [`GameController::play_round`] did.
///
/// Purely informational: an ignored move leaves the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Nothing changed.
    Ignored(Rejection),
    /// The move was accepted and the turn passed.
    Continued,
    /// The move completed a line.
    Won,
    /// The move filled the board without a winner.
    Drawn,
}

impl RoundOutcome {
    /// Whether the move changed the game.
    pub fn is_accepted(self) -> bool {
        !matches!(self, RoundOutcome::Ignored(_))
    }

    /// Whether the move ended the game.
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundOutcome::Won | RoundOutcome::Drawn)
    }
}

/// Serializable view of a whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// First player (marker X).
    pub player_one: Player,
    /// Second player (marker O).
    pub player_two: Player,
    /// Player whose turn it is.
    pub current_player: Player,
    /// Cells in row-major order.
    pub cells: [[Cell; 3]; 3],
    /// Accepted moves so far.
    pub round_count: u8,
    /// Terminal result, if reached.
    pub result: Option<GameResult>,
    /// Result line, if any.
    pub winning_line: Option<LineKind>,
    /// Whether further moves are ignored.
    pub is_over: bool,
}

/// Owns the board, both players and the turn/result state of one game.
///
/// States: awaiting a move, then won or drawn. Only
/// [`reset_game`](Self::reset_game) and
/// [`create_players`](Self::create_players) leave a terminal state.
pub struct GameController {
    board: Board,
    player_one: Player,
    player_two: Player,
    current: Seat,
    round_count: u8,
    result: Option<GameResult>,
    winning_line: Option<LineKind>,
    is_over: bool,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameController {
    /// Creates a session with the default player names.
    #[instrument]
    pub fn new() -> Self {
        Self::with_players(DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO)
    }

    /// Creates a session with the given names; blank names fall back to defaults.
    #[instrument]
    pub fn with_players(name_one: &str, name_two: &str) -> Self {
        let mut controller = Self {
            board: Board::new(),
            player_one: Player::new(DEFAULT_PLAYER_ONE, Marker::X),
            player_two: Player::new(DEFAULT_PLAYER_TWO, Marker::O),
            current: Seat::One,
            round_count: 0,
            result: None,
            winning_line: None,
            is_over: false,
            observers: Vec::new(),
        };
        controller.seat_players(name_one, name_two);
        controller
    }

    /// Registers an observer for round and reset notifications.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Seats two new players (X then O) and starts a fresh game.
    #[instrument(skip(self))]
    pub fn create_players(&mut self, name_one: &str, name_two: &str) {
        self.seat_players(name_one, name_two);
        self.restart();
        self.notify_reset();
    }

    fn seat_players(&mut self, name_one: &str, name_two: &str) {
        self.player_one = Player::or_default_name(Some(name_one), DEFAULT_PLAYER_ONE, Marker::X);
        self.player_two = Player::or_default_name(Some(name_two), DEFAULT_PLAYER_TWO, Marker::O);
        info!(
            player_one = %self.player_one.name(),
            player_two = %self.player_two.name(),
            "Players seated"
        );
    }

    /// Plays the current player's move at `(row, col)`.
    ///
    /// Ignored when the game is over, the coordinates are off the board,
    /// or the cell is taken. Otherwise the round count goes up, the cell
    /// is claimed, the result is checked, and on a non-terminal move the
    /// turn passes.
    #[instrument(skip(self), fields(player = %self.current_player().name()))]
    pub fn play_round(&mut self, row: usize, col: usize) -> RoundOutcome {
        if self.is_over {
            debug!("Move after game over ignored");
            return RoundOutcome::Ignored(Rejection::GameOver);
        }
        let Some(cell) = self.board.cell(row, col) else {
            debug!("Move off the board ignored");
            return RoundOutcome::Ignored(Rejection::OutOfBounds);
        };
        if cell.is_claimed() {
            debug!("You can't place here.");
            return RoundOutcome::Ignored(Rejection::CellClaimed);
        }

        let seat = self.current;
        self.round_count += 1;
        info!(round = self.round_count, "{} has made their decision!", self.player(seat).name());
        self.board.claim_cell(row, col, seat.marker());

        let outcome = if self.check_for_win(seat, row, col) {
            match self.result.as_ref().and_then(GameResult::winner) {
                Some(_) => RoundOutcome::Won,
                None => RoundOutcome::Drawn,
            }
        } else {
            self.switch_player_turn();
            RoundOutcome::Continued
        };

        let event = RoundEvent::new(
            self.player(seat).clone(),
            row,
            col,
            self.round_count,
            outcome,
            self.board.clone(),
        );
        for observer in &mut self.observers {
            observer.round_played(&event);
        }
        outcome
    }

    /// Records a win or draw after `seat` claimed `(row, col)`.
    ///
    /// A win needs a line through the cell whose cells owned by `seat`
    /// sum to 15. With no win on the ninth round the game is a draw.
    /// Returns whether the game ended.
    #[instrument(skip(self))]
    pub fn check_for_win(&mut self, seat: Seat, row: usize, col: usize) -> bool {
        if let Some(line) = winning_line(&self.board, seat.marker(), row, col) {
            let winner = self.player(seat).clone();
            info!(winner = %winner.name(), %line, "{}", GameResult::Win(winner.clone()));
            self.result = Some(GameResult::Win(winner));
            self.winning_line = Some(line);
            self.is_over = true;
            return true;
        }
        if self.round_count == MAX_ROUNDS {
            debug_assert!(is_draw(&self.board), "ninth round left the board unsettled");
            info!("{}", GameResult::Draw);
            self.result = Some(GameResult::Draw);
            self.is_over = true;
            return true;
        }
        false
    }

    /// Passes the turn to the other player.
    #[instrument(skip(self))]
    pub fn switch_player_turn(&mut self) {
        self.current = self.current.other();
        debug!(next = %self.current_player().name(), "Turn passed");
    }

    /// Clears the board and returns to player one's first move.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        info!("Resetting game");
        self.restart();
        self.notify_reset();
    }

    fn restart(&mut self) {
        self.round_count = 0;
        self.current = Seat::One;
        self.result = None;
        self.winning_line = None;
        self.is_over = false;
        self.board.clear();
    }

    fn notify_reset(&mut self) {
        for observer in &mut self.observers {
            observer.game_reset();
        }
    }

    fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::One => &self.player_one,
            Seat::Two => &self.player_two,
        }
    }

    /// Player whose move is next.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Seat whose move is next.
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Whether the game has reached a win or draw.
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// Terminal result, if any.
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Result message, or an empty string while the game is running.
    pub fn result_message(&self) -> String {
        self.result.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    /// Line completed by the winner.
    pub fn winning_line(&self) -> Option<LineKind> {
        self.winning_line
    }

    /// Accepted moves this game.
    pub fn round_count(&self) -> u8 {
        self.round_count
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// First player (X).
    pub fn player_one(&self) -> &Player {
        &self.player_one
    }

    /// Second player (O).
    pub fn player_two(&self) -> &Player {
        &self.player_two
    }

    /// Copies the session into a serializable value.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            player_one: self.player_one.clone(),
            player_two: self.player_two.clone(),
            current_player: self.current_player().clone(),
            cells: *self.board.cells(),
            round_count: self.round_count,
            result: self.result.clone(),
            winning_line: self.winning_line,
            is_over: self.is_over,
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("board", &self.board)
            .field("player_one", &self.player_one)
            .field("player_two", &self.player_two)
            .field("current", &self.current)
            .field("round_count", &self.round_count)
            .field("result", &self.result)
            .field("is_over", &self.is_over)
            .field("observers", &self.observers.len())
            .finish()
    }
}
