//! Game state management for the checkers GUI
//!
//! Owns whose turn it is, applies human clicks and AI results to the board
//! and detects the end of the game. The AI runs on a worker thread and
//! hands its `MoveResult` back over a channel.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::board::{Board, Player, Pos};
use crate::config::{GameConfig, GameMode};
use crate::engine::{AIEngine, MoveResult};
use crate::rules::{self, Move};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Why the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// The loser has no pieces left
    NoPiecesLeft,
    /// The loser is to move but has no legal move
    NoMovesLeft,
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Player,
    pub reason: WinReason,
}

/// Position before a move, kept for undo
#[derive(Debug, Clone, Copy)]
struct Snapshot {
    board: Board,
    turn: Player,
    last_move: Option<Move>,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub config: GameConfig,
    pub current_turn: Player,
    pub selected: Option<Pos>,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Move>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
    history: Vec<Snapshot>,
}

impl GameState {
    /// New game from the starting position, Red to move
    pub fn new(config: GameConfig) -> Self {
        Self::with_position(config, Board::initial(), Player::Red)
    }

    /// New game from an arbitrary position
    pub fn with_position(config: GameConfig, board: Board, to_move: Player) -> Self {
        let mut state = Self {
            board,
            config,
            current_turn: to_move,
            selected: None,
            game_over: None,
            last_move: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
            history: Vec::new(),
        };
        state.game_over = state.detect_game_over();
        state
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    /// Number of moves played so far
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.config.mode {
            GameMode::PvE { human } => self.current_turn == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.config.ai_player() == Some(self.current_turn)
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Destinations for the selected piece, for highlighting
    pub fn selected_targets(&self) -> Vec<Pos> {
        self.selected
            .map(|from| rules::legal_moves(&self.board, from))
            .unwrap_or_default()
    }

    /// Handle a click on a board cell.
    ///
    /// Without a selection, clicking one of the mover's pieces selects it.
    /// With a selection, a legal destination plays the move, another own
    /// piece becomes the new selection, and the selected piece deselects.
    pub fn handle_click(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        let owned = self.board.get(pos).is_owned_by(self.current_turn);
        match self.selected.take() {
            Some(from) if from == pos => Ok(()),
            Some(_) if owned => {
                self.selected = Some(pos);
                Ok(())
            }
            Some(from) => {
                let outcome =
                    rules::apply_move(&self.board, from, pos).map_err(|err| err.to_string())?;
                debug!(player = %self.current_turn, mv = %outcome.mv, "human move");
                self.execute_move(outcome.board, outcome.mv);
                Ok(())
            }
            None if owned => {
                self.selected = Some(pos);
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Record a move (for both human and AI) and hand the turn over
    fn execute_move(&mut self, board: Board, mv: Move) {
        self.history.push(Snapshot {
            board: self.board,
            turn: self.current_turn,
            last_move: self.last_move,
        });

        self.board = board;
        self.last_move = Some(mv);
        self.selected = None;
        self.message = None;
        self.move_timer.stop();

        self.current_turn = self.current_turn.opponent();
        self.game_over = self.detect_game_over();

        if let Some(result) = self.game_over {
            debug!(winner = %result.winner, reason = ?result.reason, "game over");
        } else {
            self.move_timer.start();
        }
    }

    /// Win by capture first, then a blocked side to move
    fn detect_game_over(&self) -> Option<GameResult> {
        if let Some(winner) = rules::check_winner(&self.board) {
            return Some(GameResult {
                winner,
                reason: WinReason::NoPiecesLeft,
            });
        }
        if !rules::has_any_move(&self.board, self.current_turn) {
            return Some(GameResult {
                winner: self.current_turn.opponent(),
                reason: WinReason::NoMovesLeft,
            });
        }
        None
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board;
        let color = self.current_turn;
        let engine = AIEngine::with_config(self.config.algorithm, self.config.depth);

        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.get_move_with_stats(&board, color);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);

            match move_result.best_move {
                Some(mv) => self.execute_move(move_result.board, mv),
                None => self.message = Some("AI could not find a move".to_string()),
            }
            self.last_ai_result = Some(move_result);
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Undo last move
    ///
    /// In PvE, moves are taken back until the human is to move again.
    pub fn undo(&mut self) {
        if self.history.is_empty() || self.is_ai_thinking() {
            return;
        }

        while let Some(snapshot) = self.history.pop() {
            self.board = snapshot.board;
            self.current_turn = snapshot.turn;
            self.last_move = snapshot.last_move;
            if self.is_human_turn() {
                break;
            }
        }

        self.selected = None;
        self.message = None;
        self.game_over = self.detect_game_over();
        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::engine::SearchAlgorithm;

    fn pvp() -> GameState {
        GameState::new(GameConfig {
            mode: GameMode::PvP,
            ..GameConfig::default()
        })
    }

    fn wait_for_ai(state: &mut GameState) {
        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_ai_thinking() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
            state.check_ai_result();
        }
        assert!(!state.is_ai_thinking(), "AI did not answer in time");
    }

    #[test]
    fn test_red_moves_first() {
        let state = pvp();
        assert_eq!(state.current_turn, Player::Red);
        assert!(state.game_over.is_none());
        assert_eq!(state.move_count(), 0);
    }

    #[test]
    fn test_select_and_move() {
        let mut state = pvp();

        state.handle_click(Pos::new(5, 2)).unwrap();
        assert_eq!(state.selected, Some(Pos::new(5, 2)));
        assert_eq!(state.selected_targets(), vec![Pos::new(4, 1), Pos::new(4, 3)]);

        state.handle_click(Pos::new(4, 3)).unwrap();
        assert_eq!(state.board.get(Pos::new(4, 3)), Cell::RedMan);
        assert_eq!(state.current_turn, Player::Blue);
        assert_eq!(
            state.last_move,
            Some(Move::new(Pos::new(5, 2), Pos::new(4, 3)))
        );
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_cannot_select_opponent_piece() {
        let mut state = pvp();
        state.handle_click(Pos::new(2, 1)).unwrap();
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_reselect_and_deselect() {
        let mut state = pvp();
        state.handle_click(Pos::new(5, 2)).unwrap();
        state.handle_click(Pos::new(5, 4)).unwrap();
        assert_eq!(state.selected, Some(Pos::new(5, 4)));

        state.handle_click(Pos::new(5, 4)).unwrap();
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_illegal_destination() {
        let mut state = pvp();
        state.handle_click(Pos::new(5, 2)).unwrap();
        let err = state.handle_click(Pos::new(3, 2)).unwrap_err();
        assert!(err.contains("Illegal move"));
        assert_eq!(state.current_turn, Player::Red);
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_capture_ends_game() {
        let mut board = Board::new();
        board.set(Pos::new(5, 4), Cell::RedMan);
        board.set(Pos::new(4, 3), Cell::BlueMan);
        let config = GameConfig {
            mode: GameMode::PvP,
            ..GameConfig::default()
        };
        let mut state = GameState::with_position(config, board, Player::Red);

        state.handle_click(Pos::new(5, 4)).unwrap();
        state.handle_click(Pos::new(3, 2)).unwrap();
        assert_eq!(
            state.game_over,
            Some(GameResult {
                winner: Player::Red,
                reason: WinReason::NoPiecesLeft,
            })
        );
        assert!(state.handle_click(Pos::new(3, 2)).is_err());
    }

    #[test]
    fn test_blocked_side_loses() {
        let mut board = Board::new();
        board.set(Pos::new(0, 7), Cell::BlueMan);
        board.set(Pos::new(1, 6), Cell::RedMan);
        board.set(Pos::new(3, 4), Cell::RedMan);
        let config = GameConfig {
            mode: GameMode::PvP,
            ..GameConfig::default()
        };
        let mut state = GameState::with_position(config, board, Player::Red);

        // Red closes the last escape square
        state.handle_click(Pos::new(3, 4)).unwrap();
        state.handle_click(Pos::new(2, 5)).unwrap();
        assert_eq!(
            state.game_over,
            Some(GameResult {
                winner: Player::Red,
                reason: WinReason::NoMovesLeft,
            })
        );
    }

    #[test]
    fn test_undo_pvp() {
        let mut state = pvp();
        state.handle_click(Pos::new(5, 2)).unwrap();
        state.handle_click(Pos::new(4, 3)).unwrap();
        state.undo();

        assert_eq!(state.board, Board::initial());
        assert_eq!(state.current_turn, Player::Red);
        assert_eq!(state.move_count(), 0);
        assert!(state.last_move.is_none());
    }

    #[test]
    fn test_ai_turn_detection() {
        let state = GameState::new(GameConfig {
            mode: GameMode::PvE {
                human: Player::Blue,
            },
            ..GameConfig::default()
        });
        assert!(state.is_ai_turn());
        assert!(!state.is_human_turn());
        assert!(pvp().is_human_turn());
        assert!(!pvp().is_ai_turn());
    }

    #[test]
    fn test_human_blocked_on_ai_turn() {
        let mut state = GameState::new(GameConfig {
            mode: GameMode::PvE {
                human: Player::Blue,
            },
            ..GameConfig::default()
        });
        assert!(state.handle_click(Pos::new(5, 2)).is_err());
    }

    #[test]
    fn test_ai_plays_and_undo_returns_turn() {
        let mut state = GameState::new(GameConfig {
            mode: GameMode::PvE { human: Player::Red },
            algorithm: SearchAlgorithm::AlphaBeta,
            depth: 2,
        });

        state.handle_click(Pos::new(5, 2)).unwrap();
        state.handle_click(Pos::new(4, 3)).unwrap();
        assert!(state.is_ai_turn());

        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        wait_for_ai(&mut state);

        assert_eq!(state.current_turn, Player::Red);
        assert_eq!(state.move_count(), 2);
        let result = state.last_ai_result.as_ref().unwrap();
        assert!(result.best_move.is_some());
        assert!(result.stats.nodes > 0);
        assert!(state.move_timer.ai_thinking_time.is_some());

        // Both the AI reply and the human move are taken back
        state.undo();
        assert_eq!(state.board, Board::initial());
        assert_eq!(state.current_turn, Player::Red);
    }

    #[test]
    fn test_reset() {
        let mut state = pvp();
        state.handle_click(Pos::new(5, 2)).unwrap();
        state.handle_click(Pos::new(4, 3)).unwrap();
        state.reset();
        assert_eq!(state.board, Board::initial());
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.config.mode, GameMode::PvP);
    }
}
