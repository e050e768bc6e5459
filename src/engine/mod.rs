mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{
    BOARD_CELLS, Board, CENTER, empty_board, get_available_moves, is_board_full, is_valid_move,
};
pub use bot_controller::{BotInput, calculate_minimax_move, calculate_move};
pub use game_state::GameState;
pub use types::{Difficulty, GameStatus, Mark, Outcome, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate};
