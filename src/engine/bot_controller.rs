use crate::session_rng::SessionRng;
use super::board::{BOARD_CELLS, Board, CENTER, get_available_moves, is_board_full};
use super::game_state::GameState;
use super::types::{Difficulty, Mark};
use super::win_detector::check_win;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: state.board,
            bot_mark: state.current_mark,
        }
    }
}

/// Returns the cell the bot plays, or `None` when the board is full.
/// The caller's board is never touched; search runs on a copy.
pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(&input, rng),
        Difficulty::Medium => calculate_greedy_move(&input, rng),
        Difficulty::Hard => calculate_minimax_move(&input),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// Medium tier: win now, else block the opponent's win, else random.
fn calculate_greedy_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let bot_mark = input.bot_mark;
    let opponent_mark = bot_mark.opponent()?;
    let available_moves = get_available_moves(&input.board);

    if available_moves.is_empty() {
        return None;
    }

    let mut board = input.board;

    if let Some(index) = find_winning_move(&mut board, bot_mark, &available_moves) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(&mut board, opponent_mark, &available_moves) {
        return Some(index);
    }

    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

fn find_winning_move(board: &mut Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &index in moves {
        board[index] = mark;
        let winner = check_win(board);
        board[index] = Mark::Empty;

        if winner == Some(mark) {
            return Some(index);
        }
    }
    None
}

/// Hard tier: full-depth minimax. Ties break toward the lowest index,
/// so the choice is deterministic for a given position.
pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let bot_mark = input.bot_mark;
    if bot_mark == Mark::Empty {
        return None;
    }
    let available_moves = get_available_moves(&input.board);

    if available_moves.is_empty() {
        return None;
    }

    // Opening shortcuts: the center is optimal on the first two plies
    // and skips the widest searches.
    if available_moves.len() == BOARD_CELLS {
        return Some(CENTER);
    }
    if available_moves.len() == BOARD_CELLS - 1 && input.board[CENTER] == Mark::Empty {
        return Some(CENTER);
    }

    let mut board = input.board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for &index in &available_moves {
        board[index] = bot_mark;
        let score = minimax(&mut board, 0, false, bot_mark);
        board[index] = Mark::Empty;

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Scores a position for `bot_mark`: wins are worth more the fewer
/// plies they take, losses less the longer they are delayed.
fn minimax(board: &mut Board, depth: i32, is_maximizing: bool, bot_mark: Mark) -> i32 {
    if let Some(winner) = check_win(board) {
        return if winner == bot_mark { 10 - depth } else { depth - 10 };
    }

    if is_board_full(board) {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in 0..BOARD_CELLS {
            if board[index] != Mark::Empty {
                continue;
            }

            board[index] = bot_mark;
            let eval = minimax(board, depth + 1, false, bot_mark);
            board[index] = Mark::Empty;

            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let opponent_mark = bot_mark.opponent().unwrap();
        let mut min_eval = i32::MAX;
        for index in 0..BOARD_CELLS {
            if board[index] != Mark::Empty {
                continue;
            }

            board[index] = opponent_mark;
            let eval = minimax(board, depth + 1, true, bot_mark);
            board[index] = Mark::Empty;

            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
