use super::board::{Board, is_board_full};
use super::types::{Mark, Outcome, WinningLine};

/// The 8 ways to win: rows, columns, diagonals. Scan order matters;
/// the first matching triple is the one reported.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for &[a, b, c] in &WINNING_LINES {
        let mark = board[a];
        if mark != Mark::Empty && mark == board[b] && mark == board[c] {
            return Some(WinningLine::new(mark, [a, b, c]));
        }
    }
    None
}

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(line) = check_win_with_line(board) {
        return Outcome::Win(line);
    }
    if is_board_full(board) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}
