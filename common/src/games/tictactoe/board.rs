use super::types::{BOARD_SIZE, Mark, Outcome, Player, Position, WinningLine};

const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
    [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
    [Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
    // Columns
    [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
    [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
    [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)],
    // Diagonals
    [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    [Position::new(2, 0), Position::new(1, 1), Position::new(0, 2)],
];

/// Fixed 3x3 grid, row-major. Holds no turn information: alternating play is
/// the owner's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn get(&self, position: Position) -> Mark {
        self.cells[position.row][position.col]
    }

    pub fn is_free(&self, position: Position) -> bool {
        self.get(position) == Mark::Empty
    }

    /// Panics if the cell is already marked.
    pub fn place(&mut self, position: Position, player: Player) {
        assert!(
            self.is_free(position),
            "cell {} is already marked with {:?}",
            position,
            self.get(position)
        );
        self.cells[position.row][position.col] = player.into();
    }

    pub(crate) fn clear(&mut self, position: Position) {
        self.cells[position.row][position.col] = Mark::Empty;
    }

    pub fn reset(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }

    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn has_won(&self, player: Player) -> bool {
        let mark = Mark::from(player);
        LINES
            .iter()
            .any(|line| line.iter().all(|&position| self.get(position) == mark))
    }

    pub fn winning_line(&self, player: Player) -> Option<WinningLine> {
        let mark = Mark::from(player);
        LINES
            .iter()
            .find(|line| line.iter().all(|&position| self.get(position) == mark))
            .map(|line| WinningLine::new(player, line[0], line[2]))
    }

    pub fn evaluate_outcome(&self) -> Outcome {
        let first_won = self.has_won(Player::First);
        let second_won = self.has_won(Player::Second);
        debug_assert!(
            !(first_won && second_won),
            "both players completed a line: {:?}",
            self.cells
        );

        if first_won {
            Outcome::Win(Player::First)
        } else if second_won {
            Outcome::Win(Player::Second)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const F: Mark = Mark::First;
    const S: Mark = Mark::Second;

    pub(crate) fn board(rows: [[char; 3]; 3]) -> Board {
        let mut cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, chars) in rows.iter().enumerate() {
            for (col, &c) in chars.iter().enumerate() {
                cells[row][col] = match c {
                    'O' => Mark::First,
                    'X' => Mark::Second,
                    _ => Mark::Empty,
                };
            }
        }
        Board::from_rows(cells)
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.count(Mark::Empty), 9);
        assert!(!board.is_full());
        assert_eq!(board.evaluate_outcome(), Outcome::Ongoing);
        assert_eq!(board.available_moves().len(), 9);
    }

    #[test]
    fn test_place_marks_cell() {
        let mut board = Board::new();
        let position = Position::new(1, 2);
        assert!(board.is_free(position));
        board.place(position, Player::Second);
        assert!(!board.is_free(position));
        assert_eq!(board.get(position), Mark::Second);
        assert_eq!(board.count(Mark::Second), 1);
    }

    #[test]
    #[should_panic(expected = "already marked")]
    fn test_place_on_marked_cell_panics() {
        let mut board = Board::new();
        board.place(Position::new(0, 0), Player::First);
        board.place(Position::new(0, 0), Player::Second);
    }

    #[test]
    #[should_panic]
    fn test_place_out_of_range_panics() {
        let mut board = Board::new();
        board.place(Position::new(3, 0), Player::First);
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert_eq!(Position::try_new(2, 2), Some(Position::new(2, 2)));
        assert_eq!(Position::try_new(3, 0), None);
        assert_eq!(Position::try_new(0, 3), None);
    }

    #[test]
    fn test_available_moves_are_row_major() {
        let board = board([['O', ' ', 'X'], [' ', 'O', ' '], ['X', ' ', ' ']]);
        assert_eq!(
            board.available_moves(),
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            for player in [Player::First, Player::Second] {
                let mut board = Board::new();
                for position in line {
                    board.place(position, player);
                }
                assert!(board.has_won(player), "{:?} on {:?}", player, line);
                assert!(!board.has_won(player.opponent()));
                assert_eq!(board.evaluate_outcome(), Outcome::Win(player));
                assert_eq!(
                    board.winning_line(player),
                    Some(WinningLine::new(player, line[0], line[2]))
                );
            }
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = board([['O', 'O', ' '], ['X', 'X', ' '], [' ', ' ', ' ']]);
        assert!(!board.has_won(Player::First));
        assert!(!board.has_won(Player::Second));
        assert_eq!(board.winning_line(Player::First), None);
        assert_eq!(board.evaluate_outcome(), Outcome::Ongoing);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_rows([[F, S, F], [F, S, S], [S, F, F]]);
        assert!(board.is_full());
        assert!(!board.has_won(Player::First));
        assert!(!board.has_won(Player::Second));
        assert_eq!(board.evaluate_outcome(), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        let board = Board::from_rows([[S, S, S], [F, F, S], [F, S, F]]);
        assert!(board.is_full());
        assert_eq!(board.evaluate_outcome(), Outcome::Win(Player::Second));
    }

    #[test]
    fn test_anti_diagonal_line_endpoints() {
        let board = Board::from_rows([[F, S, S], [F, S, E], [S, F, E]]);
        assert_eq!(
            board.winning_line(Player::Second),
            Some(WinningLine::new(
                Player::Second,
                Position::new(2, 0),
                Position::new(0, 2)
            ))
        );
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board = board([['O', 'X', 'O'], ['X', 'O', 'X'], [' ', ' ', ' ']]);
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_ongoing_boards_never_report_a_winner() {
        // Every board reachable by alternating play with First opening.
        fn walk(board: &mut Board, mover: Player, seen: &mut usize) {
            *seen += 1;
            let first_won = board.has_won(Player::First);
            let second_won = board.has_won(Player::Second);
            assert!(!(first_won && second_won));
            if !first_won && !second_won && !board.is_full() {
                assert_eq!(board.evaluate_outcome(), Outcome::Ongoing);
            }
            if first_won || second_won {
                return;
            }
            for position in board.available_moves() {
                board.place(position, mover);
                walk(board, mover.opponent(), seen);
                board.clear(position);
            }
        }

        let mut board = Board::new();
        let mut seen = 0;
        walk(&mut board, Player::First, &mut seen);
        assert_eq!(board, Board::new());
        assert!(seen > 0);
    }
}
