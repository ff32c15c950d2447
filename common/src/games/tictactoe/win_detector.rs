use super::types::{BOARD_SIZE, Line, Mark, Player, Position};

pub const LINE_COUNT: usize = 2 * BOARD_SIZE + 2;

/// Rows 0..2, then columns 0..2, then the main and anti diagonal.
pub const LINES: [Line; LINE_COUNT] = build_lines();

const fn build_lines() -> [Line; LINE_COUNT] {
    let mut lines = [[Position::new(0, 0); BOARD_SIZE]; LINE_COUNT];

    let mut i = 0;
    while i < BOARD_SIZE {
        lines[i] = [Position::new(i, 0), Position::new(i, 1), Position::new(i, 2)];
        lines[BOARD_SIZE + i] = [Position::new(0, i), Position::new(1, i), Position::new(2, i)];
        i += 1;
    }

    lines[2 * BOARD_SIZE] = [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)];
    lines[2 * BOARD_SIZE + 1] = [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)];
    lines
}

pub fn check_win(cells: &[[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Option<Player> {
    check_win_with_line(cells).map(|(player, _)| player)
}

pub fn check_win_with_line(cells: &[[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Option<(Player, Line)> {
    LINES
        .iter()
        .find_map(|line| line_owner(cells, line).map(|player| (player, *line)))
}

fn line_owner(cells: &[[Mark; BOARD_SIZE]; BOARD_SIZE], line: &Line) -> Option<Player> {
    let [first, rest @ ..] = line;
    let mark = cells[first.row][first.col];
    let player = mark.player()?;

    if rest.iter().all(|p| cells[p.row][p.col] == mark) {
        Some(player)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::Cross;
    const O: Mark = Mark::Circle;

    #[test]
    fn test_lines_are_in_fixed_order() {
        assert_eq!(LINES[0], [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]);
        assert_eq!(LINES[5], [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)]);
        assert_eq!(LINES[6], [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)]);
        assert_eq!(LINES[7], [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)]);
    }

    #[test]
    fn test_every_cell_is_covered_by_a_row_and_a_column() {
        for index in 0..BOARD_SIZE * BOARD_SIZE {
            let position = Position::from_index(index);
            let covering = LINES[..2 * BOARD_SIZE]
                .iter()
                .filter(|line| line.contains(&position))
                .count();
            assert_eq!(covering, 2);
        }
    }

    #[test]
    fn test_check_win_empty_board() {
        assert_eq!(check_win(&[[E; 3]; 3]), None);
    }

    #[test]
    fn test_check_win_anti_diagonal() {
        let cells = [[X, X, O], [E, O, E], [O, E, X]];
        assert_eq!(check_win_with_line(&cells), Some((Player::Circle, LINES[7])));
    }

    #[test]
    fn test_check_win_column() {
        let cells = [[X, O, E], [X, O, E], [X, E, E]];
        assert_eq!(check_win_with_line(&cells), Some((Player::Cross, LINES[3])));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let cells = [[X, X, O], [O, O, X], [X, O, X]];
        assert_eq!(check_win(&cells), None);
    }
}
