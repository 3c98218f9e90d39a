//! Scoring module - flat per-row line clear scoring
//!
//! Each cleared row is worth the board width, counted independently per row.
//! There are no levels, combos or back-to-back bonuses.

/// Points for clearing `rows` rows on a board `board_width` wide
pub fn line_clear_score(rows: usize, board_width: usize) -> u32 {
    rows.saturating_mul(board_width)
        .try_into()
        .unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rows_no_points() {
        assert_eq!(line_clear_score(0, 10), 0);
    }

    #[test]
    fn test_points_scale_linearly_with_rows() {
        assert_eq!(line_clear_score(1, 10), 10);
        assert_eq!(line_clear_score(2, 10), 20);
        assert_eq!(line_clear_score(4, 10), 40);
    }

    #[test]
    fn test_points_follow_board_width() {
        assert_eq!(line_clear_score(2, 3), 6);
    }
}
