//! Backtracking search over piece placements.
//!
//! Pieces are placed largest first; each level of the search tries every
//! orientation and offset of one piece against the current board and
//! recurses on the first fit. States already proven unsolvable are
//! fingerprinted in an `FxHashSet` so revisited dead ends fail immediately;
//! since pieces are consumed in a fixed order, the fingerprint fully
//! determines the subproblem and the pruning cannot change which first
//! solution is found.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::board::{Board, PlacementError};
use crate::pieces::Piece;

/// Fingerprint of a search state: pieces left plus board occupancy.
type StateKey = (usize, Vec<bool>);

/// Why the puzzle could not be solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The configuration error: the pieces cannot tile the board because
    /// the areas differ. Detected before any placement is attempted.
    #[error("total piece area {pieces} does not match free board area {free}")]
    AreaMismatch { pieces: usize, free: usize },
    /// The search space is exhausted without covering the board.
    #[error("no arrangement of the pieces fills the board")]
    Unsolvable,
}

/// Solves the puzzle, returning the first fully covered board found.
///
/// Validates that the pieces' total area equals the board's free area, sorts
/// the pieces by descending size (ties keep their input order), and runs the
/// depth-first search. Candidates are enumerated in a fixed order
/// (orientation 0..3, x outer, y inner), so identical inputs always produce
/// the identical solution board. Each placed piece is recorded on the board
/// with a countdown marker glyph: the first piece of a ten-piece puzzle gets
/// `9`, the last gets `0`.
pub fn solve(board: &Board, pieces: &[Piece]) -> Result<Board, SolveError> {
    let piece_area: usize = pieces.iter().map(Piece::size).sum();
    let free = board.free_cells();
    if piece_area != free {
        return Err(SolveError::AreaMismatch {
            pieces: piece_area,
            free,
        });
    }

    // largest first: the most constrained pieces prune the tree fastest;
    // sort_by is stable, so equal sizes keep their input order
    let mut ordered: Vec<&Piece> = pieces.iter().collect();
    ordered.sort_by(|a, b| b.size().cmp(&a.size()));

    log::debug!("placing {} pieces over {free} free cells", ordered.len());

    let mut dead = FxHashSet::default();
    search(&ordered, board.clone(), &mut dead).map_err(|_| SolveError::Unsolvable)
}

/// One level of the depth-first search: places the first remaining piece.
///
/// Failure is reported as `DoesNotFit` whether a single placement overlapped
/// or the whole subtree below it was exhausted; the caller treats both the
/// same and moves on to its own next candidate.
fn search(
    remaining: &[&Piece],
    board: Board,
    dead: &mut FxHashSet<StateKey>,
) -> Result<Board, PlacementError> {
    let [piece, rest @ ..] = remaining else {
        return Ok(board);
    };

    let key = (remaining.len(), board.occupancy());
    if dead.contains(&key) {
        return Err(PlacementError::DoesNotFit);
    }

    if remaining.len() < 3 {
        log::trace!("{} pieces left:\n{board}", remaining.len());
    }

    let marker = marker_for(remaining.len() - 1);
    for orientation in piece.orientations() {
        for x in 0..board.width() {
            for y in 0..board.height() {
                let Ok(placed) = board.insert(orientation, x, y, marker) else {
                    continue;
                };
                if let Ok(solution) = search(rest, placed, dead) {
                    return Ok(solution);
                }
            }
        }
    }

    dead.insert(key);
    Err(PlacementError::DoesNotFit)
}

/// Marker glyph for the piece with countdown index `index`: `0`-`9`, then
/// `A`-`Z`.
fn marker_for(index: usize) -> char {
    debug_assert!(index < 36, "marker space covers at most 36 pieces");
    if index < 10 {
        char::from(b'0' + index as u8)
    } else {
        char::from(b'A' + (index - 10) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_pieces_cover_a_two_by_two_board() {
        let board = Board::from_text("  \n  ");
        let pieces = [Piece::new("corner", "X\nXX"), Piece::new("pup", "X")];
        let solution = solve(&board, &pieces).expect("the board can be covered");
        assert_eq!(solution.free_cells(), 0);
        insta::assert_snapshot!(solution.to_string().trim_end(), @r"
        10
        11
        ");
    }

    #[test]
    fn test_area_mismatch_is_a_configuration_error() {
        let board = Board::from_text("  \n  ");
        let pieces = [Piece::new("corner", "X\nXX")];
        assert_eq!(
            solve(&board, &pieces),
            Err(SolveError::AreaMismatch { pieces: 3, free: 4 })
        );
    }

    #[test]
    fn test_single_cell_puzzle_is_trivial() {
        let board = Board::from_text(" ");
        let pieces = [Piece::new("pup", "X")];
        let solution = solve(&board, &pieces).expect("one piece, one cell");
        assert_eq!(solution.to_string(), "0\n");
    }

    #[test]
    fn test_no_pieces_and_no_free_cells_solves_immediately() {
        let board = Board::from_text("■■");
        let solution = solve(&board, &[]).expect("nothing to place");
        assert_eq!(solution.to_string(), "■■\n");
    }

    #[test]
    fn test_matching_area_can_still_be_unsolvable() {
        // the corner tromino needs two rows in every orientation
        let board = Board::from_text("   ");
        let pieces = [Piece::new("corner", "X\nXX")];
        assert_eq!(solve(&board, &pieces), Err(SolveError::Unsolvable));
    }

    #[test]
    fn test_equal_size_pieces_keep_their_input_order() {
        // both dominoes have size 2; the stable sort must place the
        // vertical one first, as marker 1 in the left column
        let board = Board::from_text("  \n  ");
        let pieces = [Piece::new("tall", "X\nX"), Piece::new("wide", "XX")];
        let solution = solve(&board, &pieces).expect("two dominoes tile a square");
        assert_eq!(solution.to_string(), "10\n10\n");
    }

    #[test]
    fn test_identical_inputs_yield_identical_solutions() {
        let board = Board::from_text("   \n   ");
        let pieces = [
            Piece::new("corner", "X\nXX"),
            Piece::new("bar", "XX"),
            Piece::new("pup", "X"),
        ];
        let first = solve(&board, &pieces).expect("solvable");
        let second = solve(&board, &pieces).expect("solvable");
        assert_eq!(
            first.to_string(),
            second.to_string(),
            "the engine must be deterministic"
        );
    }

    #[test]
    fn test_solve_does_not_mutate_the_input_board() {
        let board = Board::from_text("  ");
        let before = board.clone();
        let pieces = [Piece::new("bar", "XX")];
        let _ = solve(&board, &pieces);
        assert_eq!(board, before);
    }

    #[test]
    fn test_marker_glyphs_count_down_from_digits_into_letters() {
        assert_eq!(marker_for(0), '0');
        assert_eq!(marker_for(9), '9');
        assert_eq!(marker_for(10), 'A');
        assert_eq!(marker_for(35), 'Z');
    }
}
