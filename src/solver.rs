//! This module contains the logic for solving Sudoku.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and the
//! [BacktrackingSolver](struct.BacktrackingSolver.html) as a generally usable
//! implementation. The backtracking solver also offers
//! [BacktrackingSolver::count_solutions], which counts the solutions of a
//! grid up to a given bound. This is the primitive behind uniqueness checks
//! during puzzle generation.

pub mod strategy;

use crate::{SudokuGrid, SIZE};

/// An enumeration of the different ways a Sudoku can be solveable. Note that
/// this may be relative to the solver, since an imperfect solver may be
/// unable to continue at some point, yielding `Solution::Ambiguous`, where
/// the Sudoku is actually uniquely solveable or impossible.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the Sudoku is not solveable at all.
    Impossible,

    /// Indicates that the Sudoku has a unique solution, which is wrapped in
    /// this instance.
    Unique(SudokuGrid),

    /// Indicates that the Sudoku has multiple solutions or, at least, that
    /// the solver was unable to find a unique one or prove it is impossible.
    Ambiguous
}

/// A trait for structs which have the ability to solve Sudoku. Not all
/// implementers must be able to find a unique solution to every uniquely
/// solveable Sudoku, some solvers may be less powerful, similar to a less
/// experienced human solver. This may make sense to check whether some
/// Sudoku is solveable using some technique.
pub trait Solver {

    /// Solves, or attempts to solve, the provided Sudoku. If the solver
    /// cannot prove that a Sudoku is impossible or uniquely solveable
    /// (either because it isn't or the solver is not powerful enough), they
    /// shall return `Solution::Ambiguous`.
    fn solve(&self, grid: &SudokuGrid) -> Solution;
}

/// A perfect [Solver](trait.Solver.html) which solves Sudoku by recursively
/// testing all valid numbers for each cell. This means two things:
///
/// * Its worst-case runtime is exponential, i.e. it may be very slow if the
/// Sudoku has many missing digits.
/// * It can provide the correct [Solution](enum.Solution.html) for any
/// input, including malformed grids, which are simply reported as
/// impossible.
///
/// The search always continues at the first empty cell in left-to-right,
/// top-to-bottom order; there is deliberately no cell-ordering heuristic.
pub struct BacktrackingSolver;

impl BacktrackingSolver {

    /// Counts the solutions reachable from the given partial grid, but stops
    /// the entire search as soon as `limit` solutions have been found. The
    /// first solution that is found, if any, is stored in `first`. The grid
    /// is left exactly as it was when the function was called: every
    /// speculative assignment is undone before returning.
    fn count_rec(grid: &mut SudokuGrid, column: usize, row: usize,
            limit: usize, first: &mut Option<SudokuGrid>) -> usize {
        if row == SIZE {
            if first.is_none() {
                *first = Some(grid.clone());
            }

            return 1;
        }

        let next_column = (column + 1) % SIZE;
        let next_row = if next_column == 0 { row + 1 } else { row };

        if grid.get_cell(column, row).unwrap().is_some() {
            return BacktrackingSolver::count_rec(grid, next_column, next_row,
                limit, first);
        }

        let mut count = 0;

        for number in 1..=SIZE {
            if grid.is_valid_number(column, row, number).unwrap() {
                grid.set_cell(column, row, number).unwrap();
                count += BacktrackingSolver::count_rec(grid, next_column,
                    next_row, limit - count, first);
                grid.clear_cell(column, row).unwrap();

                if count >= limit {
                    break;
                }
            }
        }

        count
    }

    fn count_solutions_impl(&self, grid: &SudokuGrid, limit: usize)
            -> (usize, Option<SudokuGrid>) {
        if limit == 0 || !grid.is_valid() {
            return (0, None);
        }

        let mut work = grid.clone();
        let mut first = None;
        let count =
            BacktrackingSolver::count_rec(&mut work, 0, 0, limit, &mut first);
        (count, first)
    }

    /// Counts the number of distinct solutions of the given grid, stopping
    /// the entire search as soon as `limit` solutions have been found. The
    /// result is therefore 0, 1, ..., or `limit`. With a limit of 2, this
    /// decides whether a puzzle has a unique solution without the cost of
    /// enumerating all solutions of a grid with few clues.
    ///
    /// The search operates on a private copy; the given grid is not
    /// modified. A grid whose present digits already violate the rules has
    /// no solutions, so 0 is returned.
    ///
    /// ```
    /// use sudoku_gen::SudokuGrid;
    /// use sudoku_gen::solver::BacktrackingSolver;
    ///
    /// let empty = SudokuGrid::new();
    ///
    /// // An empty grid has a vast number of solutions, but the search
    /// // stops after the second one.
    /// assert_eq!(2, BacktrackingSolver.count_solutions(&empty, 2));
    /// ```
    pub fn count_solutions(&self, grid: &SudokuGrid, limit: usize) -> usize {
        self.count_solutions_impl(grid, limit).0
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, grid: &SudokuGrid) -> Solution {
        match self.count_solutions_impl(grid, 2) {
            (0, _) => Solution::Impossible,
            (1, Some(solved)) => Solution::Unique(solved),
            _ => Solution::Ambiguous
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    // The example Sudoku is taken from the World Puzzle Federation Sudoku
    // Grand Prix, 2020 Round 8, Puzzle 2.
    // https://gp.worldpuzzle.org/sites/default/files/Puzzles/2020/2020_SudokuRound8.pdf

    const CLASSIC_PUZZLE: &str = "\
         , , , ,8,1, , , ,\
         , ,2, , ,7,8, , ,\
         ,5,3, , , ,1,7, ,\
        3,7, , , , , , , ,\
        6, , , , , , , ,3,\
         , , , , , , ,2,4,\
         ,6,9, , , ,2,3, ,\
         , ,5,9, , ,4, , ,\
         , , ,6,5, , , , ";

    const CLASSIC_SOLUTION: &str = "\
        7,4,6,2,8,1,3,5,9,\
        9,1,2,5,3,7,8,4,6,\
        8,5,3,4,9,6,1,7,2,\
        3,7,4,1,2,5,6,9,8,\
        6,2,8,7,4,9,5,1,3,\
        5,9,1,3,6,8,7,2,4,\
        1,6,9,8,7,4,2,3,5,\
        2,8,5,9,1,3,4,6,7,\
        4,3,7,6,5,2,9,8,1";

    /// A grid in which the cell in the top-right corner has no valid digit:
    /// its row already contains 1 to 8 and its column contains a 9.
    fn unsolvable_grid() -> SudokuGrid {
        let mut grid = SudokuGrid::new();

        for column in 0..8 {
            grid.set_cell(column, 0, column + 1).unwrap();
        }

        grid.set_cell(8, 1, 9).unwrap();
        grid
    }

    /// Clears the four corners of a rectangle in the classic solution whose
    /// digits can be swapped pairwise without violating any rule, which
    /// makes the grid solveable in exactly two ways.
    fn ambiguous_grid() -> SudokuGrid {
        let mut grid = SudokuGrid::parse(CLASSIC_SOLUTION).unwrap();

        grid.clear_cell(4, 0).unwrap();
        grid.clear_cell(6, 0).unwrap();
        grid.clear_cell(4, 1).unwrap();
        grid.clear_cell(6, 1).unwrap();
        grid
    }

    #[test]
    fn backtracking_solves_classic_sudoku() {
        let puzzle = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();
        let expected = SudokuGrid::parse(CLASSIC_SOLUTION).unwrap();
        let solution = BacktrackingSolver.solve(&puzzle);

        if let Solution::Unique(grid) = solution {
            assert_eq!(expected, grid, "Solver gave wrong grid.");
        }
        else {
            panic!("Solveable sudoku marked as impossible or ambiguous.");
        }
    }

    #[test]
    fn solving_leaves_puzzle_untouched() {
        let puzzle = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();
        let copy = puzzle.clone();

        BacktrackingSolver.solve(&puzzle);

        assert_eq!(copy, puzzle);
    }

    #[test]
    fn full_grid_is_its_own_solution() {
        let full = SudokuGrid::parse(CLASSIC_SOLUTION).unwrap();

        assert_eq!(Solution::Unique(full.clone()),
            BacktrackingSolver.solve(&full));
    }

    #[test]
    fn empty_grid_is_ambiguous() {
        assert_eq!(Solution::Ambiguous,
            BacktrackingSolver.solve(&SudokuGrid::new()));
    }

    #[test]
    fn unsolvable_grid_is_impossible() {
        assert_eq!(Solution::Impossible,
            BacktrackingSolver.solve(&unsolvable_grid()));
    }

    #[test]
    fn contradictory_grid_is_impossible() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(0, 0, 4).unwrap();
        grid.set_cell(5, 0, 4).unwrap();

        assert_eq!(Solution::Impossible, BacktrackingSolver.solve(&grid));
        assert_eq!(0, BacktrackingSolver.count_solutions(&grid, 2));
    }

    #[test]
    fn swappable_rectangle_has_two_solutions() {
        assert_eq!(2,
            BacktrackingSolver.count_solutions(&ambiguous_grid(), 2));
        assert_eq!(Solution::Ambiguous,
            BacktrackingSolver.solve(&ambiguous_grid()));
    }

    #[test]
    fn count_stops_at_limit() {
        let empty = SudokuGrid::new();

        assert_eq!(1, BacktrackingSolver.count_solutions(&empty, 1));
        assert_eq!(2, BacktrackingSolver.count_solutions(&empty, 2));
        assert_eq!(5, BacktrackingSolver.count_solutions(&empty, 5));
    }

    #[test]
    fn count_of_unique_puzzle_is_one() {
        let puzzle = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();

        assert_eq!(1, BacktrackingSolver.count_solutions(&puzzle, 2));
    }

    #[test]
    fn count_with_zero_limit() {
        let puzzle = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();

        assert_eq!(0, BacktrackingSolver.count_solutions(&puzzle, 0));
    }

    #[test]
    fn count_leaves_grid_untouched() {
        let grid = ambiguous_grid();
        let copy = grid.clone();

        BacktrackingSolver.count_solutions(&grid, 2);

        assert_eq!(copy, grid);
    }
}
