use crate::{SudokuGrid, SIZE};
use crate::solver::{Solution, Solver};
use crate::solver::strategy::{cell_candidates, Strategy};

/// A partial [Solver] which uses a [Strategy] to solve a Sudoku as well as
/// possible. If it finds a contradiction, it will conclude that the Sudoku
/// is impossible. If it cannot solve it, it will resort to returning
/// `Solution::Ambiguous`. Only if the wrapped strategy is able to solve the
/// Sudoku completely, a `Solution::Unique` variant is returned.
pub struct StrategicSolver<S: Strategy> {
    strategy: S
}

impl<S: Strategy> StrategicSolver<S> {

    /// Creates a new strategic solver that uses the given `strategy` to
    /// attempt to solve Sudoku.
    pub fn new(strategy: S) -> StrategicSolver<S> {
        StrategicSolver { strategy }
    }
}

fn unsolvable_cell_exists(grid: &SudokuGrid) -> bool {
    for row in 0..SIZE {
        for column in 0..SIZE {
            if grid.get_cell(column, row).unwrap().is_none() &&
                    cell_candidates(grid, column, row).unwrap().is_empty() {
                return true;
            }
        }
    }

    false
}

impl<S: Strategy> Solver for StrategicSolver<S> {
    fn solve(&self, grid: &SudokuGrid) -> Solution {
        let mut work = grid.clone();

        while !work.is_full() && self.strategy.apply(&mut work) { }

        if !work.is_valid() {
            Solution::Impossible
        }
        else if work.is_full() {
            Solution::Unique(work)
        }
        else if unsolvable_cell_exists(&work) {
            Solution::Impossible
        }
        else {
            Solution::Ambiguous
        }
    }
}

impl<S: Strategy + Clone> Clone for StrategicSolver<S> {
    fn clone(&self) -> Self {
        StrategicSolver::new(self.strategy.clone())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::solver::strategy::{
        CompositeStrategy,
        NakedSingleStrategy,
        OnlyCellStrategy
    };

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

    /// Clears nine cells of the full classic grid, one per row and column,
    /// so each cleared cell is immediately decided by its row.
    fn naked_singles_puzzle() -> SudokuGrid {
        let mut grid = SudokuGrid::parse(CLASSIC_SOLUTION).unwrap();

        for row in 0..SIZE {
            grid.clear_cell(row * 2 % SIZE, row).unwrap();
        }

        grid
    }

    #[test]
    fn strategic_solver_solves_naked_singles() {
        let puzzle = naked_singles_puzzle();
        let expected = SudokuGrid::parse(CLASSIC_SOLUTION).unwrap();
        let solver = StrategicSolver::new(NakedSingleStrategy);

        assert_eq!(Solution::Unique(expected), solver.solve(&puzzle));
    }

    #[test]
    fn strategic_solver_solves_with_composite_singles() {
        let puzzle = naked_singles_puzzle();
        let expected = SudokuGrid::parse(CLASSIC_SOLUTION).unwrap();
        let solver = StrategicSolver::new(
            CompositeStrategy::new(NakedSingleStrategy, OnlyCellStrategy));

        assert_eq!(Solution::Unique(expected), solver.solve(&puzzle));
    }

    #[test]
    fn strategic_solver_gives_up_without_deduction() {
        let mut grid = SudokuGrid::parse(CLASSIC_SOLUTION).unwrap();

        // A rectangle of pairwise swappable digits cannot be decided by
        // singles.
        grid.clear_cell(4, 0).unwrap();
        grid.clear_cell(6, 0).unwrap();
        grid.clear_cell(4, 1).unwrap();
        grid.clear_cell(6, 1).unwrap();

        let solver = StrategicSolver::new(
            CompositeStrategy::new(NakedSingleStrategy, OnlyCellStrategy));

        assert_eq!(Solution::Ambiguous, solver.solve(&grid));
    }

    #[test]
    fn strategic_solver_detects_invalid_grid() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(0, 0, 4).unwrap();
        grid.set_cell(5, 0, 4).unwrap();

        let solver = StrategicSolver::new(NakedSingleStrategy);

        assert_eq!(Solution::Impossible, solver.solve(&grid));
    }

    #[test]
    fn strategic_solver_detects_cell_without_candidates() {
        let mut grid = SudokuGrid::new();

        // (8, 0) sees 1 to 8 in its row and a 9 in its column.
        for column in 0..8 {
            grid.set_cell(column, 0, column + 1).unwrap();
        }

        grid.set_cell(8, 1, 9).unwrap();

        let solver = StrategicSolver::new(OnlyCellStrategy);

        assert_eq!(Solution::Impossible, solver.solve(&grid));
    }

    #[test]
    fn cloned_solver_behaves_identically() {
        let puzzle = naked_singles_puzzle();
        let solver = StrategicSolver::new(NakedSingleStrategy);
        let clone = solver.clone();

        assert_eq!(solver.solve(&puzzle), clone.solve(&puzzle));
    }
}
