//! This module contains all pre-defined strategies provided by this crate.
//! All of them are re-exported in [crate::solver::strategy], so you should
//! not have to `use` anything from this module directly.

use crate::{SudokuGrid, SIZE};
use crate::solver::strategy::{cell_candidates, Location, Strategy};

/// A [Strategy] which detects naked singles, that is, cells which only have
/// one possible digit, and enters them into the grid.
///
/// As a small example, take a look at the first row of the following grid:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║ 1 │ 2 │ 3 ║ 4 │ 5 │ 6 ║ 7 │ 8 │ X ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ```
///
/// The cell marked with X sees the digits 1 to 8 in its row, so it can only
/// be a 9. Whenever exactly one candidate remains in a cell, this strategy
/// enters it.
#[derive(Clone)]
pub struct NakedSingleStrategy;

impl Strategy for NakedSingleStrategy {

    fn apply(&self, grid: &mut SudokuGrid) -> bool {
        let mut changed = false;

        for row in 0..SIZE {
            for column in 0..SIZE {
                let candidates = cell_candidates(grid, column, row).unwrap();

                if candidates.len() == 1 {
                    let number = candidates.iter().next().unwrap();
                    grid.set_cell(column, row, number).unwrap();
                    changed = true;
                }
            }
        }

        changed
    }
}

/// A [Strategy] which detects situations in which a digit can only go in one
/// cell of a group (a *hidden single*) and enters it there.
///
/// As a visualization, the cell marked with X in the following example is
/// the only one in its block that can be a 2: the other cells of the block
/// either contain a digit or share a row with the 2 on the right.
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═
/// ║   │   │   ║ 2 │
/// ╟───┼───┼───╫───┼─
/// ║ X │ 1 │ 3 ║   │
/// ╠═══╪═══╪═══╬═══╪═
/// ```
#[derive(Clone)]
pub struct OnlyCellStrategy;

impl Strategy for OnlyCellStrategy {

    fn apply(&self, grid: &mut SudokuGrid) -> bool {
        let mut changed = false;

        for group in SudokuGrid::groups() {
            let mut locations = vec![Location::None; SIZE + 1];

            for (column, row) in group {
                let candidates = cell_candidates(grid, column, row).unwrap();

                for number in candidates.iter() {
                    let location = &locations[number];
                    locations[number] = location.union(column, row);
                }
            }

            for (number, location) in locations.into_iter().enumerate() {
                if let Location::One(column, row) = location {
                    if grid.get_cell(column, row).unwrap().is_none() {
                        grid.set_cell(column, row, number).unwrap();
                        changed = true;
                    }
                }
            }
        }

        changed
    }
}

/// A [Strategy] which applies two strategies in sequence. Since both
/// strategies are applied to the same grid, the second can use deductions
/// made by the first within the same application.
#[derive(Clone)]
pub struct CompositeStrategy<S1: Strategy, S2: Strategy> {
    s1: S1,
    s2: S2
}

impl<S1: Strategy, S2: Strategy> CompositeStrategy<S1, S2> {

    /// Creates a new composite strategy from the two children strategies.
    ///
    /// # Arguments
    ///
    /// * `s1`: The strategy which is applied first.
    /// * `s2`: The strategy which is applied second.
    pub fn new(s1: S1, s2: S2) -> CompositeStrategy<S1, S2> {
        CompositeStrategy {
            s1,
            s2
        }
    }
}

impl<S1: Strategy, S2: Strategy> Strategy for CompositeStrategy<S1, S2> {
    fn apply(&self, grid: &mut SudokuGrid) -> bool {
        self.s1.apply(grid) | self.s2.apply(grid)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn naked_single_is_entered() {
        let mut grid = SudokuGrid::new();

        for column in 0..8 {
            grid.set_cell(column, 0, column + 1).unwrap();
        }

        assert!(NakedSingleStrategy.apply(&mut grid));
        assert_eq!(Some(9), grid.get_cell(8, 0).unwrap());
    }

    #[test]
    fn naked_single_strategy_without_deduction() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(0, 0, 1).unwrap();
        let before = grid.clone();

        assert!(!NakedSingleStrategy.apply(&mut grid));
        assert_eq!(before, grid);
    }

    /// A grid in which the 2 in the top-left block can only go at (0, 1),
    /// while no cell of the grid is a naked single.
    fn hidden_single_grid() -> SudokuGrid {
        let mut grid = SudokuGrid::new();

        grid.set_cell(4, 0, 2).unwrap();
        grid.set_cell(8, 2, 2).unwrap();
        grid.set_cell(1, 7, 2).unwrap();
        grid.set_cell(2, 5, 2).unwrap();
        grid
    }

    #[test]
    fn only_cell_is_entered() {
        let mut grid = hidden_single_grid();

        assert!(!NakedSingleStrategy.apply(&mut grid.clone()));
        assert!(OnlyCellStrategy.apply(&mut grid));
        assert_eq!(Some(2), grid.get_cell(0, 1).unwrap());
    }

    #[test]
    fn only_cell_strategy_without_deduction() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(0, 0, 1).unwrap();
        let before = grid.clone();

        assert!(!OnlyCellStrategy.apply(&mut grid));
        assert_eq!(before, grid);
    }

    #[test]
    fn composite_strategy_applies_both() {
        let mut naked_grid = SudokuGrid::new();

        for column in 0..8 {
            naked_grid.set_cell(column, 0, column + 1).unwrap();
        }

        let mut hidden_grid = hidden_single_grid();
        let composite =
            CompositeStrategy::new(NakedSingleStrategy, OnlyCellStrategy);

        assert!(composite.apply(&mut naked_grid));
        assert_eq!(Some(9), naked_grid.get_cell(8, 0).unwrap());

        assert!(composite.apply(&mut hidden_grid));
        assert_eq!(Some(2), hidden_grid.get_cell(0, 1).unwrap());
    }
}
