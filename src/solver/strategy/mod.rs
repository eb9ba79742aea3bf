//! This module is about technique-limited solving of Sudoku. In contrast to
//! backtracking, deductions here mirror what a human player can do without
//! guessing: entering naked singles (cells with only one candidate) and
//! hidden singles (digits with only one possible cell in a row, column, or
//! block).
//!
//! This module contains the definition of the [Strategy] trait, which all
//! strategies must implement, the candidate computation used by them, and
//! the [required_technique] classifier, which summarizes how much deduction
//! power a grid currently requires. The classifier is what the
//! [Reducer](crate::generator::Reducer) consults when a difficulty profile
//! demands that a puzzle stays solvable by singles.
//!
//! # Candidates
//!
//! The candidates of an empty cell are the digits not excluded by any of its
//! row, column, or block peers. They are always recomputed from the current
//! grid state on demand and never cached across mutations.
//!
//! ```
//! use sudoku_gen::SudokuGrid;
//! use sudoku_gen::solver::strategy::cell_candidates;
//!
//! let mut grid = SudokuGrid::new();
//! grid.set_cell(0, 0, 1).unwrap();
//! grid.set_cell(1, 1, 2).unwrap();
//!
//! // (2, 0) shares a row with the 1 and a block with the 2.
//! let candidates = cell_candidates(&grid, 2, 0).unwrap();
//!
//! assert_eq!(7, candidates.len());
//! assert!(!candidates.contains(1));
//! assert!(!candidates.contains(2));
//! ```
//!
//! # Classifying grids
//!
//! ```
//! use sudoku_gen::SudokuGrid;
//! use sudoku_gen::solver::strategy::{required_technique, Technique};
//!
//! let mut grid = SudokuGrid::new();
//!
//! for column in 0..8 {
//!     grid.set_cell(column, 0, column + 1).unwrap();
//! }
//!
//! // The last cell of the first row can only hold a 9.
//! assert_eq!(Technique::Single, required_technique(&grid));
//! ```

use crate::{SudokuGrid, SIZE};
use crate::error::SudokuResult;
use crate::util::DigitSet;

pub mod impls;
pub mod solvers;

pub use impls::*;
pub use solvers::*;

/// Computes the candidate digits for the cell at the given position, that
/// is, the digits that do not yet occur in the cell's row, column, or 3x3
/// block. For a filled cell, the empty set is returned by convention.
///
/// The result is derived from the current grid state on every call; it is
/// never cached.
///
/// # Arguments
///
/// * `column`: The column (x-coordinate) of the cell. Must be in the range
/// `[0, 9[`.
/// * `row`: The row (y-coordinate) of the cell. Must be in the range
/// `[0, 9[`.
///
/// # Errors
///
/// If either `column` or `row` are not in the specified range. In that case,
/// `SudokuError::OutOfBounds` is returned.
pub fn cell_candidates(grid: &SudokuGrid, column: usize, row: usize)
        -> SudokuResult<DigitSet> {
    if grid.get_cell(column, row)?.is_some() {
        return Ok(DigitSet::new());
    }

    let mut candidates = DigitSet::new();

    for number in 1..=SIZE {
        if grid.is_valid_number(column, row, number)? {
            candidates.insert(number);
        }
    }

    Ok(candidates)
}

/// The amount of cells of a group in which a digit can be placed, tracked
/// while scanning the group's cells.
#[derive(Clone)]
pub(crate) enum Location {
    None,
    One(usize, usize),
    Multiple
}

impl Location {
    pub(crate) fn union(&self, column: usize, row: usize) -> Location {
        match self {
            Location::None => Location::One(column, row),
            Location::One(_, _) => Location::Multiple,
            Location::Multiple => Location::Multiple
        }
    }
}

/// The level of deduction a grid currently requires to make progress, as
/// determined by [required_technique].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Technique {

    /// At least one naked or hidden single exists, so the next digit can be
    /// entered without guessing.
    Single,

    /// The grid is full; there is nothing left to deduce.
    Solved,

    /// Progress requires deductions beyond naked and hidden singles.
    Advanced
}

/// Classifies how much deduction power the given grid currently requires.
///
/// The classification is determined as follows:
///
/// 1. If any empty cell has exactly one candidate (a *naked single*), the
/// result is `Technique::Single`.
/// 2. Otherwise, if in any row, column, or block some digit has exactly one
/// cell left that admits it (a *hidden single*), the result is also
/// `Technique::Single`.
/// 3. Otherwise, if no empty cells remain, the result is
/// `Technique::Solved`.
/// 4. In all other cases, the result is `Technique::Advanced`.
///
/// This function performs no mutation; it is a read-only classifier over a
/// snapshot of the grid.
pub fn required_technique(grid: &SudokuGrid) -> Technique {
    let mut has_empty_cell = false;

    for row in 0..SIZE {
        for column in 0..SIZE {
            if grid.get_cell(column, row).unwrap().is_some() {
                continue;
            }

            has_empty_cell = true;

            if cell_candidates(grid, column, row).unwrap().len() == 1 {
                return Technique::Single;
            }
        }
    }

    for group in SudokuGrid::groups() {
        let mut locations = vec![Location::None; SIZE + 1];

        for (column, row) in group {
            let candidates = cell_candidates(grid, column, row).unwrap();

            for number in candidates.iter() {
                let location = &locations[number];
                locations[number] = location.union(column, row);
            }
        }

        for location in locations {
            if let Location::One(_, _) = location {
                return Technique::Single;
            }
        }
    }

    if !has_empty_cell {
        return Technique::Solved;
    }

    Technique::Advanced
}

/// A trait for strategies, which use logical reasoning to enter digits into
/// a Sudoku grid.
pub trait Strategy {

    /// Applies this strategy to the given grid, entering every digit it can
    /// deduce. Candidates are recomputed from the grid as needed.
    ///
    /// This method shall return `true` if and only if something has changed,
    /// that is, at least one digit has been entered.
    fn apply(&self, grid: &mut SudokuGrid) -> bool;
}
