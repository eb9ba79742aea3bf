// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements an easy-to-understand engine for classic 9x9
//! Sudoku. It supports the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Checking validity of grids and individual placements according to the
//! standard rules
//! * Solving Sudoku using a perfect backtracking algorithm and counting
//! solutions up to a configurable bound
//! * Generating random full grids and deriving puzzles from them by removing
//! clues while preserving a unique solution
//! * Calibrating puzzle difficulty, including a mode in which the puzzle
//! stays solvable by naked and hidden singles alone
//!
//! # Parsing and printing Sudoku
//!
//! See [SudokuGrid::parse] for the exact format of a Sudoku code.
//!
//! Codes can be used to exchange Sudoku, while pretty prints can be used to
//! display a Sudoku in a clearer manner. An example of how to parse and
//! display a Sudoku grid is provided below.
//!
//! ```
//! use sudoku_gen::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("\
//!      , , , ,8,1, , , ,\
//!      , ,2, , ,7,8, , ,\
//!      ,5,3, , , ,1,7, ,\
//!     3,7, , , , , , , ,\
//!     6, , , , , , , ,3,\
//!      , , , , , , ,2,4,\
//!      ,6,9, , , ,2,3, ,\
//!      , ,5,9, , ,4, , ,\
//!      , , ,6,5, , , , ").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking validity
//!
//! Validity can be checked for the entire grid with [SudokuGrid::is_valid]
//! or for a potential placement with [SudokuGrid::is_valid_number], which
//! does not require changing the grid's state.
//!
//! ```
//! use sudoku_gen::SudokuGrid;
//!
//! let mut grid = SudokuGrid::new();
//! grid.set_cell(0, 0, 4).unwrap();
//!
//! // A second 4 in the same row would violate the rules.
//! assert!(!grid.is_valid_number(5, 0, 4).unwrap());
//!
//! grid.set_cell(5, 0, 4).unwrap();
//! assert!(!grid.is_valid());
//! ```
//!
//! # Solving Sudoku
//!
//! This crate offers a [Solver](solver::Solver) trait for structs that can
//! totally or partially solve Sudoku (that is, able to solve every Sudoku
//! with a unique solution or not). As a complete implementation,
//! [BacktrackingSolver](solver::BacktrackingSolver) is provided, which
//! detects impossible and ambiguous Sudoku by counting solutions up to a
//! bound.
//!
//! ```
//! use sudoku_gen::SudokuGrid;
//! use sudoku_gen::solver::{BacktrackingSolver, Solution, Solver};
//!
//! let puzzle = SudokuGrid::parse("\
//!      , , , ,8,1, , , ,\
//!      , ,2, , ,7,8, , ,\
//!      ,5,3, , , ,1,7, ,\
//!     3,7, , , , , , , ,\
//!     6, , , , , , , ,3,\
//!      , , , , , , ,2,4,\
//!      ,6,9, , , ,2,3, ,\
//!      , ,5,9, , ,4, , ,\
//!      , , ,6,5, , , , ").unwrap();
//! let expected = SudokuGrid::parse("\
//!     7,4,6,2,8,1,3,5,9,\
//!     9,1,2,5,3,7,8,4,6,\
//!     8,5,3,4,9,6,1,7,2,\
//!     3,7,4,1,2,5,6,9,8,\
//!     6,2,8,7,4,9,5,1,3,\
//!     5,9,1,3,6,8,7,2,4,\
//!     1,6,9,8,7,4,2,3,5,\
//!     2,8,5,9,1,3,4,6,7,\
//!     4,3,7,6,5,2,9,8,1").unwrap();
//!
//! assert_eq!(Solution::Unique(expected), BacktrackingSolver.solve(&puzzle));
//! ```
//!
//! # Generating Sudoku
//!
//! Probably the most interesting feature of this crate is the generation of
//! random puzzles. This is done in two steps: generating a full grid using a
//! [Generator](generator::Generator) and then removing clues with a
//! [Reducer](generator::Reducer), which keeps the puzzle uniquely solveable
//! and respects the requested [Difficulty](generator::Difficulty). The
//! convenience function [generate_puzzle](generator::generate_puzzle) wraps
//! both steps and also derives the solution.
//!
//! ```
//! use sudoku_gen::generator::{self, Difficulty};
//! use sudoku_gen::solver::BacktrackingSolver;
//!
//! let puzzle = generator::generate_puzzle(Difficulty::Easy);
//!
//! assert!(puzzle.grid().count_clues() >= Difficulty::Easy.target_clues());
//! assert_eq!(1, BacktrackingSolver.count_solutions(puzzle.grid(), 2));
//! assert!(puzzle.is_solved_by(puzzle.solution()));
//! ```
//!
//! # Note regarding performance
//!
//! Deriving a puzzle runs a solution-counting solver for every removed clue.
//! This is doable within fractions of a second, but it is strongly
//! recommended to use at least `opt-level = 2`, even in tests that use
//! puzzle generation.

pub mod error;
pub mod generator;
pub mod solver;
pub mod util;

use error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};
use util::DigitSet;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of columns and rows of a Sudoku grid.
pub const SIZE: usize = 9;

/// The width and height of one of the 3x3 blocks that compose the grid.
pub const BLOCK_SIZE: usize = 3;

/// The total number of cells in a Sudoku grid.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// One of the 27 constraint groups of a grid (a row, a column, or a 3x3
/// block), given as the `(column, row)` coordinates of its nine cells.
pub type Group = Vec<(usize, usize)>;

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

/// A 9x9 Sudoku grid composed of 81 cells that are organized into nine 3x3
/// blocks. Each cell may or may not be occupied by a digit from 1 to 9. In a
/// completely filled, valid grid, each digit appears exactly once per row,
/// column, and block.
///
/// During search and puzzle construction, grids are partially filled. Every
/// phase that speculatively mutates a grid operates on its own instance or
/// an explicit clone.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct SudokuGrid {
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char,
        newline: bool) -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.get_cell(x, y).unwrap()), ' ', '║',
        true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

impl SudokuGrid {

    /// Creates a new Sudoku grid in which all 81 cells are empty.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: vec![None; CELL_COUNT]
        }
    }

    /// Parses a code encoding a Sudoku grid. The code is a comma-separated
    /// list of 81 entries, which are either empty or a digit from 1 to 9.
    /// The entries are assigned left-to-right, top-to-bottom, where each row
    /// is completed before the next one is started. Whitespace in the
    /// entries is ignored to allow for more intuitive formatting.
    ///
    /// Parsing fails fast on malformed input: a wrong number of entries, an
    /// entry that is not a number, and a number outside the range `[1, 9]`
    /// are all rejected before the grid reaches any solver.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut grid = SudokuGrid::new();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let number = entry.parse::<usize>()?;

            if number == 0 || number > SIZE {
                return Err(SudokuParseError::InvalidNumber);
            }

            grid.cells[i] = Some(number);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string
    /// and parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_gen::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, 9]`, `false` will always be
    /// returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Indicates whether the given number would be valid in the cell at the
    /// given location. That is, if the number already occurs in the cell's
    /// row, column, or 3x3 block, `false` is returned, and `true` otherwise.
    /// The checked cell itself is excluded, so a cell never conflicts with
    /// its own content.
    ///
    /// This is a pure query consisting of the 27 peer checks of the cell; it
    /// has no side effects and does not require changing the grid's state.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to check whether it is valid in the given
    /// cell. Must be in the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn is_valid_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        for other_column in 0..SIZE {
            if other_column != column &&
                    self.has_number(other_column, row, number)? {
                return Ok(false);
            }
        }

        for other_row in 0..SIZE {
            if other_row != row &&
                    self.has_number(column, other_row, number)? {
                return Ok(false);
            }
        }

        let block_column = (column / BLOCK_SIZE) * BLOCK_SIZE;
        let block_row = (row / BLOCK_SIZE) * BLOCK_SIZE;

        for other_row in block_row..(block_row + BLOCK_SIZE) {
            for other_column in block_column..(block_column + BLOCK_SIZE) {
                if (other_column != column || other_row != row) &&
                        self.has_number(other_column, other_row, number)? {
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    /// Indicates whether the entire grid matches the standard Sudoku rules,
    /// that is, no digit occurs more than once in any row, column, or 3x3
    /// block. Empty cells are permitted, so partial grids can be valid.
    pub fn is_valid(&self) -> bool {
        for group in SudokuGrid::groups() {
            let mut seen = DigitSet::new();

            for (column, row) in group {
                if let Some(number) = self.get_cell(column, row).unwrap() {
                    if !seen.insert(number) {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Enumerates all 27 constraint groups of a grid: the nine rows, the
    /// nine columns, and the nine 3x3 blocks, in that order.
    pub fn groups() -> Vec<Group> {
        let mut groups = Vec::with_capacity(3 * SIZE);

        for row in 0..SIZE {
            let mut group = Group::new();

            for column in 0..SIZE {
                group.push((column, row));
            }

            groups.push(group);
        }

        for column in 0..SIZE {
            let mut group = Group::new();

            for row in 0..SIZE {
                group.push((column, row));
            }

            groups.push(group);
        }

        for block_row in 0..BLOCK_SIZE {
            let base_row = block_row * BLOCK_SIZE;

            for block_column in 0..BLOCK_SIZE {
                let base_column = block_column * BLOCK_SIZE;
                let mut group = Group::new();

                for sub_row in 0..BLOCK_SIZE {
                    let row = base_row + sub_row;

                    for sub_column in 0..BLOCK_SIZE {
                        let column = base_column + sub_column;
                        group.push((column, row));
                    }
                }

                groups.push(group);
            }
        }

        groups
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average Sudoku with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some number must be
    /// filled in `other` with the same number. If this condition is met,
    /// `true` is returned, and `false` otherwise.
    pub fn is_subset(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(self_number) =>
                        match other_cell {
                            Some(other_number) => self_number == other_number,
                            None => false
                        },
                    None => true
                }
            })
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some number
    /// must be filled in this one with the same number. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    pub fn is_superset(&self, other: &SudokuGrid) -> bool {
        other.is_subset(self)
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Option<usize>] {
        &self.cells
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}

impl From<SudokuGrid> for String {
    fn from(grid: SudokuGrid) -> String {
        grid.to_parseable_string()
    }
}

impl TryFrom<String> for SudokuGrid {
    type Error = SudokuParseError;

    fn try_from(code: String) -> SudokuParseResult<SudokuGrid> {
        SudokuGrid::parse(code.as_str())
    }
}
