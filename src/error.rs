//! This module contains some error and result definitions used in this crate.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html) and the [generator](../generator/index.html)
/// module. This does not include errors that occur when parsing Sudoku, see
/// [SudokuParseError](enum.SudokuParseError.html) for that.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that some number is invalid for a Sudoku cell. This is the
    /// case if it is less than 1 or greater than 9.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the 9x9 grid. This is the case if either of them is greater than or
    /// equal to 9.
    OutOfBounds,

    /// An error that is raised whenever it is attempted to fill a grid that
    /// has no valid completion, that is, a grid whose present digits already
    /// violate the rules or exclude every completion.
    Unsolvable
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::InvalidNumber =>
                f.write_str("number outside the range [1, 9]"),
            SudokuError::OutOfBounds =>
                f.write_str("cell coordinates outside the 9x9 grid"),
            SudokuError::Unsolvable =>
                f.write_str("the grid has no valid completion")
        }
    }
}

impl Error for SudokuError { }

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a `SudokuGrid`
/// code or a difficulty name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal 81.
    WrongNumberOfCells,

    /// Indicates that one of the cell entries could not be parsed as a
    /// number.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more
    /// than 9).
    InvalidNumber,

    /// Indicates that a string does not name any of the known difficulty
    /// profiles.
    UnknownDifficulty
}

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongNumberOfCells =>
                f.write_str("number of cell entries is not 81"),
            SudokuParseError::NumberFormatError =>
                f.write_str("cell entry is not a number"),
            SudokuParseError::InvalidNumber =>
                f.write_str("cell entry outside the range [1, 9]"),
            SudokuParseError::UnknownDifficulty =>
                f.write_str("unknown difficulty name")
        }
    }
}

impl Error for SudokuParseError { }

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;
