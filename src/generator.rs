//! This module contains logic for generating random Sudoku puzzles.
//!
//! Generation of Sudoku puzzles is done by first generating a full grid with
//! a [Generator] and then removing clues using a [Reducer]. Every removal is
//! validated: the puzzle must keep a unique solution, and for the difficulty
//! profiles that request it, the puzzle must stay solvable by naked and
//! hidden singles. The [generate_puzzle] function wraps both steps and pairs
//! the result with its solution in a [Puzzle].

use crate::{SudokuGrid, SIZE};
use crate::error::{SudokuError, SudokuParseError, SudokuResult};
use crate::solver::BacktrackingSolver;
use crate::solver::strategy::{required_technique, Technique};

use log::{debug, warn};

use rand::Rng;
use rand::rngs::ThreadRng;

use rand_distr::Normal;

use serde::{Deserialize, Serialize};

use std::collections::VecDeque;
use std::f64::consts;
use std::str::FromStr;

/// A generator randomly generates a full [SudokuGrid], that is, a grid with
/// no missing digits. It uses a random number generator to decide the
/// content. For most cases, sensible defaults are provided by
/// [Generator::new_default]; tests that need reproducible output can inject
/// a seeded random number generator through [Generator::new].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill_rec(&mut self, grid: &mut SudokuGrid, column: usize, row: usize)
            -> bool {
        if row == SIZE {
            return true;
        }

        let next_column = (column + 1) % SIZE;
        let next_row =
            if next_column == 0 { row + 1 } else { row };

        if grid.get_cell(column, row).unwrap().is_some() {
            return self.fill_rec(grid, next_column, next_row);
        }

        for number in shuffle(&mut self.rng, 1..=SIZE) {
            if grid.is_valid_number(column, row, number).unwrap() {
                grid.set_cell(column, row, number).unwrap();

                if self.fill_rec(grid, next_column, next_row) {
                    return true;
                }

                grid.clear_cell(column, row).unwrap();
            }
        }

        false
    }

    /// Fills the given [SudokuGrid] with random digits that match all
    /// already present digits according to the standard rules. The search
    /// visits empty cells in left-to-right, top-to-bottom order and tries
    /// the digits of each cell in a freshly shuffled order, so repeated
    /// calls on equal grids yield varied completions. If filling is not
    /// possible, an error will be returned.
    ///
    /// If no error is returned, it is guaranteed that [SudokuGrid::is_valid]
    /// on `grid` returns `true` and no cell is empty after this operation.
    /// Otherwise, the grid remains unchanged.
    ///
    /// # Arguments
    ///
    /// * `grid`: The Sudoku grid to fill with random digits.
    ///
    /// # Errors
    ///
    /// * `SudokuError::Unsolvable` If there are no sets of digits that can
    /// be entered into the empty cells without violating the rules, or the
    /// digits already present violate them.
    pub fn fill(&mut self, grid: &mut SudokuGrid) -> SudokuResult<()> {
        if !grid.is_valid() {
            return Err(SudokuError::Unsolvable);
        }

        if self.fill_rec(grid, 0, 0) {
            Ok(())
        }
        else {
            Err(SudokuError::Unsolvable)
        }
    }

    /// Generates a new random [SudokuGrid] with all digits, that is, a
    /// complete and valid 81-cell assignment.
    pub fn generate(&mut self) -> SudokuGrid {
        let mut grid = SudokuGrid::new();

        // An empty grid always has at least one completion.
        self.fill(&mut grid).unwrap();

        debug!("generated full grid");
        grid
    }
}

/// An enumeration of the difficulty profiles a [Reducer] can aim for. Each
/// profile determines the number of clues the reducer tries to retain and
/// whether every removal must keep the puzzle solvable by naked and hidden
/// singles.
///
/// A profile can be parsed from its lowercase name, as it is used by
/// consumers of the library:
///
/// ```
/// use sudoku_gen::generator::Difficulty;
///
/// assert_eq!(Ok(Difficulty::Easy), "easy".parse());
/// ```
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {

    /// Aims for 48 clues and keeps the puzzle solvable by singles.
    Easy,

    /// Aims for 35 clues and keeps the puzzle solvable by singles.
    Medium,

    /// Aims for 25 clues. The puzzle may require deductions beyond singles.
    Hard,

    /// Aims for 17 clues, the minimum any uniquely solveable Sudoku can
    /// have. The puzzle may require deductions beyond singles. In most
    /// cases, the removal loop stabilizes at a higher clue count.
    Minimal
}

impl Difficulty {

    /// Gets the number of clues the [Reducer] aims to retain for this
    /// profile. The final puzzle may have more clues if the removal loop
    /// terminates early, but never less.
    pub fn target_clues(self) -> usize {
        match self {
            Difficulty::Easy => 48,
            Difficulty::Medium => 35,
            Difficulty::Hard => 25,
            Difficulty::Minimal => 17
        }
    }

    /// Indicates whether every removal for this profile must keep the
    /// puzzle solvable by naked and hidden singles. This is the case for
    /// [Difficulty::Easy] and [Difficulty::Medium].
    pub fn enforces_singles_gate(self) -> bool {
        match self {
            Difficulty::Easy | Difficulty::Medium => true,
            Difficulty::Hard | Difficulty::Minimal => false
        }
    }
}

impl FromStr for Difficulty {
    type Err = SudokuParseError;

    fn from_str(name: &str) -> Result<Difficulty, SudokuParseError> {
        match name {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "minimal" | "minima" => Ok(Difficulty::Minimal),
            _ => Err(SudokuParseError::UnknownDifficulty)
        }
    }
}

/// A trait for types which can prioritize the order in which clues are
/// removed from a grid. Note that there is some random element to the
/// ordering (see [RemovalPrioritizer::rough_priority] for details on the
/// mathematics). It is blanket-implemented for all types implementing
/// `Fn(&(usize, usize)) -> f64`.
pub trait RemovalPrioritizer {

    /// Determines the approximate priority of removing the clue in the
    /// given `(column, row)` cell. Lower numbers indicate clues that are
    /// tried first. When determining the order of two removals, each of
    /// these scores is added to a normally distributed random number with a
    /// standard deviation of `1 / sqrt(2)`. The removal with the lower sum
    /// will be tried first.
    ///
    /// In other words, if the difference between the scores of two removals
    /// `a` and `b` is `score(a) - score(b) = x`, then the probability that
    /// `a` is tried _after_ `b` is equivalent to the probability a normally
    /// distributed random number is _below_ the `x`-sigma interval.
    ///
    /// For simple priorization where some clues are always tried first,
    /// separate them by differences of at least 10 to ensure a negligible
    /// probability of overlap.
    ///
    /// This method must _always_ return finite numbers or infinities.
    fn rough_priority(&mut self, cell: &(usize, usize)) -> f64;
}

struct EqualPrioritizer;

impl RemovalPrioritizer for EqualPrioritizer {
    fn rough_priority(&mut self, _: &(usize, usize)) -> f64 {
        0.0
    }
}

impl<F: Fn(&(usize, usize)) -> f64> RemovalPrioritizer for F {
    fn rough_priority(&mut self, cell: &(usize, usize)) -> f64 {
        self(cell)
    }
}

fn prioritize<P, R>(cell: &(usize, usize), prioritizer: &mut P, rng: &mut R)
    -> f64
where
    P: RemovalPrioritizer,
    R: Rng
{
    let distr = Normal::new(0.0, consts::FRAC_1_SQRT_2).unwrap();
    prioritizer.rough_priority(cell) + rng.sample(distr)
}

/// The default number of consecutive failed removal attempts after which a
/// [Reducer] gives up.
const DEFAULT_ATTEMPT_CAP: usize = 50;

/// A reducer can be applied to the output of a [Generator] to remove clues
/// from the grid as long as the puzzle keeps a unique solution. The number
/// of removed clues and the permitted solving techniques are controlled by a
/// [Difficulty]. A random number generator decides which clues are removed.
///
/// Removal trials run against an independent copy of the puzzle, so a
/// rejected trial leaves the puzzle untouched. Rejected cells are queued for
/// a later retry; a configurable number of consecutive failures aborts the
/// loop, stabilizing the puzzle at a higher clue count rather than looping
/// indefinitely.
///
/// [Reducer::new_default] will yield a reducer with a [ThreadRng] and the
/// default failure cap of 50.
pub struct Reducer<R: Rng> {
    rng: R,
    attempt_cap: usize
}

impl Reducer<ThreadRng> {

    /// Generates a new reducer with a [ThreadRng] to decide which clues are
    /// removed and the default failure cap.
    pub fn new_default() -> Reducer<ThreadRng> {
        Reducer::new(rand::thread_rng())
    }
}

impl<R: Rng> Reducer<R> {

    /// Creates a new reducer with the given random number generator and the
    /// default failure cap.
    ///
    /// # Arguments
    ///
    /// * `rng`: A random number generator that decides which clues are
    /// removed.
    pub fn new(rng: R) -> Reducer<R> {
        Reducer::with_attempt_cap(rng, DEFAULT_ATTEMPT_CAP)
    }

    /// Creates a new reducer with the given random number generator and
    /// failure cap.
    ///
    /// # Arguments
    ///
    /// * `rng`: A random number generator that decides which clues are
    /// removed.
    /// * `attempt_cap`: The number of consecutive failed removal attempts
    /// after which the reducer gives up. Any successful removal resets the
    /// count. This is a pacing heuristic bounding the worst-case generation
    /// time, not a correctness guarantee.
    pub fn with_attempt_cap(rng: R, attempt_cap: usize) -> Reducer<R> {
        Reducer {
            rng,
            attempt_cap
        }
    }

    /// Removes as many clues from the given grid as the difficulty permits.
    /// That is, random clues are removed until the target clue count of the
    /// `difficulty` is reached, every removal keeping the puzzle uniquely
    /// solveable and, if the difficulty demands it, solvable by naked and
    /// hidden singles. All changes are done to the given mutable grid.
    ///
    /// It is expected that the given `grid` is full, i.e. contains no empty
    /// cells; cells that are already empty are skipped.
    ///
    /// The order of removals is fully random. The clue count of the grid
    /// never increases during this operation, and never drops below the
    /// difficulty's target.
    pub fn reduce(&mut self, grid: &mut SudokuGrid, difficulty: Difficulty) {
        self.reduce_with_priority(grid, difficulty, EqualPrioritizer)
    }

    /// Removes as many clues from the given grid as the difficulty permits,
    /// like [Reducer::reduce], but the order of removal trials is
    /// influenced by the given `prioritizer`. See the documentation of
    /// [RemovalPrioritizer].
    pub fn reduce_with_priority<P>(&mut self, grid: &mut SudokuGrid,
        difficulty: Difficulty, mut prioritizer: P)
    where
        P: RemovalPrioritizer
    {
        let mut prioritized_cells: Vec<(f64, (usize, usize))> = (0..SIZE)
            .flat_map(|column| (0..SIZE).map(move |row| (column, row)))
            .map(|cell| (prioritize(&cell, &mut prioritizer, &mut self.rng), cell))
            .collect();

        // The next trial pops from the back, so the back holds the lowest
        // scores. Failed cells are pushed to the front, i.e. retried last.
        prioritized_cells.sort_by(|(p1, _), (p2, _)| p2.partial_cmp(p1).unwrap());

        let mut queue: VecDeque<(usize, usize)> = prioritized_cells.into_iter()
            .map(|(_, cell)| cell)
            .collect();
        let target = difficulty.target_clues();
        let mut clues = grid.count_clues();
        let mut attempts = 0;

        while clues > target {
            let (column, row) = match queue.pop_back() {
                Some(cell) => cell,
                None => break
            };
            let number = match grid.get_cell(column, row).unwrap() {
                Some(number) => number,
                None => continue
            };

            grid.clear_cell(column, row).unwrap();

            if removal_keeps_solvable(grid, difficulty) {
                clues -= 1;
                attempts = 0;
            }
            else {
                grid.set_cell(column, row, number).unwrap();
                queue.push_front((column, row));
                attempts += 1;

                if attempts >= self.attempt_cap {
                    warn!(
                        "aborting clue removal after {} consecutive failed \
                        attempts, {} clues remain (target {})",
                        attempts, clues, target);
                    break;
                }
            }
        }

        debug!("reduced grid to {} clues (target {})", clues, target);
    }
}

fn removal_keeps_solvable(grid: &SudokuGrid, difficulty: Difficulty) -> bool {
    BacktrackingSolver.count_solutions(grid, 2) == 1 &&
        (!difficulty.enforces_singles_gate() ||
            required_technique(grid) != Technique::Advanced)
}

/// A generated puzzle grid, paired with its unique solution and the
/// [Difficulty] it was generated for. The puzzle's non-empty cells are the
/// clues; every clue equals the corresponding cell of the solution.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Puzzle {
    grid: SudokuGrid,
    solution: SudokuGrid,
    difficulty: Difficulty
}

impl Puzzle {

    /// Gets the puzzle grid, that is, the partial grid presented to the
    /// player.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// Gets the unique solution of the puzzle grid.
    pub fn solution(&self) -> &SudokuGrid {
        &self.solution
    }

    /// Gets the difficulty profile this puzzle was generated for.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Indicates whether the given [SudokuGrid] solves this puzzle. That is
    /// the case if all clues of the puzzle can be found in `candidate`, it
    /// matches the standard rules, and it is full.
    pub fn is_solved_by(&self, candidate: &SudokuGrid) -> bool {
        self.grid.is_subset(candidate) && candidate.is_valid() &&
            candidate.is_full()
    }
}

/// Generates a [Puzzle] of the given difficulty, using a [ThreadRng] for
/// all random decisions. This generates a full grid, removes clues
/// according to the difficulty, and derives the solution.
pub fn generate_puzzle(difficulty: Difficulty) -> Puzzle {
    let mut generator = Generator::new_default();
    let mut reducer = Reducer::new_default();
    generate_puzzle_with(&mut generator, &mut reducer, difficulty)
}

/// Generates a [Puzzle] of the given difficulty, like [generate_puzzle],
/// but with an explicit [Generator] and [Reducer]. This allows seeding the
/// random number generators, which makes the output reproducible.
pub fn generate_puzzle_with<R1, R2>(generator: &mut Generator<R1>,
    reducer: &mut Reducer<R2>, difficulty: Difficulty) -> Puzzle
where
    R1: Rng,
    R2: Rng
{
    let mut grid = generator.generate();
    reducer.reduce(&mut grid, difficulty);

    let mut solution = grid.clone();

    // The reduced grid is uniquely completable, so filling cannot fail.
    generator.fill(&mut solution).unwrap();

    Puzzle {
        grid,
        solution,
        difficulty
    }
}
