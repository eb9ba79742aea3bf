use criterion::{
    criterion_group,
    criterion_main,
    BenchmarkGroup,
    Criterion,
    SamplingMode
};
use criterion::measurement::WallTime;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use sudoku_gen::SudokuGrid;
use sudoku_gen::generator::{
    generate_puzzle_with,
    Difficulty,
    Generator,
    Reducer
};
use sudoku_gen::solver::{BacktrackingSolver, Solution, Solver};
use sudoku_gen::solver::strategy::{
    CompositeStrategy,
    NakedSingleStrategy,
    OnlyCellStrategy,
    StrategicSolver
};

use std::time::Duration;

// Explanation of benchmark classes:
//
// generation: Full-grid generation and complete puzzle derivation for each
//             difficulty profile.
// backtracking: A BacktrackingSolver solving pre-generated puzzles.
// strategic singles: A StrategicSolver limited to naked and hidden singles
//                    solving pre-generated easy puzzles.
//
// All puzzles are generated from fixed seeds, so runs are comparable.

const MEASUREMENT_TIME_SECS: u64 = 30;
const SOLVER_SAMPLE_SIZE: usize = 100;
const GENERATION_SAMPLE_SIZE: usize = 20;
const TASK_COUNT: usize = 10;
const GENERATOR_SEED: u64 = 42;
const REDUCER_SEED: u64 = 23;

const DIFFICULTIES: [(&str, Difficulty); 4] = [
    ("easy", Difficulty::Easy),
    ("medium", Difficulty::Medium),
    ("hard", Difficulty::Hard),
    ("minimal", Difficulty::Minimal)
];

struct Task {
    puzzle: SudokuGrid,
    solution: SudokuGrid
}

fn tasks(difficulty: Difficulty) -> Vec<Task> {
    let mut generator =
        Generator::new(ChaCha20Rng::seed_from_u64(GENERATOR_SEED));
    let mut reducer = Reducer::new(ChaCha20Rng::seed_from_u64(REDUCER_SEED));

    (0..TASK_COUNT)
        .map(|_| {
            let puzzle =
                generate_puzzle_with(&mut generator, &mut reducer, difficulty);

            Task {
                puzzle: puzzle.grid().clone(),
                solution: puzzle.solution().clone()
            }
        })
        .collect()
}

fn solve_tasks<S: Solver>(tasks: &[Task], solver: &S) {
    for task in tasks {
        let computed_solution = solver.solve(&task.puzzle);
        assert_eq!(Solution::Unique(task.solution.clone()), computed_solution);
    }
}

fn configure(group: &mut BenchmarkGroup<WallTime>, sample_size: usize) {
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));
    group.sample_size(sample_size);
    group.sampling_mode(SamplingMode::Flat);
}

fn benchmark_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    configure(&mut group, GENERATION_SAMPLE_SIZE);

    group.bench_function("full grid", |b| {
        let mut generator =
            Generator::new(ChaCha20Rng::seed_from_u64(GENERATOR_SEED));
        b.iter(|| generator.generate())
    });

    for &(id, difficulty) in DIFFICULTIES.iter() {
        group.bench_function(id, move |b| {
            let mut generator =
                Generator::new(ChaCha20Rng::seed_from_u64(GENERATOR_SEED));
            let mut reducer =
                Reducer::new(ChaCha20Rng::seed_from_u64(REDUCER_SEED));
            b.iter(||
                generate_puzzle_with(&mut generator, &mut reducer, difficulty))
        });
    }
}

fn benchmark_backtracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("backtracking");
    configure(&mut group, SOLVER_SAMPLE_SIZE);

    for &(id, difficulty) in DIFFICULTIES.iter() {
        let tasks = tasks(difficulty);
        group.bench_function(id,
            |b| b.iter(|| solve_tasks(&tasks, &BacktrackingSolver)));
    }
}

fn benchmark_strategic_singles(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategic singles");
    configure(&mut group, SOLVER_SAMPLE_SIZE);

    let solver = StrategicSolver::new(
        CompositeStrategy::new(NakedSingleStrategy, OnlyCellStrategy));

    for &(id, difficulty) in
            &[("easy", Difficulty::Easy), ("medium", Difficulty::Medium)] {
        let tasks = tasks(difficulty);
        group.bench_function(id, |b| b.iter(|| solve_tasks(&tasks, &solver)));
    }
}

criterion_group!(all,
    benchmark_generation,
    benchmark_backtracking,
    benchmark_strategic_singles
);

criterion_main!(all);
