//! Basic example of using the Sudoku engine

use sudoku_engine::{Grid, SolveResult, Solver};

fn main() {
    env_logger::init();

    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let puzzle = match Grid::from_string(puzzle_string) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Bad puzzle string: {err}");
            return;
        }
    };

    println!("Puzzle:");
    println!("{puzzle}");
    println!("Given cells: {}", 81 - puzzle.empty_count());
    println!("Empty cells: {}\n", puzzle.empty_count());

    // Check the givens before solving
    let report = puzzle.validate();
    if report.is_valid() {
        println!("No conflicts among the given digits\n");
    } else {
        for pos in report.conflicts() {
            println!("Conflict at row {}, column {}", pos.row + 1, pos.col + 1);
        }
        return;
    }

    println!("Solving...\n");
    match Solver::new().solve(&puzzle) {
        SolveResult::Solved(solution) => {
            println!("Solution:");
            println!("{solution}");
        }
        SolveResult::Unsolvable => {
            println!("No solution exists for this puzzle");
        }
    }
}
