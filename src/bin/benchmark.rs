//! Throughput of the sparse engine on growing and steady workloads

use std::time::Instant;
use rand::{SeedableRng, rngs::StdRng};
use infinite_life::domain::{Coord, LifeEngine, Pattern, Region, presets, soup};

struct Run {
    generations: u32,
    elapsed_ms: f64,
    final_population: usize,
    changed_cells: usize,
}

fn run(engine: &mut LifeEngine, generations: u32) -> Run {
    let mut changed_cells = 0;
    let start = Instant::now();
    for _ in 0..generations {
        changed_cells += engine.calculate_next_tick().len();
    }
    Run {
        generations,
        elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        final_population: engine.population(),
        changed_cells,
    }
}

fn pattern_engine(pattern: &Pattern) -> LifeEngine {
    let mut engine = LifeEngine::new();
    pattern.place_centered(&mut engine, Coord::ORIGIN);
    engine
}

fn soup_engine(size: i32, seed: u64) -> LifeEngine {
    let mut engine = LifeEngine::new();
    let half = size / 2;
    let region = Region::spanning(Coord::new(-half, -half), Coord::new(half - 1, half - 1));
    soup::scatter(&mut engine, region, 0.5, &mut StdRng::seed_from_u64(seed));
    engine
}

fn report(name: &str, run: &Run) {
    let per_gen = run.elapsed_ms / run.generations as f64;
    let cells_per_sec = run.changed_cells as f64 / (run.elapsed_ms / 1000.0).max(f64::EPSILON);
    println!(
        "{:>22} {:>8} {:>12.3} {:>12} {:>14.1}",
        name,
        run.generations,
        per_gen,
        run.final_population,
        cells_per_sec / 1_000_000.0,
    );
}

fn main() {
    println!("=== Sparse Life Benchmark ===\n");
    println!("{:>22} {:>8} {:>12} {:>12} {:>14}", "Workload", "Gens", "ms/gen", "Population", "M changes/s");
    println!("{:-<72}", "");

    let workloads = [
        (presets::glider_gun(), 1_000),
        (presets::r_pentomino(), 1_103),
        (presets::acorn(), 5_206),
        (presets::pulsar(), 300),
    ];
    for (pattern, generations) in &workloads {
        let mut engine = pattern_engine(pattern);
        report(pattern.name, &run(&mut engine, *generations));
    }

    for size in [64, 256, 512] {
        let mut engine = soup_engine(size, 0xC0FFEE);
        report(&format!("Soup {}x{}", size, size), &run(&mut engine, 200));
    }

    // Two gliders far apart cost the same as two gliders side by side
    println!("\n=== Distance independence ===\n");
    for distance in [10, 10_000, 1_000_000_000] {
        let mut engine = LifeEngine::new();
        presets::glider().place_on(&mut engine, Coord::ORIGIN);
        presets::glider().place_on(&mut engine, Coord::new(distance, distance));
        report(&format!("gap {}", distance), &run(&mut engine, 10_000));
    }
}
