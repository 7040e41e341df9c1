//! Classification throughput over seeded random rows.
//!
//! Use with `--release` for meaningful numbers.

#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use rand::RngCore;
use rand::SeedableRng;
use row_life::{Pattern, Simulation};
use std::time::Instant;

struct Scenario {
    name: &'static str,
    width: usize,
    density: f64,
    rows: usize,
    seed: u64,
}

fn random_cells(rng: &mut rand::rngs::StdRng, width: usize, density: f64) -> Vec<bool> {
    let threshold = (u64::MAX as f64 * density) as u64;
    (0..width).map(|_| rng.next_u64() <= threshold).collect()
}

fn run_scenario(s: &Scenario) -> row_life::Result<(f64, u64, [usize; 4])> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(s.seed);
    let inputs: Vec<Vec<bool>> = (0..s.rows)
        .map(|_| random_cells(&mut rng, s.width, s.density))
        .collect();

    let mut histogram = [0usize; 4];
    let mut generations = 0u64;
    let start = Instant::now();
    for cells in &inputs {
        let outcome = Simulation::from_cells(cells)?.run()?;
        generations += outcome.generations as u64;
        let slot = Pattern::ALL
            .iter()
            .position(|&p| p == outcome.pattern)
            .unwrap_or(3);
        histogram[slot] += 1;
    }
    let total_ms = start.elapsed().as_secs_f64() * 1000.0;
    Ok((total_ms, generations, histogram))
}

fn main() -> row_life::Result<()> {
    let scenarios = [
        Scenario {
            name: "narrow-sparse",
            width: 16,
            density: 0.25,
            rows: 20_000,
            seed: 0xA1,
        },
        Scenario {
            name: "narrow-dense",
            width: 16,
            density: 0.60,
            rows: 20_000,
            seed: 0xB2,
        },
        Scenario {
            name: "wide-sparse",
            width: 256,
            density: 0.25,
            rows: 2_000,
            seed: 0xC3,
        },
        Scenario {
            name: "wide-dense",
            width: 256,
            density: 0.60,
            rows: 2_000,
            seed: 0xD4,
        },
        Scenario {
            name: "max-line",
            width: row_life::DEFAULT_MAX_LINE_LEN,
            density: 0.42,
            rows: 20,
            seed: 0xE5,
        },
    ];

    println!(
        "{:<16} {:>8} {:>8} {:>12} {:>12} {:>10} {:>10} {:>10} {:>10}",
        "Scenario", "Width", "Rows", "Total(ms)", "Gen/ms", "vanish", "blink", "glide", "other"
    );
    println!("{}", "-".repeat(104));

    for s in &scenarios {
        let (total_ms, generations, histogram) = run_scenario(s)?;
        let rate = generations as f64 / total_ms.max(f64::EPSILON);
        println!(
            "{:<16} {:>8} {:>8} {:>12.3} {:>12.1} {:>10} {:>10} {:>10} {:>10}",
            s.name,
            s.width,
            s.rows,
            total_ms,
            rate,
            histogram[0],
            histogram[1],
            histogram[2],
            histogram[3]
        );
    }
    Ok(())
}
