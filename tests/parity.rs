use rand::Rng;
use rand::SeedableRng;
use row_life::rowlife::{RULES, Row};

/// Evaluates every cell of the row, not just the filled span.
fn step_naive(cells: &[bool]) -> Vec<bool> {
    let mut next = vec![false; cells.len()];
    for (i, cell) in next.iter_mut().enumerate() {
        let lo = i.saturating_sub(2);
        let hi = (i + 2).min(cells.len() - 1);
        let filled = cells[lo..=hi].iter().filter(|&&c| c).count();
        *cell = if cells[i] {
            filled == 3 || filled == 5
        } else {
            filled == 2 || filled == 3
        };
    }
    next
}

fn run_parity_case(width: usize, density: f64, steps: usize, seed: u64) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let seed_cells: Vec<bool> = (0..width).map(|_| rng.random_bool(density)).collect();

    let mut row = Row::normalize(&seed_cells).unwrap();
    for step in 0..steps {
        let naive = Row::normalize(&step_naive(row.cells())).unwrap();
        let fast = RULES.next_generation(&row).unwrap();
        assert_eq!(
            fast, naive,
            "divergence at step {step} for density {density} seed {seed}"
        );
        row = fast;
    }
}

#[test]
fn parity_sparse_mid_dense() {
    run_parity_case(48, 0.10, 40, 0xA1);
    run_parity_case(48, 0.42, 40, 0xB2);
    run_parity_case(48, 0.83, 40, 0xC3);
}

#[test]
fn parity_multiple_seeds() {
    for seed in [11u64, 22, 33, 44] {
        run_parity_case(96, 0.35, 60, seed);
    }
}
