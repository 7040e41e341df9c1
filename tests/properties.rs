use proptest::prelude::*;
use row_life::rowlife::{MARGIN, MAX_GENERATIONS, Pattern, RULES, Row, Simulation};

fn row_cells() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn margins_hold_after_normalize(cells in row_cells()) {
        let row = Row::normalize(&cells).unwrap();
        if let (Some(first), Some(last)) = (row.first_filled(), row.last_filled()) {
            prop_assert!(first >= MARGIN);
            prop_assert_eq!(row.len() - 1 - last, MARGIN);
        } else {
            prop_assert!(row.is_blank());
        }
    }

    #[test]
    fn normalize_is_idempotent(cells in row_cells()) {
        let once = Row::normalize(&cells).unwrap();
        let twice = Row::normalize(once.cells()).unwrap();
        prop_assert_eq!(once.trimmed(), twice.trimmed());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn trimmed_comparison_is_symmetric(a in row_cells(), b in row_cells()) {
        let a = Row::normalize(&a).unwrap();
        let b = Row::normalize(&b).unwrap();
        prop_assert_eq!(a.trimmed() == b.trimmed(), b.trimmed() == a.trimmed());
    }

    #[test]
    fn rule_is_deterministic(cells in row_cells()) {
        let row = Row::normalize(&cells).unwrap();
        let first = RULES.next_generation(&row).unwrap();
        let second = RULES.next_generation(&row).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn generated_rows_keep_margins(cells in row_cells()) {
        let row = Row::normalize(&cells).unwrap();
        let next = RULES.next_generation(&row).unwrap();
        prop_assert_eq!(&Row::normalize(next.cells()).unwrap(), &next);
    }

    #[test]
    fn runs_terminate_within_cap(cells in row_cells()) {
        let outcome = Simulation::from_cells(&cells).unwrap().run().unwrap();
        prop_assert!(outcome.generations >= 2);
        prop_assert!(outcome.generations <= MAX_GENERATIONS);
        if outcome.pattern == Pattern::Other {
            prop_assert_eq!(outcome.generations, MAX_GENERATIONS);
        }
    }

    #[test]
    fn blank_rows_vanish(len in 0usize..64) {
        let outcome = Simulation::from_cells(&vec![false; len]).unwrap().run().unwrap();
        prop_assert_eq!(outcome.pattern, Pattern::Vanishing);
    }
}
