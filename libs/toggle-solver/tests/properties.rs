//! Randomised cross-checks of the meet-in-the-middle solver.
//!
//! Every generated machine is small enough to brute-force all 2^n subsets,
//! so the exhaustive answer is the oracle.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use toggle_solver::{Bitmask, Limits, Machine, Outcome, Solver, SubsetTable};

const CASES: usize = 200;

fn random_machine(rng: &mut StdRng) -> Machine {
    let lights: u32 = rng.gen_range(1..=10);
    let light_mask = (1u64 << lights) - 1;
    let button_count: usize = rng.gen_range(0..=12);

    let buttons: Vec<u64> = (0..button_count)
        .map(|_| rng.gen::<u64>() & light_mask)
        .collect();
    // Half the time pick a target known to be reachable.
    let target = if rng.gen_bool(0.5) {
        buttons
            .iter()
            .filter(|_| rng.gen_bool(0.5))
            .fold(0, |acc, b| acc ^ b)
    } else {
        rng.gen::<u64>() & light_mask
    };

    Machine::from_bits(target, &buttons)
}

fn brute_force(machine: &Machine) -> Option<u32> {
    let n = machine.button_count();
    (0u64..(1u64 << n))
        .filter(|subset| {
            let state = machine
                .buttons()
                .iter()
                .enumerate()
                .filter(|(idx, _)| subset & (1u64 << idx) != 0)
                .fold(Bitmask::ZERO, |acc, (_, button)| acc ^ button.mask());
            state == machine.target()
        })
        .map(|subset| subset.count_ones())
        .min()
}

#[test]
fn test_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0010);
    let solver = Solver::new();

    for case in 0..CASES {
        let machine = random_machine(&mut rng);
        let outcome = solver.solve(&machine).unwrap();
        assert_eq!(outcome.presses(), brute_force(&machine), "case {}: {:?}", case, machine);
    }
}

#[test]
fn test_press_count_bounded_by_buttons() {
    let mut rng = StdRng::seed_from_u64(7);
    let solver = Solver::new();

    for _ in 0..CASES {
        let machine = random_machine(&mut rng);
        if let Some(presses) = solver.solve(&machine).unwrap().presses() {
            assert!(presses as usize <= machine.button_count());
        }
    }
}

#[test]
fn test_witness_reaches_target() {
    let mut rng = StdRng::seed_from_u64(42);
    let solver = Solver::new().with_parallel_halves(true);

    for _ in 0..CASES {
        let machine = random_machine(&mut rng);
        if let Outcome::Reached(solution) = solver.solve(&machine).unwrap() {
            assert_eq!(solution.buttons().len() as u32, solution.presses());
            assert_eq!(machine.press(solution.buttons()), Some(machine.target()));
        }
    }
}

#[test]
fn test_split_invariance() {
    let mut rng = StdRng::seed_from_u64(1234);
    let solver = Solver::new();

    for _ in 0..50 {
        let machine = random_machine(&mut rng);
        let expected = solver.solve(&machine).unwrap().presses();
        for split in 0..=machine.button_count() {
            let outcome = solver.solve_with_split(&machine, split).unwrap();
            assert_eq!(outcome.presses(), expected, "split {} of {:?}", split, machine);
        }
    }
}

#[test]
fn test_zero_target_always_free() {
    let mut rng = StdRng::seed_from_u64(99);
    let solver = Solver::new();

    for _ in 0..50 {
        let buttons: Vec<u64> = (0..rng.gen_range(0..=16))
            .map(|_| rng.gen::<u16>() as u64)
            .collect();
        let machine = Machine::from_bits(0, &buttons);
        assert_eq!(solver.solve(&machine).unwrap().presses(), Some(0));
    }
}

#[test]
fn test_table_is_a_subspace() {
    let mut rng = StdRng::seed_from_u64(2024);
    let limits = Limits::default();

    for _ in 0..50 {
        let machine = random_machine(&mut rng);
        let table = SubsetTable::enumerate(machine.buttons(), &limits).unwrap();

        assert_eq!(table.presses(Bitmask::ZERO), Some(0));
        // closed under every generator, and the size is a power of two
        assert!(table.len().is_power_of_two());
        for (mask, _) in table.iter() {
            for button in machine.buttons() {
                assert!(table.presses(mask ^ button.mask()).is_some());
            }
        }
    }
}
