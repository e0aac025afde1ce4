//! Integration test: end-to-end run over the puzzle's sample input

use factory_lights::factory::{
    parse_input, BatchRunner, FactoryConfig, OutputFormat, PuzzleReport,
};
use factory_lights::toggle_solver::Outcome;

const SAMPLE: &str = include_str!("fixtures/day10_sample.txt");

#[test]
fn test_sample_machines_individually() {
    let machines = parse_input(SAMPLE).unwrap();
    let solver = FactoryConfig::default().solver();

    let presses: Vec<Option<u32>> = machines
        .iter()
        .map(|parsed| solver.solve(&parsed.machine).unwrap().presses())
        .collect();
    assert_eq!(presses, vec![Some(2), Some(3), Some(2)]);

    // The witness for the first machine really lights `.##.`
    let first = &machines[0].machine;
    match solver.solve(first).unwrap() {
        Outcome::Reached(solution) => {
            assert_eq!(first.press(solution.buttons()), Some(first.target()));
        }
        Outcome::Unreachable => panic!("sample machine should be reachable"),
    }
}

#[tokio::test]
async fn test_sample_report() {
    let config = FactoryConfig::default();
    let machines = parse_input(SAMPLE).unwrap();
    let runner = BatchRunner::new(config.solver(), config.batch.clone());

    let batch = runner.run(machines).await.unwrap();
    let report = PuzzleReport::from_batch(batch);
    assert_eq!(report.part1, 7);

    let table = report.render(OutputFormat::Table).unwrap();
    assert!(table.starts_with("AoC 2025 Day 10: Factory\n"));
    assert!(table.contains("Part 1:        7\n"));
    assert!(table.contains("Operation completed in "));
}
