//! Batch results and their console rendering.

use serde::Serialize;

use crate::config::OutputFormat;

/// Aggregate of one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub machines: usize,
    pub reachable: usize,
    /// Input lines whose machine could not reach its target, ascending
    pub unreachable_lines: Vec<usize>,
    /// Sum of minimal presses; unreachable machines contribute 0
    pub total_presses: u64,
    pub elapsed_ms: u64,
}

/// Puzzle answer sheet in the layout of the original console runner
#[derive(Debug, Clone, Serialize)]
pub struct PuzzleReport {
    pub title: &'static str,
    pub source: &'static str,
    pub part1: u64,
    /// Joltage counters are not solved; always 0
    pub part2: u64,
    pub elapsed_ms: u64,
    pub batch: BatchReport,
}

impl PuzzleReport {
    pub const TITLE: &'static str = "AoC 2025 Day 10: Factory";
    pub const SOURCE: &'static str = "https://adventofcode.com/2025/day/10";

    pub fn from_batch(batch: BatchReport) -> Self {
        Self {
            title: Self::TITLE,
            source: Self::SOURCE,
            part1: batch.total_presses,
            part2: 0,
            elapsed_ms: batch.elapsed_ms,
            batch,
        }
    }

    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Table => Ok(self.render_table()),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }

    /// Text table: title, source, one row per part, timing footer.
    pub fn render_table(&self) -> String {
        let rows = [
            format!("Part 1: {:>8}", self.part1),
            format!("Part 2: {:>8}", self.part2),
        ];
        let rule = "-".repeat(rows.iter().map(String::len).max().unwrap_or(0));

        let mut out = String::new();
        out.push_str(self.title);
        out.push('\n');
        out.push_str(self.source);
        out.push_str("\n\n");
        out.push_str("Part    Solution\n");
        out.push_str(&rule);
        out.push('\n');
        for row in &rows {
            out.push_str(row);
            out.push('\n');
        }
        out.push_str(&rule);
        out.push('\n');
        if !self.batch.unreachable_lines.is_empty() {
            out.push_str(&format!(
                "Unreachable machines counted as 0: {}\n",
                self.batch.unreachable_lines.len()
            ));
        }
        out.push_str(&format!("Operation completed in {} ms", self.elapsed_ms));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_batch() -> BatchReport {
        BatchReport {
            machines: 3,
            reachable: 3,
            unreachable_lines: Vec::new(),
            total_presses: 7,
            elapsed_ms: 12,
        }
    }

    #[test]
    fn test_render_table() {
        let report = PuzzleReport::from_batch(sample_batch());
        let expected = "\
AoC 2025 Day 10: Factory
https://adventofcode.com/2025/day/10

Part    Solution
----------------
Part 1:        7
Part 2:        0
----------------
Operation completed in 12 ms";
        assert_eq!(report.render_table(), expected);
    }

    #[test]
    fn test_render_table_notes_unreachable() {
        let mut batch = sample_batch();
        batch.reachable = 2;
        batch.unreachable_lines = vec![2];
        let table = PuzzleReport::from_batch(batch).render_table();
        assert!(table.contains("Unreachable machines counted as 0: 1\n"));
    }

    #[test]
    fn test_render_json() {
        let report = PuzzleReport::from_batch(sample_batch());
        let json = report.render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["part1"], 7);
        assert_eq!(value["batch"]["machines"], 3);
        assert_eq!(value["title"], "AoC 2025 Day 10: Factory");
    }
}
