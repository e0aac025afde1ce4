//! Batch driver
//!
//! Solves every machine of an input file and sums the press counts. Each
//! machine runs on a tokio blocking task; at most
//! `max_concurrent_machines` are in flight at once. Machines share nothing,
//! so completion order never changes the total.

mod report;

use std::time::{Duration, Instant};

use futures::stream::{self, StreamExt, TryStreamExt};
use thiserror::Error;
use toggle_solver::{Outcome, SolveError, Solver};
use tracing::{debug, info, warn};

use crate::config::{BatchConfig, UnreachablePolicy};
use crate::parser::ParsedMachine;

pub use report::{BatchReport, PuzzleReport};

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("machine on line {line} could not be solved: {source}")]
    Solve {
        line: usize,
        #[source]
        source: SolveError,
    },

    #[error("machine on line {line} cannot reach its target")]
    Unreachable { line: usize },

    #[error("machine on line {line} exceeded its {timeout_ms} ms budget")]
    Timeout { line: usize, timeout_ms: u64 },

    #[error("solver task for line {line} failed: {reason}")]
    Task { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, BatchError>;

/// Runs a [`Solver`] over many machines
pub struct BatchRunner {
    solver: Solver,
    config: BatchConfig,
}

impl BatchRunner {
    pub fn new(solver: Solver, config: BatchConfig) -> Self {
        Self { solver, config }
    }

    pub fn solver(&self) -> &Solver {
        &self.solver
    }

    /// Solve all machines and aggregate the result.
    ///
    /// The first error (capacity, timeout, or an unreachable machine under
    /// [`UnreachablePolicy::Fail`]) aborts the batch.
    pub async fn run(&self, machines: Vec<ParsedMachine>) -> Result<BatchReport> {
        let started = Instant::now();
        let total = machines.len();
        let concurrency = self.config.max_concurrent_machines.max(1);
        let timeout = self.config.machine_timeout_ms.map(Duration::from_millis);

        info!("Solving {} machines ({} at a time)", total, concurrency);

        let mut outcomes: Vec<(usize, Outcome)> = stream::iter(machines)
            .map(|parsed| solve_one(self.solver, parsed, timeout))
            .buffer_unordered(concurrency)
            .try_collect()
            .await?;
        // Completion order is arbitrary; policy decisions follow input order
        outcomes.sort_unstable_by_key(|(line, _)| *line);

        let mut report = BatchReport {
            machines: total,
            ..BatchReport::default()
        };

        for (line, outcome) in outcomes {
            if outcome.is_reachable() {
                report.reachable += 1;
            } else {
                match self.config.unreachable {
                    UnreachablePolicy::Fail => return Err(BatchError::Unreachable { line }),
                    UnreachablePolicy::CountAsZero => {
                        warn!(line, "Machine cannot reach its target, counting 0 presses");
                        report.unreachable_lines.push(line);
                    }
                }
            }
            report.total_presses += outcome.compat_presses();
        }

        report.elapsed_ms = started.elapsed().as_millis() as u64;

        info!(
            "Solved {} machines in {} ms: {} presses, {} unreachable",
            report.machines,
            report.elapsed_ms,
            report.total_presses,
            report.unreachable_lines.len()
        );

        Ok(report)
    }
}

async fn solve_one(
    solver: Solver,
    parsed: ParsedMachine,
    timeout: Option<Duration>,
) -> Result<(usize, Outcome)> {
    let line = parsed.line;
    let task = tokio::task::spawn_blocking(move || solver.solve(&parsed.machine));

    let joined = match timeout {
        Some(limit) => tokio::time::timeout(limit, task)
            .await
            .map_err(|_| BatchError::Timeout {
                line,
                timeout_ms: limit.as_millis() as u64,
            })?,
        None => task.await,
    };

    let outcome = joined
        .map_err(|e| BatchError::Task {
            line,
            reason: e.to_string(),
        })?
        .map_err(|source| BatchError::Solve { line, source })?;

    debug!(line, presses = ?outcome.presses(), "Machine solved");
    Ok((line, outcome))
}
