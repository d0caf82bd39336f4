//! Sequential runner for the contract cases.
//!
//! Every selected case runs exactly once, in declaration order, whatever
//! happened to the cases before it. Outcomes are collected into a
//! [`SuiteReport`] that separates contract failures from cases that never
//! reached the service.

use crate::client::UserService;
use crate::contract::ContractCase;
use crate::error::ContractError;
use crate::logging::{log_info, log_warn};
use std::fmt;
use std::time::{Duration, Instant};

/// Which cases a run includes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteOptions {
    /// Run the create, update and delete cases
    pub include_mutating: bool,
}

impl Default for SuiteOptions {
    fn default() -> Self {
        Self {
            include_mutating: true,
        }
    }
}

impl SuiteOptions {
    /// Only cases that leave remote state untouched.
    pub fn read_only() -> Self {
        Self {
            include_mutating: false,
        }
    }

    fn selects(&self, case: ContractCase) -> bool {
        self.include_mutating || !case.is_mutating()
    }
}

/// Result of a single case
#[derive(Debug)]
pub enum Outcome {
    Passed,
    /// The service answered but broke the contract
    Failed(ContractError),
    /// The case could not reach a verdict (network or configuration)
    Errored(ContractError),
    /// Excluded by [`SuiteOptions`]
    Skipped,
}

impl Outcome {
    fn from_result(result: Result<(), ContractError>) -> Self {
        match result {
            Ok(()) => Self::Passed,
            Err(err) if err.is_environmental() => Self::Errored(err),
            Err(err) => Self::Failed(err),
        }
    }

    pub fn error(&self) -> Option<&ContractError> {
        match self {
            Self::Failed(err) | Self::Errored(err) => Some(err),
            Self::Passed | Self::Skipped => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Failed(_) => "FAILED",
            Self::Errored(_) => "ERROR",
            Self::Skipped => "SKIPPED",
        }
    }
}

/// One case's entry in a [`SuiteReport`]
#[derive(Debug)]
pub struct CaseOutcome {
    pub case: ContractCase,
    pub result: Outcome,
    pub elapsed: Duration,
}

/// Outcomes of one suite run, in execution order
#[derive(Debug, Default)]
pub struct SuiteReport {
    pub outcomes: Vec<CaseOutcome>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Passed))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    pub fn errored(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Errored(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped))
    }

    /// True when nothing failed or errored.
    pub fn is_success(&self) -> bool {
        self.failed() == 0 && self.errored() == 0
    }

    pub fn outcome(&self, case: ContractCase) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .find(|o| o.case == case)
            .map(|o| &o.result)
    }

    fn count(&self, predicate: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(&o.result)).count()
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.outcomes {
            write!(
                f,
                "{:<8} {} ({} ms)",
                entry.result.label(),
                entry.case,
                entry.elapsed.as_millis()
            )?;
            if let Some(err) = entry.result.error() {
                write!(f, ": {err}")?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "{} passed, {} failed, {} errored, {} skipped",
            self.passed(),
            self.failed(),
            self.errored(),
            self.skipped()
        )
    }
}

/// Run the cases selected by `options` against `service`.
pub async fn run_suite(service: &dyn UserService, options: &SuiteOptions) -> SuiteReport {
    let mut report = SuiteReport::default();

    for case in ContractCase::ALL {
        if !options.selects(case) {
            report.outcomes.push(CaseOutcome {
                case,
                result: Outcome::Skipped,
                elapsed: Duration::ZERO,
            });
            continue;
        }

        let start_time = Instant::now();
        let result = Outcome::from_result(case.run(service).await);
        let elapsed = start_time.elapsed();

        match result.error() {
            None => log_info!(
                case = case.name(),
                duration_ms = elapsed.as_millis() as u64,
                "Contract case passed"
            ),
            Some(err) => log_warn!(
                case = case.name(),
                outcome = result.label(),
                error = %err,
                "Contract case did not pass"
            ),
        }

        report.outcomes.push(CaseOutcome {
            case,
            result,
            elapsed,
        });
    }

    log_info!(
        passed = report.passed(),
        failed = report.failed(),
        errored = report.errored(),
        skipped = report.skipped(),
        "Contract suite finished"
    );

    report
}
