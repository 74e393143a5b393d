//! Report formatting for completed runs.

use crate::runner::RunReport;

/// Trait for rendering a run report
pub trait ReportFormatter {
    /// Render the report, without a trailing newline
    fn format_report(&self, report: &RunReport) -> String;
}

/// The fixed five-line human readable report
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format_report(&self, report: &RunReport) -> String {
        format!(
            "Algorithm: {}\nProblem Size: {}\nMin Value: {}\nMax Value: {}\nExecution Time: {}",
            report.algorithm,
            report.size,
            report.min,
            report.max,
            report.execution_time()
        )
    }
}

/// Serializable view of a report
#[cfg(feature = "json")]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct JsonReport {
    pub algorithm: crate::algorithms::Algorithm,
    pub size: usize,
    pub min: u64,
    pub max: u64,
    pub seconds: u64,
    pub millis: u32,
    pub micros: u32,
    pub elapsed_ns: u64,
    pub seed: u64,
}

#[cfg(feature = "json")]
impl From<&RunReport> for JsonReport {
    fn from(report: &RunReport) -> Self {
        let time = report.execution_time();
        Self {
            algorithm: report.algorithm,
            size: report.size,
            min: report.min,
            max: report.max,
            seconds: time.seconds,
            millis: time.millis,
            micros: time.micros,
            elapsed_ns: u64::try_from(report.elapsed.as_nanos()).unwrap_or(u64::MAX),
            seed: report.seed,
        }
    }
}

/// Single-line JSON report for machine consumption
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

#[cfg(feature = "json")]
impl ReportFormatter for JsonFormatter {
    fn format_report(&self, report: &RunReport) -> String {
        serde_json::to_string(&JsonReport::from(report))
            .unwrap_or_else(|err| format!(r#"{{"error":"{}"}}"#, err))
    }
}
