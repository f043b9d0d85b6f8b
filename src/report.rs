//! Terminal and JSON rendering of batch results
//!
//! This is the presentation layer over the two collections a batch run
//! produces; nothing here feeds back into parsing.

use serde::Serialize;

use moi_core::{MoiFile, ParseFailure};

use crate::processing::BatchOutcome;

/// Render parsed records as a plain-text table.
pub fn render_moi_table(files: &[MoiFile]) -> String {
    let name_width = files
        .iter()
        .map(|f| f.file_name.as_deref().unwrap_or("-").len())
        .chain([4])
        .max()
        .unwrap_or(4);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<name_width$}  {:<7}  {:>10}  {:<16}  {:>9}  {:<7}  {:<7}\n",
        "File", "Version", "Size", "Created", "Length", "Aspect", "System",
    ));

    for file in files {
        out.push_str(&format!(
            "{:<name_width$}  {:<7}  {:>10}  {:<16}  {:>9}  {:<7}  {:<7}\n",
            file.file_name.as_deref().unwrap_or("-"),
            file.version,
            file.file_size_formatted(),
            file.creation_date.format("%Y-%m-%d %H:%M"),
            file.video_length_formatted(),
            file.aspect_ratio.to_string(),
            file.tv_system.to_string(),
        ));
    }

    out
}

/// Render batch failures as a plain-text diagnostics table.
pub fn render_failure_table(failures: &[ParseFailure]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<12}  {}\n", "Error", "File"));

    for failure in failures {
        out.push_str(&format!(
            "{:<12}  {}\n{:<12}  └─ {}\n",
            failure.error.kind(),
            failure.file_path.display(),
            "",
            failure.error,
        ));
    }

    out
}

/// Serializable report over a whole batch run
#[derive(Debug, Serialize)]
pub struct BatchReport<'a> {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub elapsed_ms: u128,
    pub files: &'a [MoiFile],
    pub failures: Vec<FailureReport>,
}

#[derive(Debug, Serialize)]
pub struct FailureReport {
    pub file_path: String,
    pub kind: &'static str,
    pub message: String,
}

impl<'a> BatchReport<'a> {
    pub fn new(outcome: &'a BatchOutcome) -> Self {
        Self {
            total: outcome.total,
            successful: outcome.files.len(),
            failed: outcome.failures.len(),
            elapsed_ms: outcome.total_time.as_millis(),
            files: &outcome.files,
            failures: outcome
                .failures
                .iter()
                .map(|failure| FailureReport {
                    file_path: failure.file_path.display().to_string(),
                    kind: failure.error.kind(),
                    message: failure.error.to_string(),
                })
                .collect(),
        }
    }
}
