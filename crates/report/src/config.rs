use std::path::PathBuf;

use serde::Deserialize;

/// Layout and destination of exported reports.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Title printed at the top of the report.
    pub title: String,

    /// Where the report is saved.
    pub path: PathBuf,

    /// Characters per line.
    pub width: usize,

    /// Lines per page.
    pub lines_per_page: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Quadra Report".to_owned(),
            path: PathBuf::from("equation_report.txt"),
            width: 80,
            lines_per_page: 60,
        }
    }
}
