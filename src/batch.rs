use crate::application::load_application;
use crate::assess::assess;
use crate::error::{CreditError, Result};
use crate::types::scoring::ScoreResult;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchOutcome {
    Scored { result: ScoreResult, warnings: usize },
    Blocked { findings: Vec<String> },
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

pub fn application_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(CreditError::DirectoryNotFound(dir.display().to_string()));
    }
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    files.sort();
    Ok(files)
}

/// Scores every application file under `dir` on its own. A file that fails
/// to load is recorded and does not stop the batch.
pub fn score_directory(dir: &Path) -> Result<Vec<BatchEntry>> {
    let entries = application_files(dir)?
        .into_iter()
        .map(|path| {
            let outcome = score_file(&path);
            BatchEntry { path, outcome }
        })
        .collect();
    Ok(entries)
}

fn score_file(path: &Path) -> BatchOutcome {
    let report = match load_application(&[path.to_path_buf()]).and_then(|app| assess(&app)) {
        Ok(report) => report,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "skipping application");
            return BatchOutcome::Failed {
                error: e.to_string(),
            };
        }
    };
    if report.has_blocking() {
        return BatchOutcome::Blocked {
            findings: report
                .findings
                .iter()
                .filter(|finding| finding.blocking)
                .map(|finding| finding.id.clone())
                .collect(),
        };
    }
    BatchOutcome::Scored {
        result: report.result(),
        warnings: report.findings.len(),
    }
}

pub fn to_lines(entries: &[BatchEntry]) -> String {
    let mut output = String::new();
    for entry in entries {
        let line = match &entry.outcome {
            BatchOutcome::Scored { result, warnings } if *warnings > 0 => format!(
                "{}: {}/100 {} ({} warning(s))",
                entry.path.display(),
                result.total,
                result.rating,
                warnings
            ),
            BatchOutcome::Scored { result, .. } => format!(
                "{}: {}/100 {}",
                entry.path.display(),
                result.total,
                result.rating
            ),
            BatchOutcome::Blocked { findings } => format!(
                "{}: skipped, blocking findings: {}",
                entry.path.display(),
                findings.join(", ")
            ),
            BatchOutcome::Failed { error } => {
                format!("{}: failed: {}", entry.path.display(), error)
            }
        };
        output.push_str(&line);
        output.push('\n');
    }
    output
}
