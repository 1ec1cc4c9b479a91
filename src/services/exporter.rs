// Export Service
// Serializes the last result set to a downloadable JSON artifact.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::models::ResultSet;

/// Fixed artifact name; a new export overwrites the previous one.
pub const EXPORT_FILE_NAME: &str = "classification-results.json";

#[derive(Serialize)]
struct ExportEnvelope<'a, T: Serialize> {
    results: &'a [T],
}

/// Write the result set as pretty-printed `{ "results": [...] }` into `dir`,
/// mirroring the service response shape. Returns the artifact path.
pub fn export_results(set: &ResultSet, dir: &Path) -> Result<PathBuf> {
    let payload = match set {
        ResultSet::CategoryAssignment { results } => {
            serde_json::to_string_pretty(&ExportEnvelope { results })
        }
        ResultSet::FilterEvaluation { results } => {
            serde_json::to_string_pretty(&ExportEnvelope { results })
        }
    }
    .context("Failed to serialize results")?;

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export dir: {}", dir.display()))?;

    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, payload)
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;

    info!(path = %path.display(), count = set.len(), "export.written");
    Ok(path)
}

/// Default export location: the user's download directory, falling back to
/// the home directory, then the working directory.
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassificationResult, ClassifyResponse};

    fn result_set() -> ResultSet {
        ResultSet::CategoryAssignment {
            results: vec![
                ClassificationResult {
                    text: "Kargom 1 haftadır gelmedi".to_string(),
                    category: "Lojistik ve Kargo".to_string(),
                    similarity_score: 0.8421,
                },
                ClassificationResult {
                    text: "Paketleme çok özenliydi".to_string(),
                    category: "Ürün Kalitesi ve Performans".to_string(),
                    similarity_score: 0.6117,
                },
            ],
        }
    }

    #[test]
    fn test_export_round_trips_results() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_results(&result_set(), dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);

        let content = fs::read_to_string(&path).unwrap();
        let parsed: ClassifyResponse = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.results.len(), 2);
        match result_set() {
            ResultSet::CategoryAssignment { results } => assert_eq!(parsed.results, results),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_export_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_results(&result_set(), dir.path()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n  \"results\""));
    }

    #[test]
    fn test_export_overwrites_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        export_results(&result_set(), dir.path()).unwrap();
        let smaller = ResultSet::FilterEvaluation { results: vec![] };
        let path = export_results(&smaller, dir.path()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["results"].as_array().unwrap().len(), 0);
    }
}
