use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Writes the report markdown to `path`, replacing any previous report.
pub async fn save_report(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write evaluation report to {}", path.display()))?;
    info!("Evaluation saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_overwrites_previous_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("evaluation.md");

        save_report(&path, "first run, longer content").await.unwrap();
        save_report(&path, "second").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[tokio::test]
    async fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("evaluation.md");
        let err = save_report(&path, "x").await.unwrap_err();
        assert!(err.to_string().contains("Failed to write evaluation report"));
    }
}
