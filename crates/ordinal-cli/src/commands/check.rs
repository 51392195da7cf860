//! Constraint check command

use anyhow::{Context, Result};
use ordinal_core::OrdinalError;
use ordinal_order::ItemRegistry;

/// Result of checking an item file
struct CheckOutcome {
    items: usize,
    error: Option<OrdinalError>,
}

impl CheckOutcome {
    fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

pub fn run(path: &str, format: &str) -> Result<()> {
    let outcome = evaluate(path)?;

    if format == "json" {
        println!("{}", report_json(&outcome)?);
    } else {
        println!("{}", report_text(&outcome));
    }

    if !outcome.is_valid() {
        std::process::exit(1);
    }

    Ok(())
}

/// Constraint errors become part of the outcome; read and parse failures
/// are returned as errors
fn evaluate(path: &str) -> Result<CheckOutcome> {
    let mut registry = ItemRegistry::new();
    let result = registry.load_file(path).and_then(|()| registry.order());

    match result {
        Ok(order) => Ok(CheckOutcome {
            items: order.len(),
            error: None,
        }),
        Err(e) if e.is_constraint_error() => {
            tracing::debug!(error = %e, "constraint check failed");
            Ok(CheckOutcome {
                items: registry.len(),
                error: Some(e),
            })
        }
        Err(e) => Err(e).with_context(|| format!("Failed to load items from {}", path)),
    }
}

fn report_text(outcome: &CheckOutcome) -> String {
    match &outcome.error {
        None => format!("OK ({} items)", outcome.items),
        Some(e) => format!("ERROR: {}", e),
    }
}

fn report_json(outcome: &CheckOutcome) -> Result<String> {
    let output = serde_json::json!({
        "valid": outcome.is_valid(),
        "items": outcome.items,
        "error": outcome.error.as_ref().map(|e| e.to_string()),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_items(content: &str) -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.toml");
        fs::write(&path, content).unwrap();
        (dir, path.to_string_lossy().into_owned())
    }

    #[test]
    fn test_valid_file() {
        let (_dir, path) = write_items(
            r#"
[[item]]
name = "a"

[[item]]
name = "b"
position = "first"
"#,
        );
        let outcome = evaluate(&path).unwrap();
        assert!(outcome.is_valid());
        assert_eq!(report_text(&outcome), "OK (2 items)");
    }

    #[test]
    fn test_symmetric_conflict_reported() {
        let (_dir, path) = write_items(
            r#"
[[item]]
name = "a"
position = { before = "b" }

[[item]]
name = "b"
position = { after = "a" }
"#,
        );
        let outcome = evaluate(&path).unwrap();
        assert!(!outcome.is_valid());
        assert!(report_text(&outcome).starts_with("ERROR:"));

        let json: serde_json::Value =
            serde_json::from_str(&report_json(&outcome).unwrap()).unwrap();
        assert_eq!(json["valid"], false);
        assert!(json["error"].as_str().unwrap().contains("'a'"));
    }

    #[test]
    fn test_invalid_shape_reported() {
        let (_dir, path) = write_items("[[item]]\nname = \"a\"\nposition = 4\n");
        let outcome = evaluate(&path).unwrap();
        assert!(matches!(outcome.error, Some(OrdinalError::InvalidPositionShape { .. })));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(evaluate(&path.to_string_lossy()).is_err());
    }
}
