//! Apply command: rewrite an item file in resolved order

use anyhow::{Context, Result};
use ordinal_order::ItemDocument;

pub struct ApplyArgs {
    pub file: String,
    pub output: Option<String>,
    pub dry_run: bool,
}

pub fn run(args: ApplyArgs) -> Result<()> {
    let mut doc = ItemDocument::from_file(&args.file)
        .with_context(|| format!("Failed to read item file {}", args.file))?;
    let order = doc.apply_order().context("Failed to resolve item order")?;

    if args.dry_run {
        print!("{}", doc);
        return Ok(());
    }

    let target = args.output.as_deref().unwrap_or(&args.file);
    doc.save(target)
        .with_context(|| format!("Failed to write {}", target))?;
    tracing::debug!(path = target, "saved reordered items");
    println!("Wrote {} item(s) to {}", order.len(), target);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordinal_order::ItemRegistry;
    use std::fs;

    #[test]
    fn test_apply_to_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("items.toml");
        let output = dir.path().join("ordered.toml");
        fs::write(
            &input,
            "[[item]]\nname = \"b\"\n\n[[item]]\nname = \"a\"\nposition = { before = \"b\" }\n",
        )
        .unwrap();

        run(ApplyArgs {
            file: input.to_string_lossy().into_owned(),
            output: Some(output.to_string_lossy().into_owned()),
            dry_run: false,
        })
        .unwrap();

        let mut registry = ItemRegistry::new();
        registry.load_file(&output).unwrap();
        assert_eq!(registry.names(), vec!["a", "b"]);

        // Input is left alone when an output path is given
        let original = fs::read_to_string(&input).unwrap();
        assert!(original.contains("position"));
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("items.toml");
        let content = "[[item]]\nname = \"b\"\n\n[[item]]\nname = \"a\"\nposition = \"first\"\n";
        fs::write(&input, content).unwrap();

        run(ApplyArgs {
            file: input.to_string_lossy().into_owned(),
            output: None,
            dry_run: true,
        })
        .unwrap();

        assert_eq!(fs::read_to_string(&input).unwrap(), content);
    }
}
