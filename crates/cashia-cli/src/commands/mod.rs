pub mod init;
pub mod overview;
pub mod plan;
pub mod shell;

use anyhow::{Context, Result};
use cashia_config::CatalogFile;
use cashia_core::{Item, Rating};
use cashia_session::Session;
use clap::CommandFactory;
use std::path::Path;
use tracing::debug;

use crate::cli::{Cli, InputArgs};

/// Build a session from the catalog file and command-line flags
pub fn build_session(input: &InputArgs) -> Result<Session> {
    let mut session = Session::new();

    let catalog = match &input.catalog {
        Some(path) => {
            let catalog = CatalogFile::load(path)
                .with_context(|| format!("Could not read catalog {}", path.display()))?;
            Some((path.clone(), catalog))
        }
        None if input.no_catalog => None,
        None => CatalogFile::find_and_load()?,
    };

    if let Some((path, catalog)) = catalog {
        debug!("Using catalog {}", path.display());
        apply_catalog(&mut session, &catalog, &path)?;
    }

    if let Some(budget) = &input.budget {
        session.submit_budget(budget)?;
    }
    if let Some(transport) = &input.transport {
        session.submit_transport(transport)?;
    }
    for spec in &input.items {
        let (name, rating, price) = parse_item_spec(spec)?;
        session.submit_item(name, rating, price)?;
    }

    Ok(session)
}

fn apply_catalog(session: &mut Session, catalog: &CatalogFile, path: &Path) -> Result<()> {
    if let Some(budget) = catalog.budget {
        session.set_budget(budget);
    }
    if let Some(transport) = catalog.transport {
        session.set_transport(transport);
    }
    for def in &catalog.items {
        let item = Rating::new(def.rating)
            .and_then(|rating| Item::new(def.name.clone(), rating, def.price))
            .with_context(|| format!("Invalid item '{}' in {}", def.name, path.display()))?;
        session.add_item(item);
    }
    Ok(())
}

/// Split NAME:RATING:PRICE. The name may itself contain colons.
pub fn parse_item_spec(spec: &str) -> Result<(&str, &str, &str)> {
    let mut parts = spec.rsplitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(price), Some(rating), Some(name)) => Ok((name, rating, price)),
        _ => anyhow::bail!("Item '{}' must look like NAME:RATING:PRICE", spec),
    }
}

/// Resolve the output format, falling back to the configured default
pub fn resolve_format(flag: Option<String>, default: &str) -> Result<String> {
    let format = flag.unwrap_or_else(|| default.to_string());
    match format.as_str() {
        "text" | "json" => Ok(format),
        other => anyhow::bail!("Unknown format '{}' (expected text or json)", other),
    }
}

pub fn completions(shell: clap_complete::Shell) {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, "cashia", &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(budget: &str, transport: &str, items: &[&str]) -> InputArgs {
        InputArgs {
            catalog: None,
            no_catalog: true,
            budget: Some(budget.to_string()),
            transport: Some(transport.to_string()),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_item_spec() {
        assert_eq!(parse_item_spec("Adobo:8:50").unwrap(), ("Adobo", "8", "50"));
        assert_eq!(
            parse_item_spec("Menu: Silog:7:65").unwrap(),
            ("Menu: Silog", "7", "65")
        );
        assert!(parse_item_spec("Adobo:8").is_err());
        assert!(parse_item_spec("Adobo").is_err());
    }

    #[test]
    fn test_resolve_format() {
        assert_eq!(resolve_format(None, "text").unwrap(), "text");
        assert_eq!(resolve_format(Some("json".to_string()), "text").unwrap(), "json");
        assert!(resolve_format(Some("yaml".to_string()), "text").is_err());
    }

    #[test]
    fn test_build_session_from_flags() {
        let session = build_session(&flags("100", "20", &["A:8:50", "B:5:30"])).unwrap();

        assert_eq!(session.budget(), Some(100));
        assert_eq!(session.transport(), Some(20));
        assert_eq!(session.entries().len(), 2);
    }

    #[test]
    fn test_build_session_rejects_bad_item() {
        assert!(build_session(&flags("100", "20", &["A:11:50"])).is_err());
        assert!(build_session(&flags("100", "20", &[":8:50"])).is_err());
    }

    #[test]
    fn test_build_session_flags_override_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cashia.toml");
        CatalogFile::template().save(&path).unwrap();

        let input = InputArgs {
            catalog: Some(path),
            no_catalog: false,
            budget: Some("500".to_string()),
            transport: None,
            items: vec!["Taho:5:20".to_string()],
        };
        let session = build_session(&input).unwrap();

        assert_eq!(session.budget(), Some(500));
        assert_eq!(session.transport(), CatalogFile::template().transport);
        assert_eq!(
            session.entries().len(),
            CatalogFile::template().items.len() + 1
        );
        assert_eq!(session.entries().last().unwrap().item.name, "Taho");
    }

    #[test]
    fn test_build_session_rejects_bad_catalog_item() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cashia.toml");
        std::fs::write(&path, "[[items]]\nname = \"Lechon\"\nrating = 12\nprice = 300\n").unwrap();

        let input = InputArgs {
            catalog: Some(path),
            ..Default::default()
        };
        let err = build_session(&input).unwrap_err();

        assert!(err.to_string().contains("Lechon"));
    }
}
