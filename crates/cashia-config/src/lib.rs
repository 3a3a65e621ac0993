use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CATALOG_FILE: &str = "cashia.toml";

// ============================================================================
// Global Config (config.toml)
// ============================================================================

/// Simple configuration for cashia
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Symbol prefixed to amounts in text output
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Largest capacity the planner will tabulate
    #[serde(default = "default_max_capacity")]
    pub max_capacity: usize,

    /// Largest number of allocator table cells, (items + 1) x (capacity + 1)
    #[serde(default = "default_max_table_cells")]
    pub max_table_cells: usize,

    /// Default output format ("text" or "json")
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            max_capacity: default_max_capacity(),
            max_table_cells: default_max_table_cells(),
            format: default_format(),
        }
    }
}

fn default_currency() -> String {
    "₱".to_string()
}

fn default_max_capacity() -> usize {
    1_000_000
}

fn default_max_table_cells() -> usize {
    50_000_000
}

fn default_format() -> String {
    "text".to_string()
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, writing the defaults there if it is missing
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(path, content)?;
            Ok(config)
        }
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "cashia", "cashia") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.cashia/config.toml")
        }
    }
}

// ============================================================================
// Catalog File (cashia.toml)
// ============================================================================

/// Budget, transport cost and food items read from cashia.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CatalogFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<u64>,

    #[serde(default)]
    pub items: Vec<ItemDefinition>,
}

/// Food item definition in cashia.toml
///
/// Values are checked when the item is submitted to a session, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemDefinition {
    pub name: String,
    pub rating: u64,
    pub price: u64,
}

impl CatalogFile {
    /// Starter catalog written by `cashia init`
    pub fn template() -> Self {
        Self {
            budget: Some(200),
            transport: Some(40),
            items: vec![
                ItemDefinition {
                    name: "Chicken Adobo".to_string(),
                    rating: 8,
                    price: 90,
                },
                ItemDefinition {
                    name: "Pancit Canton".to_string(),
                    rating: 6,
                    price: 60,
                },
                ItemDefinition {
                    name: "Halo-halo".to_string(),
                    rating: 7,
                    price: 70,
                },
            ],
        }
    }

    /// Find and load cashia.toml from current or parent directories
    pub fn find_and_load() -> anyhow::Result<Option<(PathBuf, Self)>> {
        let current = std::env::current_dir()?;
        if let Some(root) = Self::find_root_from(&current) {
            let path = root.join(CATALOG_FILE);
            let catalog = Self::load(&path)?;
            Ok(Some((path, catalog)))
        } else {
            Ok(None)
        }
    }

    /// Find the directory holding cashia.toml by walking up from `start`
    pub fn find_root_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(CATALOG_FILE).exists() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog: CatalogFile = toml::from_str(&content)?;
        Ok(catalog)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
