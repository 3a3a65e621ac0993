use anyhow::Result;
use cashia_config::{CATALOG_FILE, CatalogFile};

pub fn handle() -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let path = current_dir.join(CATALOG_FILE);

    if path.exists() {
        anyhow::bail!("{} already exists in current directory", CATALOG_FILE);
    }

    CatalogFile::template().save(&path)?;

    println!("✓ Created {}", CATALOG_FILE);
    println!("  Edit the budget, transport and items, then run 'cashia plan'");

    Ok(())
}
