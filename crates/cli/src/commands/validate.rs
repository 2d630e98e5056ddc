use anyhow::{Context, Result};
use landing_kit_core::parse_site_toml;
use landing_kit_validator::validate_site;
use std::path::PathBuf;

pub async fn run(path: PathBuf) -> Result<()> {
    println!("Validating site at: {}", path.display());

    let config_path = path.join("site.toml");
    if !config_path.exists() {
        anyhow::bail!(
            "site.toml not found in {}\nRun 'landing-kit init {}' first",
            path.display(),
            path.display()
        );
    }

    let site = parse_site_toml(&config_path).context("Failed to parse site.toml")?;

    println!("✓ site.toml valid");
    println!("  Site: {}", site.config.name);
    println!();

    let report = validate_site(&site);

    for error in &report.errors {
        println!("  ✗ {error}");
    }
    for warning in &report.warnings {
        println!("  ⚠ {warning}");
    }
    for info in &report.info {
        println!("  • {info}");
    }

    println!();
    if report.is_ok() {
        if report.warnings.is_empty() {
            println!("✅ Validation passed");
        } else {
            println!(
                "✅ Validation passed with {} warning(s)",
                report.warnings.len()
            );
        }
        Ok(())
    } else {
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len())
    }
}
