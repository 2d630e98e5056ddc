use anyhow::{Context, Result};
use landing_kit_core::parse_site_toml;
use landing_kit_generator::generate_site;
use landing_kit_validator::validate_site;
use std::fs;
use std::path::PathBuf;

/// Build static site for deployment
pub async fn run(path: PathBuf, output: PathBuf) -> Result<()> {
    println!("🔨 Building static site...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", output.display());
    println!();

    if !path.exists() {
        anyhow::bail!("Site directory does not exist: {}", path.display());
    }

    let site_toml_path = path.join("site.toml");
    if !site_toml_path.exists() {
        anyhow::bail!(
            "site.toml not found in {}\nRun 'landing-kit init {}' first",
            path.display(),
            path.display()
        );
    }

    let site = parse_site_toml(&site_toml_path).context("Failed to parse site.toml")?;

    println!("✓ Loaded: {}", site.config.name);
    println!("  Services:  {}", site.services.len());
    println!("  Locations: {}", site.locations.len());
    println!();

    // Refuse to build an invalid catalog. Warnings are printed but do
    // not block the build.
    let report = validate_site(&site);
    for error in &report.errors {
        eprintln!("   ✗ {error}");
    }
    for warning in &report.warnings {
        println!("   ⚠ {warning}");
    }
    if !report.is_ok() {
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
    }

    println!("📄 Generating pages...");
    let generated = generate_site(&site, false);

    fs::create_dir_all(&output).context("Failed to create output directory")?;

    for (file, html) in &generated.pages {
        let dst = output.join(file);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&dst, html).with_context(|| format!("Failed to write {}", dst.display()))?;
    }
    println!("   ✓ Generated {} pages", generated.pages.len());

    println!("🧩 Writing assets...");
    for (file, bytes) in &generated.assets {
        let dst = output.join(file);
        fs::write(&dst, bytes).with_context(|| format!("Failed to write {}", dst.display()))?;
    }
    println!("   ✓ Wrote {} generated assets", generated.assets.len());

    // Copy through any static assets shipped alongside site.toml.
    let assets_src = path.join("assets");
    let mut copied_assets = 0;
    if assets_src.exists() {
        let assets_dst = output.join("assets");
        for entry in walkdir::WalkDir::new(&assets_src) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = entry.path().strip_prefix(&assets_src)?;
            let dst = assets_dst.join(rel);
            if let Some(parent) = dst.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dst)
                .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
            copied_assets += 1;
        }
    }
    println!("   ✓ Copied {copied_assets} static assets");

    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();
    println!("To test locally:");
    println!("   cd {} && python3 -m http.server 8000", output.display());
    println!();

    Ok(())
}
