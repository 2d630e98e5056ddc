// End-to-end: init a site into a temp directory, build it, and check
// the generated tree.

use landing_kit::commands;

#[tokio::test]
async fn test_init_then_build_produces_full_site() {
    let tmp = tempfile::tempdir().unwrap();
    let site_dir = tmp.path().join("site");
    let out_dir = tmp.path().join("dist");

    commands::init::run(site_dir.clone()).await.unwrap();
    assert!(site_dir.join("site.toml").exists());
    assert!(site_dir.join("assets").is_dir());

    commands::build::run(site_dir.clone(), out_dir.clone())
        .await
        .unwrap();

    // Fixed pages, per-catalog pages, a pair page, and generated assets.
    assert!(out_dir.join("index.html").exists());
    assert!(out_dir.join("services/index.html").exists());
    assert!(out_dir.join("locations/index.html").exists());
    assert!(out_dir.join("services/jackknife-accidents/index.html").exists());
    assert!(out_dir.join("locations/park-slope/index.html").exists());
    assert!(out_dir.join("jackknife-accidents/park-slope/index.html").exists());
    assert!(out_dir.join("404.html").exists());
    assert!(out_dir.join("lead-form.js").exists());
    assert!(out_dir.join("sitemap.xml").exists());

    let pair = std::fs::read_to_string(out_dir.join("jackknife-accidents/park-slope/index.html"))
        .unwrap();
    assert!(pair.contains("Jackknife Accidents Lawyer in Park Slope, Brooklyn"));

    // Published pages carry no hot-reload wiring.
    assert!(!pair.contains("/_reload"));
}

#[tokio::test]
async fn test_init_refuses_to_overwrite() {
    let tmp = tempfile::tempdir().unwrap();
    let site_dir = tmp.path().join("site");

    commands::init::run(site_dir.clone()).await.unwrap();
    let err = commands::init::run(site_dir).await.unwrap_err();
    assert!(err.to_string().contains("already exists"));
}

#[tokio::test]
async fn test_validate_accepts_scaffolded_site() {
    let tmp = tempfile::tempdir().unwrap();
    let site_dir = tmp.path().join("site");

    commands::init::run(site_dir.clone()).await.unwrap();
    commands::validate::run(site_dir).await.unwrap();
}

#[tokio::test]
async fn test_build_without_init_fails_with_hint() {
    let tmp = tempfile::tempdir().unwrap();
    let site_dir = tmp.path().join("site");
    std::fs::create_dir_all(&site_dir).unwrap();

    let err = commands::build::run(site_dir, tmp.path().join("dist"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("landing-kit init"));
}
