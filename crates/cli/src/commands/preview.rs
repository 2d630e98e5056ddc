use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{
        Html, IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::{get, post},
};
use landing_kit_core::{Catalog, parse_site_toml};
use landing_kit_generator::{pages, render_path, sitemap_xml};
use landing_kit_intake::{AcceptAllSubmitter, HttpSubmitter, Lead, LeadSubmitter};
use notify::{Event as NotifyEvent, EventKind, RecursiveMode, Watcher};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tokio::sync::broadcast;
use tower_http::services::ServeDir;

#[derive(Clone)]
struct AppState {
    site_path: PathBuf,
    reload_tx: broadcast::Sender<()>,
    submitter: Arc<dyn LeadSubmitter>,
}

/// Start preview server with hot reload for local development.
///
/// This command:
/// - Validates and loads site.toml
/// - Renders every route on demand, so edits to site.toml show up on the
///   next request
/// - Serves static files from assets/
/// - Accepts lead submissions at /api/lead
/// - Watches for file changes and triggers hot reload
///
/// # Arguments
///
/// * `path` - Path to site directory containing site.toml
/// * `port` - Port to serve on (default: 8080)
pub async fn run(path: PathBuf, port: u16) -> Result<()> {
    println!("🌐 Starting preview server...");
    println!("   Site: {}", path.display());

    if !path.exists() {
        anyhow::bail!(
            "Site directory does not exist: {}\nRun 'landing-kit init {}' first",
            path.display(),
            path.display()
        );
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

    println!("   ✓ Loaded: {}", site.config.name);
    println!("   ✓ Services:  {}", site.services.len());
    println!("   ✓ Locations: {}", site.locations.len());

    // Leads go to the configured endpoint when one is set, otherwise a
    // local accept-everything sink.
    let submitter: Arc<dyn LeadSubmitter> = match &site.intake.endpoint {
        Some(endpoint) => {
            println!("   ✓ Intake: {}", endpoint);
            Arc::new(HttpSubmitter::new(endpoint.clone()))
        }
        None => {
            println!("   ✓ Intake: local (no endpoint configured)");
            Arc::new(AcceptAllSubmitter::new())
        }
    };

    let (reload_tx, _) = broadcast::channel::<()>(100);

    let state = AppState {
        site_path: path.clone(),
        reload_tx: reload_tx.clone(),
        submitter,
    };

    let app = Router::new()
        .route("/_reload", get(sse_handler))
        .route("/lead-form.js", get(lead_form_js_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/api/lead", post(lead_handler))
        .nest_service("/assets", ServeDir::new(path.join("assets")))
        .fallback(get(page_handler))
        .with_state(state);

    let watcher_path = path.clone();
    let watcher_tx = reload_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = watch_files(watcher_path, watcher_tx).await {
            eprintln!("File watcher error: {}", e);
        }
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Watch for file changes and trigger reload
async fn watch_files(path: PathBuf, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher =
        notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.blocking_send(event);
            }
        })?;

    watcher.watch(&path, RecursiveMode::Recursive)?;

    while let Some(event) = rx.recv().await {
        match event.kind {
            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) => {
                // Filter out temporary files and hidden files
                if event.paths.iter().any(|p| {
                    let filename = p.file_name().unwrap_or_default().to_string_lossy();
                    !filename.starts_with('.') && !filename.ends_with('~')
                }) {
                    println!("   📝 File changed, reloading...");
                    let _ = reload_tx.send(());
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// SSE endpoint for hot reload
async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl futures::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let mut rx = state.reload_tx.subscribe();

    let stream = async_stream::stream! {
        loop {
            if rx.recv().await.is_ok() {
                yield Ok(Event::default().data("reload"));
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

fn config_error_page(e: anyhow::Error) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(format!(
            r#"<!DOCTYPE html>
<html><head><title>Error</title></head><body>
<h1>Configuration Error</h1>
<pre>{}</pre>
</body></html>"#,
            landing_kit_generator::html::html_escape(&format!("{:#}", e))
        )),
    )
        .into_response()
}

/// Renders every page route fresh from site.toml on each request.
async fn page_handler(
    State(state): State<AppState>,
    uri: axum::http::Uri,
) -> Response {
    let site_toml_path = state.site_path.join("site.toml");
    let site = match parse_site_toml(&site_toml_path) {
        Ok(site) => site,
        Err(e) => return config_error_page(e.into()),
    };
    let catalog = Catalog::from_site(&site);

    match render_path(&site.config, &catalog, uri.path(), true) {
        Some(html) => Html(html).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Html(pages::render_not_found(&site.config, &catalog, true)),
        )
            .into_response(),
    }
}

async fn lead_form_js_handler() -> Response {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        landing_kit_generator::form::lead_form_js(),
    )
        .into_response()
}

async fn sitemap_handler(State(state): State<AppState>) -> Response {
    let site_toml_path = state.site_path.join("site.toml");
    let site = match parse_site_toml(&site_toml_path) {
        Ok(site) => site,
        Err(e) => return config_error_page(e.into()),
    };
    let catalog = Catalog::from_site(&site);
    (
        [(header::CONTENT_TYPE, "application/xml")],
        sitemap_xml(&site.config, &catalog),
    )
        .into_response()
}

/// Lead intake endpoint backing the generated form.
async fn lead_handler(State(state): State<AppState>, Json(lead): Json<Lead>) -> Response {
    if let Err(e) = lead.validate() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response();
    }

    match state.submitter.submit(&lead).await {
        Ok(receipt) => {
            println!("   📨 Lead received: {} ({})", lead.name, receipt.id);
            Json(serde_json::json!({ "id": receipt.id })).into_response()
        }
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(serde_json::json!({ "error": format!("{:#}", e) })),
        )
            .into_response(),
    }
}
