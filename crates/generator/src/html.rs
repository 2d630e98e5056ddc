use crate::meta::{PageMeta, full_title};
use landing_kit_core::{Catalog, SiteConfig};

/// HTML-escape a string to prevent XSS from catalog content
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#x27;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Bullet list from plain strings, escaping each item.
pub fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("            <li>• {}</li>\n", html_escape(item)))
        .collect()
}

const STYLES: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            color: #1e293b;
            background: #f8fafc;
        }
        a { color: inherit; }
        .wrap { max-width: 1100px; margin: 0 auto; padding: 0 1rem; }
        .topbar { background: #d97706; color: #fff; padding: 0.4rem 0; font-size: 0.9rem; }
        .topbar .wrap { display: flex; justify-content: space-between; }
        header.site { background: #0f172a; color: #fff; padding: 1rem 0; position: sticky; top: 0; }
        header.site .wrap { display: flex; justify-content: space-between; align-items: center; }
        header.site nav a { margin-left: 1.25rem; text-decoration: none; }
        header.site nav a:hover { color: #f59e0b; }
        .brand { font-size: 1.2rem; font-weight: bold; text-decoration: none; }
        .brand span { color: #f59e0b; }
        .hero { background: #0f172a; color: #fff; padding: 3.5rem 0; }
        .hero h1 { font-size: 2.2rem; margin-bottom: 1rem; line-height: 1.2; }
        .hero h1 em { color: #f59e0b; font-style: normal; }
        .hero p.lede { font-size: 1.15rem; color: #cbd5e1; max-width: 46rem; margin-bottom: 1.5rem; }
        .badge { display: inline-block; background: #d97706; font-size: 0.85rem; font-weight: 600; padding: 0.2rem 0.8rem; border-radius: 999px; margin-bottom: 1rem; }
        .crumbs { font-size: 0.9rem; color: #f59e0b; margin-bottom: 1rem; }
        .crumbs a { color: #f59e0b; }
        .cta-call { display: inline-block; background: #d97706; color: #fff; font-weight: bold; padding: 0.9rem 1.8rem; border-radius: 8px; text-decoration: none; }
        .cta-call:hover { background: #b45309; }
        .assurances { margin-top: 1.5rem; font-size: 0.9rem; color: #94a3b8; }
        main section.content { padding: 3rem 0; }
        .columns { display: grid; grid-template-columns: 2fr 1fr; gap: 3rem; }
        @media (max-width: 768px) { .columns { grid-template-columns: 1fr; } }
        h2 { font-size: 1.5rem; margin: 1.5rem 0 0.75rem; color: #0f172a; }
        h3 { font-size: 1.2rem; margin: 1.25rem 0 0.6rem; color: #0f172a; }
        .prose p { margin-bottom: 1rem; color: #334155; }
        .prose ul { list-style: none; margin-bottom: 1.25rem; }
        .prose li { margin-bottom: 0.4rem; }
        .card { background: #fff; border: 1px solid #e2e8f0; border-radius: 12px; padding: 1.5rem; margin-bottom: 1.5rem; }
        .card.dark { background: #0f172a; color: #fff; border: none; }
        .card ul { list-style: none; }
        .card li { margin-bottom: 0.5rem; }
        .card a { text-decoration: none; color: #334155; }
        .card.dark a { color: #fff; }
        .card a:hover { color: #d97706; }
        .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; margin: 1rem 0 2rem; }
        .tile { display: block; background: #fff; border: 1px solid #e2e8f0; border-radius: 8px; padding: 1rem; text-decoration: none; color: #0f172a; }
        .tile:hover { border-color: #d97706; }
        .tile .icon { font-size: 1.6rem; }
        .tile .name { font-weight: 600; }
        .tile .sub { font-size: 0.85rem; color: #64748b; }
        .stats { background: #fff; border-bottom: 1px solid #e2e8f0; padding: 2rem 0; }
        .stats .wrap { display: grid; grid-template-columns: repeat(4, 1fr); text-align: center; gap: 1rem; }
        .stats .num { font-size: 2rem; font-weight: bold; color: #d97706; }
        .notice { background: #fffbeb; border: 1px solid #fde68a; border-radius: 8px; padding: 1.25rem; margin: 1.5rem 0; }
        .cta-band { background: #d97706; color: #fff; text-align: center; padding: 2.5rem 0; }
        .cta-band h2 { color: #fff; margin-top: 0; }
        .cta-band a { display: inline-block; background: #0f172a; color: #fff; font-weight: bold; padding: 0.9rem 1.8rem; border-radius: 8px; text-decoration: none; margin-top: 1rem; }
        footer.site { background: #0f172a; color: #94a3b8; padding: 3rem 0 2rem; }
        footer.site .wrap { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 2rem; }
        footer.site h3 { color: #f59e0b; font-size: 1rem; margin-top: 0; }
        footer.site ul { list-style: none; }
        footer.site a { text-decoration: none; }
        footer.site a:hover { color: #fff; }
        .fineprint { grid-column: 1 / -1; border-top: 1px solid #1e293b; padding-top: 1rem; font-size: 0.85rem; }
        form.lead label { display: block; font-size: 0.9rem; font-weight: 500; margin: 0.75rem 0 0.25rem; }
        form.lead input, form.lead textarea { width: 100%; padding: 0.7rem; border: 1px solid #cbd5e1; border-radius: 8px; font: inherit; }
        form.lead button { width: 100%; margin-top: 1rem; background: #d97706; color: #fff; font-weight: bold; font-size: 1.05rem; padding: 0.9rem; border: none; border-radius: 8px; cursor: pointer; }
        form.lead button:disabled { background: #fbbf24; cursor: not-allowed; }
        .form-error { display: none; color: #b91c1c; margin-top: 0.75rem; }
        .form-thanks { display: none; background: #f0fdf4; border: 1px solid #bbf7d0; border-radius: 8px; padding: 1.5rem; text-align: center; }
        .preview-badge { background: #16a34a; color: #fff; text-align: center; padding: 0.3rem; font-weight: bold; font-size: 0.85rem; }
"#;

/// Hot reload script, preview mode only.
const RELOAD_SCRIPT: &str = r#"<script>
        const eventSource = new EventSource('/_reload');
        eventSource.onmessage = () => {
            console.log('Reloading...');
            location.reload();
        };
        eventSource.onerror = () => {
            console.log('Preview server disconnected');
            eventSource.close();
        };
    </script>"#;

/// Wrap page body in the shared document shell: head with synthesized
/// metadata and Open Graph tags, header with phone CTA, footer with
/// featured-service and borough link columns.
///
/// The same layout serves preview and build so what you see locally is
/// exactly what gets deployed; `is_preview` only adds the reload hook.
pub fn layout(
    site: &SiteConfig,
    catalog: &Catalog,
    meta: &PageMeta,
    path: &str,
    body: &str,
    is_preview: bool,
) -> String {
    let title = html_escape(&full_title(meta, site));
    let description_tags = match &meta.description {
        Some(description) => {
            let escaped = html_escape(description);
            format!(
                "    <meta name=\"description\" content=\"{}\">\n    <meta property=\"og:description\" content=\"{}\">\n",
                escaped, escaped
            )
        }
        None => String::new(),
    };
    // Canonical URL is the route path itself; prefixed with the
    // configured origin when one is set.
    let canonical = match &site.base_url {
        Some(base) => format!("{}{}", base, path),
        None => path.to_string(),
    };

    let footer_services: String = catalog
        .services()
        .iter()
        .take(crate::FOOTER_SERVICES_CAP)
        .map(|s| {
            format!(
                "                <li><a href=\"/services/{}/\">{}</a></li>\n",
                s.slug,
                html_escape(&s.short_name)
            )
        })
        .collect();
    let footer_boroughs: String = catalog
        .boroughs()
        .iter()
        .map(|b| {
            format!(
                "                <li><a href=\"/locations/#{}\">{} Truck Accidents</a></li>\n",
                landing_kit_core::slugify(&b.to_string()),
                b
            )
        })
        .collect();

    let preview_badge = if is_preview {
        "<div class=\"preview-badge\">PREVIEW MODE - Live Reload Active</div>\n"
    } else {
        ""
    };
    let reload_script = if is_preview { RELOAD_SCRIPT } else { "" };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
{description_tags}    <meta property="og:title" content="{title}">
    <meta property="og:type" content="website">
    <meta property="og:site_name" content="{site_name}">
    <link rel="canonical" href="{canonical}">
    <style>{styles}    </style>
</head>
<body>
{preview_badge}    <div class="topbar">
        <div class="wrap">
            <span>Free Consultation • No Fee Unless We Win</span>
            <a href="tel:{phone}"><strong>Call Now: {phone_formatted}</strong></a>
        </div>
    </div>
    <header class="site">
        <div class="wrap">
            <a class="brand" href="/">{site_name}</a>
            <nav>
                <a href="/services/">Services</a>
                <a href="/locations/">Locations</a>
                <a class="cta-call" href="tel:{phone}">Free Consultation</a>
            </nav>
        </div>
    </header>
    <main>
{body}    </main>
    <footer class="site">
        <div class="wrap">
            <div>
                <h3>About Us</h3>
                <p>{site_description}</p>
                <p><strong style="color:#fff">No Fee Unless We Win</strong></p>
            </div>
            <div>
                <h3>Our Services</h3>
                <ul>
{footer_services}                </ul>
            </div>
            <div>
                <h3>Locations</h3>
                <ul>
{footer_boroughs}                </ul>
            </div>
            <div>
                <h3>Contact</h3>
                <ul>
                    <li><a href="tel:{phone}">{phone_formatted}</a></li>
                    <li><a href="mailto:{email}">{email}</a></li>
                    <li>{address}</li>
                </ul>
            </div>
            <div class="fineprint">
                <p>{tagline}</p>
                <p>Attorney advertising. Prior results do not guarantee a similar outcome.</p>
            </div>
        </div>
    </footer>
    <script src="/lead-form.js" defer></script>
    {reload_script}
</body>
</html>"#,
        title = title,
        description_tags = description_tags,
        site_name = html_escape(&site.name),
        canonical = html_escape(&canonical),
        styles = STYLES,
        preview_badge = preview_badge,
        phone = site.phone,
        phone_formatted = site.phone_formatted,
        body = body,
        site_description = html_escape(&site.description),
        footer_services = footer_services,
        footer_boroughs = footer_boroughs,
        email = html_escape(&site.email),
        address = html_escape(&site.address),
        tagline = html_escape(&site.tagline),
        reload_script = reload_script,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#x27;s&quot;&lt;/b&gt;"
        );
        assert_eq!(html_escape("Park Slope"), "Park Slope");
    }
}
