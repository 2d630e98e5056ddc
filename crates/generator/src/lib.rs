// Static site generation: route enumeration over the catalogs, page
// rendering, and the generated client assets.

pub mod form;
pub mod html;
pub mod meta;
pub mod pages;

use landing_kit_core::{Catalog, Site, SiteConfig};

pub use meta::{NOT_FOUND_TITLE, PageMeta, page_meta};

/// Related-services cap on service pages.
pub const RELATED_SERVICES_SERVICE_PAGE_CAP: usize = 3;
/// Related-services cap on cross-product pages.
pub const RELATED_SERVICES_PAIR_PAGE_CAP: usize = 4;
/// Nearby-locations cap in the cross-product page sidebar.
pub const NEARBY_LOCATIONS_SERVICE_PAGE_CAP: usize = 4;
/// Nearby-locations cap on location pages. Differs from the sidebar cap
/// for no recorded reason; both are kept as-is for page reproducibility.
pub const NEARBY_LOCATIONS_LOCATION_PAGE_CAP: usize = 6;
/// Featured services on the home page.
pub const FEATURED_SERVICES_HOME_CAP: usize = 6;
/// Featured services on location pages.
pub const FEATURED_SERVICES_LOCATION_PAGE_CAP: usize = 6;
/// Services listed in the footer column.
pub const FOOTER_SERVICES_CAP: usize = 8;

/// Complete generated site, in memory.
pub struct GeneratedSite {
    /// (relative file path, html)
    pub pages: Vec<(String, String)>,
    /// (relative file path, data)
    pub assets: Vec<(String, Vec<u8>)>,
}

impl GeneratedSite {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Every URL route the site serves, in generation order: the three fixed
/// pages, then per-service and per-location pages in catalog order, then
/// the full cross-product in `Catalog::pairs` order.
///
/// This enumeration is what the build writes and what the sitemap lists;
/// its order must stay stable for reproducible builds.
pub fn routes(catalog: &Catalog) -> Vec<String> {
    let mut routes = vec![
        "/".to_string(),
        "/services/".to_string(),
        "/locations/".to_string(),
    ];
    for service in catalog.services() {
        routes.push(format!("/services/{}/", service.slug));
    }
    for location in catalog.locations() {
        routes.push(format!("/locations/{}/", location.slug));
    }
    for (service, location) in catalog.pairs() {
        routes.push(format!("/{}/{}/", service.slug, location.slug));
    }
    routes
}

/// Map a URL path to its rendered page. Unknown or partially-resolving
/// slugs are an explicit `None` so the caller can serve the not-found
/// page instead of partial content.
pub fn render_path(
    config: &SiteConfig,
    catalog: &Catalog,
    path: &str,
    is_preview: bool,
) -> Option<String> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [] => Some(pages::render_home(config, catalog, is_preview)),
        ["services"] => Some(pages::render_services_index(config, catalog, is_preview)),
        ["locations"] => Some(pages::render_locations_index(config, catalog, is_preview)),
        ["services", slug] => catalog
            .service(slug)
            .map(|service| pages::render_service_page(config, catalog, service, is_preview)),
        ["locations", slug] => catalog
            .location(slug)
            .map(|location| pages::render_location_page(config, catalog, location, is_preview)),
        [service_slug, location_slug] => {
            match (catalog.service(service_slug), catalog.location(location_slug)) {
                (Some(service), Some(location)) => Some(pages::render_service_location_page(
                    config, catalog, service, location, is_preview,
                )),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Route URL to the on-disk file the build writes for it.
fn route_file(route: &str) -> String {
    if route == "/" {
        "index.html".to_string()
    } else {
        format!("{}index.html", route.trim_start_matches('/'))
    }
}

/// Generate every page and asset for the site.
pub fn generate_site(site: &Site, is_preview: bool) -> GeneratedSite {
    let catalog = Catalog::from_site(site);
    let config = &site.config;

    let mut pages: Vec<(String, String)> = routes(&catalog)
        .iter()
        .map(|route| {
            let html = render_path(config, &catalog, route, is_preview)
                .unwrap_or_else(|| pages::render_not_found(config, &catalog, is_preview));
            (route_file(route), html)
        })
        .collect();
    pages.push((
        "404.html".to_string(),
        pages::render_not_found(config, &catalog, is_preview),
    ));

    let assets = vec![
        (
            "lead-form.js".to_string(),
            form::lead_form_js().into_bytes(),
        ),
        (
            "sitemap.xml".to_string(),
            sitemap_xml(config, &catalog).into_bytes(),
        ),
    ];

    GeneratedSite { pages, assets }
}

/// Sitemap over the full route enumeration. Entries are prefixed with
/// the configured origin when one is set, route-relative otherwise.
pub fn sitemap_xml(config: &SiteConfig, catalog: &Catalog) -> String {
    let base = config.base_url.as_deref().unwrap_or("");
    let urls: String = routes(catalog)
        .iter()
        .map(|route| {
            format!(
                "    <url><loc>{}{}</loc></url>\n",
                html::html_escape(base),
                route
            )
        })
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}</urlset>\n",
        urls
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use landing_kit_core::parse_site_toml_str;

    const FIXTURE: &str = r##"
[site]
name = "Test Firm"
phone = "8005551234"
email = "c@example.com"
address = "1 Plaza"
tagline = "tagline"
description = "description"
base_url = "https://nytruckingattorney.example"

[[service]]
slug = "jackknife-accidents"
name = "Jackknife Accidents"
short_name = "Jackknife"
icon = "🚛"
category = "accident-type"
description = "d"
meta_description = "m"

[[service]]
slug = "wrongful-death"
name = "Wrongful Death"
short_name = "Wrongful Death"
icon = "🕊️"
category = "special-case"
description = "d"
meta_description = "m"

[[location]]
slug = "park-slope"
name = "Park Slope"
borough = "Brooklyn"
description = "d"
meta_description = "m"
highlights = ["h"]

[[location]]
slug = "astoria"
name = "Astoria"
borough = "Queens"
description = "d"
meta_description = "m"
highlights = ["h"]

[[location]]
slug = "riverdale"
name = "Riverdale"
borough = "Bronx"
description = "d"
meta_description = "m"
highlights = ["h"]
"##;

    #[test]
    fn test_route_enumeration_covers_the_cross_product() {
        let site = parse_site_toml_str(FIXTURE).unwrap();
        let catalog = Catalog::from_site(&site);
        let routes = routes(&catalog);

        // 3 fixed + 2 services + 3 locations + 2*3 pairs.
        assert_eq!(routes.len(), 3 + 2 + 3 + 6);
        assert_eq!(routes[0], "/");
        assert!(routes.contains(&"/services/jackknife-accidents/".to_string()));
        assert!(routes.contains(&"/locations/riverdale/".to_string()));

        // Pair routes in pairs() order: services outer, locations inner.
        let first_pair = routes.iter().position(|r| r == "/jackknife-accidents/park-slope/");
        let second_pair = routes.iter().position(|r| r == "/jackknife-accidents/astoria/");
        let later_pair = routes.iter().position(|r| r == "/wrongful-death/park-slope/");
        assert!(first_pair < second_pair);
        assert!(second_pair < later_pair);
    }

    #[test]
    fn test_generate_site_writes_one_file_per_route_plus_not_found() {
        let site = parse_site_toml_str(FIXTURE).unwrap();
        let generated = generate_site(&site, false);

        assert_eq!(generated.page_count(), 3 + 2 + 3 + 6 + 1);
        assert_eq!(generated.pages[0].0, "index.html");
        assert!(
            generated
                .pages
                .iter()
                .any(|(path, _)| path == "jackknife-accidents/astoria/index.html")
        );
        assert_eq!(generated.pages.last().unwrap().0, "404.html");

        let asset_names: Vec<&str> = generated.assets.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(asset_names, vec!["lead-form.js", "sitemap.xml"]);
    }

    #[test]
    fn test_generation_is_reproducible() {
        let site = parse_site_toml_str(FIXTURE).unwrap();
        let a = generate_site(&site, false);
        let b = generate_site(&site, false);
        assert_eq!(a.pages, b.pages);
    }

    #[test]
    fn test_render_path_resolves_and_rejects() {
        let site = parse_site_toml_str(FIXTURE).unwrap();
        let catalog = Catalog::from_site(&site);

        assert!(render_path(&site.config, &catalog, "/", false).is_some());
        assert!(render_path(&site.config, &catalog, "/services/wrongful-death/", false).is_some());
        assert!(render_path(&site.config, &catalog, "/wrongful-death/astoria/", false).is_some());

        // Unknown slugs resolve to an explicit absence, not partial content.
        assert!(render_path(&site.config, &catalog, "/services/not-a-real-service/", false).is_none());
        assert!(render_path(&site.config, &catalog, "/not-a-real-service/park-slope/", false).is_none());
        assert!(render_path(&site.config, &catalog, "/jackknife-accidents/not-a-real-location/", false).is_none());
        assert!(render_path(&site.config, &catalog, "/a/b/c/", false).is_none());
    }

    #[test]
    fn test_sitemap_prefixes_configured_origin() {
        let site = parse_site_toml_str(FIXTURE).unwrap();
        let catalog = Catalog::from_site(&site);
        let xml = sitemap_xml(&site.config, &catalog);
        assert!(xml.contains("<loc>https://nytruckingattorney.example/jackknife-accidents/park-slope/</loc>"));
    }
}
