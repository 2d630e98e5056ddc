use landing_kit_core::{Location, Service, SiteConfig};

/// Title used when neither slug resolves.
pub const NOT_FOUND_TITLE: &str = "Page Not Found";

/// Synthesized per-page metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        PageMeta {
            title: title.into(),
            description: Some(description.into()),
        }
    }
}

/// Deterministic title/description synthesis from the resolved entities.
///
/// Identical inputs always yield identical strings; the generated page
/// corpus must be reproducible byte-for-byte.
pub fn page_meta(
    service: Option<&Service>,
    location: Option<&Location>,
    site: &SiteConfig,
) -> PageMeta {
    match (service, location) {
        (Some(service), Some(location)) => PageMeta {
            title: format!(
                "{} Lawyer in {}, {}",
                service.name, location.name, location.borough
            ),
            description: Some(format!(
                "Experienced {} attorney serving {}, {}. Free consultation. No fee unless we win. Call {}.",
                service.name.to_lowercase(),
                location.name,
                location.borough,
                site.phone_formatted
            )),
        },
        (None, Some(location)) => PageMeta {
            title: format!("{} Truck Accident Lawyer", location.name),
            description: Some(location.meta_description.clone()),
        },
        (Some(service), None) => PageMeta {
            title: format!("{} Lawyer in New York", service.name),
            description: Some(service.meta_description.clone()),
        },
        (None, None) => PageMeta {
            title: NOT_FOUND_TITLE.to_string(),
            description: None,
        },
    }
}

/// Browser-tab/OG title: `{title} | {site name}` except on the home
/// page, where the title already is the site name.
pub fn full_title(meta: &PageMeta, site: &SiteConfig) -> String {
    if meta.title == site.name {
        site.name.clone()
    } else {
        format!("{} | {}", meta.title, site.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landing_kit_core::{Borough, ServiceCategory};

    fn site() -> SiteConfig {
        SiteConfig {
            name: "New York Trucking Accident Attorney".to_string(),
            phone: "8005551234".to_string(),
            phone_formatted: "(800) 555-1234".to_string(),
            email: "contact@nytruckingattorney.com".to_string(),
            address: "123 Legal Plaza, New York, NY 10001".to_string(),
            tagline: "Fighting for Truck Accident Victims Across New York".to_string(),
            description: "Experienced New York trucking accident attorneys.".to_string(),
            base_url: None,
        }
    }

    fn jackknife() -> Service {
        Service {
            slug: "jackknife-accidents".to_string(),
            name: "Jackknife Accidents".to_string(),
            short_name: "Jackknife".to_string(),
            icon: "🚛".to_string(),
            category: ServiceCategory::AccidentType,
            description: "Trailer swing crashes.".to_string(),
            meta_description: "Jackknife accident lawyers serving New York.".to_string(),
        }
    }

    fn park_slope() -> Location {
        Location {
            slug: "park-slope".to_string(),
            name: "Park Slope".to_string(),
            borough: Borough::Brooklyn,
            description: "Heavy delivery traffic.".to_string(),
            meta_description: "Park Slope truck accident lawyers.".to_string(),
            highlights: vec!["Fourth Avenue corridor".to_string()],
        }
    }

    #[test]
    fn test_service_location_title_exact() {
        let meta = page_meta(Some(&jackknife()), Some(&park_slope()), &site());
        assert_eq!(meta.title, "Jackknife Accidents Lawyer in Park Slope, Brooklyn");
        let description = meta.description.unwrap();
        assert!(description.starts_with("Experienced jackknife accidents attorney serving Park Slope, Brooklyn."));
        assert!(description.ends_with("Call (800) 555-1234."));
    }

    #[test]
    fn test_location_only_uses_stored_meta_description() {
        let location = park_slope();
        let meta = page_meta(None, Some(&location), &site());
        assert_eq!(meta.title, "Park Slope Truck Accident Lawyer");
        assert_eq!(meta.description.as_deref(), Some("Park Slope truck accident lawyers."));
    }

    #[test]
    fn test_service_only_title() {
        let service = jackknife();
        let meta = page_meta(Some(&service), None, &site());
        assert_eq!(meta.title, "Jackknife Accidents Lawyer in New York");
        assert_eq!(
            meta.description.as_deref(),
            Some("Jackknife accident lawyers serving New York.")
        );
    }

    #[test]
    fn test_unresolved_slugs_get_not_found_sentinel() {
        let meta = page_meta(None, None, &site());
        assert_eq!(meta.title, NOT_FOUND_TITLE);
        assert!(meta.description.is_none());
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let (service, location, site) = (jackknife(), park_slope(), site());
        let a = page_meta(Some(&service), Some(&location), &site);
        let b = page_meta(Some(&service), Some(&location), &site);
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_title_appends_site_name() {
        let s = site();
        let meta = page_meta(Some(&jackknife()), None, &s);
        assert_eq!(
            full_title(&meta, &s),
            "Jackknife Accidents Lawyer in New York | New York Trucking Accident Attorney"
        );

        let home = PageMeta::new(s.name.clone(), s.description.clone());
        assert_eq!(full_title(&home, &s), s.name);
    }
}
