use crate::error::{Error, Result};
use crate::types::*;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Raw TOML configuration structure
/// This matches the site.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    site: RawSiteConfig,
    #[serde(default)]
    intake: IntakeConfig,
    #[serde(default)]
    service: Vec<Service>,
    #[serde(default)]
    location: Vec<Location>,
}

#[derive(Debug, Deserialize)]
struct RawSiteConfig {
    name: String,
    phone: String, // Normalized to raw digits
    phone_formatted: Option<String>,
    email: String,
    address: String,
    tagline: String,
    description: String,
    base_url: Option<String>,
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<Site> {
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<Site> {
    let raw: RawConfig = toml::from_str(content)?;

    let phone = normalize_phone(&raw.site.phone)?;
    let phone_formatted = raw
        .site
        .phone_formatted
        .unwrap_or_else(|| format_phone(&phone));

    let config = SiteConfig {
        name: raw.site.name,
        phone,
        phone_formatted,
        email: raw.site.email,
        address: raw.site.address,
        tagline: raw.site.tagline,
        description: raw.site.description,
        base_url: raw.site.base_url.map(|u| u.trim_end_matches('/').to_string()),
    };

    // Slugs must be unique within each catalog; lookups and route
    // enumeration depend on it.
    check_unique_slugs("service", raw.service.iter().map(|s| s.slug.as_str()))?;
    check_unique_slugs("location", raw.location.iter().map(|l| l.slug.as_str()))?;

    Ok(Site {
        config,
        intake: raw.intake,
        services: raw.service,
        locations: raw.location,
    })
}

/// Strip formatting from a phone number and require exactly ten digits.
fn normalize_phone(input: &str) -> Result<String> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 10 {
        return Err(Error::ConfigParse(format!(
            "Invalid site.phone '{}': expected a 10-digit US number",
            input
        )));
    }
    Ok(digits)
}

fn check_unique_slugs<'a, I>(kind: &str, slugs: I) -> Result<()>
where
    I: Iterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for slug in slugs {
        if slug.trim().is_empty() {
            return Err(Error::ConfigParse(format!("Empty {} slug", kind)));
        }
        if !seen.insert(slug) {
            return Err(Error::ConfigParse(format!(
                "Duplicate {} slug '{}'",
                kind, slug
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"
[site]
name = "Test Firm"
phone = "(800) 555-1234"
email = "contact@example.com"
address = "1 Test Plaza, New York, NY 10001"
tagline = "Test tagline"
description = "Test description"

[[service]]
slug = "jackknife-accidents"
name = "Jackknife Accidents"
short_name = "Jackknife"
icon = "🚛"
category = "accident-type"
description = "Jackknife crashes happen when a trailer swings out of line."
meta_description = "Jackknife accident lawyers in New York."

[[location]]
slug = "park-slope"
name = "Park Slope"
borough = "Brooklyn"
description = "Park Slope sees heavy delivery traffic."
meta_description = "Park Slope truck accident lawyers."
highlights = ["Fourth Avenue corridor", "Prospect Expressway ramps"]
"##;

    #[test]
    fn test_parse_minimal_config() {
        let site = parse_site_toml_str(MINIMAL).unwrap();
        assert_eq!(site.config.name, "Test Firm");
        assert_eq!(site.config.phone, "8005551234");
        assert_eq!(site.config.phone_formatted, "(800) 555-1234");
        assert_eq!(site.services.len(), 1);
        assert_eq!(site.services[0].category, ServiceCategory::AccidentType);
        assert_eq!(site.locations[0].borough, Borough::Brooklyn);
        assert_eq!(site.locations[0].highlights.len(), 2);
        assert!(site.intake.endpoint.is_none());
    }

    #[test]
    fn test_phone_normalized_from_display_form() {
        let site = parse_site_toml_str(MINIMAL).unwrap();
        // Raw digits go into tel: links, the display form is derived.
        assert_eq!(format_phone(&site.config.phone), site.config.phone_formatted);
    }

    #[test]
    fn test_parse_rejects_bad_phone() {
        let toml = MINIMAL.replace("(800) 555-1234", "555-1234");
        let result = parse_site_toml_str(&toml);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("10-digit")
        );
    }

    #[test]
    fn test_parse_rejects_duplicate_service_slug() {
        let dup = r##"
[[service]]
slug = "jackknife-accidents"
name = "Jackknife Accidents Again"
short_name = "Jackknife"
icon = "🚛"
category = "accident-type"
description = "Duplicate entry."
meta_description = "Duplicate entry."
"##;
        let toml = format!("{}{}", MINIMAL, dup);
        let result = parse_site_toml_str(&toml);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Duplicate service slug")
        );
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        let toml = MINIMAL.replace("accident-type", "not-a-category");
        assert!(parse_site_toml_str(&toml).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_borough() {
        let toml = MINIMAL.replace("Brooklyn", "Jersey City");
        assert!(parse_site_toml_str(&toml).is_err());
    }

    #[test]
    fn test_intake_endpoint_parsed() {
        // [intake] has to appear before the array-of-tables entries.
        let spliced = MINIMAL.replace(
            "[[service]]",
            "[intake]\nendpoint = \"https://crm.example.com/leads\"\n\n[[service]]",
        );
        let site = parse_site_toml_str(&spliced).unwrap();
        assert_eq!(
            site.intake.endpoint.as_deref(),
            Some("https://crm.example.com/leads")
        );
    }
}
