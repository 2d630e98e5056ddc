use serde::{Deserialize, Serialize};
use std::fmt;

/// The five NYC boroughs used to group locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Borough {
    Manhattan,
    Brooklyn,
    Queens,
    Bronx,
    #[serde(rename = "Staten Island")]
    StatenIsland,
}

impl Borough {
    /// Stable borough order; drives index-page sections and grouped listings.
    pub const ALL: [Borough; 5] = [
        Borough::Manhattan,
        Borough::Brooklyn,
        Borough::Queens,
        Borough::Bronx,
        Borough::StatenIsland,
    ];
}

impl fmt::Display for Borough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Borough::Manhattan => "Manhattan",
            Borough::Brooklyn => "Brooklyn",
            Borough::Queens => "Queens",
            Borough::Bronx => "Bronx",
            Borough::StatenIsland => "Staten Island",
        };
        f.write_str(name)
    }
}

/// Closed set of service categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    AccidentType,
    InjuryType,
    LegalProcess,
    Violation,
    SpecialCase,
}

impl ServiceCategory {
    /// Stable category order for grouped service listings.
    pub const ALL: [ServiceCategory; 5] = [
        ServiceCategory::AccidentType,
        ServiceCategory::InjuryType,
        ServiceCategory::LegalProcess,
        ServiceCategory::Violation,
        ServiceCategory::SpecialCase,
    ];

    /// Human-readable section heading for the category.
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceCategory::AccidentType => "Accident Types",
            ServiceCategory::InjuryType => "Injury Types",
            ServiceCategory::LegalProcess => "Legal Process",
            ServiceCategory::Violation => "Trucking Violations",
            ServiceCategory::SpecialCase => "Special Cases",
        }
    }

    /// Short blurb shown under the category heading on the services index.
    pub fn blurb(&self) -> &'static str {
        match self {
            ServiceCategory::AccidentType => {
                "We handle all types of truck and commercial vehicle accidents."
            }
            ServiceCategory::InjuryType => {
                "We fight for compensation for all truck accident injuries."
            }
            ServiceCategory::LegalProcess => {
                "Our attorneys guide you through every step of the legal process."
            }
            ServiceCategory::Violation => {
                "We investigate trucking violations that cause accidents."
            }
            ServiceCategory::SpecialCase => {
                "We handle complex and unique trucking accident situations."
            }
        }
    }
}

/// A marketable legal case type (accident type, injury type, process, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub slug: String,
    pub name: String,
    pub short_name: String,
    pub icon: String,
    pub category: ServiceCategory,
    pub description: String,
    pub meta_description: String,
}

/// An NYC neighborhood the firm markets against, grouped under a borough.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub slug: String,
    pub name: String,
    pub borough: Borough,
    pub description: String,
    pub meta_description: String,
    pub highlights: Vec<String>,
}

/// Fixed site-wide record consumed by every page and the header/footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    /// Raw digits, used in tel: links.
    pub phone: String,
    /// Display form, e.g. "(800) 555-1234".
    pub phone_formatted: String,
    pub email: String,
    pub address: String,
    pub tagline: String,
    pub description: String,
    /// Absolute origin for sitemap entries, e.g. "https://example.com".
    /// Canonical links stay route-relative when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Lead submission boundary configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Endpoint the production submitter posts leads to. When absent,
    /// preview accepts and logs leads locally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// Complete parsed site: config plus the two immutable catalogs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub config: SiteConfig,
    pub intake: IntakeConfig,
    pub services: Vec<Service>,
    pub locations: Vec<Location>,
}

/// Format a 10-digit phone number as "(AAA) BBB-CCCC".
///
/// Inputs that are not exactly ten digits are returned unchanged.
pub fn format_phone(digits: &str) -> String {
    if digits.len() == 10 && digits.bytes().all(|b| b.is_ascii_digit()) {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        digits.to_string()
    }
}

/// Get a URL-safe slug from arbitrary text.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c
            } else {
                '-'
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
