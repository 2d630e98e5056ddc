// Catalog validation for the `validate` command: structural problems are
// errors, content-quality problems are warnings.

use landing_kit_core::{Site, slugify};

/// Meta descriptions longer than this get truncated in search results.
const META_DESCRIPTION_MAX: usize = 160;

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a parsed site. Parse-level invariants (unique slugs, known
/// boroughs/categories, a 10-digit phone) are already enforced by
/// `landing_kit_core::config`; this pass covers everything that should
/// not hard-fail a build.
pub fn validate_site(site: &Site) -> ValidationReport {
    let mut report = ValidationReport::default();

    if site.services.is_empty() {
        report.errors.push("No services defined".to_string());
    }
    if site.locations.is_empty() {
        report.errors.push("No locations defined".to_string());
    }

    for service in &site.services {
        let ctx = format!("service '{}'", service.slug);
        check_slug(&mut report, &ctx, &service.slug);
        check_nonempty(&mut report, &ctx, "name", &service.name);
        check_nonempty(&mut report, &ctx, "short_name", &service.short_name);
        check_meta_description(&mut report, &ctx, &service.meta_description);
        if service.description.trim().is_empty() {
            report.warnings.push(format!("{}: empty description", ctx));
        }
    }

    for location in &site.locations {
        let ctx = format!("location '{}'", location.slug);
        check_slug(&mut report, &ctx, &location.slug);
        check_nonempty(&mut report, &ctx, "name", &location.name);
        check_meta_description(&mut report, &ctx, &location.meta_description);
        if location.highlights.is_empty() {
            report
                .warnings
                .push(format!("{}: no traffic highlights", ctx));
        }
    }

    let services = site.services.len();
    let locations = site.locations.len();
    report.info.push(format!("{} services", services));
    report.info.push(format!("{} locations", locations));
    // 3 fixed pages, one per entity, the cross-product, and 404.html.
    report.info.push(format!(
        "{} pages will be generated",
        3 + services + locations + services * locations + 1
    ));

    report
}

fn check_slug(report: &mut ValidationReport, ctx: &str, slug: &str) {
    if slug != slugify(slug) {
        report.errors.push(format!(
            "{}: slug is not URL-safe (expected '{}')",
            ctx,
            slugify(slug)
        ));
    }
}

fn check_nonempty(report: &mut ValidationReport, ctx: &str, field: &str, value: &str) {
    if value.trim().is_empty() {
        report.errors.push(format!("{}: empty {}", ctx, field));
    }
}

fn check_meta_description(report: &mut ValidationReport, ctx: &str, value: &str) {
    if value.trim().is_empty() {
        report
            .warnings
            .push(format!("{}: missing meta description", ctx));
    } else if value.chars().count() > META_DESCRIPTION_MAX {
        report.warnings.push(format!(
            "{}: meta description over {} characters",
            ctx, META_DESCRIPTION_MAX
        ));
    }
}
