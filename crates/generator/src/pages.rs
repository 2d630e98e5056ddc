use crate::form::lead_form_html;
use crate::html::{bullet_list, html_escape as esc, layout};
use crate::meta::{PageMeta, page_meta};
use crate::{
    FEATURED_SERVICES_HOME_CAP, FEATURED_SERVICES_LOCATION_PAGE_CAP, NEARBY_LOCATIONS_LOCATION_PAGE_CAP,
    NEARBY_LOCATIONS_SERVICE_PAGE_CAP, RELATED_SERVICES_PAIR_PAGE_CAP, RELATED_SERVICES_SERVICE_PAGE_CAP,
};
use landing_kit_core::{Catalog, Location, Service, SiteConfig, slugify};

/// Compensation categories listed on service and cross-product pages.
const COMPENSATION_ITEMS: [&str; 6] = [
    "Medical expenses (past and future)",
    "Lost wages and loss of earning capacity",
    "Pain and suffering",
    "Emotional distress",
    "Property damage",
    "Punitive damages in cases of egregious negligence",
];

/// How-we-help checklist on service pages.
const SERVICE_HELP_ITEMS: [&str; 6] = [
    "Immediate investigation to preserve critical evidence",
    "Analysis of black box data and electronic logging devices",
    "Review of trucking company records and driver qualifications",
    "Expert witness coordination for accident reconstruction",
    "Aggressive negotiation with trucking company insurers",
    "Trial-ready litigation when necessary",
];

const ASSURANCES: &str =
    "            <p class=\"assurances\">✓ Free Consultation &nbsp; ✓ No Fee Unless We Win &nbsp; ✓ 24/7 Available</p>\n";

fn check_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("                    <li>✓ {}</li>\n", item))
        .collect()
}

fn bullet_items(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("                    <li>• {}</li>\n", item))
        .collect()
}

fn check_bullets(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("                    <li>✓ {}</li>\n", item))
        .collect()
}

fn service_tile(service: &Service, href: &str) -> String {
    format!(
        r#"                <a class="tile" href="{href}">
                    <span class="icon">{icon}</span>
                    <div class="name">{name}</div>
                    <div class="sub">{sub}</div>
                </a>
"#,
        href = href,
        icon = esc(&service.icon),
        name = esc(&service.short_name),
        sub = esc(&service.meta_description),
    )
}

fn location_tile(location: &Location, href: &str) -> String {
    format!(
        r#"                <a class="tile" href="{href}">
                    <div class="name">{name}</div>
                    <div class="sub">{borough}</div>
                </a>
"#,
        href = href,
        name = esc(&location.name),
        borough = location.borough,
    )
}

fn cta_band(site: &SiteConfig, heading: &str, blurb: &str) -> String {
    format!(
        r#"        <section class="cta-band">
            <div class="wrap">
                <h2>{heading}</h2>
                <p>{blurb}</p>
                <a href="tel:{phone}">Call {phone_formatted}</a>
            </div>
        </section>
"#,
        heading = heading,
        blurb = blurb,
        phone = site.phone,
        phone_formatted = site.phone_formatted,
    )
}

/// Home page: hero with lead form, stats band, featured services, and
/// borough overview.
pub fn render_home(site: &SiteConfig, catalog: &Catalog, is_preview: bool) -> String {
    let featured: String = catalog
        .services()
        .iter()
        .take(FEATURED_SERVICES_HOME_CAP)
        .map(|s| service_tile(s, &format!("/services/{}/", s.slug)))
        .collect();

    let borough_tiles: String = catalog
        .locations_by_borough()
        .iter()
        .map(|(borough, locations)| {
            format!(
                r#"                <a class="tile" href="/locations/#{anchor}">
                    <div class="name">{borough}</div>
                    <div class="sub">{count} neighborhoods served</div>
                </a>
"#,
                anchor = slugify(&borough.to_string()),
                borough = borough,
                count = locations.len(),
            )
        })
        .collect();

    let body = format!(
        r#"        <section class="hero">
            <div class="wrap">
                <span class="badge">Trusted New York Truck Accident Attorneys</span>
                <h1>Injured in a <em>Truck Accident</em> in New York?</h1>
                <p class="lede">We fight for victims of truck accidents across all five boroughs. With decades of experience taking on trucking companies and their insurers, we get results.</p>
                <a class="cta-call" href="tel:{phone}">Call {phone_formatted}</a>
{assurances}            </div>
        </section>
        <section class="stats">
            <div class="wrap">
                <div><div class="num">$500M+</div><div>Recovered for Clients</div></div>
                <div><div class="num">5,000+</div><div>Cases Handled</div></div>
                <div><div class="num">98%</div><div>Success Rate</div></div>
                <div><div class="num">25+</div><div>Years Experience</div></div>
            </div>
        </section>
        <section class="content">
            <div class="wrap columns">
            <div class="prose">
                <h2>Our Truck Accident Services</h2>
                <div class="grid">
{featured}                </div>
                <p><a href="/services/">View All {service_count} Services →</a></p>
                <h2>Serving All Five Boroughs</h2>
                <div class="grid">
{borough_tiles}                </div>
            </div>
            <div>
                <div class="card">
                    <h3>Free Case Review</h3>
                    <p>Get your case evaluated by an experienced attorney.</p>
{form}                </div>
            </div>
            </div>
        </section>
{cta}"#,
        phone = site.phone,
        phone_formatted = site.phone_formatted,
        assurances = ASSURANCES,
        featured = featured,
        service_count = catalog.services().len(),
        borough_tiles = borough_tiles,
        form = lead_form_html(None, None, site),
        cta = cta_band(
            site,
            "Injured in a Truck Accident?",
            "Get the compensation you deserve. Free consultation."
        ),
    );

    let meta = PageMeta::new(site.name.clone(), site.description.clone());
    layout(site, catalog, &meta, "/", &body, is_preview)
}

/// Services index: every service grouped by category.
pub fn render_services_index(site: &SiteConfig, catalog: &Catalog, is_preview: bool) -> String {
    let sections: String = catalog
        .services_by_category()
        .iter()
        .map(|(category, services)| {
            let tiles: String = services
                .iter()
                .map(|s| service_tile(s, &format!("/services/{}/", s.slug)))
                .collect();
            format!(
                r#"            <h2>{heading}</h2>
            <p>{blurb}</p>
            <div class="grid">
{tiles}            </div>
"#,
                heading = category.display_name(),
                blurb = category.blurb(),
                tiles = tiles,
            )
        })
        .collect();

    let body = format!(
        r#"        <section class="hero">
            <div class="wrap">
                <h1>Truck Accident Legal Services</h1>
                <p class="lede">We handle all types of truck accident cases throughout New York. Our specialized expertise ensures thorough investigation and maximum recovery.</p>
            </div>
        </section>
        <section class="content">
            <div class="wrap">
{sections}            </div>
        </section>
{cta}"#,
        sections = sections,
        cta = cta_band(
            site,
            "Need Help With Your Truck Accident Case?",
            "Contact us for a free consultation. We'll evaluate your case and explain your options."
        ),
    );

    let meta = PageMeta::new(
        "Truck Accident Legal Services",
        "Comprehensive truck accident legal services in New York. From 18-wheeler accidents to wrongful death claims, we handle all types of trucking cases.",
    );
    layout(site, catalog, &meta, "/services/", &body, is_preview)
}

/// Locations index: every neighborhood grouped by borough, with anchor
/// ids so borough links can deep-link into the page.
pub fn render_locations_index(site: &SiteConfig, catalog: &Catalog, is_preview: bool) -> String {
    let sections: String = catalog
        .locations_by_borough()
        .iter()
        .map(|(borough, locations)| {
            let tiles: String = locations
                .iter()
                .map(|l| location_tile(l, &format!("/locations/{}/", l.slug)))
                .collect();
            format!(
                r#"            <h2 id="{anchor}">{borough}</h2>
            <p>Truck accident attorneys serving {borough} neighborhoods.</p>
            <div class="grid">
{tiles}            </div>
"#,
                anchor = slugify(&borough.to_string()),
                borough = borough,
                tiles = tiles,
            )
        })
        .collect();

    let body = format!(
        r#"        <section class="hero">
            <div class="wrap">
                <h1>Serving All Five Boroughs</h1>
                <p class="lede">Our truck accident attorneys represent victims throughout New York City. No matter where your accident occurred, we can help.</p>
            </div>
        </section>
        <section class="content">
            <div class="wrap">
{sections}            </div>
        </section>
{cta}"#,
        sections = sections,
        cta = cta_band(
            site,
            "Injured in a Truck Accident?",
            "We serve truck accident victims throughout New York. Contact us for a free consultation."
        ),
    );

    let meta = PageMeta::new(
        "Service Areas - All NYC Neighborhoods",
        "New York trucking accident attorneys serving all five boroughs. Manhattan, Brooklyn, Queens, Bronx, and Staten Island truck accident lawyers.",
    );
    layout(site, catalog, &meta, "/locations/", &body, is_preview)
}

/// Service page: case-type prose plus every location grouped by borough,
/// each linking to the matching cross-product page.
pub fn render_service_page(
    site: &SiteConfig,
    catalog: &Catalog,
    service: &Service,
    is_preview: bool,
) -> String {
    let name = esc(&service.name);
    let name_lower = esc(&service.name.to_lowercase());
    let short = esc(&service.short_name);

    let location_sections: String = catalog
        .locations_by_borough()
        .iter()
        .map(|(borough, locations)| {
            let tiles: String = locations
                .iter()
                .map(|l| location_tile(l, &format!("/{}/{}/", service.slug, l.slug)))
                .collect();
            format!(
                "                <h3>{borough}</h3>\n                <div class=\"grid\">\n{tiles}                </div>\n",
                borough = borough,
                tiles = tiles,
            )
        })
        .collect();

    let related_links: String = catalog
        .related_services(service, RELATED_SERVICES_SERVICE_PAGE_CAP)
        .iter()
        .map(|related| {
            format!(
                "                        <li><a href=\"/services/{}/\">{} {}</a></li>\n",
                related.slug,
                esc(&related.icon),
                esc(&related.short_name)
            )
        })
        .collect();
    let related_card = if related_links.is_empty() {
        String::new()
    } else {
        format!(
            r#"                <div class="card">
                    <h3>Related Services</h3>
                    <ul>
{related_links}                    </ul>
                </div>
"#,
        )
    };

    let body = format!(
        r#"        <section class="hero">
            <div class="wrap">
                <p class="crumbs"><a href="/services/">Services</a> / {category}</p>
                <h1>{icon} {name} Lawyer in New York</h1>
                <p class="lede">{meta_description}</p>
            </div>
        </section>
        <section class="content">
            <div class="wrap columns">
            <div class="prose">
                <h2>Understanding {name} Cases</h2>
                <p>{description}</p>
                <h3>How We Help With {short} Cases</h3>
                <p>Our experienced truck accident attorneys understand the complexities of {name_lower} cases. We investigate thoroughly, identify all liable parties, and fight for maximum compensation.</p>
                <ul>
{help_items}                </ul>
                <h3>Compensation for {short} Victims</h3>
                <p>Victims of {name_lower} may be entitled to significant compensation, including:</p>
                <ul>
{compensation}                </ul>
                <h2>{short} Lawyers by Location</h2>
{location_sections}            </div>
            <div>
                <div class="card">
                    <h3>Free Case Review</h3>
{form}                </div>
{related_card}            </div>
            </div>
        </section>
"#,
        category = service.category.display_name(),
        icon = esc(&service.icon),
        name = name,
        meta_description = esc(&service.meta_description),
        description = esc(&service.description),
        short = short,
        name_lower = name_lower,
        help_items = check_bullets(&SERVICE_HELP_ITEMS),
        compensation = bullet_items(&COMPENSATION_ITEMS),
        location_sections = location_sections,
        form = lead_form_html(Some(service), None, site),
        related_card = related_card,
    );

    let meta = page_meta(Some(service), None, site);
    let path = format!("/services/{}/", service.slug);
    layout(site, catalog, &meta, &path, &body, is_preview)
}

/// Location page: neighborhood prose, traffic highlights, featured
/// services in that neighborhood, and nearby same-borough locations.
pub fn render_location_page(
    site: &SiteConfig,
    catalog: &Catalog,
    location: &Location,
    is_preview: bool,
) -> String {
    let name = esc(&location.name);

    let featured: String = catalog
        .services()
        .iter()
        .take(FEATURED_SERVICES_LOCATION_PAGE_CAP)
        .map(|s| service_tile(s, &format!("/{}/{}/", s.slug, location.slug)))
        .collect();

    let nearby = catalog.nearby_locations(location, NEARBY_LOCATIONS_LOCATION_PAGE_CAP);
    let nearby_section = if nearby.is_empty() {
        String::new()
    } else {
        let tiles: String = nearby
            .iter()
            .map(|l| location_tile(l, &format!("/locations/{}/", l.slug)))
            .collect();
        format!(
            r#"                <h3>Nearby {borough} Neighborhoods We Serve</h3>
                <div class="grid">
{tiles}                </div>
"#,
            borough = location.borough,
            tiles = tiles,
        )
    };

    let why_us = check_items(&[
        format!("Local knowledge of {} roads and intersections", name),
        format!("Experience with {} courts and procedures", location.borough),
        "Relationships with local medical providers".to_string(),
        "Quick response for accident scene investigation".to_string(),
    ]);

    let body = format!(
        r#"        <section class="hero">
            <div class="wrap">
                <p class="crumbs"><a href="/locations/">Locations</a> / {borough}</p>
                <h1>{name} Truck Accident Lawyer</h1>
                <p class="lede">Experienced truck accident attorneys serving the {name} community. We fight for fair compensation for accident victims in {borough}.</p>
            </div>
        </section>
        <section class="content">
            <div class="wrap columns">
            <div class="prose">
                <h2>Truck Accidents in {name}</h2>
                <p>{description}</p>
                <h3>Local Traffic Considerations</h3>
                <ul>
{highlights}                </ul>
                <h3>Why Choose Us for Your {name} Truck Accident Case</h3>
                <p>Our attorneys understand the unique traffic patterns and accident-prone areas in {name}. We have successfully represented many {borough} residents in truck accident claims.</p>
                <ul>
{why_us}                </ul>
                <h3>Our Services in {name}</h3>
                <div class="grid">
{featured}                </div>
                <p><a href="/services/">View All {service_count} Services →</a></p>
{nearby_section}            </div>
            <div>
                <div class="card">
                    <h3>Free Case Review</h3>
                    <p>Injured in a truck accident in {name}? Contact us for a free consultation.</p>
{form}                </div>
            </div>
            </div>
        </section>
"#,
        borough = location.borough,
        name = name,
        description = esc(&location.description),
        highlights = bullet_list(&location.highlights),
        why_us = why_us,
        featured = featured,
        service_count = catalog.services().len(),
        nearby_section = nearby_section,
        form = lead_form_html(None, Some(location), site),
    );

    let meta = page_meta(None, Some(location), site);
    let path = format!("/locations/{}/", location.slug);
    layout(site, catalog, &meta, &path, &body, is_preview)
}

/// Cross-product landing page for one (service, location) pair.
pub fn render_service_location_page(
    site: &SiteConfig,
    catalog: &Catalog,
    service: &Service,
    location: &Location,
    is_preview: bool,
) -> String {
    let service_name = esc(&service.name);
    let service_lower = esc(&service.name.to_lowercase());
    let short = esc(&service.short_name);
    let short_lower = esc(&service.short_name.to_lowercase());
    let location_name = esc(&location.name);

    let related_links: String = catalog
        .related_services(service, RELATED_SERVICES_PAIR_PAGE_CAP)
        .iter()
        .map(|related| {
            format!(
                "                        <li><a href=\"/{}/{}/\">{} {}</a></li>\n",
                related.slug,
                location.slug,
                esc(&related.icon),
                esc(&related.short_name)
            )
        })
        .collect();
    let related_card = if related_links.is_empty() {
        String::new()
    } else {
        format!(
            r#"                <div class="card">
                    <h3>Related Services in {location_name}</h3>
                    <ul>
{related_links}                    </ul>
                </div>
"#,
        )
    };

    let nearby_links: String = catalog
        .nearby_locations(location, NEARBY_LOCATIONS_SERVICE_PAGE_CAP)
        .iter()
        .map(|nearby| {
            format!(
                "                        <li><a href=\"/{}/{}/\">{} →</a></li>\n",
                service.slug,
                nearby.slug,
                esc(&nearby.name)
            )
        })
        .collect();
    let nearby_card = if nearby_links.is_empty() {
        String::new()
    } else {
        format!(
            r#"                <div class="card">
                    <h3>{short} in Nearby Areas</h3>
                    <ul>
{nearby_links}                    </ul>
                </div>
"#,
        )
    };

    let why_us = check_items(&[
        format!("Deep knowledge of {} roads and intersections", location_name),
        format!("Experience with {} courts", location.borough),
        format!("Quick response for {} accident investigations", location_name),
        "Relationships with local medical providers".to_string(),
        format!("Proven track record in {} cases", short_lower),
    ]);

    let body = format!(
        r#"        <section class="hero">
            <div class="wrap">
                <p class="crumbs"><a href="/services/">Services</a> / <a href="/services/{service_slug}/">{short}</a> / <a href="/locations/{location_slug}/">{location_name}</a></p>
                <span class="badge">{borough}</span>
                <h1>{icon} {service_name} Lawyer in <em>{location_name}</em></h1>
                <p class="lede">Experienced {service_lower} attorneys serving the {location_name} community. We fight for maximum compensation for truck accident victims in {borough}.</p>
                <a class="cta-call" href="tel:{phone}">Call {phone_formatted}</a>
{assurances}            </div>
        </section>
        <section class="content">
            <div class="wrap columns">
            <div class="prose">
                <h2>{service_name} in {location_name}</h2>
                <p>{service_description}</p>
                <p>{location_description}</p>
                <h3>Why {location_name} Residents Choose Us</h3>
                <p>Our attorneys have extensive experience handling {service_lower} cases in {location_name} and throughout {borough}. We understand the local traffic patterns, know the courts, and have the resources to take on large trucking companies.</p>
                <ul>
{why_us}                </ul>
                <h3>Traffic Hazards in {location_name}</h3>
                <ul>
{highlights}                </ul>
                <h3>Compensation for {short} Victims in {location_name}</h3>
                <p>If you've been injured in a {service_lower} in {location_name}, you may be entitled to:</p>
                <ul>
{compensation}                </ul>
                <div class="notice">
                    <h3>⚠️ Time is Critical</h3>
                    <p>Evidence in truck accident cases can disappear quickly. Black box data may be overwritten, and trucking companies often begin their own investigations immediately. Contact us today to protect your rights.</p>
                </div>
            </div>
            <div>
                <div class="card">
                    <h3>Free Case Review</h3>
                    <p>Get your {location_name} truck accident case evaluated by an experienced attorney.</p>
{form}                </div>
                <div class="card dark">
                    <h3>Need Immediate Help?</h3>
                    <p><a class="cta-call" href="tel:{phone}">{phone_formatted}</a></p>
                    <p>Available 24/7 for emergencies</p>
                </div>
{related_card}{nearby_card}            </div>
            </div>
        </section>
{cta}"#,
        service_slug = service.slug,
        location_slug = location.slug,
        short = short,
        location_name = location_name,
        borough = location.borough,
        icon = esc(&service.icon),
        service_name = service_name,
        service_lower = service_lower,
        phone = site.phone,
        phone_formatted = site.phone_formatted,
        assurances = ASSURANCES,
        service_description = esc(&service.description),
        location_description = esc(&location.description),
        why_us = why_us,
        highlights = bullet_list(&location.highlights),
        compensation = bullet_items(&COMPENSATION_ITEMS),
        form = lead_form_html(Some(service), Some(location), site),
        related_card = related_card,
        nearby_card = nearby_card,
        cta = cta_band(
            site,
            &format!("Injured in a {} Accident in {}?", short, location_name),
            &format!(
                "Don't wait. Contact our experienced {} truck accident attorneys today.",
                location.borough
            ),
        ),
    );

    let meta = page_meta(Some(service), Some(location), site);
    let path = format!("/{}/{}/", service.slug, location.slug);
    layout(site, catalog, &meta, &path, &body, is_preview)
}

/// Not-found page: the explicit outcome for unresolvable slugs; no
/// partial content is ever rendered for them.
pub fn render_not_found(site: &SiteConfig, catalog: &Catalog, is_preview: bool) -> String {
    let body = r#"        <section class="hero">
            <div class="wrap">
                <h1>Page Not Found</h1>
                <p class="lede">The page you're looking for doesn't exist. It may have been moved, or the address was mistyped.</p>
                <p><a class="cta-call" href="/">Back to Home</a></p>
            </div>
        </section>
        <section class="content">
            <div class="wrap prose">
                <p>Looking for something specific? Browse our <a href="/services/">services</a> or <a href="/locations/">locations</a>.</p>
            </div>
        </section>
"#
    .to_string();

    let meta = page_meta(None, None, site);
    layout(site, catalog, &meta, "/404.html", &body, is_preview)
}

#[cfg(test)]
mod tests {
    use super::*;
    use landing_kit_core::parse_site_toml_str;

    const FIXTURE: &str = r##"
[site]
name = "New York Trucking Accident Attorney"
phone = "8005551234"
email = "contact@nytruckingattorney.com"
address = "123 Legal Plaza, New York, NY 10001"
tagline = "Fighting for Truck Accident Victims Across New York"
description = "Experienced New York trucking accident attorneys."

[[service]]
slug = "jackknife-accidents"
name = "Jackknife Accidents"
short_name = "Jackknife"
icon = "🚛"
category = "accident-type"
description = "A jackknife accident happens when a trailer swings out of line with its cab."
meta_description = "Jackknife accident lawyers serving New York."

[[service]]
slug = "rollover-accidents"
name = "Rollover Accidents"
short_name = "Rollover"
icon = "💥"
category = "accident-type"
description = "Rollover crashes crush everything in the trailer's path."
meta_description = "Rollover accident lawyers serving New York."

[[location]]
slug = "park-slope"
name = "Park Slope"
borough = "Brooklyn"
description = "Park Slope sees heavy delivery traffic year-round."
meta_description = "Park Slope truck accident lawyers."
highlights = ["Fourth Avenue corridor", "Prospect Expressway ramps"]

[[location]]
slug = "williamsburg"
name = "Williamsburg"
borough = "Brooklyn"
description = "Williamsburg's bridge approaches funnel constant truck traffic."
meta_description = "Williamsburg truck accident lawyers."
highlights = ["BQE on-ramps"]
"##;

    #[test]
    fn test_service_location_page_carries_exact_title() {
        let site = parse_site_toml_str(FIXTURE).unwrap();
        let catalog = Catalog::from_site(&site);
        let service = catalog.service("jackknife-accidents").unwrap();
        let location = catalog.location("park-slope").unwrap();

        let html =
            render_service_location_page(&site.config, &catalog, service, location, false);
        assert!(html.contains(
            "<title>Jackknife Accidents Lawyer in Park Slope, Brooklyn | New York Trucking Accident Attorney</title>"
        ));
        assert!(html.contains(r#"<link rel="canonical" href="/jackknife-accidents/park-slope/">"#));
        // Location highlights appear as hazards.
        assert!(html.contains("Fourth Avenue corridor"));
        // Nearby card links keep the service fixed and vary the location.
        assert!(html.contains(r#"href="/jackknife-accidents/williamsburg/""#));
        // Related card links keep the location fixed and vary the service.
        assert!(html.contains(r#"href="/rollover-accidents/park-slope/""#));
    }

    #[test]
    fn test_location_page_links_featured_services_to_pair_pages() {
        let site = parse_site_toml_str(FIXTURE).unwrap();
        let catalog = Catalog::from_site(&site);
        let location = catalog.location("williamsburg").unwrap();

        let html = render_location_page(&site.config, &catalog, location, false);
        assert!(html.contains("<title>Williamsburg Truck Accident Lawyer | New York Trucking Accident Attorney</title>"));
        assert!(html.contains(r#"href="/jackknife-accidents/williamsburg/""#));
        assert!(html.contains("Nearby Brooklyn Neighborhoods We Serve"));
    }

    #[test]
    fn test_service_page_lists_every_location_grouped() {
        let site = parse_site_toml_str(FIXTURE).unwrap();
        let catalog = Catalog::from_site(&site);
        let service = catalog.service("rollover-accidents").unwrap();

        let html = render_service_page(&site.config, &catalog, service, false);
        assert!(html.contains("Rollover Accidents Lawyer in New York"));
        assert!(html.contains(r#"href="/rollover-accidents/park-slope/""#));
        assert!(html.contains(r#"href="/rollover-accidents/williamsburg/""#));
    }

    #[test]
    fn test_home_and_indexes_render_with_forms() {
        let site = parse_site_toml_str(FIXTURE).unwrap();
        let catalog = Catalog::from_site(&site);

        let home = render_home(&site.config, &catalog, false);
        assert!(home.contains("data-lead-form"));
        assert!(home.contains("<title>New York Trucking Accident Attorney</title>"));

        let services = render_services_index(&site.config, &catalog, false);
        assert!(services.contains("Accident Types"));

        let locations = render_locations_index(&site.config, &catalog, false);
        assert!(locations.contains(r#"id="brooklyn""#));
    }

    #[test]
    fn test_related_service_caps_differ_by_surface() {
        // Six same-category services: enough to overflow both caps.
        let extra: String = ["underride-accidents", "rear-end-collisions", "blind-spot-accidents", "tire-blowouts"]
            .iter()
            .map(|slug| {
                format!(
                    r##"
[[service]]
slug = "{slug}"
name = "{slug}"
short_name = "{slug}"
icon = "🚛"
category = "accident-type"
description = "d"
meta_description = "m"
"##
                )
            })
            .collect();
        let toml = format!("{}{}", FIXTURE, extra);
        let site = parse_site_toml_str(&toml).unwrap();
        let catalog = Catalog::from_site(&site);
        let service = catalog.service("jackknife-accidents").unwrap();
        let location = catalog.location("park-slope").unwrap();

        // Service page related card lists three; the fourth and fifth
        // candidates appear only once, via the footer column.
        let html = render_service_page(&site.config, &catalog, service, false);
        assert_eq!(html.matches(r#"href="/services/rear-end-collisions/""#).count(), 2);
        assert_eq!(html.matches(r#"href="/services/blind-spot-accidents/""#).count(), 1);
        assert_eq!(html.matches(r#"href="/services/tire-blowouts/""#).count(), 1);

        // Pair page related card lists four, linked within the same location.
        let html =
            render_service_location_page(&site.config, &catalog, service, location, false);
        assert!(html.contains(r#"href="/rear-end-collisions/park-slope/""#));
        assert!(html.contains(r#"href="/blind-spot-accidents/park-slope/""#));
        assert!(!html.contains(r#"href="/tire-blowouts/park-slope/""#));
    }

    #[test]
    fn test_preview_mode_adds_reload_hook() {
        let site = parse_site_toml_str(FIXTURE).unwrap();
        let catalog = Catalog::from_site(&site);
        let preview = render_home(&site.config, &catalog, true);
        assert!(preview.contains("/_reload"));
        let built = render_home(&site.config, &catalog, false);
        assert!(!built.contains("/_reload"));
    }

    #[test]
    fn test_not_found_uses_sentinel_title() {
        let site = parse_site_toml_str(FIXTURE).unwrap();
        let catalog = Catalog::from_site(&site);
        let html = render_not_found(&site.config, &catalog, false);
        assert!(html.contains("<title>Page Not Found | New York Trucking Accident Attorney</title>"));
    }
}
