use anyhow::{Context, Result};
use landing_kit_core::parse_site_toml_str;
use std::fs;
use std::path::PathBuf;

/// Starter site.toml: the firm record plus a working catalog covering
/// every category and borough, ready to edit.
const SITE_TOML_TEMPLATE: &str = r##"# landing-kit site configuration
#
# Every page of the generated site is derived from this file: one page
# per service, one per location, and one per (service, location) pair.

[site]
name = "New York Trucking Accident Attorney"
phone = "8005551234"
email = "contact@nytruckingattorney.com"
address = "123 Legal Plaza, New York, NY 10001"
tagline = "Fighting for Truck Accident Victims Across New York"
description = "Experienced New York trucking accident attorneys fighting for maximum compensation. Free consultation. No fee unless we win."
# Uncomment to emit absolute sitemap URLs:
# base_url = "https://www.example.com"

# Where submitted leads are POSTed as JSON. Without an endpoint the
# preview server accepts leads locally and the static form falls back to
# its built-in acknowledgement.
[intake]
# endpoint = "https://crm.example.com/leads"

# ---------------------------------------------------------------------
# Services. Categories: accident-type, injury-type, legal-process,
# violation, special-case.
# ---------------------------------------------------------------------

[[service]]
slug = "jackknife-accidents"
name = "Jackknife Accidents"
short_name = "Jackknife"
icon = "🚛"
category = "accident-type"
description = "A jackknife accident happens when a trailer swings out of line with its cab, sweeping across multiple lanes. These crashes are usually tied to braking failures, speed, or poor load distribution, and fault often reaches beyond the driver."
meta_description = "New York jackknife truck accident lawyers. We investigate braking, loading, and maintenance failures behind jackknife crashes."

[[service]]
slug = "rollover-accidents"
name = "Rollover Accidents"
short_name = "Rollover"
icon = "💥"
category = "accident-type"
description = "Rollover crashes crush everything in the trailer's path and frequently involve shifted cargo, tire failures, or excessive speed on ramps. Carrier loading practices are a common root cause."
meta_description = "New York rollover truck accident attorneys holding carriers accountable for cargo and loading failures."

[[service]]
slug = "underride-accidents"
name = "Underride Accidents"
short_name = "Underride"
icon = "🚗"
category = "accident-type"
description = "Underride collisions occur when a passenger car slides beneath a trailer, often because of missing or defective underride guards, poor conspicuity tape, or sudden lane changes. They are among the deadliest truck crashes."
meta_description = "Underride truck accident lawyers in New York pursuing guard-defect and visibility claims."

[[service]]
slug = "rear-end-collisions"
name = "Rear-End Collisions"
short_name = "Rear-End"
icon = "🚨"
category = "accident-type"
description = "A fully loaded tractor-trailer needs nearly twice the stopping distance of a car. Rear-end truck collisions point to following too closely, fatigue, or brake defects, all of which leave an evidence trail."
meta_description = "New York rear-end truck collision attorneys. Stopping-distance and brake-record investigations."

[[service]]
slug = "blind-spot-accidents"
name = "Blind Spot Accidents"
short_name = "Blind Spot"
icon = "👁️"
category = "accident-type"
description = "Trucks carry large no-zones on every side. Blind-spot crashes happen during lane changes and turns, and liability turns on mirror adjustment, training, and whether the driver checked before moving."
meta_description = "Blind spot truck accident lawyers serving all five boroughs of New York."

[[service]]
slug = "traumatic-brain-injuries"
name = "Traumatic Brain Injuries"
short_name = "Brain Injury"
icon = "🧠"
category = "injury-type"
description = "Brain injuries from truck crashes can mean a lifetime of cognitive, emotional, and financial consequences. Valuing these cases correctly requires medical experts and life-care planning, not an insurer's quick offer."
meta_description = "New York truck accident brain injury attorneys building full life-care compensation claims."

[[service]]
slug = "spinal-cord-injuries"
name = "Spinal Cord Injuries"
short_name = "Spinal Injury"
icon = "🦴"
category = "injury-type"
description = "Spinal cord damage from a truck collision can cause partial or complete paralysis. We work with specialists to document future surgeries, equipment, and home-care needs before negotiating."
meta_description = "Spinal cord injury lawyers for New York truck accident victims."

[[service]]
slug = "insurance-claims"
name = "Trucking Insurance Claims"
short_name = "Insurance Claims"
icon = "📋"
category = "legal-process"
description = "Trucking companies carry layered commercial policies and their insurers begin building a defense the day of the crash. We handle every notice, demand, and negotiation so nothing is signed away early."
meta_description = "New York attorneys managing trucking insurance claims and negotiations end to end."

[[service]]
slug = "accident-investigations"
name = "Truck Accident Investigations"
short_name = "Investigations"
icon = "🔍"
category = "legal-process"
description = "Black box data, driver logs, dispatch records, and maintenance files disappear quickly. Our investigation team sends preservation demands immediately and reconstructs the crash with experts."
meta_description = "Rapid-response truck accident investigation lawyers in New York."

[[service]]
slug = "hours-of-service-violations"
name = "Hours of Service Violations"
short_name = "Driver Fatigue"
icon = "⏰"
category = "violation"
description = "Federal rules cap how long a trucker can drive without rest. Electronic logging devices tell the real story, and a violation turns a negligence case into one with punitive exposure."
meta_description = "New York lawyers pursuing hours-of-service and driver fatigue violations after truck crashes."

[[service]]
slug = "overloaded-trucks"
name = "Overloaded Truck Accidents"
short_name = "Overloaded Trucks"
icon = "⚖️"
category = "violation"
description = "Overweight and improperly secured loads change how a truck brakes and turns. Weigh-station records and shipping documents often prove the violation."
meta_description = "Overloaded truck accident attorneys in New York tracing cargo weight violations."

[[service]]
slug = "wrongful-death"
name = "Wrongful Death"
short_name = "Wrongful Death"
icon = "🕊️"
category = "special-case"
description = "When a truck crash takes a life, surviving family members can pursue a wrongful death claim for lost support, services, and the suffering endured. We handle these cases with the care they demand."
meta_description = "Compassionate New York wrongful death attorneys for families of truck accident victims."

# ---------------------------------------------------------------------
# Locations. Boroughs: Manhattan, Brooklyn, Queens, Bronx, Staten Island.
# ---------------------------------------------------------------------

[[location]]
slug = "midtown"
name = "Midtown"
borough = "Manhattan"
description = "Midtown's dense delivery traffic, curbside loading, and constant pedestrian volume make it one of Manhattan's most frequent truck collision zones."
meta_description = "Midtown Manhattan truck accident lawyers. Free consultation for delivery and box truck collision victims."
highlights = ["Constant curbside delivery activity", "Heavy pedestrian and cyclist volume", "Congested crosstown corridors"]

[[location]]
slug = "lower-east-side"
name = "Lower East Side"
borough = "Manhattan"
description = "Narrow streets and bridge traffic from the Williamsburg and Manhattan bridges push large trucks through the Lower East Side at all hours."
meta_description = "Lower East Side truck accident attorneys serving bridge-corridor collision victims."
highlights = ["Williamsburg Bridge approaches", "Narrow one-way streets", "Late-night commercial deliveries"]

[[location]]
slug = "harlem"
name = "Harlem"
borough = "Manhattan"
description = "Harlem sees steady commercial traffic along 125th Street and the Harlem River Drive, with frequent conflicts between trucks and local traffic."
meta_description = "Harlem truck accident lawyers fighting for collision victims in upper Manhattan."
highlights = ["125th Street commercial corridor", "Harlem River Drive ramps", "Double-parked delivery vehicles"]

[[location]]
slug = "park-slope"
name = "Park Slope"
borough = "Brooklyn"
description = "Park Slope's brownstone streets carry surprising volumes of delivery and construction truck traffic, with the Prospect Expressway funneling trucks through the neighborhood."
meta_description = "Park Slope truck accident lawyers. Brooklyn attorneys for delivery and construction truck collisions."
highlights = ["Fourth Avenue corridor", "Prospect Expressway ramps", "School zones with heavy morning traffic"]

[[location]]
slug = "williamsburg"
name = "Williamsburg"
borough = "Brooklyn"
description = "Williamsburg's bridge approaches and the BQE funnel constant truck traffic through residential streets, and its industrial waterfront draws heavy freight."
meta_description = "Williamsburg truck accident attorneys for BQE and bridge-approach collisions."
highlights = ["BQE on-ramps and off-ramps", "Williamsburg Bridge truck routes", "Industrial waterfront freight traffic"]

[[location]]
slug = "sunset-park"
name = "Sunset Park"
borough = "Brooklyn"
description = "Home to Industry City and the Brooklyn waterfront terminals, Sunset Park has some of the heaviest tractor-trailer volume in Brooklyn."
meta_description = "Sunset Park truck accident lawyers for waterfront and Gowanus Expressway collisions."
highlights = ["Gowanus Expressway viaduct", "Industry City freight activity", "Third Avenue truck route"]

[[location]]
slug = "dumbo"
name = "Dumbo"
borough = "Brooklyn"
description = "Dumbo's cobblestone streets sit between two bridge approaches, mixing tourist foot traffic with box trucks and construction vehicles."
meta_description = "Dumbo truck accident attorneys for bridge-approach and delivery collisions."
highlights = ["Manhattan Bridge approaches", "Cobblestone streets with poor traction", "Dense tourist foot traffic"]

[[location]]
slug = "astoria"
name = "Astoria"
borough = "Queens"
description = "Astoria borders the Grand Central Parkway and the RFK Bridge, and its commercial strips along Steinway Street see constant delivery traffic."
meta_description = "Astoria truck accident lawyers serving western Queens collision victims."
highlights = ["RFK Bridge approaches", "Steinway Street deliveries", "Grand Central Parkway ramps"]

[[location]]
slug = "long-island-city"
name = "Long Island City"
borough = "Queens"
description = "Long Island City's warehouses and the Queensboro Bridge make it a freight crossroads, with trucks moving through residential blocks day and night."
meta_description = "Long Island City truck accident attorneys for freight-corridor collisions."
highlights = ["Queensboro Bridge truck routes", "Warehouse and distribution traffic", "Pulaski Bridge bottleneck"]

[[location]]
slug = "flushing"
name = "Flushing"
borough = "Queens"
description = "Downtown Flushing is one of the busiest intersections in New York, and commercial vans and box trucks compete for space on its packed streets."
meta_description = "Flushing truck accident lawyers for downtown Queens collision victims."
highlights = ["Main Street congestion", "Van Wyck Expressway ramps", "Dense commercial loading zones"]

[[location]]
slug = "hunts-point"
name = "Hunts Point"
borough = "Bronx"
description = "The Hunts Point markets generate more tractor-trailer trips than almost anywhere else in the city, surrounded by residential streets never designed for them."
meta_description = "Hunts Point truck accident attorneys. Bronx lawyers for market-traffic collisions."
highlights = ["Food distribution center traffic", "Bruckner Expressway ramps", "Overnight tractor-trailer volume"]

[[location]]
slug = "fordham"
name = "Fordham"
borough = "Bronx"
description = "Fordham Road is the Bronx's busiest shopping corridor, with constant delivery activity alongside some of the borough's heaviest bus and car traffic."
meta_description = "Fordham truck accident lawyers serving the central Bronx."
highlights = ["Fordham Road retail deliveries", "Major bus route conflicts", "Cross Bronx Expressway spillover"]

[[location]]
slug = "st-george"
name = "St. George"
borough = "Staten Island"
description = "St. George's ferry terminal and courthouse district concentrate Staten Island's commercial traffic where pedestrian volume is highest."
meta_description = "St. George truck accident attorneys serving Staten Island's north shore."
highlights = ["Ferry terminal traffic surges", "Bay Street truck route", "Steep local streets"]
"##;

/// Initialize a new site directory with a starter catalog.
///
/// Creates the directory if needed, writes a complete working site.toml
/// covering every category and borough, and an assets/ directory for
/// files copied through to the build as-is. Refuses to overwrite an
/// existing site.toml.
pub async fn run(path: PathBuf) -> Result<()> {
    println!("🏗️  Initializing site at: {}", path.display());

    let site_toml_path = path.join("site.toml");
    if site_toml_path.exists() {
        anyhow::bail!(
            "site.toml already exists at {}\nRemove it first if you want to start over",
            site_toml_path.display()
        );
    }

    fs::create_dir_all(&path).context("Failed to create site directory")?;
    fs::create_dir_all(path.join("assets")).context("Failed to create assets directory")?;

    // The template is a real config; parse it so a broken template can
    // never ship a broken scaffold.
    let site = parse_site_toml_str(SITE_TOML_TEMPLATE)
        .context("Starter template failed to parse")?;

    fs::write(&site_toml_path, SITE_TOML_TEMPLATE).context("Failed to write site.toml")?;

    println!("   ✓ Wrote site.toml");
    println!("   ✓ Created assets/");
    println!();
    println!("✅ Site initialized: {}", site.config.name);
    println!("   Services:  {}", site.services.len());
    println!("   Locations: {}", site.locations.len());
    println!(
        "   Pages:     {} (including every service × location pair)",
        3 + site.services.len() + site.locations.len() + site.services.len() * site.locations.len()
            + 1
    );
    println!();
    println!("Next steps:");
    println!("   landing-kit validate {}", path.display());
    println!("   landing-kit preview {}", path.display());

    Ok(())
}
