use crate::types::*;
use std::collections::HashMap;

/// Read-only index layer over the two catalogs.
///
/// Borrows the parsed `Site` data; all indices are derived at
/// construction and the catalogs are never mutated afterwards.
pub struct Catalog<'a> {
    services: &'a [Service],
    locations: &'a [Location],
    service_by_slug: HashMap<&'a str, &'a Service>,
    location_by_slug: HashMap<&'a str, &'a Location>,
}

impl<'a> Catalog<'a> {
    pub fn new(services: &'a [Service], locations: &'a [Location]) -> Self {
        let service_by_slug = services.iter().map(|s| (s.slug.as_str(), s)).collect();
        let location_by_slug = locations.iter().map(|l| (l.slug.as_str(), l)).collect();
        Catalog {
            services,
            locations,
            service_by_slug,
            location_by_slug,
        }
    }

    pub fn from_site(site: &'a Site) -> Self {
        Catalog::new(&site.services, &site.locations)
    }

    pub fn services(&self) -> &'a [Service] {
        self.services
    }

    pub fn locations(&self) -> &'a [Location] {
        self.locations
    }

    /// Look up a service by slug. Unknown slugs are an explicit absence,
    /// never a default entity.
    pub fn service(&self, slug: &str) -> Option<&'a Service> {
        self.service_by_slug.get(slug).copied()
    }

    /// Look up a location by slug.
    pub fn location(&self, slug: &str) -> Option<&'a Location> {
        self.location_by_slug.get(slug).copied()
    }

    /// Services grouped by category, preserving catalog order within each
    /// group. Categories with no services are omitted.
    pub fn services_by_category(&self) -> Vec<(ServiceCategory, Vec<&'a Service>)> {
        ServiceCategory::ALL
            .iter()
            .filter_map(|&category| {
                let group: Vec<&Service> = self
                    .services
                    .iter()
                    .filter(|s| s.category == category)
                    .collect();
                if group.is_empty() {
                    None
                } else {
                    Some((category, group))
                }
            })
            .collect()
    }

    /// Locations grouped by borough, preserving catalog order within each
    /// group. Boroughs with no locations are omitted.
    pub fn locations_by_borough(&self) -> Vec<(Borough, Vec<&'a Location>)> {
        Borough::ALL
            .iter()
            .filter_map(|&borough| {
                let group: Vec<&Location> = self
                    .locations
                    .iter()
                    .filter(|l| l.borough == borough)
                    .collect();
                if group.is_empty() {
                    None
                } else {
                    Some((borough, group))
                }
            })
            .collect()
    }

    /// The five boroughs in stable order.
    pub fn boroughs(&self) -> &'static [Borough] {
        &Borough::ALL
    }

    /// Every (service, location) pair: outer loop over services in
    /// catalog order, inner loop over locations in catalog order.
    ///
    /// This ordering determines generated-page enumeration order and must
    /// stay stable across calls.
    pub fn pairs(&self) -> impl Iterator<Item = (&'a Service, &'a Location)> + '_ {
        self.services
            .iter()
            .flat_map(move |service| self.locations.iter().map(move |location| (service, location)))
    }

    /// Services sharing `service`'s category, excluding itself, first
    /// `limit` in catalog order.
    pub fn related_services(&self, service: &Service, limit: usize) -> Vec<&'a Service> {
        self.services
            .iter()
            .filter(|s| s.category == service.category && s.slug != service.slug)
            .take(limit)
            .collect()
    }

    /// Locations sharing `location`'s borough, excluding itself, first
    /// `limit` in catalog order.
    pub fn nearby_locations(&self, location: &Location, limit: usize) -> Vec<&'a Location> {
        self.locations
            .iter()
            .filter(|l| l.borough == location.borough && l.slug != location.slug)
            .take(limit)
            .collect()
    }
}
