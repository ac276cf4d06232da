// src/domain/filter.rs
use crate::domain::criteria::FilterCriteria;
use crate::domain::listing::Listing;

/// Derives the visible subset of a fetched listing collection from the
/// currently applied criteria.
///
/// The view is a pure function of the two most recent `set_listings` /
/// `set_criteria` calls: nothing is cached, `filtered()` recomputes on
/// every read, so there is no stale state to invalidate. Constraints are
/// conjunctive and order-independent; source order is always preserved.
#[derive(Debug, Default)]
pub struct ListingFilter {
    listings: Vec<Listing>,
    criteria: Option<FilterCriteria>,
}

impl ListingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the source collection. Any sequence is accepted, including
    /// an empty one.
    pub fn set_listings(&mut self, listings: Vec<Listing>) {
        self.listings = listings;
    }

    /// Replace the applied criteria. `None` means no filtering: the view
    /// equals the source collection in content and order.
    pub fn set_criteria(&mut self, criteria: Option<FilterCriteria>) {
        self.criteria = criteria;
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// The current derived view, in source order.
    pub fn filtered(&self) -> Vec<&Listing> {
        match &self.criteria {
            None => self.listings.iter().collect(),
            Some(criteria) => self
                .listings
                .iter()
                .filter(|listing| matches(listing, criteria))
                .collect(),
        }
    }
}

/// A listing passes iff every active constraint holds. A listing missing
/// the field an active constraint reads fails that constraint; it is
/// excluded, never an error.
fn matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    if !criteria.regions.is_empty() {
        match listing.region_id() {
            Some(region) if criteria.regions.contains(&region) => {}
            _ => return false,
        }
    }

    if let Some(min) = criteria.price_min {
        match listing.price {
            Some(price) if price >= min => {}
            _ => return false,
        }
    }
    if let Some(max) = criteria.price_max {
        match listing.price {
            Some(price) if price <= max => {}
            _ => return false,
        }
    }

    if let Some(min) = criteria.area_min {
        match listing.area {
            Some(area) if area >= min => {}
            _ => return false,
        }
    }
    if let Some(max) = criteria.area_max {
        match listing.area {
            Some(area) if area <= max => {}
            _ => return false,
        }
    }

    if let Some(bedrooms) = criteria.bedrooms {
        // Exact match, not a range.
        match listing.bedrooms {
            Some(n) if n == bedrooms => {}
            _ => return false,
        }
    }

    true
}

/// Listings sharing the given listing's region, excluding the listing
/// itself, in source order. Feeds the details-page carousel. A listing
/// with no resolvable region has no similar listings.
pub fn similar_listings<'a>(listings: &'a [Listing], current: &Listing) -> Vec<&'a Listing> {
    let Some(region) = current.region_id() else {
        return Vec::new();
    };

    listings
        .iter()
        .filter(|other| other.id != current.id && other.region_id() == Some(region))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::{City, Region};

    fn listing(id: i64, region: Option<i64>, price: i64, area: f64, bedrooms: i64) -> Listing {
        Listing {
            id,
            address: Some(format!("Address {id}")),
            zip_code: Some("0100".to_string()),
            price: Some(price),
            area: Some(area),
            bedrooms: Some(bedrooms),
            image: None,
            description: None,
            is_rental: Some(0),
            city: region.map(|region_id| City {
                id: 10 + region_id,
                name: Some("City".to_string()),
                region_id: None,
                region: Some(Region {
                    id: region_id,
                    name: Some("Region".to_string()),
                }),
            }),
            agent: None,
        }
    }

    fn ids(view: &[&Listing]) -> Vec<i64> {
        view.iter().map(|l| l.id).collect()
    }

    fn sample() -> Vec<Listing> {
        vec![
            listing(1, Some(1), 80_000, 45.0, 1),
            listing(2, Some(2), 120_000, 70.0, 2),
            listing(3, Some(2), 200_000, 95.0, 2),
            listing(4, Some(3), 260_000, 120.0, 3),
        ]
    }

    #[test]
    fn no_criteria_returns_source_in_order() {
        let mut engine = ListingFilter::new();
        engine.set_listings(sample());
        engine.set_criteria(None);
        assert_eq!(ids(&engine.filtered()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn filtered_is_idempotent() {
        let mut engine = ListingFilter::new();
        engine.set_listings(sample());
        engine.set_criteria(Some(FilterCriteria {
            price_min: Some(100_000),
            ..Default::default()
        }));

        let first = ids(&engine.filtered());
        let second = ids(&engine.filtered());
        assert_eq!(first, second);
    }

    #[test]
    fn region_membership_selects_only_members() {
        let mut engine = ListingFilter::new();
        engine.set_listings(sample());
        engine.set_criteria(Some(FilterCriteria {
            regions: vec![2],
            ..Default::default()
        }));
        assert_eq!(ids(&engine.filtered()), vec![2, 3]);
    }

    #[test]
    fn unresolvable_region_fails_an_active_region_constraint() {
        let mut listings = sample();
        listings.push(listing(5, None, 90_000, 50.0, 2));

        let mut engine = ListingFilter::new();
        engine.set_listings(listings);
        engine.set_criteria(Some(FilterCriteria {
            regions: vec![1, 2, 3],
            ..Default::default()
        }));
        assert!(!ids(&engine.filtered()).contains(&5));

        // ...but passes once the region constraint is inactive.
        engine.set_criteria(Some(FilterCriteria {
            price_min: Some(85_000),
            ..Default::default()
        }));
        assert!(ids(&engine.filtered()).contains(&5));
    }

    #[test]
    fn exact_bedroom_match_keeps_relative_order() {
        let listings = vec![
            listing(1, Some(1), 80_000, 45.0, 1),
            listing(2, Some(1), 90_000, 50.0, 2),
            listing(3, Some(1), 95_000, 55.0, 2),
            listing(4, Some(1), 99_000, 60.0, 3),
        ];
        let mut engine = ListingFilter::new();
        engine.set_listings(listings);
        engine.set_criteria(Some(FilterCriteria {
            bedrooms: Some(2),
            ..Default::default()
        }));
        assert_eq!(ids(&engine.filtered()), vec![2, 3]);
    }

    #[test]
    fn adding_a_constraint_never_grows_the_view() {
        let mut engine = ListingFilter::new();
        engine.set_listings(sample());

        engine.set_criteria(Some(FilterCriteria {
            regions: vec![2, 3],
            ..Default::default()
        }));
        let wide = engine.filtered().len();

        engine.set_criteria(Some(FilterCriteria {
            regions: vec![2, 3],
            bedrooms: Some(2),
            ..Default::default()
        }));
        let narrow = engine.filtered().len();

        assert!(narrow <= wide);
    }

    #[test]
    fn conjunction_of_price_and_area_bounds() {
        let mut engine = ListingFilter::new();
        engine.set_listings(sample());
        engine.set_criteria(Some(FilterCriteria {
            price_min: Some(100_000),
            price_max: Some(250_000),
            area_min: Some(60.0),
            area_max: Some(100.0),
            ..Default::default()
        }));
        assert_eq!(ids(&engine.filtered()), vec![2, 3]);
    }

    #[test]
    fn disjoint_price_bounds_yield_empty_view() {
        let mut engine = ListingFilter::new();
        engine.set_listings(sample());
        engine.set_criteria(Some(FilterCriteria {
            price_min: Some(300_000),
            price_max: Some(100_000),
            ..Default::default()
        }));
        assert!(engine.filtered().is_empty());
    }

    #[test]
    fn missing_price_fails_active_price_constraint() {
        let mut no_price = listing(9, Some(1), 0, 40.0, 1);
        no_price.price = None;

        let mut engine = ListingFilter::new();
        engine.set_listings(vec![no_price]);
        engine.set_criteria(Some(FilterCriteria {
            price_max: Some(1_000_000),
            ..Default::default()
        }));
        assert!(engine.filtered().is_empty());

        engine.set_criteria(None);
        assert_eq!(engine.filtered().len(), 1);
    }

    #[test]
    fn empty_source_is_empty_regardless_of_criteria() {
        let mut engine = ListingFilter::new();
        engine.set_listings(Vec::new());
        engine.set_criteria(Some(FilterCriteria {
            regions: vec![1],
            price_min: Some(1),
            ..Default::default()
        }));
        assert!(engine.filtered().is_empty());
    }

    #[test]
    fn replacing_listings_replaces_the_view() {
        let mut engine = ListingFilter::new();
        engine.set_listings(sample());
        engine.set_criteria(None);
        assert_eq!(engine.filtered().len(), 4);

        engine.set_listings(vec![listing(7, Some(1), 50_000, 30.0, 1)]);
        assert_eq!(ids(&engine.filtered()), vec![7]);
    }

    #[test]
    fn similar_listings_share_region_and_exclude_self() {
        let listings = sample();
        let current = &listings[1]; // region 2
        assert_eq!(ids(&similar_listings(&listings, current)), vec![3]);
    }

    #[test]
    fn similar_listings_empty_without_region() {
        let listings = sample();
        let orphan = listing(9, None, 10_000, 20.0, 1);
        assert!(similar_listings(&listings, &orphan).is_empty());
    }
}
