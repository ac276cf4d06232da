// src/domain/criteria.rs
use crate::errors::ServerError;

/// The user's applied filter selection. Built whole on every "apply" and
/// handed to the filter engine as one value; never mutated field by field.
///
/// An empty `regions` set means no region restriction. `None` on the other
/// fields means that constraint is inactive (distinct from zero).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub regions: Vec<i64>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub area_min: Option<f64>,
    pub area_max: Option<f64>,
    pub bedrooms: Option<i64>,
}

impl FilterCriteria {
    /// True if at least one constraint would actually apply.
    pub fn has_active(&self) -> bool {
        !self.regions.is_empty()
            || self.price_min.is_some()
            || self.price_max.is_some()
            || self.area_min.is_some()
            || self.area_max.is_some()
            || self.bedrooms.is_some()
    }

    /// Parse the applied filters out of the listings-page query string.
    ///
    /// This is the input-surface side of filtering: values that don't parse
    /// as numbers are treated as unset (an empty form field submits as ""),
    /// but a minimum above its maximum is rejected here so the engine never
    /// sees it.
    ///
    /// Returns `None` when no constraint is present at all, meaning
    /// "no criteria applied".
    pub fn from_query(query: &str) -> Result<Option<Self>, ServerError> {
        let mut criteria = FilterCriteria::default();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "regions" => {
                    if let Ok(id) = value.trim().parse::<i64>() {
                        if !criteria.regions.contains(&id) {
                            criteria.regions.push(id);
                        }
                    }
                }
                "price_min" => criteria.price_min = value.trim().parse().ok(),
                "price_max" => criteria.price_max = value.trim().parse().ok(),
                "area_min" => criteria.area_min = value.trim().parse().ok(),
                "area_max" => criteria.area_max = value.trim().parse().ok(),
                "bedrooms" => criteria.bedrooms = value.trim().parse().ok(),
                _ => {}
            }
        }

        if let (Some(min), Some(max)) = (criteria.price_min, criteria.price_max) {
            if min > max {
                return Err(ServerError::BadRequest(
                    "price minimum cannot exceed maximum".into(),
                ));
            }
        }
        if let (Some(min), Some(max)) = (criteria.area_min, criteria.area_max) {
            if min > max {
                return Err(ServerError::BadRequest(
                    "area minimum cannot exceed maximum".into(),
                ));
            }
        }

        if criteria.has_active() {
            Ok(Some(criteria))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_means_no_criteria() {
        assert_eq!(FilterCriteria::from_query("").unwrap(), None);
    }

    #[test]
    fn blank_fields_are_unset_not_zero() {
        let parsed = FilterCriteria::from_query("price_min=&price_max=&bedrooms=").unwrap();
        assert_eq!(parsed, None);
    }

    #[test]
    fn repeated_region_params_collect_into_set() {
        let criteria = FilterCriteria::from_query("regions=2&regions=5&regions=2")
            .unwrap()
            .unwrap();
        assert_eq!(criteria.regions, vec![2, 5]);
    }

    #[test]
    fn bounds_parse_alongside_regions() {
        let criteria = FilterCriteria::from_query("regions=1&price_min=50000&price_max=150000")
            .unwrap()
            .unwrap();
        assert_eq!(criteria.price_min, Some(50_000));
        assert_eq!(criteria.price_max, Some(150_000));
        assert_eq!(criteria.bedrooms, None);
    }

    #[test]
    fn inverted_price_bounds_are_rejected() {
        let res = FilterCriteria::from_query("price_min=300000&price_max=100000");
        assert!(matches!(res, Err(ServerError::BadRequest(_))));
    }

    #[test]
    fn inverted_area_bounds_are_rejected() {
        let res = FilterCriteria::from_query("area_min=90.5&area_max=40");
        assert!(matches!(res, Err(ServerError::BadRequest(_))));
    }

    #[test]
    fn equal_bounds_are_allowed() {
        let criteria = FilterCriteria::from_query("price_min=100000&price_max=100000")
            .unwrap()
            .unwrap();
        assert_eq!(criteria.price_min, criteria.price_max);
    }
}
