use crate::domain::{FilterCriteria, Region};
use maud::{html, Markup};

/// The filter bar above the listings grid. Submits as a GET back to `/`
/// so an applied filter is just a query string: shareable, reloadable,
/// cleared by linking home.
pub fn filter_panel(regions: &[Region], criteria: Option<&FilterCriteria>) -> Markup {
    let selected = |id: i64| criteria.map(|c| c.regions.contains(&id)).unwrap_or(false);
    let num = |v: Option<i64>| v.map(|n| n.to_string()).unwrap_or_default();
    let dec = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_default();

    html! {
        form class="filter-panel" method="get" action="/" {
            fieldset class="filter-group" {
                legend { "Region" }
                @for region in regions {
                    label class="filter-option" {
                        input type="checkbox" name="regions" value=(region.id)
                            checked[selected(region.id)];
                        (region.name.as_deref().unwrap_or("—"))
                    }
                }
            }

            fieldset class="filter-group" {
                legend { "Price" }
                input type="number" name="price_min" placeholder="From"
                    value=(num(criteria.and_then(|c| c.price_min)));
                input type="number" name="price_max" placeholder="To"
                    value=(num(criteria.and_then(|c| c.price_max)));
            }

            fieldset class="filter-group" {
                legend { "Area" }
                input type="number" name="area_min" placeholder="From"
                    value=(dec(criteria.and_then(|c| c.area_min)));
                input type="number" name="area_max" placeholder="To"
                    value=(dec(criteria.and_then(|c| c.area_max)));
            }

            fieldset class="filter-group" {
                legend { "Bedrooms" }
                input type="number" name="bedrooms" min="0"
                    value=(num(criteria.and_then(|c| c.bedrooms)));
            }

            div class="filter-actions" {
                button type="submit" { "Apply" }
                @if criteria.is_some() {
                    a href="/" class="clear-filters" { "Clear all" }
                }
            }
        }

        @if let Some(criteria) = criteria {
            div class="applied-filters" {
                (applied_summary(regions, criteria))
            }
        }
    }
}

fn applied_summary(regions: &[Region], criteria: &FilterCriteria) -> Markup {
    let region_names: Vec<&str> = regions
        .iter()
        .filter(|r| criteria.regions.contains(&r.id))
        .filter_map(|r| r.name.as_deref())
        .collect();

    html! {
        @if !region_names.is_empty() {
            span class="chip" { (region_names.join(", ")) }
        }
        @if criteria.price_min.is_some() || criteria.price_max.is_some() {
            span class="chip" {
                (range_chip(criteria.price_min.map(|v| v.to_string()),
                            criteria.price_max.map(|v| v.to_string()), "₾"))
            }
        }
        @if criteria.area_min.is_some() || criteria.area_max.is_some() {
            span class="chip" {
                (range_chip(criteria.area_min.map(|v| v.to_string()),
                            criteria.area_max.map(|v| v.to_string()), "m²"))
            }
        }
        @if let Some(bedrooms) = criteria.bedrooms {
            span class="chip" { (bedrooms) " bedrooms" }
        }
    }
}

fn range_chip(min: Option<String>, max: Option<String>, unit: &str) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("{min} – {max} {unit}"),
        (Some(min), None) => format!("from {min} {unit}"),
        (None, Some(max)) => format!("up to {max} {unit}"),
        (None, None) => String::new(),
    }
}
