use crate::db::seed::AMENITIES;
use crate::domain::filter::{FilterOptions, SortKey, FILTERED_MARKER};
use crate::domain::property::{ListingStatus, PropertyType};
use maud::{html, Markup};

const BED_CHOICES: [u32; 5] = [1, 2, 3, 4, 5];
const BATH_CHOICES: [f64; 5] = [1.0, 1.5, 2.0, 3.0, 4.0];

pub struct FilterBarVm<'a> {
    /// Where the GET form submits.
    pub action: &'a str,
    pub filters: &'a FilterOptions,
    /// Rendered as a select when set.
    pub sort: Option<SortKey>,
    /// Extra query pairs to carry along (e.g. the list/grid view).
    pub hidden: Vec<(String, String)>,
}

pub fn filter_bar(vm: &FilterBarVm) -> Markup {
    let f = vm.filters;

    html! {
        form method="get" action=(vm.action) class="filter-bar" {
            input type="hidden" name=(FILTERED_MARKER) value="1";
            @for (k, v) in &vm.hidden {
                input type="hidden" name=(k) value=(v);
            }

            div class="filter-header" {
                h3 { "Filters" }
                a href=(vm.action) class="muted" { "Reset all" }
            }

            fieldset {
                legend { "Price Range" }
                input type="number" name="min_price" min="0" step="1000" value=(f.price_range.0) aria-label="Minimum price";
                span { " – " }
                input type="number" name="max_price" min="0" step="1000" value=(f.price_range.1) aria-label="Maximum price";
            }

            fieldset {
                legend { "Bedrooms" }
                select name="beds" {
                    option value="" selected[f.beds.is_none()] { "Any" }
                    @for n in BED_CHOICES {
                        option value=(n) selected[f.beds == Some(n)] { (n) "+" }
                    }
                }
            }

            fieldset {
                legend { "Bathrooms" }
                select name="baths" {
                    option value="" selected[f.baths.is_none()] { "Any" }
                    @for n in BATH_CHOICES {
                        option value=(n) selected[f.baths == Some(n)] { (n) "+" }
                    }
                }
            }

            fieldset {
                legend { "Home Type" }
                @for t in PropertyType::ALL {
                    label class="check" {
                        input type="checkbox" name="type" value=(t.as_str()) checked[f.home_types.contains(&t)];
                        (t.label())
                    }
                }
            }

            fieldset {
                legend { "Square Footage" }
                input type="number" name="min_sqft" min="0" step="100" placeholder="Min sqft"
                    value=[f.min_sqft];
            }

            fieldset {
                legend { "Status" }
                @for s in ListingStatus::ALL {
                    label class="check" {
                        input type="checkbox" name="status" value=(s.as_str()) checked[f.statuses.contains(&s)];
                        (s.label())
                    }
                }
            }

            details {
                summary { "Amenities" }
                div class="amenity-grid" {
                    @for a in AMENITIES {
                        label class="check" {
                            input type="checkbox" name="amenity" value=(a) checked[f.amenities.iter().any(|x| x == a)];
                            (a)
                        }
                    }
                }
            }

            @if let Some(sort) = vm.sort {
                fieldset {
                    legend { "Sort" }
                    select name="sort" {
                        @for k in SortKey::ALL {
                            option value=(k.as_str()) selected[k == sort] { (k.label()) }
                        }
                    }
                }
            }

            button type="submit" class="btn btn-primary" { "Apply Filters" }
        }
    }
}
