// src/domain/filter.rs

use crate::domain::property::{ListingStatus, Property, PropertyType};

pub const DEFAULT_MIN_PRICE: i64 = 0;
pub const DEFAULT_MAX_PRICE: i64 = 10_000_000;

/// Query-string marker set by the filter form itself. With it present an
/// unchecked status list means "any status" instead of the default.
pub const FILTERED_MARKER: &str = "filtered";

/// The predicate set a user selects to narrow the catalog.
///
/// Empty `home_types`, `amenities` or `statuses` place no restriction.
/// `amenities` is AND-matched, the other two lists are OR-matched.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOptions {
    pub price_range: (i64, i64),
    pub beds: Option<u32>,
    pub baths: Option<f64>,
    pub home_types: Vec<PropertyType>,
    pub min_sqft: Option<u32>,
    pub amenities: Vec<String>,
    pub statuses: Vec<ListingStatus>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            price_range: (DEFAULT_MIN_PRICE, DEFAULT_MAX_PRICE),
            beds: None,
            baths: None,
            home_types: Vec::new(),
            min_sqft: None,
            amenities: Vec::new(),
            statuses: vec![ListingStatus::Sale, ListingStatus::Rent],
        }
    }
}

impl FilterOptions {
    /// No restriction at all, including status.
    #[cfg(test)]
    pub fn unrestricted() -> Self {
        Self {
            price_range: (i64::MIN, i64::MAX),
            statuses: Vec::new(),
            ..Self::default()
        }
    }

    pub fn matches(&self, p: &Property) -> bool {
        let (min, max) = self.price_range;
        if p.price < min || p.price > max {
            return false;
        }
        if self.beds.is_some_and(|beds| p.beds < beds) {
            return false;
        }
        if self.baths.is_some_and(|baths| p.baths < baths) {
            return false;
        }
        if !self.home_types.is_empty() && !self.home_types.contains(&p.property_type) {
            return false;
        }
        if self.min_sqft.is_some_and(|sqft| p.sqft < sqft) {
            return false;
        }
        if !self.amenities.iter().all(|a| p.has_amenity(a)) {
            return false;
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&p.status) {
            return false;
        }
        true
    }

    /// Decode the filter bar's query parameters.
    ///
    /// Blank or malformed scalars fall back to their defaults; unknown
    /// `status` values are ignored like any other malformed value. A bare
    /// `?status=rent` link pre-seeds the status filter.
    pub fn from_query(pairs: &[(String, String)]) -> Self {
        let mut filters = FilterOptions::default();
        let mut statuses = Vec::new();
        let mut submitted = false;

        for (key, value) in pairs {
            let value = value.trim();
            match key.as_str() {
                "min_price" => {
                    if let Ok(v) = value.parse() {
                        filters.price_range.0 = v;
                    }
                }
                "max_price" => {
                    if let Ok(v) = value.parse() {
                        filters.price_range.1 = v;
                    }
                }
                "beds" => filters.beds = value.parse().ok(),
                "baths" => filters.baths = value.parse().ok().filter(|b: &f64| b.is_finite()),
                "min_sqft" => filters.min_sqft = value.parse().ok(),
                "type" => {
                    if let Ok(t) = value.parse::<PropertyType>() {
                        if !filters.home_types.contains(&t) {
                            filters.home_types.push(t);
                        }
                    }
                }
                "amenity" => {
                    if !value.is_empty() && !filters.amenities.iter().any(|a| a == value) {
                        filters.amenities.push(value.to_string());
                    }
                }
                "status" => {
                    if let Ok(s) = value.parse::<ListingStatus>() {
                        if !statuses.contains(&s) {
                            statuses.push(s);
                        }
                    }
                }
                FILTERED_MARKER => submitted = true,
                _ => {}
            }
        }

        if !statuses.is_empty() || submitted {
            filters.statuses = statuses;
        }
        filters
    }

    /// Encode back into query pairs understood by [`FilterOptions::from_query`].
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut out = vec![(FILTERED_MARKER.to_string(), "1".to_string())];
        out.push(("min_price".into(), self.price_range.0.to_string()));
        out.push(("max_price".into(), self.price_range.1.to_string()));
        if let Some(beds) = self.beds {
            out.push(("beds".into(), beds.to_string()));
        }
        if let Some(baths) = self.baths {
            out.push(("baths".into(), baths.to_string()));
        }
        for t in &self.home_types {
            out.push(("type".into(), t.as_str().to_string()));
        }
        if let Some(sqft) = self.min_sqft {
            out.push(("min_sqft".into(), sqft.to_string()));
        }
        for a in &self.amenities {
            out.push(("amenity".into(), a.clone()));
        }
        for s in &self.statuses {
            out.push(("status".into(), s.as_str().to_string()));
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    Newest,
    Oldest,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Featured,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Newest,
        SortKey::Oldest,
    ];

    /// Unknown keys fall back to `featured`.
    pub fn parse(s: &str) -> SortKey {
        match s.trim() {
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            "newest" => SortKey::Newest,
            "oldest" => SortKey::Oldest,
            _ => SortKey::Featured,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Newest => "Newest First",
            SortKey::Oldest => "Oldest First",
        }
    }
}

pub fn filter_properties(catalog: &[Property], filters: &FilterOptions) -> Vec<Property> {
    catalog
        .iter()
        .filter(|p| filters.matches(p))
        .cloned()
        .collect()
}

/// Stable: records with equal keys keep their catalog order.
pub fn sort_properties(properties: &mut [Property], key: SortKey) {
    match key {
        SortKey::PriceAsc => properties.sort_by_key(|p| p.price),
        SortKey::PriceDesc => properties.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Newest => properties.sort_by(|a, b| b.year_built.cmp(&a.year_built)),
        SortKey::Oldest => properties.sort_by_key(|p| p.year_built),
        SortKey::Featured => properties.sort_by_key(|p| !p.featured),
    }
}

pub fn apply(catalog: &[Property], filters: &FilterOptions, key: SortKey) -> Vec<Property> {
    let mut out = filter_properties(catalog, filters);
    sort_properties(&mut out, key);
    out
}

/// Fetch options for a catalog read: optional filters, `featured` equality,
/// sort, then limit.
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    pub filters: Option<FilterOptions>,
    pub sort: SortKey,
    pub featured: Option<bool>,
    pub limit: Option<usize>,
}

impl ListingQuery {
    pub fn featured(limit: Option<usize>) -> Self {
        Self {
            featured: Some(true),
            limit,
            ..Self::default()
        }
    }

    pub fn run(&self, catalog: &[Property]) -> Vec<Property> {
        let mut out: Vec<Property> = catalog
            .iter()
            .filter(|p| self.filters.as_ref().map_or(true, |f| f.matches(p)))
            .filter(|p| self.featured.map_or(true, |want| p.featured == want))
            .cloned()
            .collect();
        sort_properties(&mut out, self.sort);
        if let Some(limit) = self.limit {
            out.truncate(limit);
        }
        out
    }
}

/// Other listings sharing the type or the city, in catalog order.
pub fn similar_properties(catalog: &[Property], property: &Property, limit: usize) -> Vec<Property> {
    catalog
        .iter()
        .filter(|p| p.id != property.id)
        .filter(|p| {
            p.property_type == property.property_type || p.address.city == property.address.city
        })
        .take(limit)
        .cloned()
        .collect()
}
