// src/domain/form.rs

use std::collections::BTreeMap;

use crate::domain::property::{Address, ListingStatus, Location, NewProperty, PropertyType};

/// Checked on a fresh form.
pub const DEFAULT_AMENITY: &str = "Air Conditioning";

/// Raw add-listing form input, kept as typed so it can be re-rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub lat: String,
    pub lng: String,
    pub beds: String,
    pub baths: String,
    pub sqft: String,
    pub year: String,
    pub property_type: PropertyType,
    pub status: ListingStatus,
    /// Checked amenity boxes.
    pub amenities: Vec<String>,
    /// Free text, comma separated.
    pub extra_amenities: String,
}

impl Default for ListingForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            price: String::new(),
            street: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            lat: String::new(),
            lng: String::new(),
            beds: String::new(),
            baths: String::new(),
            sqft: String::new(),
            year: String::new(),
            property_type: PropertyType::House,
            status: ListingStatus::Sale,
            amenities: vec![DEFAULT_AMENITY.to_string()],
            extra_amenities: String::new(),
        }
    }
}

/// Field name -> message. Ordered so the form renders errors stably.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// A form that passed validation, minus the images.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingFields {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub address: Address,
    pub beds: u32,
    pub baths: f64,
    pub sqft: u32,
    pub year_built: i32,
    pub location: Location,
    pub property_type: PropertyType,
    pub status: ListingStatus,
    pub amenities: Vec<String>,
}

impl ListingFields {
    /// New listings are never featured.
    pub fn into_new_property(self, images: Vec<String>, user_id: &str) -> NewProperty {
        NewProperty {
            title: self.title,
            description: self.description,
            price: self.price,
            address: self.address,
            beds: self.beds,
            baths: self.baths,
            sqft: self.sqft,
            property_type: self.property_type,
            year_built: self.year_built,
            images,
            featured: false,
            amenities: self.amenities,
            location: self.location,
            status: self.status,
            user_id: Some(user_id.to_string()),
        }
    }
}

impl ListingForm {
    /// Build from submitted form pairs. Unknown keys are ignored; a submitted
    /// form with no amenity boxes checked has no amenities.
    pub fn from_fields(pairs: &[(String, String)]) -> Self {
        let mut form = ListingForm {
            amenities: Vec::new(),
            ..ListingForm::default()
        };

        for (key, value) in pairs {
            match key.as_str() {
                "title" => form.title = value.clone(),
                "description" => form.description = value.clone(),
                "price" => form.price = value.clone(),
                "street" => form.street = value.clone(),
                "city" => form.city = value.clone(),
                "state" => form.state = value.clone(),
                "zip" => form.zip = value.clone(),
                "lat" => form.lat = value.clone(),
                "lng" => form.lng = value.clone(),
                "beds" => form.beds = value.clone(),
                "baths" => form.baths = value.clone(),
                "sqft" => form.sqft = value.clone(),
                "year" => form.year = value.clone(),
                "type" => {
                    if let Ok(t) = value.parse() {
                        form.property_type = t;
                    }
                }
                "status" => {
                    if let Ok(s) = value.parse() {
                        form.status = s;
                    }
                }
                "amenity" => form.amenities.push(value.clone()),
                "extra_amenities" => form.extra_amenities = value.clone(),
                _ => {}
            }
        }
        form
    }

    /// Checked amenities followed by the extra ones: trimmed, blanks
    /// dropped, first occurrence wins.
    pub fn amenities(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        let extras = self.extra_amenities.split(',');
        for a in self.amenities.iter().map(String::as_str).chain(extras) {
            let a = a.trim();
            if !a.is_empty() && !out.iter().any(|x| x == a) {
                out.push(a.to_string());
            }
        }
        out
    }

    pub fn validate(&self, image_count: usize) -> Result<ListingFields, FieldErrors> {
        let mut errors = FieldErrors::default();

        let title = required(&self.title, "title", "Title is required", &mut errors);
        let description = required(
            &self.description,
            "description",
            "Description is required",
            &mut errors,
        );

        let price = positive_f64(&self.price)
            .filter(|p| *p < i64::MAX as f64)
            .map(|p| p.round() as i64)
            .filter(|p| *p > 0);
        if price.is_none() {
            errors.insert("price", "Valid price is required");
        }

        let street = required(&self.street, "street", "Street address is required", &mut errors);
        let city = required(&self.city, "city", "City is required", &mut errors);
        let state = required(&self.state, "state", "State is required", &mut errors);
        let zip = required(&self.zip, "zip", "ZIP code is required", &mut errors);

        let beds = self.beds.trim().parse::<u32>().ok().filter(|b| *b > 0);
        if beds.is_none() {
            errors.insert("beds", "Number of beds is required");
        }
        let baths = positive_f64(&self.baths);
        if baths.is_none() {
            errors.insert("baths", "Number of baths is required");
        }
        let sqft = self.sqft.trim().parse::<u32>().ok().filter(|s| *s > 0);
        if sqft.is_none() {
            errors.insert("sqft", "Square footage is required");
        }
        let year = self.year.trim().parse::<i32>().ok().filter(|y| *y > 1800);
        if year.is_none() {
            errors.insert("year", "Valid year built is required");
        }

        let lat = finite_f64(&self.lat);
        let lng = finite_f64(&self.lng);
        let location = match (lat, lng) {
            (Some(lat), Some(lng)) if lat.abs() <= 90.0 && lng.abs() <= 180.0 => {
                Some(Location { lat, lng })
            }
            (Some(_), Some(_)) => {
                errors.insert("location", "Location coordinates are out of range");
                None
            }
            _ => {
                errors.insert("location", "Location coordinates are required");
                None
            }
        };

        if image_count == 0 {
            errors.insert("images", "At least one image is required");
        }

        match (price, beds, baths, sqft, year, location) {
            (Some(price), Some(beds), Some(baths), Some(sqft), Some(year_built), Some(location))
                if errors.is_empty() =>
            {
                Ok(ListingFields {
                    title,
                    description,
                    price,
                    address: Address {
                        street,
                        city,
                        state,
                        zip,
                    },
                    beds,
                    baths,
                    sqft,
                    year_built,
                    location,
                    property_type: self.property_type,
                    status: self.status,
                    amenities: self.amenities(),
                })
            }
            _ => Err(errors),
        }
    }
}

fn required(value: &str, field: &'static str, message: &str, errors: &mut FieldErrors) -> String {
    let v = value.trim();
    if v.is_empty() {
        errors.insert(field, message);
    }
    v.to_string()
}

fn finite_f64(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn positive_f64(value: &str) -> Option<f64> {
    finite_f64(value).filter(|v| *v > 0.0)
}
