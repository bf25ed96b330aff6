// src/db/seed.rs
use rusqlite::Connection;

use crate::db::properties;
use crate::domain::property::{Address, ListingStatus, Location, Property, PropertyType};
use crate::errors::ServerError;

/// Amenity choices offered by the filter bar and the listing form.
pub const AMENITIES: &[&str] = &[
    "Pool",
    "Smart Home",
    "Garden",
    "Solar Panels",
    "EV Charging",
    "Rooftop Terrace",
    "Concierge",
    "Gym",
    "Wine Cellar",
    "Sauna",
    "Ocean View",
    "Infinity Pool",
    "Media Room",
    "Outdoor Kitchen",
    "Roof Deck",
    "Bike Storage",
    "Pet Friendly",
    "Security System",
    "City Views",
    "Home Theater",
    "Mountain Views",
    "Fireplace",
    "Original Features",
    "Air Conditioning",
];

fn unsplash(ids: &[&str]) -> Vec<String> {
    ids.iter()
        .map(|id| format!("https://images.unsplash.com/photo-{id}?q=80&w=2070&auto=format&fit=crop"))
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn address(street: &str, city: &str, state: &str, zip: &str) -> Address {
    Address {
        street: street.into(),
        city: city.into(),
        state: state.into(),
        zip: zip.into(),
    }
}

/// The six demo listings shown on a fresh install.
pub fn sample_properties() -> Vec<Property> {
    vec![
        Property {
            id: "1".into(),
            title: "Modern Minimalist Villa".into(),
            description: "A stunning modern villa with clean lines and minimalist design. Floor-to-ceiling windows flood the space with natural light, while the open concept living area connects to a private garden and infinity pool.".into(),
            price: 1_250_000,
            address: address("123 Tranquility Lane", "Palm Springs", "CA", "92262"),
            beds: 4,
            baths: 3.5,
            sqft: 3200,
            property_type: PropertyType::House,
            year_built: 2021,
            images: unsplash(&[
                "1600596542815-ffad4c1539a9",
                "1600585154340-be6161a56a0c",
                "1600607687939-ce8a6c25118c",
            ]),
            featured: true,
            amenities: strings(&["Pool", "Smart Home", "Garden", "Solar Panels", "EV Charging"]),
            location: Location { lat: 33.8303, lng: -116.5453 },
            status: ListingStatus::Sale,
        },
        Property {
            id: "2".into(),
            title: "Luxury Downtown Penthouse".into(),
            description: "Exclusive penthouse offering breathtaking city views with floor-to-ceiling windows, a gourmet kitchen, a spacious primary suite and a private rooftop terrace.".into(),
            price: 3_500_000,
            address: address("800 Downtown Plaza", "Los Angeles", "CA", "90015"),
            beds: 3,
            baths: 3.0,
            sqft: 2800,
            property_type: PropertyType::Apartment,
            year_built: 2019,
            images: unsplash(&[
                "1522708323590-d24dbb6b0267",
                "1631679706909-1844bbd07221",
                "1560185127-6ed189bf02f4",
            ]),
            featured: true,
            amenities: strings(&["Rooftop Terrace", "Concierge", "Gym", "Wine Cellar", "Sauna"]),
            location: Location { lat: 34.0522, lng: -118.2437 },
            status: ListingStatus::Sale,
        },
        Property {
            id: "3".into(),
            title: "Coastal Contemporary Home".into(),
            description: "Magnificent ocean-view property designed for indoor-outdoor living, with retractable glass walls, a chef's kitchen, a media room and a luxurious primary suite.".into(),
            price: 4_200_000,
            address: address("55 Oceanview Drive", "Malibu", "CA", "90265"),
            beds: 5,
            baths: 4.5,
            sqft: 4500,
            property_type: PropertyType::House,
            year_built: 2020,
            images: unsplash(&[
                "1628744448840-55bdb2497bd4",
                "1628744424962-386697428c75",
                "1628744448838-6573d697cef7",
            ]),
            featured: true,
            amenities: strings(&["Ocean View", "Infinity Pool", "Media Room", "Wine Cellar", "Outdoor Kitchen"]),
            location: Location { lat: 34.0259, lng: -118.7798 },
            status: ListingStatus::Sale,
        },
        Property {
            id: "4".into(),
            title: "Urban Loft Apartment".into(),
            description: "Stylish industrial loft in a converted historic building featuring exposed brick walls, high ceilings and original hardwood floors.".into(),
            price: 5_500,
            address: address("212 Artist Alley", "San Francisco", "CA", "94110"),
            beds: 2,
            baths: 2.0,
            sqft: 1800,
            property_type: PropertyType::Apartment,
            year_built: 1935,
            images: unsplash(&[
                "1560448204-e02f11c3d0e2",
                "1527359443443-84a48aec73d2",
                "1586023492125-27b2c045efd7",
            ]),
            featured: false,
            amenities: strings(&["Roof Deck", "Bike Storage", "Pet Friendly", "Security System"]),
            location: Location { lat: 37.7749, lng: -122.4194 },
            status: ListingStatus::Rent,
        },
        Property {
            id: "5".into(),
            title: "Hillside Architectural Masterpiece".into(),
            description: "Award-winning architectural home with panoramic city views, dramatic living spaces, a cantilevered infinity pool and smart home technology throughout.".into(),
            price: 6_800_000,
            address: address("1555 Skyline Drive", "Beverly Hills", "CA", "90210"),
            beds: 6,
            baths: 7.0,
            sqft: 6200,
            property_type: PropertyType::House,
            year_built: 2018,
            images: unsplash(&[
                "1613490493576-7fde63acd811",
                "1600607687920-4e2a09cf159d",
                "1602343168117-bb8ffe3e2e9f",
            ]),
            featured: true,
            amenities: strings(&["City Views", "Infinity Pool", "Home Theater", "Wine Cellar", "Smart Home"]),
            location: Location { lat: 34.0901, lng: -118.4065 },
            status: ListingStatus::Sale,
        },
        Property {
            id: "6".into(),
            title: "Mid-Century Modern Classic".into(),
            description: "Beautifully restored mid-century gem with original architectural details, walls of glass, terrazzo floors and a kidney-shaped pool.".into(),
            price: 1_950_000,
            address: address("742 Retro Road", "Palm Springs", "CA", "92262"),
            beds: 3,
            baths: 2.0,
            sqft: 2100,
            property_type: PropertyType::House,
            year_built: 1962,
            images: unsplash(&[
                "1605276374104-dee2a0ed3cd6",
                "1600210492493-0946911123ea",
            ]),
            featured: false,
            amenities: strings(&["Pool", "Mountain Views", "Fireplace", "Original Features"]),
            location: Location { lat: 33.8302, lng: -116.5452 },
            status: ListingStatus::Pending,
        },
    ]
}

/// Insert the sample listings when the catalog is empty.
/// Returns how many rows were written.
pub fn seed_if_empty(conn: &mut Connection, now: i64) -> Result<usize, ServerError> {
    if properties::count(conn)? > 0 {
        return Ok(0);
    }

    let tx = conn.transaction()?;
    let samples = sample_properties();
    for p in &samples {
        properties::insert_with_id(&tx, p, None, now)?;
    }
    tx.commit()?;

    log::info!("Seeded {} sample listings", samples.len());
    Ok(samples.len())
}
