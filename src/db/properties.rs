// src/db/properties.rs
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::de::DeserializeOwned;

use crate::db::connection::Database;
use crate::domain::property::{Address, Location, NewProperty, Property};
use crate::errors::ServerError;

const SELECT_COLUMNS: &str = r#"
    SELECT id, title, description, price, address, beds, baths, sqft, type,
           year_built, images, featured, amenities, location, status
    FROM properties
"#;

/// Raw column values before JSON decoding and enum parsing.
struct PropertyRow {
    id: String,
    title: String,
    description: String,
    price: i64,
    address: Option<String>,
    beds: i64,
    baths: f64,
    sqft: i64,
    property_type: String,
    year_built: Option<i64>,
    images: Option<String>,
    featured: Option<bool>,
    amenities: Option<String>,
    location: Option<String>,
    status: String,
}

impl PropertyRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(PropertyRow {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            price: row.get(3)?,
            address: row.get(4)?,
            beds: row.get(5)?,
            baths: row.get(6)?,
            sqft: row.get(7)?,
            property_type: row.get(8)?,
            year_built: row.get(9)?,
            images: row.get(10)?,
            featured: row.get(11)?,
            amenities: row.get(12)?,
            location: row.get(13)?,
            status: row.get(14)?,
        })
    }

    /// Decode JSON columns with their fallbacks. Unknown `type`/`status`
    /// values are the only hard failure.
    fn into_property(self) -> Result<Property, String> {
        let property_type = self
            .property_type
            .parse()
            .map_err(|e| format!("property {}: type {e}", self.id))?;
        let status = self
            .status
            .parse()
            .map_err(|e| format!("property {}: status {e}", self.id))?;

        Ok(Property {
            address: json_or_default::<Address>(self.address.as_deref()),
            location: json_or_default::<Location>(self.location.as_deref()),
            images: json_or_default(self.images.as_deref()),
            amenities: json_or_default(self.amenities.as_deref()),
            featured: self.featured.unwrap_or(false),
            year_built: self
                .year_built
                .and_then(|y| i32::try_from(y).ok())
                .unwrap_or(0),
            beds: u32::try_from(self.beds).unwrap_or(0),
            sqft: u32::try_from(self.sqft).unwrap_or(0),
            id: self.id,
            title: self.title,
            description: self.description,
            price: self.price,
            baths: self.baths,
            property_type,
            status,
        })
    }
}

/// Malformed or missing JSON falls back to `T::default()`:
/// empty address fields, (0, 0) coordinates, empty lists.
fn json_or_default<T: DeserializeOwned + Default>(raw: Option<&str>) -> T {
    raw.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}

fn collect_rows(rows: Vec<PropertyRow>) -> Vec<Property> {
    rows.into_iter()
        .filter_map(|r| match r.into_property() {
            Ok(p) => Some(p),
            Err(e) => {
                log::warn!("Skipping listing row: {e}");
                None
            }
        })
        .collect()
}

pub fn count(conn: &Connection) -> Result<i64, ServerError> {
    Ok(conn.query_row("SELECT COUNT(*) FROM properties", [], |r| r.get(0))?)
}

/// Whole catalog in insertion order.
pub fn fetch_all(conn: &Connection) -> Result<Vec<Property>, ServerError> {
    let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY created_at, rowid"))?;
    let rows = stmt
        .query_map([], PropertyRow::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(collect_rows(rows))
}

pub fn fetch_by_id(conn: &Connection, id: &str) -> Result<Option<Property>, ServerError> {
    let row = conn
        .query_row(
            &format!("{SELECT_COLUMNS} WHERE id = ?1"),
            params![id],
            PropertyRow::from_row,
        )
        .optional()?;

    Ok(row.and_then(|r| collect_rows(vec![r]).pop()))
}

/// Insert a listing under a caller-chosen id (used for seeding).
pub fn insert_with_id(
    conn: &Connection,
    p: &Property,
    user_id: Option<&str>,
    now: i64,
) -> Result<(), ServerError> {
    conn.execute(
        r#"
        INSERT INTO properties (
            id, title, description, price, address, beds, baths, sqft, type,
            year_built, images, featured, amenities, location, status, user_id, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)
        "#,
        params![
            &p.id,
            &p.title,
            &p.description,
            p.price,
            serde_json::to_string(&p.address)?,
            p.beds,
            p.baths,
            p.sqft,
            p.property_type.as_str(),
            p.year_built,
            serde_json::to_string(&p.images)?,
            p.featured,
            serde_json::to_string(&p.amenities)?,
            serde_json::to_string(&p.location)?,
            p.status.as_str(),
            user_id,
            now,
        ],
    )?;
    Ok(())
}

/// Insert a new listing and return its generated id.
pub fn insert(conn: &Connection, new: &NewProperty, now: i64) -> Result<String, ServerError> {
    let id = uuid::Uuid::new_v4().to_string();
    let property = Property {
        id: id.clone(),
        title: new.title.clone(),
        description: new.description.clone(),
        price: new.price,
        address: new.address.clone(),
        beds: new.beds,
        baths: new.baths,
        sqft: new.sqft,
        property_type: new.property_type,
        year_built: new.year_built,
        images: new.images.clone(),
        featured: new.featured,
        amenities: new.amenities.clone(),
        location: new.location,
        status: new.status,
    };
    insert_with_id(conn, &property, new.user_id.as_deref(), now)?;
    Ok(id)
}

/// Catalog read used by page handlers.
pub fn load_catalog(db: &Database) -> Result<Vec<Property>, ServerError> {
    db.with_conn(|conn| fetch_all(conn))
}

pub fn load_property(db: &Database, id: &str) -> Result<Option<Property>, ServerError> {
    db.with_conn(|conn| fetch_by_id(conn, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::apply_schema;
    use crate::db::seed::sample_properties;
    use crate::domain::property::{ListingStatus, PropertyType};

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        apply_schema(&conn).unwrap();
        conn
    }

    fn insert_raw(conn: &Connection, id: &str, address: &str, location: &str, featured: Option<bool>) {
        conn.execute(
            r#"
            insert into properties (id, title, description, price, address, beds, baths, sqft,
                                    type, year_built, images, featured, amenities, location,
                                    status, created_at)
            values (?1, 'T', 'D', 100, ?2, 1, 1.0, 500, 'condo', null, 'not json', ?3, '[]', ?4, 'rent', 1)
            "#,
            params![id, address, featured, location],
        )
        .unwrap();
    }

    #[test]
    fn sample_catalog_round_trips() {
        let conn = conn();
        for p in sample_properties() {
            insert_with_id(&conn, &p, None, 1000).unwrap();
        }

        let fetched = fetch_all(&conn).unwrap();
        assert_eq!(fetched, sample_properties());
    }

    #[test]
    fn malformed_json_columns_fall_back_to_defaults() {
        let conn = conn();
        insert_raw(&conn, "x", "{broken", "also broken", None);

        let p = fetch_by_id(&conn, "x").unwrap().unwrap();
        assert_eq!(p.address, Address::default());
        assert_eq!(p.location, Location { lat: 0.0, lng: 0.0 });
        assert!(p.images.is_empty());
        assert!(!p.featured);
        assert_eq!(p.year_built, 0);
        assert_eq!(p.property_type, PropertyType::Condo);
        assert_eq!(p.status, ListingStatus::Rent);
    }

    #[test]
    fn out_of_range_integers_fall_back_to_zero() {
        let conn = conn();
        insert_raw(&conn, "big", "{}", "{}", None);
        conn.execute(
            "update properties set year_built = ?1, beds = -2, sqft = ?2 where id = 'big'",
            params![i64::from(i32::MAX) + 1, i64::from(u32::MAX) + 5],
        )
        .unwrap();

        let p = fetch_by_id(&conn, "big").unwrap().unwrap();
        assert_eq!(p.year_built, 0);
        assert_eq!(p.beds, 0);
        assert_eq!(p.sqft, 0);
    }

    #[test]
    fn unknown_status_rows_are_skipped() {
        let conn = conn();
        insert_raw(&conn, "ok", "{}", "{}", Some(true));
        insert_raw(&conn, "bad", "{}", "{}", Some(true));
        conn.execute("update properties set status = 'auction' where id = 'bad'", [])
            .unwrap();

        let all = fetch_all(&conn).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, "ok");
        assert!(fetch_by_id(&conn, "bad").unwrap().is_none());
    }

    #[test]
    fn insert_generates_id_and_keeps_fields() {
        let conn = conn();
        let sample = sample_properties().remove(3);
        let new = NewProperty {
            title: sample.title.clone(),
            description: sample.description.clone(),
            price: sample.price,
            address: sample.address.clone(),
            beds: sample.beds,
            baths: sample.baths,
            sqft: sample.sqft,
            property_type: sample.property_type,
            year_built: sample.year_built,
            images: vec!["/storage/property-images/u/a.jpg".into()],
            featured: false,
            amenities: sample.amenities.clone(),
            location: sample.location,
            status: sample.status,
            user_id: None,
        };

        let id = insert(&conn, &new, 5).unwrap();
        let p = fetch_by_id(&conn, &id).unwrap().unwrap();
        assert_eq!(p.title, "Urban Loft Apartment");
        assert_eq!(p.images, new.images);
        assert_eq!(count(&conn).unwrap(), 1);
    }

    #[test]
    fn missing_id_is_none() {
        let conn = conn();
        assert!(fetch_by_id(&conn, "nope").unwrap().is_none());
    }
}
