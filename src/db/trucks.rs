// src/db/trucks.rs
use crate::catalog::{CatalogError, SnapshotSource};
use crate::db::connection::Database;
use crate::domain::lenient::{join_paths, split_paths};
use crate::domain::listing::{Listing, ValidListing};
use crate::errors::ServerError;
use chrono::{NaiveDateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_TRUCKS: &str = r#"
    SELECT
        id, make, model, year, price, truck_condition, images, location,
        payment_method, deposit, monthly_installments, bank_balance,
        number_plate, color, description, created_at
    FROM trucks
"#;

fn row_to_listing(row: &Row<'_>) -> rusqlite::Result<Listing> {
    let images: String = row.get(6)?;
    Ok(Listing {
        id: row.get(0)?,
        make: row.get(1)?,
        model: row.get(2)?,
        year: row.get(3)?,
        price: row.get(4)?,
        condition: row.get(5)?,
        images: split_paths(&images),
        location: row.get(7)?,
        payment_method: row.get(8)?,
        deposit: row.get(9)?,
        monthly_installments: row.get(10)?,
        bank_balance: row.get(11)?,
        number_plate: row.get(12)?,
        color: row.get(13)?,
        description: row.get(14)?,
        created_at: row.get::<_, Option<NaiveDateTime>>(15)?,
    })
}

/// All trucks, most recently added first.
pub fn list_trucks(conn: &Connection) -> Result<Vec<Listing>, ServerError> {
    let sql = format!("{SELECT_TRUCKS} ORDER BY created_at DESC, id DESC");
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], row_to_listing)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

pub fn get_truck(conn: &Connection, id: i64) -> Result<Option<Listing>, ServerError> {
    let sql = format!("{SELECT_TRUCKS} WHERE id = ?");
    conn.query_row(&sql, params![id], row_to_listing)
        .optional()
        .map_err(|e| ServerError::DbError(format!("select truck failed: {e}")))
}

/// Inserts a validated listing and returns its new id.
pub fn insert_truck(conn: &Connection, listing: &ValidListing) -> Result<i64, ServerError> {
    let f = &listing.fields;
    let now = Utc::now().naive_utc();

    conn.execute(
        r#"
        INSERT INTO trucks (
            make, model, year, price, truck_condition, images, location,
            payment_method, deposit, monthly_installments, bank_balance,
            number_plate, color, description, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
        "#,
        params![
            f.make,
            f.model,
            listing.year,
            f.price.trim(),
            f.condition.trim(),
            join_paths(&f.images),
            f.location,
            listing.payment_method.label(),
            f.deposit.trim(),
            f.monthly_installments.trim(),
            f.bank_balance.trim(),
            f.number_plate.trim(),
            f.color.trim(),
            f.description,
            now,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert truck failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

/// Returns `false` when there was no such truck.
pub fn delete_truck(conn: &Connection, id: i64) -> Result<bool, ServerError> {
    let n = conn
        .execute("DELETE FROM trucks WHERE id = ?", params![id])
        .map_err(|e| ServerError::DbError(format!("delete truck failed: {e}")))?;
    Ok(n > 0)
}

impl SnapshotSource for Database {
    fn fetch_snapshot(&self) -> Result<Vec<Listing>, CatalogError> {
        self.with_conn(|conn| list_trucks(conn))
            .map_err(|e| CatalogError::Database(e.to_string()))
    }
}
