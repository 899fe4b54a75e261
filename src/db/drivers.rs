// src/db/drivers.rs
use crate::domain::applicant::{Applicant, ValidApplicant};
use crate::domain::lenient::{join_paths, split_paths};
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::{params, Connection};

/// Registered drivers, newest first.
pub fn list_drivers(conn: &Connection) -> Result<Vec<Applicant>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            SELECT
                id, full_name, phone_number, email, license_class,
                experience_years, current_location, expected_salary,
                availability, documents, created_at
            FROM drivers
            ORDER BY id DESC
            "#,
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            let documents: String = row.get(9)?;
            Ok(Applicant {
                id: row.get(0)?,
                full_name: row.get(1)?,
                phone_number: row.get(2)?,
                email: row.get(3)?,
                license_class: row.get(4)?,
                experience_years: row.get(5)?,
                current_location: row.get(6)?,
                expected_salary: row.get(7)?,
                availability: row.get(8)?,
                documents: split_paths(&documents),
                created_at: row.get(10)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

pub fn insert_driver(conn: &Connection, a: &ValidApplicant) -> Result<i64, ServerError> {
    let now = Utc::now().naive_utc();
    conn.execute(
        r#"
        INSERT INTO drivers (
            full_name, phone_number, email, license_class, experience_years,
            current_location, expected_salary, availability, documents, created_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        params![
            a.full_name,
            a.phone_number,
            a.email,
            a.license_class,
            a.experience_years,
            a.current_location,
            a.expected_salary,
            a.availability,
            join_paths(&a.documents),
            now,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("Error saving to database: {e}")))?;

    Ok(conn.last_insert_rowid())
}
