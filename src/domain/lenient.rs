// src/domain/lenient.rs
//
// Deserializers for rows coming out of the legacy PHP endpoints, where every
// column may arrive as a string, a number or null.

use chrono::NaiveDateTime;
use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Text(s) => s,
        }
    }

    fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(n) => Some(*n),
            Scalar::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
            Scalar::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Paths {
    List(Vec<String>),
    Joined(String),
}

/// Splits a comma-joined path list, dropping blanks.
pub fn split_paths(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Stored form of a path list. A path containing a comma would come back as
/// two paths, so writes reject those (see [`path_with_comma`]).
pub fn join_paths(paths: &[String]) -> String {
    paths.join(",")
}

pub fn path_with_comma(paths: &[String]) -> Option<&str> {
    paths.iter().map(String::as_str).find(|p| p.contains(','))
}

pub fn int<'de, D>(d: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Scalar::deserialize(d)?;
    raw.as_int()
        .ok_or_else(|| de::Error::custom(format!("expected an integer, got {:?}", raw.into_text())))
}

pub fn int_or_zero<'de, D>(d: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Scalar>::deserialize(d)?;
    Ok(raw.and_then(|s| s.as_int()).unwrap_or(0))
}

pub fn text<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Scalar>::deserialize(d)?;
    Ok(raw.map(Scalar::into_text).unwrap_or_default())
}

pub fn paths<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Paths>::deserialize(d)?;
    Ok(match raw {
        Some(Paths::List(list)) => list
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect(),
        Some(Paths::Joined(joined)) => split_paths(&joined),
        None => Vec::new(),
    })
}

/// Accepts MySQL (`2024-05-01 10:15:00`) and ISO (`2024-05-01T10:15:00`) stamps;
/// anything else becomes `None`.
pub fn timestamp<'de, D>(d: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(d)?;
    Ok(raw.and_then(|s| parse_timestamp(&s)))
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}
