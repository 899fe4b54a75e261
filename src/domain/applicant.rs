// src/domain/applicant.rs

use crate::domain::lenient;
use crate::domain::money::parse_amount;
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LICENSE_CLASS: &str = "BCE";
pub const DEFAULT_AVAILABILITY: &str = "Immediate";

/// A registered driver, as stored in the `drivers` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: i64,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub license_class: String,
    pub experience_years: i64,
    pub current_location: String,
    pub expected_salary: String,
    pub availability: String,
    /// First entry doubles as the profile photo.
    pub documents: Vec<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl Applicant {
    pub fn photo(&self) -> Option<&str> {
        self.documents.first().map(String::as_str)
    }
}

/// Registration form fields; keys match the original form's `name` attributes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewApplicant {
    #[serde(deserialize_with = "lenient::text")]
    pub full_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub phone_number: String,
    #[serde(deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(deserialize_with = "lenient::text")]
    pub license_class: String,
    #[serde(deserialize_with = "lenient::text")]
    pub experience_years: String,
    #[serde(deserialize_with = "lenient::text")]
    pub current_location: String,
    #[serde(deserialize_with = "lenient::text")]
    pub expected_salary: String,
    #[serde(deserialize_with = "lenient::text")]
    pub availability: String,
    #[serde(deserialize_with = "lenient::paths")]
    pub documents: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidApplicant {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub license_class: String,
    pub experience_years: i64,
    pub current_location: String,
    pub expected_salary: String,
    pub availability: String,
    pub documents: Vec<String>,
}

impl NewApplicant {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut out = NewApplicant::default();
        for (key, value) in pairs {
            let value = value.clone();
            match key.as_str() {
                "fullName" => out.full_name = value,
                "phoneNumber" => out.phone_number = value,
                "email" => out.email = value,
                "licenseClass" => out.license_class = value,
                "experienceYears" => out.experience_years = value,
                "currentLocation" => out.current_location = value,
                "expectedSalary" => out.expected_salary = value,
                "availability" => out.availability = value,
                "documents" | "documents[]" => out.documents.extend(lenient::split_paths(&value)),
                _ => {}
            }
        }
        out
    }

    pub fn validate(self) -> Result<ValidApplicant, ServerError> {
        let full_name = required(&self.full_name, "full name")?;
        let phone_number = required(&self.phone_number, "phone number")?;
        let current_location = required(&self.current_location, "current location")?;

        let experience_years = self
            .experience_years
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|y| *y >= 0)
            .ok_or_else(|| ServerError::BadRequest("years of experience must be a whole number".into()))?;

        let email = normalize_email(&self.email)?;

        let expected_salary = self.expected_salary.trim().to_string();
        if !expected_salary.is_empty() && parse_amount(&expected_salary).is_none() {
            return Err(ServerError::BadRequest(
                "expected salary must be a number".into(),
            ));
        }

        if let Some(path) = lenient::path_with_comma(&self.documents) {
            return Err(ServerError::BadRequest(format!(
                "document paths may not contain commas: {path:?}"
            )));
        }

        Ok(ValidApplicant {
            full_name,
            phone_number,
            email,
            license_class: or_default(&self.license_class, DEFAULT_LICENSE_CLASS),
            experience_years,
            current_location,
            expected_salary,
            availability: or_default(&self.availability, DEFAULT_AVAILABILITY),
            documents: self.documents,
        })
    }
}

fn required(value: &str, label: &str) -> Result<String, ServerError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(ServerError::BadRequest(format!("{label} is required")));
    }
    Ok(v.to_string())
}

fn or_default(value: &str, default: &str) -> String {
    let v = value.trim();
    if v.is_empty() { default } else { v }.to_string()
}

/// Trim + lowercase. Empty is allowed (the field is optional).
fn normalize_email(email: &str) -> Result<String, ServerError> {
    let e = email.trim().to_lowercase();
    if e.is_empty() {
        return Ok(e);
    }
    if !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
        return Err(ServerError::BadRequest("invalid email".into()));
    }
    Ok(e)
}
