// src/domain/listing.rs

use crate::domain::lenient;
use crate::domain::money::{amount_or_zero, parse_amount};
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One truck in the catalog, as stored in the `trucks` table.
///
/// Serialized field names follow the legacy `getTrucks.php` payload so the
/// JSON API stays readable by the old front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(deserialize_with = "lenient::int")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub make: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub model: String,
    /// Unparseable years arrive as 0.
    #[serde(default, deserialize_with = "lenient::int_or_zero")]
    pub year: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub price: String,
    #[serde(
        rename = "truck_condition",
        alias = "condition",
        default,
        deserialize_with = "lenient::text"
    )]
    pub condition: String,
    /// Display order; the first entry is the thumbnail.
    #[serde(default, deserialize_with = "lenient::paths")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(
        rename = "paymentMethod",
        alias = "payment_method",
        default,
        deserialize_with = "lenient::text"
    )]
    pub payment_method: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub deposit: String,
    #[serde(
        rename = "monthlyInstallments",
        alias = "monthly_installments",
        default,
        deserialize_with = "lenient::text"
    )]
    pub monthly_installments: String,
    #[serde(
        rename = "bankBalance",
        alias = "bank_balance",
        default,
        deserialize_with = "lenient::text"
    )]
    pub bank_balance: String,
    #[serde(
        rename = "numberPlate",
        alias = "number_plate",
        default,
        deserialize_with = "lenient::text"
    )]
    pub number_plate: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    Finance,
    Loan,
}

impl PaymentMethod {
    /// Accepts the current labels and the legacy `Finance` / `skumaLoan` ones.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "cash" => Some(PaymentMethod::Cash),
            "finance" => Some(PaymentMethod::Finance),
            "loan" | "skumaloan" => Some(PaymentMethod::Loan),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Finance => "finance",
            PaymentMethod::Loan => "loan",
        }
    }
}

/// What the card and modal show in their price block.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentPlan {
    Cash {
        price: f64,
    },
    Financed {
        price: f64,
        deposit: f64,
        bank_balance: f64,
        monthly: f64,
    },
    /// Unknown payment label: only the price is meaningful.
    Unspecified {
        price: f64,
    },
}

impl Listing {
    pub fn title(&self) -> String {
        format!("{} {}", self.make, self.model)
    }

    /// Numeric price, `None` when the text does not parse.
    pub fn price_value(&self) -> Option<f64> {
        parse_amount(&self.price)
    }

    pub fn is_new(&self) -> bool {
        self.condition.trim().eq_ignore_ascii_case("new")
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        PaymentMethod::parse(&self.payment_method)
    }

    pub fn payment_plan(&self) -> PaymentPlan {
        let price = amount_or_zero(&self.price);
        match self.payment_method() {
            Some(PaymentMethod::Cash) => PaymentPlan::Cash { price },
            Some(PaymentMethod::Finance) | Some(PaymentMethod::Loan) => PaymentPlan::Financed {
                price,
                deposit: amount_or_zero(&self.deposit),
                bank_balance: amount_or_zero(&self.bank_balance),
                monthly: amount_or_zero(&self.monthly_installments),
            },
            None => PaymentPlan::Unspecified { price },
        }
    }
}

/// Input for creating a listing, from a form post or a JSON body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewListing {
    #[serde(deserialize_with = "lenient::text")]
    pub make: String,
    #[serde(deserialize_with = "lenient::text")]
    pub model: String,
    #[serde(deserialize_with = "lenient::text")]
    pub year: String,
    #[serde(deserialize_with = "lenient::text")]
    pub price: String,
    #[serde(alias = "truck_condition", deserialize_with = "lenient::text")]
    pub condition: String,
    #[serde(deserialize_with = "lenient::paths")]
    pub images: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(alias = "paymentMethod", deserialize_with = "lenient::text")]
    pub payment_method: String,
    #[serde(deserialize_with = "lenient::text")]
    pub deposit: String,
    #[serde(alias = "monthlyInstallments", deserialize_with = "lenient::text")]
    pub monthly_installments: String,
    #[serde(alias = "bankBalance", deserialize_with = "lenient::text")]
    pub bank_balance: String,
    #[serde(alias = "numberPlate", deserialize_with = "lenient::text")]
    pub number_plate: String,
    #[serde(deserialize_with = "lenient::text")]
    pub color: String,
    pub description: Option<String>,
}

/// A `NewListing` that passed validation, ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidListing {
    pub fields: NewListing,
    pub year: i64,
    pub payment_method: PaymentMethod,
}

impl NewListing {
    /// Builds from decoded `application/x-www-form-urlencoded` pairs.
    /// `images` may be repeated or comma-separated.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut out = NewListing::default();
        for (key, value) in pairs {
            let value = value.clone();
            match key.as_str() {
                "make" => out.make = value,
                "model" => out.model = value,
                "year" => out.year = value,
                "price" => out.price = value,
                "condition" | "truck_condition" => out.condition = value,
                "images" | "images[]" => out.images.extend(lenient::split_paths(&value)),
                "location" => out.location = value,
                "paymentMethod" | "payment_method" => out.payment_method = value,
                "deposit" => out.deposit = value,
                "monthlyInstallments" | "monthly_installments" => {
                    out.monthly_installments = value
                }
                "bankBalance" | "bank_balance" => out.bank_balance = value,
                "numberPlate" | "number_plate" => out.number_plate = value,
                "color" => out.color = value,
                "description" => {
                    out.description = Some(value).filter(|d| !d.trim().is_empty())
                }
                _ => {}
            }
        }
        out
    }

    pub fn validate(mut self) -> Result<ValidListing, ServerError> {
        self.make = self.make.trim().to_string();
        self.model = self.model.trim().to_string();
        self.location = self.location.trim().to_string();

        if self.make.is_empty() {
            return Err(ServerError::BadRequest("make is required".into()));
        }
        if self.model.is_empty() {
            return Err(ServerError::BadRequest("model is required".into()));
        }
        let year = self
            .year
            .trim()
            .parse::<i64>()
            .map_err(|_| ServerError::BadRequest(format!("invalid year: {:?}", self.year)))?;
        if parse_amount(&self.price).is_none() {
            return Err(ServerError::BadRequest(format!(
                "invalid price: {:?}",
                self.price
            )));
        }

        let payment_method = if self.payment_method.trim().is_empty() {
            PaymentMethod::Cash
        } else {
            PaymentMethod::parse(&self.payment_method).ok_or_else(|| {
                ServerError::BadRequest(format!(
                    "unknown payment method: {:?}",
                    self.payment_method
                ))
            })?
        };

        if self.condition.trim().is_empty() {
            self.condition = "used".to_string();
        }
        if let Some(path) = lenient::path_with_comma(&self.images) {
            return Err(ServerError::BadRequest(format!(
                "image paths may not contain commas: {path:?}"
            )));
        }

        Ok(ValidListing {
            fields: self,
            year,
            payment_method,
        })
    }
}
