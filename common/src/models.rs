use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::utils::{format_currency, PHONE_PLACEHOLDER};

/// A customer record as served by the customer service. Read-only on this side.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "amount_from_number_or_text")]
    pub total_spent: Option<f64>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn phone_display(&self) -> &str {
        self.phone.as_deref().unwrap_or(PHONE_PLACEHOLDER)
    }

    pub fn total_spent_or_zero(&self) -> f64 {
        self.total_spent.unwrap_or(0.0)
    }

    pub fn total_spent_display(&self) -> String {
        format_currency(self.total_spent_or_zero())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Amount {
    Number(f64),
    Text(String),
}

// Decimal columns often arrive as strings ("312.50"). Blank or non-numeric
// text counts as no amount.
fn amount_from_number_or_text<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Amount>::deserialize(deserializer)? {
        Some(Amount::Number(value)) => Some(value),
        Some(Amount::Text(text)) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        None => None,
    })
}

/// The listing response. `data` holds either one record or an array of them.
#[derive(Debug, Deserialize, Serialize)]
pub struct CustomersEnvelope {
    pub data: Value,
}

impl CustomersEnvelope {
    /// Arrays pass through in order, a lone record becomes a one-element list.
    /// Errors name the offending record and field.
    pub fn into_customers(self) -> Result<Vec<Customer>, serde_json::Error> {
        match self.data {
            Value::Array(records) => records
                .into_iter()
                .enumerate()
                .map(|(index, record)| {
                    serde_json::from_value(record)
                        .map_err(|err| shape_error(format!("customer at index {}: {}", index, err)))
                })
                .collect(),
            Value::Null => Err(shape_error("`data` is null")),
            record => serde_json::from_value(record)
                .map(|customer| vec![customer])
                .map_err(|err| shape_error(format!("customer: {}", err))),
        }
    }
}

fn shape_error(message: impl std::fmt::Display) -> serde_json::Error {
    de::Error::custom(message)
}
