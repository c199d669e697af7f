use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// One inventory record as served by `GET /items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub item: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: i64,
    /// `None` when the service sends no price or something that isn't a number.
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl Item {
    /// Parses the service's ISO-8601 `last_updated` stamp.
    pub fn last_updated_at(&self) -> Option<NaiveDateTime> {
        let raw = self.last_updated.as_deref()?.trim();
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
    }

    /// Quantity times unit price, with a missing price counting as zero.
    pub fn stock_value(&self) -> f64 {
        let price = self.price.filter(|p| p.is_finite()).unwrap_or(0.0);
        self.quantity as f64 * price
    }
}

/// Payload for `POST /items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub item: String,
    pub size: String,
    pub quantity: i64,
    pub price: f64,
    pub notes: String,
}

impl NewItem {
    /// Attaches a server id, producing the full record sent by `PUT /items/update/{id}`.
    pub fn into_item(self, id: u64, last_updated: Option<String>) -> Item {
        Item {
            id,
            item: self.item,
            size: self.size,
            quantity: self.quantity,
            price: Some(self.price),
            notes: self.notes,
            last_updated,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().replace(',', ".").parse::<f64>().ok(),
        _ => None,
    })
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
