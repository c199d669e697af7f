//! Form state and validation for creating and editing items.
//!
//! Input arrives as free text from the form fields. Validation happens
//! before any request is built, so a rejected form never reaches the network.

use log::{debug, warn};
use thiserror::Error;

use crate::models::{Item, NewItem};

/// A form rejection; `Display` is the message shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter an item name.")]
    MissingItem,
    #[error("Please enter a size.")]
    MissingSize,
    #[error("Quantity must be a whole number of 0 or more.")]
    InvalidQuantity,
    #[error("Price must be a number of 0 or more.")]
    InvalidPrice,
    #[error("New quantity must be a whole number.")]
    InvalidNewQuantity,
}

/// Field values of the "Add Item" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub item: String,
    pub size: String,
    pub quantity: String,
    pub price: String,
    pub notes: String,
}

impl ItemForm {
    /// Checks the fields and builds the create payload.
    ///
    /// Blank quantity and price become 0.
    pub fn validate(&self) -> Result<NewItem, ValidationError> {
        validate_fields(&self.item, &self.size, &self.quantity, &self.price, &self.notes)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Editable copy of an existing row, opened by the grid's Edit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: u64,
    pub item: String,
    pub size: String,
    pub quantity: String,
    pub price: String,
    pub notes: String,
    last_updated: Option<String>,
}

impl EditDraft {
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id,
            item: item.item.clone(),
            size: item.size.clone(),
            quantity: item.quantity.to_string(),
            price: item.price.map(|p| p.to_string()).unwrap_or_default(),
            notes: item.notes.clone(),
            last_updated: item.last_updated.clone(),
        }
    }

    /// Checks the fields and builds the full record for update-by-id.
    pub fn validate(&self) -> Result<Item, ValidationError> {
        let fields = validate_fields(&self.item, &self.size, &self.quantity, &self.price, &self.notes)?;
        Ok(fields.into_item(self.id, self.last_updated.clone()))
    }
}

/// Pending quantity-only change keyed by item name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityEdit {
    pub name: String,
    pub new_quantity: String,
}

impl QuantityEdit {
    pub fn new(name: impl Into<String>, current_quantity: i64) -> Self {
        Self {
            name: name.into(),
            new_quantity: current_quantity.to_string(),
        }
    }

    /// Parses the new quantity. Negative values pass through; the service
    /// stores whatever it is sent on this path.
    pub fn parse(&self) -> Result<i64, ValidationError> {
        parse_whole_number(self.new_quantity.trim()).ok_or(ValidationError::InvalidNewQuantity)
    }
}

fn validate_fields(
    item: &str,
    size: &str,
    quantity: &str,
    price: &str,
    notes: &str,
) -> Result<NewItem, ValidationError> {
    let item = item.trim();
    let size = size.trim();

    if item.is_empty() {
        warn!("Rejected form: item name is empty");
        return Err(ValidationError::MissingItem);
    }
    if size.is_empty() {
        warn!("Rejected form: size is empty");
        return Err(ValidationError::MissingSize);
    }

    let quantity = parse_quantity(quantity)?;
    let price = parse_price(price)?;
    debug!("Form valid: '{item}' ({size}) qty={quantity} price={price}");

    Ok(NewItem {
        item: item.to_string(),
        size: size.to_string(),
        quantity,
        price,
        notes: notes.to_string(),
    })
}

/// Parses a quantity field. Blank is 0; anything else must be a whole
/// number of 0 or more (`"4"` and `"4.0"` both give 4).
pub fn parse_quantity(input: &str) -> Result<i64, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0);
    }

    match parse_whole_number(input) {
        Some(value) if value >= 0 => Ok(value),
        _ => Err(ValidationError::InvalidQuantity),
    }
}

/// Integer text, or a decimal with no fractional part (`"4.0"`).
fn parse_whole_number(input: &str) -> Option<i64> {
    if let Ok(value) = input.parse::<i64>() {
        return Some(value);
    }

    match input.parse::<f64>() {
        Ok(value)
            if value.is_finite()
                && value.fract() == 0.0
                && value >= i64::MIN as f64
                && value < i64::MAX as f64 =>
        {
            // -0.0 casts to 0
            Some(value as i64)
        }
        _ => None,
    }
}

/// Parses a price field, accepting a comma as decimal separator. Blank is 0.
pub fn parse_price(input: &str) -> Result<f64, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    match input.replace(',', ".").parse::<f64>() {
        // -0 normalises to 0
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value + 0.0),
        _ => Err(ValidationError::InvalidPrice),
    }
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
