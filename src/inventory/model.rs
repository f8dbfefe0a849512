//! Product and supplier records

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Product {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Description", display_with = "display_opt")]
    pub description: Option<String>,
    #[tabled(rename = "Price", display_with = "display_price")]
    pub price: f64,
    #[tabled(rename = "Qty")]
    pub quantity: i64,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Supplier", display_with = "display_opt")]
    pub supplier_id: Option<i64>,
}

/// Product fields supplied by the user; the ID comes from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
    pub category: String,
    pub supplier_id: Option<i64>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: f64, quantity: i64, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            quantity,
            category: category.into(),
            supplier_id: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = non_blank(Some(description.into()));
        self
    }

    pub fn supplier(mut self, supplier_id: i64) -> Self {
        self.supplier_id = Some(supplier_id);
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        require_text(&self.name, "Product name")?;
        require_text(&self.category, "Category")?;
        validate_stock(self.price, self.quantity)
    }
}

/// Fields the update operation may change.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl ProductUpdate {
    pub(crate) fn validate(&self) -> Result<()> {
        require_text(&self.name, "Product name")?;
        validate_stock(self.price, self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Supplier {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Contact")]
    pub contact: String,
    #[tabled(rename = "Phone", display_with = "display_opt")]
    pub phone: Option<String>,
    #[tabled(rename = "Email", display_with = "display_opt")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSupplier {
    pub name: String,
    pub contact: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl NewSupplier {
    /// Blank phone or email are stored as NULL.
    pub fn new(name: impl Into<String>, contact: impl Into<String>, phone: Option<String>, email: Option<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            phone: non_blank(phone),
            email: non_blank(email),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        require_text(&self.name, "Supplier name")?;
        require_text(&self.contact, "Contact name")
    }
}

/// Summary counts for the inventory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventoryStats {
    pub products: usize,
    pub suppliers: usize,
    pub units: i64,
}

fn require_text(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn validate_stock(price: f64, quantity: i64) -> Result<()> {
    if !(price.is_finite() && price > 0.0) {
        return Err(Error::validation("Price must be greater than 0"));
    }
    if quantity < 0 {
        return Err(Error::validation("Quantity cannot be negative"));
    }
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn display_opt<T: std::fmt::Display>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_else(|| "-".to_string())
}

fn display_price(price: &f64) -> String {
    format!("${price:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_validation() {
        assert!(NewProduct::new("Widget", 2.5, 0, "Tools").validate().is_ok());
        assert!(NewProduct::new(" ", 2.5, 1, "Tools").validate().is_err());
        assert!(NewProduct::new("Widget", 2.5, 1, "").validate().is_err());
        assert!(NewProduct::new("Widget", 0.0, 1, "Tools").validate().is_err());
        assert!(NewProduct::new("Widget", f64::NAN, 1, "Tools").validate().is_err());
        assert!(NewProduct::new("Widget", 1.0, -1, "Tools").validate().is_err());
    }

    #[test]
    fn test_blank_optionals_become_none() {
        let supplier = NewSupplier::new("Acme", "Wile", Some("  ".into()), Some("a@acme.test".into()));
        assert_eq!(supplier.phone, None);
        assert_eq!(supplier.email.as_deref(), Some("a@acme.test"));
        assert_eq!(NewProduct::new("W", 1.0, 1, "T").description("").description, None);
    }

    #[test]
    fn test_supplier_validation() {
        assert!(NewSupplier::new("Acme", "", None, None).validate().is_err());
        assert!(NewSupplier::new("", "Wile", None, None).validate().is_err());
    }
}
