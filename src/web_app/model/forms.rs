// web_app/model/forms.rs - Form state for the add/edit page
//
// Inputs are kept as the raw strings the user typed; parsing, upper-casing
// and validation happen when a value is read out of a form.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use super::{Product, Supplier, SupplierProduct, TypeProduct};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{0} cannot be negative")]
    Negative(&'static str),
    #[error("no supplier is being edited")]
    NotEditing,
    #[error("supplier {0} is not in the list")]
    UnknownSupplier(i64),
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::Missing(field));
    }
    Ok(value.to_uppercase())
}

/// Parse a money field typed by the user
pub fn parse_amount(field: &'static str, value: &str) -> Result<Decimal, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::Missing(field));
    }
    let amount = Decimal::from_str(value).map_err(|_| FormError::InvalidNumber {
        field,
        value: value.to_string(),
    })?;
    if amount.is_sign_negative() {
        return Err(FormError::Negative(field));
    }
    Ok(amount)
}

/// Product attributes form
#[derive(Clone, Debug, PartialEq)]
pub struct ProductForm {
    pub product_name: String,
    pub price: String,
    pub product_key: String,
    pub type_product: Option<TypeProduct>,
    pub product_status: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            price: String::new(),
            product_key: String::new(),
            type_product: None,
            product_status: true,
        }
    }
}

impl ProductForm {
    /// Fill the form from a product fetched for editing. The type is looked
    /// up in `types` by id so the selector shows one of its own options.
    pub fn fill(&mut self, product: &Product, types: &[TypeProduct]) {
        self.product_name = product.product_name.clone();
        self.price = product.price.to_string();
        self.product_key = product.key.clone();
        self.product_status = product.product_status;
        if let Some(found) = types
            .iter()
            .find(|t| t.id_type_product == product.type_product.id_type_product)
        {
            self.type_product = Some(found.clone());
        }
    }

    /// Collect a product ready for submission. Name and key are upper-cased.
    pub fn to_product(&self, id_product: Option<i64>) -> Result<Product, FormError> {
        let product_name = required("product name", &self.product_name)?;
        let key = required("product key", &self.product_key)?;
        let price = parse_amount("price", &self.price)?;
        let type_product = self
            .type_product
            .clone()
            .ok_or(FormError::Missing("product type"))?;

        Ok(Product {
            id_product,
            product_name,
            key,
            price,
            product_status: self.product_status,
            type_product,
        })
    }
}

/// Sub-form used to add or edit one supplier association at a time
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SupplierForm {
    pub supplier: Option<Supplier>,
    pub product_key: String,
    pub cost: String,
    /// Supplier id of the association being edited
    pub editing: Option<i64>,
}

impl SupplierForm {
    /// The supplier cannot change while an association is being edited
    pub fn supplier_locked(&self) -> bool {
        self.editing.is_some()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Load an existing association into the form
    pub fn load(&mut self, supplier: Option<Supplier>, entry: &SupplierProduct) {
        self.supplier = supplier.or_else(|| {
            Some(Supplier {
                id_supplier: entry.id_supplier,
                supplier_name: entry.supplier_name.clone(),
            })
        });
        self.product_key = entry.supplier_product_key.clone();
        self.cost = entry.supplier_cost.to_string();
        self.editing = Some(entry.id_supplier);
    }

    /// SKU (upper-cased) and cost as typed
    pub fn values(&self) -> Result<(String, Decimal), FormError> {
        let key = required("supplier product key", &self.product_key)?;
        let cost = parse_amount("cost", &self.cost)?;
        Ok((key, cost))
    }

    /// A new association built from the form
    pub fn to_entry(&self) -> Result<SupplierProduct, FormError> {
        let supplier = self.supplier.as_ref().ok_or(FormError::Missing("supplier"))?;
        let (key, cost) = self.values()?;
        Ok(SupplierProduct::new(supplier, key, cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hardware() -> TypeProduct {
        TypeProduct {
            id_type_product: 1,
            type_product_name: "Hardware".to_string(),
        }
    }

    #[test]
    fn test_product_form_upper_cases_name_and_key() {
        let form = ProductForm {
            product_name: " widget ".to_string(),
            price: "9.99".to_string(),
            product_key: "wid-01".to_string(),
            type_product: Some(hardware()),
            product_status: true,
        };

        let product = form.to_product(None).unwrap();
        assert_eq!(product.product_name, "WIDGET");
        assert_eq!(product.key, "WID-01");
        assert_eq!(product.price, Decimal::new(999, 2));
        assert!(product.id_product.is_none());
    }

    #[test]
    fn test_product_form_requires_type() {
        let form = ProductForm {
            product_name: "widget".to_string(),
            price: "1".to_string(),
            product_key: "w".to_string(),
            ..ProductForm::default()
        };
        assert_eq!(form.to_product(None), Err(FormError::Missing("product type")));
    }

    #[test]
    fn test_parse_amount_errors() {
        assert_eq!(parse_amount("cost", ""), Err(FormError::Missing("cost")));
        assert_eq!(parse_amount("cost", "-1"), Err(FormError::Negative("cost")));
        assert!(matches!(
            parse_amount("cost", "ten"),
            Err(FormError::InvalidNumber { field: "cost", .. })
        ));
    }

    #[test]
    fn test_supplier_form_lock_follows_editing() {
        let mut form = SupplierForm::default();
        assert!(!form.supplier_locked());

        form.editing = Some(3);
        assert!(form.supplier_locked());

        form.reset();
        assert!(!form.supplier_locked());
        assert!(form.supplier.is_none());
    }
}
