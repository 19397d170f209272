// web_app/model/mod.rs - Shared data models for client and server
//
// These structs mirror the JSON the inventory API speaks and are used on
// both sides of the server function boundary.
//
// Submodules hold the per-view state built on top of them:
// - forms.rs: product form and supplier sub-form
// - suppliers.rs: working list of supplier associations
// - listing.rs: state of the product listing page
// - editor.rs: state of the add/edit product page
// - route.rs: client routes and their titles

pub mod editor;
pub mod forms;
pub mod listing;
pub mod route;
pub mod suppliers;

pub use editor::{FormMode, ProductEditor};
pub use forms::{FormError, ProductForm, SupplierForm};
pub use listing::ProductListing;
pub use route::AppRoute;
pub use suppliers::{Removal, SupplierList};

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Product category, read-only reference data
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeProduct {
    pub id_type_product: i64,
    #[serde(default)]
    pub type_product_name: String,
}

/// Product as stored by the inventory API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Assigned by the server on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_product: Option<i64>,
    pub product_name: String,
    pub key: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub product_status: bool,
    pub type_product: TypeProduct,
}

/// Supplier, read-only reference data
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id_supplier: i64,
    #[serde(default)]
    pub supplier_name: String,
}

/// Product reference nested in association records returned by the API
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRef {
    pub id_product: i64,
}

fn active() -> bool {
    true
}

/// Link between a product and a supplier with the supplier's SKU and cost
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierProduct {
    #[serde(default)]
    pub id_supplier: i64,
    #[serde(default)]
    pub supplier_name: String,
    #[serde(default)]
    pub id_product: Option<i64>,
    /// `None` until the association has been persisted
    #[serde(default)]
    pub id_product_supplier: Option<i64>,
    pub supplier_product_key: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub supplier_cost: Decimal,
    /// `false` marks a soft-removed association
    #[serde(default = "active")]
    pub product_supplier_status: bool,
    #[serde(default, skip_serializing)]
    pub product: Option<ProductRef>,
    #[serde(default, skip_serializing)]
    pub supplier: Option<Supplier>,
}

impl SupplierProduct {
    /// New in-memory association, not yet known to the server
    pub fn new(supplier: &Supplier, supplier_product_key: String, supplier_cost: Decimal) -> Self {
        Self {
            id_supplier: supplier.id_supplier,
            supplier_name: supplier.supplier_name.clone(),
            id_product: None,
            id_product_supplier: None,
            supplier_product_key,
            supplier_cost,
            product_supplier_status: true,
            product: None,
            supplier: None,
        }
    }

    /// Copy the nested product/supplier fields of a fetched record onto the
    /// flat fields the editor works with.
    pub fn denormalize(mut self) -> Self {
        if let Some(product) = &self.product {
            self.id_product = Some(product.id_product);
        }
        if let Some(supplier) = &self.supplier {
            self.id_supplier = supplier.id_supplier;
            self.supplier_name = supplier.supplier_name.clone();
        }
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id_product_supplier.is_some()
    }
}

/// Body of the endpoints that take a single product id
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductIdRequest {
    pub id_product: i64,
}

/// Body of the search endpoint. `None` means "no constraint".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub key: Option<String>,
    pub type_product_id: Option<i64>,
}

/// Errors raised while talking to the inventory API
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },
    #[error("{endpoint} answered with HTTP {status}")]
    Status { endpoint: String, status: u16 },
    #[error("could not decode {endpoint} response: {message}")]
    Decode { endpoint: String, message: String },
    #[error("{endpoint} reported failure")]
    Rejected { endpoint: String },
    #[error("server function failed: {0}")]
    Server(String),
}

/// `{ok, result}` wrapper returned by every endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope {
    pub ok: bool,
    #[serde(default)]
    pub result: serde_json::Value,
}

impl Envelope {
    /// Decode `result` into `T` once `ok` says the call succeeded.
    pub fn into_result<T: DeserializeOwned>(self, endpoint: &str) -> Result<T, ApiError> {
        if !self.ok {
            return Err(ApiError::Rejected {
                endpoint: endpoint.to_string(),
            });
        }
        serde_json::from_value(self.result).map_err(|e| ApiError::Decode {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Message shown to the user after an action finishes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Actions that wait for the user to confirm them
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingAction {
    DeleteProduct(i64),
    RemoveSupplier(i64),
    CommitSupplierEdit,
    SaveProduct,
    UpdateProduct,
}

impl PendingAction {
    /// Question asked in the confirmation dialog
    pub fn prompt(&self) -> &'static str {
        match self {
            PendingAction::DeleteProduct(_) => "Delete product?",
            PendingAction::RemoveSupplier(_) => "Remove supplier?",
            PendingAction::CommitSupplierEdit => "Save changes?",
            PendingAction::SaveProduct => "Save product?",
            PendingAction::UpdateProduct => "Edit product?",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_product_serializes_camel_case_without_id() {
        let product = Product {
            id_product: None,
            product_name: "WIDGET".to_string(),
            key: "WID-1".to_string(),
            price: Decimal::from_str("12.50").unwrap(),
            product_status: true,
            type_product: TypeProduct {
                id_type_product: 3,
                type_product_name: "Hardware".to_string(),
            },
        };

        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("idProduct").is_none());
        assert_eq!(json["productName"], "WIDGET");
        assert_eq!(json["price"], 12.5);
        assert_eq!(json["typeProduct"]["idTypeProduct"], 3);
    }

    #[test]
    fn test_supplier_product_defaults_to_active() {
        let json = r#"{
            "idProductSupplier": 9,
            "supplierProductKey": "SKU-9",
            "supplierCost": 4.25,
            "product": {"idProduct": 7},
            "supplier": {"idSupplier": 2, "supplierName": "ACME"}
        }"#;

        let record: SupplierProduct = serde_json::from_str(json).unwrap();
        assert!(record.product_supplier_status);
        assert_eq!(record.id_supplier, 0);

        let record = record.denormalize();
        assert_eq!(record.id_product, Some(7));
        assert_eq!(record.id_supplier, 2);
        assert_eq!(record.supplier_name, "ACME");
        assert!(record.is_persisted());
    }

    #[test]
    fn test_supplier_product_skips_nested_fields_on_the_wire() {
        let record = SupplierProduct {
            product: Some(ProductRef { id_product: 1 }),
            ..SupplierProduct::new(
                &Supplier {
                    id_supplier: 4,
                    supplier_name: "BOLT CO".to_string(),
                },
                "B-1".to_string(),
                Decimal::new(10, 0),
            )
        };

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("product").is_none());
        assert!(json.get("supplier").is_none());
        assert!(json["idProductSupplier"].is_null());
        assert_eq!(json["productSupplierStatus"], true);
    }

    #[test]
    fn test_envelope_into_result() {
        let envelope: Envelope = serde_json::from_str(r#"{"ok": true, "result": "deleted"}"#).unwrap();
        let status: String = envelope.into_result("/delete").unwrap();
        assert_eq!(status, "deleted");
    }

    #[test]
    fn test_envelope_rejected_ignores_result_shape() {
        let envelope: Envelope =
            serde_json::from_str(r#"{"ok": false, "result": "duplicate key"}"#).unwrap();
        let err = envelope.into_result::<Product>("/create").unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                endpoint: "/create".to_string()
            }
        );
    }

    #[test]
    fn test_envelope_decode_error() {
        let envelope: Envelope = serde_json::from_str(r#"{"ok": true, "result": 42}"#).unwrap();
        let err = envelope.into_result::<Vec<Supplier>>("/suppliers").unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn test_search_criteria_serializes_nulls() {
        let json = serde_json::to_value(SearchCriteria::default()).unwrap();
        assert!(json["key"].is_null());
        assert!(json["typeProductId"].is_null());
    }

    #[test]
    fn test_pending_action_prompts() {
        assert_eq!(PendingAction::DeleteProduct(1).prompt(), "Delete product?");
        assert_eq!(PendingAction::RemoveSupplier(1).prompt(), "Remove supplier?");
        assert_eq!(PendingAction::CommitSupplierEdit.prompt(), "Save changes?");
    }
}
