// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Reusable atomic components (Button, Modal, notices, etc.)
// - header.rs: Route-aware page header
// - search.rs: Listing search controls (ProductSearchBar, TypeSelect)
// - product.rs: Product table and product form fields
// - supplier.rs: Supplier sub-form and association table

pub mod common;
pub mod header;
pub mod search;
pub mod product;
pub mod supplier;

// Re-export commonly used components for convenience
pub use common::*;
pub use header::*;
pub use search::*;
pub use product::*;
pub use supplier::*;
