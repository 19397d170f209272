// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - ProductsPage: product listing with search and delete
// - ProductFormPage: add or edit a product and its suppliers

pub mod products;
pub mod product_form;

// Re-export page components
pub use products::ProductsPage;
pub use product_form::ProductFormPage;
