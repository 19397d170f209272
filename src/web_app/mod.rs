// web_app/mod.rs - Root module for the Leptos web application
//
// This module contains all the components and logic for the inventory
// front end built with the Leptos framework.
//
// Architecture:
// - model/: Shared data types and per-view state (used by both client and server)
// - workflow.rs: Multi-step actions over the InventoryApi trait
// - server_fns/: Server function declarations (both client and server)
// - api/: Outbound HTTP client for the inventory API (SSR only)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;

pub mod workflow;

// Server function declarations - must be available to both client and server
// The #[server] macro generates client stubs that call the server via HTTP
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

// API module for the outbound HTTP client (SSR only)
#[cfg(feature = "ssr")]
pub mod api;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
