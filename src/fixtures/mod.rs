// fixtures/mod.rs - Test fixtures module
//
// Reusable sample data and an in-memory stand-in for the inventory API.
// Tests build on these instead of repeating catalog setup:
//
//   let api = InMemoryInventory::seeded();
//   let outcome = submit_new_product(&api, &editor).await;
//   assert_eq!(api.calls().len(), 2);

pub mod catalog;
pub mod inventory;

pub use inventory::{Call, InMemoryInventory};
