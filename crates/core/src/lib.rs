//! Domain types and the in-memory item registry.
//!
//! The HTTP layer in `itemreg-api` is a thin shell over [`registry::ItemRegistry`];
//! everything that decides whether a request succeeds lives here.

pub mod error;
pub mod id;
pub mod item;
pub mod registry;
pub mod validation;
