//! Item (snippet) module.
//!
//! Unauthenticated list, create and delete over loosely-typed items.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;

pub use router::init_items_router;
