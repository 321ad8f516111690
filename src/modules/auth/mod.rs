//! Authentication module.
//!
//! Registration and login. Login issues a signed token, but no route in the
//! API requires one.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;

pub use router::init_auth_router;
