//! Core data layer for the copy-trading platform.
//!
//! Holds the synthetic trader universe, the session-scoped current user
//! and the generators that hydrate both. Everything here is in-process
//! and single-owner: views (or the HTTP layer) hold a handle to one
//! [`TraderStore`] and route every query and mutation through it.

pub mod error;
pub mod generator;
pub mod models;
pub mod store;

pub use error::{PlatformError, Result};
pub use store::{FavoriteUpdate, TraderFilter, TraderStore};
