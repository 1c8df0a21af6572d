//! Pure domain logic for the movie catalog.
//!
//! Types, errors, input validation, pagination and statistics. Nothing in
//! this crate touches the filesystem or the network.

pub mod error;
pub mod movie;
pub mod pagination;
pub mod stats;
pub mod types;
pub mod validation;
