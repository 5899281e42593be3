//! API route modules
//!
//! - [`auth`] - login / logout / session check
//! - [`products`] - catalog reads and admin mutations
//! - [`images`] - raw asset serving
//! - [`admin`] - aggregate statistics

pub mod admin;
pub mod auth;
pub mod images;
pub mod products;
