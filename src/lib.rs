// Library exports for the oversight portal
// The binary and the integration tests both build the app from here

pub mod config;
pub mod error;
pub mod extractors;
pub mod feed;
pub mod routes;
pub mod session;
pub mod state;
pub mod toast;
