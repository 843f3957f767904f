// Caller geolocation and region-based pricing selection.

pub mod client;
pub mod detector;
pub mod handlers;
pub mod models;
pub mod pricing;
