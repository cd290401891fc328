pub mod analytics;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod models;
pub mod store;
#[cfg(test)]
pub mod test_helpers;
