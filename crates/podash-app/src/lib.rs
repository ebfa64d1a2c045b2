//! Application service layer
//!
//! Ties the collaborators together: configuration, the fetch+parse refresh
//! cycle with last-good-model semantics, and the textual digest handed to
//! the insight client.

pub mod config;
pub mod digest;
pub mod service;

pub use config::Config;
pub use digest::model_digest;
pub use service::DashboardService;
