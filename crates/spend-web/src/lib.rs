//! # spend-web
//!
//! Serves the customer spend form over HTTP and renders the model's
//! next-30-day spend estimate. Also exposes the same prediction as JSON.

pub mod app;
pub mod http;
pub mod pages;
pub mod server;
pub mod service;

pub use app::App;
pub use server::Server;
pub use service::{Prediction, PredictionService};
