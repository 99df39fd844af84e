//! AEB Configurator - Kiosk backend for configuring and quoting transformers.
//!
//! Prices dry-type and oil-immersed transformers from a static catalogue,
//! keeps the kiosk cart and quotation counter, runs the prize wheel that
//! gates the quotation download, and relays the rendered PDF to a public
//! blob store.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
