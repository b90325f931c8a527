//! Core library exports for the Stockroom inventory service.
//!
//! With only the `data` feature the crate exposes the domain model and the
//! Diesel-backed repository. The default `server` feature adds the request
//! services, JSON routes and the PDF report renderer used by the binary.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod report;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
