//! Flat-file JSON persistence.

pub mod json_store;

pub use json_store::{DataDir, JsonCollection, StoreError};
