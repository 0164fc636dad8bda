//! JSON persistence over the key-value store.
//!
//! A collection is one JSON array under one key, always read and written
//! whole. Records pass through a mapper on the way in so legacy shapes are
//! normalised exactly once, at load time.

mod json_collection;
pub mod mappers;

pub(crate) use json_collection::{decode_document, JsonCollection, StoredRecord};
