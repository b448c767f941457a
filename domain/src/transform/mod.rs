//! Transforms: lookup findings reshaped as graph entities

pub mod entity;

pub use entity::{Entity, Record, TransformError, profiles_from_records};
