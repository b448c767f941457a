//! Ports (interfaces) for the application layer
//!
//! Ports define the boundaries between the application and the outside
//! world. Adapters in the infrastructure layer implement these ports.

pub mod lookup_tool;
