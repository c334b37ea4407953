//! AWS-oriented adapters and handler for the greeting upload function.
//!
//! This crate owns runtime integration details (the Lambda entry point and
//! the object-store adapter) and exposes a single runtime module boundary
//! for the upload contract and object naming primitives.

pub mod adapters;
pub mod handlers;
pub mod runtime;
