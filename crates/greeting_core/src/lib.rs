//! Shared greeting upload domain primitives.
//!
//! This crate owns the upload-record contract and object naming. It
//! intentionally excludes AWS SDK and Lambda runtime concerns.

pub mod contract;
pub mod storage_keys;
