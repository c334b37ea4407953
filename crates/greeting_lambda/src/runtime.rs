pub use greeting_core::{contract, storage_keys};
