//! Backend errors and their HTTP rendering.

pub mod conversion;
pub mod types;

pub use types::BackendError;
