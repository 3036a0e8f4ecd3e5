pub mod client;
pub mod error;

pub use client::{DictionaryClient, Lookup};
pub use error::LookupError;
