pub mod controller;

pub use controller::{LookupController, SearchState};
