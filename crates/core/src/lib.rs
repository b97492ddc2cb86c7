#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod panels;
pub mod time;

pub use catalog::{Catalog, CatalogError};
pub use time::Clock;

/// Number of scenarios drawn for one assessment run.
pub const QUESTIONS_PER_SESSION: usize = 5;
