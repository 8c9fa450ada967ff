//! Localized labels: block titles, artifact names and number formats

mod catalog;
mod titles;

pub use catalog::*;
pub use titles::*;
