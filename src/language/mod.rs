// Types representing the commands an upstream compiler hands to the backend

mod error;
mod kinds;
mod types;

// Re-export all public symbols
pub use error::*;
pub use kinds::*;
pub use types::*;
