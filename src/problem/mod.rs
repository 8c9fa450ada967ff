// Warnings and errors recorded while rendering

mod diagnostics;
mod present;

// Re-export all public symbols
pub use diagnostics::*;
pub use present::*;
