//! Annotated plain-text backend for desktop-publishing layout workflows.
//!
//! An upstream compiler parses the markup and hands each recognized command
//! to a [`builder::Builder`] as a [`language::Node`]; the builder answers with
//! the text fragment a DTP operator expects, carrying the section numbering,
//! blank line bookkeeping and cross reference labels along the way.

#[macro_use]
mod patterns;

pub mod book;
pub mod builder;
pub mod config;
pub mod language;
pub mod loading;
pub mod locale;
pub mod problem;
