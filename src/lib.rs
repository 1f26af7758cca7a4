//! Declarative documentation generator.
//!
//! Reads a JSON doc model describing types and their members and renders
//! one HTML page per type. Member sections are assembled by builders that
//! sequence calls against writer traits, keeping rendering substitutable.

pub mod builders;
pub mod cli;
pub mod content;
pub mod html;
pub mod members;
pub mod model;
pub mod options;
pub mod output;
pub mod workflow;
pub mod writer;
