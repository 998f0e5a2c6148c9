//! Core engine for shelver.
//!
//! Moves ebooks from a source tree into `<destination>/<author>/<title>.<ext>`,
//! reading title and author from each file's own metadata.

pub mod config;
pub mod logging;

pub mod crawl;
pub mod error;
pub mod formats;
pub mod identity;
pub mod naming;
pub mod organizer;
pub mod resolve;
pub mod source;

pub use error::OrganizeError;
pub use formats::{FormatParser, FormatRegistry, ParseError};
pub use identity::Identity;
pub use organizer::{organize, Disposition, OrganizeReport, Organizer};
