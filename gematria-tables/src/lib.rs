//! Hebrew letter-value tables for gematria
//!
//! This crate is the leaf of the workspace: it knows the 22 Hebrew letters,
//! their five final forms, and how each [`ValuationScheme`] assigns values
//! to them. Tables are built lazily and shared for the process lifetime.
//!
//! # Example
//!
//! ```rust
//! use gematria_tables::{get_table, ValuationScheme};
//!
//! let table = get_table(ValuationScheme::AbsoluteAlternate);
//! assert_eq!(table.value('ת'), Some(400));
//! assert_eq!(table.value('ץ'), Some(900));
//! assert_eq!(table.value('x'), None);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod scheme;
pub mod table;

pub use error::TableError;
pub use loader::get_table;
pub use scheme::ValuationScheme;
pub use table::{LetterValueTable, BASE_LETTERS, FINAL_FORMS};
