//! Pattern Catalogue
//!
//! Small, self-contained illustrations of the Gang-of-Four patterns. Each
//! module exposes its types plus a `demo()` returning the lines it would
//! print, so drivers decide where output goes.

pub mod behavioral;
pub mod creational;
pub mod structural;

mod catalogue;
mod error;

pub use catalogue::{Catalogue, Category, Demo, Entry};
pub use error::PatternError;
