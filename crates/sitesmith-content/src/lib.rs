//! Page content resolution
//!
//! Resolves the textual content used to populate generated pages: an
//! externally supplied bundle when present, otherwise a static per-industry
//! fallback table. Whatever the path, the resolved bundle never carries an
//! empty services or testimonials list.

pub mod industries;
pub mod resolver;

pub use resolver::resolve;
