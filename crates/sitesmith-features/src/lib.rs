//! Feature token resolution
//!
//! Expands raw feature tokens into the ordered, deduplicated page and
//! component sets that drive artifact generation, and declares which
//! components share a style group instead of carrying a private stylesheet.

pub mod resolver;
pub mod styles;

pub use resolver::{ResolvedFeatures, resolve};
pub use styles::{SHARED_STYLE_GROUPS, shared_style_group, style_groups};
