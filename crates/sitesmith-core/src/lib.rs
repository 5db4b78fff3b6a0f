//! Core domain models for sitesmith
//!
//! This crate contains:
//! - Input model (Configuration, BusinessData, ExternalContent)
//! - Resolved content model (ContentBundle)
//! - Output model (Artifact, ArtifactKind, ArtifactManifest)
//! - The artifact path layout shared by the assembler and the checker

pub mod artifact;
pub mod config;
pub mod content;
pub mod error;
pub mod layout;

pub use artifact::{Artifact, ArtifactKind, ArtifactManifest};
pub use config::{
    BusinessData, Configuration, ExternalContent, ExternalServiceEntry, ExternalTestimonialEntry,
};
pub use content::{ContentBundle, ServiceEntry, TestimonialEntry};
pub use error::{CoreError, Result};
