pub mod component;
pub mod document;
mod lenient;

pub use component::{Component, ExternalReference, Hash, License, LicenseChoice};
pub use document::{Bom, Dependency, Metadata, Tool};
