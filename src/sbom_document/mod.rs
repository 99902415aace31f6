/// Domain layer - CycloneDX document model and projection rules
///
/// Nothing in this module touches the filesystem or the console;
/// infrastructure is reached only through ports.
pub mod domain;
pub mod policies;
pub mod services;
