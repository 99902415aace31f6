//! sbom-csv - flatten CycloneDX SBOM documents into CSV reports
//!
//! This library reads a CycloneDX JSON Software Bill of Materials and writes
//! one CSV row per component (`group, name, version, license, scope,
//! description, hash-md5`), following hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`sbom_document`): document model, flattening policies, projection
//! - **Application Layer** (`application`): the conversion use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_csv::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ConvertSbomUseCase::new(
//!     FileSystemReader::new(),
//!     CsvFormatter::new(),
//!     FileSystemWriter::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ConversionRequest::new(
//!     PathBuf::from("bom.json"),
//!     PathBuf::from("inventory.csv"),
//!     HashPolicy::First,
//! );
//! let response = use_case.execute(request)?;
//! println!("{} row(s) written", response.rows_written);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_document;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
    pub use crate::adapters::outbound::formatters::CsvFormatter;
    pub use crate::application::dto::{ConversionRequest, ConversionResponse};
    pub use crate::application::use_cases::ConvertSbomUseCase;
    pub use crate::ports::outbound::{DocumentReader, ProgressReporter, TableFormatter, TableOutput};
    pub use crate::sbom_document::domain::{Bom, Component, Hash, LicenseChoice};
    pub use crate::sbom_document::policies::{HashPolicy, LicenseSelection};
    pub use crate::sbom_document::services::{DocumentDecoder, RowProjector, TableRow, TABLE_HEADER};
    pub use crate::shared::error::{SbomError, WriteFailure};
    pub use crate::shared::Result;
}
