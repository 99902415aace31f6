use crate::sbom_document::policies::HashPolicy;
use std::path::PathBuf;

/// ConversionRequest - everything one SBOM to CSV run needs
///
/// Built once from the merged CLI flags and config file and handed to the
/// use case; nothing is read from global state afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Path to the CycloneDX JSON document
    pub input_path: PathBuf,
    /// Path of the CSV report to create or truncate
    pub output_path: PathBuf,
    /// Which hash fills the `hash-md5` column
    pub hash_policy: HashPolicy,
}

impl ConversionRequest {
    pub fn new(input_path: PathBuf, output_path: PathBuf, hash_policy: HashPolicy) -> Self {
        Self {
            input_path,
            output_path,
            hash_policy,
        }
    }
}
