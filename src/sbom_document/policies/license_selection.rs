use crate::sbom_document::domain::LicenseChoice;

/// LicenseSelection policy for flattening a multi-valued license list
///
/// A CSV cell holds a single value, so only the first license entry is kept
/// and every later entry is dropped.
pub struct LicenseSelection;

impl LicenseSelection {
    /// Returns the id of the first license entry, or "" when there is none
    ///
    /// An entry without an `id` (e.g. an SPDX expression) yields "" as well;
    /// later entries are not consulted.
    pub fn first_license_id(licenses: &[LicenseChoice]) -> &str {
        licenses
            .first()
            .map(|choice| choice.license.id.as_str())
            .unwrap_or("")
    }
}
