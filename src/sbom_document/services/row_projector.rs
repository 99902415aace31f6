use crate::sbom_document::domain::Component;
use crate::sbom_document::policies::{HashPolicy, LicenseSelection};

/// Fixed header of the CSV report, in column order
pub const TABLE_HEADER: [&str; 7] = [
    "group",
    "name",
    "version",
    "license",
    "scope",
    "description",
    "hash-md5",
];

/// One flattened report row, borrowing from the projected component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRow<'a> {
    pub group: &'a str,
    pub name: &'a str,
    pub version: &'a str,
    pub license: &'a str,
    pub scope: &'a str,
    pub description: &'a str,
    pub hash: &'a str,
}

impl<'a> TableRow<'a> {
    /// Cells in [`TABLE_HEADER`] order
    pub fn fields(&self) -> [&'a str; 7] {
        [
            self.group,
            self.name,
            self.version,
            self.license,
            self.scope,
            self.description,
            self.hash,
        ]
    }
}

/// RowProjector service mapping components onto report rows
///
/// Multi-valued fields are flattened by the take-first policies:
/// [`LicenseSelection`] for licenses and the configured [`HashPolicy`]
/// for hashes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowProjector {
    hash_policy: HashPolicy,
}

impl RowProjector {
    pub fn new(hash_policy: HashPolicy) -> Self {
        Self { hash_policy }
    }

    pub fn project<'a>(&self, component: &'a Component) -> TableRow<'a> {
        TableRow {
            group: &component.group,
            name: &component.name,
            version: &component.version,
            license: LicenseSelection::first_license_id(&component.licenses),
            scope: &component.scope,
            description: &component.description,
            hash: self.hash_policy.select(&component.hashes),
        }
    }
}
