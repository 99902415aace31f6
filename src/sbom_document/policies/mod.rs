pub mod hash_policy;
pub mod license_selection;

pub use hash_policy::HashPolicy;
pub use license_selection::LicenseSelection;
