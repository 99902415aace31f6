use crate::sbom_document::domain::Hash;

/// Policy deciding which hash fills the `hash-md5` column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashPolicy {
    /// First hash entry regardless of its algorithm (default, compatible output)
    #[default]
    First,
    /// First hash whose algorithm is MD5
    Md5,
}

impl HashPolicy {
    /// Selects the digest for the column, or "" when nothing matches
    pub fn select(self, hashes: &[Hash]) -> &str {
        let selected = match self {
            HashPolicy::First => hashes.first(),
            HashPolicy::Md5 => hashes.iter().find(|h| is_md5(&h.alg)),
        };
        selected.map(|h| h.content.as_str()).unwrap_or("")
    }
}

/// "MD5", "md5" and "Md-5" all name the same algorithm
fn is_md5(alg: &str) -> bool {
    alg.replace('-', "").eq_ignore_ascii_case("md5")
}

impl std::str::FromStr for HashPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(HashPolicy::First),
            "md5" => Ok(HashPolicy::Md5),
            _ => Err(format!(
                "Invalid hash policy: {}. Please specify 'first' or 'md5'",
                s
            )),
        }
    }
}

impl std::fmt::Display for HashPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashPolicy::First => write!(f, "first"),
            HashPolicy::Md5 => write!(f, "md5"),
        }
    }
}
