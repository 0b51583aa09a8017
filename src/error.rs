use thiserror::Error;

/// Errors raised while computing or parsing catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The ring `Z_n` is only catalogued for `n >= 2`.
    #[error("invalid ring Z_{n}: n must be at least 2")]
    InvalidRing { n: u64 },

    /// A component description or filter token could not be parsed.
    #[error("invalid component token '{token}': {reason}")]
    Parse { token: String, reason: String },

    /// Raised only in strict mode, when some component of the exact graph is neither a clique nor
    /// complete bipartite.
    #[error("Z_{n} has {count} unclassified component(s) in its exact zero-divisor graph")]
    Unclassified { n: u64, count: usize },
}

impl CatalogError {
    pub(crate) fn parse(token: &str, reason: impl Into<String>) -> Self {
        CatalogError::Parse {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = CatalogError> = core::result::Result<T, E>;
