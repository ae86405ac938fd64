use duel_battle::IngestError;
use thiserror::Error;

/// Why a catalog lookup produced nothing usable
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{0} is not in the catalog")]
    NotFound(String),

    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid catalog document: {0:#}")]
    Decode(anyhow::Error),

    #[error("Catalog record rejected: {0}")]
    Ingest(#[from] IngestError),
}

impl CatalogError {
    /// Transport failures and 5xx responses are worth another attempt
    pub fn is_retryable(&self) -> bool {
        match self {
            CatalogError::Http(e) => e.status().is_none_or(|status| status.is_server_error()),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_transport_errors_retry() {
        assert!(!CatalogError::NotFound("missingno".to_string()).is_retryable());
        assert!(!CatalogError::Decode(anyhow::anyhow!("bad json")).is_retryable());
        assert!(!CatalogError::Ingest(IngestError::UnknownType("shadow".to_string())).is_retryable());
    }

    #[test]
    fn test_messages() {
        let err = CatalogError::NotFound("missingno".to_string());
        assert_eq!(err.to_string(), "missingno is not in the catalog");

        let err = CatalogError::Ingest(IngestError::MissingField("type"));
        assert!(err.to_string().starts_with("Catalog record rejected"));
    }
}
