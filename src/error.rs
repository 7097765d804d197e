use thiserror::Error;

/// Failures while fetching the listings document
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("data source returned status {0}")]
    Status(u16),

    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("listings document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures of the persisted key-value slot behind the favorites
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_failures_convert_to_encode_errors() {
        let json_err = serde_json::from_str::<Vec<String>>("[").unwrap_err();
        let err = StorageError::from(json_err);

        assert!(matches!(err, StorageError::Encode(_)));
        assert!(err.to_string().starts_with("storage encoding error"));
    }
}
