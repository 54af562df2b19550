use thiserror::Error;

#[derive(Debug, Error)]
pub enum VenuesError {
    #[error("failed to read venue catalog {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse venue catalog: {0}")]
    CatalogFileParse(#[from] serde_yaml::Error),

    #[error("invalid venue catalog: {0}")]
    Validation(String),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
