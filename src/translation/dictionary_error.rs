use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("could not read translation dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("translation dictionary is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
