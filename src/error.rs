use std::path::PathBuf;
use thiserror::Error;

/// Everything here is fatal to the invocation: the merger never retries and
/// never produces a partial result. Retry belongs to the external scheduler.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("failed to open shard file `{path}`")]
    OpenShard {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt record in shard file `{path}`")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to create output file `{path}`")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output file `{path}`")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
