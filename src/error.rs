/// Crate-level error types for docsite diagnostics.
use std::path::PathBuf;

/// All errors in docsite carry enough context to produce a useful diagnostic
/// without a debugger. Each variant names the file, slug, or reason for failure.
#[allow(clippy::error_impl_error, reason = "crate-internal error type in binary")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The metadata document exists but is not valid JSON for the tree shape.
    #[error("invalid metadata document {}: {source}", path.display())]
    DocumentInvalid {
        /// Path to the malformed document.
        path: PathBuf,
        /// The wrapped JSON deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The configured metadata document does not exist on disk.
    #[error("metadata document not found: {}", path.display())]
    DocumentNotFound {
        /// Path to the missing document.
        path: PathBuf,
    },

    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// The document root carries no children collection at all, so there is
    /// nothing to generate. Raised before any output directory is touched.
    #[error("document root has no children collection: {}", path.display())]
    MissingChildren {
        /// Path to the document that lacks children.
        path: PathBuf,
    },

    /// A requested slug does not correspond to any node in the tree.
    #[error("no documented entity at `{slug}`")]
    NodeNotFound {
        /// The slug that failed to resolve, joined with `/`.
        slug: String,
    },

    /// TOML deserialization of the config file failed.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),
}
