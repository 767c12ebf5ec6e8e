//! Error types for Markdown rendering and site generation.

use std::path::PathBuf;

use crate::span::SpanKind;

/// Result alias used throughout the rendering pipeline.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error raised while parsing Markdown or rendering the HTML tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An emphasis or code delimiter has no closing partner.
    #[error("no closing delimiter found ({delimiter})")]
    UnbalancedDelimiter { delimiter: String },

    /// A span kind was used where it cannot be represented.
    #[error("invalid span kind: {kind:?}")]
    InvalidSpanKind { kind: SpanKind },

    /// A leaf node has no value to render.
    #[error("leaf node has no value")]
    MissingValue,

    /// A parent node has no tag.
    #[error("parent node has no tag")]
    MissingTag,

    /// A parent node has no children.
    #[error("parent node <{tag}> has no children")]
    EmptyChildren { tag: String },

    /// A block type name is not recognized.
    #[error("unknown block type: {0}")]
    UnknownBlockType(String),

    /// The document does not start with a level-1 heading.
    #[error("markdown has no h1 header")]
    NoTitle,
}

/// Error raised while building a site on disk.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// I/O error on a specific path.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// A Markdown page failed to render.
    #[error("failed to render {}: {source}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: Error,
    },
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
