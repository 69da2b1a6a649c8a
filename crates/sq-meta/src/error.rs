use std::path::PathBuf;

use sq_schema::UnknownTypeToken;

use crate::qtree::QTreeParseError;

/// Failures while deriving schemas from the compiler artifacts.
///
/// Every variant is fatal to the calling operation: no partial schema map
/// is ever returned, and no retry happens here. Logging and exit policy
/// belong to the caller.
#[derive(Debug, thiserror::Error)]
pub enum MetaError {
    #[error("reading {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: QTreeParseError,
    },
    #[error("unknown type for field {field:?} of query node {node:?}")]
    UnknownType {
        node: String,
        field: String,
        #[source]
        source: UnknownTypeToken,
    },
}

pub type MetaResult<T> = Result<T, MetaError>;
