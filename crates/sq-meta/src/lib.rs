//! Extraction of per-query stream schemas from the metadata artifacts
//! written by the continuous-query SQL compiler.
//!
//! The compiler leaves two files in its output directory: `qtree.xml`, a
//! tree of compiled query operators (high-level `HFTA` nodes, one per
//! distinct query, fed by low-level `LFTA` instances), and
//! `output_spec.cfg`, the list of queries whose results are published to
//! external consumers. This crate parses both and derives the
//! name-to-schema mapping the runtime needs to wire up operator processes.

mod assemble;
mod error;
mod published;
mod qtree;

pub use assemble::{SchemaMap, build_schema_map, count_high_level_nodes};
pub use error::{MetaError, MetaResult};
pub use published::PublishedSet;
pub use qtree::{QTreeParseError, QueryNode, QueryTree, RawField};

/// File name of the query-tree artifact within a compiler output directory.
pub const QTREE_FILE: &str = "qtree.xml";

/// File name of the output specification within a compiler output directory.
pub const OUTPUT_SPEC_FILE: &str = "output_spec.cfg";
