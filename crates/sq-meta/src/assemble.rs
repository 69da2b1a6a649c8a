use std::collections::HashMap;
use std::path::Path;

use sq_schema::{FieldKind, StreamSchema, WindowAttr};

use crate::error::{MetaError, MetaResult};
use crate::published::PublishedSet;
use crate::qtree::{QueryNode, QueryTree};

/// The final artifact: published query name to result-stream schema.
pub type SchemaMap = HashMap<String, StreamSchema>;

/// Derive the schema map for a compiler output directory.
///
/// Only nodes named in the output specification get an entry. Low-level
/// nodes are folded in first, high-level nodes second, so a name present
/// at both tiers ends up with the high-level schema. That overwrite order
/// is a contract the runtime relies on, not an accident.
///
/// Any failure aborts the whole assembly; no partial map is returned.
pub fn build_schema_map(dir: &Path) -> MetaResult<SchemaMap> {
    let published = PublishedSet::load(dir)?;
    let tree = QueryTree::load(dir)?;

    let mut map = SchemaMap::new();
    fold_tier(&tree.lftas, &published, &mut map)?;
    fold_tier(&tree.hftas, &published, &mut map)?;
    Ok(map)
}

/// Number of high-level operator nodes in the query tree, regardless of
/// what the output specification publishes. The runtime sizes its process
/// pool from this before any schema is needed.
pub fn count_high_level_nodes(dir: &Path) -> MetaResult<usize> {
    Ok(QueryTree::load(dir)?.hfta_count())
}

fn fold_tier(
    nodes: &[QueryNode],
    published: &PublishedSet,
    map: &mut SchemaMap,
) -> MetaResult<()> {
    for node in nodes {
        if !published.contains(&node.name) {
            continue;
        }
        map.insert(node.name.clone(), build_schema(node)?);
    }
    Ok(())
}

fn build_schema(node: &QueryNode) -> MetaResult<StreamSchema> {
    let mut builder = StreamSchema::builder();
    for field in &node.fields {
        let kind: FieldKind =
            field
                .type_token
                .parse()
                .map_err(|source| MetaError::UnknownType {
                    node: node.name.clone(),
                    field: field.name.clone(),
                    source,
                })?;
        builder.add_field(
            field.name.clone(),
            kind,
            WindowAttr::from_mods(field.mods.as_deref()),
        );
    }
    Ok(builder.build())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
