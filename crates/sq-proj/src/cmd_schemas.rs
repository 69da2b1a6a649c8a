use std::path::PathBuf;

use anyhow::{Context, Result};

pub fn run(dir: PathBuf) -> Result<()> {
    let map = sq_meta::build_schema_map(&dir)
        .with_context(|| format!("deriving schemas under {}", dir.display()))?;
    tracing::debug!(dir = %dir.display(), schemas = map.len(), "derived schema map");

    // serde_json's default map is ordered by key, so the dump is stable
    // regardless of HashMap iteration order.
    let value = serde_json::to_value(&map)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
