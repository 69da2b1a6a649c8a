use std::path::PathBuf;

use anyhow::{Context, Result};

pub fn run(dir: PathBuf) -> Result<()> {
    let count = sq_meta::count_high_level_nodes(&dir)
        .with_context(|| format!("counting high-level nodes under {}", dir.display()))?;
    tracing::debug!(dir = %dir.display(), count, "counted high-level nodes");
    println!("{count}");
    Ok(())
}
