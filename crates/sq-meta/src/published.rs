use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{MetaError, MetaResult};

/// The set of query names whose result streams are published to external
/// consumers, read from the output specification artifact.
///
/// A value scoped to one load; independent loads never share state, so
/// repeated assembly over the same directory is idempotent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PublishedSet {
    names: HashSet<String>,
}

impl PublishedSet {
    /// Read the output specification found in `dir`.
    pub fn load(dir: &Path) -> MetaResult<Self> {
        let path = dir.join(crate::OUTPUT_SPEC_FILE);
        let io_err = |source| MetaError::Io {
            path: path.clone(),
            source,
        };
        let file = File::open(&path).map_err(io_err)?;
        Self::from_reader(BufReader::new(file)).map_err(io_err)
    }

    /// Parse the specification from any line source. One record per line,
    /// comma-separated; field 1 is the published query name. Empty lines
    /// are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut names = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            let name = match line.split_once(',') {
                Some((first, _)) => first,
                None => line.as_str(),
            };
            names.insert(name.to_string());
        }
        Ok(Self { names })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
