use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{MetaError, MetaResult};

/// A query-tree document that cannot be interpreted.
#[derive(Debug, thiserror::Error)]
pub enum QTreeParseError {
    #[error("malformed query tree document")]
    Xml(#[from] quick_xml::Error),
    #[error("{tag} element missing name attribute")]
    MissingNodeName { tag: String },
    #[error("Field element missing {attr} attribute (node {node:?})")]
    MissingFieldAttr { node: String, attr: &'static str },
}

/// One field attribute set as written by the compiler, not yet
/// canonicalized. `mods` is free text when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    pub name: String,
    pub type_token: String,
    pub mods: Option<String>,
}

/// One compiled operator node. Tier is implied by which list of
/// [`QueryTree`] the node sits in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryNode {
    pub name: String,
    pub fields: Vec<RawField>,
}

/// The parsed `qtree.xml` artifact: high-level and low-level operator
/// nodes, both in document order, each with its fields in document order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryTree {
    pub hftas: Vec<QueryNode>,
    pub lftas: Vec<QueryNode>,
}

impl QueryTree {
    /// Parse the query-tree artifact found in `dir`.
    pub fn load(dir: &Path) -> MetaResult<Self> {
        let path = dir.join(crate::QTREE_FILE);
        let xml = fs::read_to_string(&path).map_err(|source| MetaError::Io {
            path: path.clone(),
            source,
        })?;
        Self::parse_str(&xml).map_err(|source| MetaError::Parse { path, source })
    }

    /// Parse a query-tree document from memory.
    ///
    /// Only `HFTA` and `LFTA` elements and their direct `Field` children
    /// are extracted; operator property elements are skipped. A `Field`
    /// nested deeper than one level below a node does not belong to it.
    pub fn parse_str(xml: &str) -> Result<Self, QTreeParseError> {
        let mut reader = Reader::from_str(xml);
        let mut tree = Self::default();
        // The node currently being filled, and how deep the reader is
        // inside elements nested below it.
        let mut current: Option<(Tier, QueryNode)> = None;
        let mut depth = 0usize;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match e.name().as_ref() {
                    tag @ (b"HFTA" | b"LFTA") if current.is_none() => {
                        current = Some((Tier::of(tag), open_node(&e)?));
                    }
                    b"Field" if depth == 0 && current.is_some() => {
                        if let Some((_, node)) = current.as_mut() {
                            node.fields.push(read_field(&e, &node.name)?);
                        }
                        depth += 1;
                    }
                    _ => {
                        if current.is_some() {
                            depth += 1;
                        }
                    }
                },
                Event::Empty(e) => match e.name().as_ref() {
                    tag @ (b"HFTA" | b"LFTA") if current.is_none() => {
                        tree.push(Tier::of(tag), open_node(&e)?);
                    }
                    b"Field" if depth == 0 && current.is_some() => {
                        if let Some((_, node)) = current.as_mut() {
                            node.fields.push(read_field(&e, &node.name)?);
                        }
                    }
                    _ => {}
                },
                Event::End(_) => {
                    if depth > 0 {
                        depth -= 1;
                    } else if let Some((tier, node)) = current.take() {
                        tree.push(tier, node);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(tree)
    }

    /// Number of high-level operator nodes, independent of publication.
    pub fn hfta_count(&self) -> usize {
        self.hftas.len()
    }

    fn push(&mut self, tier: Tier, node: QueryNode) {
        match tier {
            Tier::High => self.hftas.push(node),
            Tier::Low => self.lftas.push(node),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Tier {
    High,
    Low,
}

impl Tier {
    fn of(tag: &[u8]) -> Self {
        if tag == b"HFTA" { Self::High } else { Self::Low }
    }
}

fn open_node(e: &BytesStart<'_>) -> Result<QueryNode, QTreeParseError> {
    let name = attr_value(e, b"name")?.ok_or_else(|| QTreeParseError::MissingNodeName {
        tag: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
    })?;
    Ok(QueryNode {
        name,
        fields: Vec::new(),
    })
}

fn read_field(e: &BytesStart<'_>, node: &str) -> Result<RawField, QTreeParseError> {
    let missing = |attr| QTreeParseError::MissingFieldAttr {
        node: node.to_string(),
        attr,
    };
    Ok(RawField {
        name: attr_value(e, b"name")?.ok_or_else(|| missing("name"))?,
        type_token: attr_value(e, b"type")?.ok_or_else(|| missing("type"))?,
        mods: attr_value(e, b"mods")?,
    })
}

fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>, QTreeParseError> {
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_ref() == key {
            let value = attr.unescape_value().map_err(quick_xml::Error::from)?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
