use serde::Serialize;

use crate::field::{FieldKind, WindowAttr};

/// A single field of a query result stream, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: FieldKind,
    pub window: WindowAttr,
}

/// The schema of one query result stream: an ordered, immutable sequence of
/// fields. Identified externally by the owning query node's name.
///
/// Built once via [`StreamSchema::builder`]; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StreamSchema {
    fields: Vec<FieldDescriptor>,
}

impl StreamSchema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder { fields: Vec::new() }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Accumulates fields in call order and freezes them into a [`StreamSchema`].
///
/// Duplicate field names are not rejected here; the schema mirrors the
/// compiler artifact as-is, in document order.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldDescriptor>,
}

impl SchemaBuilder {
    pub fn add_field(
        &mut self,
        name: impl Into<String>,
        kind: FieldKind,
        window: WindowAttr,
    ) -> &mut Self {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            kind,
            window,
        });
        self
    }

    pub fn build(self) -> StreamSchema {
        StreamSchema {
            fields: self.fields,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_call_order() {
        let mut b = StreamSchema::builder();
        b.add_field("timestamp", FieldKind::Int, WindowAttr::Increasing);
        b.add_field("s", FieldKind::Float, WindowAttr::None);
        b.add_field("who", FieldKind::VStr, WindowAttr::None);
        let schema = b.build();

        let names: Vec<&str> = schema.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["timestamp", "s", "who"]);
    }

    #[test]
    fn builder_empty() {
        let schema = StreamSchema::builder().build();
        assert!(schema.is_empty());
        assert_eq!(schema.len(), 0);
    }

    #[test]
    fn builder_keeps_duplicate_names() {
        let mut b = StreamSchema::builder();
        b.add_field("x", FieldKind::Int, WindowAttr::None);
        b.add_field("x", FieldKind::Llong, WindowAttr::Decreasing);
        let schema = b.build();

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.fields()[0].kind, FieldKind::Int);
        assert_eq!(schema.fields()[1].kind, FieldKind::Llong);
    }

    #[test]
    fn schema_serializes_as_field_array() {
        let mut b = StreamSchema::builder();
        b.add_field("timestamp", FieldKind::Int, WindowAttr::Increasing);
        let json = serde_json::to_value(b.build()).unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                { "name": "timestamp", "kind": "int", "window": "increasing" }
            ])
        );
    }
}
