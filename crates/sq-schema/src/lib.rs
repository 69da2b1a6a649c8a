mod field;
mod schema;

pub use field::{FieldKind, UnknownTypeToken, WindowAttr};
pub use schema::{FieldDescriptor, SchemaBuilder, StreamSchema};
