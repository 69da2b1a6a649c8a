use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// FieldKind
// ---------------------------------------------------------------------------

/// A type token outside the compiler's fixed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field type token {0:?}")]
pub struct UnknownTypeToken(pub String);

/// Canonical field types carried by query result streams.
///
/// The SQL compiler emits a wider set of source tokens; each collapses onto
/// one of these four canonical kinds. The vocabulary is closed: any token
/// not in the table is a compiler/config bug and must surface as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// 32-bit integer family: `int`, `uint`, `ushort`, `bool`.
    Int,
    /// 64-bit integer family: `llong`, `ullong`.
    Llong,
    /// Single-precision float: `float`.
    Float,
    /// Variable-length string family: `v_str`, `string`, `vstring`.
    VStr,
}

impl FromStr for FieldKind {
    type Err = UnknownTypeToken;

    /// Canonicalize a source type token. Matching is case-insensitive.
    fn from_str(token: &str) -> Result<Self, UnknownTypeToken> {
        match token.to_ascii_lowercase().as_str() {
            "int" | "uint" | "ushort" | "bool" => Ok(Self::Int),
            "llong" | "ullong" => Ok(Self::Llong),
            "float" => Ok(Self::Float),
            "v_str" | "string" | "vstring" => Ok(Self::VStr),
            _ => Err(UnknownTypeToken(token.to_string())),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "int",
            Self::Llong => "llong",
            Self::Float => "float",
            Self::VStr => "v_str",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// WindowAttr
// ---------------------------------------------------------------------------

/// Per-field monotonicity hint used by downstream aggregation to bound
/// state retention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowAttr {
    Increasing,
    Decreasing,
    #[default]
    None,
}

impl WindowAttr {
    /// Classify the optional `mods` attribute of a field element.
    ///
    /// The attribute is free text; classification is a case-insensitive
    /// substring test. "increasing" is checked first and wins if both
    /// keywords appear.
    pub fn from_mods(mods: Option<&str>) -> Self {
        let Some(mods) = mods else {
            return Self::None;
        };
        let mods = mods.to_ascii_lowercase();
        if mods.contains("increasing") {
            Self::Increasing
        } else if mods.contains("decreasing") {
            Self::Decreasing
        } else {
            Self::None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- FieldKind --

    #[test]
    fn canonicalize_int_family() {
        for token in ["int", "uint", "ushort", "bool"] {
            assert_eq!(token.parse::<FieldKind>().unwrap(), FieldKind::Int);
        }
    }

    #[test]
    fn canonicalize_llong_family() {
        assert_eq!("llong".parse::<FieldKind>().unwrap(), FieldKind::Llong);
        assert_eq!("ullong".parse::<FieldKind>().unwrap(), FieldKind::Llong);
    }

    #[test]
    fn canonicalize_float() {
        assert_eq!("float".parse::<FieldKind>().unwrap(), FieldKind::Float);
    }

    #[test]
    fn canonicalize_string_family() {
        for token in ["v_str", "string", "vstring"] {
            assert_eq!(token.parse::<FieldKind>().unwrap(), FieldKind::VStr);
        }
    }

    #[test]
    fn canonicalize_case_insensitive() {
        assert_eq!("INT".parse::<FieldKind>().unwrap(), FieldKind::Int);
        assert_eq!("Float".parse::<FieldKind>().unwrap(), FieldKind::Float);
        assert_eq!("ULLONG".parse::<FieldKind>().unwrap(), FieldKind::Llong);
    }

    #[test]
    fn canonicalize_unknown_token() {
        let err = "blob".parse::<FieldKind>().unwrap_err();
        assert_eq!(err, UnknownTypeToken("blob".to_string()));
    }

    #[test]
    fn canonicalize_empty_token() {
        assert!("".parse::<FieldKind>().is_err());
    }

    // -- WindowAttr --

    #[test]
    fn mods_absent_is_none() {
        assert_eq!(WindowAttr::from_mods(None), WindowAttr::None);
    }

    #[test]
    fn mods_increasing_mixed_case_with_trailing_space() {
        assert_eq!(
            WindowAttr::from_mods(Some("INCREASING ")),
            WindowAttr::Increasing
        );
    }

    #[test]
    fn mods_decreasing() {
        assert_eq!(
            WindowAttr::from_mods(Some("decreasing")),
            WindowAttr::Decreasing
        );
    }

    #[test]
    fn mods_unrecognized_is_none() {
        assert_eq!(WindowAttr::from_mods(Some("xyz")), WindowAttr::None);
    }

    #[test]
    fn mods_increasing_wins_over_decreasing() {
        assert_eq!(
            WindowAttr::from_mods(Some("decreasing increasing")),
            WindowAttr::Increasing
        );
    }

    #[test]
    fn mods_substring_match() {
        assert_eq!(
            WindowAttr::from_mods(Some("strictly Increasing by ts")),
            WindowAttr::Increasing
        );
    }

    // -- Serde --

    #[test]
    fn field_kind_serializes_as_canonical_name() {
        assert_eq!(serde_json::to_string(&FieldKind::VStr).unwrap(), "\"v_str\"");
        assert_eq!(serde_json::to_string(&FieldKind::Llong).unwrap(), "\"llong\"");
    }
}
