//! Positional constraints and their normalization from TOML

use crate::error::{OrdinalError, Result};
use std::fmt;

/// Which side of its target a relative constraint places an item
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

impl Side {
    /// The other side
    pub fn opposite(self) -> Self {
        match self {
            Side::Before => Side::After,
            Side::After => Side::Before,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Before => "before",
            Side::After => "after",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The positional constraint declared by an item.
///
/// `Before` and `After` name their target by item name. The target does not
/// need to precede the item in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Position {
    /// No preference
    #[default]
    None,
    /// Ahead of unconstrained items, in first-come order among `First` items
    First,
    /// After every item placed so far
    Last,
    /// Immediately before the named item
    Before(String),
    /// Immediately after the named item
    After(String),
}

impl Position {
    /// The side and target name of a relative constraint
    pub fn target(&self) -> Option<(Side, &str)> {
        match self {
            Position::Before(t) => Some((Side::Before, t)),
            Position::After(t) => Some((Side::After, t)),
            _ => None,
        }
    }

    /// Normalize a raw TOML position value declared by `item`.
    ///
    /// Accepted shapes are the strings `"none"`, `"first"` and `"last"`, and a
    /// table holding exactly one string-valued `before` or `after` key.
    pub fn from_toml(item: &str, value: &toml::Value) -> Result<Self> {
        let invalid = || OrdinalError::InvalidPositionShape {
            item: item.to_string(),
            shape: value.to_string(),
        };

        match value {
            toml::Value::String(s) => match s.as_str() {
                "none" => Ok(Position::None),
                "first" => Ok(Position::First),
                "last" => Ok(Position::Last),
                _ => Err(invalid()),
            },
            toml::Value::Table(table) => {
                if table.len() != 1 {
                    return Err(invalid());
                }
                match (table.get("before"), table.get("after")) {
                    (Some(toml::Value::String(t)), None) => Ok(Position::Before(t.clone())),
                    (None, Some(toml::Value::String(t))) => Ok(Position::After(t.clone())),
                    _ => Err(invalid()),
                }
            }
            _ => Err(invalid()),
        }
    }

    /// Canonical TOML value for this position; `None` has no value
    pub fn to_toml(&self) -> Option<toml::Value> {
        match self {
            Position::None => None,
            Position::First => Some(toml::Value::String("first".into())),
            Position::Last => Some(toml::Value::String("last".into())),
            Position::Before(_) | Position::After(_) => {
                let (side, target) = self.target()?;
                let mut table = toml::map::Map::new();
                table.insert(
                    side.as_str().to_string(),
                    toml::Value::String(target.to_string()),
                );
                Some(toml::Value::Table(table))
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::None => f.write_str("none"),
            Position::First => f.write_str("first"),
            Position::Last => f.write_str("last"),
            Position::Before(t) => write!(f, "before:{}", t),
            Position::After(t) => write!(f, "after:{}", t),
        }
    }
}
