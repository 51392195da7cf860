//! Item definitions and the trait hosts implement to have their items ordered

use ordinal_core::{Position, Result};
use serde::Deserialize;

/// Anything that can be ordered: a unique name plus a declared position
pub trait Positioned {
    fn name(&self) -> &str;
    fn position(&self) -> &Position;
}

impl<T: Positioned + ?Sized> Positioned for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn position(&self) -> &Position {
        (**self).position()
    }
}

impl<S: AsRef<str>> Positioned for (S, Position) {
    fn name(&self) -> &str {
        self.0.as_ref()
    }

    fn position(&self) -> &Position {
        &self.1
    }
}

/// An item with a normalized position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDef {
    pub name: String,
    pub position: Position,
}

impl ItemDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Position::None,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

impl Positioned for ItemDef {
    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> &Position {
        &self.position
    }
}

/// An item as written in a TOML file, before its position is normalized
#[derive(Debug, Clone, Deserialize)]
pub struct RawItemDef {
    pub name: String,
    #[serde(default)]
    pub position: Option<toml::Value>,
}

impl RawItemDef {
    /// Normalize the raw position value into a `Position`
    pub fn normalize(self) -> Result<ItemDef> {
        let position = match &self.position {
            Some(value) => Position::from_toml(&self.name, value)?,
            None => Position::None,
        };
        Ok(ItemDef {
            name: self.name,
            position,
        })
    }
}

/// TOML file format for item lists
#[derive(Debug, Deserialize)]
pub struct ItemFile {
    #[serde(default)]
    pub item: Vec<RawItemDef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordinal_core::OrdinalError;

    #[test]
    fn test_parse_item_file() {
        let toml_str = r#"
[[item]]
name = "header"
position = "first"

[[item]]
name = "body"

[[item]]
name = "sidebar"
position = { after = "header" }
"#;

        let file: ItemFile = toml::from_str(toml_str).unwrap();
        assert_eq!(file.item.len(), 3);

        let items: Vec<ItemDef> = file
            .item
            .into_iter()
            .map(|raw| raw.normalize().unwrap())
            .collect();
        assert_eq!(items[0].position, Position::First);
        assert_eq!(items[1].position, Position::None);
        assert_eq!(items[2].position, Position::After("header".into()));
    }

    #[test]
    fn test_normalize_reports_item_name() {
        let toml_str = r#"
[[item]]
name = "footer"
position = "bottom"
"#;

        let file: ItemFile = toml::from_str(toml_str).unwrap();
        let raw = file.item.into_iter().next().unwrap();
        let err = raw.normalize().unwrap_err();
        assert!(matches!(
            err,
            OrdinalError::InvalidPositionShape { ref item, .. } if item == "footer"
        ));
    }

    #[test]
    fn test_empty_file() {
        let file: ItemFile = toml::from_str("").unwrap();
        assert!(file.item.is_empty());
    }

    #[test]
    fn test_tuple_positioned() {
        let pair = ("a", Position::Last);
        assert_eq!(pair.name(), "a");
        assert_eq!(pair.position(), &Position::Last);

        let def = ItemDef::new("b").with_position(Position::First);
        let by_ref = &def;
        assert_eq!(Positioned::name(&by_ref), "b");
    }
}
