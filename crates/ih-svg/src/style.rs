//! Inline `style` attribute declarations.

use std::fmt;

/// Parsed `prop: value; ...` list in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclarations {
    decls: Vec<(String, String)>,
}

impl StyleDeclarations {
    /// Parse a style attribute. Malformed declarations (no colon, empty
    /// property name) are dropped.
    #[must_use]
    pub fn parse(style: &str) -> Self {
        let decls = style
            .split(';')
            .filter_map(|decl| {
                let (name, value) = decl.split_once(':')?;
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                Some((name.to_ascii_lowercase(), value.trim().to_string()))
            })
            .collect();
        Self { decls }
    }

    /// Value of the last declaration of `property`, as CSS cascading would
    /// pick it.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls
            .iter()
            .rev()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Replace every declaration of `property` with a single one holding
    /// `value`, keeping the position of the first.
    pub fn set(&mut self, property: &str, value: &str) {
        let mut seen = false;
        self.decls.retain_mut(|(name, existing)| {
            if name != property {
                return true;
            }
            if seen {
                return false;
            }
            seen = true;
            *existing = value.to_string();
            true
        });
        if !seen {
            self.decls.push((property.to_string(), value.to_string()));
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl fmt::Display for StyleDeclarations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, value)) in self.decls.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}
