use super::Element;

/// A compound selector: optional tag, optional `#id`, any number of `.class`.
///
/// Covers what widget configuration needs (`.js-typeahead`, `#main`,
/// `button.primary`). Combinators and attribute selectors are not supported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl Selector {
    /// Parse a selector string. Unrecognized characters end the current
    /// token, so `"div..a"` is read as `div.a`.
    pub fn parse(input: &str) -> Self {
        let mut selector = Self::default();
        let mut current = String::new();
        let mut kind = 't';

        let flush = |selector: &mut Self, kind: char, token: &mut String| {
            if token.is_empty() {
                return;
            }
            let value = std::mem::take(token);
            match kind {
                '#' => selector.id = Some(value),
                '.' => selector.classes.push(value),
                _ => selector.tag = Some(value.to_ascii_lowercase()),
            }
        };

        for c in input.trim().chars() {
            match c {
                '#' | '.' => {
                    flush(&mut selector, kind, &mut current);
                    kind = c;
                }
                c if c.is_alphanumeric() || c == '-' || c == '_' => current.push(c),
                _ => flush(&mut selector, kind, &mut current),
            }
        }
        flush(&mut selector, kind, &mut current);

        selector
    }

    /// True when the selector has no constraints. An empty selector
    /// matches nothing.
    pub fn is_empty(&self) -> bool {
        self.tag.is_none() && self.id.is_none() && self.classes.is_empty()
    }

    pub fn matches(&self, element: &Element) -> bool {
        if self.is_empty() {
            return false;
        }
        if let Some(tag) = &self.tag {
            if !element.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if &element.id != id {
                return false;
            }
        }
        self.classes.iter().all(|class| element.has_class(class))
    }
}

impl From<&str> for Selector {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compound() {
        let selector = Selector::parse("button.js-btn.primary");
        assert_eq!(selector.tag.as_deref(), Some("button"));
        assert_eq!(selector.classes, vec!["js-btn", "primary"]);
        assert_eq!(selector.id, None);
    }

    #[test]
    fn test_parse_id() {
        let selector = Selector::parse("#main");
        assert_eq!(selector.id.as_deref(), Some("main"));
        assert!(selector.tag.is_none());
    }

    #[test]
    fn test_empty_matches_nothing() {
        let selector = Selector::parse("  ");
        assert!(selector.is_empty());
        assert!(!selector.matches(&Element::div()));
    }
}
