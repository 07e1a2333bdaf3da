/// Attribute constraint of a [`Selector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrMatch {
    /// `[name]`
    Present(String),
    /// `[name="value"]`
    Equals(String, String),
    /// `[name^="value"]`
    Prefix(String, String),
}

impl AttrMatch {
    pub(crate) fn name(&self) -> &str {
        match self {
            Self::Present(n) | Self::Equals(n, _) | Self::Prefix(n, _) => n,
        }
    }

    pub(crate) fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Present(_) => true,
            Self::Equals(_, v) => value == v,
            Self::Prefix(_, p) => value.starts_with(p.as_str()),
        }
    }
}

/// A single compound selector (`tag#id.class[attr]`), without combinators.
///
/// ```rust
/// use mguide_dom::{Document, Selector};
///
/// let mut doc = Document::new();
/// let body = doc.body();
/// let details = doc.append_element(body, "details");
/// doc.add_class(details, "ac");
/// doc.set_open(details, true);
///
/// let open = Selector::tag("details").with_class("ac").with_attr("open");
/// assert_eq!(doc.query(&open), Some(details));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub(crate) tag: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attrs: Vec<AttrMatch>,
}

impl Selector {
    /// Matches every element.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn tag(tag: impl Into<String>) -> Self {
        Self { tag: Some(tag.into().to_ascii_lowercase()), ..Self::default() }
    }

    pub fn id(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()), ..Self::default() }
    }

    pub fn class(class: impl Into<String>) -> Self {
        Self { classes: vec![class.into()], ..Self::default() }
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>) -> Self {
        self.attrs.push(AttrMatch::Present(name.into()));
        self
    }

    #[must_use]
    pub fn with_attr_eq(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(AttrMatch::Equals(name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_attr_prefix(mut self, name: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.attrs.push(AttrMatch::Prefix(name.into(), prefix.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_compose() {
        let sel = Selector::tag("META").with_attr_eq("name", "theme-color");
        assert_eq!(sel.tag.as_deref(), Some("meta"));
        assert_eq!(sel.attrs, [AttrMatch::Equals("name".into(), "theme-color".into())]);

        let link = Selector::tag("a").with_attr_prefix("href", "#");
        assert!(link.attrs[0].accepts("#routine"));
        assert!(!link.attrs[0].accepts("https://musicala.co/#routine"));
        assert_eq!(link.attrs[0].name(), "href");

        assert_eq!(Selector::any(), Selector::default());
    }
}
