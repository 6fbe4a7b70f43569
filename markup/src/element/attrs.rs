/// Value of a single element attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Arbitrary string value.
    Str(String),
    /// Serialized as `"true"` / `"false"` (ARIA state attributes).
    Bool(bool),
    /// Present with an empty value, e.g. `data-disclosure-button=""`.
    Flag,
}

impl AttrValue {
    /// The value as it appears between the quotes.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Str(s) => s,
            Self::Bool(true) => "true",
            Self::Bool(false) => "false",
            Self::Flag => "",
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Ordered attribute list.
///
/// Keeps insertion order so serialized output is deterministic. Setting an
/// existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Attributes::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    /// Copy every entry of `other` over this list.
    pub fn extend(&mut self, other: &Attributes) {
        for (name, value) in other.iter() {
            self.set(name, value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let mut attrs = Attributes::new().with("class", "a").with("title", "t");
        attrs.set("class", "b");

        let names: Vec<_> = attrs.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["class", "title"]);
        assert_eq!(attrs.get("class"), Some(&AttrValue::from("b")));
    }

    #[test]
    fn test_remove() {
        let mut attrs = Attributes::new().with("class", "a");
        assert_eq!(attrs.remove("class"), Some(AttrValue::from("a")));
        assert!(attrs.is_empty());
        assert_eq!(attrs.remove("class"), None);
    }

    #[test]
    fn test_bool_values() {
        assert_eq!(AttrValue::from(true).as_str(), "true");
        assert_eq!(AttrValue::from(false).as_str(), "false");
        assert_eq!(AttrValue::Flag.as_str(), "");
    }
}
