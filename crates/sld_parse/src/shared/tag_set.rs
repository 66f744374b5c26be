//! Caller-supplied tag name sets (raw-text and void elements).

use std::collections::HashSet;

const RAW_TEXT_ELEMENTS: [&str; 3] = ["script", "style", "textarea"];

const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Set of tag names.
///
/// Membership is case-sensitive: template tag names are compared exactly as
/// written, so `Script` is not a raw-text element even though `script` is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagSet {
    names: HashSet<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The conventional raw-text set: `script`, `style`, `textarea`.
    pub fn raw_text_elements() -> Self {
        RAW_TEXT_ELEMENTS.into_iter().collect()
    }

    /// The standard HTML void element set.
    pub fn void_elements() -> Self {
        VOID_ELEMENTS.into_iter().collect()
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.names.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for TagSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::TagSet;

    #[test]
    fn conventional_sets_have_expected_members() {
        let raw = TagSet::raw_text_elements();
        assert_eq!(raw.len(), 3);
        assert!(raw.contains("textarea"));
        assert!(!raw.contains("Textarea"), "membership must be case-sensitive");

        let void = TagSet::void_elements();
        assert_eq!(void.len(), 14);
        for name in ["br", "img", "input", "wbr"] {
            assert!(void.contains(name), "expected void element {name}");
        }
        assert!(!void.contains("div"));
    }

    #[test]
    fn custom_sets_can_be_extended() {
        let mut set: TagSet = ["pre"].into_iter().collect();
        set.extend(["code"]);
        assert!(set.insert("kbd"));
        assert!(!set.insert("kbd"));
        assert!(set.remove("pre"));
        let mut names: Vec<_> = set.iter().collect();
        names.sort_unstable();
        assert_eq!(names, ["code", "kbd"]);
    }
}
