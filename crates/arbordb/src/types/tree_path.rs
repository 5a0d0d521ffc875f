use derive_more::Deref;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{
    fmt::{self, Display},
    str::FromStr,
};
use thiserror::Error as ThisError;

///
/// CONSTANTS
///

/// Separator used by `Display`, `FromStr`, and serde.
pub const DEFAULT_SEPARATOR: char = '.';

///
/// TreePathError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TreePathError {
    #[error("tree path is empty")]
    Empty,

    #[error("tree path label at position {index} is empty")]
    EmptyLabel { index: usize },

    #[error("tree path label '{label}' contains the separator '{separator}'")]
    SeparatorInLabel { label: String, separator: char },
}

///
/// TreePath
///
/// Materialized path: the position of one node as the ordered labels from
/// its root down to itself. A path always holds at least one label.
///
/// Ordering is lexicographic by label, so sorting paths yields a
/// depth-first pre-order walk of the hierarchy.
///
/// Labels never contain `DEFAULT_SEPARATOR`; the textual form used by
/// `Display` and serde always parses back to the same labels, whatever
/// separator the path was read with.
///

#[derive(Clone, Debug, Deref, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TreePath(Vec<String>);

impl TreePath {
    /// Build a root path with a single label.
    pub fn root(label: impl Into<String>) -> Result<Self, TreePathError> {
        Self::from_labels([label.into()])
    }

    /// Build a path from its labels, root first.
    pub fn from_labels<I, S>(labels: I) -> Result<Self, TreePathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(TreePathError::Empty);
        }
        for (index, label) in labels.iter().enumerate() {
            check_label(index, label)?;
        }

        Ok(Self(labels))
    }

    /// Parse a textual path using an explicit separator.
    pub fn parse_with(text: &str, separator: char) -> Result<Self, TreePathError> {
        if text.is_empty() {
            return Err(TreePathError::Empty);
        }

        Self::from_labels(text.split(separator))
    }

    /// Path of a new child directly below this one.
    pub fn child(&self, label: impl Into<String>) -> Result<Self, TreePathError> {
        let label = label.into();
        check_label(self.0.len(), &label)?;

        let mut labels = self.0.clone();
        labels.push(label);

        Ok(Self(labels))
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.0
    }

    /// Depth in the hierarchy; root nodes are level 1.
    #[must_use]
    pub fn level(&self) -> u64 {
        self.0.len() as u64
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.len() == 1
    }

    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            None
        } else {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    /// Non-strict: every path is a descendant of itself.
    #[must_use]
    pub fn is_descendant_of(&self, ancestor: &Self) -> bool {
        self.0.starts_with(&ancestor.0)
    }

    /// Non-strict: every path is an ancestor of itself.
    #[must_use]
    pub fn is_ancestor_of(&self, descendant: &Self) -> bool {
        descendant.is_descendant_of(self)
    }

    /// Encode with an explicit separator.
    pub fn encode_with(&self, separator: char) -> Result<String, TreePathError> {
        if let Some(label) = self.0.iter().find(|label| label.contains(separator)) {
            return Err(TreePathError::SeparatorInLabel {
                label: label.clone(),
                separator,
            });
        }

        Ok(self.0.join(&separator.to_string()))
    }
}

fn check_label(index: usize, label: &str) -> Result<(), TreePathError> {
    if label.is_empty() {
        return Err(TreePathError::EmptyLabel { index });
    }
    if label.contains(DEFAULT_SEPARATOR) {
        return Err(TreePathError::SeparatorInLabel {
            label: label.to_string(),
            separator: DEFAULT_SEPARATOR,
        });
    }

    Ok(())
}

impl Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{DEFAULT_SEPARATOR}")?;
            }
            f.write_str(label)?;
        }

        Ok(())
    }
}

impl FromStr for TreePath {
    type Err = TreePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, DEFAULT_SEPARATOR)
    }
}

impl Serialize for TreePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TreePath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;

        text.parse().map_err(de::Error::custom)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn path(text: &str) -> TreePath {
        text.parse().expect("valid path")
    }

    #[test]
    fn level_counts_labels_from_root() {
        assert_eq!(path("a").level(), 1);
        assert_eq!(path("a.b").level(), 2);
        assert_eq!(path("a.b.c").level(), 3);
    }

    #[test]
    fn descendant_of_is_non_strict() {
        let a = path("a");
        let ab = path("a.b");

        assert!(a.is_descendant_of(&a));
        assert!(ab.is_descendant_of(&a));
        assert!(!a.is_descendant_of(&ab));
        assert!(a.is_ancestor_of(&ab));
    }

    #[test]
    fn label_prefix_is_not_descent() {
        // "ab" shares a textual prefix with "a" but sits in another subtree
        assert!(!path("ab.c").is_descendant_of(&path("a")));
    }

    #[test]
    fn parent_and_child_are_inverse() {
        let ab = path("a.b");
        let abc = ab.child("c").expect("child");

        assert_eq!(abc.parent(), Some(ab));
        assert_eq!(path("a").parent(), None);
    }

    #[test]
    fn parse_rejects_empty_input_and_labels() {
        assert_eq!("".parse::<TreePath>(), Err(TreePathError::Empty));
        assert_eq!(
            "a..b".parse::<TreePath>(),
            Err(TreePathError::EmptyLabel { index: 1 })
        );
        assert_eq!(
            path("a").child(""),
            Err(TreePathError::EmptyLabel { index: 1 })
        );
    }

    #[test]
    fn custom_separator_round_trips() {
        let parsed = TreePath::parse_with("x/y/z", '/').expect("parse");

        assert_eq!(parsed.labels(), ["x", "y", "z"]);
        assert_eq!(parsed.encode_with('/').expect("encode"), "x/y/z");
        assert!(matches!(
            TreePath::parse_with("x|y/z", '|')
                .expect("parse")
                .encode_with('/'),
            Err(TreePathError::SeparatorInLabel { .. })
        ));
    }

    #[test]
    fn labels_cannot_hold_the_default_separator() {
        let err = TreePathError::SeparatorInLabel {
            label: "v1.2".to_string(),
            separator: DEFAULT_SEPARATOR,
        };

        assert_eq!(TreePath::parse_with("v1.2/notes", '/'), Err(err.clone()));
        assert_eq!(TreePath::from_labels(["v1.2", "notes"]), Err(err.clone()));
        assert_eq!(path("notes").child("v1.2"), Err(err));
    }

    #[test]
    fn custom_separator_paths_survive_serde() {
        let parsed = TreePath::parse_with("v1/notes", '/').expect("parse");

        let json = serde_json::to_string(&parsed).expect("serialize");
        assert_eq!(json, "\"v1.notes\"");

        let back: TreePath = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.level(), 2);
        assert_eq!(back, parsed);
    }

    #[test]
    fn ordering_is_depth_first() {
        let mut paths = vec![path("b"), path("a.b"), path("a"), path("a.a.z")];
        paths.sort();

        assert_eq!(paths, vec![path("a"), path("a.a.z"), path("a.b"), path("b")]);
    }

    #[test]
    fn serializes_as_text() {
        let json = serde_json::to_string(&path("a.b")).expect("serialize");
        assert_eq!(json, "\"a.b\"");

        let back: TreePath = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, path("a.b"));
        assert!(serde_json::from_str::<TreePath>("\"\"").is_err());
    }

    fn arb_path() -> impl Strategy<Value = TreePath> {
        prop::collection::vec("[a-c]{1,2}", 1..5)
            .prop_map(|labels| TreePath::from_labels(labels).expect("non-empty labels"))
    }

    proptest! {
        #[test]
        fn child_is_one_level_deeper_descendant(parent in arb_path(), label in "[a-z]{1,3}") {
            let child = parent.child(label).expect("child");

            prop_assert_eq!(child.level(), parent.level() + 1);
            prop_assert!(child.is_descendant_of(&parent));
            prop_assert!(!parent.is_descendant_of(&child));
        }

        #[test]
        fn mutual_descent_means_equal(a in arb_path(), b in arb_path()) {
            if a.is_descendant_of(&b) && b.is_descendant_of(&a) {
                prop_assert_eq!(a, b);
            }
        }

        #[test]
        fn display_parses_back(p in arb_path()) {
            prop_assert_eq!(p.to_string().parse::<TreePath>().expect("parse"), p);
        }
    }
}
