use crate::shared::error::BuckDepsError;
use crate::shared::Result;
use serde::Serialize;
use std::fmt;

/// Separator between the parts of a maven coordinate string
pub const COORD_DELIMITER: &str = ":";

/// VersionlessDependency value object - a library identity ignoring its version
///
/// Ordering is structural: group, then name, then classifier, with an
/// absent classifier sorting before any present one. Reports rely on this
/// ordering to be reproducible across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VersionlessDependency {
    group: String,
    name: String,
    classifier: Option<String>,
}

impl VersionlessDependency {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        classifier: Option<String>,
    ) -> Result<Self> {
        let group = group.into();
        let name = name.into();

        if group.is_empty() {
            return Err(BuckDepsError::InvalidCoordinate {
                field: "group",
                value: group,
            }
            .into());
        }
        if name.is_empty() {
            return Err(BuckDepsError::InvalidCoordinate {
                field: "name",
                value: name,
            }
            .into());
        }

        // An empty classifier carries no identity
        let classifier = classifier.filter(|c| !c.is_empty());

        Ok(Self {
            group,
            name,
            classifier,
        })
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// `group:name[:classifier]`
    pub fn coords(&self) -> String {
        let mut coords = format!("{}{}{}", self.group, COORD_DELIMITER, self.name);
        if let Some(classifier) = &self.classifier {
            coords.push_str(COORD_DELIMITER);
            coords.push_str(classifier);
        }
        coords
    }

    /// Same identity without the classifier, used to match in-repo projects
    pub fn without_classifier(&self) -> Self {
        Self {
            group: self.group.clone(),
            name: self.name.clone(),
            classifier: None,
        }
    }
}

impl fmt::Display for VersionlessDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coords())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(group: &str, name: &str, classifier: Option<&str>) -> VersionlessDependency {
        VersionlessDependency::new(group, name, classifier.map(String::from)).unwrap()
    }

    #[test]
    fn test_new_valid() {
        let d = dep("com.google.guava", "guava", None);
        assert_eq!(d.group(), "com.google.guava");
        assert_eq!(d.name(), "guava");
        assert_eq!(d.classifier(), None);
    }

    #[test]
    fn test_new_empty_group_rejected() {
        let err = VersionlessDependency::new("", "guava", None).unwrap_err();
        let err = err.downcast_ref::<BuckDepsError>().unwrap();
        assert!(matches!(
            err,
            BuckDepsError::InvalidCoordinate { field: "group", .. }
        ));
    }

    #[test]
    fn test_new_empty_name_rejected() {
        let result = VersionlessDependency::new("com.google.guava", "", None);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_classifier_is_absent() {
        let d = dep("org.lib", "core", Some(""));
        assert_eq!(d.classifier(), None);
        assert_eq!(d, dep("org.lib", "core", None));
    }

    #[test]
    fn test_coords() {
        assert_eq!(dep("org.lib", "core", None).coords(), "org.lib:core");
        assert_eq!(
            dep("org.lib", "core", Some("sources")).coords(),
            "org.lib:core:sources"
        );
    }

    #[test]
    fn test_ordering_group_then_name_then_classifier() {
        let mut deps = vec![
            dep("org.b", "a", None),
            dep("org.a", "z", Some("x")),
            dep("org.a", "z", None),
            dep("org.a", "b", None),
        ];
        deps.sort();
        assert_eq!(
            deps.iter().map(|d| d.coords()).collect::<Vec<_>>(),
            vec!["org.a:b", "org.a:z", "org.a:z:x", "org.b:a"]
        );
    }

    #[test]
    fn test_equality_consistent_with_ordering() {
        let a = dep("org.a", "lib", Some("c"));
        let b = dep("org.a", "lib", Some("c"));
        let c = dep("org.a", "lib", Some("c"));
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(b, c);
        assert_eq!(a, c);
        assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
        assert_ne!(a, dep("org.a", "lib", None));
    }

    #[test]
    fn test_without_classifier() {
        let d = dep("org.a", "lib", Some("tests"));
        assert_eq!(d.without_classifier(), dep("org.a", "lib", None));
    }
}
