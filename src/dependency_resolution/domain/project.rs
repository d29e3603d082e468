use crate::shared::error::BuckDepsError;
use crate::shared::Result;
use std::collections::HashSet;

/// Path of the root project in a Gradle-style project tree
pub const ROOT_PATH: &str = ":";

/// A module of the host build, addressed by its Gradle path (`:libs:core`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Project {
    path: String,
    name: String,
    group: Option<String>,
}

impl Project {
    pub fn new(path: impl Into<String>, name: impl Into<String>, group: Option<String>) -> Result<Self> {
        let path = path.into();
        if !path.starts_with(ROOT_PATH) {
            return Err(BuckDepsError::InvalidProjectPath {
                reason: "project paths must start with ':'".to_string(),
                path,
            }
            .into());
        }
        Ok(Self {
            // Nested directories sometimes leak through as '/' separators
            path: path.replace('/', ":"),
            name: name.into(),
            group: group.filter(|g| !g.is_empty()),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.path == ROOT_PATH
    }
}

/// The root project and every project beneath it
#[derive(Debug, Clone)]
pub struct ProjectTree {
    root: Project,
    subprojects: Vec<Project>,
}

impl ProjectTree {
    pub fn new(root: Project, subprojects: Vec<Project>) -> Result<Self> {
        if !root.is_root() {
            return Err(BuckDepsError::InvalidProjectPath {
                path: root.path,
                reason: format!("the root project must have path '{}'", ROOT_PATH),
            }
            .into());
        }

        let mut seen = HashSet::new();
        seen.insert(root.path.clone());
        for project in &subprojects {
            if !seen.insert(project.path.clone()) {
                return Err(BuckDepsError::Validation {
                    message: format!("project '{}' is declared more than once", project.path),
                }
                .into());
            }
        }

        Ok(Self { root, subprojects })
    }

    pub fn root(&self) -> &Project {
        &self.root
    }

    pub fn subprojects(&self) -> &[Project] {
        &self.subprojects
    }

    /// Root first, then subprojects in declaration order
    pub fn all_projects(&self) -> impl Iterator<Item = &Project> {
        std::iter::once(&self.root).chain(self.subprojects.iter())
    }

    pub fn find(&self, path: &str) -> Option<&Project> {
        self.all_projects().find(|p| p.path == path)
    }

    /// Number of projects including the root, never zero
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.subprojects.len() + 1
    }
}
