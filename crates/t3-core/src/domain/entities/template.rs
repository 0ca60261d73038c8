//! Template domain model.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Template (Entity)                                          │
//! │  ├── name: "basic" | "python" | "web" | ...                 │
//! │  ├── description                                            │
//! │  └── nodes: Vec<TemplateNode>  (declarative, ordered)       │
//! │       ├── Directory("src")                                  │
//! │       └── File("src/main.py", "...{{PROJECT_NAME}}...")     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RenderContext (Value Object)                               │
//! │  └── Variable substitution: {{PROJECT_NAME}} -> "my-app"    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! A template is pure data. Rendering it produces a [`ProjectStructure`],
//! which the application layer materializes through the `Filesystem` port.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use chrono::Datelike;

use crate::domain::{
    entities::{common::RelativePath, project_structure::ProjectStructure},
    error::DomainError,
};

// ============================================================================
// Template Entity
// ============================================================================

/// A named, fixed directory/file layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub name: String,
    pub description: String,
    pub nodes: Vec<TemplateNode>,
}

impl Template {
    pub fn builder(name: impl Into<String>) -> TemplateBuilder {
        TemplateBuilder::new(name)
    }

    /// Check the template's structural invariants.
    ///
    /// - at least one node
    /// - no path declared twice
    /// - no absolute paths (guaranteed by `RelativePath`, re-checked here for
    ///   templates assembled by hand)
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.nodes.is_empty() {
            return Err(DomainError::EmptyTemplate {
                template: self.name.clone(),
            });
        }

        let mut seen = HashSet::new();
        for node in &self.nodes {
            let path = node.path();
            if path.as_path().is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.to_string(),
                });
            }
            if !seen.insert(path.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Render every node against `ctx`, producing a structure rooted at `root`.
    pub fn render(
        &self,
        ctx: &RenderContext,
        root: impl Into<PathBuf>,
    ) -> Result<ProjectStructure, DomainError> {
        self.validate()?;

        let mut structure = ProjectStructure::new(root);
        for node in &self.nodes {
            match node {
                TemplateNode::Directory(path) => {
                    structure.add_directory(path.as_path());
                }
                TemplateNode::File { path, content } => {
                    structure.add_file(path.as_path(), ctx.render(content));
                }
            }
        }

        structure.validate()?;
        Ok(structure)
    }
}

/// One declared entry in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateNode {
    Directory(RelativePath),
    /// File content may contain `{{VARIABLE}}` placeholders.
    File {
        path: RelativePath,
        content: String,
    },
}

impl TemplateNode {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::Directory(path) => path,
            Self::File { path, .. } => path,
        }
    }
}

/// Fluent builder for [`Template`].
#[derive(Debug)]
pub struct TemplateBuilder {
    name: String,
    description: String,
    nodes: Vec<TemplateNode>,
}

impl TemplateBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            nodes: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn directory(mut self, path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        self.nodes
            .push(TemplateNode::Directory(RelativePath::try_new(path)?));
        Ok(self)
    }

    pub fn file(
        mut self,
        path: impl Into<PathBuf>,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        self.nodes.push(TemplateNode::File {
            path: RelativePath::try_new(path)?,
            content: content.into(),
        });
        Ok(self)
    }

    /// Append already-built nodes (used to share common files across layouts).
    pub fn nodes(mut self, nodes: impl IntoIterator<Item = TemplateNode>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    pub fn build(self) -> Result<Template, DomainError> {
        let template = Template {
            name: self.name,
            description: self.description,
            nodes: self.nodes,
        };
        template.validate()?;
        Ok(template)
    }
}

// ============================================================================
// Render Context
// ============================================================================

/// Context for template rendering.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PROJECT_NAME` | "My Awesome App" | User input |
/// | `PROJECT_NAME_SNAKE` | "my_awesome_app" | Computed |
/// | `PROJECT_NAME_KEBAB` | "my-awesome-app" | Computed |
/// | `YEAR` | "2026" | System clock |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>) -> Self {
        let name = project_name.into();
        let mut vars = HashMap::new();

        vars.insert("PROJECT_NAME".to_string(), name.clone());
        vars.insert("PROJECT_NAME_SNAKE".to_string(), to_snake_case(&name));
        vars.insert("PROJECT_NAME_KEBAB".to_string(), to_kebab_case(&name));
        vars.insert(
            "YEAR".to_string(),
            chrono::Local::now().year().to_string(),
        );

        Self { variables: vars }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// - `{{UNKNOWN}}` stays as literal `{{UNKNOWN}}`
    /// - placeholders inside substituted values are not expanded again
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(end) => {
                    let key = &after[..end];
                    match self.variables.get(key) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str("{{");
                            out.push_str(key);
                            out.push_str("}}");
                        }
                    }
                    rest = &after[end + 2..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}

// ============================================================================
// String Case Conversion Helpers
// ============================================================================

fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

/// Split an identifier into lowercase words.
///
/// Boundaries: `_`, `-`, whitespace, lower→upper (`myApp`), and the end of an
/// acronym (`HTTPServer` → `http`, `server`).
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(&next) = chars.peek() {
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}
