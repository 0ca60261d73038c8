//! Project Generator - main scaffolding orchestrator.
//!
//! This service coordinates the scaffolding workflow:
//! 1. Validate the project name
//! 2. Resolve the template (unknown names fall back to `basic`)
//! 3. Refuse an existing target unless forced
//! 4. Render the common files plus the layout into a `ProjectStructure`
//! 5. Materialize it through the `Filesystem` port

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateStore},
    },
    domain::{
        DomainError, DomainValidator as validator, FsEntry, ProjectStructure, RenderContext,
        Template, common_nodes,
    },
    error::T3Result,
};

/// Layout used when the requested template name is not known.
pub const DEFAULT_TEMPLATE: &str = "basic";

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    pub name: String,
    pub description: String,
}

/// What a successful `generate` produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedProject {
    /// Project root, as passed by the caller.
    pub root: PathBuf,
    /// Name of the layout actually used (after fallback).
    pub template: String,
    /// Every directory and file written, in declaration order.
    pub created: Vec<PathBuf>,
}

impl GeneratedProject {
    /// `true` when the requested template was unknown and `basic` was used.
    pub fn fell_back_from(&self, requested: &str) -> bool {
        self.template != requested
    }
}

/// Main scaffolding service.
pub struct ProjectGenerator {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
}

impl ProjectGenerator {
    /// Create a new generator with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use t3_core::application::ProjectGenerator;
    ///
    /// let generator = ProjectGenerator::new(
    ///     store,      // impl TemplateStore
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(store: Box<dyn TemplateStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { store, filesystem }
    }

    /// Scaffold a new project at `target_root`.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidProjectName`: nothing was touched.
    /// - `ApplicationError::ProjectExists`: `target_root` exists and `force`
    ///   is false; the caller may confirm and retry with `force = true`.
    /// - `ApplicationError::FilesystemError`: a write failed. A root created by
    ///   this call is removed again; a pre-existing root is left alone.
    #[instrument(
        skip_all,
        fields(
            project = %project_name,
            template = %template_name,
            root = %target_root.as_ref().display(),
            force = force
        )
    )]
    pub fn generate(
        &self,
        target_root: impl AsRef<Path>,
        project_name: &str,
        template_name: &str,
        force: bool,
    ) -> T3Result<GeneratedProject> {
        let root = target_root.as_ref();

        // 1-2. Validate and render before touching the filesystem.
        let (template, structure) = self.prepare(root, project_name, template_name)?;

        // 3. Existing target needs explicit consent.
        let existed = self.filesystem.exists(root);
        if existed && !force {
            return Err(ApplicationError::ProjectExists {
                path: root.to_path_buf(),
            }
            .into());
        }
        if existed {
            info!("Target exists, writing into it (forced)");
        }

        // 4. Write.
        let created = match self.materialize(&structure) {
            Ok(created) => created,
            Err(e) => {
                if existed {
                    warn!("Write failed inside an existing directory, leaving it in place");
                } else {
                    warn!("Write failed, attempting rollback");
                    self.rollback(root);
                }
                return Err(e);
            }
        };

        info!(entries = created.len(), template = %template.name, "Project generated");

        Ok(GeneratedProject {
            root: root.to_path_buf(),
            template: template.name,
            created,
        })
    }

    /// Describe what `generate` would write, without writing anything.
    pub fn plan(
        &self,
        target_root: impl AsRef<Path>,
        project_name: &str,
        template_name: &str,
    ) -> T3Result<ProjectStructure> {
        let (_, structure) = self.prepare(target_root.as_ref(), project_name, template_name)?;
        Ok(structure)
    }

    /// List all available templates.
    pub fn list_templates(&self) -> T3Result<Vec<TemplateInfo>> {
        let templates = self.store.list()?;

        Ok(templates
            .into_iter()
            .map(|t| TemplateInfo {
                name: t.name,
                description: t.description,
            })
            .collect())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn prepare(
        &self,
        root: &Path,
        project_name: &str,
        template_name: &str,
    ) -> T3Result<(Template, ProjectStructure)> {
        let name = validator::validate_project_name(project_name)?;
        let template = self.resolve_template(template_name)?;

        let ctx = RenderContext::new(name.as_str());
        let full = Template {
            nodes: common_nodes()
                .into_iter()
                .chain(template.nodes.iter().cloned())
                .collect(),
            ..template.clone()
        };
        validator::validate_template(&full)?;

        let structure = full.render(&ctx, root)?;
        validator::validate_project_structure(&structure)?;

        Ok((template, structure))
    }

    /// Look up `name`, falling back to [`DEFAULT_TEMPLATE`] when unknown.
    fn resolve_template(&self, name: &str) -> T3Result<Template> {
        if let Some(template) = self.store.get(name)? {
            return Ok(template);
        }

        debug!(requested = %name, fallback = DEFAULT_TEMPLATE, "Unknown template, using fallback");

        self.store
            .get(DEFAULT_TEMPLATE)?
            .ok_or_else(|| DomainError::NoMatchingTemplate(name.to_string()).into())
    }

    /// Write every entry of `structure`, returning the absolute-ish paths
    /// (root joined with each entry) in order.
    fn materialize(&self, structure: &ProjectStructure) -> T3Result<Vec<PathBuf>> {
        let root = structure.root();
        self.filesystem.create_dir_all(root)?;

        let mut created = Vec::with_capacity(structure.entry_count());
        for entry in structure.entries() {
            let path = root.join(entry.path());
            match entry {
                FsEntry::Directory(_) => {
                    self.filesystem.create_dir_all(&path)?;
                }
                FsEntry::File(file) => {
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&path, &file.content)?;
                }
            }
            debug!(path = %path.display(), "created");
            created.push(path);
        }

        Ok(created)
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}
