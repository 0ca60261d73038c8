//! T3 Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the T3
//! command-line tool: a per-user key/value configuration store and a
//! template-driven project generator.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              t3-cli (CLI)               │
//! │   (parsing, prompts, output, exit code) │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (ConfigStore, ProjectGenerator)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │ (ConfigStorage, Filesystem, Templates)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      t3-adapters (Infrastructure)       │
//! │ (JsonFileStorage, LocalFilesystem, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectName, Template, ConfigValue)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use t3_core::application::{ConfigStore, ProjectGenerator};
//!
//! let mut config = ConfigStore::new(storage);
//! config.set("editor", "vim")?;
//!
//! let generator = ProjectGenerator::new(templates, filesystem);
//! let project = generator.generate("./my-app", "my-app", "python", false)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ConfigStore, GeneratedProject, ProjectGenerator, TemplateInfo,
        ports::{ConfigLoadError, ConfigStorage, Filesystem, TemplateStore},
    };
    pub use crate::domain::{
        ConfigMap, ConfigValue, ProjectName, ProjectStructure, RenderContext, Template,
        TemplateNode,
    };
    pub use crate::error::{T3Error, T3Result};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
