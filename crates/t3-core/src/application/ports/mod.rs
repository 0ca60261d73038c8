//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `t3-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateStore`: Template retrieval
//!   - `ConfigStorage`: Persisted configuration document

pub mod output;

pub use output::{ConfigLoadError, ConfigStorage, Filesystem, TemplateStore};

#[cfg(test)]
pub use output::{MockConfigStorage, MockFilesystem, MockTemplateStore};
