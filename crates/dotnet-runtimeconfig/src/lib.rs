//! Runtime and framework dependency detection for .NET application roots
//!
//! Given an application root directory, [`RuntimeConfig::resolve`] locates
//! the unique `*.runtimeconfig.json` manifest (if any), decodes it through
//! the comment-tolerant JSON layer, and exposes the facts a build pipeline
//! needs: does the app depend on the base runtime or on ASP.NET, may the
//! host roll forward to patched framework versions, is a framework-dependent
//! executable present next to the config.
//!
//! Detection is one-shot and read-only: nothing on disk is modified, and the
//! resolved view is immutable.

pub mod constants;
pub mod error;
pub mod resolver;
pub mod schema;

pub use constants::{ASPNET_FRAMEWORKS, NETCORE_APP, RUNTIME_CONFIG_SUFFIX, SERVER_GC_PROPERTY};
pub use error::{Error, Result};
pub use resolver::RuntimeConfig;
pub use schema::{Framework, RuntimeConfigDocument, RuntimeOptions};
