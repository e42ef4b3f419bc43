//! Typed view of the `runtimeOptions` document
//!
//! Only the fields the predicates consume are modeled; unknown fields are
//! accepted and ignored. Everything is optional because the toolchains emit
//! sparse documents — a bare `{}` is a valid manifest.
//!
//! # Example document
//!
//! ```json
//! {
//!   "runtimeOptions": {
//!     "tfm": "netcoreapp2.2",
//!     "framework": { "name": "Microsoft.AspNetCore.App", "version": "2.2.5" },
//!     "applyPatches": true,
//!     "configProperties": { "System.GC.Server": true }
//!   }
//! }
//! ```

use serde::Deserialize;
use serde_json::{Map, Value};

/// Root of a `*.runtimeconfig.json` document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfigDocument {
    #[serde(default)]
    pub runtime_options: RuntimeOptions,
}

/// The `runtimeOptions` object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeOptions {
    /// Target framework moniker, e.g. `netcoreapp2.2`.
    pub tfm: Option<String>,
    /// Declared shared framework, present for framework-dependent apps.
    pub framework: Option<Framework>,
    /// Whether the host may roll forward to patched framework versions.
    pub apply_patches: Option<bool>,
    /// Host configuration knobs, kept opaque apart from well-known keys.
    pub config_properties: Option<Map<String, Value>>,
}

/// The `runtimeOptions.framework` object.
#[derive(Debug, Clone, Deserialize)]
pub struct Framework {
    pub name: Option<String>,
    pub version: Option<String>,
}
