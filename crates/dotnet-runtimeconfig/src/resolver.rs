//! Locating and interpreting the application's runtime config manifest

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::constants::{ASPNET_FRAMEWORKS, NETCORE_APP, RUNTIME_CONFIG_SUFFIX, SERVER_GC_PROPERTY};
use crate::error::{Error, Result};
use crate::schema::{RuntimeConfigDocument, RuntimeOptions};

/// Resolved view of an application's runtime config.
///
/// Constructed once per detection pass by [`RuntimeConfig::resolve`] and
/// immutable afterwards. Every predicate is a pure query over the parsed
/// document; with no config present they all answer `false`.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    app_root: PathBuf,
    config_path: Option<PathBuf>,
    options: RuntimeOptions,
}

impl RuntimeConfig {
    /// Locate and parse the unique `*.runtimeconfig.json` directly under
    /// `app_root` (non-recursive).
    ///
    /// Zero matches is a valid outcome — [`is_present`](Self::is_present)
    /// answers `false`. More than one match is
    /// [`Error::AmbiguousConfig`]; nothing is parsed in that case. The
    /// single match is decoded through the comment-tolerant JSON layer,
    /// and a document that still fails to decode is
    /// [`Error::MalformedConfig`], never a silent "absent".
    pub fn resolve(app_root: impl AsRef<Path>) -> Result<Self> {
        let app_root = app_root.as_ref();
        let mut candidates = config_candidates(app_root)?;

        let config_path = match candidates.len() {
            0 => {
                tracing::debug!(app_root = %app_root.display(), "no runtime config present");
                None
            }
            1 => Some(app_root.join(candidates.remove(0))),
            _ => {
                tracing::warn!(
                    app_root = %app_root.display(),
                    ?candidates,
                    "refusing to pick between runtime configs"
                );
                return Err(Error::AmbiguousConfig {
                    app_root: app_root.to_path_buf(),
                    candidates,
                });
            }
        };

        let options = match &config_path {
            Some(path) => {
                let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
                let document: RuntimeConfigDocument =
                    dotnet_jsonc::from_slice(&bytes).map_err(|e| Error::MalformedConfig {
                        path: path.clone(),
                        source: e,
                    })?;
                tracing::debug!(config = %path.display(), "parsed runtime config");
                document.runtime_options
            }
            None => RuntimeOptions::default(),
        };

        Ok(Self {
            app_root: app_root.to_path_buf(),
            config_path,
            options,
        })
    }

    /// Whether a runtime config file was found at all.
    ///
    /// Independent of content validity: a present-but-malformed file is a
    /// [`resolve`](Self::resolve) error, not an absent config.
    pub fn is_present(&self) -> bool {
        self.config_path.is_some()
    }

    /// Whether the app declares the base shared runtime,
    /// `Microsoft.NETCore.App`.
    ///
    /// ASP.NET-flavored framework names answer `false` here; they are
    /// covered by [`has_aspnet_dependency`](Self::has_aspnet_dependency).
    /// The two predicates are checked independently against the declared
    /// name, not as mutually exclusive catch-alls.
    pub fn has_runtime_dependency(&self) -> bool {
        self.framework_name() == Some(NETCORE_APP)
    }

    /// Whether the app declares an ASP.NET shared framework
    /// (`Microsoft.AspNetCore.App` or `Microsoft.AspNetCore.All`).
    pub fn has_aspnet_dependency(&self) -> bool {
        self.framework_name()
            .is_some_and(|name| ASPNET_FRAMEWORKS.contains(&name))
    }

    /// Whether `applyPatches` is explicitly `true`.
    ///
    /// An absent field, or an absent config, is a negative answer rather
    /// than an error.
    pub fn has_apply_patches(&self) -> bool {
        self.options.apply_patches == Some(true)
    }

    /// Whether `configProperties` enables the server garbage collector.
    pub fn server_gc(&self) -> bool {
        self.options
            .config_properties
            .as_ref()
            .and_then(|properties| properties.get(SERVER_GC_PROPERTY))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Whether a framework-dependent executable sits next to the config.
    ///
    /// The expected name is the config file name with the
    /// `.runtimeconfig.json` suffix removed. A missing executable is
    /// `Ok(false)`; only a failed existence check is an error. The answer
    /// is deliberately independent of
    /// [`has_runtime_dependency`](Self::has_runtime_dependency).
    pub fn has_fde(&self) -> Result<bool> {
        let Some(config_path) = &self.config_path else {
            return Ok(false);
        };
        let Some(executable) = fde_path(config_path) else {
            return Ok(false);
        };
        executable
            .try_exists()
            .map_err(|e| Error::io(&executable, e))
    }

    /// Directory this config was resolved from.
    pub fn app_root(&self) -> &Path {
        &self.app_root
    }

    /// Path of the resolved config file, when one was found.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Declared target framework moniker.
    pub fn tfm(&self) -> Option<&str> {
        self.options.tfm.as_deref()
    }

    /// Declared shared framework name.
    pub fn framework_name(&self) -> Option<&str> {
        self.options
            .framework
            .as_ref()
            .and_then(|framework| framework.name.as_deref())
    }

    /// Declared shared framework version.
    pub fn framework_version(&self) -> Option<&str> {
        self.options
            .framework
            .as_ref()
            .and_then(|framework| framework.version.as_deref())
    }
}

/// File names directly under `app_root` ending in `.runtimeconfig.json`,
/// sorted so ambiguity reports are deterministic across platforms.
fn config_candidates(app_root: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(app_root).map_err(|e| Error::io(app_root, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(app_root, e))?;
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(RUNTIME_CONFIG_SUFFIX) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

/// Expected framework-dependent executable for a config path:
/// `appName.runtimeconfig.json` maps to `appName`.
fn fde_path(config_path: &Path) -> Option<PathBuf> {
    let name = config_path.file_name()?.to_str()?;
    let base = name.strip_suffix(RUNTIME_CONFIG_SUFFIX)?;
    if base.is_empty() {
        return None;
    }
    Some(config_path.with_file_name(base))
}
