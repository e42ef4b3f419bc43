//! End-to-end checks that the tolerant JSON layer and the resolver agree
//!
//! The commented and mechanically comment-free renditions of the same
//! document must produce identical detection results all the way through
//! `RuntimeConfig::resolve`, not just at the stripping layer.

use dotnet_runtimeconfig::RuntimeConfig;
use dotnet_test_utils::AppRoot;
use pretty_assertions::assert_eq;

const COMMENTED: &str = r#"
{
  "runtimeOptions": {
    /* emitted by the SDK
       across several lines */
    "tfm": "netcoreapp2.2",
    "framework": {
      "name": "Microsoft.AspNetCore.App", // shared framework
      "version": "2.2.5"
    },
    "applyPatches": true,
    "configProperties": {
      "System.GC.Server": true
    } // end of options
  }
}
"#;

const CLEAN: &str = r#"
{
  "runtimeOptions": {
    "tfm": "netcoreapp2.2",
    "framework": {
      "name": "Microsoft.AspNetCore.App",
      "version": "2.2.5"
    },
    "applyPatches": true,
    "configProperties": {
      "System.GC.Server": true
    }
  }
}
"#;

fn predicate_tuple(config: &RuntimeConfig) -> (bool, bool, bool, bool, bool) {
    (
        config.is_present(),
        config.has_runtime_dependency(),
        config.has_aspnet_dependency(),
        config.has_apply_patches(),
        config.server_gc(),
    )
}

#[test]
fn commented_and_clean_configs_detect_identically() {
    let commented_app = AppRoot::new();
    commented_app.write_runtime_config("appName", COMMENTED);
    let clean_app = AppRoot::new();
    clean_app.write_runtime_config("appName", CLEAN);

    let from_commented = RuntimeConfig::resolve(commented_app.path()).unwrap();
    let from_clean = RuntimeConfig::resolve(clean_app.path()).unwrap();

    assert_eq!(predicate_tuple(&from_commented), predicate_tuple(&from_clean));
    assert_eq!(from_commented.tfm(), from_clean.tfm());
    assert_eq!(from_commented.framework_name(), from_clean.framework_name());
    assert_eq!(
        from_commented.framework_version(),
        from_clean.framework_version()
    );
}

#[test]
fn comment_before_closing_brace_is_an_expected_success() {
    // A comment between the last property and the closing brace leaves the
    // earlier comma trailing once stripped; this is a success path, not a
    // parse failure.
    let app = AppRoot::new();
    app.write_runtime_config(
        "appName",
        r#"
{
  "runtimeOptions": {
    "tfm": "netcoreapp2.2",
    "framework": {
      "name": "Microsoft.NETCore.App",
      "version": "2.2.5"
    },
    // trailing comment
  }
}
"#,
    );

    let config = RuntimeConfig::resolve(app.path()).unwrap();
    assert!(config.has_runtime_dependency());
}

#[test]
fn toolchain_trailing_commas_decode() {
    let app = AppRoot::new();
    app.write_runtime_config(
        "appName",
        r#"
{
  "runtimeOptions": {
    "tfm": "netcoreapp2.2",
    "framework": {
      "name": "Microsoft.AspNetCore.App",
      "version": "2.2.5",
    },
  },
}
"#,
    );

    let config = RuntimeConfig::resolve(app.path()).unwrap();
    assert!(config.has_aspnet_dependency());
}

#[test]
fn comment_markers_inside_strings_are_data() {
    let app = AppRoot::new();
    app.write_runtime_config(
        "appName",
        r#"
{
  "runtimeOptions": {
    "tfm": "netcoreapp2.2",
    "configProperties": {
      "App.BaseUrl": "http://localhost:5000//api",
      "App.Banner": "/* not a comment */"
    }
  }
}
"#,
    );

    let config = RuntimeConfig::resolve(app.path()).unwrap();
    assert!(config.is_present());
    assert!(!config.server_gc());
}

#[test]
fn resolver_agrees_with_raw_tolerant_decode() {
    // The resolver's typed view and a raw value-level decode of the same
    // bytes must tell the same story.
    let app = AppRoot::new();
    app.write_runtime_config("appName", COMMENTED);

    let config = RuntimeConfig::resolve(app.path()).unwrap();
    let raw: serde_json::Value = dotnet_jsonc::from_str(COMMENTED).unwrap();

    assert_eq!(
        config.framework_name(),
        raw["runtimeOptions"]["framework"]["name"].as_str()
    );
    assert_eq!(config.tfm(), raw["runtimeOptions"]["tfm"].as_str());
    assert_eq!(
        Some(config.has_apply_patches()),
        raw["runtimeOptions"]["applyPatches"].as_bool()
    );
}

#[test]
fn config_properties_round_trip_without_error() {
    // configProperties is opaque to the predicates but must decode whatever
    // the toolchain put there.
    let app = AppRoot::new();
    app.write_runtime_config(
        "appName",
        r#"
{
  "runtimeOptions": {
    "configProperties": {
      "System.GC.Server": false,
      "System.Runtime.TieredCompilation": true,
      "App.Threads": 4,
      "App.Name": "sample"
    }
  }
}
"#,
    );

    let config = RuntimeConfig::resolve(app.path()).unwrap();
    assert!(config.is_present());
    assert!(!config.server_gc());
}
