//! Well-known names in the runtime config contract.

/// File-name suffix that marks a runtime config manifest.
pub const RUNTIME_CONFIG_SUFFIX: &str = ".runtimeconfig.json";

/// Shared framework identifier for the base .NET Core runtime.
pub const NETCORE_APP: &str = "Microsoft.NETCore.App";

/// Shared framework identifiers that pull in the ASP.NET runtime.
pub const ASPNET_FRAMEWORKS: [&str; 2] = ["Microsoft.AspNetCore.App", "Microsoft.AspNetCore.All"];

/// `configProperties` key for the server garbage-collector flag.
pub const SERVER_GC_PROPERTY: &str = "System.GC.Server";
