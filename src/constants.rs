//! Application constants and default values.

/// Simulated network latency applied to every remote operation.
pub const SERVICE_LATENCY_MS: u64 = 2000;

/// Upper bound accepted for the configured latency.
pub const MAX_SERVICE_LATENCY_MS: u64 = 60_000;

/// Shared-cache in-memory database used by the demo binary.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:file:fruitapp_memdb?mode=memory&cache=shared";

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "fruitapp.toml";

/// Default log level when logging is enabled.
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const CONFIG_GENERATED: &str = "Generated configuration file";
