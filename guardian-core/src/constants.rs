/// Guardian version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed name of the output file, written to the working directory.
pub const OUTPUT_FILE_NAME: &str = "redacted_output.csv";

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "guardian.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "GUARDIAN_LOG";

/// Filter used when neither the environment nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "guardian=info";

/// Default input column holding the opaque record identifier.
pub const DEFAULT_ID_COLUMN: &str = "record_id";

/// Default input column holding the embedded JSON payload.
pub const DEFAULT_PAYLOAD_COLUMN: &str = "data_json";

/// Field name used when a payload cannot be parsed at all.
pub const RAW_FIELD: &str = "_raw";

/// Output header, in column order.
pub const OUTPUT_HEADER: [&str; 3] = ["record_id", "redacted_data_json", "is_pii"];
