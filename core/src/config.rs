use anyhow::Result;

/// Trait for building configuration structs
///
/// Implementors describe how their config is assembled from a key lookup.
/// `build` wires that lookup to the process environment, tests hand in
/// their own map instead.
pub trait ConfigBuilder: Clone + Send + Sync + 'static {
    /// Build the configuration from an arbitrary key/value source
    fn build_from<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>;

    /// Build the configuration from environment variables
    fn build() -> Result<Self> {
        Self::build_from(|key| std::env::var(key).ok())
    }
}

/// Parse the usual spellings of a boolean flag.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
