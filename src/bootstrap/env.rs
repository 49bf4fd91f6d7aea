use std::path::PathBuf;

/// Load `.env` into the process environment if one is found.
pub fn init_env() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}
