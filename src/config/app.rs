use std::str::FromStr;

use multitier_core::config::{parse_flag, ConfigBuilder};

pub const DEFAULT_APP_NAME: &str = "multitier";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// How the bootstrap guards the initial entry against concurrent startups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedMode {
    /// Look for an existing row, insert when none is found.
    ///
    /// Two processes starting at the same moment can both see an empty table.
    #[default]
    CheckThenInsert,
    /// Back the check with a unique index on `entry.title` and ignore conflicts.
    Guarded,
}

impl FromStr for SeedMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "check" => Ok(SeedMode::CheckThenInsert),
            "guarded" => Ok(SeedMode::Guarded),
            other => Err(anyhow::anyhow!(
                "unknown `SEED_MODE` {other:?}, expected `check` or `guarded`"
            )),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub seed_on_startup: bool,
    pub seed_mode: SeedMode,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("app_name", &self.app_name)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database_url", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("seed_on_startup", &self.seed_on_startup)
            .field("seed_mode", &self.seed_mode)
            .finish()
    }
}

impl AppConfig {
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ConfigBuilder for AppConfig {
    fn build_from<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("SERVER_PORT")
            .unwrap_or_else(|| {
                tracing::warn!("cannot read `SERVER_PORT` defaulting to `{DEFAULT_PORT}`");

                DEFAULT_PORT.to_string()
            })
            .parse()
            .unwrap_or_else(|err| {
                tracing::error!("cannot parse `SERVER_PORT`. defaulting to {DEFAULT_PORT} {:?}", err);
                DEFAULT_PORT
            });

        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| anyhow::anyhow!("cannot read `DATABASE_URL`"))?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::error!(
                    "cannot parse `DATABASE_MAX_CONNECTIONS`. defaulting to {DEFAULT_MAX_CONNECTIONS} {:?}",
                    err
                );
                DEFAULT_MAX_CONNECTIONS
            }),
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let seed_on_startup = match lookup("SEED_ON_STARTUP") {
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| anyhow::anyhow!("cannot parse `SEED_ON_STARTUP` {raw:?}"))?,
            None => true,
        };

        let seed_mode = match lookup("SEED_MODE") {
            Some(raw) => raw.parse()?,
            None => SeedMode::default(),
        };

        Ok(AppConfig {
            app_name: lookup("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url,
            max_connections,
            seed_on_startup,
            seed_mode,
        })
    }
}
