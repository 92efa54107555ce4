use crate::chaos::{ChaosConfig, DEFAULT_FAULT_RATE};
use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub storage: StorageKind,
    pub database_url: Option<String>,
    pub run_migrations: bool,
    pub db_max_conn: u32,
    pub db_min_conn: u32,
    pub chaos_enabled: bool,
    pub chaos_fault_rate: f64,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `init` uses the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let storage = match lookup("STORAGE").as_deref().unwrap_or("postgres") {
            "postgres" => StorageKind::Postgres,
            "memory" => StorageKind::Memory,
            other => {
                return Err(anyhow!(
                    "STORAGE must be 'postgres' or 'memory', got '{}'",
                    other
                ));
            }
        };

        let database_url = lookup("DATABASE_URL");
        if storage == StorageKind::Postgres && database_url.is_none() {
            return Err(anyhow!("Missing environment variable: DATABASE_URL"));
        }

        let run_migrations = parse_bool("RUN_MIGRATIONS", lookup("RUN_MIGRATIONS"), true)?;

        let db_max_conn: u32 = lookup("DB_MAX_CONNECTION")
            .unwrap_or_else(|| "5".to_string())
            .parse::<u32>()
            .context("Unable to parse DB_MAX_CONNECTION as u32")?;

        let db_min_conn: u32 = lookup("DB_MIN_CONNECTION")
            .unwrap_or_else(|| "1".to_string())
            .parse::<u32>()
            .context("Unable to parse DB_MIN_CONNECTION as u32")?;

        let chaos_enabled = parse_bool("CHAOS_ENABLED", lookup("CHAOS_ENABLED"), true)?;

        let chaos_fault_rate = match lookup("CHAOS_FAULT_RATE") {
            Some(raw) => raw
                .parse::<f64>()
                .context("CHAOS_FAULT_RATE must be a number")?,
            None => DEFAULT_FAULT_RATE,
        };
        if !(0.0..=1.0).contains(&chaos_fault_rate) {
            return Err(anyhow!(
                "CHAOS_FAULT_RATE must be between 0 and 1, got {}",
                chaos_fault_rate
            ));
        }

        Ok(Self {
            port,
            storage,
            database_url,
            run_migrations,
            db_max_conn,
            db_min_conn,
            chaos_enabled,
            chaos_fault_rate,
        })
    }

    pub fn chaos(&self) -> ChaosConfig {
        ChaosConfig {
            enabled: self.chaos_enabled,
            ..ChaosConfig::with_fault_rate(self.chaos_fault_rate)
        }
    }
}

fn parse_bool(key: &str, raw: Option<String>, default: bool) -> Result<bool> {
    match raw.as_deref() {
        None => Ok(default),
        Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") => Ok(false),
        Some(other) => Err(anyhow!("{} must be 'true' or 'false', got '{}'", key, other)),
    }
}
