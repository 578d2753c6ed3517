use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub data_dir: PathBuf,
    pub templates: String,
    pub static_dir: PathBuf,
    pub session_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            data_dir: PathBuf::from("data"),
            templates: "templates/**/*.html".to_string(),
            static_dir: PathBuf::from("static"),
            session_days: 1,
        }
    }
}

impl Config {
    /// Reads `HSK_*` variables (after `.env` is loaded), keeping defaults for
    /// anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = lookup("HSK_BIND_ADDR")
            .and_then(|value| value.parse::<SocketAddr>().ok())
            .unwrap_or(defaults.bind_addr);

        let session_days = lookup("HSK_SESSION_DAYS")
            .and_then(|value| value.parse::<i64>().ok())
            .filter(|days| *days > 0)
            .unwrap_or(defaults.session_days);

        Self {
            bind_addr,
            data_dir: lookup("HSK_DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            templates: lookup("HSK_TEMPLATES").unwrap_or(defaults.templates),
            static_dir: lookup("HSK_STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            session_days,
        }
    }
}
