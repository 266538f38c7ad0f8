//! Listen port resolution
//!
//! The server and the health probe both derive their port from the `PORT`
//! environment variable. Resolution is total: anything that is not a valid
//! `u16` yields [`DEFAULT_PORT`].

/// Environment variable holding the listen port
pub const PORT_ENV: &str = "PORT";

/// Port used when `PORT` is absent or unusable
pub const DEFAULT_PORT: u16 = 3000;

/// Resolve a raw port value, falling back to [`DEFAULT_PORT`]
pub fn resolve(raw: Option<&str>) -> u16 {
    raw.map(str::trim)
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Resolve the port from the process environment
pub fn from_env() -> u16 {
    resolve(std::env::var(PORT_ENV).ok().as_deref())
}
