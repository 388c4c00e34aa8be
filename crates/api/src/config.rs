use serde::Serialize;
use waitline_core::service_window::WindowMode;

/// Which service-window reading each call path uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowPolicy {
    /// Enter-service routing (default: daily).
    pub entry: WindowMode,
    /// Direct queue attach (default: daily).
    pub attach: WindowMode,
    /// Desk call-next (default: absolute).
    pub dispatch: WindowMode,
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self {
            entry: WindowMode::Daily,
            attach: WindowMode::Daily,
            dispatch: WindowMode::Absolute,
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Service-window semantics per call path.
    pub windows: WindowPolicy,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `ENTRY_WINDOW_MODE`    | `daily`                    |
    /// | `ATTACH_WINDOW_MODE`   | `daily`                    |
    /// | `DISPATCH_WINDOW_MODE` | `absolute`                 |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let defaults = WindowPolicy::default();
        let windows = WindowPolicy {
            entry: window_mode_from_env("ENTRY_WINDOW_MODE", defaults.entry),
            attach: window_mode_from_env("ATTACH_WINDOW_MODE", defaults.attach),
            dispatch: window_mode_from_env("DISPATCH_WINDOW_MODE", defaults.dispatch),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            windows,
        }
    }
}

/// Read a [`WindowMode`] from `var`, falling back to `default` when unset.
///
/// Panics on an unrecognised value so misconfiguration fails at startup.
fn window_mode_from_env(var: &str, default: WindowMode) -> WindowMode {
    match std::env::var(var) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{var} is invalid: {e}")),
        Err(_) => default,
    }
}
