use serde::Serialize;

pub const HOST: &str = "0.0.0.0";
pub const PORT: u16 = 8080;
pub const ENVIRONMENT: &str = "development";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Value of RUST_ENV, reported by /health
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            environment: ENVIRONMENT.to_string(),
        }
    }
}

impl AppConfig {
    /// Create config from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: std::env::var("HOST")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.port),
            environment: std::env::var("RUST_ENV")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.environment),
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
