use super::env::process_env;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "0.0.0.0")
    /// - SERVICE_PORT, then PORT: Port to bind (default: "5000")
    pub fn from_env() -> Self {
        Self::from_vars(&process_env)
    }

    pub fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Self {
        let ip = var("SERVICE_IP").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = var("SERVICE_PORT")
            .or_else(|| var("PORT"))
            .unwrap_or_else(|| "5000".to_string());

        Self { ip, port }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
