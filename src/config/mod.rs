use std::env;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub admin_pass_hash: String,
    pub analyst_pass_hash: String,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    /// Loads configuration from the environment. The two password hashes are
    /// required; startup must abort when either is missing.
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        Ok(Config {
            admin_pass_hash: env::var("ADMIN_PASS_HASH")?,
            analyst_pass_hash: env::var("ANALYST_PASS_HASH")?,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "::".to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(3000),
        })
    }
}
