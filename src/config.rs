use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(
            std::env::var("HOST").ok(),
            std::env::var("PORT").ok(),
        )
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            host: host.unwrap_or_else(|| "127.0.0.1".to_string()),
            port: port
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
