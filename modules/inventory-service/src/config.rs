use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_PATH: &str = "./db.txt";

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("INVENTORY_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_port(env::var("INVENTORY_PORT").ok()),
            db_path: env::var("INVENTORY_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string()),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    match raw {
        None => DEFAULT_PORT,
        Some(s) => s.parse().unwrap_or_else(|_| {
            log::warn!(
                "INVENTORY_PORT={:?} is not a valid port, using {}",
                s,
                DEFAULT_PORT
            );
            DEFAULT_PORT
        }),
    }
}
