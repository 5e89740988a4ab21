use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result, bail};
use clap::Parser;
use uuid::Uuid;

use crate::session::{InMemorySessions, UserID};

#[derive(Parser, Debug)]
#[command(name = "ironlog-server", about = "Exercise catalog API server")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "IRONLOG_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "IRONLOG_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Session tokens as token=user-uuid pairs
    #[arg(long = "session", env = "IRONLOG_SESSIONS", value_delimiter = ',')]
    pub sessions: Vec<String>,
}

impl Config {
    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn session_store(&self) -> Result<InMemorySessions> {
        let mut tokens = HashMap::new();
        for entry in &self.sessions {
            let Some((token, user)) = entry.split_once('=') else {
                bail!("invalid session entry {entry:?}, expected token=user-uuid");
            };
            let user = Uuid::parse_str(user)
                .with_context(|| format!("invalid user ID in session entry {entry:?}"))?;
            tokens.insert(token.to_string(), UserID::from(user));
        }
        Ok(InMemorySessions::new(tokens))
    }
}
