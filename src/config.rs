use crate::notes::allocator::{DEFAULT_ID_LENGTH, DEFAULT_MAX_ATTEMPTS};
use crate::notes::lifecycle::NoteSettings;

use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct NodeConfig {
    /// Address the HTTP server listens on.
    #[arg(long, env = "NOTES_BIND", default_value = "127.0.0.1:8787")]
    pub bind: SocketAddr,

    /// Base URL of a remote store node. Without it notes live in process memory.
    #[arg(long, env = "NOTES_STORE_URL")]
    pub store_url: Option<String>,

    /// Expose the local memory store on the `/kv` routes.
    #[arg(long, env = "NOTES_SERVE_STORE", default_value_t = false)]
    pub serve_store: bool,

    #[arg(long, default_value_t = DEFAULT_ID_LENGTH)]
    pub id_length: usize,

    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_id_attempts: usize,

    /// Per-request timeout towards a remote store node.
    #[arg(long, default_value_t = 500)]
    pub store_timeout_ms: u64,

    /// Attempts per remote store request (1 = no retry).
    #[arg(long, default_value_t = 3)]
    pub store_attempts: usize,

    #[arg(long, env = "NOTES_LOG_LEVEL", default_value = "info")]
    pub log_level: tracing::Level,
}

impl NodeConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.id_length == 0 {
            anyhow::bail!("--id-length must be at least 1");
        }
        if self.max_id_attempts == 0 {
            anyhow::bail!("--max-id-attempts must be at least 1");
        }
        if self.store_attempts == 0 {
            anyhow::bail!("--store-attempts must be at least 1");
        }
        if self.serve_store && self.store_url.is_some() {
            anyhow::bail!("--serve-store needs the local memory store; drop --store-url");
        }
        Ok(())
    }

    pub fn note_settings(&self) -> NoteSettings {
        NoteSettings {
            id_length: self.id_length,
            max_id_attempts: self.max_id_attempts,
        }
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }
}
