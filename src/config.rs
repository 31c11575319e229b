use clap::Parser;
use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[derive(Parser, Debug, Clone)]
#[command(name = "receipt-server", about = "Receipt points HTTP service", version)]
pub struct ServerConfig {
    #[arg(
        long,
        env = "RECEIPTS_BIND",
        value_name = "ADDR",
        default_value = DEFAULT_BIND,
        help = "Address the HTTP server listens on"
    )]
    pub bind: SocketAddr,

    #[arg(
        long,
        env = "RECEIPTS_LENIENT",
        help = "Accept receipts with unparsable fields; affected rules score zero"
    )]
    pub lenient: bool,
}

impl ServerConfig {
    /// Whether submissions are validated before being stored
    pub fn strict(&self) -> bool {
        !self.lenient
    }
}
