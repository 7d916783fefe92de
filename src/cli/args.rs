use crate::server::ServerConfig;
use crate::telemetry::LogFormat;
use clap::{Parser, ValueEnum};
use std::net::{IpAddr, SocketAddr};

/// Store purchase receipts and award loyalty points over HTTP
#[derive(Parser, Debug)]
#[command(name = "receipt-processor")]
#[command(about = "Store purchase receipts and award loyalty points over HTTP", long_about = None)]
pub struct CliArgs {
    /// Address to listen on
    #[arg(
        long = "host",
        env = "RECEIPT_PROCESSOR_HOST",
        value_name = "ADDR",
        default_value = "127.0.0.1"
    )]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(
        long = "port",
        env = "RECEIPT_PROCESSOR_PORT",
        value_name = "PORT",
        default_value_t = 9091
    )]
    pub port: u16,

    /// Receipt store implementation
    #[arg(
        long = "store",
        env = "RECEIPT_PROCESSOR_STORE",
        value_name = "STORE",
        default_value = "sharded",
        help = "Receipt store: 'locked' for a single reader/writer lock or 'sharded' for a sharded map"
    )]
    pub store: StoreType,

    /// Number of worker threads serving requests
    #[arg(
        long = "workers",
        env = "RECEIPT_PROCESSOR_WORKERS",
        value_name = "COUNT",
        help = "Number of worker threads (default: CPU cores)"
    )]
    pub workers: Option<usize>,

    /// Log output format
    #[arg(
        long = "log-format",
        env = "RECEIPT_PROCESSOR_LOG_FORMAT",
        value_name = "FORMAT",
        default_value = "text"
    )]
    pub log_format: LogFormat,
}

/// Available receipt store implementations
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StoreType {
    Locked,
    Sharded,
}

impl CliArgs {
    /// Create a ServerConfig from CLI arguments
    ///
    /// Falls back to the default worker count when none is given. A zero
    /// worker count is replaced by the default (with a warning) inside
    /// `ServerConfig::new`.
    pub fn to_server_config(&self) -> ServerConfig {
        let addr = SocketAddr::new(self.host, self.port);
        match self.workers {
            Some(workers) => ServerConfig::new(addr, workers),
            None => ServerConfig {
                addr,
                ..ServerConfig::default()
            },
        }
    }
}
