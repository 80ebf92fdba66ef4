use clap::{Parser, ValueEnum};
use linklet_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "LINKLET_LISTEN_ADDR";
pub const BASE_URL_ENV: &str = "LINKLET_BASE_URL";
pub const GENERATOR_ENV: &str = "LINKLET_GENERATOR";
pub const CODE_LENGTH_ENV: &str = "LINKLET_CODE_LENGTH";
pub const MAX_ATTEMPTS_ENV: &str = "LINKLET_MAX_ATTEMPTS";
pub const QR_SIZE_ENV: &str = "LINKLET_QR_SIZE";
pub const LOG_FORMAT_ENV: &str = "LINKLET_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";
pub const SEQ_GENERATOR_PREFIX: &str = "s";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorArg {
    #[value(name = "random")]
    Random,
    #[value(name = "seq")]
    Seq,
}

impl Display for GeneratorArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorArg::Random => write!(f, "random"),
            GeneratorArg::Seq => write!(f, "seq"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "linklet", about = "In-memory URL shortener with QR codes")]
pub struct Cli {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Public address used to build short URLs.
    /// Defaults to `http://localhost:<listen port>`.
    #[arg(long, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    #[arg(
        long,
        env = GENERATOR_ENV,
        value_enum,
        default_value_t = GeneratorArg::Random
    )]
    pub generator: GeneratorArg,

    #[arg(long, env = CODE_LENGTH_ENV, default_value_t = linklet_generator::random::DEFAULT_LENGTH)]
    pub code_length: usize,

    #[arg(long, env = MAX_ATTEMPTS_ENV, default_value_t = linklet_shortener::DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    #[arg(long, env = QR_SIZE_ENV, default_value_t = linklet_gateway::qr::DEFAULT_QR_SIZE)]
    pub qr_size: u32,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(base_url) => base_url.trim_end_matches('/').to_string(),
            None => format!("http://localhost:{}", self.listen_addr.port()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["linklet"]).unwrap();

        assert_eq!(
            cli.listen_addr,
            DEFAULT_LISTEN_ADDR.parse::<SocketAddr>().unwrap()
        );
        assert_eq!(cli.base_url(), "http://localhost:3000");
        assert_eq!(cli.generator, GeneratorArg::Random);
        assert_eq!(cli.code_length, 7);
        assert_eq!(cli.max_attempts, 5);
        assert_eq!(cli.qr_size, 200);
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn base_url_follows_listen_port() {
        let cli = Cli::try_parse_from(["linklet", "--listen-addr", "0.0.0.0:8088"]).unwrap();
        assert_eq!(cli.base_url(), "http://localhost:8088");
    }

    #[test]
    fn explicit_base_url_loses_trailing_slash() {
        let cli =
            Cli::try_parse_from(["linklet", "--base-url", "https://lnk.example/"]).unwrap();
        assert_eq!(cli.base_url(), "https://lnk.example");
    }

    #[test]
    fn rejects_unknown_generator() {
        assert!(Cli::try_parse_from(["linklet", "--generator", "uuid"]).is_err());
    }
}
