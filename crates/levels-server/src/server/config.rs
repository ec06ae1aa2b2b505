use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use std::net::{IpAddr, SocketAddr};

/// Runtime configuration for the `levels-server` binary.
///
/// All values are parsed from CLI arguments or environment variables (a `.env`
/// file is loaded first), with defaults that bind every interface on port
/// 5000.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "levels-server",
    version,
    about = "An HTTP service returning deterministic level sequences"
)]
pub struct CliArgs {
    /// Interface address to bind.
    ///
    /// Environment variable: `LEVELS_HOST`
    #[arg(long, env = "LEVELS_HOST", default_value_t = String::from("0.0.0.0"))]
    pub host: String,

    /// TCP port to listen on.
    ///
    /// Environment variable: `LEVELS_PORT`
    #[arg(long, env = "LEVELS_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Enable debug logging.
    ///
    /// Raises the default log filter from `info` to `debug`. An explicit
    /// `RUST_LOG` always takes precedence.
    ///
    /// Environment variable: `LEVELS_DEBUG`
    #[arg(short, long, env = "LEVELS_DEBUG", default_value_t = false)]
    pub debug: bool,

    /// Log output format.
    ///
    /// Environment variable: `LEVELS_LOG_FORMAT`
    #[arg(long, env = "LEVELS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// Console log rendering.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line human readable output.
    Pretty,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_addr: SocketAddr,
    pub debug: bool,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.port == 0 {
            bail!("LEVELS_PORT must be greater than 0");
        }

        let ip: IpAddr = args
            .host
            .trim()
            .parse()
            .with_context(|| format!("LEVELS_HOST ({}) is not a valid IP address", args.host))?;

        Ok(Self {
            server_addr: SocketAddr::new(ip, args.port),
            debug: args.debug,
            log_format: args.log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> anyhow::Result<ServerConfig> {
        let argv = std::iter::once("levels-server").chain(args.iter().copied());
        let args = CliArgs::try_parse_from(argv)?;
        ServerConfig::try_from(args)
    }

    #[test]
    fn defaults_bind_all_interfaces_on_5000() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.server_addr, "0.0.0.0:5000".parse().unwrap());
        assert!(!cfg.debug);
        assert_eq!(cfg.log_format, LogFormat::Pretty);
        assert_eq!(cfg.default_log_filter(), "info");
    }

    #[test]
    fn overrides_from_flags() {
        let cfg = config(&[
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--debug",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cfg.server_addr, "127.0.0.1:8080".parse().unwrap());
        assert!(cfg.debug);
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert_eq!(cfg.default_log_filter(), "debug");
    }

    #[test]
    fn accepts_ipv6_host() {
        let cfg = config(&["--host", "::1", "--port", "9000"]).unwrap();
        assert_eq!(cfg.server_addr, "[::1]:9000".parse().unwrap());
    }

    #[test]
    fn rejects_zero_port() {
        let err = config(&["--port", "0"]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn rejects_invalid_host() {
        let err = config(&["--host", "not-an-ip"]).unwrap_err();
        assert!(err.to_string().contains("not-an-ip"));
    }
}
