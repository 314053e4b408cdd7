//! CLI argument parsing

use std::fmt;

use clap::Parser;
use h3cauth_capture::CaptureConfig;
use h3cauth_core::{Error, Result};

#[derive(Parser, Debug)]
#[command(name = "h3cauth")]
#[command(version, about = "H3C 802.1X supplicant")]
#[command(after_long_help = "Answers EAP-MD5 challenges only. A server that sends an H3C \
integrity challenge aborts the run; embed the library and pass a responder to \
h3cauth_cli::run_with_credentials to support it.")]
pub struct Cli {
    /// Network interface to authenticate on
    #[arg(short = 'I', long)]
    pub interface: String,

    /// Account name sent in the identity response
    #[arg(short = 'u', long)]
    pub username: String,

    /// Account password
    #[arg(short = 'p', long, env = "H3CAUTH_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Wait for the authenticator instead of sending EAPOL-Start
    #[arg(long)]
    pub no_start: bool,

    /// Do not send EAPOL-Logoff on shutdown
    #[arg(long)]
    pub no_logoff: bool,

    /// Capture read timeout in milliseconds
    #[arg(long, value_name = "MS", default_value = "1000")]
    pub timeout_ms: i32,

    /// Verbose output (-v, -vv for increasing verbosity)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Default log directive for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Validated settings for one supplicant run
#[derive(Clone)]
pub struct SupplicantConfig {
    pub interface: String,
    pub username: String,
    pub password: String,
    /// Send EAPOL-Start before waiting for the authenticator
    pub send_start: bool,
    /// Send EAPOL-Logoff when the run ends without authentication
    pub send_logoff: bool,
    pub capture: CaptureConfig,
}

impl fmt::Debug for SupplicantConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupplicantConfig")
            .field("interface", &self.interface)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("send_start", &self.send_start)
            .field("send_logoff", &self.send_logoff)
            .field("capture", &self.capture)
            .finish()
    }
}

impl TryFrom<Cli> for SupplicantConfig {
    type Error = Error;

    fn try_from(cli: Cli) -> Result<Self> {
        if cli.interface.is_empty() {
            return Err(Error::invalid_parameter("interface", "must not be empty"));
        }
        if cli.username.is_empty() {
            return Err(Error::invalid_parameter("username", "must not be empty"));
        }
        if cli.timeout_ms <= 0 {
            return Err(Error::invalid_parameter("timeout-ms", "must be positive"));
        }

        Ok(Self {
            interface: cli.interface,
            username: cli.username,
            password: cli.password,
            send_start: !cli.no_start,
            send_logoff: !cli.no_logoff,
            capture: CaptureConfig {
                timeout_ms: cli.timeout_ms,
                ..CaptureConfig::default()
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_minimal() {
        let cli = parse(&["h3cauth", "-I", "eth0", "-u", "alice", "-p", "secret"]);
        assert_eq!(cli.interface, "eth0");
        assert_eq!(cli.username, "alice");
        assert_eq!(cli.password, "secret");
        assert!(!cli.no_start);
        assert!(!cli.no_logoff);
        assert_eq!(cli.timeout_ms, 1000);
        assert_eq!(cli.log_level(), "info");
    }

    #[test]
    fn test_long_help_mentions_integrity_limitation() {
        use clap::CommandFactory;

        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("integrity challenge"));
        assert!(help.contains("run_with_credentials"));
    }

    #[test]
    fn test_interface_required() {
        let result = Cli::try_parse_from(["h3cauth", "-u", "alice", "-p", "secret"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity() {
        let cli = parse(&["h3cauth", "-I", "eth0", "-u", "a", "-p", "b", "-vv"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_level(), "trace");
    }

    #[test]
    fn test_config_from_cli() {
        let cli = parse(&[
            "h3cauth",
            "--interface",
            "eth1",
            "--username",
            "bob",
            "--password",
            "pw",
            "--no-start",
            "--timeout-ms",
            "250",
        ]);
        let config = SupplicantConfig::try_from(cli).unwrap();

        assert_eq!(config.interface, "eth1");
        assert!(!config.send_start);
        assert!(config.send_logoff);
        assert_eq!(config.capture.timeout_ms, 250);
        assert!(config.capture.promiscuous);
        assert!(!format!("{:?}", config).contains("pw\""));
    }

    #[test]
    fn test_config_rejects_empty_username() {
        let cli = parse(&["h3cauth", "-I", "eth0", "-u", "", "-p", "secret"]);
        match SupplicantConfig::try_from(cli) {
            Err(Error::InvalidParameter { name, .. }) => assert_eq!(name, "username"),
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_config_rejects_zero_timeout() {
        let cli = parse(&["h3cauth", "-I", "eth0", "-u", "a", "-p", "b", "--timeout-ms", "0"]);
        assert!(SupplicantConfig::try_from(cli).is_err());
    }
}
