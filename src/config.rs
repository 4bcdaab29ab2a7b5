//! Deployment configuration consumed by absolute link construction.
//!
//! Exactly two values matter to this crate: whether the deployment serves
//! encrypted transport and the externally visible hostname. A missing
//! hostname is a deployment defect surfaced as an error at load time; the
//! rendering paths themselves never consult the environment.

use std::{env, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{self, Error};

/// Environment variable naming the externally visible hostname.
pub const ENV_HOSTNAME: &str = "DECKROUTE_HOSTNAME";
/// Environment variable carrying the encrypted-transport flag.
pub const ENV_HTTPS: &str = "DECKROUTE_HTTPS";

/// Resolved deployment configuration for absolute link construction.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq,)]
pub struct ServerConfig
{
    /// True when pages are served over encrypted transport.
    #[serde(default)]
    pub https:    bool,
    /// Externally visible hostname, optionally carrying a port.
    pub hostname: String,
}

impl ServerConfig
{
    /// Resolves the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](Error::Config) when [`ENV_HOSTNAME`] is
    /// unset or blank, or when [`ENV_HTTPS`] carries a value that is not a
    /// recognizable boolean. An unset transport flag means plain transport.
    pub fn from_env() -> Result<Self, Error,>
    {
        let hostname = env::var(ENV_HOSTNAME,).ok();
        let https = env::var(ENV_HTTPS,).ok();
        Self::resolve(hostname.as_deref(), https.as_deref(),)
    }

    /// Resolves the configuration from raw lookup results.
    ///
    /// Split out from [`from_env`](Self::from_env) so the resolution rules
    /// can be exercised without mutating process state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](Error::Config) for a missing or blank
    /// hostname and for an unparsable transport flag.
    pub fn resolve(hostname: Option<&str,>, https: Option<&str,>,) -> Result<Self, Error,>
    {
        let hostname = hostname
            .map(str::trim,)
            .filter(|value| !value.is_empty(),)
            .ok_or_else(|| Error::config(ENV_HOSTNAME,),)?;

        let https = match https {
            None => false,
            Some(flag,) => parse_flag(flag,).ok_or_else(|| Error::config(ENV_HTTPS,),)?,
        };

        Ok(Self {
            https,
            hostname: hostname.to_owned(),
        },)
    }

    /// Loads the configuration from a YAML document on disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](Error::Io) when the file cannot be read,
    /// [`Error::Parse`](Error::Parse) when the YAML cannot be decoded, and
    /// [`Error::Config`](Error::Config) when the hostname is blank.
    pub fn load(path: &Path,) -> Result<Self, Error,>
    {
        debug!("reading server configuration from {}", path.display());
        let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
        let config: Self = serde_yaml::from_str(&contents,)?;
        if config.hostname.trim().is_empty() {
            return Err(Error::config("hostname",),);
        }
        Ok(config,)
    }
}

/// Parses the accepted boolean spellings of the transport flag.
fn parse_flag(value: &str,) -> Option<bool,>
{
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true,),
        "false" | "0" | "no" => Some(false,),
        _ => None,
    }
}

#[cfg(test)]
mod tests
{
    use std::io::Write;

    use super::{ENV_HOSTNAME, ENV_HTTPS, ServerConfig, parse_flag};
    use crate::error::Error;

    #[test]
    fn resolve_accepts_hostname_and_flag()
    {
        let config = ServerConfig::resolve(Some("decks.example.com",), Some("true",),)
            .expect("expected configuration to resolve",);
        assert!(config.https);
        assert_eq!(config.hostname, "decks.example.com");
    }

    #[test]
    fn resolve_defaults_transport_to_plain()
    {
        let config = ServerConfig::resolve(Some("localhost:9000",), None,)
            .expect("expected configuration to resolve",);
        assert!(!config.https);
    }

    #[test]
    fn resolve_rejects_missing_hostname()
    {
        let error = ServerConfig::resolve(None, Some("true",),).expect_err("expected config error",);
        match error {
            Error::Config {
                key,
            } => {
                assert_eq!(key, ENV_HOSTNAME);
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn resolve_rejects_blank_hostname()
    {
        let error = ServerConfig::resolve(Some("   ",), None,).expect_err("expected config error",);
        assert!(matches!(error, Error::Config { .. }));
    }

    #[test]
    fn resolve_rejects_unparsable_flag()
    {
        let error = ServerConfig::resolve(Some("decks.example.com",), Some("maybe",),)
            .expect_err("expected config error",);
        match error {
            Error::Config {
                key,
            } => {
                assert_eq!(key, ENV_HTTPS);
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn parse_flag_accepts_boolean_spellings()
    {
        assert_eq!(parse_flag("true",), Some(true));
        assert_eq!(parse_flag("1",), Some(true));
        assert_eq!(parse_flag("YES",), Some(true));
        assert_eq!(parse_flag("false",), Some(false));
        assert_eq!(parse_flag("0",), Some(false));
        assert_eq!(parse_flag(" no ",), Some(false));
        assert_eq!(parse_flag("maybe",), None);
    }

    #[test]
    fn load_reads_yaml_document()
    {
        let mut file = tempfile::NamedTempFile::new().expect("expected temp file",);
        write!(file, "hostname: decks.example.com\nhttps: true\n")
            .expect("expected write to succeed",);

        let config = ServerConfig::load(file.path(),).expect("expected load to succeed",);
        assert!(config.https);
        assert_eq!(config.hostname, "decks.example.com");
    }

    #[test]
    fn load_defaults_https_when_omitted()
    {
        let mut file = tempfile::NamedTempFile::new().expect("expected temp file",);
        write!(file, "hostname: localhost:9000\n").expect("expected write to succeed",);

        let config = ServerConfig::load(file.path(),).expect("expected load to succeed",);
        assert!(!config.https);
    }

    #[test]
    fn load_rejects_blank_hostname()
    {
        let mut file = tempfile::NamedTempFile::new().expect("expected temp file",);
        write!(file, "hostname: \"  \"\n").expect("expected write to succeed",);

        let error = ServerConfig::load(file.path(),).expect_err("expected config error",);
        assert!(matches!(error, Error::Config { .. }));
    }

    #[test]
    fn load_reports_io_errors()
    {
        let path = std::path::Path::new("/nonexistent/server.yaml",);
        let error = ServerConfig::load(path,).expect_err("expected io error",);
        assert!(matches!(error, Error::Io { .. }));
    }

    #[test]
    fn load_reports_parse_errors()
    {
        let mut file = tempfile::NamedTempFile::new().expect("expected temp file",);
        write!(file, "hostname: [not, a, string\n").expect("expected write to succeed",);

        let error = ServerConfig::load(file.path(),).expect_err("expected parse error",);
        assert!(matches!(error, Error::Parse { .. }));
    }
}
