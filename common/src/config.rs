use std::path::PathBuf;
use std::time::Duration;

/// Registry the tool converts when no other source is given.
pub const DEFAULT_REGISTRY_URL: &str = "https://gitlab.com/wireshark/wireshark/-/raw/master/manuf";

/// File the SQL script is written to when no other path is given.
pub const DEFAULT_OUTPUT: &str = "vendor.sql";

/// Client identifier sent as the `User-Agent` header.
pub fn default_user_agent() -> String {
    format!("ouisql/{}", env!("CARGO_PKG_VERSION"))
}

/// Where the raw registry text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// HTTP GET against a registry URL.
    Remote { url: String },
    /// A registry file already on disk.
    File { path: PathBuf },
}

pub struct Config {
    pub source: Source,
    /// Sent with every remote request.
    pub user_agent: String,
    /// Destination of the SQL script. Overwritten if it exists.
    pub output: PathBuf,
    /// No timeout is applied unless one is set here.
    pub timeout: Option<Duration>,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: Source::Remote {
                url: DEFAULT_REGISTRY_URL.to_string(),
            },
            user_agent: default_user_agent(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            timeout: None,
            quiet: 0,
        }
    }
}
