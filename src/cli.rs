//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::settings::{DEFAULT_TOOL, SettingsOverrides};

/// devcerts - local HTTPS development certificates
///
/// Install a local certificate authority with mkcert, issue a certificate for the
/// development hosts and point the server configuration at it.
#[derive(Parser, Debug)]
#[command(
    name = "devcerts",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Provision locally trusted HTTPS certificates for development",
    long_about = "devcerts installs a local certificate authority with mkcert, issues a \
                  key/certificate pair for localhost and your LAN address, patches the \
                  server's TLS setting and keeps the certificates out of git.",
    after_help = "Examples:\n    \
                  devcerts\n    \
                  devcerts setup --host localhost --host 10.0.0.12\n    \
                  devcerts check\n    \
                  devcerts -C ../hub-project setup --skip-ignore"
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'C', global = true, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Path or name of the mkcert executable
    #[arg(long, global = true, env = "DEVCERTS_MKCERT", default_value = DEFAULT_TOOL)]
    pub mkcert: PathBuf,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the local CA, issue certificates and update the project (default)
    Setup(SetupArgs),

    /// Check whether mkcert is available
    Check,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the setup command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Use the defaults (localhost, 127.0.0.1, 192.168.0.16):\n    devcerts setup\n\n\
                  Issue for other hosts:\n    devcerts setup --host localhost --host 10.0.0.12\n\n\
                  Write certificates elsewhere:\n    devcerts setup --cert-dir tls\n\n\
                  Only issue certificates:\n    devcerts setup --skip-config --skip-ignore")]
pub struct SetupArgs {
    /// Host name or IP address to include (repeatable, replaces the configured list)
    #[arg(long = "host", value_name = "HOST")]
    pub hosts: Vec<String>,

    /// Directory for the generated key and certificate
    #[arg(long, value_name = "DIR")]
    pub cert_dir: Option<String>,

    /// Server startup file whose TLS line is patched
    #[arg(long, value_name = "FILE")]
    pub server_config: Option<PathBuf>,

    /// Ignore list that should exclude the certificate directory
    #[arg(long, value_name = "FILE")]
    pub ignore_file: Option<PathBuf>,

    /// Do not patch the server configuration
    #[arg(long)]
    pub skip_config: bool,

    /// Do not update the ignore list
    #[arg(long)]
    pub skip_ignore: bool,
}

impl SetupArgs {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            hosts: self.hosts.clone(),
            cert_dir: self.cert_dir.clone(),
            server_config: self.server_config.clone(),
            ignore_file: self.ignore_file.clone(),
        }
    }
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    devcerts completions --shell bash > ~/.bash_completion.d/devcerts\n\n\
                  Generate zsh completions:\n    devcerts completions --shell zsh > ~/.zfunc/_devcerts\n\n\
                  Generate fish completions:\n    devcerts completions --shell fish > ~/.config/fish/completions/devcerts.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(long, value_enum)]
    pub shell: clap_complete::Shell,
}
