//! Error types and handling for devcerts
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Sub-modules hold convenience constructors per error domain:
//! - [`tool`]: external certificate tool errors
//! - [`fs`]: file system errors

pub mod fs;
pub mod tool;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for devcerts operations
#[derive(Error, Diagnostic, Debug)]
pub enum DevcertsError {
    // Tool errors
    #[error("{tool} is not installed")]
    #[diagnostic(
        code(devcerts::tool::missing),
        help("Install mkcert and make sure it is on your PATH, or point DEVCERTS_MKCERT at it")
    )]
    ToolMissing { tool: String },

    #[error("Failed to launch {tool}: {reason}")]
    #[diagnostic(code(devcerts::tool::launch_failed))]
    ToolLaunchFailed { tool: String, reason: String },

    #[error("Command '{command}' failed: {status}")]
    #[diagnostic(
        code(devcerts::tool::invocation_failed),
        help("Run the command by hand to see the full output of the certificate tool")
    )]
    ToolInvocationFailed { command: String, status: String },

    // Settings errors
    #[error("Failed to parse settings file: {path}: {reason}")]
    #[diagnostic(
        code(devcerts::settings::parse_failed),
        help("Valid keys: cert_dir, key_file, cert_file, hosts, server_config, marker, ignore_file")
    )]
    SettingsParseFailed { path: String, reason: String },

    #[error("Invalid settings: {message}")]
    #[diagnostic(
        code(devcerts::settings::invalid),
        help("Check devcerts.yaml and the command line options")
    )]
    InvalidSettings { message: String },

    // File system errors
    #[error("Project directory not found: {path}")]
    #[diagnostic(code(devcerts::fs::project_not_found))]
    ProjectDirNotFound { path: String },

    #[error("Server configuration file not found: {path}")]
    #[diagnostic(
        code(devcerts::fs::config_not_found),
        help("Pass --server-config or set server_config in devcerts.yaml")
    )]
    ConfigFileNotFound { path: String },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(devcerts::fs::create_dir_failed))]
    DirectoryCreateFailed { path: String, reason: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(devcerts::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(devcerts::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(devcerts::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for DevcertsError {
    fn from(err: std::io::Error) -> Self {
        DevcertsError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DevcertsError>;
