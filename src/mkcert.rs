//! External certificate tool invocation
//!
//! This module handles:
//! - Probing whether the tool resolves on the search path
//! - Installing the local certificate authority (`-install`)
//! - Issuing a key/certificate pair for a host list

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{Result, tool};

/// A local certificate authority able to mint development certificates
pub trait CertificateAuthority {
    /// Display name used in messages
    fn name(&self) -> String;

    /// Whether the tool executable can be launched at all
    fn is_installed(&self) -> Result<bool>;

    /// Install the local CA into the system and browser trust stores
    fn install_ca(&self) -> Result<()>;

    /// Write a key/certificate pair covering `hosts`
    fn issue(&self, key_path: &str, cert_path: &str, hosts: &[String]) -> Result<()>;
}

/// The `mkcert` executable, run from the project root
#[derive(Debug, Clone)]
pub struct Mkcert {
    program: PathBuf,
    working_dir: PathBuf,
}

impl Mkcert {
    pub fn new(program: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            working_dir: working_dir.into(),
        }
    }

    fn command(&self, args: &[OsString]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args).current_dir(&self.working_dir);
        cmd
    }

    fn command_line(&self, args: &[OsString]) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(args.iter().map(OsString::as_os_str))
            .map(|s| s.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the tool with inherited stdio and fail on a non-zero exit
    fn run_checked(&self, args: &[OsString]) -> Result<()> {
        let command_line = self.command_line(args);
        tracing::debug!(command = %command_line, cwd = %self.working_dir.display(), "running");

        let status = self.command(args).status().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                tool::missing(self.name())
            } else {
                tool::launch_failed(self.name(), e.to_string())
            }
        })?;

        if !status.success() {
            return Err(tool::invocation_failed(command_line, status.to_string()));
        }

        tracing::debug!(command = %command_line, "finished");
        Ok(())
    }
}

impl CertificateAuthority for Mkcert {
    fn name(&self) -> String {
        self.program.display().to_string()
    }

    fn is_installed(&self) -> Result<bool> {
        let launched = self
            .command(&[OsString::from("-version")])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match launched {
            // Launching is enough, the exit code of -version is not inspected
            Ok(status) => {
                tracing::debug!(tool = %self.name(), %status, "tool responded");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(tool = %self.name(), "tool not found");
                Ok(false)
            }
            Err(e) => Err(tool::launch_failed(self.name(), e.to_string())),
        }
    }

    fn install_ca(&self) -> Result<()> {
        self.run_checked(&[OsString::from("-install")])
    }

    fn issue(&self, key_path: &str, cert_path: &str, hosts: &[String]) -> Result<()> {
        let mut args: Vec<OsString> = vec![
            "-key-file".into(),
            key_path.into(),
            "-cert-file".into(),
            cert_path.into(),
        ];
        args.extend(hosts.iter().map(OsString::from));
        self.run_checked(&args)
    }
}
