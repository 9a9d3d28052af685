//! Certificate provisioning flow
//!
//! Runs the steps in order, stopping at the first error:
//! 1. Tool availability check
//! 2. Output directory preparation
//! 3. Local CA installation and certificate issuance
//! 4. Server configuration patch
//! 5. Ignore-list update
//!
//! Nothing is rolled back on failure. A created directory or an installed CA stays.

use std::path::{Path, PathBuf};

use crate::error::{Result, fs, tool};
use crate::mkcert::CertificateAuthority;
use crate::patch::{self, IgnoreOutcome, PatchOutcome};
use crate::settings::Settings;
use crate::ui::Reporter;

/// Key/certificate pair paths, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateBundle {
    pub key_path: String,
    pub cert_path: String,
}

impl CertificateBundle {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            key_path: settings.key_path(),
            cert_path: settings.cert_path(),
        }
    }

    /// Both paths resolved against `project_dir`
    pub fn resolve(&self, project_dir: &Path) -> (PathBuf, PathBuf) {
        (
            project_dir.join(&self.key_path),
            project_dir.join(&self.cert_path),
        )
    }
}

/// Optional steps of the flow
#[derive(Debug, Clone, Copy)]
pub struct Steps {
    pub patch_config: bool,
    pub update_ignore: bool,
}

impl Default for Steps {
    fn default() -> Self {
        Self {
            patch_config: true,
            update_ignore: true,
        }
    }
}

/// What a successful run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    pub bundle: CertificateBundle,
    /// `None` when the config step was skipped
    pub config: Option<PatchOutcome>,
    /// `None` when the ignore step was skipped
    pub ignore: Option<IgnoreOutcome>,
}

/// Run the full flow for the project at `project_dir`
pub fn setup_certificates(
    project_dir: &Path,
    settings: &Settings,
    steps: Steps,
    ca: &dyn CertificateAuthority,
    reporter: &mut dyn Reporter,
) -> Result<ProvisionReport> {
    reporter.section("Setting up HTTPS Certificates");

    if !ca.is_installed()? {
        return Err(tool::missing(ca.name()));
    }

    let cert_dir = project_dir.join(&settings.cert_dir);
    std::fs::create_dir_all(&cert_dir).map_err(|e| fs::create_dir_failed(&cert_dir, &e))?;
    tracing::debug!(path = %cert_dir.display(), "certificate directory ready");

    reporter.step("Installing local Certificate Authority...");
    ca.install_ca()?;

    let bundle = CertificateBundle::from_settings(settings);
    reporter.step(&format!(
        "Generating certificates for {}...",
        settings.hosts.join(", ")
    ));
    ca.issue(&bundle.key_path, &bundle.cert_path, &settings.hosts)?;
    let (key, cert) = bundle.resolve(project_dir);
    tracing::debug!(key = %key.display(), cert = %cert.display(), "bundle issued");

    let config = if steps.patch_config {
        Some(update_server_config(project_dir, settings, reporter)?)
    } else {
        None
    };

    let ignore = if steps.update_ignore {
        Some(patch::ensure_entry(
            &project_dir.join(&settings.ignore_file),
            &settings.ignore_entry(),
        )?)
    } else {
        None
    };

    let report = ProvisionReport {
        bundle,
        config,
        ignore,
    };
    report_success(&report, settings, reporter);
    Ok(report)
}

fn update_server_config(
    project_dir: &Path,
    settings: &Settings,
    reporter: &mut dyn Reporter,
) -> Result<PatchOutcome> {
    reporter.step("Updating server configuration...");

    let path = project_dir.join(&settings.server_config);
    let outcome = patch::patch_file(&path, &settings.marker, &settings.ssl_context_line())?;
    let shown = settings.server_config.display();

    match &outcome {
        PatchOutcome::Replaced {
            line_number,
            previous,
        } => {
            tracing::debug!(previous = previous.trim_end(), "replaced TLS line");
            reporter.info(&format!("  Updated line {line_number} of {shown}"));
        }
        PatchOutcome::AlreadyCurrent { .. } => {
            reporter.info(&format!("  {shown} already uses the generated certificates"));
        }
        PatchOutcome::MarkerNotFound => {
            reporter.warn(&format!(
                "no line containing '{}' in {shown}; the server configuration was not updated",
                settings.marker
            ));
        }
    }

    Ok(outcome)
}

fn report_success(report: &ProvisionReport, settings: &Settings, reporter: &mut dyn Reporter) {
    reporter.success("Certificate setup complete!");
    reporter.info(&format!(
        "\nCertificates are stored in the '{}' directory:",
        settings.cert_dir
    ));
    reporter.info(&format!("  - {}", report.bundle.cert_path));
    reporter.info(&format!("  - {}", report.bundle.key_path));

    if report.config == Some(PatchOutcome::MarkerNotFound) {
        reporter.info(&format!(
            "\nSet {} in {} by hand to serve these files.",
            settings.marker,
            settings.server_config.display()
        ));
    }

    match report.ignore {
        Some(IgnoreOutcome::Appended | IgnoreOutcome::AlreadyPresent) => {
            reporter.info("\nThese files are automatically ignored by git.");
        }
        Some(IgnoreOutcome::FileMissing) => {
            reporter.info(&format!(
                "\nNo {} found; keep '{}' out of version control yourself.",
                settings.ignore_file.display(),
                settings.ignore_entry()
            ));
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DevcertsError;
    use crate::ui::SilentReporter;
    use std::cell::RefCell;
    use tempfile::TempDir;

    /// In-process stand-in for mkcert that records calls and writes placeholder files
    struct FakeAuthority {
        root: PathBuf,
        installed: bool,
        fail_install: bool,
        calls: RefCell<Vec<String>>,
    }

    impl FakeAuthority {
        fn new(root: &Path) -> Self {
            Self {
                root: root.to_path_buf(),
                installed: true,
                fail_install: false,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl CertificateAuthority for FakeAuthority {
        fn name(&self) -> String {
            "mkcert".to_string()
        }

        fn is_installed(&self) -> Result<bool> {
            self.calls.borrow_mut().push("-version".to_string());
            Ok(self.installed)
        }

        fn install_ca(&self) -> Result<()> {
            self.calls.borrow_mut().push("-install".to_string());
            if self.fail_install {
                return Err(tool::invocation_failed("mkcert -install", "exit status: 1"));
            }
            Ok(())
        }

        fn issue(&self, key_path: &str, cert_path: &str, hosts: &[String]) -> Result<()> {
            self.calls.borrow_mut().push(format!(
                "-key-file {key_path} -cert-file {cert_path} {}",
                hosts.join(" ")
            ));
            std::fs::write(self.root.join(key_path), "key")?;
            std::fs::write(self.root.join(cert_path), "cert")?;
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        lines: Vec<String>,
        warnings: Vec<String>,
    }

    impl Reporter for RecordingReporter {
        fn section(&mut self, title: &str) {
            self.lines.push(title.to_string());
        }

        fn step(&mut self, message: &str) {
            self.lines.push(message.to_string());
        }

        fn info(&mut self, message: &str) {
            self.lines.push(message.to_string());
        }

        fn warn(&mut self, message: &str) {
            self.warnings.push(message.to_string());
        }

        fn success(&mut self, message: &str) {
            self.lines.push(message.to_string());
        }
    }

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("hub")).unwrap();
        std::fs::write(
            temp.path().join("hub/main.py"),
            "import flask\nssl_context = None\napp.run()\n",
        )
        .unwrap();
        std::fs::write(temp.path().join(".gitignore"), "node_modules/\n").unwrap();
        temp
    }

    #[test]
    fn test_full_flow() {
        let temp = project();
        let ca = FakeAuthority::new(temp.path());
        let mut reporter = RecordingReporter::default();

        let report = setup_certificates(
            temp.path(),
            &Settings::default(),
            Steps::default(),
            &ca,
            &mut reporter,
        )
        .unwrap();

        assert_eq!(
            *ca.calls.borrow(),
            vec![
                "-version".to_string(),
                "-install".to_string(),
                "-key-file certs/localhost-key.pem -cert-file certs/localhost.pem localhost 127.0.0.1 192.168.0.16".to_string(),
            ]
        );
        assert!(temp.path().join("certs/localhost.pem").is_file());
        assert!(temp.path().join("certs/localhost-key.pem").is_file());
        assert_eq!(
            std::fs::read_to_string(temp.path().join("hub/main.py")).unwrap(),
            "import flask\n    ssl_context = ('certs/localhost.pem', 'certs/localhost-key.pem')\napp.run()\n"
        );
        assert_eq!(
            std::fs::read_to_string(temp.path().join(".gitignore")).unwrap(),
            "node_modules/\n\n# Certificate directory\ncerts/\n"
        );
        assert_eq!(report.ignore, Some(IgnoreOutcome::Appended));
        assert!(reporter.warnings.is_empty());
        assert!(reporter.lines.iter().any(|l| l.contains("complete")));
    }

    #[test]
    fn test_missing_tool_creates_nothing() {
        let temp = TempDir::new().unwrap();
        let mut ca = FakeAuthority::new(temp.path());
        ca.installed = false;

        let result = setup_certificates(
            temp.path(),
            &Settings::default(),
            Steps::default(),
            &ca,
            &mut RecordingReporter::default(),
        );

        assert!(matches!(result, Err(DevcertsError::ToolMissing { .. })));
        assert!(!temp.path().join("certs").exists());
        assert_eq!(ca.calls.borrow().len(), 1);
    }

    #[test]
    fn test_install_failure_stops_flow() {
        let temp = project();
        let mut ca = FakeAuthority::new(temp.path());
        ca.fail_install = true;

        let result = setup_certificates(
            temp.path(),
            &Settings::default(),
            Steps::default(),
            &ca,
            &mut RecordingReporter::default(),
        );

        assert!(matches!(
            result,
            Err(DevcertsError::ToolInvocationFailed { .. })
        ));
        // No rollback: the directory stays, nothing after -install ran
        assert!(temp.path().join("certs").is_dir());
        assert_eq!(ca.calls.borrow().len(), 2);
        assert_eq!(
            std::fs::read_to_string(temp.path().join(".gitignore")).unwrap(),
            "node_modules/\n"
        );
    }

    #[test]
    fn test_marker_not_found_warns() {
        let temp = project();
        std::fs::write(temp.path().join("hub/main.py"), "app.run()\n").unwrap();
        let ca = FakeAuthority::new(temp.path());
        let mut reporter = RecordingReporter::default();

        let report = setup_certificates(
            temp.path(),
            &Settings::default(),
            Steps::default(),
            &ca,
            &mut reporter,
        )
        .unwrap();

        assert_eq!(report.config, Some(PatchOutcome::MarkerNotFound));
        assert_eq!(reporter.warnings.len(), 1);
        assert!(reporter.warnings[0].contains("ssl_context"));
        assert_eq!(
            std::fs::read_to_string(temp.path().join("hub/main.py")).unwrap(),
            "app.run()\n"
        );
    }

    #[test]
    fn test_missing_server_config_fails_after_issuing() {
        let temp = TempDir::new().unwrap();
        let ca = FakeAuthority::new(temp.path());

        let result = setup_certificates(
            temp.path(),
            &Settings::default(),
            Steps::default(),
            &ca,
            &mut RecordingReporter::default(),
        );

        assert!(matches!(
            result,
            Err(DevcertsError::ConfigFileNotFound { .. })
        ));
        assert!(temp.path().join("certs/localhost.pem").exists());
    }

    #[test]
    fn test_skipped_steps_touch_nothing() {
        let temp = TempDir::new().unwrap();
        let ca = FakeAuthority::new(temp.path());

        let report = setup_certificates(
            temp.path(),
            &Settings::default(),
            Steps {
                patch_config: false,
                update_ignore: false,
            },
            &ca,
            &mut SilentReporter,
        )
        .unwrap();

        assert_eq!(report.config, None);
        assert_eq!(report.ignore, None);
        assert!(!temp.path().join(".gitignore").exists());
    }

    #[test]
    fn test_twice_is_idempotent() {
        let temp = project();
        let ca = FakeAuthority::new(temp.path());

        for _ in 0..2 {
            setup_certificates(
                temp.path(),
                &Settings::default(),
                Steps::default(),
                &ca,
                &mut RecordingReporter::default(),
            )
            .unwrap();
        }

        let ignore = std::fs::read_to_string(temp.path().join(".gitignore")).unwrap();
        assert_eq!(ignore.matches("certs/").count(), 1);
        let config = std::fs::read_to_string(temp.path().join("hub/main.py")).unwrap();
        assert_eq!(config.lines().count(), 3);
    }

    #[test]
    fn test_cert_dir_blocked_by_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("certs"), "not a directory").unwrap();
        let ca = FakeAuthority::new(temp.path());

        let result = setup_certificates(
            temp.path(),
            &Settings::default(),
            Steps::default(),
            &ca,
            &mut RecordingReporter::default(),
        );

        assert!(matches!(
            result,
            Err(DevcertsError::DirectoryCreateFailed { .. })
        ));
    }

    #[test]
    fn test_bundle_resolve() {
        let bundle = CertificateBundle::from_settings(&Settings::default());
        let (key, cert) = bundle.resolve(Path::new("/srv/app"));
        assert_eq!(key, PathBuf::from("/srv/app/certs/localhost-key.pem"));
        assert_eq!(cert, PathBuf::from("/srv/app/certs/localhost.pem"));
    }
}
