//! Setup command: the full certificate provisioning flow

use std::path::Path;

use crate::cli::SetupArgs;
use crate::error::Result;
use crate::mkcert::Mkcert;
use crate::provision::{self, Steps};
use crate::settings::Settings;
use crate::ui::ConsoleReporter;

/// Run setup for the project at `project_dir`
pub fn run(project_dir: &Path, mkcert: &Path, args: &SetupArgs) -> Result<()> {
    let settings = Settings::load(project_dir)?.with_overrides(args.overrides())?;
    tracing::debug!(?settings, "effective settings");

    let steps = Steps {
        patch_config: !args.skip_config,
        update_ignore: !args.skip_ignore,
    };
    let ca = Mkcert::new(mkcert, project_dir);

    provision::setup_certificates(project_dir, &settings, steps, &ca, &mut ConsoleReporter)?;
    Ok(())
}
