//! Check command: report whether mkcert can be launched

use std::path::Path;

use console::Style;

use crate::error::{Result, tool};
use crate::mkcert::{CertificateAuthority, Mkcert};

pub fn run(project_dir: &Path, mkcert: &Path) -> Result<()> {
    let ca = Mkcert::new(mkcert, project_dir);

    if !ca.is_installed()? {
        return Err(tool::missing(ca.name()));
    }

    println!(
        "{} {} is available",
        Style::new().green().bold().apply_to("✓"),
        ca.name()
    );
    Ok(())
}
