//! Version command implementation

use crate::error::Result;
use crate::settings::{DEFAULT_HOSTS, DEFAULT_TOOL, SETTINGS_FILE};

/// Run version command
pub fn run() -> Result<()> {
    println!("devcerts {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Defaults:");
    println!("  Certificate tool: {DEFAULT_TOOL} (override with --mkcert or DEVCERTS_MKCERT)");
    println!("  Hosts: {}", DEFAULT_HOSTS.join(", "));
    println!("  Settings file: {SETTINGS_FILE}");
    println!("  Build: {}", if cfg!(debug_assertions) { "debug" } else { "release" });

    Ok(())
}
