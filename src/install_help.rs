//! Installation guidance shown when mkcert cannot be found

const RELEASES_URL: &str = "https://github.com/FiloSottile/mkcert/releases";

/// Target platforms with distinct install instructions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    Windows,
    MacOs,
    Linux,
    Other,
}

impl HostPlatform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            HostPlatform::Windows
        } else if cfg!(target_os = "macos") {
            HostPlatform::MacOs
        } else if cfg!(target_os = "linux") {
            HostPlatform::Linux
        } else {
            HostPlatform::Other
        }
    }
}

/// Install instructions for `platform`, ready to print
pub fn instructions(platform: HostPlatform) -> String {
    let mut text = String::from("\nMkcert is not installed. Please install it first:\n");

    match platform {
        HostPlatform::Windows => {
            text.push_str("\nWindows (using Chocolatey):\n");
            text.push_str("    choco install mkcert\n");
            text.push_str("\nWindows (using Scoop):\n");
            text.push_str("    scoop bucket add extras\n");
            text.push_str("    scoop install mkcert\n");
            text.push_str("\nWindows (manual):\n");
            text.push_str(&format!("    1. Download from {RELEASES_URL}\n"));
            text.push_str("    2. Add the executable to your PATH\n");
        }
        HostPlatform::MacOs => {
            text.push_str("\nmacOS (using Homebrew):\n");
            text.push_str("    brew install mkcert\n");
            text.push_str("    brew install nss  # if you use Firefox\n");
        }
        HostPlatform::Linux => {
            text.push_str("\nLinux (Debian/Ubuntu):\n");
            text.push_str("    sudo apt install libnss3-tools mkcert\n");
            text.push_str("\nLinux (Arch):\n");
            text.push_str("    sudo pacman -S mkcert\n");
            text.push_str("\nLinux (manual):\n");
            text.push_str(&format!("    1. Download the prebuilt binary from {RELEASES_URL}\n"));
            text.push_str("    2. chmod +x it and move it to a directory on your PATH\n");
        }
        HostPlatform::Other => {
            text.push_str(&format!("\nDownload a release from {RELEASES_URL}\n"));
            text.push_str("and add the executable to your PATH.\n");
        }
    }

    text.push_str("\nAfter installing, run this command again.");
    text
}
