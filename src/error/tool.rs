//! External certificate tool errors

use super::DevcertsError;

/// The tool executable could not be found
pub fn missing(tool: impl Into<String>) -> DevcertsError {
    DevcertsError::ToolMissing { tool: tool.into() }
}

/// The tool exists but could not be started
pub fn launch_failed(tool: impl Into<String>, reason: impl Into<String>) -> DevcertsError {
    DevcertsError::ToolLaunchFailed {
        tool: tool.into(),
        reason: reason.into(),
    }
}

/// The tool ran and exited unsuccessfully
pub fn invocation_failed(command: impl Into<String>, status: impl Into<String>) -> DevcertsError {
    DevcertsError::ToolInvocationFailed {
        command: command.into(),
        status: status.into(),
    }
}
