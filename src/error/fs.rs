//! File system errors

use std::path::Path;

use super::DevcertsError;

pub fn project_not_found(path: &Path) -> DevcertsError {
    DevcertsError::ProjectDirNotFound {
        path: path.display().to_string(),
    }
}

pub fn config_not_found(path: &Path) -> DevcertsError {
    DevcertsError::ConfigFileNotFound {
        path: path.display().to_string(),
    }
}

pub fn create_dir_failed(path: &Path, err: &std::io::Error) -> DevcertsError {
    DevcertsError::DirectoryCreateFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// A file exists but could not be read (permissions, invalid UTF-8)
pub fn read_failed(path: &Path, err: &std::io::Error) -> DevcertsError {
    DevcertsError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

pub fn write_failed(path: &Path, err: &std::io::Error) -> DevcertsError {
    DevcertsError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
