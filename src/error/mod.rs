mod codes;

pub use codes::ExitCode;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Root folder not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Path is not a folder: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Locales directory not found: {path}")]
    LocalesDirNotFound { path: PathBuf },

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::DirectoryNotFound { .. } => ExitCode::DirectoryNotFound,
            AppError::NotADirectory { .. } => ExitCode::DirectoryNotFound,
            AppError::LocalesDirNotFound { .. } => ExitCode::LanguageError,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::DirectoryNotFound { path } => {
                format!(
                    "The specified root folder does not exist:\n  {}\n\n\
                     Please verify the path and try again.",
                    path.display()
                )
            }

            AppError::NotADirectory { path } => {
                format!(
                    "The specified path is not a folder:\n  {}\n\n\
                     Please provide a valid folder path.",
                    path.display()
                )
            }

            AppError::LocalesDirNotFound { path } => {
                format!(
                    "The locales directory does not exist:\n  {}\n\n\
                     It should contain one <code>.json file per language, \
                     e.g. en.json.\n\
                     Omit --locales-dir to use the bundled language tables.",
                    path.display()
                )
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let err = AppError::DirectoryNotFound {
            path: PathBuf::from("/test"),
        };
        assert_eq!(err.exit_code(), ExitCode::DirectoryNotFound);

        let err = AppError::NotADirectory {
            path: PathBuf::from("/test"),
        };
        assert_eq!(err.exit_code(), ExitCode::DirectoryNotFound);

        let err = AppError::LocalesDirNotFound {
            path: PathBuf::from("/test"),
        };
        assert_eq!(err.exit_code(), ExitCode::LanguageError);
    }

    #[test]
    fn test_detailed_message_includes_path() {
        let err = AppError::LocalesDirNotFound {
            path: PathBuf::from("/missing/locales"),
        };

        let msg = err.detailed_message();
        assert!(msg.contains("/missing/locales"));
        assert!(msg.contains("--locales-dir"));
    }
}
