pub mod cli;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod rename;
pub mod report;

pub use error::{AppError, ExitCode};
pub use i18n::{
    detect_language, is_supported, supported_languages, Catalog, I18nError, LocaleSource,
    DEFAULT_LANGUAGE,
};
pub use rename::{image_extension, rename_folder, rename_tree, RenameOptions, SUPPORTED_EXTENSIONS};
pub use report::{CaptureSink, ConsoleSink, LogSink};
