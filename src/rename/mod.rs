mod extensions;
mod folder;
mod tree;

pub use extensions::{image_extension, SUPPORTED_EXTENSIONS};
pub use folder::rename_folder;
pub use tree::rename_tree;

/// Options shared by the folder and tree rename passes.
#[derive(Debug, Clone, Default)]
pub struct RenameOptions {
    /// Report what would change without touching the filesystem.
    pub dry_run: bool,
}
