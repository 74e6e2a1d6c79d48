use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, trace, warn};

use crate::i18n::Catalog;
use crate::report::LogSink;

use super::extensions::image_extension;
use super::RenameOptions;

/// Rename the image files directly inside `folder` to
/// `<folder-name>_<counter>.<ext>`, counting from 1 in listing order.
///
/// Returns the number of files renamed in this folder only; subdirectories
/// are left to the caller's traversal. Never propagates an error: every
/// failure is reported through `sink` and the folder contributes 0.
pub fn rename_folder(
    folder: &Path,
    options: &RenameOptions,
    messages: &Catalog,
    sink: &mut dyn LogSink,
) -> usize {
    // A root or drive path has no final segment and would produce names
    // like "_1.jpg".
    let folder_name = match folder.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => {
            sink.line(&messages.format(
                "log.skip_root",
                &[("path", &folder.display().to_string())],
            ));
            return 0;
        }
    };

    match rename_entries(folder, &folder_name, options, messages, sink) {
        Ok(renamed) => renamed,
        Err(e) => {
            warn!(folder = %folder.display(), error = %e, "folder pass failed");
            sink.line(&messages.format(
                "log.folder_failed",
                &[
                    ("path", &folder.display().to_string()),
                    ("error", &e.to_string()),
                ],
            ));
            0
        }
    }
}

fn rename_entries(
    folder: &Path,
    folder_name: &str,
    options: &RenameOptions,
    messages: &Catalog,
    sink: &mut dyn LogSink,
) -> io::Result<usize> {
    sink.line(&messages.format(
        "log.folder_start",
        &[("path", &folder.display().to_string())],
    ));

    // Sorted listing keeps the numbering deterministic across runs.
    let mut names: Vec<OsString> = fs::read_dir(folder)?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect::<io::Result<_>>()?;
    names.sort();

    let mut counter: u32 = 1;
    let mut renamed = 0;

    for name in names {
        let original = folder.join(&name);

        if !original.is_file() {
            trace!(path = %original.display(), "skipping non-file entry");
            continue;
        }

        let Some(ext) = image_extension(&original) else {
            trace!(path = %original.display(), "skipping non-image file");
            continue;
        };

        let candidate_name = format!("{}_{}.{}", folder_name, counter, ext);
        let candidate = folder.join(&candidate_name);
        let display_name = name.to_string_lossy();

        if candidate == original {
            // The slot is logically claimed by this file; later files must
            // not be numbered into it.
            sink.line(&messages.format("log.skip_unchanged", &[("name", &display_name)]));
            counter += 1;
            continue;
        }

        if candidate.exists() {
            // Counter stays put: the slot is retried by the next eligible
            // file. The colliding file keeps its original name for good.
            sink.line(&messages.format(
                "log.collision",
                &[("name", &display_name), ("new", &candidate_name)],
            ));
            continue;
        }

        if options.dry_run {
            sink.line(&messages.format(
                "log.would_rename",
                &[("name", &display_name), ("new", &candidate_name)],
            ));
            counter += 1;
            renamed += 1;
            continue;
        }

        match fs::rename(&original, &candidate) {
            Ok(()) => {
                debug!(from = %display_name, to = %candidate_name, "renamed");
                sink.line(&messages.format(
                    "log.renamed",
                    &[("name", &display_name), ("new", &candidate_name)],
                ));
                counter += 1;
                renamed += 1;
            }
            Err(e) => {
                warn!(file = %display_name, error = %e, "rename failed");
                sink.line(&messages.format(
                    "log.rename_failed",
                    &[("name", &display_name), ("error", &e.to_string())],
                ));
            }
        }
    }

    sink.line(&messages.format(
        "log.folder_done",
        &[
            ("path", &folder.display().to_string()),
            ("count", &renamed.to_string()),
        ],
    ));

    Ok(renamed)
}
