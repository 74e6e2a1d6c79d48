use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::i18n::Catalog;
use crate::report::LogSink;

use super::folder::rename_folder;
use super::RenameOptions;

/// Walk every directory under `root` (including `root` itself) top-down and
/// run the folder rename pass on each, summing the per-folder results.
///
/// A non-directory root is reported through `sink` and yields 0. Unreadable
/// subtrees are reported and skipped; the walk always runs to completion.
pub fn rename_tree(
    root: &Path,
    options: &RenameOptions,
    messages: &Catalog,
    sink: &mut dyn LogSink,
) -> usize {
    if !root.is_dir() {
        sink.line(&messages.format(
            "log.tree_not_dir",
            &[("path", &root.display().to_string())],
        ));
        return 0;
    }

    sink.line(&messages.format(
        "log.tree_start",
        &[("path", &root.display().to_string())],
    ));

    let mut total = 0;

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                sink.line(&messages.format(
                    "log.walk_error",
                    &[("path", &path), ("error", &e.to_string())],
                ));
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        debug!(folder = %entry.path().display(), "visiting folder");
        total += rename_folder(entry.path(), options, messages, sink);
    }

    info!(total, "tree walk finished");
    sink.line(&messages.format("log.tree_done", &[("count", &total.to_string())]));

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CaptureSink;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::write(path, b"x").unwrap();
    }

    fn run(root: &Path) -> (usize, CaptureSink) {
        let messages = Catalog::default();
        let mut sink = CaptureSink::new();
        let total = rename_tree(root, &RenameOptions::default(), &messages, &mut sink);
        (total, sink)
    }

    #[test]
    fn test_non_directory_root_returns_zero() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.txt");
        touch(&file);

        let (total, sink) = run(&file);

        assert_eq!(total, 0);
        assert_eq!(sink.lines.len(), 1);
        assert!(sink.lines[0].contains("not a valid folder"));
    }

    #[test]
    fn test_visits_every_folder_once_and_sums() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("photos");
        fs::create_dir(&root).unwrap();
        fs::create_dir(root.join("trip")).unwrap();
        fs::create_dir(root.join("trip").join("day2")).unwrap();
        fs::create_dir(root.join("empty")).unwrap();

        touch(&root.join("top.jpg"));
        touch(&root.join("trip").join("a.png"));
        touch(&root.join("trip").join("b.png"));
        touch(&root.join("trip").join("day2").join("x.gif"));

        let (total, sink) = run(&root);

        assert_eq!(total, 4);
        assert!(root.join("photos_1.jpg").exists());
        assert!(root.join("trip").join("trip_1.png").exists());
        assert!(root.join("trip").join("trip_2.png").exists());
        assert!(root.join("trip").join("day2").join("day2_1.gif").exists());

        // one folder pass per directory, root and empty folder included
        let passes = sink
            .lines
            .iter()
            .filter(|l| l.contains("Processing folder"))
            .count();
        assert_eq!(passes, 4);
    }

    #[test]
    fn test_emits_banner_and_summary() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("photos");
        fs::create_dir(&root).unwrap();
        touch(&root.join("a.jpg"));

        let (total, sink) = run(&root);

        assert_eq!(total, 1);
        let first = sink.lines.first().unwrap();
        let last = sink.lines.last().unwrap();
        assert!(first.contains("Processing root folder"));
        assert!(first.contains("photos"));
        assert!(last.contains("Renamed 1 image files in total"));
    }

    #[test]
    fn test_folder_numbering_is_folder_local() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("sets");
        fs::create_dir(&root).unwrap();
        fs::create_dir(root.join("a")).unwrap();
        fs::create_dir(root.join("b")).unwrap();
        touch(&root.join("a").join("one.jpg"));
        touch(&root.join("b").join("two.jpg"));

        let (total, _) = run(&root);

        // each folder restarts its counter at 1
        assert_eq!(total, 2);
        assert!(root.join("a").join("a_1.jpg").exists());
        assert!(root.join("b").join("b_1.jpg").exists());
    }
}
