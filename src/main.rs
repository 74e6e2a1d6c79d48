mod cli;
mod error;
mod i18n;
mod logging;
mod rename;
mod report;

use clap::Parser;
use cli::Args;
use colored::Colorize;
use error::AppError;
use i18n::{detect_language, supported_languages, Catalog, LocaleSource};
use rename::{rename_tree, RenameOptions};
use report::ConsoleSink;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, error, info, warn};

fn main() {
    let args = Args::parse();

    logging::init(args.verbose);

    if !report::should_use_colors() {
        colored::control::set_override(false);
    }

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let source = match &args.locales_dir {
        Some(dir) => {
            if !dir.is_dir() {
                return Err(AppError::LocalesDirNotFound { path: dir.clone() });
            }
            LocaleSource::Dir(dir.clone())
        }
        None => LocaleSource::Embedded,
    };

    let mut messages = Catalog::new(source);
    let language = args.lang.clone().unwrap_or_else(detect_language);
    if let Err(e) = messages.load(&language) {
        // Recoverable: keep whatever table is already in place.
        warn!("failed to load language '{}': {}", language, e);
    }
    debug!(language = messages.language(), "language selected");

    if args.list_languages {
        println!("{}", messages.text("lang.list_header"));
        for (code, name) in supported_languages() {
            println!("  {}  {}", code.cyan(), name);
        }
        return Ok(());
    }

    if let Some(root) = &args.root_dir {
        if !root.exists() {
            return Err(AppError::DirectoryNotFound { path: root.clone() });
        }
        if !root.is_dir() {
            return Err(AppError::NotADirectory { path: root.clone() });
        }

        if !args.yes && !args.dry && !confirm(&messages, root)? {
            println!("{}", messages.text("prompt.aborted").yellow());
            return Ok(());
        }

        let options = RenameOptions { dry_run: args.dry };
        let mut sink = ConsoleSink::new();
        let total = rename_tree(root, &options, &messages, &mut sink);

        info!(total, dry = args.dry, "run finished");
    }

    Ok(())
}

fn confirm(messages: &Catalog, root: &Path) -> Result<bool, AppError> {
    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string());

    let prompt = messages.format("prompt.confirm", &[("name", &name)]);
    print!("{}", prompt.bold());
    std::io::stdout()
        .flush()
        .map_err(|e| AppError::Other(format!("Failed to write prompt: {}", e)))?;

    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|e| AppError::Other(format!("Failed to read confirmation: {}", e)))?;

    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
