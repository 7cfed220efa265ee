use std::io::{self, BufRead, IsTerminal};
use std::process::ExitCode;

use clap::Parser;

use fly::cli::{Cli, ColorMode};
use fly::{FlyError, Logger, Message, Settings};

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so upstream writers get a clean
    // SIGPIPE signal instead of a BrokenPipeError when fly exits early.
    reset_sigpipe();

    let cli = Cli::parse();

    let use_color = resolve_color_mode(cli.color);

    let settings = match Settings::from_cli(&cli, use_color) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("fly: {e}");
            return ExitCode::from(exit_code(&e));
        }
    };

    let logger = match fly::create(&cli.id, settings) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("fly: {e}");
            return ExitCode::from(exit_code(&e));
        }
    };

    if !logger.has_level(&cli.level) {
        let err = FlyError::Config(format!(
            "unknown level '{}': expected one of {}",
            cli.level,
            logger.level_names().collect::<Vec<_>>().join(", ")
        ));
        eprintln!("fly: {err}");
        return ExitCode::from(exit_code(&err));
    }

    let result = pipe_lines(io::stdin().lock(), &logger, &cli);
    fly::destroy_all();
    if let Err(e) = result {
        eprintln!("fly: {e}");
        return ExitCode::from(exit_code(&e));
    }
    ExitCode::SUCCESS
}

/// Log every non-blank line of `reader` at the configured level and tags.
fn pipe_lines(reader: impl BufRead, logger: &Logger, cli: &Cli) -> Result<(), FlyError> {
    for line_result in reader.lines() {
        let line = match line_result {
            Ok(l) => l,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => continue,
            Err(e) => return Err(e.into()),
        };

        if line.trim().is_empty() {
            continue;
        }

        let entry = cli
            .tags
            .iter()
            .fold(logger.invoke(&cli.level, [Message::from(line)]), |entry, tag| {
                entry.tag(tag.as_str())
            });
        entry.out();
    }
    Ok(())
}

const fn exit_code(err: &FlyError) -> u8 {
    match err {
        FlyError::Io(_) => 2,
        _ => 1,
    }
}

fn resolve_color_mode(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            let stdout = io::stdout();
            if !stdout.is_terminal() {
                return false;
            }
            if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                return false;
            }
            if std::env::var("TERM").is_ok_and(|v| v == "dumb") {
                return false;
            }
            true
        }
    }
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// For a pipe filter like `fly`, restoring `SIG_DFL` lets the OS end the
/// process quietly when the reader goes away.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
