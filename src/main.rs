use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use std::path::Path;
use tracing::{debug, Level};

use dtpmark::builder::Builder;
use dtpmark::loading;
use dtpmark::problem::concise_diagnostic;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("dtpmark")
        .version(VERSION)
        .propagate_version(true)
        .about("Render compiled document chapters as annotated text for DTP layout.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("render")
                .about("Render one chapter of a render job to standard output")
                .arg(
                    Arg::new("debug")
                        .long("debug")
                        .action(ArgAction::SetTrue)
                        .help("Log each command as it is rendered."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The JSON file describing the book, the chapter to render, and its commands."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("render", submatches)) => {
            let level = if submatches.get_flag("debug") {
                Level::DEBUG
            } else {
                Level::WARN
            };
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();

            let filename = match submatches.get_one::<String>("filename") {
                Some(filename) => Path::new(filename),
                None => std::process::exit(2),
            };
            std::process::exit(render(filename));
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: dtpmark [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn render(filename: &Path) -> i32 {
    let content = match loading::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!(
                "{}: {}: {}",
                "error".bright_red(),
                filename.display(),
                error.bold()
            );
            return 1;
        }
    };

    let job = match loading::parse(filename, &content) {
        Ok(job) => job,
        Err(error) => {
            eprintln!(
                "{}: {}: {}",
                "error".bright_red(),
                filename.display(),
                error.bold()
            );
            return 1;
        }
    };

    // parse() has already checked the chapter exists
    let Some(chapter) = job.chapter() else {
        return 1;
    };

    let mut builder = Builder::new(&job.book, chapter, &job.config);
    let result = builder.render_document(&job.nodes);

    for diagnostic in builder
        .diagnostics()
        .errors()
        .chain(
            builder
                .diagnostics()
                .warnings(),
        )
    {
        eprintln!("{}", concise_diagnostic(diagnostic));
    }

    match result {
        Ok(output) => {
            debug!("Rendered {} bytes", output.len());
            print!("{}", output);
            0
        }
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error.bold());
            1
        }
    }
}
