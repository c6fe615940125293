use std::{path::PathBuf, process::ExitCode};

use answerset::{commands, models::QuestionKind, names, utils, CorrectIndices};
use clap::{ArgGroup, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version = utils::VERSION, about)]
struct Args {
    /// Locale for True/False labels and validation messages.
    #[arg(short, long, global = true, env = names::LOCALE_ENV, default_value = names::DEFAULT_LOCALE)]
    locale: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rewrite an answer list so it fits a question kind.
    Convert {
        /// Target kind, e.g. single_selection.
        #[arg(long)]
        to: QuestionKind,
        /// JSON answer list; stdin when omitted.
        file: Option<PathBuf>,
    },
    /// Print the correct answer index (or indices) of an answer list.
    Indices {
        #[arg(long)]
        kind: QuestionKind,
        file: Option<PathBuf>,
    },
    /// Flag exactly the given answers as correct.
    #[command(group(ArgGroup::new("selection").required(true).args(["index", "indices"])))]
    Mark {
        #[arg(long)]
        index: Option<usize>,
        #[arg(long, value_delimiter = ',')]
        indices: Option<Vec<usize>>,
        file: Option<PathBuf>,
    },
    /// Check an assessment item before saving it.
    Validate { file: Option<PathBuf> },
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "answerset=info".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let locale = commands::resolve_locale(&args.locale);

    let output = match args.command {
        Command::Convert { to, file } => {
            commands::convert(locale, to, &utils::read_input(file.as_deref())?)?
        }
        Command::Indices { kind, file } => {
            commands::indices(kind, &utils::read_input(file.as_deref())?)?
        }
        Command::Mark {
            index,
            indices,
            file,
        } => {
            let selection = match indices {
                Some(list) => CorrectIndices::Multiple(list),
                None => CorrectIndices::Single(index),
            };
            commands::mark(&selection, &utils::read_input(file.as_deref())?)?
        }
        Command::Validate { file } => {
            let report = commands::validate(locale, &utils::read_input(file.as_deref())?)?;
            if !report.output.is_empty() {
                println!("{}", report.output);
            }
            return Ok(if report.is_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
    };

    println!("{output}");
    Ok(ExitCode::SUCCESS)
}
