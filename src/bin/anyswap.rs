//! Command-line interface for anyswap
//! This binary runs the swap command on a file, or dumps what the swap would see.
//!
//! Usage:
//!   anyswap swap `<path>` --offset `<N>` [--backward] [--write]  - Swap the element at N with its neighbor
//!   anyswap tokens `<path>` --offset `<N>` [--backward]          - Print the scanned tokens as JSON
//!   anyswap tree `<path>` --offset `<N>` [--backward]            - Print the parse tree
//!
//! Configuration is the built-in defaults, then `.anyswap.toml` in the working directory if
//! present, then `--config <file>`, then `--extend-lines <N>` and `--stay`.
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use anyswap::anyswap::config::{Loader, SwapConfig};
use anyswap::anyswap::error::Result;
use anyswap::anyswap::formats::treeviz;
use anyswap::anyswap::lexing::tokenize;
use anyswap::anyswap::swap::{build_tree, scan_range};
use anyswap::{StringBuffer, SwapCommand, SwapDirection, SwapOutcome, TextBuffer};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;

fn buffer_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("path")
                .help("Path to the source file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("offset")
                .long("offset")
                .short('o')
                .help("Byte offset of the cursor")
                .value_parser(clap::value_parser!(usize))
                .required(true),
        )
        .arg(
            Arg::new("backward")
                .long("backward")
                .short('b')
                .help("Swap with the left neighbor instead of the right one")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("extend-lines")
                .long("extend-lines")
                .short('n')
                .help("Lines scanned beyond the cursor's line in the swap direction")
                .value_parser(clap::value_parser!(i64).range(0..)),
        )
        .arg(
            Arg::new("stay")
                .long("stay")
                .help("Keep the cursor where it was instead of following the swap")
                .action(ArgAction::SetTrue),
        )
}

const PROJECT_CONFIG: &str = ".anyswap.toml";

fn load_config(matches: &ArgMatches) -> Result<SwapConfig> {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG);
    if let Some(config_path) = matches.get_one::<String>("config") {
        loader = loader.with_file(config_path);
    }
    if let Some(&lines) = matches.get_one::<i64>("extend-lines") {
        loader = loader.set_override("scan.extend_lines", lines)?;
    }
    if matches.get_flag("stay") {
        loader = loader.set_override("cursor.follow_swap", false)?;
    }
    loader.build()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let matches = Command::new("anyswap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Swap the syntactic element under the cursor with its neighbor")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            buffer_args(Command::new("swap").about("Swap the element at the offset")).arg(
                Arg::new("write")
                    .long("write")
                    .short('w')
                    .help("Write the result back to the file instead of printing it")
                    .action(ArgAction::SetTrue),
            ),
        )
        .subcommand(buffer_args(
            Command::new("tokens").about("Print the tokens scanned around the offset"),
        ))
        .subcommand(buffer_args(
            Command::new("tree").about("Print the parse tree built around the offset"),
        ))
        .get_matches();

    let result = match matches.subcommand() {
        Some(("swap", swap_matches)) => handle_swap_command(swap_matches),
        Some(("tokens", tokens_matches)) => handle_tokens_command(tokens_matches),
        Some(("tree", tree_matches)) => handle_tree_command(tree_matches),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// What every subcommand works from: the loaded buffer, the direction and the configuration.
struct Invocation {
    path: String,
    buffer: StringBuffer,
    direction: SwapDirection,
    config: SwapConfig,
}

impl Invocation {
    fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let path = matches
            .get_one::<String>("path")
            .cloned()
            .unwrap_or_default();
        let offset = matches.get_one::<usize>("offset").copied().unwrap_or(0);
        let direction = SwapDirection::from(!matches.get_flag("backward"));

        let config = load_config(matches)?;

        let source = std::fs::read_to_string(&path)?;
        let buffer = StringBuffer::try_with_cursor(source, offset)?;
        Ok(Self {
            path,
            buffer,
            direction,
            config,
        })
    }

    fn scan_range(&self) -> std::ops::Range<usize> {
        scan_range(
            &self.buffer,
            self.buffer.cursor(),
            self.direction,
            &self.config.scan,
        )
    }
}

/// Handle the swap command
fn handle_swap_command(matches: &ArgMatches) -> Result<()> {
    let Invocation {
        path,
        mut buffer,
        direction,
        config,
    } = Invocation::from_matches(matches)?;

    let outcome = SwapCommand::new(config).run(&mut buffer, direction.is_forward());
    match &outcome {
        SwapOutcome::Swapped { cursor, .. } => eprintln!("cursor: {}", cursor),
        SwapOutcome::Skipped(reason) => eprintln!("unchanged: {}", reason),
    }

    if matches.get_flag("write") {
        if outcome.is_swapped() {
            std::fs::write(&path, buffer.text())?;
        }
    } else {
        print!("{}", buffer.text());
    }
    Ok(())
}

/// Handle the tokens command
fn handle_tokens_command(matches: &ArgMatches) -> Result<()> {
    let invocation = Invocation::from_matches(matches)?;
    let tokens = tokenize(&invocation.buffer, invocation.scan_range());
    println!("{}", serde_json::to_string_pretty(&tokens)?);
    Ok(())
}

/// Handle the tree command
fn handle_tree_command(matches: &ArgMatches) -> Result<()> {
    let invocation = Invocation::from_matches(matches)?;
    let tree = build_tree(&invocation.buffer, invocation.scan_range());
    print!("{}", treeviz::render(&tree));
    Ok(())
}
