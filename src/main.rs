//! lexan CLI - scan a text into tokens and inspect its symbol table

use std::{io, path::PathBuf, process};

use anyhow::bail;
use clap::Parser;
use lexan::{
    driver::{Flow, Session, MENU, PROMPT},
    render_diagnostic, Source, TokenKind,
};
use owo_colors::OwoColorize;
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lexan",
    about = "Lexical scanner for identifiers, numbers and logical operators",
    version
)]
struct Cli {
    /// Text file to scan
    file: Option<PathBuf>,

    /// Scan text given on the command line instead of a file
    #[arg(short = 'e', long = "eval", conflicts_with = "file")]
    eval: Option<String>,

    /// Step through tokens from a menu
    #[arg(short = 'i', long = "interactive")]
    interactive: bool,

    /// Only print tokens of these kinds (e.g. ID,ERROR)
    #[arg(long, value_delimiter = ',')]
    only: Vec<TokenKind>,

    /// Print the symbol table after scanning
    #[arg(long)]
    table: bool,

    /// Report each error token with its location on stderr
    #[arg(long)]
    diagnostics: bool,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "lexan=debug" } else { "lexan=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let source = match (&cli.eval, &cli.file) {
        (Some(text), _) => Source::from_string("<eval>", text.as_str()),
        (None, Some(path)) => match Source::from_path(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("{}: {}", "Error".red().bold(), e);
                process::exit(1);
            }
        },
        (None, None) => bail!("nothing to scan: pass a FILE or --eval TEXT"),
    };

    if cli.interactive {
        return run_menu(source);
    }

    scan(&cli, &source);
    Ok(())
}

fn scan(cli: &Cli, source: &Source) {
    let mut scanner = source.scanner();

    while let Some(token) = scanner.next_token() {
        if cli.only.is_empty() || cli.only.contains(&token.kind()) {
            println!("{}", token);
        }

        if cli.diagnostics {
            if let Some(error) = token.diagnostic() {
                eprint!("{}", render_diagnostic(&error, source).yellow());
            }
        }
    }

    if cli.table {
        println!("\nSymbol Table:");
        print!("{}", scanner.symbols());
    }
}

fn run_menu(source: Source) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut session = Session::new(source);
    let mut stdout = io::stdout();

    loop {
        println!("{}", MENU);

        match editor.readline(PROMPT) {
            Ok(line) => {
                if session.handle(&line, &mut stdout)? == Flow::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
