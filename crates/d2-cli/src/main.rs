use clap::{Parser, Subcommand, ValueEnum};
use std::path::Path;

#[derive(Parser)]
#[command(name = "d2t")]
#[command(about = "d2t — D2 diagram language tooling")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Dump the token stream of a .d2 file
    Tokens {
        /// Input .d2 file
        path: String,
    },

    /// Print the source with syntax highlighting
    Highlight {
        /// Input .d2 file
        path: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Ansi)]
        format: Format,
    },

    /// Report bad characters and unterminated constructs
    Check {
        /// Input .d2 file
        path: String,
    },

    /// List completion candidates at a byte offset
    Complete {
        /// Input .d2 file
        path: String,

        /// Cursor position as a byte offset
        offset: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Ansi,
    Html,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Tokens { path } => cmd_tokens(&path),
        Command::Highlight { path, format } => cmd_highlight(&path, format),
        Command::Check { path } => cmd_check(&path),
        Command::Complete { path, offset } => cmd_complete(&path, offset),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    if !d2_syntax::filetype::is_diagram_file(p) {
        eprintln!("Warning: {path} does not have the .d2 extension");
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_tokens(path: &str) {
    let source = read_source(path);
    for token in d2_lexer::Scanner::new(&source) {
        println!(
            "{:>5}..{:<5} {:<12} {:?}",
            token.start,
            token.end,
            format!("{:?}", token.kind),
            token.text(&source)
        );
    }
}

fn cmd_highlight(path: &str, format: Format) {
    let source = read_source(path);
    let output = match format {
        Format::Ansi => d2_syntax::ansi::render(&source),
        Format::Html => d2_syntax::html::render(&source),
    };
    print!("{output}");
}

fn cmd_check(path: &str) {
    let source = read_source(path);
    let diagnostics = d2_syntax::check(&source);

    if diagnostics.is_empty() {
        eprintln!("OK: {path}");
        return;
    }
    for diagnostic in &diagnostics {
        println!("{path}: {diagnostic}");
    }
    std::process::exit(1);
}

fn cmd_complete(path: &str, offset: usize) {
    let source = read_source(path);
    if offset > source.len() || !source.is_char_boundary(offset) {
        eprintln!("Error: offset {offset} is not a character boundary in {path}");
        std::process::exit(1);
    }

    // Same provider order as the editor integration: properties, shapes,
    // then file identifiers.
    for candidate in d2_completion::suggest_properties(&source, offset) {
        println!("{candidate}");
    }
    for candidate in d2_completion::suggest_shapes(&source, offset) {
        println!("{candidate}");
    }
    for candidate in d2_completion::suggest_identifiers(&source, offset) {
        println!("{candidate}");
    }
}
