use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use minic::{display_error, init_tracing, lexer::lexer::scan};

#[derive(Parser)]
#[command(name = "minic", about = "Lexical analyzer for the minic language")]
struct Cli {
    /// Program source to tokenize
    #[arg(default_value = "command.txt")]
    input: PathBuf,
    /// File that receives one rendered token per line
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,
    /// Print the rendered tokens instead of writing the output file
    #[arg(long)]
    stdout: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let source = match fs::read_to_string(&cli.input) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read {}: {err}", cli.input.display());
            return ExitCode::FAILURE;
        }
    };

    let file_name = cli.input.to_string_lossy().into_owned();
    let scanned = scan(&source, Some(file_name));

    if scanned.has_errors() {
        println!("error");
        for error in &scanned.errors {
            display_error(error, &source);
        }
        return ExitCode::FAILURE;
    }

    let rendered: String = scanned
        .tokens
        .iter()
        .map(|token| format!("{}\n", token.render()))
        .collect();

    if cli.stdout {
        print!("{rendered}");
        return ExitCode::SUCCESS;
    }

    if let Err(err) = fs::write(&cli.output, rendered) {
        eprintln!("error: cannot write {}: {err}", cli.output.display());
        return ExitCode::FAILURE;
    }

    tracing::debug!(tokens = scanned.tokens.len(), output = %cli.output.display(), "wrote tokens");
    ExitCode::SUCCESS
}
