//! Pascal-S lexer CLI.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pasc::commands::{cross_check_source, read_file, write_tokens, CommandError, OutputFormat};
use pasc_lexer::{Lexer, LexerConfig, RuleSource, ScannerKind};

#[derive(Parser, Debug)]
#[command(name = "pasc", version, about = "Tokenize Pascal-S source files")]
struct Cli {
    /// Pascal-S source file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Use the hand-written scanner instead of the rule-driven automaton
    #[arg(long, conflicts_with = "cross_check")]
    fallback: bool,

    /// Automaton rule file (default: built-in Pascal-S rules)
    #[arg(long, value_name = "FILE", env = "PASC_RULES")]
    rules: Option<PathBuf>,

    /// Print elapsed scan time and token count to stderr
    #[arg(long)]
    time: bool,

    /// Token output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Run both scanners and report the first divergence
    #[arg(long)]
    cross_check: bool,
}

impl Cli {
    fn config(&self) -> LexerConfig {
        let kind = if self.fallback {
            ScannerKind::Fallback
        } else {
            ScannerKind::Automaton
        };
        let rules = match &self.rules {
            Some(path) => RuleSource::File(path.clone()),
            None => RuleSource::Builtin,
        };
        LexerConfig::new(kind).with_rules(rules)
    }
}

fn main() -> ExitCode {
    pasc::init_tracing();
    let cli = Cli::parse();

    let result = if cli.cross_check {
        run_cross_check(&cli)
    } else {
        run_lex(&cli)
    };

    match result {
        Ok(code) => code,
        Err(CommandError::Scan(message)) => {
            println!("error: {message}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run_lex(cli: &Cli) -> Result<ExitCode, CommandError> {
    let source = read_file(&cli.input)?;
    let lexer = Lexer::from_config(&cli.config());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = write_tokens(&source, &lexer, cli.format, &mut out);
    out.flush()?;
    let summary = summary?;

    if cli.time {
        eprintln!(
            "scanned {} tokens in {:.3?} ({} scanner)",
            summary.tokens,
            summary.elapsed,
            lexer.kind()
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn run_cross_check(cli: &Cli) -> Result<ExitCode, CommandError> {
    let source = read_file(&cli.input)?;
    let table = match cli.config().rules.load() {
        Ok(table) => table,
        Err(err) => {
            eprintln!("{err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let agree = cross_check_source(&source, &table, &mut out)?;
    Ok(if agree {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
