use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use cmd_recognizer::{load_limits, registry, CommandAst, ParseError, ParserLimits, Recognizer};
use tracing::Level;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Yaml,
}

#[derive(Parser)]
#[command(name = "cmd-recognizer")]
#[command(about = "Recognize Unix utility command lines and print their structure")]
#[command(version)]
struct Cli {
    /// Recognize this line instead of reading stdin
    #[arg(short = 'c')]
    line: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// TOML file with parser limits
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log parser decisions to stderr
    #[arg(long)]
    trace: bool,

    /// Print the usage forms of a command and exit
    #[arg(long, value_name = "CMD")]
    describe: Option<String>,
}

fn init_logging(trace: bool) {
    let mut targets = Targets::new().with_default(Level::WARN);
    if trace {
        targets = targets
            .with_target("parse", Level::TRACE)
            .with_target("tokenize", Level::TRACE);
    }
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(true);
    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(targets))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.trace);

    if let Some(name) = &cli.describe {
        return describe(name);
    }

    let limits = match &cli.config {
        Some(path) => match load_limits(path) {
            Ok(limits) => limits,
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => ParserLimits::default(),
    };
    let recognizer = Recognizer::new(limits);

    let mut all_ok = true;
    match cli.line {
        Some(line) => all_ok &= run_line(&recognizer, &line, cli.format),
        None => {
            for line in std::io::stdin().lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        eprintln!("error: cannot read stdin: {}", e);
                        return ExitCode::FAILURE;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                all_ok &= run_line(&recognizer, &line, cli.format);
            }
        }
    }

    if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn describe(name: &str) -> ExitCode {
    let synopsis = registry().synopsis(name);
    if synopsis.is_empty() {
        eprintln!("error: {}: command not recognized", name);
        return ExitCode::FAILURE;
    }
    for (form, line) in registry().forms(name).iter().zip(synopsis) {
        println!("{:<10} {}", form.name, line);
    }
    ExitCode::SUCCESS
}

fn run_line(recognizer: &Recognizer, line: &str, format: Format) -> bool {
    match recognizer.parse(line) {
        Ok(ast) => match emit(&ast, format) {
            Ok(()) => true,
            Err(e) => {
                eprintln!("error: {}", e);
                false
            }
        },
        Err(e) => {
            report(&e, format);
            false
        }
    }
}

fn report(err: &ParseError, format: Format) {
    eprintln!("error: {} (token {})", err, err.position());
    let record = error_record(err);
    match format {
        Format::Json => println!("{}", record),
        Format::Yaml => match serde_yaml::to_string(&record) {
            Ok(text) => print!("---\n{}", text),
            Err(e) => eprintln!("error: {}", e),
        },
        Format::Text => {}
    }
}

fn error_record(err: &ParseError) -> serde_json::Value {
    serde_json::json!({
        "error": err.kind(),
        "message": err.to_string(),
        "position": err.position(),
    })
}

fn emit(ast: &CommandAst, format: Format) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(ast)?),
        Format::Yaml => print!("---\n{}", serde_yaml::to_string(ast)?),
        Format::Text => print!("{}", as_text(ast)),
    }
    Ok(())
}

fn as_text(ast: &CommandAst) -> String {
    let mut out = format!("{} [{}]\n", ast.command, ast.form);
    for option in &ast.options {
        out.push_str(&format!("  option   {}\n", option_text(option)));
    }
    for operand in &ast.operands {
        out.push_str(&format!("  operand  {} ({}) = {}\n", operand.slot, operand.kind, operand.value));
    }
    if let Some(predicate) = &ast.predicate {
        out.push_str(&format!("  predicate {}\n", predicate.render().join(" ")));
    }
    out
}

fn option_text(option: &cmd_recognizer::CapturedOption) -> String {
    let mut words = vec![option.flag.clone()];
    words.extend(option.payload.iter().cloned());
    for nested in &option.nested {
        words.push(option_text(nested));
    }
    words.join(" ")
}
