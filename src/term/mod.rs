extern crate ansi_term;
extern crate linefeed;
use ansi_term::Style;
use calc::lang::{Error, Evaluator};
use clap::Parser;
use linefeed::{Interface, ReadResult, Signal};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Interactive integer calculator.
#[derive(Debug, Parser)]
#[command(name = "calc", version)]
struct Config {
    /// Prompt printed before each line.
    #[arg(long, default_value = ">>> ")]
    prompt: String,

    /// Print errors without terminal styling.
    #[arg(long)]
    plain: bool,
}

pub fn main() {
    let config = Config::parse();
    init_tracing();
    if let Err(error) = main_loop(&config) {
        eprintln!("{}", error);
    }
}

fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main_loop(config: &Config) -> std::io::Result<()> {
    let mut evaluator = Evaluator::new();
    let interface = Interface::new("calc")?;
    interface.set_prompt(&config.prompt)?;
    interface.set_report_signal(Signal::Interrupt, true);
    info!("session started");

    loop {
        let string = match interface.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(Signal::Interrupt) => {
                interface.set_buffer("")?;
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        match evaluator.parse(&string) {
            Ok(Some(value)) => interface.write_fmt(format_args!("{}\n", value))?,
            Ok(None) => {}
            Err(error) => {
                interface.write_fmt(format_args!("{}\n", decorate_error(&error, config.plain)))?
            }
        }
        if !string.trim().is_empty() {
            interface.add_history_unique(string);
        }
    }
    info!(vars = evaluator.vars().len(), "session ended");
    Ok(())
}

fn decorate_error(error: &Error, plain: bool) -> String {
    if plain {
        error.to_string()
    } else {
        Style::new().bold().paint(error.to_string()).to_string()
    }
}
