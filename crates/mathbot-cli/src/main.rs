use std::process::ExitCode;

use clap::Parser;
use mathbot_engine::{CommandContext, ReportOptions};
use tracing::{debug, error};

/// mathbot evaluates arithmetic expressions and converts integers between
/// bases, the same way the chat commands do.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Highlight the error caret with ANSI colors.
    #[arg(long, env = "MATHBOT_COLOR")]
    color: bool,

    /// Print a JSON object instead of plain text.
    #[arg(long)]
    json: bool,

    /// Log filter, e.g. `debug` or `mathbot_engine=trace`.
    #[arg(long, env = "MATHBOT_LOG", default_value = "warn")]
    log: String,

    /// Prefix shown before command names in `help`.
    #[arg(long, env = "MATHBOT_PREFIX", default_value = "+")]
    prefix: String,

    /// Command name or alias (`calc`, `c`, `tohex`, `help`, ...).
    command: String,

    /// Command arguments, joined with spaces.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn init_logging(filter: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(filter))
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log);

    let ctx = CommandContext {
        prefix: args.prefix.clone(),
        report: ReportOptions { color: args.color },
    };
    let input = args.args.join(" ");
    debug!(command = %args.command, input = %input, "running command");

    let is_calc = mathbot_engine::find_command(&args.command).is_some_and(|c| c.name == "calc");
    if args.json && is_calc {
        let outcome = mathbot_engine::calculate_to_outcome(&input);
        return print_json(&outcome, outcome.success);
    }

    match mathbot_engine::dispatch(&ctx, &args.command, &input) {
        Ok(reply) if args.json => print_json(&reply, reply.success),
        Ok(reply) => {
            if reply.success {
                println!("{}", reply.text);
                ExitCode::SUCCESS
            } else {
                eprintln!("{}", reply.text);
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!("{e}");
            eprintln!("{e}. Try `mathbot help`.");
            ExitCode::FAILURE
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T, success: bool) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!("failed to serialize output: {e}");
            return ExitCode::FAILURE;
        }
    }
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
