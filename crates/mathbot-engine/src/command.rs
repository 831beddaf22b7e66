//! The command table and dispatch.
//!
//! Each [`Command`] pairs a long name and a short alias with a handler that
//! turns the command's argument text into a [`Reply`]. Posting the reply
//! anywhere is the caller's concern.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::convert::{self, ConversionError};
use crate::format::{format_number, render_eval_failure, render_parse_failure, ReportOptions};
use crate::pipeline::{calculate, CalcError};

/// Settings shared by every handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    /// Prefix users type before a command name, shown by `help`.
    pub prefix: String,
    /// How parse-failure reports are rendered.
    pub report: ReportOptions,
}

impl Default for CommandContext {
    fn default() -> Self {
        Self {
            prefix: "+".to_string(),
            report: ReportOptions::default(),
        }
    }
}

/// The text produced by a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// `false` when the reply describes a failure.
    pub success: bool,
    pub text: String,
}

impl Reply {
    fn ok(text: impl Into<String>) -> Self {
        Self {
            success: true,
            text: text.into(),
        }
    }

    fn failure(text: impl Into<String>) -> Self {
        Self {
            success: false,
            text: text.into(),
        }
    }
}

/// Handler signature: context plus the argument text after the command name.
pub type Handler = fn(&CommandContext, &str) -> Reply;

/// One entry in the command table.
#[derive(Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub alias: &'static str,
    pub description: &'static str,
    pub handler: Handler,
}

/// Every command, in the order `help` lists them.
pub const COMMANDS: &[Command] = &[
    Command {
        name: "calc",
        alias: "c",
        description: "`<expression>`. Calculate an expression e.g. `+calc 10 / 5`. \
                      Supports `+-*/^` and these functions: [`sqrt`, `sin`, `tan`, `cos`]",
        handler: on_calc,
    },
    Command {
        name: "tobin",
        alias: "tb",
        description: "`<number>` Convert `<number>` to binary representation",
        handler: on_tobin,
    },
    Command {
        name: "tohex",
        alias: "th",
        description: "`<number>` Convert `<number>` to hexadecimal representation",
        handler: on_tohex,
    },
    Command {
        name: "todec",
        alias: "td",
        description: "`<number>` Convert `<number>` to decimal representation",
        handler: on_todec,
    },
    Command {
        name: "why",
        alias: "w",
        description: "Describe why something is the way it is",
        handler: on_why,
    },
    Command {
        name: "help",
        alias: "h",
        description: "Show this message",
        handler: on_help,
    },
];

/// Errors from [`dispatch`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

/// Look up a command by long name or alias.
pub fn find_command(name: &str) -> Option<&'static Command> {
    COMMANDS
        .iter()
        .find(|cmd| cmd.name == name || cmd.alias == name)
}

/// Run the command called `name` with `args` as its argument text.
pub fn dispatch(ctx: &CommandContext, name: &str, args: &str) -> Result<Reply, CommandError> {
    let command =
        find_command(name).ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
    debug!(command = command.name, args, "dispatching command");
    Ok((command.handler)(ctx, args))
}

/// The `help` listing: one line per command.
pub fn help_text(prefix: &str) -> String {
    let mut text = String::from("**Commands**\n");
    for cmd in COMMANDS {
        text.push_str(&format!(
            "`{prefix}{}` (`{prefix}{}`) {}\n",
            cmd.name, cmd.alias, cmd.description
        ));
    }
    text
}

// ── Handlers ──────────────────────────────────────────────────────────────

fn on_calc(ctx: &CommandContext, args: &str) -> Reply {
    match calculate(args) {
        Ok(value) => Reply::ok(format_number(value)),
        Err(CalcError::Empty) => Reply::failure("You're missing an expression!"),
        Err(CalcError::Parse(err)) => {
            Reply::failure(render_parse_failure(args, &err, &ctx.report))
        }
        Err(CalcError::Eval(err)) => Reply::failure(render_eval_failure(&err)),
    }
}

fn convert_with(args: &str, render: fn(i64) -> String) -> Reply {
    match convert::parse_integer(args) {
        Ok(value) => Reply::ok(render(value)),
        Err(err) => Reply::failure(conversion_failure(err)),
    }
}

fn conversion_failure(err: ConversionError) -> String {
    format!("Failed to convert! Error code: {}", err.label())
}

fn on_tobin(_ctx: &CommandContext, args: &str) -> Reply {
    convert_with(args, convert::to_bin)
}

fn on_tohex(_ctx: &CommandContext, args: &str) -> Reply {
    convert_with(args, convert::to_hex)
}

fn on_todec(_ctx: &CommandContext, args: &str) -> Reply {
    convert_with(args, convert::to_dec)
}

fn on_why(_ctx: &CommandContext, _args: &str) -> Reply {
    Reply::ok("¯\\_(ツ)_/¯")
}

fn on_help(ctx: &CommandContext, _args: &str) -> Reply {
    Reply::ok(help_text(&ctx.prefix))
}
