//! mathbot engine: orchestrates the expression pipeline.
//!
//! ```text
//! Expression → Tokenizer → Shunting-yard → Postfix → Evaluator → f64
//! ```
//!
//! Also hosts the pieces that sit around the pipeline: result formatting,
//! parse-failure reports, base conversion, and the command table.

pub mod command;
pub mod convert;
pub mod format;
mod pipeline;

pub use command::{dispatch, find_command, help_text, Command, CommandContext, Reply, COMMANDS};
pub use convert::ConversionError;
pub use format::{format_number, ReportOptions};
pub use pipeline::{calculate, calculate_to_outcome, CalcError, CalcOutcome, OutcomeError, Stage};
