//! mathbot engine as a WASM module for browser environments.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { calc, run_command } from 'mathbot-wasm';
//!
//! await init();
//!
//! console.log(JSON.parse(calc("2 + 3 * 4")));
//! // { success: true, value: 14, display: "14", error: null }
//! ```

use mathbot_engine::{CommandContext, Reply, ReportOptions};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Calculate an expression.
///
/// Returns a JSON string containing a `CalcOutcome`:
/// ```json
/// { "success": false, "value": null, "display": null,
///   "error": { "stage": "parse", "code": "UNCLOSED_PARENTHESES", "message": "...", "index": 0 } }
/// ```
#[wasm_bindgen]
pub fn calc(expression: &str) -> String {
    to_json(&mathbot_engine::calculate_to_outcome(expression))
}

/// Run any command from the command table (`calc`, `tohex`, `help`, ...).
///
/// Returns a JSON `Reply` (`{ "success": bool, "text": string }`). Unknown
/// commands produce a failed reply rather than an exception.
#[wasm_bindgen]
pub fn run_command(name: &str, args: &str, prefix: &str) -> String {
    let ctx = CommandContext {
        prefix: prefix.to_string(),
        report: ReportOptions { color: false },
    };
    let reply = mathbot_engine::dispatch(&ctx, name, args).unwrap_or_else(|e| Reply {
        success: false,
        text: e.to_string(),
    });
    to_json(&reply)
}

/// Return the engine version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        format!(
            r#"{{"success":false,"text":"Serialization error: {}"}}"#,
            e
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_json() {
        let json: serde_json::Value = serde_json::from_str(&calc("2 + 3 * 4")).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["display"], "14");
    }

    #[test]
    fn test_unknown_command_is_a_failed_reply() {
        let json: serde_json::Value =
            serde_json::from_str(&run_command("ping", "", "+")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["text"], "unknown command: ping");
    }

    #[test]
    fn test_help_prefix() {
        let json: serde_json::Value = serde_json::from_str(&run_command("h", "", "/")).unwrap();
        assert!(json["text"].as_str().unwrap().contains("`/calc`"));
    }
}
