//! Homework status interpretation

use crate::error::{BotError, Result};
use serde_json::Value;

/// Verdict sentences for the recognized review statuses.
pub const VERDICTS: &[(&str, &str)] = &[
    ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
    ("reviewing", "Работа взята на проверку ревьюером."),
    ("rejected", "Работа проверена: у ревьюера есть замечания."),
];

/// Turn one homework record into its notification text.
///
/// The record must carry string `homework_name` and `status` fields, and the
/// status must be one of the verdict table entries.
pub fn parse_status(homework: &Value) -> Result<String> {
    let name = homework.get("homework_name").and_then(Value::as_str);
    let status = homework.get("status").and_then(Value::as_str);

    let (name, status) = match (name, status) {
        (Some(name), Some(status)) => (name, status),
        _ => return Err(BotError::MalformedRecord),
    };

    let verdict = VERDICTS
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, verdict)| *verdict)
        .ok_or_else(|| BotError::UnknownStatus(status.to_string()))?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name, verdict
    ))
}
