//! Error types
//!
//! Display texts double as the operator-facing failure signature: the poller
//! formats them into the error notification, so they stay in the wording the
//! operator chat expects.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BotError>;

#[derive(Debug, Error)]
pub enum BotError {
    /// A required environment variable is unset or empty. Fatal at startup,
    /// never forwarded to the chat.
    #[error(
        "Отсутствует обязательная переменная окружения: {0}. \
         Программа принудительно остановлена."
    )]
    MissingConfig(&'static str),

    /// The status API endpoint could not be reached or answered non-200.
    #[error("Эндпоинт {endpoint} недоступен. {reason}")]
    ServerUnavailability { endpoint: String, reason: String },

    /// The API response is not a JSON object.
    #[error("Формат ответа API не словарь")]
    TypeMismatch,

    /// The API response lacks the expected keys.
    #[error("Ожидаемые ключи в ответе API отсутствуют")]
    WrongApiAnswer,

    /// The homework records field is present but not a list.
    #[error("Домашние работы в ответе API представлены не списком")]
    HomeworkListShape,

    /// A homework record lacks its name or status field.
    #[error("Неверный формат данных домашней работы")]
    MalformedRecord,

    /// A homework record carries a status outside the verdict table.
    #[error("Статуса {0} не существует!")]
    UnknownStatus(String),

    /// The Telegram send call failed.
    #[error("Сообщение не доставлено: {0}")]
    Delivery(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
