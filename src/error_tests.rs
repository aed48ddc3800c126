//! Tests for error display texts
//!
//! The texts matter: they are the dedup signature for error notifications.

#[cfg(test)]
mod tests {
    use super::super::error::BotError;

    #[test]
    fn test_missing_config_text() {
        let err = BotError::MissingConfig("PRACTICUM_TOKEN");
        assert_eq!(
            err.to_string(),
            "Отсутствует обязательная переменная окружения: PRACTICUM_TOKEN. \
             Программа принудительно остановлена."
        );
    }

    #[test]
    fn test_server_unavailability_text() {
        let err = BotError::ServerUnavailability {
            endpoint: "https://example.com/api/".to_string(),
            reason: "Код ответа API: 503".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Эндпоинт https://example.com/api/ недоступен. Код ответа API: 503"
        );
    }

    #[test]
    fn test_unknown_status_text() {
        let err = BotError::UnknownStatus("paused".to_string());
        assert_eq!(err.to_string(), "Статуса paused не существует!");
    }

    #[test]
    fn test_wrong_api_answer_text() {
        assert_eq!(
            BotError::WrongApiAnswer.to_string(),
            "Ожидаемые ключи в ответе API отсутствуют"
        );
    }

    #[test]
    fn test_delivery_text() {
        let err = BotError::Delivery("код ответа 502".to_string());
        assert_eq!(err.to_string(), "Сообщение не доставлено: код ответа 502");
    }
}
