//! Tests for homework status interpretation

#[cfg(test)]
mod tests {
    use super::super::error::BotError;
    use super::super::status::parse_status;
    use serde_json::json;

    #[test]
    fn test_approved_verdict() {
        let record = json!({ "homework_name": "task1", "status": "approved" });
        assert_eq!(
            parse_status(&record).unwrap(),
            "Изменился статус проверки работы \"task1\". \
             Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_reviewing_verdict() {
        let record = json!({ "homework_name": "task1", "status": "reviewing" });
        assert_eq!(
            parse_status(&record).unwrap(),
            "Изменился статус проверки работы \"task1\". \
             Работа взята на проверку ревьюером."
        );
    }

    #[test]
    fn test_rejected_verdict() {
        let record = json!({ "homework_name": "task1", "status": "rejected" });
        assert_eq!(
            parse_status(&record).unwrap(),
            "Изменился статус проверки работы \"task1\". \
             Работа проверена: у ревьюера есть замечания."
        );
    }

    #[test]
    fn test_unknown_status() {
        let record = json!({ "homework_name": "task1", "status": "unknown" });
        match parse_status(&record) {
            Err(BotError::UnknownStatus(code)) => assert_eq!(code, "unknown"),
            other => panic!("Expected UnknownStatus, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_name_is_malformed() {
        let record = json!({ "status": "approved" });
        assert!(matches!(
            parse_status(&record),
            Err(BotError::MalformedRecord)
        ));
    }

    #[test]
    fn test_missing_status_is_malformed() {
        let record = json!({ "homework_name": "task1" });
        assert!(matches!(
            parse_status(&record),
            Err(BotError::MalformedRecord)
        ));
    }

    #[test]
    fn test_non_string_status_is_malformed() {
        let record = json!({ "homework_name": "task1", "status": 3 });
        assert!(matches!(
            parse_status(&record),
            Err(BotError::MalformedRecord)
        ));
    }
}
