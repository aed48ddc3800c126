//! Tests for configuration

#[cfg(test)]
mod tests {
    use super::super::config::*;

    fn full_config() -> Config {
        Config {
            practicum_token: "practicum-token".to_string(),
            telegram_token: "123:abc".to_string(),
            telegram_chat_id: "12345".to_string(),
        }
    }

    #[test]
    fn test_check_passes_with_all_values() {
        let config = full_config();
        assert!(config.check());
        assert!(config.missing().is_empty());
    }

    #[test]
    fn test_missing_lists_every_empty_variable() {
        let config = Config::default();
        assert!(!config.check());
        assert_eq!(
            config.missing(),
            vec![PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID]
        );
    }

    #[test]
    fn test_missing_single_value() {
        let config = Config {
            telegram_chat_id: String::new(),
            ..full_config()
        };
        assert!(!config.check());
        assert_eq!(config.missing(), vec![TELEGRAM_CHAT_ID]);
    }
}
