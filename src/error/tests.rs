//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod qb_error_tests {
    use super::*;
    use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_upstream_status_error_conversion() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let reqwest_error = reqwest::get(mock_server.uri())
            .await
            .unwrap()
            .error_for_status()
            .unwrap_err();
        let qb_error = QbError::from(reqwest_error);

        assert!(qb_error.is_upstream());
        assert!(!qb_error.is_persistence());
        assert!(qb_error.to_string().contains("Upstream stats request failed"));
    }

    #[test]
    fn test_persistence_error_conversion() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let sql_error = conn
            .execute("INSERT INTO missing_table VALUES (1)", [])
            .unwrap_err();
        let qb_error = QbError::from(sql_error);

        match qb_error {
            QbError::Persistence(_) => (),
            _ => panic!("Expected Persistence error variant"),
        }
        assert!(qb_error.is_persistence());
        assert!(!qb_error.is_upstream());
    }

    #[test]
    fn test_lock_poisoned_counts_as_persistence() {
        let error = QbError::LockPoisoned;
        assert!(error.is_persistence());
        assert_eq!(error.to_string(), "Database connection lock poisoned");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let qb_error = QbError::from(json_error);

        match qb_error {
            QbError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let qb_error = QbError::from(io_error);

        match qb_error {
            QbError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_missing_api_key_error() {
        let error = QbError::MissingApiKey {
            env_var: "SPORTS_API_KEY".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("API key not provided"));
        assert!(error_string.contains("SPORTS_API_KEY"));
    }

    #[test]
    fn test_config_error() {
        let error = QbError::Config {
            message: "PORT must be a number".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration error: PORT must be a number"
        );
    }

    #[test]
    fn test_invalid_input_helper() {
        let error = QbError::invalid_input("season", "must not be empty");

        match &error {
            QbError::InvalidInput { field, message } => {
                assert_eq!(field, "season");
                assert_eq!(message, "must not be empty");
            }
            _ => panic!("Expected InvalidInput error variant"),
        }
        assert_eq!(error.to_string(), "Invalid season: must not be empty");
    }
}
