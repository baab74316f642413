/// Format of the diagnostic log written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub log_format: LogFormat,
    /// Reject records that fail `VehicleRecord::validate` instead of valuing them
    pub strict_input: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let log_format = match std::env::var("CARPRICER_LOG_FORMAT") {
            Ok(format) if format.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        let strict_input = std::env::var("CARPRICER_STRICT_INPUT")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        Self {
            log_format,
            strict_input,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("on"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_default_config_is_lenient() {
        let config = Config::default();
        assert_eq!(config.log_format, LogFormat::Text);
        assert!(!config.strict_input);
    }
}
