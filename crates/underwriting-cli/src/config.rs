use underwriting_rules::DEFAULT_MODEL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Scoring model used when `--model` is not given.
    pub model: String,
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl CliConfig {
    /// Load from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let model = lookup("UNDERWRITING_MODEL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let log_format = match lookup("UNDERWRITING_LOG_FORMAT") {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Self { model, log_format }
    }

    /// Command-line flags win over the environment.
    pub fn with_overrides(mut self, model: Option<String>, log_format: Option<LogFormat>) -> Self {
        if let Some(model) = model {
            self.model = model;
        }
        if let Some(log_format) = log_format {
            self.log_format = log_format;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = CliConfig::from_lookup(lookup(&[]));
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.model, "probe_model_5l_profit");
    }

    #[test]
    fn test_env_values() {
        let config = CliConfig::from_lookup(lookup(&[
            ("UNDERWRITING_MODEL", " custom_model "),
            ("UNDERWRITING_LOG_FORMAT", "JSON"),
        ]));
        assert_eq!(config.model, "custom_model");
        assert_eq!(config.log_format, LogFormat::Json);

        let blank = CliConfig::from_lookup(lookup(&[("UNDERWRITING_MODEL", "  ")]));
        assert_eq!(blank.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_overrides_win() {
        let config = CliConfig::from_lookup(lookup(&[("UNDERWRITING_LOG_FORMAT", "json")]))
            .with_overrides(Some("other".to_string()), Some(LogFormat::Pretty));
        assert_eq!(config.model, "other");
        assert_eq!(config.log_format, LogFormat::Pretty);

        let untouched = CliConfig::default().with_overrides(None, None);
        assert_eq!(untouched, CliConfig::default());
    }
}
