use contracts::enums::PageSize;

/// Dashboard configuration, fixed at build time.
///
/// Every value can be overridden through an environment variable read by
/// `option_env!` when the bundle is built:
///
/// | variable                    | default                          |
/// |-----------------------------|----------------------------------|
/// | `SALES_API_BASE`            | current host on `SALES_API_PORT` |
/// | `SALES_API_PORT`            | `5000`                           |
/// | `SALES_SEARCH_DEBOUNCE_MS`  | `500`                            |
/// | `SALES_DEFAULT_PAGE_SIZE`   | `10`                             |
/// | `SALES_LOG_LEVEL`           | `debug`                          |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub api_base: Option<String>,
    pub api_port: u16,
    pub search_debounce_ms: u32,
    pub default_page_size: PageSize,
    pub log_level: log::Level,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            api_port: 5000,
            search_debounce_ms: 500,
            default_page_size: PageSize::default(),
            log_level: log::Level::Debug,
        }
    }
}

/// Raw override values, as found in the environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigSource<'a> {
    pub api_base: Option<&'a str>,
    pub api_port: Option<&'a str>,
    pub search_debounce_ms: Option<&'a str>,
    pub default_page_size: Option<&'a str>,
    pub log_level: Option<&'a str>,
}

impl ConfigSource<'static> {
    pub fn from_build_env() -> Self {
        Self {
            api_base: option_env!("SALES_API_BASE"),
            api_port: option_env!("SALES_API_PORT"),
            search_debounce_ms: option_env!("SALES_SEARCH_DEBOUNCE_MS"),
            default_page_size: option_env!("SALES_DEFAULT_PAGE_SIZE"),
            log_level: option_env!("SALES_LOG_LEVEL"),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from the build environment
    ///
    /// Logging is not initialised yet at this point, so rejected overrides
    /// are returned as warnings for the caller to log.
    pub fn from_build_env() -> (Self, Vec<String>) {
        Self::from_source(ConfigSource::from_build_env())
    }

    /// Apply overrides on top of the defaults; an invalid value keeps the
    /// default and produces a warning.
    pub fn from_source(source: ConfigSource<'_>) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        config.api_base = source
            .api_base
            .map(|base| base.trim().trim_end_matches('/'))
            .filter(|base| !base.is_empty())
            .map(str::to_string);

        if let Some(raw) = source.api_port {
            match raw.trim().parse::<u16>() {
                Ok(port) if port > 0 => config.api_port = port,
                _ => warnings.push(format!("SALES_API_PORT: invalid port '{raw}'")),
            }
        }

        if let Some(raw) = source.search_debounce_ms {
            match raw.trim().parse::<u32>() {
                Ok(ms) => config.search_debounce_ms = ms,
                Err(_) => warnings.push(format!("SALES_SEARCH_DEBOUNCE_MS: invalid delay '{raw}'")),
            }
        }

        if let Some(raw) = source.default_page_size {
            match raw.trim().parse::<u32>().ok().and_then(PageSize::from_value) {
                Some(size) => config.default_page_size = size,
                None => warnings.push(format!(
                    "SALES_DEFAULT_PAGE_SIZE: '{raw}' is not one of 5, 10, 20, 50"
                )),
            }
        }

        if let Some(raw) = source.log_level {
            match raw.trim().parse::<log::Level>() {
                Ok(level) => config.log_level = level,
                Err(_) => warnings.push(format!("SALES_LOG_LEVEL: unknown level '{raw}'")),
            }
        }

        (config, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_overrides() {
        let (config, warnings) = DashboardConfig::from_source(ConfigSource::default());
        assert_eq!(config, DashboardConfig::default());
        assert!(warnings.is_empty());
        assert_eq!(config.search_debounce_ms, 500);
        assert_eq!(config.default_page_size, PageSize::Ten);
    }

    #[test]
    fn test_overrides_are_applied() {
        let (config, warnings) = DashboardConfig::from_source(ConfigSource {
            api_base: Some(" https://sales.example.com/ "),
            api_port: Some("8080"),
            search_debounce_ms: Some("250"),
            default_page_size: Some("20"),
            log_level: Some("warn"),
        });
        assert!(warnings.is_empty());
        assert_eq!(config.api_base.as_deref(), Some("https://sales.example.com"));
        assert_eq!(config.api_port, 8080);
        assert_eq!(config.search_debounce_ms, 250);
        assert_eq!(config.default_page_size, PageSize::Twenty);
        assert_eq!(config.log_level, log::Level::Warn);
    }

    #[test]
    fn test_invalid_overrides_fall_back_with_warnings() {
        let (config, warnings) = DashboardConfig::from_source(ConfigSource {
            api_base: Some("   "),
            api_port: Some("0"),
            search_debounce_ms: Some("soon"),
            default_page_size: Some("25"),
            log_level: Some("loud"),
        });
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(warnings.len(), 4);
    }
}
