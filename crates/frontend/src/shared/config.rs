use serde::Deserialize;
use web_sys::window;

/// Ключ localStorage, в котором можно переопределить конфигурацию (TOML)
pub const CONFIG_STORAGE_KEY: &str = "hotel_search.config";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub url_state: UrlStateConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

/// Как запись фильтров попадает в историю браузера
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Каждое изменение фильтров - новая запись (работает «Назад»)
    #[default]
    Push,
    /// Текущая запись заменяется
    Replace,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct UrlStateConfig {
    #[serde(default)]
    pub history: HistoryMode,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    /// Задержка перед записью поиска по названию в адресную строку
    pub name_debounce_ms: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            name_debounce_ms: 300,
        }
    }
}

impl AppConfig {
    /// Уровень логирования; неизвестное значение трактуется как `debug`
    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[logging]
level = "debug"

[url_state]
history = "push"

[search]
name_debounce_ms = 300
"#;

pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents)?;
    Ok(config)
}

/// Load configuration
///
/// Search order:
/// 1. `localStorage["hotel_search.config"]` (удобно для отладки в браузере)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<AppConfig> {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    if let Some(contents) = stored {
        return parse_config(&contents);
    }

    parse_config(DEFAULT_CONFIG)
}
