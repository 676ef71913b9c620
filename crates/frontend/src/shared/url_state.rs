//! Адаптер состояния к адресной строке браузера (History API).

use crate::shared::config::HistoryMode;
use contracts::shared::url_state::{UrlState, UrlStateAdapter};
use std::collections::BTreeMap;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Разобрать query-строку (`?a=1&b=2` или `a=1&b=2`).
/// Некорректная строка даёт пустое состояние.
pub fn decode_query(search: &str) -> UrlState {
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        return UrlState::new();
    }
    match serde_qs::from_str::<BTreeMap<String, String>>(query) {
        Ok(map) => UrlState::from(map),
        Err(e) => {
            log::warn!("cannot decode query string '{}': {}", query, e);
            UrlState::new()
        }
    }
}

/// Собрать query-строку с ведущим `?`; для пустого состояния - пустая строка
pub fn encode_query(state: &UrlState) -> String {
    if state.is_empty() {
        return String::new();
    }
    match serde_qs::to_string(state) {
        Ok(query) => format!("?{}", query),
        Err(e) => {
            log::warn!("cannot encode url state {:?}: {}", state, e);
            String::new()
        }
    }
}

/// Адаптер к `window.location` / `window.history`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserUrlAdapter {
    mode: HistoryMode,
}

impl BrowserUrlAdapter {
    pub fn new(mode: HistoryMode) -> Self {
        Self { mode }
    }
}

impl UrlStateAdapter for BrowserUrlAdapter {
    fn read(&self) -> UrlState {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        decode_query(&search)
    }

    fn write(&self, state: &UrlState) {
        let Some(w) = window() else {
            log::warn!("no window, url state is kept in memory only");
            return;
        };

        let path = w.location().pathname().unwrap_or_default();
        let hash = w.location().hash().unwrap_or_default();
        let new_url = format!("{}{}{}", path, encode_query(state), hash);

        let history = match w.history() {
            Ok(history) => history,
            Err(e) => {
                log::warn!("history API unavailable: {:?}", e);
                return;
            }
        };

        let result = match self.mode {
            HistoryMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(&new_url)),
            HistoryMode::Replace => {
                history.replace_state_with_url(&JsValue::NULL, "", Some(&new_url))
            }
        };
        if let Err(e) = result {
            log::warn!("failed to update address bar to '{}': {:?}", new_url, e);
        }
    }
}
