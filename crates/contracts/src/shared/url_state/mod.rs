//! Состояние адресной строки как набор пар ключ-значение.
//!
//! Хранилище не знает синтаксиса URL: разбор и сборка query-строки
//! выполняются адаптером (`UrlStateAdapter`), например браузерным.

mod memory;
mod store;

pub use memory::MemoryUrlAdapter;
pub use store::{SubscriptionId, UrlStateStore};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Упорядоченное отображение `ключ -> значение` из адресной строки
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlState(BTreeMap<String, String>);

impl UrlState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Новое состояние: текущие пары, поверх которых записаны `update`.
    /// Ключи, отсутствующие в `update`, не трогаются.
    pub fn merged<I, K, V>(&self, update: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut next = self.clone();
        for (key, value) in update {
            next.insert(key, value);
        }
        next
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UrlState {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, String>> for UrlState {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

/// Адаптер к внешнему носителю состояния (адресная строка, память).
pub trait UrlStateAdapter {
    /// Прочитать текущее состояние носителя
    fn read(&self) -> UrlState;

    /// Записать состояние в носитель
    fn write(&self, state: &UrlState);
}
