use super::{UrlState, UrlStateAdapter};
use std::cell::RefCell;

/// Адаптер, хранящий состояние в памяти.
///
/// Используется в тестах и как запасной вариант, когда нет окна браузера.
/// Все записи сохраняются в `history()` в порядке поступления.
#[derive(Debug, Default)]
pub struct MemoryUrlAdapter {
    current: RefCell<UrlState>,
    writes: RefCell<Vec<UrlState>>,
}

impl MemoryUrlAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: UrlState) -> Self {
        Self {
            current: RefCell::new(state),
            writes: RefCell::new(Vec::new()),
        }
    }

    /// Все записанные состояния
    pub fn history(&self) -> Vec<UrlState> {
        self.writes.borrow().clone()
    }

    /// Имитация внешнего изменения адреса (кнопки назад/вперёд)
    pub fn replace_externally(&self, state: UrlState) {
        *self.current.borrow_mut() = state;
    }
}

impl UrlStateAdapter for MemoryUrlAdapter {
    fn read(&self) -> UrlState {
        self.current.borrow().clone()
    }

    fn write(&self, state: &UrlState) {
        *self.current.borrow_mut() = state.clone();
        self.writes.borrow_mut().push(state.clone());
    }
}
