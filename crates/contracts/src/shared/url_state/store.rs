use super::{UrlState, UrlStateAdapter};

/// Идентификатор подписки, возвращается из [`UrlStateStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&UrlState)>;

/// Хранилище состояния адресной строки.
///
/// Держит последнюю известную копию состояния, пишет изменения через
/// адаптер и уведомляет подписчиков. Все операции синхронные.
pub struct UrlStateStore<A: UrlStateAdapter> {
    adapter: A,
    state: UrlState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<A: UrlStateAdapter> UrlStateStore<A> {
    pub fn new(adapter: A) -> Self {
        let state = adapter.read();
        Self {
            adapter,
            state,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> &UrlState {
        &self.state
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Заменить состояние целиком. Одинаковое состояние не записывается.
    pub fn set(&mut self, state: UrlState) {
        if state == self.state {
            return;
        }
        log::debug!("url state write: {:?}", state);
        self.adapter.write(&state);
        self.state = state;
        self.notify();
    }

    /// Слить частичное обновление с текущим состоянием и записать
    pub fn merge<I, K, V>(&mut self, update: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let next = self.state.merged(update);
        self.set(next);
    }

    /// Перечитать состояние из адаптера после внешнего изменения адреса.
    /// Возвращает `true`, если состояние изменилось.
    pub fn sync_from_adapter(&mut self) -> bool {
        let external = self.adapter.read();
        if external == self.state {
            return false;
        }
        log::debug!("url state changed externally: {:?}", external);
        self.state = external;
        self.notify();
        true
    }

    pub fn subscribe(&mut self, listener: impl Fn(&UrlState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }
}

impl<A: UrlStateAdapter + std::fmt::Debug> std::fmt::Debug for UrlStateStore<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlStateStore")
            .field("adapter", &self.adapter)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::url_state::MemoryUrlAdapter;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_new_reads_initial_state_from_adapter() {
        let initial: UrlState = [("stars", "3")].into_iter().collect();
        let store = UrlStateStore::new(MemoryUrlAdapter::with_state(initial.clone()));
        assert_eq!(store.state(), &initial);
        assert!(store.adapter().history().is_empty());
    }

    #[test]
    fn test_merge_writes_through_adapter() {
        let initial: UrlState = [("name", "grand"), ("hasPool", "true")].into_iter().collect();
        let mut store = UrlStateStore::new(MemoryUrlAdapter::with_state(initial));

        store.merge([("stars", "4")]);

        let written = store.adapter().read();
        assert_eq!(written.get("stars"), Some("4"));
        assert_eq!(written.get("name"), Some("grand"));
        assert_eq!(written.get("hasPool"), Some("true"));
        assert_eq!(store.adapter().history().len(), 1);
    }

    #[test]
    fn test_unchanged_state_is_not_written() {
        let initial: UrlState = [("stars", "4")].into_iter().collect();
        let mut store = UrlStateStore::new(MemoryUrlAdapter::with_state(initial));

        store.merge([("stars", "4")]);
        assert!(store.adapter().history().is_empty());
    }

    #[test]
    fn test_subscribers_are_notified() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = UrlStateStore::new(MemoryUrlAdapter::new());

        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |state| {
            sink.borrow_mut().push(state.get("stars").unwrap_or_default().to_string());
        });

        store.merge([("stars", "2")]);
        store.merge([("stars", "5")]);
        assert!(store.unsubscribe(id));
        store.merge([("stars", "3")]);

        assert_eq!(*seen.borrow(), vec!["2".to_string(), "5".to_string()]);
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn test_sync_from_adapter() {
        let mut store = UrlStateStore::new(MemoryUrlAdapter::new());
        let hits = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&hits);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(!store.sync_from_adapter());

        store
            .adapter()
            .replace_externally([("name", "inn")].into_iter().collect());
        assert!(store.sync_from_adapter());
        assert_eq!(store.state().get("name"), Some("inn"));
        assert_eq!(*hits.borrow(), 1);
        // внешнее изменение не пишется обратно
        assert!(store.adapter().history().is_empty());
    }
}
