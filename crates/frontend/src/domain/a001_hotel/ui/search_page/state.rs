use crate::shared::url_state::{encode_query, BrowserUrlAdapter};
use contracts::domain::a001_hotel::{FilterUpdate, Hotel, HotelFilter, SearchPageController};
use contracts::shared::url_state::UrlStateStore;
use leptos::prelude::*;

/// Реактивная обёртка над `SearchPageController`.
///
/// Контроллер хранится как локальное значение, а `revision` увеличивается
/// после каждого изменения, чтобы перерисовать зависимые части страницы.
#[derive(Clone, Copy)]
pub struct SearchPageState {
    controller: StoredValue<SearchPageController<BrowserUrlAdapter>, LocalStorage>,
    revision: RwSignal<u64>,
}

impl SearchPageState {
    pub fn new(adapter: BrowserUrlAdapter) -> Self {
        let mut store = UrlStateStore::new(adapter);
        store.subscribe(|state| {
            log::debug!("address bar now: '{}'", encode_query(state));
        });

        Self {
            controller: StoredValue::new_local(SearchPageController::new(store)),
            revision: RwSignal::new(0),
        }
    }

    fn touch(&self) {
        self.revision.update(|rev| *rev = rev.wrapping_add(1));
    }

    pub fn filters(&self) -> HotelFilter {
        self.revision.track();
        self.controller.with_value(|page| page.filters())
    }

    pub fn visible_hotels(&self, hotels: &[Hotel]) -> Vec<Hotel> {
        self.revision.track();
        self.controller.with_value(|page| page.visible_hotels(hotels))
    }

    pub fn is_filter_bar_open(&self) -> bool {
        self.revision.track();
        self.controller.with_value(|page| page.is_filter_bar_open())
    }

    pub fn toggle_filter_bar(&self) {
        self.controller.update_value(|page| {
            page.toggle_filter_bar();
        });
        self.touch();
    }

    pub fn on_filters_change(&self, update: FilterUpdate) {
        self.controller
            .update_value(|page| page.on_filters_change(update));
        self.touch();
    }

    pub fn clear_filters(&self) {
        self.controller.update_value(|page| page.clear_filters());
        self.touch();
    }

    /// Вызывается на `popstate`: адрес изменился кнопками браузера
    pub fn sync_from_location(&self) {
        let mut changed = false;
        self.controller
            .update_value(|page| changed = page.sync_from_adapter());
        if changed {
            self.touch();
        }
    }
}
