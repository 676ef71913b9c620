use super::aggregate::Hotel;
use super::filter::{FilterUpdate, HotelFilter};
use crate::shared::url_state::{UrlStateAdapter, UrlStateStore};

/// Состояние страницы результатов поиска.
///
/// Фильтры живут только в адресной строке (через `UrlStateStore`),
/// локально хранится лишь флаг открытой боковой панели фильтров.
pub struct SearchPageController<A: UrlStateAdapter> {
    store: UrlStateStore<A>,
    is_filter_bar_open: bool,
}

impl<A: UrlStateAdapter> SearchPageController<A> {
    pub fn new(store: UrlStateStore<A>) -> Self {
        Self {
            store,
            is_filter_bar_open: false,
        }
    }

    pub fn with_adapter(adapter: A) -> Self {
        Self::new(UrlStateStore::new(adapter))
    }

    pub fn store(&self) -> &UrlStateStore<A> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut UrlStateStore<A> {
        &mut self.store
    }

    /// Текущие критерии, выведенные из адресной строки
    pub fn filters(&self) -> HotelFilter {
        HotelFilter::from_url_state(self.store.state())
    }

    pub fn is_filter_bar_open(&self) -> bool {
        self.is_filter_bar_open
    }

    pub fn toggle_filter_bar(&mut self) -> bool {
        self.is_filter_bar_open = !self.is_filter_bar_open;
        log::debug!("filter bar open: {}", self.is_filter_bar_open);
        self.is_filter_bar_open
    }

    /// Единственный путь изменения фильтров: слияние с адресной строкой
    pub fn on_filters_change(&mut self, update: FilterUpdate) {
        if update.is_empty() {
            return;
        }
        log::debug!("filters change: {:?}", update);
        self.store.merge(update.to_pairs());
    }

    pub fn clear_filters(&mut self) {
        self.on_filters_change(FilterUpdate::reset());
    }

    /// Перечитать адресную строку (назад/вперёд в браузере)
    pub fn sync_from_adapter(&mut self) -> bool {
        self.store.sync_from_adapter()
    }

    /// Видимые отели: каталог, пропущенный через текущие фильтры
    pub fn visible_hotels(&self, hotels: &[Hotel]) -> Vec<Hotel> {
        self.filters().apply(hotels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_hotel::aggregate::{Price, Rate};
    use crate::shared::url_state::{MemoryUrlAdapter, UrlState};

    fn hotels() -> Vec<Hotel> {
        [("Grand", 4.0, "true"), ("Budget Inn", 2.0, "false")]
            .into_iter()
            .map(|(name, rate, pool)| Hotel {
                name: name.to_string(),
                address: String::new(),
                img: String::new(),
                rate: Rate::Number(rate),
                price: Price { single: 50.0 },
                has_pool: pool.to_string(),
            })
            .collect()
    }

    fn controller(initial: &[(&str, &str)]) -> SearchPageController<MemoryUrlAdapter> {
        let state: UrlState = initial.iter().copied().collect();
        SearchPageController::with_adapter(MemoryUrlAdapter::with_state(state))
    }

    #[test]
    fn test_toggle_filter_bar_twice_restores_value() {
        let mut page = controller(&[]);
        assert!(!page.is_filter_bar_open());
        assert!(page.toggle_filter_bar());
        assert!(!page.toggle_filter_bar());
        assert!(!page.is_filter_bar_open());
    }

    #[test]
    fn test_toggle_filter_bar_does_not_touch_url() {
        let mut page = controller(&[("stars", "3")]);
        page.toggle_filter_bar();
        assert!(page.store().adapter().history().is_empty());
    }

    #[test]
    fn test_partial_update_keeps_other_filters() {
        let mut page = controller(&[("name", "grand"), ("hasPool", "true")]);

        page.on_filters_change(FilterUpdate::stars(4));

        let url = page.store().adapter().read();
        assert_eq!(url.get("stars"), Some("4"));
        assert_eq!(url.get("name"), Some("grand"));
        assert_eq!(url.get("hasPool"), Some("true"));

        let filters = page.filters();
        assert_eq!(filters.stars, 4);
        assert_eq!(filters.name, "grand");
        assert!(filters.has_pool);
    }

    #[test]
    fn test_visible_hotels_follow_url_state() {
        let mut page = controller(&[]);
        let all = hotels();
        assert_eq!(page.visible_hotels(&all).len(), 2);

        page.on_filters_change(FilterUpdate::stars(3));
        page.on_filters_change(FilterUpdate::has_pool(true));
        let visible = page.visible_hotels(&all);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Grand");

        page.clear_filters();
        assert!(page.filters().is_default());
        assert_eq!(page.visible_hotels(&all), all);
    }

    #[test]
    fn test_empty_update_is_ignored() {
        let mut page = controller(&[]);
        page.on_filters_change(FilterUpdate::default());
        assert!(page.store().adapter().history().is_empty());
    }

    #[test]
    fn test_sync_from_adapter_rederives_filters() {
        let mut page = controller(&[("stars", "5")]);
        assert_eq!(page.filters().stars, 5);

        page.store()
            .adapter()
            .replace_externally([("name", "inn")].into_iter().collect());
        assert!(page.sync_from_adapter());

        let filters = page.filters();
        assert_eq!(filters.stars, 1);
        assert_eq!(filters.name, "inn");
        assert_eq!(page.visible_hotels(&hotels())[0].name, "Budget Inn");
    }
}
