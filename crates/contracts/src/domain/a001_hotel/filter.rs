use super::aggregate::Hotel;
use crate::shared::url_state::UrlState;

/// Ключи фильтров в адресной строке
pub const KEY_STARS: &str = "stars";
pub const KEY_NAME: &str = "name";
pub const KEY_HAS_POOL: &str = "hasPool";

/// Минимальный рейтинг по умолчанию; при нём фильтр по звёздам не действует
pub const DEFAULT_STARS: i64 = 1;

/// Критерии фильтрации списка отелей.
///
/// Не хранится отдельно: каждый раз выводится из состояния адресной строки.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelFilter {
    pub stars: i64,
    pub name: String,
    pub has_pool: bool,
}

impl Default for HotelFilter {
    fn default() -> Self {
        Self {
            stars: DEFAULT_STARS,
            name: String::new(),
            has_pool: false,
        }
    }
}

impl HotelFilter {
    /// Разобрать критерии из адресной строки.
    ///
    /// Отсутствующие и некорректные значения заменяются значениями по умолчанию.
    pub fn from_url_state(state: &UrlState) -> Self {
        let stars = state
            .get(KEY_STARS)
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map(|stars| stars.max(DEFAULT_STARS))
            .unwrap_or(DEFAULT_STARS);

        Self {
            stars,
            name: state.get(KEY_NAME).unwrap_or_default().to_string(),
            has_pool: state.get(KEY_HAS_POOL) == Some("true"),
        }
    }

    /// Нормализованная подстрока для поиска по имени (trim + lowercase)
    pub fn name_needle(&self) -> String {
        self.name.trim().to_lowercase()
    }

    /// Применить все три этапа по порядку: звёзды, имя, бассейн
    pub fn apply(&self, hotels: &[Hotel]) -> Vec<Hotel> {
        let by_stars = filter_by_stars(self.stars, hotels);
        let by_name = filter_by_name(&self.name_needle(), &by_stars);
        filter_by_pool(self.has_pool, &by_name)
    }

    /// Количество активных этапов фильтрации
    pub fn active_count(&self) -> usize {
        [
            self.stars > DEFAULT_STARS,
            !self.name_needle().is_empty(),
            self.has_pool,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn is_default(&self) -> bool {
        self.active_count() == 0
    }
}

/// Этап 1: минимальный рейтинг. При `stars <= 1` список не меняется.
pub fn filter_by_stars(stars: i64, hotels: &[Hotel]) -> Vec<Hotel> {
    if stars <= DEFAULT_STARS {
        return hotels.to_vec();
    }
    let threshold = stars as f64;
    hotels
        .iter()
        .filter(|hotel| hotel.rating() >= threshold)
        .cloned()
        .collect()
}

/// Этап 2: подстрока в названии без учёта регистра. Пустая строка не фильтрует.
pub fn filter_by_name(needle: &str, hotels: &[Hotel]) -> Vec<Hotel> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return hotels.to_vec();
    }
    hotels
        .iter()
        .filter(|hotel| hotel.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Этап 3: только отели с бассейном
pub fn filter_by_pool(has_pool: bool, hotels: &[Hotel]) -> Vec<Hotel> {
    if !has_pool {
        return hotels.to_vec();
    }
    hotels
        .iter()
        .filter(|hotel| hotel.has_pool())
        .cloned()
        .collect()
}

/// Частичное изменение фильтров. Поля `None` не меняются.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub stars: Option<i64>,
    pub name: Option<String>,
    pub has_pool: Option<bool>,
}

impl FilterUpdate {
    pub fn stars(stars: i64) -> Self {
        Self {
            stars: Some(stars),
            ..Self::default()
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn has_pool(has_pool: bool) -> Self {
        Self {
            has_pool: Some(has_pool),
            ..Self::default()
        }
    }

    /// Сброс всех фильтров к нейтральным значениям
    pub fn reset() -> Self {
        Self {
            stars: Some(DEFAULT_STARS),
            name: Some(String::new()),
            has_pool: Some(false),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_none() && self.name.is_none() && self.has_pool.is_none()
    }

    /// Пары для записи в адресную строку
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(stars) = self.stars {
            pairs.push((KEY_STARS, stars.to_string()));
        }
        if let Some(name) = &self.name {
            pairs.push((KEY_NAME, name.clone()));
        }
        if let Some(has_pool) = self.has_pool {
            pairs.push((KEY_HAS_POOL, has_pool.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_hotel::aggregate::{Price, Rate};

    fn hotel(name: &str, rate: Rate, has_pool: &str) -> Hotel {
        Hotel {
            name: name.to_string(),
            address: "Main st. 1".to_string(),
            img: "/img/hotel.jpg".to_string(),
            rate,
            price: Price { single: 100.0 },
            has_pool: has_pool.to_string(),
        }
    }

    fn sample() -> Vec<Hotel> {
        vec![
            hotel("Grand", Rate::Number(4.0), "true"),
            hotel("Budget Inn", Rate::Number(2.0), "false"),
        ]
    }

    fn names(hotels: &[Hotel]) -> Vec<&str> {
        hotels.iter().map(|h| h.name.as_str()).collect()
    }

    #[test]
    fn test_stars_at_or_below_one_is_identity() {
        let hotels = sample();
        assert_eq!(filter_by_stars(1, &hotels), hotels);
        assert_eq!(filter_by_stars(0, &hotels), hotels);
        assert_eq!(filter_by_stars(-3, &hotels), hotels);
    }

    #[test]
    fn test_stars_threshold() {
        let mut hotels = sample();
        hotels.push(hotel("Palace", Rate::from("5"), "false"));
        hotels.push(hotel("Hostel", Rate::from("3"), "false"));

        assert_eq!(names(&filter_by_stars(3, &hotels)), vec!["Grand", "Palace", "Hostel"]);
        assert_eq!(names(&filter_by_stars(5, &hotels)), vec!["Palace"]);
        assert!(filter_by_stars(6, &hotels).is_empty());
    }

    #[test]
    fn test_stars_excludes_non_numeric_rating() {
        let hotels = vec![
            hotel("Mystery", Rate::from("unknown"), "true"),
            hotel("Grand", Rate::Number(4.0), "true"),
        ];
        assert_eq!(names(&filter_by_stars(2, &hotels)), vec!["Grand"]);
        // без фильтра по звёздам такой отель остаётся в списке
        assert_eq!(filter_by_stars(1, &hotels).len(), 2);
    }

    #[test]
    fn test_name_filter() {
        let hotels = sample();
        assert_eq!(filter_by_name("", &hotels), hotels);
        assert_eq!(filter_by_name("   ", &hotels), hotels);
        assert_eq!(names(&filter_by_name("INN", &hotels)), vec!["Budget Inn"]);
        assert_eq!(names(&filter_by_name(" gra ", &hotels)), vec!["Grand"]);
        assert!(filter_by_name("plaza", &hotels).is_empty());
    }

    #[test]
    fn test_pool_filter() {
        let mut hotels = sample();
        hotels.push(hotel("Odd", Rate::Number(3.0), "True"));

        assert_eq!(filter_by_pool(false, &hotels), hotels);
        assert_eq!(names(&filter_by_pool(true, &hotels)), vec!["Grand"]);
    }

    #[test]
    fn test_apply_stars_and_pool() {
        let filter = HotelFilter {
            stars: 3,
            name: String::new(),
            has_pool: true,
        };
        assert_eq!(names(&filter.apply(&sample())), vec!["Grand"]);
    }

    #[test]
    fn test_apply_name_only() {
        let filter = HotelFilter {
            stars: 1,
            name: "inn".to_string(),
            has_pool: false,
        };
        assert_eq!(names(&filter.apply(&sample())), vec!["Budget Inn"]);
    }

    #[test]
    fn test_apply_is_intersection_of_stages() {
        let hotels = vec![
            hotel("Sea Breeze Resort", Rate::Number(5.0), "true"),
            hotel("Sea View Inn", Rate::Number(3.0), "true"),
            hotel("Sea Side Motel", Rate::Number(4.0), "false"),
            hotel("City Resort", Rate::Number(4.0), "true"),
        ];
        let filter = HotelFilter {
            stars: 4,
            name: "sea".to_string(),
            has_pool: true,
        };

        let combined = filter.apply(&hotels);
        let by_stars = filter_by_stars(4, &hotels);
        let by_name = filter_by_name("sea", &hotels);
        let by_pool = filter_by_pool(true, &hotels);
        let intersection: Vec<Hotel> = hotels
            .iter()
            .filter(|h| by_stars.contains(h) && by_name.contains(h) && by_pool.contains(h))
            .cloned()
            .collect();

        assert_eq!(combined, intersection);
        assert_eq!(names(&combined), vec!["Sea Breeze Resort"]);
    }

    #[test]
    fn test_from_url_state_defaults() {
        let filter = HotelFilter::from_url_state(&UrlState::new());
        assert_eq!(filter, HotelFilter::default());
        assert!(filter.is_default());
    }

    #[test]
    fn test_from_url_state_parses_values() {
        let state: UrlState = [("stars", "4"), ("name", "Grand"), ("hasPool", "true")]
            .into_iter()
            .collect();
        let filter = HotelFilter::from_url_state(&state);

        assert_eq!(filter.stars, 4);
        assert_eq!(filter.name, "Grand");
        assert!(filter.has_pool);
        assert_eq!(filter.active_count(), 3);
    }

    #[test]
    fn test_from_url_state_malformed_values_fall_back() {
        let state: UrlState = [("stars", "lots"), ("hasPool", "yes")].into_iter().collect();
        let filter = HotelFilter::from_url_state(&state);
        assert_eq!(filter.stars, DEFAULT_STARS);
        assert!(!filter.has_pool);

        let state: UrlState = [("stars", "-2")].into_iter().collect();
        assert_eq!(HotelFilter::from_url_state(&state).stars, DEFAULT_STARS);
    }

    #[test]
    fn test_update_pairs() {
        assert_eq!(FilterUpdate::stars(4).to_pairs(), vec![("stars", "4".to_string())]);
        assert_eq!(
            FilterUpdate::reset().to_pairs(),
            vec![
                ("stars", "1".to_string()),
                ("name", String::new()),
                ("hasPool", "false".to_string()),
            ]
        );
        assert!(FilterUpdate::default().is_empty());
        assert!(FilterUpdate::default().to_pairs().is_empty());
    }
}
