mod tags;

pub use tags::{ActiveFilterTags, FilterTag};

use contracts::domain::a001_hotel::filter::DEFAULT_STARS;
use contracts::domain::a001_hotel::{FilterUpdate, HotelFilter};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use thaw::*;

/// Варианты минимального рейтинга для выпадающего списка
fn star_options() -> Vec<(String, String)> {
    (DEFAULT_STARS..=5)
        .map(|stars| {
            let label = if stars == DEFAULT_STARS {
                "Any".to_string()
            } else {
                format!("{}+ stars", stars)
            };
            (stars.to_string(), label)
        })
        .collect()
}

/// Форма фильтров.
///
/// Контролы держат только локальную копию значения для ввода; любое
/// изменение уходит через `on_change` в адресную строку, а оттуда
/// возвращается в `filters`.
#[component]
pub fn Filters(
    /// Текущие фильтры (из адресной строки)
    #[prop(into)]
    filters: Signal<HotelFilter>,
    /// Частичное изменение фильтров
    on_change: Callback<FilterUpdate>,
    /// Задержка записи поиска по названию, мс
    #[prop(optional)]
    name_debounce_ms: u32,
) -> impl IntoView {
    let initial = filters.get_untracked();
    let stars_value = RwSignal::new(initial.stars.to_string());
    let name_value = RwSignal::new(initial.name);
    let pool_value = RwSignal::new(initial.has_pool);

    // Незаписанный ввод названия и отложенная запись
    let name_dirty = StoredValue::new(false);
    let pending_name = StoredValue::new_local(None::<Timeout>);

    // Адресная строка -> контролы (назад/вперёд, сброс фильтров)
    Effect::new(move |_| {
        let current = filters.get();

        let stars = current.stars.to_string();
        if stars_value.get_untracked() != stars {
            stars_value.set(stars);
        }
        if pool_value.get_untracked() != current.has_pool {
            pool_value.set(current.has_pool);
        }
        if !name_dirty.get_value() && name_value.get_untracked() != current.name {
            name_value.set(current.name);
        }
    });

    // Контролы -> адресная строка
    Effect::new(move |_| {
        let stars = stars_value
            .get()
            .parse::<i64>()
            .unwrap_or(DEFAULT_STARS);
        if stars != filters.get_untracked().stars {
            on_change.run(FilterUpdate::stars(stars));
        }
    });

    Effect::new(move |_| {
        let has_pool = pool_value.get();
        if has_pool != filters.get_untracked().has_pool {
            on_change.run(FilterUpdate::has_pool(has_pool));
        }
    });

    Effect::new(move |_| {
        let name = name_value.get();
        if name == filters.get_untracked().name {
            name_dirty.set_value(false);
            pending_name.set_value(None);
            return;
        }

        if name_debounce_ms == 0 {
            on_change.run(FilterUpdate::name(name));
            return;
        }

        name_dirty.set_value(true);
        // предыдущий таймер отменяется при замене
        let timeout = Timeout::new(name_debounce_ms, move || {
            name_dirty.set_value(false);
            on_change.run(FilterUpdate::name(name));
        });
        pending_name.set_value(Some(timeout));
    });

    view! {
        <div class="filters">
            <div class="filters__group">
                <label class="filters__label">"Stars"</label>
                <Select value=stars_value>
                    {star_options()
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </Select>
            </div>

            <div class="filters__group">
                <label class="filters__label">"Hotel name"</label>
                <Input value=name_value placeholder="Search by name..." />
            </div>

            <div class="filters__group">
                <Checkbox checked=pool_value label="Swimming pool" />
            </div>
        </div>
    }
}
