use contracts::domain::a001_hotel::filter::DEFAULT_STARS;
use contracts::domain::a001_hotel::{FilterUpdate, HotelFilter};
use leptos::prelude::*;

/// Метки активных фильтров и обновление, снимающее каждый из них
pub fn active_tags(filters: &HotelFilter) -> Vec<(String, FilterUpdate)> {
    let mut tags = Vec::new();
    if filters.stars > DEFAULT_STARS {
        tags.push((
            format!("{}+ stars", filters.stars),
            FilterUpdate::stars(DEFAULT_STARS),
        ));
    }
    let needle = filters.name.trim();
    if !needle.is_empty() {
        tags.push((format!("Name: \"{}\"", needle), FilterUpdate::name("")));
    }
    if filters.has_pool {
        tags.push(("Swimming pool".to_string(), FilterUpdate::has_pool(false)));
    }
    tags
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <svg
                width="12"
                height="12"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                <line x1="18" y1="6" x2="6" y2="18"></line>
                <line x1="6" y1="6" x2="18" y2="18"></line>
            </svg>
        </div>
    }
}

#[component]
pub fn ActiveFilterTags(
    #[prop(into)]
    filters: Signal<HotelFilter>,
    on_change: Callback<FilterUpdate>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        {move || {
            let tags = filters.with(active_tags);
            if tags.is_empty() {
                return view! { <></> }.into_any();
            }
            view! {
                <div class="filter-tags">
                    {tags
                        .into_iter()
                        .map(|(label, update)| {
                            let on_remove = Callback::new(move |_: ()| on_change.run(update.clone()));
                            view! { <FilterTag label=label on_remove=on_remove /> }
                        })
                        .collect_view()}
                    <button class="filter-tags__clear" on:click=move |_| on_clear.run(())>
                        "Clear all"
                    </button>
                </div>
            }
            .into_any()
        }}
    }
}
