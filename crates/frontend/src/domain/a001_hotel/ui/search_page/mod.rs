pub mod state;

use super::filters::{ActiveFilterTags, Filters};
use super::hotel_box::HotelBox;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::url_state::BrowserUrlAdapter;
use contracts::domain::a001_hotel::FilterUpdate;
use leptos::ev;
use leptos::prelude::*;
use state::SearchPageState;
use thaw::*;

fn results_summary(count: usize) -> String {
    match count {
        0 => "No results".to_string(),
        1 => "1 hotel found".to_string(),
        n => format!("{} hotels found", n),
    }
}

/// Страница результатов поиска отелей
#[component]
pub fn SearchResultPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let config = ctx.config.get_value();
    let name_debounce_ms = config.search.name_debounce_ms;

    let page = SearchPageState::new(BrowserUrlAdapter::new(config.url_state.history));

    // Назад/вперёд в браузере меняют адрес без нашего участия
    let popstate = window_event_listener(ev::popstate, move |_| {
        page.sync_from_location();
    });
    on_cleanup(move || popstate.remove());

    let filters = Memo::new(move |_| page.filters());
    let hotels = Memo::new(move |_| page.visible_hotels(ctx.hotels));
    let active_filters_count = Signal::derive(move || filters.with(|f| f.active_count()));

    let on_filters_change = Callback::new(move |update: FilterUpdate| {
        page.on_filters_change(update);
    });
    let on_clear = Callback::new(move |_: ()| page.clear_filters());

    view! {
        <div class="search-page">
            <div class="search-page__header">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| page.toggle_filter_bar()
                >
                    "Filters"
                    {icon("filter")}
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! {
                            <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Brand>
                                {count.to_string()}
                            </Badge>
                        })
                    }}
                </Button>
            </div>

            <div class="search-page__content">
                <aside
                    class="search-page__sidebar"
                    class:search-page__sidebar--open=move || page.is_filter_bar_open()
                >
                    <div class="search-page__sidebar-title">
                        "Filters"
                        <button
                            class="button button--icon search-page__close"
                            on:click=move |_| page.toggle_filter_bar()
                        >
                            {icon("x")}
                        </button>
                    </div>
                    <Filters
                        filters=filters
                        on_change=on_filters_change
                        name_debounce_ms=name_debounce_ms
                    />
                    <ActiveFilterTags
                        filters=filters
                        on_change=on_filters_change
                        on_clear=on_clear
                    />
                </aside>

                <div class="search-page__list">
                    {ctx.catalog_error.map(|e| view! {
                        <div class="search-page__error">
                            {format!("Hotel list is unavailable: {}", e)}
                        </div>
                    })}
                    <Show
                        when=move || hotels.with(|list| !list.is_empty())
                        fallback=|| view! { <div class="search-page__empty">"No results"</div> }
                    >
                        <div class="search-page__summary">
                            {move || results_summary(hotels.with(|list| list.len()))}
                        </div>
                    </Show>
                    <For
                        each=move || hotels.get().into_iter().enumerate()
                        key=|(index, hotel)| (*index, hotel.name.clone())
                        children=move |(_, hotel)| {
                            view! { <HotelBox hotel=hotel /> }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
