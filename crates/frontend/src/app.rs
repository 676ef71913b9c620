use crate::domain::a001_hotel::ui::search_page::SearchResultPage;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::AppConfig;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(config));

    view! {
        <ConfigProvider>
            <SearchResultPage />
        </ConfigProvider>
    }
}
