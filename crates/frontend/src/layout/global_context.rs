use crate::shared::config::AppConfig;
use contracts::domain::a001_hotel::{CatalogError, Hotel, HotelCatalog};
use leptos::prelude::*;

/// Общий контекст приложения: конфигурация и статический каталог отелей
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub config: StoredValue<AppConfig>,
    pub hotels: &'static [Hotel],
    pub catalog_error: Option<&'static CatalogError>,
}

impl AppGlobalContext {
    pub fn new(config: AppConfig) -> Self {
        let (hotels, catalog_error) = load_catalog();
        Self {
            config: StoredValue::new(config),
            hotels,
            catalog_error,
        }
    }
}

fn load_catalog() -> (&'static [Hotel], Option<&'static CatalogError>) {
    match HotelCatalog::embedded() {
        Ok(catalog) => {
            log::info!("hotel catalog ready: {} hotels", catalog.len());
            (catalog.hotels(), None)
        }
        Err(e) => {
            // страница покажет пустой список и сообщение об ошибке
            log::error!("failed to load hotel catalog: {}", e);
            (&[], Some(e))
        }
    }
}
