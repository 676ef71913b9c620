use super::aggregate::Hotel;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Каталог, встроенный в сборку
const EMBEDDED_CATALOG: &str = include_str!("../../../data/hotels.json");

static EMBEDDED: Lazy<Result<HotelCatalog, CatalogError>> =
    Lazy::new(|| HotelCatalog::from_json(EMBEDDED_CATALOG));

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid hotel catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Статический список отелей, только для чтения
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotelCatalog {
    hotels: Vec<Hotel>,
}

impl HotelCatalog {
    pub fn new(hotels: Vec<Hotel>) -> Self {
        Self { hotels }
    }

    /// Разобрать документ вида `{ "hotels": [...] }`
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: HotelCatalog = serde_json::from_str(json)?;
        log::debug!("hotel catalog loaded: {} hotels", catalog.hotels.len());
        Ok(catalog)
    }

    /// Встроенный каталог; разбирается один раз при первом обращении
    pub fn embedded() -> Result<&'static HotelCatalog, &'static CatalogError> {
        EMBEDDED.as_ref()
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }
}
