use serde::{Deserialize, Serialize};

// ============================================================================
// Rating
// ============================================================================

/// Рейтинг отеля (1–5 звёзд).
///
/// В исходных данных встречается и как число, и как строка (`"4"`),
/// поэтому храним значение как есть и приводим к числу только при сравнении.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rate {
    Number(f64),
    Text(String),
}

impl Rate {
    /// Числовое значение рейтинга.
    ///
    /// Пробелы по краям игнорируются, пустая строка даёт `0`,
    /// нечисловая строка даёт `NaN` (не проходит ни одно сравнение).
    pub fn numeric(&self) -> f64 {
        match self {
            Rate::Number(value) => *value,
            Rate::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().unwrap_or(f64::NAN)
                }
            }
        }
    }

    /// Количество закрашенных звёзд для отображения (0..=5)
    pub fn filled_stars(&self) -> u8 {
        let value = self.numeric();
        if value.is_nan() {
            return 0;
        }
        value.round().clamp(0.0, 5.0) as u8
    }
}

impl From<f64> for Rate {
    fn from(value: f64) -> Self {
        Rate::Number(value)
    }
}

impl From<&str> for Rate {
    fn from(value: &str) -> Self {
        Rate::Text(value.to_string())
    }
}

// ============================================================================
// Price
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Цена одноместного номера за ночь
    pub single: f64,
}

impl Price {
    /// Цена в виде `$120` / `$99.50`
    pub fn display_single(&self) -> String {
        if self.single.fract() == 0.0 {
            format!("${}", self.single as i64)
        } else {
            format!("${:.2}", self.single)
        }
    }
}

// ============================================================================
// Hotel
// ============================================================================

/// Отель из статического каталога. Создаётся один раз при старте и не меняется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    pub address: String,
    pub img: String,
    pub rate: Rate,
    pub price: Price,

    /// Наличие бассейна, строкой `"true"` / `"false"`, как в источнике данных
    #[serde(rename = "hasPool")]
    pub has_pool: String,
}

impl Hotel {
    /// Бассейн есть только при точном значении `"true"`
    pub fn has_pool(&self) -> bool {
        self.has_pool == "true"
    }

    pub fn rating(&self) -> f64 {
        self.rate.numeric()
    }
}
