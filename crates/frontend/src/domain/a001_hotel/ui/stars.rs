use crate::shared::icons::star;
use leptos::prelude::*;

pub const MAX_STARS: u8 = 5;

/// Какие из пяти звёзд закрашены
pub fn star_flags(filled: u8) -> [bool; MAX_STARS as usize] {
    let mut flags = [false; MAX_STARS as usize];
    for flag in flags.iter_mut().take(filled.min(MAX_STARS) as usize) {
        *flag = true;
    }
    flags
}

/// Рейтинг отеля звёздами
#[component]
pub fn Stars(
    /// Количество закрашенных звёзд
    filled: u8,
    /// Размер звезды в rem
    #[prop(default = 1.0)]
    size: f64,
) -> impl IntoView {
    let title = format!("{} of {}", filled.min(MAX_STARS), MAX_STARS);
    view! {
        <div class="stars" title=title>
            {star_flags(filled)
                .into_iter()
                .map(|is_filled| star(is_filled, size))
                .collect_view()}
        </div>
    }
}
