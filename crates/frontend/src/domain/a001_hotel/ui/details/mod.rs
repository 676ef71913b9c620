use super::stars::Stars;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_hotel::Hotel;
use leptos::prelude::*;

/// Окно подробностей об отеле
#[component]
pub fn DetailsModal(hotel: Hotel, on_close: Callback<()>) -> impl IntoView {
    let pool = if hotel.has_pool() {
        "Swimming pool available"
    } else {
        "No swimming pool"
    };
    let rating = hotel.rating();
    let rating_label = if rating.is_nan() {
        "Rating not available".to_string()
    } else {
        format!("Rated {} of 5", rating)
    };

    let filled = hotel.rate.filled_stars();
    let price = format!("{} per night (single room)", hotel.price.display_single());
    let title = hotel.name.clone();
    let Hotel {
        name, address, img, ..
    } = hotel;

    view! {
        <Modal title=title on_close=on_close>
            <div class="hotel-details">
                <img class="hotel-details__img" src=img alt=name />
                <div class="hotel-details__row">
                    {icon("place")}
                    <span>{address}</span>
                </div>
                <div class="hotel-details__row">
                    <Stars filled=filled />
                    <span class="hotel-details__muted">{rating_label}</span>
                </div>
                <div class="hotel-details__row">
                    {icon("pool")}
                    <span>{pool}</span>
                </div>
                <div class="hotel-details__price">{price}</div>
            </div>
        </Modal>
    }
}
