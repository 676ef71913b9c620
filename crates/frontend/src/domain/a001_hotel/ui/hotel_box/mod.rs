use super::details::DetailsModal;
use super::stars::Stars;
use crate::shared::icons::icon;
use contracts::domain::a001_hotel::{DetailsState, Hotel};
use leptos::prelude::*;
use thaw::*;

/// Карточка отеля в списке результатов.
///
/// Каждая карточка сама управляет своим окном подробностей.
#[component]
pub fn HotelBox(hotel: Hotel) -> impl IntoView {
    let details = RwSignal::new(DetailsState::default());

    let close_details_modal = Callback::new(move |_: ()| details.update(DetailsState::close));

    let modal_hotel = hotel.clone();
    let price = hotel.price.display_single();
    let filled = hotel.rate.filled_stars();
    let Hotel {
        name, address, img, ..
    } = hotel;

    view! {
        <div class="hotel-box">
            <div class="hotel-box__content">
                <div class="hotel-box__cover">
                    <img
                        class="hotel-box__img"
                        src=img
                        alt={name.clone()}
                        title={name.clone()}
                    />
                </div>
                <div class="hotel-box__info">
                    <h3 class="hotel-box__title">{name}</h3>
                    <div class="hotel-box__location">
                        {icon("place")}
                        {address}
                    </div>
                    <Stars filled=filled size=1.5 />
                </div>
            </div>
            <div class="hotel-box__aside">
                <div class="hotel-box__price">{price}</div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| details.update(DetailsState::show)
                >
                    "Details"
                </Button>
            </div>
            {move || {
                details.get().is_open().then(|| view! {
                    <DetailsModal hotel={modal_hotel.clone()} on_close=close_details_modal />
                })
            }}
        </div>
    }
}
