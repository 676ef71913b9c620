/// Состояние окна подробностей одной карточки отеля.
///
/// У каждой карточки своё значение, общего флага нет.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailsState {
    #[default]
    Closed,
    Open,
}

impl DetailsState {
    pub fn show(&mut self) {
        *self = DetailsState::Open;
    }

    pub fn close(&mut self) {
        *self = DetailsState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailsState::Open)
    }
}
