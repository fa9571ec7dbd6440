use common::model::template::CardSide;
use uuid::Uuid;

#[derive(Clone)]
pub enum Msg {
    Refresh,
    HoverEnter,
    HoverLeave,
    SelectSide(CardSide),
    MarkupReady {
        generation: Uuid,
        side: CardSide,
        markup: String,
    },
    MarkupFailed {
        generation: Uuid,
        side: CardSide,
    },
}
