//! Defines the properties for the `CardPreviewComponent`.

use common::model::profile::ProfileData;
use common::model::qr::QrStyle;
use common::model::template::CardSide;
use yew::prelude::*;

/// Properties for the `CardPreviewComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct CardPreviewProps {
    /// Registry id of the template to render. An id that is missing from
    /// the registry degrades to the synthesized fallback card.
    pub template_id: i64,

    /// The profile record substituted into the template on every render.
    pub profile: ProfileData,

    /// QR style variant embedded in the rendered markup's QR image URL.
    #[prop_or_default]
    pub qr_style: QrStyle,

    /// Whether the hover-driven dual-side flip is enabled. When `false`,
    /// the displayed side is pinned to `side` and hover has no effect.
    #[prop_or(true)]
    pub interactive: bool,

    /// Externally supplied side, honored while `interactive` is `false`.
    #[prop_or(CardSide::Front)]
    pub side: CardSide,

    /// Notified when the user picks a side explicitly in the selector.
    #[prop_or_default]
    pub on_side_change: Callback<CardSide>,
}
