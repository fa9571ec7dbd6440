//! Component state for the card preview surface.
//!
//! Holds the displayed side, the per-side markup cache, the digest the
//! cache is valid for, and the generation token of the latest issued
//! render request.

use common::model::template::CardSide;
use uuid::Uuid;

/// Main state container for the `CardPreviewComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct CardPreviewComponent {
    /// Side currently shown on the stage.
    pub side: CardSide,

    /// Rendered (substituted and sanitized) markup per side. Both entries
    /// are dropped whenever the render digest changes, so flipping back
    /// to a cached side without a data change reuses byte-identical
    /// markup.
    pub front_markup: Option<String>,
    pub back_markup: Option<String>,

    /// Digest of (template id, QR style, profile) the cache belongs to.
    pub render_digest: Option<String>,

    /// Token of the latest issued render request. A response is applied
    /// only when its token still matches, which makes superseded renders
    /// inert without a true cancellation primitive.
    pub generation: Uuid,

    /// True while a render request for the displayed side is in flight.
    pub loading: bool,
}

impl CardPreviewComponent {
    pub fn new() -> Self {
        Self {
            side: CardSide::Front,
            front_markup: None,
            back_markup: None,
            render_digest: None,
            generation: Uuid::new_v4(),
            loading: false,
        }
    }

    pub fn markup_for(&self, side: CardSide) -> Option<&String> {
        match side {
            CardSide::Front => self.front_markup.as_ref(),
            CardSide::Back => self.back_markup.as_ref(),
        }
    }

    pub fn set_markup(&mut self, side: CardSide, markup: String) {
        match side {
            CardSide::Front => self.front_markup = Some(markup),
            CardSide::Back => self.back_markup = Some(markup),
        }
    }

    pub fn clear_cache(&mut self) {
        self.front_markup = None;
        self.back_markup = None;
    }
}
