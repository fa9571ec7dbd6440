//! Card preview surface: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view
//! rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `CardPreviewProps`, `CardPreviewComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - Drive the front/back state machine: hover-enter flips to the back,
//!   hover-leave back to the front, but only while dual-side interaction
//!   is enabled; otherwise the displayed side is pinned to the `side` prop.
//! - On every side or profile change, re-derive the entering side's markup
//!   through the customization endpoint with preview and local-synthesis
//!   fallbacks, so stale content is never shown across a flip.

mod helpers;
mod messages;
mod props;
mod state;
mod styles;
mod update;
mod view;

use yew::prelude::*;

pub use messages::Msg;
pub use props::CardPreviewProps;
pub use state::CardPreviewComponent;

impl Component for CardPreviewComponent {
    type Message = Msg;
    type Properties = CardPreviewProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut component = CardPreviewComponent::new();
        component.side = ctx.props().side;
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        // A new profile, template, or QR style invalidates the cache; a
        // changed pin moves the displayed side when hover is disabled.
        if !ctx.props().interactive {
            self.side = ctx.props().side;
        }
        update::ensure_markup(self, ctx);
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Refresh);
        }
    }
}
