//! View rendering for the card preview surface.
//!
//! The stage shows one side of the card at a time. Hovering the stage
//! flips to the back while dual-side interaction is enabled; the selector
//! under the stage picks a side explicitly (the only way to change sides
//! when interaction is disabled). Markup reaching this module has already
//! been sanitized in `update.rs`, which is what makes the unchecked HTML
//! injection below acceptable.

use common::model::template::CardSide;
use yew::html::Scope;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use super::messages::Msg;
use super::state::CardPreviewComponent;
use super::styles;

/// Main view function for the card preview surface.
pub fn view(component: &CardPreviewComponent, ctx: &Context<CardPreviewComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="card-preview-root" style={styles::PREVIEW_ROOT}>
            <div
                class="card-stage"
                style={styles::CARD_STAGE}
                onmouseenter={link.callback(|_| Msg::HoverEnter)}
                onmouseleave={link.callback(|_| Msg::HoverLeave)}
            >
                { render_stage(component) }
            </div>
            { side_selector(component, link) }
        </div>
    }
}

fn render_stage(component: &CardPreviewComponent) -> Html {
    match component.markup_for(component.side) {
        Some(markup) => Html::from_html_unchecked(AttrValue::from(markup.clone())),
        None if component.loading => html! {
            <div class="card-skeleton" style={styles::CARD_SKELETON}>{ "Rendering…" }</div>
        },
        None => html! {
            <div class="card-skeleton" style={styles::CARD_SKELETON}></div>
        },
    }
}

/// Front/back selector shown under the stage.
fn side_selector(component: &CardPreviewComponent, link: &Scope<CardPreviewComponent>) -> Html {
    let button = |side: CardSide, label: &str| {
        let active = component.side == side;
        html! {
            <button
                class={classes!("side-btn", if active { "active" } else { "" })}
                style={if active { styles::SIDE_BTN_ACTIVE } else { styles::SIDE_BTN }}
                onclick={link.callback(move |_| Msg::SelectSide(side))}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="side-selector" style={styles::SIDE_SELECTOR}>
            { button(CardSide::Front, "Front") }
            { button(CardSide::Back, "Back") }
        </div>
    }
}
