//! Update function for the card preview surface.
//!
//! This module contains a single `update` function following an Elm-style
//! architecture: it receives the current `CardPreviewComponent` state, the
//! `Context`, and a `Msg`, mutates the state accordingly, and returns a
//! `bool` indicating whether the view should re-render.
//!
//! Key behaviors
//! - Hover transitions between front and back, active only while the
//!   dual-side interaction is enabled.
//! - Markup derivation per side: customize POST -> preview GET -> locally
//!   synthesized fallback card, in that order.
//! - Render supersession: every request carries a generation token, and a
//!   response is dropped when a newer request has been issued since.

use common::model::template::CardSide;
use common::render::{fallback_markup, sanitize_markup, substitute};
use gloo_net::http::Request;
use uuid::Uuid;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{local_qr_url, render_digest};
use super::messages::Msg;
use super::state::CardPreviewComponent;

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` (async callbacks).
/// - Returns `true` to re-render the view, `false` to short-circuit.
pub fn update(
    component: &mut CardPreviewComponent,
    ctx: &Context<CardPreviewComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Refresh => {
            ensure_markup(component, ctx);
            true
        }
        Msg::HoverEnter => {
            if ctx.props().interactive && component.side == CardSide::Front {
                component.side = CardSide::Back;
                ensure_markup(component, ctx);
                return true;
            }
            false
        }
        Msg::HoverLeave => {
            if ctx.props().interactive && component.side == CardSide::Back {
                component.side = CardSide::Front;
                ensure_markup(component, ctx);
                return true;
            }
            false
        }
        Msg::SelectSide(side) => {
            ctx.props().on_side_change.emit(side);
            if ctx.props().interactive {
                component.side = side;
                ensure_markup(component, ctx);
            }
            true
        }
        Msg::MarkupReady {
            generation,
            side,
            markup,
        } => {
            if generation != component.generation {
                // A newer render was issued while this one was in flight.
                return false;
            }
            component.loading = false;
            component.set_markup(side, sanitize_markup(&markup));
            true
        }
        Msg::MarkupFailed { generation, side } => {
            if generation != component.generation {
                return false;
            }
            gloo_console::warn!(
                "Template render failed; showing the synthesized fallback card"
            );
            component.loading = false;
            let profile = &ctx.props().profile;
            let qr_url = local_qr_url(profile, ctx.props().qr_style);
            let synthesized = substitute(fallback_markup(side), profile, qr_url.as_deref());
            component.set_markup(side, synthesized);
            true
        }
    }
}

/// Makes sure the displayed side has markup for the current inputs.
///
/// Drops the whole cache when the render digest changed, then issues a
/// render request for the displayed side unless a valid cached markup
/// exists. Each request captures a fresh generation token.
pub fn ensure_markup(component: &mut CardPreviewComponent, ctx: &Context<CardPreviewComponent>) {
    let props = ctx.props();
    let digest = render_digest(&props.profile, props.template_id, props.qr_style);
    if component.render_digest.as_deref() != Some(digest.as_str()) {
        component.clear_cache();
        component.render_digest = Some(digest);
    }

    let side = component.side;
    if component.markup_for(side).is_some() {
        component.loading = false;
        return;
    }

    let generation = Uuid::new_v4();
    component.generation = generation;
    component.loading = true;

    let template_id = props.template_id;
    let profile = props.profile.clone();
    let style = props.qr_style;
    let link = ctx.link().clone();
    spawn_local(async move {
        match fetch_markup(template_id, side, &profile, style.as_str()).await {
            Ok(markup) => link.send_message(Msg::MarkupReady {
                generation,
                side,
                markup,
            }),
            Err(_) => link.send_message(Msg::MarkupFailed { generation, side }),
        }
    });
}

/// Fetches rendered markup for one side: the customization endpoint
/// first, then the static preview endpoint. Both failing leaves the
/// caller to synthesize the fallback card locally.
async fn fetch_markup(
    template_id: i64,
    side: CardSide,
    profile: &common::model::profile::ProfileData,
    style: &str,
) -> Result<String, String> {
    let customize_url = format!(
        "/api/templates/{}/{}/customize?style={}",
        template_id,
        side.as_str(),
        style
    );
    if let Ok(request) = Request::post(&customize_url).json(profile) {
        if let Ok(response) = request.send().await {
            if response.status() == 200 {
                if let Ok(markup) = response.text().await {
                    return Ok(markup);
                }
            }
        }
    }

    let preview_url = format!("/api/templates/{}/{}/preview", template_id, side.as_str());
    match Request::get(&preview_url).send().await {
        Ok(response) if response.status() == 200 => {
            response.text().await.map_err(|e| e.to_string())
        }
        _ => Err("preview fetch failed".to_string()),
    }
}
