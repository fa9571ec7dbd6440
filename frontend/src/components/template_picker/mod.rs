//! Template picker: fetches the catalog once and renders it as a row of
//! selectable design chips. Selection is reported to the parent; the
//! picker itself holds no notion of what a template looks like.

use common::model::template::TemplateSummary;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TemplatePickerProps {
    /// Currently selected template id.
    pub selected: i64,
    pub on_select: Callback<i64>,
}

pub enum Msg {
    Loaded(Vec<TemplateSummary>),
    LoadFailed,
    Select(i64),
}

pub struct TemplatePicker {
    templates: Vec<TemplateSummary>,
    loaded: bool,
}

impl Component for TemplatePicker {
    type Message = Msg;
    type Properties = TemplatePickerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            templates: Vec::new(),
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(templates) => {
                self.templates = templates;
                self.loaded = true;
                true
            }
            Msg::LoadFailed => {
                gloo_console::warn!("Template catalog could not be loaded");
                self.loaded = true;
                true
            }
            Msg::Select(id) => {
                ctx.props().on_select.emit(id);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let selected = ctx.props().selected;

        if self.loaded && self.templates.is_empty() {
            return html! { <div class="picker-empty">{ "Catalog unavailable" }</div> };
        }

        html! {
            <div class="template-picker" style="display:flex; gap:8px; flex-wrap:wrap;">
                {
                    for self.templates.iter().filter(|t| t.active).map(|t| {
                        let id = t.id;
                        let active = id == selected;
                        html! {
                            <button
                                class={classes!("template-chip", if active { "active" } else { "" })}
                                onclick={link.callback(move |_| Msg::Select(id))}
                            >
                                { t.name.clone() }
                            </button>
                        }
                    })
                }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                let response = Request::get("/api/templates").send().await;
                match response {
                    Ok(resp) if resp.status() == 200 => {
                        match resp.json::<Vec<TemplateSummary>>().await {
                            Ok(templates) => link.send_message(Msg::Loaded(templates)),
                            Err(_) => link.send_message(Msg::LoadFailed),
                        }
                    }
                    _ => link.send_message(Msg::LoadFailed),
                }
            });
        }
    }
}
