//! Card designer: the storefront's main working surface.
//!
//! Owns the profile form, the selected template and QR style, the
//! dual-side interaction toggle, photo upload, vCard download, and the
//! checkout handoff. The live rendering itself is delegated to
//! `CardPreviewComponent`; this component only feeds it props.

use gloo_net::http::Request;
use regex::Regex;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::links::ProfileLinks;
use common::model::profile::ProfileData;
use common::model::qr::QrStyle;
use common::model::template::CardSide;
use common::vcard::{build_vcard, vcard_filename};

use crate::components::card_preview::CardPreviewComponent;
use crate::components::template_picker::TemplatePicker;

/// Commerce variant of the standard metal card product.
const CARD_VARIANT_ID: &str = "41553878122648";

#[derive(Clone, Copy)]
pub enum ProfileField {
    FullName,
    JobTitle,
    Email,
    Phone,
    Address,
    Organization,
    Website,
}

pub enum Msg {
    UpdateField(ProfileField, String),
    TemplateSelected(i64),
    QrStyleChanged(String),
    ToggleDualSide,
    PinSide(CardSide),
    PhotoSelected(Option<web_sys::File>),
    PhotoPreviewReady(String),
    PhotoUploaded(Result<String, String>),
    DownloadVCard,
    Checkout,
}

pub struct CardDesigner {
    profile: ProfileData,
    template_id: i64,
    qr_style: QrStyle,
    /// Hover-driven flipping enabled; when off the preview is pinned.
    dual_side: bool,
    pinned_side: CardSide,
}

impl Component for CardDesigner {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            profile: ProfileData::default(),
            template_id: 1,
            qr_style: QrStyle::Standard,
            dual_side: true,
            pinned_side: CardSide::Front,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateField(field, value) => {
                self.set_field(field, value);
                true
            }
            Msg::TemplateSelected(id) => {
                self.template_id = id;
                true
            }
            Msg::QrStyleChanged(style) => {
                self.qr_style = QrStyle::parse(&style);
                true
            }
            Msg::ToggleDualSide => {
                self.dual_side = !self.dual_side;
                true
            }
            Msg::PinSide(side) => {
                self.pinned_side = side;
                true
            }
            Msg::PhotoSelected(file) => {
                if let Some(file) = file {
                    start_photo_upload(ctx, file);
                }
                false
            }
            Msg::PhotoPreviewReady(data_url) => {
                // Instant local preview while the upload is in flight. A
                // served asset URL that already arrived wins over the
                // late local copy.
                let keep_local = match &self.profile.profile_image {
                    None => true,
                    Some(existing) => existing.starts_with("data:"),
                };
                if keep_local {
                    self.profile.profile_image = Some(data_url);
                    return true;
                }
                false
            }
            Msg::PhotoUploaded(Ok(url)) => {
                self.profile.profile_image = Some(url);
                true
            }
            Msg::PhotoUploaded(Err(e)) => {
                gloo_console::warn!("Photo upload failed:", e);
                show_toast("Photo upload failed. The preview keeps the local copy.");
                false
            }
            Msg::DownloadVCard => {
                self.download_vcard();
                false
            }
            Msg::Checkout => {
                if let Some(window) = web_sys::window() {
                    let url = format!("/api/checkout?variant={}&quantity=1", CARD_VARIANT_ID);
                    let _ = window.location().set_href(&url);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="designer" style="display:flex; gap:32px; padding:24px; align-items:flex-start;">
                <div class="designer-form" style="display:flex; flex-direction:column; gap:8px; min-width:280px;">
                    <h2>{ "Design your card" }</h2>
                    { text_input(link, "Full name", &self.profile.full_name, ProfileField::FullName, "Jane Doe") }
                    { text_input(link, "Job title", &self.profile.job_title, ProfileField::JobTitle, "CEO") }
                    { text_input(link, "Email", &self.profile.email, ProfileField::Email, "jane@company.com") }
                    { text_input(link, "Phone", &self.profile.phone_number, ProfileField::Phone, "+1 (555) 123-4567") }
                    { text_input(link, "Address", &self.profile.address, ProfileField::Address, "1 Main St, Springfield") }
                    { text_input(link, "Company", self.profile.organization.as_deref().unwrap_or(""), ProfileField::Organization, "Company Inc.") }
                    { text_input(link, "Website", self.profile.website.as_deref().unwrap_or(""), ProfileField::Website, "https://company.com") }

                    <label class="field">
                        <span>{ "Profile photo" }</span>
                        <input
                            type="file"
                            accept="image/*"
                            onchange={link.callback(|e: Event| {
                                let input = e.target_unchecked_into::<HtmlInputElement>();
                                Msg::PhotoSelected(input.files().and_then(|files| files.get(0)))
                            })}
                        />
                    </label>

                    <label class="field">
                        <span>{ "QR style" }</span>
                        { self.qr_style_select(link) }
                    </label>

                    <label class="field" style="flex-direction:row; gap:8px; align-items:center;">
                        <input
                            type="checkbox"
                            checked={self.dual_side}
                            onchange={link.callback(|_| Msg::ToggleDualSide)}
                        />
                        <span>{ "Flip on hover" }</span>
                    </label>

                    <div class="designer-actions" style="display:flex; gap:8px; margin-top:16px;">
                        <button onclick={link.callback(|_| Msg::DownloadVCard)}>
                            { "Download vCard" }
                        </button>
                        <button class="primary" onclick={link.callback(|_| Msg::Checkout)}>
                            { "Order metal card" }
                        </button>
                    </div>
                </div>

                <div class="designer-preview" style="display:flex; flex-direction:column; gap:16px;">
                    <TemplatePicker
                        selected={self.template_id}
                        on_select={link.callback(Msg::TemplateSelected)}
                    />
                    <CardPreviewComponent
                        template_id={self.template_id}
                        profile={self.profile.clone()}
                        qr_style={self.qr_style}
                        interactive={self.dual_side}
                        side={self.pinned_side}
                        on_side_change={link.callback(Msg::PinSide)}
                    />
                </div>
            </div>
        }
    }
}

impl CardDesigner {
    fn set_field(&mut self, field: ProfileField, value: String) {
        let optional = |v: String| if v.trim().is_empty() { None } else { Some(v) };
        match field {
            ProfileField::FullName => self.profile.full_name = value,
            ProfileField::JobTitle => self.profile.job_title = value,
            ProfileField::Email => self.profile.email = value,
            ProfileField::Phone => self.profile.phone_number = value,
            ProfileField::Address => self.profile.address = value,
            ProfileField::Organization => self.profile.organization = optional(value),
            ProfileField::Website => self.profile.website = optional(value),
        }
    }

    fn qr_style_select(&self, link: &Scope<CardDesigner>) -> Html {
        let styles = ["standard", "rounded", "dot", "circular", "square"];
        html! {
            <select onchange={link.callback(|e: Event| {
                let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                Msg::QrStyleChanged(value)
            })}>
                {
                    for styles.iter().map(|s| html! {
                        <option value={*s} selected={self.qr_style.as_str() == *s}>{ *s }</option>
                    })
                }
            </select>
        }
    }

    /// Generates the contact card locally and triggers a browser download.
    /// Export is the one user-initiated action whose failure is surfaced
    /// as a notification instead of a silent degrade.
    fn download_vcard(&self) {
        if self.profile.full_name.trim().is_empty() {
            show_toast("Add a name before exporting the contact card.");
            return;
        }
        if !email_is_valid(&self.profile.email) {
            show_toast("The email address looks invalid.");
            return;
        }
        match try_download_vcard(&self.profile, self.qr_style) {
            Ok(()) => show_toast("Contact card downloaded."),
            Err(e) => {
                gloo_console::warn!("vCard download failed:", e);
                show_toast("Could not generate the contact card.");
            }
        }
    }
}

fn text_input(
    link: &Scope<CardDesigner>,
    label: &str,
    value: &str,
    field: ProfileField,
    placeholder: &'static str,
) -> Html {
    html! {
        <label class="field" style="display:flex; flex-direction:column; gap:2px;">
            <span>{ label }</span>
            <input
                type="text"
                value={value.to_string()}
                placeholder={placeholder}
                oninput={link.callback(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::UpdateField(field, value)
                })}
            />
        </label>
    }
}

/// Empty emails are allowed (the card falls back to placeholder text);
/// non-empty ones must at least look like an address.
fn email_is_valid(email: &str) -> bool {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return true;
    }
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
        .unwrap()
        .is_match(trimmed)
}

/// Reads the selected photo for an instant local preview, then uploads it
/// and swaps the preview to the served asset URL.
fn start_photo_upload(ctx: &Context<CardDesigner>, file: web_sys::File) {
    let preview_link = ctx.link().clone();
    let preview_file = gloo_file::File::from(file.clone());
    spawn_local(async move {
        if let Ok(data_url) = gloo_file::futures::read_as_data_url(&preview_file).await {
            preview_link.send_message(Msg::PhotoPreviewReady(data_url));
        }
    });

    let link = ctx.link().clone();
    spawn_local(async move {
        link.send_message(Msg::PhotoUploaded(upload_photo(file).await));
    });
}

async fn upload_photo(file: web_sys::File) -> Result<String, String> {
    let form = web_sys::FormData::new().map_err(|_| "FormData unavailable".to_string())?;
    form.append_with_blob("file", &file)
        .map_err(|_| "Could not attach file".to_string())?;

    let response = Request::post("/api/uploads")
        .body(JsValue::from(form))
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status() != 200 {
        return Err(format!("upload rejected with status {}", response.status()));
    }

    let body: serde_json::Value = response.json().await.map_err(|e| e.to_string())?;
    body.get("url")
        .and_then(|u| u.as_str())
        .map(|u| u.to_string())
        .ok_or_else(|| "upload response carried no URL".to_string())
}

/// Builds the vCard from the profile and the links derived under the
/// current origin, wraps it in a Blob, and clicks a synthetic anchor.
fn try_download_vcard(profile: &ProfileData, style: QrStyle) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| "no origin".to_string())?;
    let links = ProfileLinks::derive(profile, &origin, style);
    let card = build_vcard(profile, &links)?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&card));
    let bag = web_sys::BlobPropertyBag::new();
    bag.set_type("text/vcard");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &bag)
        .map_err(|_| "Blob construction failed".to_string())?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "object URL creation failed".to_string())?;

    let document = window.document().ok_or("no document")?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "anchor creation failed".to_string())?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(&vcard_filename(&profile.full_name));
    anchor.click();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

/// Displays a temporary notification message at the bottom of the screen.
/// The toast removes itself after a few seconds.
fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
