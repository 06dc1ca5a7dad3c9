//! Formatting and browser helpers shared by the components.
//!
//! - **Assets**: resolving catalogue image paths against the asset base and
//!   falling back to a placeholder when an image fails to load.
//! - **Formatting**: prices with thousands separators and human dates.
//! - **User feedback**: short-lived toast notifications.

use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlImageElement};
use yew::prelude::*;

/// Base path the image directory is served under. Set `PRIMEHOMES_ASSET_BASE`
/// at build time to host the bundle somewhere else.
pub const ASSET_BASE: &str = match option_env!("PRIMEHOMES_ASSET_BASE") {
    Some(base) => base,
    None => "/PrimeHomes",
};

/// Shown in place of any image that fails to load.
pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.jpg";

/// Resolves a catalogue-relative path such as `images/image1.jpg`.
/// Absolute URLs are returned unchanged.
pub fn asset_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        ASSET_BASE.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// `onerror` handler for `<img>`: swaps in the placeholder once.
pub fn image_fallback() -> Callback<Event> {
    Callback::from(|e: Event| {
        let img: HtmlImageElement = e.target_unchecked_into();
        if !img.src().ends_with(PLACEHOLDER_IMAGE) {
            img.set_src(&asset_url(PLACEHOLDER_IMAGE));
        }
    })
}

/// `LKR85,000,000`
pub fn format_price(price: u64) -> String {
    format!("LKR{}", price.to_formatted_string(&Locale::en))
}

/// `15 November 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Displays a temporary notification at the bottom of the screen.
///
/// The toast is appended to `<body>` and removes itself after three seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
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

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
