mod api;
mod app;
mod data;
mod player;
mod start;
mod time_format;

use leptos::mount::mount_to;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let mount_target = document
        .get_element_by_id("app")
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .or_else(|| document.body());
    let Some(target) = mount_target else {
        return;
    };

    // The app lives for the whole page; leak the handle so the mount is
    // never torn down by a drop at the end of main.
    mount_to(target, app::App).forget();
}
