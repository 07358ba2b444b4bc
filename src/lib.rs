/// Save Tabbed Images - Chrome Extension for downloading images open in tabs
/// Built with Rust + WASM + Yew

mod chrome;
mod config;
mod error;
mod location;
mod operations;
mod orchestration;
mod status;
mod tab_data;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::LOG_LEVEL));
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::Popup>::new().render();
}

// Start the Yew app for the save image dialog
#[wasm_bindgen]
pub fn start_dialog() {
    yew::Renderer::<ui::dialog::SaveImageDialog>::new().render();
}
