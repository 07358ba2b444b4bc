/// Bindings to the browser extension APIs through `extension.js`

use wasm_bindgen::prelude::*;

use crate::error::{self, ExtensionError};
use crate::operations::HostCommand;
use crate::orchestration::{Downloader, TabDiscovery};
use crate::tab_data::{CheckTabsRequest, CheckTabsResponse, DownloadRequest, TabInfo};

// Import JS bridge functions
#[wasm_bindgen(module = "/extension.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn queryCurrentWindowTabs() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getTabsWithImages() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn sendRuntimeMessage(message: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn downloadUrl(options: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn removeTabs(tab_ids: JsValue) -> Result<(), JsValue>;

    fn addFilenameListener(rewrite: &js_sys::Function) -> JsValue;

    fn removeFilenameListener(handle: &JsValue);
}

/// Popup discovery: one call to the `getTabsWithImages` helper, which asks
/// the background script on our behalf
#[derive(Debug, Clone, Copy)]
pub struct ImageTabsHelper;

/// Dialog discovery: query the window here, then send `checktabs` ourselves
#[derive(Debug, Clone, Copy)]
pub struct BackgroundCheck;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryMode {
    Helper,
    Background,
}

impl TabDiscovery for ImageTabsHelper {
    async fn discover(&self) -> error::Result<Vec<TabInfo>> {
        let response_js = getTabsWithImages()
            .await
            .map_err(|e| ExtensionError::Bridge(format!("getTabsWithImages: {:?}", e)))?;

        decode_check_tabs(response_js)
    }
}

impl TabDiscovery for BackgroundCheck {
    async fn discover(&self) -> error::Result<Vec<TabInfo>> {
        let tabs = query_current_window_tabs().await?;
        let request = to_js(&CheckTabsRequest::new(tabs))?;

        let response_js = sendRuntimeMessage(request)
            .await
            .map_err(|e| ExtensionError::Bridge(format!("runtime.sendMessage: {:?}", e)))?;

        decode_check_tabs(response_js)
    }
}

impl TabDiscovery for DiscoveryMode {
    async fn discover(&self) -> error::Result<Vec<TabInfo>> {
        match self {
            DiscoveryMode::Helper => ImageTabsHelper.discover().await,
            DiscoveryMode::Background => BackgroundCheck.discover().await,
        }
    }
}

/// The background script decides which tabs hold images; keep its answer as is
fn decode_check_tabs(response_js: JsValue) -> error::Result<Vec<TabInfo>> {
    if response_js.is_null() || response_js.is_undefined() {
        log::warn!("Background script sent no response");
        return Ok(Vec::new());
    }

    let response: CheckTabsResponse = from_js(response_js)?;
    Ok(response.tabs)
}

/// `chrome.downloads`
#[derive(Debug, Clone, Copy)]
pub struct ChromeDownloads;

impl Downloader for ChromeDownloads {
    async fn download(&self, request: DownloadRequest) -> error::Result<Option<i32>> {
        let options = to_js(&request)?;
        let id_js = downloadUrl(options)
            .await
            .map_err(|e| ExtensionError::Bridge(format!("downloads.download: {:?}", e)))?;

        from_js(id_js)
    }
}

/// A registered `onDeterminingFilename` listener, removed on drop
pub struct FilenameListener {
    handle: JsValue,
    _rewrite: Closure<dyn Fn(String) -> String>,
}

impl FilenameListener {
    pub fn register(rewrite: impl Fn(&str) -> String + 'static) -> Self {
        let rewrite = Closure::wrap(
            Box::new(move |filename: String| rewrite(&filename)) as Box<dyn Fn(String) -> String>
        );
        let handle = addFilenameListener(rewrite.as_ref().unchecked_ref());

        FilenameListener {
            handle,
            _rewrite: rewrite,
        }
    }
}

impl Drop for FilenameListener {
    fn drop(&mut self) {
        removeFilenameListener(&self.handle);
    }
}

/// Run host commands in order
pub async fn execute(commands: Vec<HostCommand>) {
    for command in commands {
        match command {
            HostCommand::RemoveTabs(tab_ids) => {
                log::info!("Closing {} downloaded tabs", tab_ids.len());
                if let Err(e) = remove_tabs(&tab_ids).await {
                    log::error!("{}", e);
                }
            }
            HostCommand::Dismiss => close_window(),
        }
    }
}

async fn query_current_window_tabs() -> error::Result<Vec<TabInfo>> {
    let tabs_js = queryCurrentWindowTabs()
        .await
        .map_err(|e| ExtensionError::Bridge(format!("tabs.query: {:?}", e)))?;

    from_js(tabs_js)
}

async fn remove_tabs(tab_ids: &[i32]) -> error::Result<()> {
    let tab_ids_js = to_js(&tab_ids)?;

    removeTabs(tab_ids_js)
        .await
        .map_err(|e| ExtensionError::Bridge(format!("tabs.remove: {:?}", e)))
}

fn close_window() {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.close() {
                log::error!("Failed to close window: {:?}", e);
            }
        }
        None => log::error!("No window to close"),
    }
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> error::Result<JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| ExtensionError::Encode(format!("{:?}", e)))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> error::Result<T> {
    serde_wasm_bindgen::from_value(value).map_err(|e| ExtensionError::Decode(format!("{:?}", e)))
}
