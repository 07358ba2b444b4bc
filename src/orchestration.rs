/// Transport-independent contracts for tab discovery and downloads

use crate::error::Result;
use crate::tab_data::{DownloadRequest, TabInfo};

/// Something that can list the tabs worth downloading
pub trait TabDiscovery {
    async fn discover(&self) -> Result<Vec<TabInfo>>;
}

/// Something that can start a download and report its id
pub trait Downloader {
    /// `Ok(None)` means the host accepted the call but started no download
    async fn download(&self, request: DownloadRequest) -> Result<Option<i32>>;
}

/// Outcome of one tab's download request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    Complete(i32),
    Failed(i32),
}

/// Discover image tabs; any failure is treated as "no images"
pub async fn load_image_tabs<D: TabDiscovery>(discovery: &D) -> Vec<TabInfo> {
    match discovery.discover().await {
        Ok(tabs) => {
            log::debug!("Discovered {} image tabs", tabs.len());
            tabs
        }
        Err(e) => {
            log::warn!("Tab discovery failed: {}", e);
            Vec::new()
        }
    }
}

/// Request one tab's download and map the result to an outcome
pub async fn download_tab<D: Downloader>(downloader: &D, tab: &TabInfo) -> DownloadOutcome {
    match downloader.download(DownloadRequest::for_tab(tab)).await {
        Ok(Some(download_id)) => {
            log::debug!("Tab {} downloading as {}", tab.id, download_id);
            DownloadOutcome::Complete(tab.id)
        }
        Ok(None) => {
            log::warn!("Download for tab {} was not started: {}", tab.id, tab.url);
            DownloadOutcome::Failed(tab.id)
        }
        Err(e) => {
            log::warn!("Download for tab {} failed: {}", tab.id, e);
            DownloadOutcome::Failed(tab.id)
        }
    }
}
