/// Data structures exchanged with the browser
use serde::{Deserialize, Serialize};

use crate::config::{CHECK_TABS_MESSAGE, CONFLICT_ACTION};

/// Information about a browser tab
///
/// The host sends many more fields than these; they are ignored on decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TabInfo {
    pub id: i32,
    // Absent when the extension lacks host permission for the tab
    #[serde(default)]
    pub url: String,
}

impl TabInfo {
    pub fn new(id: i32, url: impl Into<String>) -> TabInfo {
        TabInfo { id, url: url.into() }
    }
}

/// Request sent to the background script asking which tabs hold an image
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CheckTabsRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub tabs: Vec<TabInfo>,
}

impl CheckTabsRequest {
    pub fn new(tabs: Vec<TabInfo>) -> Self {
        CheckTabsRequest {
            kind: CHECK_TABS_MESSAGE.to_string(),
            tabs,
        }
    }
}

/// Background script reply; a reply without `tabs` means no images
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CheckTabsResponse {
    #[serde(default)]
    pub tabs: Vec<TabInfo>,
}

/// Options passed to `downloads.download`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRequest {
    pub url: String,
    pub conflict_action: String,
}

impl DownloadRequest {
    pub fn for_tab(tab: &TabInfo) -> Self {
        DownloadRequest {
            url: tab.url.clone(),
            conflict_action: CONFLICT_ACTION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_info_ignores_extra_fields() {
        let json = r#"{"id": 7, "url": "https://example.com/cat.png", "title": "cat.png", "pinned": false, "index": 3}"#;
        let tab: TabInfo = serde_json::from_str(json).unwrap();

        assert_eq!(tab, TabInfo::new(7, "https://example.com/cat.png"));
    }

    #[test]
    fn test_tab_info_without_url() {
        let tab: TabInfo = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(tab.url, "");
    }

    #[test]
    fn test_check_tabs_request_shape() {
        let request = CheckTabsRequest::new(vec![TabInfo::new(1, "a")]);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["type"], "checktabs");
        assert_eq!(value["tabs"][0]["id"], 1);
        assert_eq!(value["tabs"][0]["url"], "a");
    }

    #[test]
    fn test_check_tabs_response_keeps_urls_without_extension() {
        let json = r#"{"tabs": [
            {"id": 1, "url": "https://pbs.twimg.com/media/GabcXYZ?format=jpg&name=large"},
            {"id": 2, "url": "https://images.unsplash.com/photo-1500000000000?w=1200"},
            {"id": 3, "url": "https://i.redd.it/abc123.jpg"}
        ]}"#;
        let response: CheckTabsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(
            response.tabs.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_check_tabs_response_without_tabs() {
        let response: CheckTabsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.tabs.is_empty());
    }

    #[test]
    fn test_download_request_uniquifies() {
        let request = DownloadRequest::for_tab(&TabInfo::new(2, "https://example.com/b.jpg"));
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["url"], "https://example.com/b.jpg");
        assert_eq!(value["conflictAction"], "uniquify");
    }
}
