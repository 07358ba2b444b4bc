/// Download location choice for the dialog
use regex::Regex;
use std::sync::LazyLock;

use crate::config::FOLDER_PREFIX;

pub const DEFAULT_OPTION: &str = "default";
pub const CUSTOM_OPTION: &str = "custom";

/// Characters the downloads API refuses in a filename
static INVALID_PATH_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"\\|?*\x00-\x1F]"#).expect("valid path regex"));

#[derive(Debug, Clone, PartialEq)]
pub struct DownloadLocation {
    pub use_custom: bool,
    pub custom_path: String,
}

impl DownloadLocation {
    /// Starts in default mode with `custom_path` prefilled
    pub fn new(custom_path: impl Into<String>) -> Self {
        DownloadLocation {
            use_custom: false,
            custom_path: custom_path.into(),
        }
    }

    /// Apply a radio button value. Anything other than "default" means custom.
    /// The custom path text is kept either way.
    pub fn select_option(&mut self, value: &str) {
        self.use_custom = value != DEFAULT_OPTION;
    }

    pub fn set_custom_path(&mut self, path: impl Into<String>) {
        self.custom_path = path.into();
    }

    /// Prefix for every downloaded filename: `"<folder>/"` or empty
    pub fn download_path(&self) -> String {
        if !self.use_custom {
            return String::new();
        }

        let folder = sanitize_folder(&self.custom_path);
        if folder.is_empty() {
            String::new()
        } else {
            format!("{}/", folder)
        }
    }

    /// Filename to hand back to `onDeterminingFilename`
    pub fn suggest_filename(&self, filename: &str) -> String {
        format!("{}{}", self.download_path(), filename)
    }
}

/// Make a user-typed subfolder acceptable to the downloads API.
///
/// Invalid characters become `_`; empty, `.` and `..` segments are dropped.
pub fn sanitize_folder(path: &str) -> String {
    let cleaned = INVALID_PATH_CHARS.replace_all(path.trim(), "_");

    cleaned
        .split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
        .collect::<Vec<_>>()
        .join("/")
}

/// `SaveTabbedImages-yyyy-mm-dd-HHMMss`; month is 1-based
pub fn format_folder_name(year: u32, month: u32, day: u32, hours: u32, minutes: u32, seconds: u32) -> String {
    format!(
        "{}-{:04}-{:02}-{:02}-{:02}{:02}{:02}",
        FOLDER_PREFIX, year, month, day, hours, minutes, seconds
    )
}

/// Folder name for the current local time
pub fn default_folder_name() -> String {
    let date = js_sys::Date::new_0();
    format_folder_name(
        date.get_full_year(),
        date.get_month() + 1,
        date.get_date(),
        date.get_hours(),
        date.get_minutes(),
        date.get_seconds(),
    )
}
