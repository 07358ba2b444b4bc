/// Compile-time settings for Save Tabbed Images

/// Prefix of the default custom subfolder name
pub const FOLDER_PREFIX: &str = "SaveTabbedImages";

/// How the download API resolves an existing file with the same name
pub const CONFLICT_ACTION: &str = "uniquify";

/// Message type understood by the background script
pub const CHECK_TABS_MESSAGE: &str = "checktabs";

pub const LOG_LEVEL: log::Level = log::Level::Debug;
