/// Tab operations: display names, closing downloaded tabs

use url::Url;

use crate::status::DownloadStatusMap;

/// Commands the UI hands to its hosting shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    RemoveTabs(Vec<i32>),
    Dismiss,
}

/// Close every completed tab, then close the UI. Pending and failed tabs stay open.
pub fn close_downloaded_tabs(statuses: &DownloadStatusMap) -> Vec<HostCommand> {
    let completed = statuses.completed_tab_ids();

    let mut commands = Vec::with_capacity(2);
    if !completed.is_empty() {
        commands.push(HostCommand::RemoveTabs(completed));
    }
    commands.push(HostCommand::Dismiss);
    commands
}

pub fn dismiss() -> Vec<HostCommand> {
    vec![HostCommand::Dismiss]
}

/// Short label for a file list entry: the last path segment, else the URL
pub fn file_name(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .filter(|name| !name.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| url.to_string())
}

/// "1 image", "3 images"
pub fn pluralize_images(count: usize) -> String {
    if count == 1 {
        "1 image".to_string()
    } else {
        format!("{} images", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn downloaded(complete: &[i32], pending: &[i32], failed: &[i32]) -> DownloadStatusMap {
        let mut map = DownloadStatusMap::new();
        map.start_batch(complete.iter().chain(pending).chain(failed).copied());
        for id in complete {
            map.mark_complete(*id);
        }
        for id in failed {
            map.mark_failed(*id);
        }
        map
    }

    #[test]
    fn test_close_downloaded_tabs_only_removes_complete() {
        let statuses = downloaded(&[1, 4], &[2], &[3]);

        let commands = close_downloaded_tabs(&statuses);

        assert_eq!(
            commands,
            vec![HostCommand::RemoveTabs(vec![1, 4]), HostCommand::Dismiss]
        );
    }

    #[test]
    fn test_close_with_nothing_complete_just_dismisses() {
        let statuses = downloaded(&[], &[1], &[]);
        assert_eq!(close_downloaded_tabs(&statuses), vec![HostCommand::Dismiss]);
        assert_eq!(dismiss(), vec![HostCommand::Dismiss]);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("https://example.com/pics/cat.png"), "cat.png");
        assert_eq!(file_name("https://example.com/"), "https://example.com/");
        assert_eq!(file_name("b"), "b");
        assert_eq!(
            file_name("https://pbs.twimg.com/media/GabcXYZ?format=jpg&name=large"),
            "GabcXYZ"
        );
    }

    #[test]
    fn test_pluralize_images() {
        assert_eq!(pluralize_images(0), "0 images");
        assert_eq!(pluralize_images(1), "1 image");
        assert_eq!(pluralize_images(2), "2 images");
    }
}
