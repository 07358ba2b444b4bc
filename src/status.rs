/// Per-tab download lifecycle for one download batch
use std::collections::BTreeMap;

/// Lifecycle of a single tab's download. A tab with no entry has not been
/// requested in the current batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadStatus {
    Pending,
    Complete,
    Failed,
}

impl DownloadStatus {
    /// CSS class used on the file list entry
    pub fn as_class(&self) -> &'static str {
        match self {
            DownloadStatus::Pending => "pending",
            DownloadStatus::Complete => "complete",
            DownloadStatus::Failed => "failed",
        }
    }
}

/// Status of every tab in the current batch, keyed by tab id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadStatusMap {
    statuses: BTreeMap<i32, DownloadStatus>,
}

impl DownloadStatusMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the map with a fresh batch where every tab is pending
    pub fn start_batch(&mut self, tab_ids: impl IntoIterator<Item = i32>) {
        self.statuses = tab_ids
            .into_iter()
            .map(|id| (id, DownloadStatus::Pending))
            .collect();
    }

    /// Pending -> Complete. Returns false if the tab was not pending.
    pub fn mark_complete(&mut self, tab_id: i32) -> bool {
        self.transition(tab_id, DownloadStatus::Pending, DownloadStatus::Complete)
    }

    /// Pending -> Failed. Returns false if the tab was not pending.
    pub fn mark_failed(&mut self, tab_id: i32) -> bool {
        self.transition(tab_id, DownloadStatus::Pending, DownloadStatus::Failed)
    }

    /// Failed -> Pending for a retry within the same batch
    pub fn mark_retrying(&mut self, tab_id: i32) -> bool {
        self.transition(tab_id, DownloadStatus::Failed, DownloadStatus::Pending)
    }

    fn transition(&mut self, tab_id: i32, from: DownloadStatus, to: DownloadStatus) -> bool {
        match self.statuses.get_mut(&tab_id) {
            Some(status) if *status == from => {
                *status = to;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, tab_id: i32) -> Option<DownloadStatus> {
        self.statuses.get(&tab_id).copied()
    }

    pub fn is_downloading(&self) -> bool {
        self.statuses.values().any(|s| *s == DownloadStatus::Pending)
    }

    /// An empty map is never complete
    pub fn is_complete(&self) -> bool {
        !self.statuses.is_empty() && self.statuses.values().all(|s| *s == DownloadStatus::Complete)
    }

    /// Every request in the batch has finished, successfully or not
    pub fn is_settled(&self) -> bool {
        !self.statuses.is_empty() && !self.is_downloading()
    }

    /// Offer "close downloaded tabs" once nothing is pending and something finished
    pub fn can_close_downloaded(&self) -> bool {
        self.is_complete() || (self.is_settled() && self.completed_count() > 0)
    }

    pub fn total_count(&self) -> usize {
        self.statuses.len()
    }

    pub fn completed_count(&self) -> usize {
        self.count(DownloadStatus::Complete)
    }

    pub fn failed_count(&self) -> usize {
        self.count(DownloadStatus::Failed)
    }

    fn count(&self, wanted: DownloadStatus) -> usize {
        self.statuses.values().filter(|s| **s == wanted).count()
    }

    pub fn completed_tab_ids(&self) -> Vec<i32> {
        self.ids_with(DownloadStatus::Complete)
    }

    pub fn failed_tab_ids(&self) -> Vec<i32> {
        self.ids_with(DownloadStatus::Failed)
    }

    fn ids_with(&self, wanted: DownloadStatus) -> Vec<i32> {
        self.statuses
            .iter()
            .filter(|(_, status)| **status == wanted)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Share of the batch already downloaded, 0-100
    pub fn progress_percent(&self) -> u8 {
        match self.total_count() {
            0 => 0,
            total => (self.completed_count() * 100 / total) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(ids: &[i32]) -> DownloadStatusMap {
        let mut map = DownloadStatusMap::new();
        map.start_batch(ids.iter().copied());
        map
    }

    #[test]
    fn test_empty_map_is_neither_complete_nor_downloading() {
        let map = DownloadStatusMap::new();

        assert!(!map.is_complete());
        assert!(!map.is_downloading());
        assert!(!map.is_settled());
        assert_eq!(map.progress_percent(), 0);
    }

    #[test]
    fn test_start_batch_sets_all_pending() {
        let map = batch(&[1, 2, 3]);

        assert_eq!(map.total_count(), 3);
        for id in [1, 2, 3] {
            assert_eq!(map.get(id), Some(DownloadStatus::Pending));
        }
        assert!(map.is_downloading());
        assert!(!map.is_complete());
    }

    #[test]
    fn test_start_batch_replaces_previous_batch() {
        let mut map = batch(&[1, 2]);
        map.mark_complete(1);

        map.start_batch([3]);

        assert_eq!(map.get(1), None);
        assert_eq!(map.get(2), None);
        assert_eq!(map.get(3), Some(DownloadStatus::Pending));
    }

    #[test]
    fn test_completion_only_touches_its_tab() {
        let mut map = batch(&[1, 2, 3]);

        assert!(map.mark_complete(2));

        assert_eq!(map.get(1), Some(DownloadStatus::Pending));
        assert_eq!(map.get(2), Some(DownloadStatus::Complete));
        assert_eq!(map.get(3), Some(DownloadStatus::Pending));
        assert_eq!(map.completed_count(), 1);
    }

    #[test]
    fn test_all_complete() {
        let mut map = batch(&[1, 2]);
        map.mark_complete(1);
        map.mark_complete(2);

        assert!(map.is_complete());
        assert!(!map.is_downloading());
        assert_eq!(map.completed_count(), 2);
        assert_eq!(map.total_count(), 2);
        assert_eq!(map.progress_percent(), 100);
    }

    #[test]
    fn test_unknown_tab_is_ignored() {
        let mut map = batch(&[1]);

        assert!(!map.mark_complete(42));
        assert!(!map.mark_failed(42));
        assert_eq!(map.get(42), None);
        assert_eq!(map.total_count(), 1);
    }

    #[test]
    fn test_pending_leaves_once() {
        let mut map = batch(&[1]);

        assert!(map.mark_complete(1));
        assert!(!map.mark_failed(1));
        assert_eq!(map.get(1), Some(DownloadStatus::Complete));
    }

    #[test]
    fn test_failure_settles_without_completing() {
        let mut map = batch(&[1, 2]);
        map.mark_complete(1);
        map.mark_failed(2);

        assert!(!map.is_downloading());
        assert!(!map.is_complete());
        assert!(map.is_settled());
        assert_eq!(map.failed_count(), 1);
        assert_eq!(map.failed_tab_ids(), vec![2]);
        assert_eq!(map.progress_percent(), 50);
        assert!(map.can_close_downloaded());
    }

    #[test]
    fn test_can_close_downloaded() {
        let mut map = batch(&[1, 2]);
        assert!(!map.can_close_downloaded());

        map.mark_complete(1);
        assert!(!map.can_close_downloaded());

        map.mark_complete(2);
        assert!(map.can_close_downloaded());

        let mut all_failed = batch(&[3]);
        all_failed.mark_failed(3);
        assert!(!all_failed.can_close_downloaded());
    }

    #[test]
    fn test_retry_moves_failed_back_to_pending() {
        let mut map = batch(&[1, 2]);
        map.mark_complete(1);
        map.mark_failed(2);

        assert!(map.mark_retrying(2));
        assert!(!map.mark_retrying(1));

        assert_eq!(map.get(2), Some(DownloadStatus::Pending));
        assert!(map.is_downloading());

        map.mark_complete(2);
        assert!(map.is_complete());
    }

    #[test]
    fn test_completed_tab_ids_excludes_pending_and_failed() {
        let mut map = batch(&[5, 3, 9, 1]);
        map.mark_complete(9);
        map.mark_complete(1);
        map.mark_failed(3);

        assert_eq!(map.completed_tab_ids(), vec![1, 9]);
    }

    #[test]
    fn test_status_classes() {
        assert_eq!(DownloadStatus::Pending.as_class(), "pending");
        assert_eq!(DownloadStatus::Complete.as_class(), "complete");
        assert_eq!(DownloadStatus::Failed.as_class(), "failed");
    }
}
