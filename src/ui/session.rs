/// Download session shared by the popup and the dialog

use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::chrome::{execute, ChromeDownloads, DiscoveryMode};
use crate::operations::{close_downloaded_tabs, dismiss};
use crate::orchestration::{download_tab, load_image_tabs, DownloadOutcome};
use crate::status::DownloadStatusMap;
use crate::tab_data::TabInfo;

#[derive(Debug, Clone, PartialEq)]
pub enum BatchAction {
    Start(Vec<i32>),
    Finished(DownloadOutcome),
    Retry(Vec<i32>),
}

impl Reducible for DownloadStatusMap {
    type Action = BatchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        let changed = match action {
            BatchAction::Start(tab_ids) => {
                next.start_batch(tab_ids);
                true
            }
            BatchAction::Finished(DownloadOutcome::Complete(tab_id)) => next.mark_complete(tab_id),
            BatchAction::Finished(DownloadOutcome::Failed(tab_id)) => next.mark_failed(tab_id),
            BatchAction::Retry(tab_ids) => tab_ids
                .into_iter()
                .fold(false, |changed, tab_id| next.mark_retrying(tab_id) || changed),
        };

        if changed { Rc::new(next) } else { self }
    }
}

/// Which screen a variant shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionView {
    Loading,
    NoImages,
    Ready,
}

/// The download button only exists in `Ready`
pub fn view_state(loading: bool, tabs: &[TabInfo]) -> SessionView {
    if loading {
        SessionView::Loading
    } else if tabs.is_empty() {
        SessionView::NoImages
    } else {
        SessionView::Ready
    }
}

#[derive(Clone)]
pub struct DownloadSession {
    pub tabs: UseStateHandle<Vec<TabInfo>>,
    pub loading: UseStateHandle<bool>,
    pub statuses: UseReducerHandle<DownloadStatusMap>,
}

/// Discover image tabs on mount and track downloads for them
#[hook]
pub fn use_download_session(mode: DiscoveryMode) -> DownloadSession {
    let tabs = use_state(Vec::<TabInfo>::new);
    let loading = use_state(|| true);
    let statuses = use_reducer(DownloadStatusMap::new);

    {
        let tabs = tabs.clone();
        let loading = loading.clone();

        use_effect_with(mode, move |mode| {
            let mode = *mode;
            spawn_local(async move {
                tabs.set(load_image_tabs(&mode).await);
                loading.set(false);
            });
            || ()
        });
    }

    DownloadSession {
        tabs,
        loading,
        statuses,
    }
}

impl DownloadSession {
    pub fn view(&self) -> SessionView {
        view_state(*self.loading, &self.tabs)
    }

    pub fn on_download(&self) -> Callback<MouseEvent> {
        let session = self.clone();
        Callback::from(move |_: MouseEvent| session.start())
    }

    /// Same as the download button, for the options form
    pub fn on_submit(&self) -> Callback<()> {
        let session = self.clone();
        Callback::from(move |_: ()| session.start())
    }

    pub fn on_retry(&self) -> Callback<MouseEvent> {
        let session = self.clone();
        Callback::from(move |_: MouseEvent| session.retry_failed())
    }

    pub fn on_close_tabs(&self) -> Callback<MouseEvent> {
        let session = self.clone();
        Callback::from(move |_: MouseEvent| session.close_downloaded_tabs())
    }

    /// Mark every listed tab pending, then request each download
    pub fn start(&self) {
        if self.statuses.is_downloading() {
            return;
        }

        let tabs = (*self.tabs).clone();
        log::info!("Starting download of {} images", tabs.len());

        self.statuses
            .dispatch(BatchAction::Start(tabs.iter().map(|tab| tab.id).collect()));
        spawn_downloads(tabs, self.statuses.dispatcher());
    }

    /// Request the failed tabs of the current batch again
    pub fn retry_failed(&self) {
        let failed = self.statuses.failed_tab_ids();
        if failed.is_empty() {
            return;
        }

        let tabs: Vec<TabInfo> = self
            .tabs
            .iter()
            .filter(|tab| failed.contains(&tab.id))
            .cloned()
            .collect();
        log::info!("Retrying {} failed downloads", tabs.len());

        self.statuses.dispatch(BatchAction::Retry(failed));
        spawn_downloads(tabs, self.statuses.dispatcher());
    }

    pub fn close_downloaded_tabs(&self) {
        spawn_local(execute(close_downloaded_tabs(&self.statuses)));
    }
}

pub fn on_dismiss() -> Callback<MouseEvent> {
    Callback::from(|_: MouseEvent| spawn_local(execute(dismiss())))
}

fn spawn_downloads(tabs: Vec<TabInfo>, dispatcher: UseReducerDispatcher<DownloadStatusMap>) {
    for tab in tabs {
        let dispatcher = dispatcher.clone();
        spawn_local(async move {
            let outcome = download_tab(&ChromeDownloads, &tab).await;
            dispatcher.dispatch(BatchAction::Finished(outcome));
        });
    }
}
