/// Popup UI for Save Tabbed Images

use yew::prelude::*;

use crate::chrome::DiscoveryMode;
use crate::ui::components::{
    CloseTabsButton, DownloadButton, FailureNotice, FileList, Loading, NoImagesMessage,
    ProgressSummary,
};
use crate::ui::session::{on_dismiss, use_download_session, SessionView};

#[function_component(Popup)]
pub fn popup() -> Html {
    let session = use_download_session(DiscoveryMode::Helper);
    let show_file_list = use_state(|| false);

    let on_toggle_file_list = {
        let show_file_list = show_file_list.clone();
        Callback::from(move |_: MouseEvent| show_file_list.set(!*show_file_list))
    };

    let statuses = &*session.statuses;
    let image_count = session.tabs.len();

    let content = match session.view() {
        SessionView::Loading => html! { <Loading /> },
        SessionView::NoImages => html! { <NoImagesMessage on_dismiss={on_dismiss()} /> },
        SessionView::Ready => html! {
            <div>
                <DownloadButton
                    count={image_count}
                    disabled={statuses.is_downloading()}
                    onclick={session.on_download()}
                />

                <ProgressSummary
                    statuses={statuses.clone()}
                    {image_count}
                    onclick={on_toggle_file_list}
                />

                if *show_file_list {
                    <FileList id="files" tabs={(*session.tabs).clone()} statuses={statuses.clone()} />
                }

                if statuses.is_settled() && statuses.failed_count() > 0 {
                    <FailureNotice failed={statuses.failed_count()} on_retry={session.on_retry()} />
                }

                if statuses.can_close_downloaded() {
                    <CloseTabsButton onclick={session.on_close_tabs()} />
                }
            </div>
        },
    };

    html! {
        <div class="padding-20">{content}</div>
    }
}
