/// Save image dialog: the popup plus a choice of download folder

use yew::prelude::*;

use crate::chrome::{DiscoveryMode, FilenameListener};
use crate::location::{default_folder_name, DownloadLocation};
use crate::ui::components::{
    CloseTabsButton, DownloadButton, FailureNotice, FileList, Loading, LocationOptions,
    NoImagesMessage,
};
use crate::ui::session::{on_dismiss, use_download_session, SessionView};

#[function_component(SaveImageDialog)]
pub fn save_image_dialog() -> Html {
    let session = use_download_session(DiscoveryMode::Background);
    let location = use_state(|| DownloadLocation::new(default_folder_name()));

    // The filename listener outlives renders, so it reads the latest choice from here
    let latest_location = use_mut_ref(|| (*location).clone());
    *latest_location.borrow_mut() = (*location).clone();

    {
        let latest_location = latest_location.clone();
        use_effect_with((), move |_| {
            let listener = FilenameListener::register(move |filename| {
                let suggested = latest_location.borrow().suggest_filename(filename);
                log::debug!("Saving {} as {}", filename, suggested);
                suggested
            });
            move || drop(listener)
        });
    }

    let on_select = {
        let location = location.clone();
        Callback::from(move |value: String| {
            let mut next = (*location).clone();
            next.select_option(&value);
            location.set(next);
        })
    };

    let on_path_input = {
        let location = location.clone();
        Callback::from(move |path: String| {
            let mut next = (*location).clone();
            next.set_custom_path(path);
            location.set(next);
        })
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

                <LocationOptions
                    location={(*location).clone()}
                    {on_select}
                    {on_path_input}
                    on_submit={session.on_submit()}
                />

                <FileList id="links" tabs={(*session.tabs).clone()} statuses={statuses.clone()} />

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
        <div class="save-image-dialog">{content}</div>
    }
}
