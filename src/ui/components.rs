/// Reusable UI components

use patternfly_yew::prelude::*;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::location::{DownloadLocation, CUSTOM_OPTION, DEFAULT_OPTION};
use crate::operations::{file_name, pluralize_images};
use crate::status::DownloadStatusMap;
use crate::tab_data::TabInfo;

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="loading-text-center">
            <Spinner />
            <p class="loading-text">{"Looking for images..."}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoImagesMessageProps {
    pub on_dismiss: Callback<MouseEvent>,
}

#[function_component(NoImagesMessage)]
pub fn no_images_message(props: &NoImagesMessageProps) -> Html {
    html! {
        <div>
            <div class="align-center padding">
                <img src="img/icon48.png" alt="icon" />
                <h1>{"Save Tabbed Images"}</h1>
                <p>{"No images opened in current window."}</p>
                <p>{"Right click an image and select \"Open Image in New Tab\" to get started."}</p>
            </div>
            <Button onclick={props.on_dismiss.clone()} variant={ButtonVariant::Primary} block={true}>
                {"Got it"}
            </Button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DownloadButtonProps {
    pub count: usize,
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(DownloadButton)]
pub fn download_button(props: &DownloadButtonProps) -> Html {
    html! {
        <Button onclick={props.onclick.clone()} disabled={props.disabled} variant={ButtonVariant::Primary} block={true}>
            {format!("Download {}", pluralize_images(props.count))}
        </Button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgressSummaryProps {
    pub statuses: DownloadStatusMap,
    pub image_count: usize,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

/// "N of M images downloaded"
#[function_component(ProgressSummary)]
pub fn progress_summary(props: &ProgressSummaryProps) -> Html {
    let onclick = props.onclick.clone();

    html! {
        <div class="progress align-center padding" title="Click to see image list" {onclick}>
            <div class="progress-count">
                {format!("{} of {}", props.statuses.completed_count(), props.image_count)}
            </div>
            <div class="text-smaller">{"images downloaded"}</div>
            if props.statuses.total_count() > 0 {
                <Progress value={props.statuses.progress_percent() as f64} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FileListProps {
    pub id: AttrValue,
    pub tabs: Vec<TabInfo>,
    pub statuses: DownloadStatusMap,
}

#[function_component(FileList)]
pub fn file_list(props: &FileListProps) -> Html {
    html! {
        <ul id={props.id.clone()} class="background-gray padding text-smaller">
            {for props.tabs.iter().map(|tab| {
                let class = props.statuses.get(tab.id).map(|s| s.as_class()).unwrap_or_default();
                html! {
                    <li key={tab.id} {class}>
                        <a href={tab.url.clone()} title={tab.url.clone()}>{file_name(&tab.url)}</a>
                    </li>
                }
            })}
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct FailureNoticeProps {
    pub failed: usize,
    pub on_retry: Callback<MouseEvent>,
}

#[function_component(FailureNotice)]
pub fn failure_notice(props: &FailureNoticeProps) -> Html {
    let title = if props.failed == 1 {
        "1 image failed to download".to_string()
    } else {
        format!("{} images failed to download", props.failed)
    };

    html! {
        <div class="message-top-margin">
            <Alert r#type={AlertType::Warning} {title} inline={true}>
            </Alert>
            <Button onclick={props.on_retry.clone()} variant={ButtonVariant::Secondary} block={true}>
                {"Retry Failed Downloads"}
            </Button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CloseTabsButtonProps {
    pub onclick: Callback<MouseEvent>,
}

#[function_component(CloseTabsButton)]
pub fn close_tabs_button(props: &CloseTabsButtonProps) -> Html {
    html! {
        <div id="close-tabs" class="message-top-margin">
            <Button onclick={props.onclick.clone()} variant={ButtonVariant::Secondary} block={true}>
                {"Close Downloaded Tabs"}
            </Button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LocationOptionsProps {
    pub location: DownloadLocation,
    pub on_select: Callback<String>,
    pub on_path_input: Callback<String>,
    pub on_submit: Callback<()>,
}

/// Radio choice between the default location and a custom subfolder
#[function_component(LocationOptions)]
pub fn location_options(props: &LocationOptionsProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_select.emit(input.value());
            }
        })
    };

    let oninput = {
        let on_path_input = props.on_path_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_path_input.emit(input.value());
            }
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let use_custom = props.location.use_custom;

    html! {
        <form id="download-options" {onsubmit}>
            <ul>
                <li>
                    <input
                        id="path-option-default"
                        type="radio"
                        value={DEFAULT_OPTION}
                        checked={!use_custom}
                        onchange={onchange.clone()}
                    />
                    <label for="path-option-default">{"Default download location"}</label>
                </li>
                <li>
                    <input
                        id="path-option-custom"
                        type="radio"
                        value={CUSTOM_OPTION}
                        checked={use_custom}
                        {onchange}
                    />
                    <div class="path-wrapper">
                        <label for="path-option-custom">{"Subfolder within default location"}</label>
                        <input
                            id="path"
                            type="text"
                            value={props.location.custom_path.clone()}
                            disabled={!use_custom}
                            {oninput}
                        />
                    </div>
                </li>
            </ul>
        </form>
    }
}
