use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, HtmlInputElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::components::{FatHeading, MutedText, WrappedContainer};

#[derive(Properties, PartialEq)]
pub struct FileUploadProps {
    pub on_file_select: Callback<web_sys::File>,
}

/// Drop zone plus a hidden file input. Whichever way the file arrives,
/// only the first one is handed upward.
#[function_component(FileUpload)]
pub fn file_upload(props: &FileUploadProps) -> Html {
    let is_drag_over = use_state(|| false);
    let input_ref = use_node_ref();

    let on_input_change = {
        let on_file_select = props.on_file_select.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                    on_file_select.emit(file);
                }
            }
        })
    };

    let on_drop = {
        let on_file_select = props.on_file_select.clone();
        let is_drag_over = is_drag_over.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            is_drag_over.set(false);
            if let Some(file) = e
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                on_file_select.emit(file);
            }
        })
    };

    // Without this the browser navigates to the dropped file.
    let on_drag_over = {
        let is_drag_over = is_drag_over.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            is_drag_over.set(true);
        })
    };

    let on_drag_leave = {
        let is_drag_over = is_drag_over.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            is_drag_over.set(false);
        })
    };

    let on_zone_click = {
        let input_ref = input_ref.clone();
        Callback::from(move |_| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let drag_over_class = if *is_drag_over { "drag-over" } else { "" };

    html! {
        <WrappedContainer>
            <FatHeading>{"Upload your data export"}</FatHeading>
            <MutedText class={classes!("max-w-xl")}>
                {"Select the user_data.json file from your TikTok data export. \
                  You can request it in the TikTok app under \
                  Settings → Account → Download your data (choose JSON)."}
            </MutedText>
            <div
                class={classes!("drop-zone", drag_over_class)}
                onclick={on_zone_click}
                ondrop={on_drop}
                ondragover={on_drag_over}
                ondragleave={on_drag_leave}
            >
                <Icon icon_id={IconId::LucideUpload} width={"32"} height={"32"} />
                <p>{"Drag your export here, or click to browse"}</p>
            </div>
            <input
                ref={input_ref}
                type="file"
                accept=".json,application/json"
                style="display: none;"
                onchange={on_input_change}
            />
        </WrappedContainer>
    }
}
