//! Upload Documents - View Component

use super::controller::submit_upload;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::backend::HttpBackend;
use crate::shared::icons::{icon, icon_sized};
use crate::state::SelectedFile;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_upload_documents::UploadDocuments;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

fn collect_files(list: &web_sys::FileList) -> Vec<SelectedFile<web_sys::File>> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| SelectedFile::new(file.name(), file.size() as u64, file))
        .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn UploadDocumentsPanel() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = ctx.session;
    let is_dragging = RwSignal::new(false);

    let select = move |list: web_sys::FileList| {
        let files = collect_files(&list);
        log::debug!("Selected {} file(s)", files.len());
        session.update(|s| s.select_files(files));
    };

    let handle_file_change = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(files) = input.and_then(|input| input.files()) {
            select(files);
        }
    };

    let handle_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        is_dragging.set(false);
        if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
            let files = collect_files(&list);
            let replaced = session.try_update(|s| s.drop_files(files)).unwrap_or(false);
            if !replaced {
                log::debug!("Drop carried no files, selection kept");
            }
        }
    };

    let handle_upload = move |_: leptos::ev::MouseEvent| {
        wasm_bindgen_futures::spawn_local(async move {
            submit_upload(&session, &HttpBackend).await;
        });
    };

    let is_uploading = Memo::new(move |_| session.with(|s| s.uploading));
    let can_upload = Memo::new(move |_| session.with(|s| s.can_upload()));
    let file_rows = Memo::new(move |_| session.with(|s| s.file_rows()));

    view! {
        <div class="card upload-card">
            <div class="card__header">
                <h5 class="card__title">
                    {icon("upload-cloud")}
                    " "
                    {UploadDocuments::display_name()}
                </h5>
            </div>
            <div class="card__body">
                <label
                    class=move || {
                        if is_dragging.get() {
                            "custom-file-upload custom-file-upload--active"
                        } else {
                            "custom-file-upload"
                        }
                    }
                    on:dragover=move |ev: web_sys::DragEvent| {
                        ev.prevent_default();
                        is_dragging.set(true);
                    }
                    on:dragleave=move |_| is_dragging.set(false)
                    on:drop=handle_drop
                >
                    <input
                        type="file"
                        multiple
                        style="display: none;"
                        on:change=handle_file_change
                    />
                    <div class="custom-file-upload__content">
                        <span class="custom-file-upload__icon">{icon_sized("upload-cloud", 40)}</span>
                        <p>"Drag files here or click to browse"</p>
                        <small class="text-muted">"Supports PDF, PPTX, TXT, etc."</small>
                    </div>
                </label>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !can_upload.get())
                    on_click=handle_upload
                    attr:style="width: 100%;"
                >
                    {move || {
                        if is_uploading.get() {
                            view! {
                                <Spinner size=SpinnerSize::Small />
                                " Uploading..."
                            }
                                .into_any()
                        } else {
                            view! {
                                {icon("upload-cloud")}
                                " Upload Files"
                            }
                                .into_any()
                        }
                    }}
                </Button>

                {move || {
                    let count = file_rows.with(|rows| rows.len());
                    (count > 0)
                        .then(|| {
                            view! {
                                <div class="file-list">
                                    <h6>{format!("Selected Files ({})", count)}</h6>
                                    <ul class="file-list__items">
                                        <For
                                            each=move || file_rows.get()
                                            key=|row| row.id
                                            let:row
                                        >
                                            <li class="file-list__item">
                                                {icon("file-text")}
                                                " "
                                                {row.name.clone()}
                                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                                                    {format!("{} KB", row.size_kb)}
                                                </Badge>
                                            </li>
                                        </For>
                                    </ul>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}
