use contracts::domain::a009_advertisement::AdvertisementKind;
use contracts::shared::status::RecordStatus;
use leptos::prelude::*;

use super::model::AdvertisementService;
use super::view_model::AdvertisementDraft;
use crate::shared::attachment::Attachment;
use crate::shared::components::form_fields::{FileField, SelectField, TextAreaField, TextField};
use crate::shared::components::record_modal::RecordModal;
use crate::shared::components::status_badge::status_options;
use crate::shared::hooks::FormHandle;
use crate::shared::notify::Notifier;
use crate::shared::toast::use_toasts;

#[component]
pub fn AdvertisementDetails(
    form: FormHandle<AdvertisementDraft, AdvertisementService>,
    kind: AdvertisementKind,
) -> impl IntoView {
    let read_only = form.read_only();
    let toasts = use_toasts();

    let pick = move |file: web_sys::File, apply: fn(&mut AdvertisementDraft, Attachment)| {
        match Attachment::from_file(file) {
            Ok(attachment) => form.edit(move |d| apply(d, attachment)),
            Err(e) => {
                log::warn!("file preview failed: {}", e);
                toasts.error("Could not read the selected file");
            }
        }
    };

    let points = kind == AdvertisementKind::CardPoints;
    let description_label = if points { "Points" } else { "Description" };

    view! {
        <RecordModal
            title=form.title()
            on_close=Callback::new(move |_| form.close())
            on_submit=Callback::new(move |_| form.submit())
            submitting=form.submitting()
            read_only=read_only
            wide=true
        >
            <TextField
                label="Title"
                required=true
                value=form.field(|d| d.dto.title.clone())
                on_input=Callback::new(move |v: String| form.edit(|d| d.dto.title = v))
                error=form.error("title")
                disabled=read_only
            />
            <TextAreaField
                label=description_label
                required=points
                value=form.field(|d| d.dto.description.clone())
                on_input=Callback::new(move |v: String| form.edit(|d| d.dto.description = v))
                error=form.error("description")
                disabled=read_only
            />
            <div class="form__row">
                <TextField
                    label="Link"
                    input_type="url"
                    placeholder="https://"
                    value=form.field(|d| d.dto.link.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.dto.link = v))
                    disabled=read_only
                />
                <SelectField
                    label="Status"
                    value=form.field(|d| d.dto.status.as_str().to_string())
                    options=Signal::derive(status_options)
                    on_change=Callback::new(move |v: String| form.edit(|d| d.dto.status = RecordStatus::from_str_lossy(&v)))
                    disabled=read_only
                />
            </div>

            {kind.has_schedule().then(|| view! {
                <div class="form__row">
                    <TextField
                        label="Start date"
                        input_type="date"
                        value=form.field(|d| d.dto.start_date.clone())
                        on_input=Callback::new(move |v: String| form.edit(|d| d.dto.start_date = v))
                        disabled=read_only
                    />
                    <TextField
                        label="End date"
                        input_type="date"
                        value=form.field(|d| d.dto.end_date.clone())
                        on_input=Callback::new(move |v: String| form.edit(|d| d.dto.end_date = v))
                        error=form.error("end_date")
                        disabled=read_only
                    />
                </div>
            })}

            {if kind.needs_video() {
                view! {
                    <FileField
                        label="Video"
                        accept="video/*"
                        video=true
                        required=true
                        preview=form.field(AdvertisementDraft::video_preview)
                        on_select=Callback::new(move |file: web_sys::File| pick(file, AdvertisementDraft::set_video))
                        error=form.error("video")
                        disabled=read_only
                    />
                }
                .into_any()
            } else {
                view! {
                    <FileField
                        label="Image"
                        accept="image/*"
                        required=kind.needs_image()
                        preview=form.field(AdvertisementDraft::image_preview)
                        on_select=Callback::new(move |file: web_sys::File| pick(file, AdvertisementDraft::set_image))
                        error=form.error("image")
                        disabled=read_only
                    />
                }
                .into_any()
            }}
        </RecordModal>
    }
}
