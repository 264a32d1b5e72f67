//! REST-ресурс рекламы: `/api/advertisement/{kind}`.
//!
//! Создание и изменение уходят как `multipart/form-data`:
//! текстовые поля плюс только что выбранные файлы (`image` / `video`).

use async_trait::async_trait;
use contracts::domain::a009_advertisement::{Advertisement, AdvertisementKind};
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use super::view_model::AdvertisementDraft;
use crate::shared::api_utils::{join_url, path_segment};
use crate::shared::config::{ApiDomain, AppConfig};
use crate::shared::http::{self, ApiError};
use crate::shared::rest::{DeleteRecord, ListQuery, ListSource, RecordService};

#[derive(Debug, Clone)]
pub struct AdvertisementService {
    base_url: String,
    kind: AdvertisementKind,
}

impl AdvertisementService {
    pub fn new(base_url: impl Into<String>, kind: AdvertisementKind) -> Self {
        Self {
            base_url: base_url.into(),
            kind,
        }
    }

    pub fn for_kind(config: &AppConfig, kind: AdvertisementKind) -> Self {
        Self::new(config.base_url(ApiDomain::Advertisements), kind)
    }

    pub fn kind(&self) -> AdvertisementKind {
        self.kind
    }

    pub fn collection_url(&self) -> String {
        join_url(&self.base_url, &format!("/api/advertisement/{}", self.kind.path()))
    }

    pub fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), path_segment(id))
    }
}

fn form_data_error(e: JsValue) -> ApiError {
    ApiError::Encode(format!("form data: {:?}", e))
}

fn multipart_body(draft: &AdvertisementDraft) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(form_data_error)?;
    for (name, value) in draft.dto.form_fields() {
        form.append_with_str(name, &value).map_err(form_data_error)?;
    }
    for (name, file, file_name) in draft.uploads() {
        form.append_with_blob_and_filename(name, file, file_name)
            .map_err(form_data_error)?;
    }
    Ok(form)
}

#[async_trait(?Send)]
impl ListSource<Advertisement> for AdvertisementService {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Advertisement>, ApiError> {
        http::get_json(&query.apply_to(&self.collection_url())).await
    }
}

#[async_trait(?Send)]
impl RecordService<AdvertisementDraft> for AdvertisementService {
    async fn create(&self, draft: &AdvertisementDraft) -> Result<Advertisement, ApiError> {
        http::send_form(Request::post(&self.collection_url()), multipart_body(draft)?).await
    }

    async fn update(&self, id: &str, draft: &AdvertisementDraft) -> Result<Advertisement, ApiError> {
        http::send_form(Request::put(&self.item_url(id)), multipart_body(draft)?).await
    }
}

#[async_trait(?Send)]
impl DeleteRecord for AdvertisementService {
    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        http::delete(&self.item_url(id)).await
    }
}
