//! Capability traits of the REST services and a generic JSON implementation.
//!
//! Страницы и контроллеры знают только трейты; конкретный ресурс
//! (`JsonResource`, мультипарт-сервис рекламы, тестовые фейки) подставляется снаружи.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::NaiveDate;
use contracts::shared::reorder::ReorderEntry;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::{join_url, path_segment};
use crate::shared::form::FormDraft;
use crate::shared::http::{self, ApiError};

/// Query string of a list request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

impl ListQuery {
    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }

    /// `url` with this query appended, or unchanged when the query is empty.
    pub fn apply_to(&self, url: &str) -> String {
        let qs = self.to_query_string();
        if qs.is_empty() {
            url.to_string()
        } else {
            format!("{}?{}", url, qs)
        }
    }
}

#[async_trait(?Send)]
pub trait ListSource<T> {
    async fn list(&self, query: &ListQuery) -> Result<Vec<T>, ApiError>;
}

#[async_trait(?Send)]
pub trait RecordService<D: FormDraft> {
    async fn create(&self, draft: &D) -> Result<D::Record, ApiError>;
    async fn update(&self, id: &str, draft: &D) -> Result<D::Record, ApiError>;
}

#[async_trait(?Send)]
pub trait DeleteRecord {
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
pub trait ReorderService {
    async fn reorder(&self, entries: &[ReorderEntry]) -> Result<(), ApiError>;
}

/// JSON resource at `{base}{path}`: list, create, update, delete and bulk reorder.
pub struct JsonResource<T, D> {
    base_url: String,
    path: &'static str,
    _marker: PhantomData<fn() -> (T, D)>,
}

impl<T, D> Clone for JsonResource<T, D> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            path: self.path,
            _marker: PhantomData,
        }
    }
}

impl<T, D> JsonResource<T, D> {
    pub fn new(base_url: impl Into<String>, path: &'static str) -> Self {
        Self {
            base_url: base_url.into(),
            path,
            _marker: PhantomData,
        }
    }

    pub fn collection_url(&self) -> String {
        join_url(&self.base_url, self.path)
    }

    pub fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), path_segment(id))
    }

    pub fn list_url(&self, query: &ListQuery) -> String {
        query.apply_to(&self.collection_url())
    }

    pub fn reorder_url(&self) -> String {
        format!("{}/reorder", self.collection_url())
    }
}

#[async_trait(?Send)]
impl<T, D> ListSource<T> for JsonResource<T, D>
where
    T: DeserializeOwned,
{
    async fn list(&self, query: &ListQuery) -> Result<Vec<T>, ApiError> {
        http::get_json(&self.list_url(query)).await
    }
}

#[async_trait(?Send)]
impl<T, D> RecordService<D> for JsonResource<T, D>
where
    T: DeserializeOwned,
    D: FormDraft<Record = T> + Serialize,
{
    async fn create(&self, draft: &D) -> Result<T, ApiError> {
        http::send_json(Request::post(&self.collection_url()), draft).await
    }

    async fn update(&self, id: &str, draft: &D) -> Result<T, ApiError> {
        http::send_json(Request::put(&self.item_url(id)), draft).await
    }
}

#[async_trait(?Send)]
impl<T, D> DeleteRecord for JsonResource<T, D> {
    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        http::delete(&self.item_url(id)).await
    }
}

#[async_trait(?Send)]
impl<T, D> ReorderService for JsonResource<T, D> {
    async fn reorder(&self, entries: &[ReorderEntry]) -> Result<(), ApiError> {
        http::send_json_expect_ok(Request::post(&self.reorder_url()), entries).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_customer::{Customer, CustomerDto};

    fn resource() -> JsonResource<Customer, CustomerDto> {
        JsonResource::new("http://erp.local:5000/", "/api/customers")
    }

    #[test]
    fn test_urls() {
        let r = resource();
        assert_eq!(r.collection_url(), "http://erp.local:5000/api/customers");
        assert_eq!(r.item_url("65f0"), "http://erp.local:5000/api/customers/65f0");
        assert_eq!(
            r.reorder_url(),
            "http://erp.local:5000/api/customers/reorder"
        );
    }

    #[test]
    fn test_list_query_string() {
        assert_eq!(ListQuery::default().to_query_string(), "");
        assert_eq!(
            resource().list_url(&ListQuery::default()),
            "http://erp.local:5000/api/customers"
        );

        let query = ListQuery {
            search: "ravi kumar".into(),
            from: NaiveDate::from_ymd_opt(2024, 5, 1),
            to: NaiveDate::from_ymd_opt(2024, 5, 7),
        };
        let qs = query.to_query_string();
        assert!(qs.contains("search=ravi"));
        assert!(qs.contains("from=2024-05-01"));
        assert!(qs.contains("to=2024-05-07"));
    }
}
