//! Thin client for the student table of the hosted store.
//!
//! Four operations map onto PostgREST requests against `{url}/rest/v1/{table}`:
//! - list: `GET ?select=*&order=data_criacao.desc`
//! - insert: `POST` with a one-row JSON array
//! - update: `PATCH ?id=eq.{id}` with the editable fields
//! - delete: `DELETE ?id=eq.{id}`
//!
//! Every request carries the public `anon_key` both as `apikey` and as a
//! bearer token. Non-2xx answers become `StoreError::Api` with the store's
//! own message.

use gloo_net::http::{Request, RequestBuilder, Response};

use common::model::store::StoreConfig;
use common::model::student::{Student, StudentForm};
use common::requests::{id_filter, list_query, table_url, ApiError};

use super::error::StoreError;

/// Path of the host endpoint serving the store configuration.
const CONFIG_PATH: &str = "/api/config";

#[derive(Clone, Debug, PartialEq)]
pub struct StudentStore {
    config: StoreConfig,
    table_url: String,
}

impl StudentStore {
    pub fn new(config: StoreConfig) -> Self {
        let table_url = table_url(&config);
        Self { config, table_url }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &format!("Bearer {}", self.config.anon_key))
    }

    /// All records, newest first.
    pub async fn list(&self) -> Result<Vec<Student>, StoreError> {
        let response = self
            .authorize(Request::get(&self.table_url))
            .query(list_query())
            .send()
            .await?;

        let response = ensure_success(response).await?;
        Ok(response.json::<Vec<Student>>().await?)
    }

    pub async fn insert(&self, form: &StudentForm) -> Result<(), StoreError> {
        let response = self
            .authorize(Request::post(&self.table_url))
            .header("Prefer", "return=minimal")
            .json(&[form])?
            .send()
            .await?;

        ensure_success(response).await.map(|_| ())
    }

    pub async fn update(&self, id: &str, form: &StudentForm) -> Result<(), StoreError> {
        let response = self
            .authorize(Request::patch(&self.table_url))
            .query([id_filter(id)])
            .header("Prefer", "return=minimal")
            .json(form)?
            .send()
            .await?;

        ensure_success(response).await.map(|_| ())
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let response = self
            .authorize(Request::delete(&self.table_url))
            .query([id_filter(id)])
            .header("Prefer", "return=minimal")
            .send()
            .await?;

        ensure_success(response).await.map(|_| ())
    }
}

/// Fetches the store connection details from the host that served the app.
pub async fn load_config() -> Result<StoreConfig, StoreError> {
    let response = Request::get(CONFIG_PATH).send().await?;
    let response = ensure_success(response).await?;
    Ok(response.json::<StoreConfig>().await?)
}

async fn ensure_success(response: Response) -> Result<Response, StoreError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Api {
        status,
        message: ApiError::describe(status, &body),
    })
}
