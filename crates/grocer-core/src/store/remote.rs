//! Remote-synced backend talking to a PostgREST-style REST API.
//!
//! Items live in the `items` table and trips in the `history` table under
//! `{url}/rest/v1/`. Every request carries the project `apikey` header and
//! the session's bearer token.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use super::{Backend, HistoryLog, ItemStore, Store};
use crate::{
    error::{GroceryError, HttpResultExt, Result, StoreResultExt},
    models::{Category, Item, ItemId, ItemStatus, Trip},
};

const ITEMS_TABLE: &str = "items";
const HISTORY_TABLE: &str = "history";

/// Where the remote service lives and the project key used to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEndpoint {
    pub url: String,
    pub api_key: String,
}

/// Row shape written to the `items` table. Absent metadata is sent as
/// `null` so a full update clears it.
#[derive(Serialize)]
struct ItemRow<'a> {
    id: &'a str,
    name: &'a str,
    category: Category,
    aisle: Option<&'a str>,
    status: ItemStatus,
    price: Option<f64>,
    quantity: Option<f64>,
    is_essential: bool,
}

impl<'a> From<&'a Item> for ItemRow<'a> {
    fn from(item: &'a Item) -> Self {
        Self {
            id: item.id.as_str(),
            name: &item.name,
            category: item.category,
            aisle: item.aisle.as_deref(),
            status: item.status,
            price: item.price,
            quantity: item.quantity,
            is_essential: item.is_essential,
        }
    }
}

/// Store backed by the remote service.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    client: Client,
    endpoint: RemoteEndpoint,
    access_token: String,
}

impl RemoteStore {
    pub fn new(endpoint: RemoteEndpoint, access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            access_token: access_token.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{table}",
            self.endpoint.url.trim_end_matches('/')
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.endpoint.api_key)
            .header("Authorization", format!("Bearer {}", self.access_token))
    }

    /// Sends a request and turns transport errors and non-2xx responses into
    /// [`GroceryError::StoreUnavailable`].
    ///
    /// Transport failures surface as [`GroceryError::Http`] first and are
    /// wrapped at the store boundary like every other backend error.
    async fn send(
        &self,
        request: RequestBuilder,
        operation: &'static str,
        target: Option<&str>,
    ) -> Result<Response> {
        debug!("remote: {operation}");
        let resp = self
            .authorize(request)
            .send()
            .await
            .http_context("Request failed")
            .store_context(operation, target)?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(GroceryError::unavailable(
                operation,
                target,
                format!("HTTP {status}: {body}"),
            ));
        }
        Ok(resp)
    }

    /// Decodes a JSON response body.
    async fn decode<T: DeserializeOwned>(
        resp: Response,
        operation: &'static str,
        target: Option<&str>,
    ) -> Result<T> {
        resp.json()
            .await
            .http_context("Failed to decode response")
            .store_context(operation, target)
    }
}

#[async_trait]
impl ItemStore for RemoteStore {
    async fn add_item(&self, item: &Item) -> Result<()> {
        let request = self
            .client
            .post(self.table_url(ITEMS_TABLE))
            .json(&[ItemRow::from(item)]);
        self.send(request, "add item", Some(item.id.as_str())).await?;
        Ok(())
    }

    async fn update_item(&self, item: &Item) -> Result<()> {
        let target = Some(item.id.as_str());
        let request = self
            .client
            .patch(self.table_url(ITEMS_TABLE))
            .query(&[("id", format!("eq.{}", item.id))])
            .header("Prefer", "return=representation")
            .json(&ItemRow::from(item));
        let resp = self.send(request, "update item", target).await?;

        let updated: Vec<serde_json::Value> = Self::decode(resp, "update item", target).await?;
        if updated.is_empty() {
            return Err(GroceryError::ItemNotFound {
                id: item.id.to_string(),
            });
        }
        Ok(())
    }

    async fn delete_item(&self, id: &ItemId) -> Result<()> {
        let request = self
            .client
            .delete(self.table_url(ITEMS_TABLE))
            .query(&[("id", format!("eq.{id}"))]);
        self.send(request, "delete item", Some(id.as_str())).await?;
        Ok(())
    }

    async fn list_items(&self) -> Result<Vec<Item>> {
        let request = self
            .client
            .get(self.table_url(ITEMS_TABLE))
            .query(&[("select", "*")]);
        let resp = self.send(request, "list items", None).await?;
        Self::decode(resp, "list items", None).await
    }

    async fn get_item(&self, id: &ItemId) -> Result<Option<Item>> {
        let target = Some(id.as_str());
        let request = self
            .client
            .get(self.table_url(ITEMS_TABLE))
            .query(&[("id", format!("eq.{id}")), ("select", "*".to_string())]);
        let resp = self.send(request, "get item", target).await?;
        let items: Vec<Item> = Self::decode(resp, "get item", target).await?;
        Ok(items.into_iter().next())
    }
}

#[async_trait]
impl HistoryLog for RemoteStore {
    async fn append_trip(&self, trip: &Trip) -> Result<()> {
        let request = self
            .client
            .post(self.table_url(HISTORY_TABLE))
            .json(&[trip]);
        self.send(request, "append trip", Some(trip.id.as_str()))
            .await?;
        Ok(())
    }

    async fn list_trips(&self) -> Result<Vec<Trip>> {
        let request = self
            .client
            .get(self.table_url(HISTORY_TABLE))
            .query(&[("select", "*"), ("order", "date.desc")]);
        let resp = self.send(request, "list trips", None).await?;
        let mut trips: Vec<Trip> = Self::decode(resp, "list trips", None).await?;

        // Server ordering compares the stored text; re-sort on the parsed timestamp.
        trips.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(trips)
    }

    async fn clear_trips(&self) -> Result<()> {
        let request = self
            .client
            .delete(self.table_url(HISTORY_TABLE))
            .query(&[("id", "not.is.null")]);
        self.send(request, "clear trips", None).await?;
        Ok(())
    }
}

#[async_trait]
impl Store for RemoteStore {
    fn backend(&self) -> Backend {
        Backend::Remote
    }
}
