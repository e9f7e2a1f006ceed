//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use serde_json::Value;
use shopify_fetch::clients::{HttpError, HttpRequest, HttpResponse, RequestDispatcher};
use shopify_fetch::{AccessToken, AccountTier, ClientConfig, ShopDomain};

/// An in-memory dispatcher that replays scripted responses in order and
/// records every request it is handed.
#[derive(Debug, Default)]
pub struct StubDispatcher {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a 200 response.
    pub fn push_page(&self, headers: HashMap<String, Vec<String>>, body: Value) -> &Self {
        self.push(Ok(HttpResponse::new(200, headers, body)))
    }

    /// Queues an arbitrary outcome.
    pub fn push(&self, outcome: Result<HttpResponse, HttpError>) -> &Self {
        self.responses.lock().unwrap().push_back(outcome);
        self
    }

    /// Returns every request received so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl RequestDispatcher for StubDispatcher {
    async fn perform(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left")
    }
}

/// Headers advertising `cursor` as the next page.
pub fn next_page_headers(cursor: &str) -> HashMap<String, Vec<String>> {
    let mut headers = HashMap::new();
    headers.insert(
        "link".to_string(),
        vec![format!(
            "<https://test-shop.myshopify.com/admin/api/2025-10/orders.json?limit=250&page_info={cursor}>; rel=\"next\""
        )],
    );
    headers
}

/// Headers of a final page: present, but with no next link.
pub fn last_page_headers() -> HashMap<String, Vec<String>> {
    let mut headers = HashMap::new();
    headers.insert(
        "content-type".to_string(),
        vec!["application/json".to_string()],
    );
    headers
}

pub fn config(tier: AccountTier) -> ClientConfig {
    ClientConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .access_token(AccessToken::new("test-token").unwrap())
        .account_tier(tier)
        .build()
        .unwrap()
}
