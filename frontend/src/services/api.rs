use gloo::net::http::Request;
use shared::{NewTransaction, TrackerConfig, Transaction};

/// Everything that can go wrong while talking to the expense API.
///
/// All variants are recovered at the UI boundary and turned into a
/// notification; none of them propagate past the component that saw them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Transport failure, a non-2xx status on a read, or a body that
    /// could not be decoded.
    #[error("could not reach the server: {0}")]
    Fetch(String),
    /// The CSRF cookie is missing. Mutating calls are refused before any
    /// network activity.
    #[error("missing security token - refresh the page and sign in again")]
    MissingCredential,
    /// The server rejected a submitted draft. Carries the server's error
    /// payload verbatim for display.
    #[error("the server rejected the transaction: {0}")]
    Validation(String),
    /// A delete came back with something other than 204.
    #[error("could not delete the transaction (HTTP {0})")]
    Delete(u16),
}

/// Client for the transaction API.
///
/// Mutating calls attach the CSRF token and report typed failures; the
/// caller re-fetches the full list after every successful mutation, so
/// rendered state is always server-confirmed.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &TrackerConfig) -> Self {
        ApiClient {
            base_url: config.api_base_url.clone(),
        }
    }

    fn expenses_url(&self) -> String {
        format!("{}/api/expenses/", self.base_url)
    }

    fn expense_url(&self, id: i64) -> String {
        format!("{}/api/expenses/{}/", self.base_url, id)
    }

    /// Fetch the full transaction list.
    pub async fn list(&self) -> Result<Vec<Transaction>, ApiError> {
        let response = Request::get(&self.expenses_url())
            .send()
            .await
            .map_err(|e| ApiError::Fetch(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Fetch(format!("HTTP {}", response.status())));
        }

        response
            .json::<Vec<Transaction>>()
            .await
            .map_err(|e| ApiError::Fetch(format!("unreadable response: {e}")))
    }

    /// Create a transaction from a locally validated draft.
    ///
    /// Without a CSRF token this fails immediately and the network is
    /// never touched.
    pub async fn create(
        &self,
        draft: &NewTransaction,
        csrf_token: Option<String>,
    ) -> Result<Transaction, ApiError> {
        let token = csrf_token.ok_or(ApiError::MissingCredential)?;

        let response = Request::post(&self.expenses_url())
            .header("X-CSRFToken", &token)
            .json(draft)
            .map_err(|e| ApiError::Fetch(format!("could not encode the draft: {e}")))?
            .send()
            .await
            .map_err(|e| ApiError::Fetch(e.to_string()))?;

        if response.ok() {
            response
                .json::<Transaction>()
                .await
                .map_err(|e| ApiError::Fetch(format!("unreadable response: {e}")))
        } else {
            // Field errors arrive as a JSON object; no interpretation here.
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Validation(body))
        }
    }

    /// Delete a transaction by id. 204 is the only success status.
    ///
    /// The same token rule as [`ApiClient::create`] applies. The caller
    /// owns the confirmation gate; by the time this runs the user already
    /// said yes.
    pub async fn remove(&self, id: i64, csrf_token: Option<String>) -> Result<(), ApiError> {
        let token = csrf_token.ok_or(ApiError::MissingCredential)?;

        let response = Request::delete(&self.expense_url(id))
            .header("X-CSRFToken", &token)
            .send()
            .await
            .map_err(|e| ApiError::Fetch(e.to_string()))?;

        if response.status() == 204 {
            Ok(())
        } else {
            Err(ApiError::Delete(response.status()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::TransactionKind;
    use std::future::Future;
    use std::task::{Context, Poll, Waker};

    fn client() -> ApiClient {
        ApiClient::new(&TrackerConfig::default())
    }

    fn draft() -> NewTransaction {
        NewTransaction {
            title: "Coffee".to_string(),
            amount: 3.5,
            date: "2024-03-01".to_string(),
            kind: TransactionKind::Expense,
            category: "Groceries".to_string(),
        }
    }

    #[test]
    fn test_urls_follow_the_api_layout() {
        let client = client();
        assert_eq!(client.expenses_url(), "/api/expenses/");
        assert_eq!(client.expense_url(42), "/api/expenses/42/");

        let remote = ApiClient::new(&TrackerConfig {
            api_base_url: "http://localhost:8000".to_string(),
            ..TrackerConfig::default()
        });
        assert_eq!(remote.expenses_url(), "http://localhost:8000/api/expenses/");
    }

    // The token gate sits in front of every await point, so a call without
    // a token must resolve on the very first poll - proof that no request
    // was issued.
    #[test]
    fn test_create_without_token_never_touches_the_network() {
        let client = client();
        let draft = draft();
        let mut future = Box::pin(client.create(&draft, None));
        let mut context = Context::from_waker(Waker::noop());

        match future.as_mut().poll(&mut context) {
            Poll::Ready(Err(ApiError::MissingCredential)) => {}
            other => panic!("expected an immediate missing-credential error, got {other:?}"),
        }
    }

    #[test]
    fn test_remove_without_token_never_touches_the_network() {
        let client = client();
        let mut future = Box::pin(client.remove(5, None));
        let mut context = Context::from_waker(Waker::noop());

        match future.as_mut().poll(&mut context) {
            Poll::Ready(Err(ApiError::MissingCredential)) => {}
            other => panic!("expected an immediate missing-credential error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_messages_are_user_presentable() {
        assert_eq!(
            ApiError::Delete(500).to_string(),
            "could not delete the transaction (HTTP 500)"
        );
        assert!(ApiError::Fetch("HTTP 502".to_string())
            .to_string()
            .contains("HTTP 502"));
    }
}
