//! REST helpers for the API-backed views: portfolios, transactions, CSV
//! import, reports, notifications, and admin user management.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with an explicit
//! bearer token. Server-side (SSR): stubs returning `None`/error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade rendering without crashing hydration. Authentication failures are
//! not special-cased here; the session store owns that policy.

#![allow(clippy::unused_async)]

use crate::net::types::{
    ImportReport, NewTransaction, Notification, PortfolioSummary, Transaction, UserProfile,
    ValuationPoint,
};

/// Fetch the portfolio summaries of the signed-in user.
pub async fn fetch_portfolios(access_token: &str) -> Option<Vec<PortfolioSummary>> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/portfolios", access_token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access_token;
        None
    }
}

/// Fetch the aggregated valuation curve over the given range ("1m", "1y", ...).
pub async fn fetch_valuation(access_token: &str, range: &str) -> Option<Vec<ValuationPoint>> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/portfolios/valuation?range={range}");
        get_json(&url, access_token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access_token, range);
        None
    }
}

/// Fetch transactions, optionally restricted to one kind ("buy", "sell", ...).
pub async fn fetch_transactions(
    access_token: &str,
    kind: Option<&str>,
) -> Option<Vec<Transaction>> {
    #[cfg(feature = "hydrate")]
    {
        let url = match kind {
            Some(kind) => format!("/api/transactions?kind={kind}"),
            None => "/api/transactions".to_owned(),
        };
        get_json(&url, access_token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access_token, kind);
        None
    }
}

/// Record a new transaction. Returns the stored row.
pub async fn create_transaction(
    access_token: &str,
    transaction: &NewTransaction,
) -> Option<Transaction> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/transactions")
            .header("Authorization", &format!("Bearer {access_token}"))
            .json(transaction)
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Transaction>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access_token, transaction);
        None
    }
}

/// Upload CSV content for import. Platform detection and row parsing happen
/// server-side; the response summarizes what was done.
///
/// # Errors
///
/// Returns an error string if the upload fails or the server rejects the file.
pub async fn import_csv(access_token: &str, contents: &str) -> Result<ImportReport, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/transactions/import")
            .header("Authorization", &format!("Bearer {access_token}"))
            .header("Content-Type", "text/csv")
            .body(contents.to_owned())
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("import failed: {}", resp.status()));
        }
        resp.json::<ImportReport>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access_token, contents);
        Err("not available on server".to_owned())
    }
}

/// Ask the backend to generate a report. Returns the download URL.
///
/// # Errors
///
/// Returns an error string if generation fails.
pub async fn generate_report(
    access_token: &str,
    kind: &str,
    format: &str,
    year: u16,
) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct ReportRequest<'a> {
            kind: &'a str,
            format: &'a str,
            year: u16,
        }
        #[derive(serde::Deserialize)]
        struct ReportResponse {
            url: String,
        }

        let resp = gloo_net::http::Request::post("/api/reports")
            .header("Authorization", &format!("Bearer {access_token}"))
            .json(&ReportRequest { kind, format, year })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("report generation failed: {}", resp.status()));
        }
        let body: ReportResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.url)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access_token, kind, format, year);
        Err("not available on server".to_owned())
    }
}

/// Fetch notifications, newest first.
pub async fn fetch_notifications(access_token: &str) -> Option<Vec<Notification>> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/notifications", access_token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access_token;
        None
    }
}

/// Mark one notification as read. Returns whether the server accepted it.
pub async fn mark_notification_read(access_token: &str, id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/notifications/{id}/read");
        gloo_net::http::Request::patch(&url)
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await
            .map_or(false, |resp| resp.ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access_token, id);
        false
    }
}

/// Fetch all accounts (admin only).
pub async fn fetch_users(access_token: &str) -> Option<Vec<UserProfile>> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/admin/users", access_token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access_token;
        None
    }
}

/// Change an account's role (admin only). Returns whether the server accepted it.
pub async fn update_user_role(access_token: &str, id: &str, role: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct RoleRequest<'a> {
            role: &'a str,
        }

        let url = format!("/api/admin/users/{id}/role");
        let Ok(req) = gloo_net::http::Request::patch(&url)
            .header("Authorization", &format!("Bearer {access_token}"))
            .json(&RoleRequest { role })
        else {
            return false;
        };
        req.send().await.map_or(false, |resp| resp.ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access_token, id, role);
        false
    }
}

/// Delete an account (admin only). Returns whether the server accepted it.
pub async fn delete_user(access_token: &str, id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/admin/users/{id}");
        gloo_net::http::Request::delete(&url)
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await
            .map_or(false, |resp| resp.ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access_token, id);
        false
    }
}

/// GET `url` with a bearer token and decode the JSON body.
#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str, access_token: &str) -> Option<T> {
    let resp = gloo_net::http::Request::get(url)
        .header("Authorization", &format!("Bearer {access_token}"))
        .send()
        .await
        .ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<T>().await.ok()
}
