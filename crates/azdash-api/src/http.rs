use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

use azdash_core::config::ApiConfig;
use azdash_core::error::{DashboardError, DashboardResult};
use azdash_core::model::{InventorySnapshot, VmAction};

use crate::gateway::{AuthStatus, ResourceGateway};

const AUTH_FAILED: &str = "Authentication failed";
const SNAPSHOT_FAILED: &str = "Failed to load dashboard";

#[derive(Debug, Deserialize)]
struct AuthStatusBody {
    #[serde(default)]
    authenticated: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// reqwest-backed gateway for the dashboard backend.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpGateway {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Uses a caller-built client, e.g. one with proxies disabled for loopback backends.
    pub fn with_client(base_url: &str, client: reqwest::Client) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("Invalid API base URL {base_url}: {e}"))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("API base URL {base_url} cannot carry a path");
        }
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &ApiConfig) -> anyhow::Result<Self> {
        Self::new(&config.base_url)
    }

    /// Appends percent-encoded segments to the base URL.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[async_trait]
impl ResourceGateway for HttpGateway {
    fn endpoint(&self) -> &str {
        self.base_url.as_str()
    }

    async fn check_authentication(&self) -> AuthStatus {
        let url = self.url(&["api", "auth", "status"]);
        tracing::debug!(%url, "checking authentication");

        let resp = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(error = %e, "auth status request failed");
                return AuthStatus::Unauthenticated {
                    reason: e.to_string(),
                };
            }
        };

        match resp.json::<AuthStatusBody>().await {
            Ok(body) if body.authenticated => AuthStatus::Authenticated,
            Ok(body) => AuthStatus::Unauthenticated {
                reason: body.error.unwrap_or_else(|| AUTH_FAILED.to_string()),
            },
            Err(e) => {
                tracing::warn!(error = %e, "auth status body unreadable");
                AuthStatus::Unauthenticated {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn fetch_snapshot(&self) -> DashboardResult<InventorySnapshot> {
        let url = self.url(&["api", "dashboard"]);
        tracing::debug!(%url, "fetching snapshot");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DashboardError::SnapshotLoad(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| DashboardError::SnapshotLoad(e.to_string()))?;

        if !status.is_success() {
            let reason = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| SNAPSHOT_FAILED.to_string());
            tracing::warn!(%status, %reason, "snapshot request rejected");
            return Err(DashboardError::SnapshotLoad(reason));
        }

        let snapshot: InventorySnapshot = serde_json::from_str(&body)
            .map_err(|e| DashboardError::SnapshotLoad(format!("Invalid dashboard data: {e}")))?;
        tracing::info!(resources = snapshot.len(), "snapshot loaded");
        Ok(snapshot)
    }

    async fn perform_action(
        &self,
        action: VmAction,
        vm_name: &str,
        resource_group: &str,
    ) -> DashboardResult<()> {
        let url = self.url(&["api", "resources", "vms", vm_name, action.path_segment()]);
        tracing::info!(%action, vm = vm_name, resource_group, "issuing VM action");

        let resp = self
            .client
            .post(url)
            .json(&serde_json::json!({ "resource_group": resource_group }))
            .send()
            .await
            .map_err(|e| DashboardError::Action {
                action,
                reason: format!("{}: {e}", action.failure_message()),
            })?;

        if !resp.status().is_success() {
            tracing::warn!(%action, vm = vm_name, status = %resp.status(), "VM action rejected");
            return Err(DashboardError::Action {
                action,
                reason: action.failure_message().to_string(),
            });
        }
        Ok(())
    }
}
