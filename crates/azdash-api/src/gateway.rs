use async_trait::async_trait;

use azdash_core::error::DashboardResult;
use azdash_core::model::{InventorySnapshot, VmAction};

/// Outcome of the auth-status probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    Authenticated,
    /// Either the server said no or it could not be reached; `reason` tells which.
    Unauthenticated { reason: String },
}

impl AuthStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

/// All network interaction with the dashboard backend.
///
/// Every call is a single request: no retries, no de-duplication and no
/// cancellation. Overlapping calls are independent.
#[async_trait]
pub trait ResourceGateway: Send + Sync {
    /// Never fails; transport problems become `Unauthenticated`.
    async fn check_authentication(&self) -> AuthStatus;

    /// Fails with `DashboardError::SnapshotLoad`.
    async fn fetch_snapshot(&self) -> DashboardResult<InventorySnapshot>;

    /// Fails with `DashboardError::Action`. Does not refresh the snapshot.
    async fn perform_action(
        &self,
        action: VmAction,
        vm_name: &str,
        resource_group: &str,
    ) -> DashboardResult<()>;

    /// Backend location, for logging and the header.
    fn endpoint(&self) -> &str;
}
