use std::sync::Arc;

use azdash_api::gateway::{AuthStatus, ResourceGateway};
use azdash_core::model::VmAction;

use crate::event::{ApiEvent, ApiSink};

/// Auth check followed by the first snapshot fetch.
pub fn spawn_initial_load(
    gateway: Arc<dyn ResourceGateway>,
    sink: ApiSink,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match gateway.check_authentication().await {
            AuthStatus::Authenticated => refresh(gateway.as_ref(), &sink).await,
            AuthStatus::Unauthenticated { reason } => {
                tracing::warn!(%reason, "not authenticated");
                sink.send(ApiEvent::AuthFailed { reason });
            }
        }
    })
}

pub fn spawn_refresh(
    gateway: Arc<dyn ResourceGateway>,
    sink: ApiSink,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move { refresh(gateway.as_ref(), &sink).await })
}

/// Runs one lifecycle command and, only when it succeeds, re-fetches the snapshot.
///
/// Overlapping calls for the same VM are not coordinated: each one runs to
/// completion and triggers its own refresh.
pub fn spawn_action(
    gateway: Arc<dyn ResourceGateway>,
    sink: ApiSink,
    action: VmAction,
    vm_name: String,
    resource_group: String,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match gateway
            .perform_action(action, &vm_name, &resource_group)
            .await
        {
            Ok(()) => {
                sink.send(ApiEvent::ActionSucceeded { action, vm_name });
                refresh(gateway.as_ref(), &sink).await;
            }
            Err(e) => sink.send(ApiEvent::ActionFailed {
                action,
                vm_name,
                reason: e.to_string(),
            }),
        }
    })
}

async fn refresh(gateway: &dyn ResourceGateway, sink: &ApiSink) {
    match gateway.fetch_snapshot().await {
        Ok(snapshot) => sink.send(ApiEvent::SnapshotLoaded(snapshot)),
        Err(e) => sink.send(ApiEvent::SnapshotFailed {
            reason: e.to_string(),
        }),
    }
}
