//! In-process dashboard backend for command tests.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use azdash_api::HttpGateway;

#[derive(Clone)]
pub struct Backend {
    pub authenticated: bool,
    pub action_status: StatusCode,
    pub snapshot: Arc<Mutex<Value>>,
    pub actions: Arc<Mutex<Vec<(String, String)>>>,
}

impl Backend {
    pub fn new() -> Self {
        Self {
            authenticated: true,
            action_status: StatusCode::OK,
            snapshot: Arc::new(Mutex::new(inventory())),
            actions: Arc::default(),
        }
    }

    pub async fn spawn(&self) -> HttpGateway {
        let router = Router::new()
            .route("/api/auth/status", get(auth_status))
            .route("/api/dashboard", get(dashboard))
            .route("/api/resources/vms/:name/:action", post(vm_action))
            .with_state(self.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
        let addr = listener.local_addr().expect("stub addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        HttpGateway::with_client(&format!("http://{addr}"), client).unwrap()
    }
}

/// One resource group, two VMs in different locations and a storage account.
pub fn inventory() -> Value {
    json!({
        "resource_groups": [
            { "name": "rg-prod", "location": "eastus", "properties": { "provisioning_state": "Succeeded" } }
        ],
        "virtual_machines": [
            {
                "name": "web-01", "resource_group": "rg-prod", "location": "eastus",
                "vm_size": "Standard_B2s", "os_type": "Linux", "power_state": "running"
            },
            {
                "name": "db-01", "resource_group": "rg-prod", "location": "westus",
                "vm_size": "Standard_D4s_v3", "os_type": "Linux", "power_state": "stopped"
            }
        ],
        "storage_accounts": [
            {
                "name": "prodlogs", "resource_group": "rg-prod", "location": "eastus",
                "sku": "Standard_LRS", "kind": "StorageV2", "status": "available"
            }
        ]
    })
}

async fn auth_status(State(backend): State<Backend>) -> Json<Value> {
    if backend.authenticated {
        Json(json!({ "authenticated": true }))
    } else {
        Json(json!({ "authenticated": false, "error": "Not authenticated" }))
    }
}

async fn dashboard(State(backend): State<Backend>) -> Json<Value> {
    Json(backend.snapshot.lock().await.clone())
}

/// Records the call and, when it succeeds, moves the named VM to its new power state.
async fn vm_action(
    State(backend): State<Backend>,
    Path((name, action)): Path<(String, String)>,
) -> StatusCode {
    backend.actions.lock().await.push((name.clone(), action.clone()));
    if !backend.action_status.is_success() {
        return backend.action_status;
    }

    let state = if action == "stop" { "stopped" } else { "running" };
    let mut snapshot = backend.snapshot.lock().await;
    if let Some(vms) = snapshot["virtual_machines"].as_array_mut() {
        for vm in vms.iter_mut().filter(|vm| vm["name"] == name.as_str()) {
            vm["power_state"] = json!(state);
        }
    }
    StatusCode::OK
}
