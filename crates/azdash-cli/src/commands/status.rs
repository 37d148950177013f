use std::io::{self, Write};

use clap::Args;

use azdash_api::{AuthStatus, ResourceGateway};
use azdash_core::error::DashboardError;

use crate::context::Context;

#[derive(Args)]
pub struct StatusArgs {}

pub async fn execute(ctx: &Context, args: StatusArgs) -> anyhow::Result<()> {
    let gateway = ctx.gateway()?;
    run(gateway.as_ref(), args, &mut io::stdout()).await
}

/// Fails when the backend is not authenticated so the process exits non-zero.
pub async fn run(
    gateway: &dyn ResourceGateway,
    _args: StatusArgs,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    writeln!(out, "Endpoint: {}", gateway.endpoint())?;

    match gateway.check_authentication().await {
        AuthStatus::Authenticated => {
            writeln!(out, "Status:   Connected")?;
            Ok(())
        }
        AuthStatus::Unauthenticated { reason } => {
            writeln!(out, "Status:   Not Authenticated")?;
            Err(DashboardError::Authentication(reason).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::stub::Backend;

    #[tokio::test]
    async fn authenticated_backend_reports_connected() {
        let gateway = Backend::new().spawn().await;
        let mut out = Vec::new();
        run(&gateway, StatusArgs {}, &mut out).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Status:   Connected"));
        assert!(out.contains("127.0.0.1"));
    }

    #[tokio::test]
    async fn unauthenticated_backend_is_an_error() {
        let backend = Backend {
            authenticated: false,
            ..Backend::new()
        };
        let gateway = backend.spawn().await;
        let mut out = Vec::new();
        let err = run(&gateway, StatusArgs {}, &mut out).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<DashboardError>(),
            Some(DashboardError::Authentication(reason)) if reason == "Not authenticated"
        ));
        assert!(String::from_utf8(out).unwrap().contains("Not Authenticated"));
    }
}
