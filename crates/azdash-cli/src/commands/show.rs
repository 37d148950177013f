use std::io::{self, Write};

use clap::Args;

use azdash_api::ResourceGateway;
use azdash_core::model::ResourceKind;
use azdash_core::theme::MemoryThemeStore;
use azdash_core::view::ViewStateController;

use crate::context::Context;

#[derive(Args)]
pub struct ShowArgs {
    /// Resource type (resourcegroup, vm, storage, webapp)
    pub kind: String,
    /// Resource name
    pub name: String,
}

pub async fn execute(ctx: &Context, args: ShowArgs) -> anyhow::Result<()> {
    let gateway = ctx.gateway()?;
    run(gateway.as_ref(), args, &mut io::stdout()).await
}

pub async fn run(
    gateway: &dyn ResourceGateway,
    args: ShowArgs,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let kind = ResourceKind::from_tag(&args.kind)
        .ok_or_else(|| anyhow::anyhow!("Unknown resource type '{}'", args.kind))?;

    let snapshot = gateway.fetch_snapshot().await?;
    let mut view = ViewStateController::new(MemoryThemeStore::new());
    view.replace_snapshot(snapshot);

    let details = view.resource_details(kind, &args.name)?;
    writeln!(out, "{} ({})", details.title, kind.label())?;

    for section in &details.sections {
        writeln!(out, "\n  {}", section.heading)?;
        for (label, value) in &section.fields {
            if value.is_empty() {
                writeln!(out, "    {label}")?;
            } else {
                writeln!(out, "    {label:<20} {value}")?;
            }
        }
    }

    if kind == ResourceKind::VirtualMachine {
        let availability = |allowed: bool| if allowed { "available" } else { "unavailable" };
        writeln!(out, "\n  Actions")?;
        writeln!(out, "    {:<20} {}", "start", availability(details.can_start))?;
        writeln!(out, "    {:<20} {}", "stop", availability(details.can_stop))?;
        writeln!(out, "    {:<20} {}", "restart", availability(true))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use azdash_core::error::DashboardError;
    use crate::commands::stub::Backend;

    fn args(kind: &str, name: &str) -> ShowArgs {
        ShowArgs {
            kind: kind.into(),
            name: name.into(),
        }
    }

    #[tokio::test]
    async fn vm_details_include_configuration_and_actions() {
        let gateway = Backend::new().spawn().await;
        let mut out = Vec::new();
        run(&gateway, args("vm", "web-01"), &mut out).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("web-01 (Virtual Machines)"));
        assert!(out.contains("Configuration"));
        assert!(out.contains("Standard_B2s"));
        assert!(out.contains(&format!("{:<20} unavailable", "start")));
        assert!(out.contains(&format!("{:<20} available", "stop")));
    }

    #[tokio::test]
    async fn missing_name_is_resource_not_found() {
        let gateway = Backend::new().spawn().await;
        let mut out = Vec::new();
        let err = run(&gateway, args("storage", "web-01"), &mut out)
            .await
            .unwrap_err();

        match err.downcast_ref::<DashboardError>() {
            Some(DashboardError::ResourceNotFound { kind, name }) => {
                assert_eq!(*kind, ResourceKind::StorageAccount);
                assert_eq!(name, "web-01");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn unknown_kind_is_rejected_before_fetching() {
        let gateway = Backend::new().spawn().await;
        let mut out = Vec::new();
        let err = run(&gateway, args("database", "x"), &mut out)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Unknown resource type 'database'"));
    }
}
