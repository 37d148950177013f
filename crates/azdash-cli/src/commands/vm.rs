use std::io::{self, Write};

use clap::{Args, ValueEnum};

use azdash_api::ResourceGateway;
use azdash_core::error::DashboardError;
use azdash_core::model::{ResourceKind, VmAction};

use crate::context::Context;

#[derive(Clone, Copy, ValueEnum)]
pub enum VmCommand {
    Start,
    Stop,
    Restart,
}

impl From<VmCommand> for VmAction {
    fn from(command: VmCommand) -> Self {
        match command {
            VmCommand::Start => VmAction::Start,
            VmCommand::Stop => VmAction::Stop,
            VmCommand::Restart => VmAction::Restart,
        }
    }
}

#[derive(Args)]
pub struct VmArgs {
    pub action: VmCommand,
    /// Virtual machine name
    pub name: String,
    /// Resource group that owns the VM
    #[arg(short = 'g', long)]
    pub resource_group: String,
}

pub async fn execute(ctx: &Context, args: VmArgs) -> anyhow::Result<()> {
    let gateway = ctx.gateway()?;
    run(gateway.as_ref(), args, &mut io::stdout()).await
}

/// Sends the action, then re-fetches and prints the VM's new status.
pub async fn run(
    gateway: &dyn ResourceGateway,
    args: VmArgs,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let action = VmAction::from(args.action);

    writeln!(out, "Sending {action} to {}...", args.name)?;
    gateway
        .perform_action(action, &args.name, &args.resource_group)
        .await?;
    writeln!(out, "VM {} successfully", action.past_tense())?;

    let snapshot = gateway.fetch_snapshot().await?;
    let vm = snapshot
        .find_vm(&args.name)
        .ok_or_else(|| DashboardError::ResourceNotFound {
            kind: ResourceKind::VirtualMachine,
            name: args.name.clone(),
        })?;
    writeln!(out, "{:<20} {}", "Status", vm.power_state)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use crate::commands::stub::Backend;

    fn args(action: VmCommand, name: &str) -> VmArgs {
        VmArgs {
            action,
            name: name.into(),
            resource_group: "rg-prod".into(),
        }
    }

    #[tokio::test]
    async fn start_then_prints_refetched_status() {
        let backend = Backend::new();
        let gateway = backend.spawn().await;
        let mut out = Vec::new();
        run(&gateway, args(VmCommand::Start, "db-01"), &mut out)
            .await
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("VM started successfully"));
        assert!(out.contains(&format!("{:<20} running", "Status")));
        assert_eq!(
            *backend.actions.lock().await,
            vec![("db-01".to_string(), "start".to_string())]
        );
    }

    #[tokio::test]
    async fn stop_reports_stopped() {
        let gateway = Backend::new().spawn().await;
        let mut out = Vec::new();
        run(&gateway, args(VmCommand::Stop, "web-01"), &mut out)
            .await
            .unwrap();
        assert!(String::from_utf8(out).unwrap().contains(&format!("{:<20} stopped", "Status")));
    }

    #[tokio::test]
    async fn rejected_action_skips_refetch_output() {
        let backend = Backend {
            action_status: StatusCode::INTERNAL_SERVER_ERROR,
            ..Backend::new()
        };
        let gateway = backend.spawn().await;
        let mut out = Vec::new();
        let err = run(&gateway, args(VmCommand::Restart, "web-01"), &mut out)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to restart VM");
        let out = String::from_utf8(out).unwrap();
        assert!(!out.contains("successfully"));
        assert!(!out.contains("Status"));
    }

    #[tokio::test]
    async fn vm_missing_after_action_is_resource_not_found() {
        let gateway = Backend::new().spawn().await;
        let mut out = Vec::new();
        let err = run(&gateway, args(VmCommand::Start, "ghost"), &mut out)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<DashboardError>(),
            Some(DashboardError::ResourceNotFound { kind: ResourceKind::VirtualMachine, name }) if name == "ghost"
        ));
        assert!(String::from_utf8(out).unwrap().contains("VM started successfully"));
    }
}
