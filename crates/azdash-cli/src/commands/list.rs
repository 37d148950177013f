use std::io::{self, Write};

use clap::Args;

use azdash_api::ResourceGateway;
use azdash_core::model::ResourceKind;
use azdash_core::theme::MemoryThemeStore;
use azdash_core::view::ViewStateController;

use crate::context::Context;

#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive text search across name and displayed fields
    #[arg(long)]
    pub search: Option<String>,
    /// Resource type (resourcegroup, vm, storage, webapp)
    #[arg(long = "type")]
    pub resource_type: Option<String>,
    /// Exact location, e.g. eastus
    #[arg(long)]
    pub location: Option<String>,
    /// Print inventory counts and the estimated monthly cost
    #[arg(long)]
    pub stats: bool,
}

pub async fn execute(ctx: &Context, args: ListArgs) -> anyhow::Result<()> {
    let gateway = ctx.gateway()?;
    run(gateway.as_ref(), args, &mut io::stdout()).await
}

pub async fn run(
    gateway: &dyn ResourceGateway,
    args: ListArgs,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let snapshot = gateway.fetch_snapshot().await?;
    tracing::info!(resources = snapshot.len(), "Loaded dashboard");

    // Filtering only; nothing here touches the stored theme.
    let mut view = ViewStateController::new(MemoryThemeStore::new());
    view.replace_snapshot(snapshot);
    if let Some(term) = args.search {
        view.set_search_term(term);
    }
    if let Some(tag) = args.resource_type {
        // Aliases such as `rg` map to their tag; anything else is matched literally.
        let tag = match ResourceKind::from_tag(&tag) {
            Some(kind) => kind.tag().to_string(),
            None => {
                tracing::warn!(%tag, "unknown resource type, nothing will match");
                tag
            }
        };
        view.set_resource_type(tag);
    }
    if let Some(location) = args.location {
        view.set_location(location);
    }

    if args.stats {
        let stats = view.stats();
        writeln!(out, "Resource Groups:  {}", stats.resource_groups)?;
        writeln!(out, "Virtual Machines: {}", stats.virtual_machines)?;
        writeln!(out, "Storage Accounts: {}", stats.storage_accounts)?;
        writeln!(out, "Web Apps:         {}", stats.web_apps)?;
        writeln!(out, "Estimated Cost:   {}", stats.cost_display())?;
        writeln!(out)?;
    }

    writeln!(out, "{:<16} {:<30} {:<14} {}", "TYPE", "NAME", "LOCATION", "STATUS")?;
    writeln!(out, "{}", "-".repeat(76))?;
    for card in view.visible_cards() {
        writeln!(
            out,
            "{:<16} {:<30} {:<14} {}",
            card.kind.label(),
            card.name,
            card.location,
            card.status().unwrap_or("-")
        )?;
    }

    let (visible, total) = view.visible_count();
    writeln!(out, "\nShowing {visible} of {total} resources")?;
    Ok(())
}
