use std::io::{self, Write};

use clap::Args;

use azdash_core::theme::{ThemePreference, ThemeStore, THEME_KEY};

use crate::context::Context;

#[derive(Args)]
pub struct ThemeArgs {
    /// Switch between light and dark and save the result
    #[arg(long)]
    pub toggle: bool,
}

pub async fn execute(ctx: &Context, args: ThemeArgs) -> anyhow::Result<()> {
    run(ctx, args, &mut io::stdout())
}

/// An unreadable preferences file reads as light; toggling rewrites it.
pub fn run(ctx: &Context, args: ThemeArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut store = ctx.theme_store()?;
    let mut theme = match store.load(THEME_KEY) {
        Ok(value) => ThemePreference::from_stored(value.as_deref()),
        Err(e) => {
            tracing::warn!(error = %e, "could not read theme preference");
            ThemePreference::Light
        }
    };

    if args.toggle {
        theme = theme.toggled();
        store.store(THEME_KEY, theme.as_str())?;
        tracing::info!(%theme, path = %store.path().display(), "Theme saved");
    }

    writeln!(out, "{theme}")?;
    Ok(())
}
