pub mod app;
pub mod dashboard;
pub mod event;
pub mod execution;
pub mod splash;
pub mod theme;
pub mod widgets;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use ratatui::Terminal;

use azdash_api::ResourceGateway;
use azdash_core::theme::ThemeStore;
use azdash_core::view::ViewStateController;

use app::App;
use dashboard::{DashboardAction, DashboardState};
use event::{ApiSink, EventHandler, TuiEvent};

pub struct TuiOptions {
    pub gateway: Arc<dyn ResourceGateway>,
    pub store: Box<dyn ThemeStore>,
    pub notification_ttl: Duration,
    pub tick_rate: Duration,
}

/// Launch the TUI. This is the entry point called from the CLI.
pub async fn launch_tui(options: TuiOptions) -> anyhow::Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, options).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    options: TuiOptions,
) -> anyhow::Result<()> {
    let TuiOptions {
        gateway,
        store,
        notification_ttl,
        tick_rate,
    } = options;

    let view = ViewStateController::new(store);
    let endpoint = gateway.endpoint().to_string();
    let mut app = App::new(DashboardState::new(view, endpoint, notification_ttl));
    let mut events = EventHandler::new(tick_rate);
    let sink = events.api_sink();

    app.dashboard.begin_request();
    execution::spawn_initial_load(gateway.clone(), sink.clone());

    loop {
        terminal.draw(|frame| app.render(frame))?;

        if app.should_quit {
            break;
        }

        let Some(event) = events.next().await else {
            break;
        };
        match event {
            TuiEvent::Key(key) => {
                let action = app.handle_key(key);
                dispatch(&mut app, action, &gateway, &sink);
            }
            TuiEvent::Tick => app.dashboard.tick(),
            TuiEvent::Resize(_, _) => {}
            TuiEvent::Api(event) => app.handle_api_event(event),
        }
    }

    Ok(())
}

fn dispatch(
    app: &mut App,
    action: DashboardAction,
    gateway: &Arc<dyn ResourceGateway>,
    sink: &ApiSink,
) {
    match action {
        DashboardAction::None => {}
        DashboardAction::Refresh => {
            app.dashboard.begin_request();
            execution::spawn_refresh(gateway.clone(), sink.clone());
        }
        DashboardAction::Lifecycle {
            action,
            vm_name,
            resource_group,
        } => {
            tracing::info!(%action, vm = %vm_name, rg = %resource_group, "dispatching VM action");
            app.dashboard.begin_request();
            execution::spawn_action(gateway.clone(), sink.clone(), action, vm_name, resource_group);
        }
    }
}
