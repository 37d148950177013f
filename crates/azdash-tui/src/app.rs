use crossterm::event::KeyEvent;
use ratatui::prelude::*;

use azdash_core::error::DashboardError;
use azdash_core::notification::NotificationLevel;

use crate::dashboard::{self, AuthIndicator, DashboardAction, DashboardState};
use crate::event::ApiEvent;
use crate::splash;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppScreen {
    Loading,
    /// Initial load failed. Stays up until the user quits.
    Failed { message: String },
    Dashboard,
}

pub struct App {
    pub screen: AppScreen,
    pub dashboard: DashboardState,
    pub should_quit: bool,
}

impl App {
    pub fn new(dashboard: DashboardState) -> Self {
        Self {
            screen: AppScreen::Loading,
            dashboard,
            should_quit: false,
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        match &self.screen {
            AppScreen::Loading => splash::render_loading(&self.dashboard, frame, area),
            AppScreen::Failed { message } => {
                splash::render_error(&self.dashboard, message, frame, area)
            }
            AppScreen::Dashboard => dashboard::render(&self.dashboard, frame, area),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DashboardAction {
        match self.screen {
            AppScreen::Dashboard => {
                dashboard::handle_key(&mut self.dashboard, key, &mut self.should_quit)
            }
            AppScreen::Loading | AppScreen::Failed { .. } => {
                if splash::is_quit_key(key) {
                    self.should_quit = true;
                }
                DashboardAction::None
            }
        }
    }

    pub fn handle_api_event(&mut self, event: ApiEvent) {
        if event.ends_request() {
            self.dashboard.end_request();
        }

        match event {
            ApiEvent::AuthFailed { reason } => {
                self.dashboard.auth = AuthIndicator::NotAuthenticated;
                self.screen = AppScreen::Failed {
                    message: DashboardError::Authentication(reason).to_string(),
                };
            }
            ApiEvent::SnapshotLoaded(snapshot) => {
                self.dashboard.apply_snapshot(snapshot);
                if self.screen == AppScreen::Loading {
                    self.screen = AppScreen::Dashboard;
                }
            }
            ApiEvent::SnapshotFailed { reason } => match self.screen {
                AppScreen::Loading => {
                    self.dashboard.auth = AuthIndicator::Error;
                    self.screen = AppScreen::Failed { message: reason };
                }
                // Keep showing the last snapshot after a failed refresh.
                AppScreen::Dashboard => self.dashboard.notifications.push(
                    NotificationLevel::Error,
                    format!("Failed to refresh dashboard: {reason}"),
                ),
                AppScreen::Failed { .. } => {}
            },
            ApiEvent::ActionSucceeded { action, vm_name } => {
                tracing::info!(%action, vm = %vm_name, "VM action succeeded");
                self.dashboard.notifications.push(
                    NotificationLevel::Success,
                    format!("VM {} successfully", action.past_tense()),
                );
            }
            ApiEvent::ActionFailed {
                action,
                vm_name,
                reason,
            } => {
                tracing::warn!(%action, vm = %vm_name, %reason, "VM action failed");
                self.dashboard
                    .notifications
                    .push(NotificationLevel::Error, reason);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use azdash_core::model::{InventorySnapshot, PowerState, VirtualMachine, VmAction};
    use azdash_core::theme::MemoryThemeStore;
    use azdash_core::view::ViewStateController;
    use std::time::Duration;

    fn app() -> App {
        let view = ViewStateController::new(MemoryThemeStore::new());
        let mut app = App::new(DashboardState::new(view, "http://test".into(), Duration::from_secs(5)));
        app.dashboard.begin_request();
        app
    }

    fn snapshot(state: PowerState) -> InventorySnapshot {
        InventorySnapshot {
            virtual_machines: vec![VirtualMachine {
                name: "vm-a".into(),
                resource_group: "rg1".into(),
                power_state: state,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn initial_snapshot_shows_dashboard() {
        let mut app = app();
        app.handle_api_event(ApiEvent::SnapshotLoaded(snapshot(PowerState::Running)));
        assert_eq!(app.screen, AppScreen::Dashboard);
        assert_eq!(app.dashboard.auth, AuthIndicator::Connected);
        assert_eq!(app.dashboard.in_flight, 0);
    }

    #[test]
    fn auth_failure_is_terminal_error_panel() {
        let mut app = app();
        app.handle_api_event(ApiEvent::AuthFailed {
            reason: "Not authenticated".into(),
        });
        assert_eq!(
            app.screen,
            AppScreen::Failed {
                message: "Authentication failed: Not authenticated".into()
            }
        );
        assert_eq!(app.dashboard.auth, AuthIndicator::NotAuthenticated);
    }

    #[test]
    fn initial_snapshot_failure_shows_error_panel() {
        let mut app = app();
        app.handle_api_event(ApiEvent::SnapshotFailed {
            reason: "Failed to load dashboard".into(),
        });
        assert!(matches!(app.screen, AppScreen::Failed { .. }));
        assert_eq!(app.dashboard.auth, AuthIndicator::Error);
    }

    #[test]
    fn refresh_failure_keeps_last_snapshot() {
        let mut app = app();
        app.handle_api_event(ApiEvent::SnapshotLoaded(snapshot(PowerState::Running)));
        app.dashboard.begin_request();
        app.handle_api_event(ApiEvent::SnapshotFailed {
            reason: "boom".into(),
        });
        assert_eq!(app.screen, AppScreen::Dashboard);
        assert_eq!(app.dashboard.view.visible_count(), (1, 1));
        assert!(app
            .dashboard
            .notifications
            .latest()
            .unwrap()
            .message
            .contains("boom"));
    }

    #[test]
    fn action_success_then_refresh_replaces_snapshot() {
        let mut app = app();
        app.handle_api_event(ApiEvent::SnapshotLoaded(snapshot(PowerState::Stopped)));

        app.dashboard.begin_request();
        app.handle_api_event(ApiEvent::ActionSucceeded {
            action: VmAction::Start,
            vm_name: "vm-a".into(),
        });
        assert_eq!(app.dashboard.in_flight, 1);
        assert_eq!(
            app.dashboard.notifications.latest().unwrap().message,
            "VM started successfully"
        );

        app.handle_api_event(ApiEvent::SnapshotLoaded(snapshot(PowerState::Running)));
        assert_eq!(app.dashboard.in_flight, 0);
        let vm = app.dashboard.view.snapshot().unwrap().find_vm("vm-a").unwrap();
        assert_eq!(vm.power_state, PowerState::Running);
    }

    #[test]
    fn action_failure_leaves_snapshot_untouched() {
        let mut app = app();
        app.handle_api_event(ApiEvent::SnapshotLoaded(snapshot(PowerState::Stopped)));
        let before = app.dashboard.view.snapshot().cloned();

        app.dashboard.begin_request();
        app.handle_api_event(ApiEvent::ActionFailed {
            action: VmAction::Start,
            vm_name: "vm-a".into(),
            reason: "Failed to start VM".into(),
        });
        assert_eq!(app.dashboard.view.snapshot().cloned(), before);
        assert_eq!(app.dashboard.in_flight, 0);
        assert_eq!(
            app.dashboard.notifications.latest().unwrap().message,
            "Failed to start VM"
        );
    }
}
