pub mod details;
pub mod filters;
pub mod header;
pub mod notifications;
pub mod resources;
pub mod stats;

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

use azdash_core::card::ResourceCard;
use azdash_core::details::ResourceDetails;
use azdash_core::model::{InventorySnapshot, ResourceKind, VmAction};
use azdash_core::notification::{NotificationLevel, Notifications};
use azdash_core::view::ViewStateController;

use crate::theme::Palette;
use crate::widgets::choice::ChoiceCycle;
use crate::widgets::input::{InputAction, TextInput};

#[derive(Debug, PartialEq, Eq)]
pub enum DashboardAction {
    None,
    Refresh,
    Lifecycle {
        action: VmAction,
        vm_name: String,
        resource_group: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Resources,
    Search,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthIndicator {
    Checking,
    Connected,
    NotAuthenticated,
    Error,
}

pub struct DashboardState {
    pub view: ViewStateController,
    pub notifications: Notifications,
    pub search: TextInput,
    pub type_choice: ChoiceCycle,
    pub location_choice: ChoiceCycle,
    pub focus: Focus,
    /// Index into the visible cards.
    pub selected: usize,
    pub details: Option<ResourceDetails>,
    pub auth: AuthIndicator,
    pub endpoint: String,
    pub last_refresh: Option<DateTime<Local>>,
    pub in_flight: usize,
    pub tick: usize,
}

impl DashboardState {
    pub fn new(view: ViewStateController, endpoint: String, notification_ttl: Duration) -> Self {
        Self {
            view,
            notifications: Notifications::new(notification_ttl),
            search: TextInput::new(" Search [/] ").with_placeholder("name, size, status..."),
            type_choice: ChoiceCycle::new(
                " Type ",
                ResourceKind::ALL.iter().map(|k| k.tag().to_string()).collect(),
            ),
            location_choice: ChoiceCycle::new(" Location ", Vec::new()),
            focus: Focus::Resources,
            selected: 0,
            details: None,
            auth: AuthIndicator::Checking,
            endpoint,
            last_refresh: None,
            in_flight: 0,
            tick: 0,
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.view.theme())
    }

    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.notifications.prune(Instant::now());
    }

    pub fn begin_request(&mut self) {
        self.in_flight += 1;
    }

    pub fn end_request(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Installs a new snapshot and brings selection, location choices and the
    /// open details panel in line with it.
    pub fn apply_snapshot(&mut self, snapshot: InventorySnapshot) {
        self.view.replace_snapshot(snapshot);
        self.last_refresh = Some(Local::now());
        self.auth = AuthIndicator::Connected;

        self.location_choice.set_options(self.view.locations());

        if let Some(open) = self.details.take() {
            match self.view.resource_details(open.kind, &open.title) {
                Ok(details) => self.details = Some(details),
                Err(e) => self.notifications.push(NotificationLevel::Error, e.to_string()),
            }
        }
        self.clamp_selection();
    }

    pub fn selected_card(&self) -> Option<&ResourceCard> {
        self.view.visible_cards().nth(self.selected)
    }

    fn clamp_selection(&mut self) {
        let (visible, _) = self.view.visible_count();
        if visible == 0 {
            self.selected = 0;
        } else if self.selected >= visible {
            self.selected = visible - 1;
        }
    }

    fn open_details(&mut self) {
        let Some((kind, name)) = self.selected_card().map(|c| (c.kind, c.name.clone())) else {
            return;
        };
        match self.view.resource_details(kind, &name) {
            Ok(details) => self.details = Some(details),
            Err(e) => self.notifications.push(NotificationLevel::Error, e.to_string()),
        }
    }

    /// Lifecycle command for the VM in the details panel, or else the selected card.
    fn request_action(&mut self, action: VmAction) -> DashboardAction {
        let target = match &self.details {
            Some(d) => Some((d.kind, d.title.clone())),
            None => self.selected_card().map(|c| (c.kind, c.name.clone())),
        };
        let Some((kind, name)) = target else {
            return DashboardAction::None;
        };
        if kind != ResourceKind::VirtualMachine {
            self.notifications.push(
                NotificationLevel::Info,
                "Start, stop and restart apply to virtual machines only",
            );
            return DashboardAction::None;
        }

        let Some(vm) = self.view.snapshot().and_then(|s| s.find_vm(&name)) else {
            self.notifications
                .push(NotificationLevel::Error, format!("Resource {name} not found"));
            return DashboardAction::None;
        };
        let allowed = match action {
            VmAction::Start => vm.can_start(),
            VmAction::Stop => vm.can_stop(),
            VmAction::Restart => true,
        };
        if !allowed {
            self.notifications.push(
                NotificationLevel::Info,
                format!("{} is already {}", vm.name, vm.power_state),
            );
            return DashboardAction::None;
        }

        self.notifications.push(
            NotificationLevel::Info,
            format!("Sending {action} to {}...", vm.name),
        );
        DashboardAction::Lifecycle {
            action,
            vm_name: vm.name.clone(),
            resource_group: vm.resource_group.clone(),
        }
    }
}

pub fn render(state: &DashboardState, frame: &mut Frame, area: Rect) {
    let palette = state.palette();
    frame.render_widget(Block::default().style(palette.base()), area);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(area);

    header::render(state, frame, main_chunks[0], &palette);
    stats::render(state, frame, main_chunks[1], &palette);
    filters::render(state, frame, main_chunks[2], &palette);

    if state.details.is_some() {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[3]);
        resources::render(state, frame, content_chunks[0], &palette);
        details::render(state, frame, content_chunks[1], &palette);
    } else {
        resources::render(state, frame, main_chunks[3], &palette);
    }

    notifications::render(state, frame, main_chunks[3], &palette);

    let help_text = match state.focus {
        Focus::Search => " [Enter] Done  [Esc] Done  [Ctrl+U] Clear",
        Focus::Resources if state.details.is_some() => {
            " [Esc] Close  [s] Start  [x] Stop  [R] Restart  [r] Refresh  [d] Theme  [q] Quit"
        }
        Focus::Resources => {
            " [/] Search  [t] Type  [l] Location  [c] Clear  [Enter] Details  [s/x/R] Start/Stop/Restart  [r] Refresh  [d] Theme  [q] Quit"
        }
    };
    let help = Paragraph::new(help_text).style(palette.dim());
    frame.render_widget(help, main_chunks[4]);
}

pub fn handle_key(state: &mut DashboardState, key: KeyEvent, should_quit: &mut bool) -> DashboardAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        *should_quit = true;
        return DashboardAction::None;
    }

    if state.focus == Focus::Search {
        match state.search.handle_key(key) {
            InputAction::Changed => {
                state.view.set_search_term(state.search.content.clone());
                state.clamp_selection();
            }
            InputAction::Submit | InputAction::Cancel => {
                state.focus = Focus::Resources;
                state.search.focused = false;
            }
            InputAction::None => {}
        }
        return DashboardAction::None;
    }

    match key.code {
        KeyCode::Char('q') => *should_quit = true,
        KeyCode::Char('/') => {
            state.focus = Focus::Search;
            state.search.focused = true;
        }
        KeyCode::Char('t') => {
            let next = state.type_choice.next().to_string();
            state.view.set_resource_type(next);
            state.clamp_selection();
        }
        KeyCode::Char('l') => {
            let next = state.location_choice.next().to_string();
            state.view.set_location(next);
            state.clamp_selection();
        }
        KeyCode::Char('c') => {
            state.search.clear();
            state.type_choice.reset();
            state.location_choice.reset();
            state.view.clear_filters();
            state.clamp_selection();
        }
        KeyCode::Char('d') => {
            let theme = state.view.toggle_theme();
            tracing::debug!(%theme, "theme toggled");
        }
        KeyCode::Char('r') => return DashboardAction::Refresh,
        KeyCode::Char('s') => return state.request_action(VmAction::Start),
        KeyCode::Char('x') => return state.request_action(VmAction::Stop),
        KeyCode::Char('R') => return state.request_action(VmAction::Restart),
        KeyCode::Enter => {
            if state.details.is_some() {
                state.details = None;
            } else {
                state.open_details();
            }
        }
        KeyCode::Esc => state.details = None,
        KeyCode::Up | KeyCode::Char('k') => {
            state.selected = state.selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.selected = state.selected.saturating_add(1);
            state.clamp_selection();
        }
        KeyCode::Home => state.selected = 0,
        KeyCode::End => {
            state.selected = usize::MAX;
            state.clamp_selection();
        }
        _ => {}
    }
    DashboardAction::None
}
