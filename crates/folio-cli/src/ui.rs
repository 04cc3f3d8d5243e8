use std::io;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;

use folio_core::actions::{FolioAction, RuntimeAction, UserAction};
use folio_core::commands::group_commands;
use folio_core::palette::{entry_at_row, palette_rows};
use folio_core::persistence::PreferenceStorage;
use folio_core::reducer::{reduce, FolioEffect};
use folio_core::state::{NavigationTarget, Overlay, PortfolioState, ViewId};
use folio_core::theme::ResolvedMode;
use folio_core::timers::TimerQueue;
use folio_exec::{watch_system_scheme, HostColorScheme, LinkOpenStatus, LinkOpener, LinkOutcome};

use crate::render::{
    detail_area, draw, help_area, hit, palette_layout, sidebar_hit, tab_hit, RenderContext,
    ScreenLayout, SidebarHit, UiPalette,
};
use crate::views::{self, ViewDocument};

const FRAME_POLL: Duration = Duration::from_millis(16);
const SCHEME_POLL: Duration = Duration::from_secs(2);
const STATUS_TTL: Duration = Duration::from_secs(3);
const WHEEL_ROWS: i32 = 3;

struct TuiGuard;

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste,
            crossterm::cursor::Show
        );
    }
}

/// Host-side collaborators the effect executor talks to.
pub struct Host {
    pub storage: Box<dyn PreferenceStorage>,
    pub opener: Box<dyn LinkOpener>,
    pub transition_ms: u64,
}

pub fn run(
    mut state: PortfolioState,
    host: Host,
    start: NavigationTarget,
) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste,
        crossterm::cursor::Hide
    )?;
    let _guard = TuiGuard; // Ensures terminal is restored on exit or panic

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    run_app(&mut terminal, &mut state, host, start).map_err(|e| e.into())
}

/// Owns everything the reducer asks for but cannot do itself: timers, the
/// view transition clock, storage, links, clipboard and colors.
struct Runtime {
    host: Host,
    timers: TimerQueue,
    transition: Option<(ViewId, Instant)>,
    palette: UiPalette,
    status: Option<(String, Instant)>,
    mounted: Option<(ViewId, u16, u16)>,
    schemes: Receiver<HostColorScheme>,
    dirty: bool,
}

impl Runtime {
    fn new(host: Host, state: &PortfolioState) -> Self {
        Self {
            host,
            timers: TimerQueue::default(),
            transition: None,
            palette: UiPalette::from_theme(state.theme.applied()),
            status: None,
            mounted: None,
            schemes: watch_system_scheme(SCHEME_POLL),
            dirty: true,
        }
    }

    fn dispatch(&mut self, state: &mut PortfolioState, action: impl Into<FolioAction>) {
        let effects = reduce(state, action.into());
        self.execute(effects);
    }

    fn execute(&mut self, effects: Vec<FolioEffect>) {
        let now = Instant::now();
        for effect in effects {
            match effect {
                FolioEffect::RequestFrame => self.dirty = true,
                FolioEffect::BeginViewTransition(view) => {
                    let done = now + Duration::from_millis(self.host.transition_ms);
                    self.transition = Some((view, done));
                    // The router dropped the old anchors; mount the new view.
                    self.mounted = None;
                    self.dirty = true;
                }
                FolioEffect::ScheduleTimer { timer, delay_ms } => {
                    self.timers
                        .schedule(timer, Duration::from_millis(delay_ms), now);
                }
                FolioEffect::CancelTimer(timer) => {
                    self.timers.cancel(timer);
                }
                FolioEffect::ApplyTheme(applied) => {
                    self.palette = UiPalette::from_theme(applied);
                    self.dirty = true;
                }
                FolioEffect::PersistPreference(write) => {
                    if let Err(err) = self.host.storage.apply(&write) {
                        tracing::warn!(key = write.key, error = %err, "failed to persist preference");
                    }
                }
                FolioEffect::OpenLink(url) => {
                    let outcome = self.host.opener.open(&url);
                    self.flash(link_status(&outcome), now);
                }
                FolioEffect::CopyToClipboard(text) => {
                    let copied = arboard::Clipboard::new()
                        .and_then(|mut clipboard| clipboard.set_text(text.clone()));
                    match copied {
                        Ok(()) => self.flash(format!("Copied {text}"), now),
                        Err(err) => {
                            tracing::warn!(error = %err, "clipboard unavailable");
                            self.flash(format!("Clipboard unavailable; contact: {text}"), now);
                        }
                    }
                }
            }
        }
    }

    fn flash(&mut self, message: String, now: Instant) {
        self.status = Some((message, now));
        self.dirty = true;
    }

    /// Fires everything that came due since the last pass.
    fn tick(&mut self, state: &mut PortfolioState, now: Instant) {
        for timer in self.timers.drain_due(now) {
            tracing::trace!(timer = timer.as_str(), "timer fired");
            self.dispatch(state, RuntimeAction::TimerFired(timer));
        }

        if let Some((view, done)) = self.transition {
            if now >= done {
                self.transition = None;
                self.dirty = true;
                self.dispatch(state, RuntimeAction::ViewTransitionFinished(view));
            }
        }

        if state.router.scroll.is_animating() {
            self.dispatch(state, RuntimeAction::ScrollTick);
        }

        if let Some((_, shown)) = &self.status {
            if now.duration_since(*shown) >= STATUS_TTL {
                self.status = None;
                self.dirty = true;
            }
        }

        while let Ok(scheme) = self.schemes.try_recv() {
            self.dispatch(state, RuntimeAction::SystemSchemeChanged(resolved_mode(scheme)));
        }
    }

    /// Registers the laid-out view with the router whenever its geometry
    /// changes, and tells an open palette how many result rows fit.
    fn sync_layout(
        &mut self,
        state: &mut PortfolioState,
        area: Rect,
        layout: &ScreenLayout,
        document: &ViewDocument,
    ) {
        let view = state.router.current_view();
        let key = (view, layout.body.width, layout.body.height);
        if self.mounted != Some(key) {
            self.mounted = Some(key);
            self.dispatch(
                state,
                RuntimeAction::ViewMounted {
                    view,
                    anchors: document.anchors.clone(),
                    content_rows: document.content_rows(),
                    viewport_rows: layout.body.height,
                },
            );
            self.dirty = true;
        }

        if let Some(palette) = state.palette() {
            let rows = usize::from(palette_layout(area).results.height).max(1);
            if palette.viewport_rows != rows {
                self.dispatch(state, RuntimeAction::PaletteViewport(rows));
                self.dirty = true;
            }
        }
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        let mut timeout = FRAME_POLL;
        if let Some(deadline) = self.timers.next_deadline() {
            timeout = timeout.min(deadline.saturating_duration_since(now));
        }
        if let Some((_, done)) = self.transition {
            timeout = timeout.min(done.saturating_duration_since(now));
        }
        timeout
    }
}

pub fn resolved_mode(scheme: HostColorScheme) -> ResolvedMode {
    match scheme {
        HostColorScheme::Light => ResolvedMode::Light,
        HostColorScheme::Dark => ResolvedMode::Dark,
    }
}

fn link_status(outcome: &LinkOutcome) -> String {
    let status = match outcome.status {
        LinkOpenStatus::Launched => format!("Opened {}", outcome.url),
        LinkOpenStatus::Simulated => format!("Would open {}", outcome.url),
        LinkOpenStatus::Rejected => format!("Refused to open {}", outcome.url),
        LinkOpenStatus::Failed => format!("Could not open {}", outcome.url),
    };
    match (outcome.status, outcome.logs.last()) {
        (LinkOpenStatus::Rejected | LinkOpenStatus::Failed, Some(reason)) => {
            format!("{status} ({reason})")
        }
        _ => status,
    }
}

enum KeyHandlerResult {
    Continue(Vec<FolioEffect>),
    Exit,
}

fn handle_palette_keys(key: event::KeyEvent, state: &mut PortfolioState) -> KeyHandlerResult {
    let action = match key.code {
        KeyCode::Esc => Some(UserAction::ClosePalette),
        KeyCode::Up => Some(UserAction::PaletteMoveUp),
        KeyCode::Down | KeyCode::Tab => Some(UserAction::PaletteMoveDown),
        KeyCode::Enter => Some(UserAction::PaletteSubmit),
        KeyCode::Backspace => Some(UserAction::PaletteQueryBackspace),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(UserAction::PaletteQueryInput(c))
        }
        _ => None,
    };
    continue_with(state, action)
}

fn handle_overlay_keys(key: event::KeyEvent, state: &mut PortfolioState) -> KeyHandlerResult {
    let action = match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            Some(UserAction::CloseOverlay)
        }
        _ => None,
    };
    continue_with(state, action)
}

fn handle_global_keys(
    key: event::KeyEvent,
    state: &mut PortfolioState,
    page_rows: i32,
) -> KeyHandlerResult {
    let action = match key.code {
        KeyCode::Char('q') => return KeyHandlerResult::Exit,
        KeyCode::Char('/') => Some(UserAction::OpenPalette),
        KeyCode::Char(c @ '1'..='6') => c
            .to_digit(10)
            .and_then(|digit| ViewId::from_index(digit as usize - 1))
            .map(|view| UserAction::Navigate(view.into())),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => Some(UserAction::PrevView),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => Some(UserAction::NextView),
        KeyCode::Char('j') | KeyCode::Down => Some(UserAction::ScrollBy(1)),
        KeyCode::Char('k') | KeyCode::Up => Some(UserAction::ScrollBy(-1)),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(UserAction::ScrollBy(page_rows)),
        KeyCode::PageUp => Some(UserAction::ScrollBy(-page_rows)),
        KeyCode::Char('g') | KeyCode::Home => Some(UserAction::ScrollToTop),
        KeyCode::Char('G') | KeyCode::End => Some(UserAction::ScrollBy(i32::from(u16::MAX))),
        KeyCode::Char('n') => Some(UserAction::SelectNextCard),
        KeyCode::Char('p') => Some(UserAction::SelectPrevCard),
        KeyCode::Enter => Some(UserAction::OpenDetail),
        KeyCode::Char('t') => Some(UserAction::ToggleResolvedMode),
        KeyCode::Char('a') => Some(UserAction::CycleAccent),
        KeyCode::Char('y') => Some(UserAction::CopyContact),
        KeyCode::Char('?') => Some(UserAction::ShowHelp),
        KeyCode::Esc => Some(UserAction::CloseOverlay),
        _ => None,
    };
    continue_with(state, action)
}

fn continue_with(state: &mut PortfolioState, action: Option<UserAction>) -> KeyHandlerResult {
    let effects = match action {
        Some(action) => reduce(state, FolioAction::User(action)),
        None => Vec::new(),
    };
    KeyHandlerResult::Continue(effects)
}

fn handle_key_event(
    key: event::KeyEvent,
    state: &mut PortfolioState,
    page_rows: i32,
) -> KeyHandlerResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return KeyHandlerResult::Exit,
            KeyCode::Char('k') => {
                return continue_with(state, Some(UserAction::TogglePalette));
            }
            _ => {}
        }
    }

    match &state.interaction.overlay {
        Overlay::Palette(_) => handle_palette_keys(key, state),
        Overlay::Detail(_) | Overlay::Help => handle_overlay_keys(key, state),
        Overlay::None => handle_global_keys(key, state, page_rows),
    }
}

/// Entry index under the pointer inside the open palette's results panel.
fn palette_entry_at(state: &PortfolioState, area: Rect, column: u16, row: u16) -> Option<usize> {
    let palette = state.palette()?;
    let results = palette_layout(area).results;
    if !hit(results, column, row) {
        return None;
    }
    let registry = state.command_registry();
    let entries = registry.filter(&palette.query);
    let groups = group_commands(&entries);
    let rows = palette_rows(&groups);
    entry_at_row(&rows, palette.scroll_top, usize::from(row - results.y))
}

fn handle_mouse_event(
    mouse: event::MouseEvent,
    state: &mut PortfolioState,
    area: Rect,
    layout: &ScreenLayout,
    document: &ViewDocument,
) -> Vec<FolioEffect> {
    let (column, row) = (mouse.column, mouse.row);
    let mut actions = Vec::new();

    match &state.interaction.overlay {
        Overlay::Palette(_) => match mouse.kind {
            MouseEventKind::Moved => {
                if let Some(index) = palette_entry_at(state, area, column, row) {
                    actions.push(UserAction::PaletteHover(index));
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = palette_entry_at(state, area, column, row) {
                    actions.push(UserAction::PaletteInvoke(index));
                } else if !hit(palette_layout(area).frame, column, row) {
                    actions.push(UserAction::ClosePalette);
                }
            }
            MouseEventKind::ScrollDown => actions.push(UserAction::PaletteMoveDown),
            MouseEventKind::ScrollUp => actions.push(UserAction::PaletteMoveUp),
            _ => {}
        },
        Overlay::Detail(_) | Overlay::Help => {
            let overlay_area = if matches!(state.interaction.overlay, Overlay::Help) {
                help_area(area)
            } else {
                detail_area(area)
            };
            if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                && !hit(overlay_area, column, row)
            {
                actions.push(UserAction::CloseOverlay);
            }
        }
        Overlay::None => {
            let offset = state.router.scroll.offset;
            let doc_row = layout.document_row(column, row, offset);
            match mouse.kind {
                MouseEventKind::Moved => {
                    let target = doc_row
                        .and_then(|doc_row| document.tooltip_at(doc_row))
                        .map(|spot| spot.target.clone());
                    actions.push(UserAction::HoverTooltip(target));
                }
                MouseEventKind::Down(MouseButton::Left) => {
                    actions.extend(click_target(state, layout, document, column, row, doc_row));
                }
                MouseEventKind::ScrollDown => actions.push(UserAction::ScrollBy(WHEEL_ROWS)),
                MouseEventKind::ScrollUp => actions.push(UserAction::ScrollBy(-WHEEL_ROWS)),
                _ => {}
            }
        }
    }

    let mut effects = Vec::new();
    for action in actions {
        effects.extend(reduce(state, FolioAction::User(action)));
    }
    effects
}

fn click_target(
    state: &PortfolioState,
    layout: &ScreenLayout,
    document: &ViewDocument,
    column: u16,
    row: u16,
    doc_row: Option<u16>,
) -> Vec<UserAction> {
    if let Some(sidebar) = layout.sidebar {
        match sidebar_hit(sidebar, column, row) {
            Some(SidebarHit::View(view)) => return vec![UserAction::Navigate(view.into())],
            Some(SidebarHit::ToggleMode) => return vec![UserAction::ToggleResolvedMode],
            Some(SidebarHit::CycleAccent) => return vec![UserAction::CycleAccent],
            None => {}
        }
    }
    if let Some(view) = layout.tabs.and_then(|tabs| tab_hit(tabs, column, row)) {
        return vec![UserAction::Navigate(view.into())];
    }

    let Some(doc_row) = doc_row else {
        return Vec::new();
    };
    if let Some(target) = document.link_at(doc_row) {
        return vec![UserAction::Navigate(target.clone())];
    }
    if let Some(index) = document.card_at(doc_row) {
        let already_selected = match state.router.current_view() {
            ViewId::Projects => state.selection.project == index,
            ViewId::Experience => state.selection.experience == index,
            _ => false,
        };
        // Second click on a selected card opens it.
        if already_selected {
            return vec![UserAction::OpenDetail];
        }
        return vec![UserAction::SelectCard(index)];
    }
    Vec::new()
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut PortfolioState,
    host: Host,
    start: NavigationTarget,
) -> io::Result<()> {
    let mut runtime = Runtime::new(host, state);
    runtime.dispatch(state, UserAction::Navigate(start));

    loop {
        let now = Instant::now();
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let layout = ScreenLayout::new(area);

        // Mount before ticking so a finished transition sees fresh anchors.
        let document = views::build(
            state.router.current_view(),
            layout.body.width,
            &state.selection,
        );
        runtime.sync_layout(state, area, &layout, &document);
        runtime.tick(state, now);

        if runtime.dirty {
            let ctx = RenderContext {
                state,
                document: &document,
                palette: runtime.palette,
                layout,
                transitioning: runtime.transition.is_some(),
                status: runtime.status.as_ref().map(|(message, _)| message.as_str()),
            };
            terminal.draw(|f| draw(f, &ctx))?;
            runtime.dirty = false;
        }

        if !event::poll(runtime.poll_timeout(now))? {
            continue;
        }
        let page_rows = i32::from(layout.body.height.saturating_sub(2).max(1));
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match handle_key_event(key, state, page_rows) {
                    KeyHandlerResult::Continue(effects) => runtime.execute(effects),
                    KeyHandlerResult::Exit => return Ok(()),
                }
            }
            Event::Mouse(mouse) => {
                let effects = handle_mouse_event(mouse, state, area, &layout, &document);
                runtime.execute(effects);
            }
            Event::Paste(text) => {
                runtime.dispatch(state, UserAction::PaletteQueryPaste(text));
            }
            Event::Resize(_, _) => runtime.dirty = true,
            _ => {}
        }
    }
}
