use crate::actions::FolioAction;
use crate::actions::RuntimeAction;
use crate::actions::UserAction;
use crate::commands::display_order;
use crate::commands::group_commands;
use crate::commands::Command;
use crate::content::PORTFOLIO;
use crate::palette::palette_rows;
use crate::palette::PaletteState;
use crate::persistence::PreferenceWrite;
use crate::router::SectionScroll;
use crate::state::DetailTarget;
use crate::state::NavigationTarget;
use crate::state::Overlay;
use crate::state::PortfolioState;
use crate::state::ViewId;
use crate::theme::accent_by_name;
use crate::theme::AppliedTheme;
use crate::theme::ThemeUpdate;
use crate::timers::TimerKind;
use crate::tooltip::TooltipHover;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolioEffect {
    RequestFrame,
    /// Start the entrance transition for a newly current view. The runtime
    /// answers with `RuntimeAction::ViewTransitionFinished`.
    BeginViewTransition(ViewId),
    ScheduleTimer {
        timer: TimerKind,
        delay_ms: u64,
    },
    CancelTimer(TimerKind),
    ApplyTheme(AppliedTheme),
    PersistPreference(PreferenceWrite),
    OpenLink(String),
    CopyToClipboard(String),
}

pub fn reduce(state: &mut PortfolioState, action: FolioAction) -> Vec<FolioEffect> {
    match action {
        FolioAction::User(user) => reduce_user(state, user),
        FolioAction::Runtime(runtime) => reduce_runtime(state, runtime),
    }
}

fn reduce_user(state: &mut PortfolioState, action: UserAction) -> Vec<FolioEffect> {
    match action {
        UserAction::TogglePalette => {
            if state.palette().is_some() {
                close_overlay(state)
            } else {
                open_palette(state)
            }
        }
        UserAction::OpenPalette => {
            if state.palette().is_some() {
                return Vec::new();
            }
            open_palette(state)
        }
        UserAction::ClosePalette => {
            if state.palette().is_none() {
                return Vec::new();
            }
            close_overlay(state)
        }
        UserAction::PaletteMoveUp => {
            update_palette(state, |palette, _count| palette.move_up())
        }
        UserAction::PaletteMoveDown => {
            update_palette(state, |palette, count| palette.move_down(count))
        }
        UserAction::PaletteHover(index) => {
            update_palette(state, |palette, count| palette.hover(index, count))
        }
        UserAction::PaletteQueryInput(ch) => update_palette(state, |palette, _count| {
            palette.push_char(ch);
            true
        }),
        UserAction::PaletteQueryBackspace => update_palette(state, |palette, _count| {
            let before = palette.query.len();
            palette.backspace();
            before != palette.query.len()
        }),
        UserAction::PaletteQueryPaste(text) => update_palette(state, |palette, _count| {
            let before = palette.query.len();
            palette.paste(&text);
            before != palette.query.len()
        }),
        UserAction::PaletteSubmit => {
            let Some(selected) = state.palette().map(|palette| palette.selected) else {
                return Vec::new();
            };
            invoke_palette_entry(state, selected)
        }
        UserAction::PaletteInvoke(index) => invoke_palette_entry(state, index),

        UserAction::Navigate(target) => navigate(state, target),
        UserAction::NextView => {
            let next = state.router.current_view().next();
            navigate(state, NavigationTarget::view(next))
        }
        UserAction::PrevView => {
            let prev = state.router.current_view().prev();
            navigate(state, NavigationTarget::view(prev))
        }
        UserAction::ScrollBy(delta) => {
            let before = state.router.scroll;
            state.router.scroll.scroll_by(delta);
            let mut effects = Vec::new();
            dismiss_tooltip(state, &mut effects);
            if state.router.scroll != before || !effects.is_empty() {
                effects.push(FolioEffect::RequestFrame);
            }
            effects
        }
        UserAction::ScrollToTop => {
            state.router.scroll.reset_to_top();
            let mut effects = Vec::new();
            dismiss_tooltip(state, &mut effects);
            effects.push(FolioEffect::RequestFrame);
            effects
        }

        UserAction::SetMode(mode) => {
            let update = state.theme.set_mode(mode);
            theme_effects(update)
        }
        UserAction::ToggleResolvedMode => {
            let mode = state.theme.resolved_mode().opposite().as_mode();
            let update = state.theme.set_mode(mode);
            theme_effects(update)
        }
        UserAction::SetAccent(name) => set_accent(state, &name),
        UserAction::CycleAccent => {
            let next = state.theme.next_accent();
            let update = state.theme.set_accent(next);
            theme_effects(update)
        }

        UserAction::SelectNextCard => step_card(state, 1),
        UserAction::SelectPrevCard => step_card(state, -1),
        UserAction::SelectCard(index) => {
            let view = state.router.current_view();
            if index >= state.card_count(view) {
                return Vec::new();
            }
            match view {
                ViewId::Projects => state.selection.project = index,
                ViewId::Experience => state.selection.experience = index,
                _ => return Vec::new(),
            }
            vec![FolioEffect::RequestFrame]
        }
        UserAction::OpenDetail => {
            let target = match state.router.current_view() {
                ViewId::Projects if !PORTFOLIO.projects.is_empty() => {
                    DetailTarget::Project(state.selection.project)
                }
                ViewId::Experience if !PORTFOLIO.experience.is_empty() => {
                    DetailTarget::Experience(state.selection.experience)
                }
                _ => return Vec::new(),
            };
            replace_overlay(state, Overlay::Detail(target))
        }
        UserAction::ShowHelp => {
            if matches!(state.interaction.overlay, Overlay::Help) {
                return Vec::new();
            }
            replace_overlay(state, Overlay::Help)
        }
        UserAction::CloseOverlay => {
            if !state.interaction.overlay.is_open() {
                return Vec::new();
            }
            close_overlay(state)
        }

        UserAction::HoverTooltip(target) => {
            if state.interaction.overlay.is_open() {
                return Vec::new();
            }
            match state.interaction.tooltip.hover(target) {
                TooltipHover::Unchanged => Vec::new(),
                TooltipHover::Started => vec![
                    FolioEffect::ScheduleTimer {
                        timer: TimerKind::TooltipShow,
                        delay_ms: state.timing.tooltip_delay_ms,
                    },
                    FolioEffect::RequestFrame,
                ],
                TooltipHover::Left => vec![
                    FolioEffect::CancelTimer(TimerKind::TooltipShow),
                    FolioEffect::RequestFrame,
                ],
            }
        }
        UserAction::CopyContact => {
            vec![FolioEffect::CopyToClipboard(PORTFOLIO.personal.email.to_string())]
        }
    }
}

fn reduce_runtime(state: &mut PortfolioState, action: RuntimeAction) -> Vec<FolioEffect> {
    match action {
        RuntimeAction::SystemSchemeChanged(scheme) => match state.theme.set_system_scheme(scheme) {
            Some(applied) => {
                tracing::debug!(resolved = applied.resolved.as_str(), "host color scheme changed");
                vec![FolioEffect::ApplyTheme(applied), FolioEffect::RequestFrame]
            }
            None => Vec::new(),
        },
        RuntimeAction::TimerFired(TimerKind::PaletteFocus) => match state.palette_mut() {
            Some(palette) if !palette.input_focused => {
                palette.input_focused = true;
                vec![FolioEffect::RequestFrame]
            }
            _ => Vec::new(),
        },
        RuntimeAction::TimerFired(TimerKind::SectionSettle) => settle_section(state),
        RuntimeAction::TimerFired(TimerKind::TooltipShow) => {
            if state.interaction.overlay.is_open() {
                return Vec::new();
            }
            if state.interaction.tooltip.fire() {
                vec![FolioEffect::RequestFrame]
            } else {
                Vec::new()
            }
        }
        RuntimeAction::ViewTransitionFinished(view) => {
            if view != state.router.current_view() {
                return Vec::new();
            }
            let had_pending = state.router.pending_section().is_some();
            let mut effects = settle_section(state);
            if had_pending {
                effects.insert(0, FolioEffect::CancelTimer(TimerKind::SectionSettle));
            }
            effects
        }
        RuntimeAction::ViewMounted {
            view,
            anchors,
            content_rows,
            viewport_rows,
        } => {
            if view != state.router.current_view() {
                return Vec::new();
            }
            state.router.sections.mount(view, anchors);
            state.router.scroll.set_bounds(content_rows, viewport_rows);
            Vec::new()
        }
        RuntimeAction::PaletteViewport(rows) => {
            if let Some(palette) = state.palette_mut() {
                palette.set_viewport_rows(rows);
            }
            update_palette(state, |_palette, _count| false);
            Vec::new()
        }
        RuntimeAction::ScrollTick => {
            if !state.router.scroll.is_animating() {
                return Vec::new();
            }
            state.router.scroll.step();
            let mut effects = Vec::new();
            dismiss_tooltip(state, &mut effects);
            effects.push(FolioEffect::RequestFrame);
            effects
        }
    }
}

fn navigate(state: &mut PortfolioState, target: NavigationTarget) -> Vec<FolioEffect> {
    let outcome = state.router.navigate(target);
    let view = state.router.current_view();
    tracing::debug!(
        from = outcome.previous.as_str(),
        to = view.as_str(),
        section = state.router.pending_section().map(|section| section.as_str()),
        "navigate"
    );

    let mut effects = Vec::new();
    dismiss_tooltip(state, &mut effects);
    if outcome.view_changed {
        effects.push(FolioEffect::BeginViewTransition(view));
    }
    if outcome.has_pending_section {
        effects.push(FolioEffect::ScheduleTimer {
            timer: TimerKind::SectionSettle,
            delay_ms: state.timing.settle_delay_ms,
        });
    } else {
        effects.push(FolioEffect::CancelTimer(TimerKind::SectionSettle));
    }
    effects.push(FolioEffect::RequestFrame);
    effects
}

fn settle_section(state: &mut PortfolioState) -> Vec<FolioEffect> {
    let margin = state.timing.scroll_margin_rows;
    match state.router.settle(margin) {
        SectionScroll::Scrolled { section, row } => {
            tracing::debug!(section = section.as_str(), row, "scrolling to section");
            vec![FolioEffect::RequestFrame]
        }
        SectionScroll::AnchorMissing(section) => {
            let view = state.router.current_view();
            tracing::debug!(
                view = view.as_str(),
                section = section.as_str(),
                mounted = state.router.sections.is_mounted(view),
                "section anchor not found"
            );
            Vec::new()
        }
        SectionScroll::NothingPending => Vec::new(),
    }
}

fn open_palette(state: &mut PortfolioState) -> Vec<FolioEffect> {
    let mut effects = replace_overlay(state, Overlay::Palette(PaletteState::default()));
    effects.insert(
        0,
        FolioEffect::ScheduleTimer {
            timer: TimerKind::PaletteFocus,
            delay_ms: state.timing.focus_delay_ms,
        },
    );
    effects
}

/// Swaps the overlay, tearing down whatever the previous one left pending.
fn replace_overlay(state: &mut PortfolioState, overlay: Overlay) -> Vec<FolioEffect> {
    let mut effects = Vec::new();
    if state.palette().is_some() {
        effects.push(FolioEffect::CancelTimer(TimerKind::PaletteFocus));
    }
    dismiss_tooltip(state, &mut effects);
    state.interaction.overlay = overlay;
    effects.push(FolioEffect::RequestFrame);
    effects
}

fn close_overlay(state: &mut PortfolioState) -> Vec<FolioEffect> {
    replace_overlay(state, Overlay::None)
}

fn dismiss_tooltip(state: &mut PortfolioState, effects: &mut Vec<FolioEffect>) {
    if state.interaction.tooltip.dismiss() {
        effects.push(FolioEffect::CancelTimer(TimerKind::TooltipShow));
    }
}

/// Runs `apply` against the open palette with the current result count,
/// then keeps the selection inside the results and scrolled into view.
fn update_palette(
    state: &mut PortfolioState,
    apply: impl FnOnce(&mut PaletteState, usize) -> bool,
) -> Vec<FolioEffect> {
    let registry = state.command_registry();
    let Some(palette) = state.palette_mut() else {
        return Vec::new();
    };
    let count = registry.filter(&palette.query).len();
    let changed = apply(palette, count);

    // The query may have changed; lay the results out again.
    let entries = registry.filter(&palette.query);
    let groups = group_commands(&entries);
    let rows = palette_rows(&groups);
    palette.clamp(entries.len());
    palette.reveal_selected(&rows);

    if changed {
        vec![FolioEffect::RequestFrame]
    } else {
        Vec::new()
    }
}

fn invoke_palette_entry(state: &mut PortfolioState, index: usize) -> Vec<FolioEffect> {
    let Some(query) = state.palette().map(|palette| palette.query.clone()) else {
        return Vec::new();
    };
    let registry = state.command_registry();
    let entries = registry.filter(&query);
    let groups = group_commands(&entries);
    let Some(entry) = display_order(&groups).get(index).copied() else {
        return Vec::new();
    };
    tracing::debug!(command = entry.id.as_str(), "palette command invoked");
    let command = entry.command.clone();

    let mut effects = close_overlay(state);
    effects.extend(dispatch_command(state, command));
    effects
}

/// Single dispatch point for every palette command variant.
pub fn dispatch_command(state: &mut PortfolioState, command: Command) -> Vec<FolioEffect> {
    match command {
        Command::Navigate(view) => navigate(state, NavigationTarget::view(view)),
        Command::SetMode(mode) => {
            let update = state.theme.set_mode(mode);
            theme_effects(update)
        }
        Command::SetAccent(name) => set_accent(state, &name),
        Command::OpenLink(url) => vec![FolioEffect::OpenLink(url)],
    }
}

fn set_accent(state: &mut PortfolioState, name: &str) -> Vec<FolioEffect> {
    let Some(accent) = accent_by_name(name) else {
        tracing::warn!(accent = name, "ignoring unknown accent");
        return Vec::new();
    };
    let update = state.theme.set_accent(accent);
    theme_effects(update)
}

fn theme_effects(update: ThemeUpdate) -> Vec<FolioEffect> {
    tracing::debug!(
        key = update.persist.key,
        value = update.persist.value.as_str(),
        "theme preference changed"
    );
    vec![
        FolioEffect::ApplyTheme(update.applied),
        FolioEffect::PersistPreference(update.persist),
        FolioEffect::RequestFrame,
    ]
}

fn step_card(state: &mut PortfolioState, delta: isize) -> Vec<FolioEffect> {
    let view = state.router.current_view();
    let count = state.card_count(view);
    if count == 0 {
        return Vec::new();
    }
    let slot = match view {
        ViewId::Projects => &mut state.selection.project,
        ViewId::Experience => &mut state.selection.experience,
        _ => return Vec::new(),
    };
    let next = slot.saturating_add_signed(delta).min(count - 1);
    if next == *slot {
        return Vec::new();
    }
    *slot = next;
    vec![FolioEffect::RequestFrame]
}

#[cfg(test)]
mod tests;
