use pretty_assertions::assert_eq;

pub(super) use super::reduce;
pub(super) use crate::actions::FolioAction;
pub(super) use crate::actions::RuntimeAction;
pub(super) use crate::actions::UserAction;
pub(super) use crate::commands::display_order;
pub(super) use crate::commands::group_commands;
pub(super) use crate::commands::Command;
pub(super) use crate::persistence::MemoryPreferenceStorage;
pub(super) use crate::persistence::PreferenceStorage;
pub(super) use crate::persistence::PreferenceWrite;
pub(super) use crate::reducer::FolioEffect;
pub(super) use crate::state::DetailTarget;
pub(super) use crate::state::NavigationTarget;
pub(super) use crate::state::Overlay;
pub(super) use crate::state::PortfolioState;
pub(super) use crate::state::SectionId;
pub(super) use crate::state::Timing;
pub(super) use crate::state::ViewId;
pub(super) use crate::theme::ResolvedMode;
pub(super) use crate::theme::ThemeDefaults;
pub(super) use crate::theme::ThemeMode;
pub(super) use crate::theme::ThemeStore;
pub(super) use crate::timers::TimerKind;
pub(super) use crate::tooltip::TooltipTarget;

mod scenarios;
mod tooltip_timing;

fn state() -> PortfolioState {
    PortfolioState::new(ThemeStore::default(), Timing::default())
}

fn run_user(state: &mut PortfolioState, action: UserAction) -> Vec<FolioEffect> {
    reduce(state, FolioAction::User(action))
}

fn run_runtime(state: &mut PortfolioState, action: RuntimeAction) -> Vec<FolioEffect> {
    reduce(state, FolioAction::Runtime(action))
}

fn mount(state: &mut PortfolioState, view: ViewId, anchors: &[(&str, u16)], content_rows: u16) {
    run_runtime(
        state,
        RuntimeAction::ViewMounted {
            view,
            anchors: anchors
                .iter()
                .map(|(section, row)| (SectionId::from(*section), *row))
                .collect(),
            content_rows,
            viewport_rows: 30,
        },
    );
}

fn type_query(state: &mut PortfolioState, query: &str) {
    for ch in query.chars() {
        run_user(state, UserAction::PaletteQueryInput(ch));
    }
}

/// Ids of the palette results in display order.
fn palette_ids(state: &PortfolioState) -> Vec<String> {
    let Some(palette) = state.palette() else {
        return Vec::new();
    };
    let registry = state.command_registry();
    let entries = registry.filter(&palette.query);
    let groups = group_commands(&entries);
    display_order(&groups)
        .into_iter()
        .map(|entry| entry.id.clone())
        .collect()
}

fn selected(state: &PortfolioState) -> usize {
    state.palette().map(|palette| palette.selected).unwrap_or(usize::MAX)
}

fn assert_selection_in_range(state: &PortfolioState) {
    let count = palette_ids(state).len();
    if count > 0 {
        assert!(selected(state) < count, "selected {} of {count}", selected(state));
    } else {
        assert_eq!(selected(state), 0);
    }
}

fn schedules(effects: &[FolioEffect], timer: TimerKind) -> bool {
    effects
        .iter()
        .any(|effect| matches!(effect, FolioEffect::ScheduleTimer { timer: t, .. } if *t == timer))
}

fn cancels(effects: &[FolioEffect], timer: TimerKind) -> bool {
    effects.contains(&FolioEffect::CancelTimer(timer))
}
