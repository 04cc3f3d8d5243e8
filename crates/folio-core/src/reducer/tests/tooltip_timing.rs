use super::*;
use pretty_assertions::assert_eq;

fn skill(name: &str) -> TooltipTarget {
    TooltipTarget::new(ViewId::Skills, name)
}

fn on_skills() -> PortfolioState {
    let mut state = state();
    run_user(&mut state, UserAction::Navigate(ViewId::Skills.into()));
    state
}

#[test]
fn hover_schedules_tooltip_after_delay() {
    let mut state = on_skills();
    let effects = run_user(&mut state, UserAction::HoverTooltip(Some(skill("Rust"))));
    assert_eq!(
        effects[0],
        FolioEffect::ScheduleTimer {
            timer: TimerKind::TooltipShow,
            delay_ms: 500,
        }
    );
    assert_eq!(state.interaction.tooltip.visible(), None);

    run_runtime(&mut state, RuntimeAction::TimerFired(TimerKind::TooltipShow));
    assert_eq!(state.interaction.tooltip.visible(), Some(&skill("Rust")));
}

#[test]
fn leaving_target_cancels_pending_tooltip() {
    let mut state = on_skills();
    run_user(&mut state, UserAction::HoverTooltip(Some(skill("C++"))));

    let effects = run_user(&mut state, UserAction::HoverTooltip(None));
    assert!(cancels(&effects, TimerKind::TooltipShow));

    let effects = run_runtime(&mut state, RuntimeAction::TimerFired(TimerKind::TooltipShow));
    assert_eq!(effects, Vec::new());
    assert_eq!(state.interaction.tooltip.visible(), None);
}

#[test]
fn pointer_motion_inside_target_keeps_timer() {
    let mut state = on_skills();
    run_user(&mut state, UserAction::HoverTooltip(Some(skill("SQL"))));
    let effects = run_user(&mut state, UserAction::HoverTooltip(Some(skill("SQL"))));
    assert_eq!(effects, Vec::new());
}

#[test]
fn navigating_away_dismisses_tooltip() {
    let mut state = on_skills();
    run_user(&mut state, UserAction::HoverTooltip(Some(skill("Dart"))));
    run_runtime(&mut state, RuntimeAction::TimerFired(TimerKind::TooltipShow));

    let effects = run_user(&mut state, UserAction::Navigate(ViewId::Home.into()));
    assert!(cancels(&effects, TimerKind::TooltipShow));
    assert_eq!(state.interaction.tooltip.visible(), None);
    assert_eq!(state.interaction.tooltip.hovered(), None);
}

#[test]
fn opening_palette_dismisses_tooltip_and_blocks_new_ones() {
    let mut state = on_skills();
    run_user(&mut state, UserAction::HoverTooltip(Some(skill("Python"))));

    let effects = run_user(&mut state, UserAction::TogglePalette);
    assert!(cancels(&effects, TimerKind::TooltipShow));

    let effects = run_user(&mut state, UserAction::HoverTooltip(Some(skill("Python"))));
    assert_eq!(effects, Vec::new());
    assert_eq!(state.interaction.tooltip.hovered(), None);
}

fn with_visible_tooltip(name: &str) -> PortfolioState {
    let mut state = on_skills();
    state.router.scroll.set_bounds(120, 20);
    run_user(&mut state, UserAction::HoverTooltip(Some(skill(name))));
    run_runtime(&mut state, RuntimeAction::TimerFired(TimerKind::TooltipShow));
    assert_eq!(state.interaction.tooltip.visible(), Some(&skill(name)));
    state
}

#[test]
fn jumping_to_top_hides_tooltip() {
    let mut state = with_visible_tooltip("Rust");
    run_user(&mut state, UserAction::ScrollBy(10));
    assert_eq!(state.interaction.tooltip.visible(), None);

    run_user(&mut state, UserAction::HoverTooltip(Some(skill("Rust"))));
    run_runtime(&mut state, RuntimeAction::TimerFired(TimerKind::TooltipShow));
    assert_eq!(state.interaction.tooltip.visible(), Some(&skill("Rust")));

    run_user(&mut state, UserAction::ScrollToTop);
    assert_eq!(state.router.scroll.offset, 0);
    assert_eq!(state.interaction.tooltip.visible(), None);
    assert_eq!(state.interaction.tooltip.hovered(), None);
}

#[test]
fn smooth_scroll_frames_hide_tooltip() {
    let mut state = with_visible_tooltip("Go");
    state.router.scroll.smooth_to(30);

    let effects = run_runtime(&mut state, RuntimeAction::ScrollTick);
    assert!(effects.contains(&FolioEffect::RequestFrame));
    assert!(state.router.scroll.offset > 0);
    assert_eq!(state.interaction.tooltip.visible(), None);
}
