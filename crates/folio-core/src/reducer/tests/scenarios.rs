use super::*;
use pretty_assertions::assert_eq;

#[test]
fn philosoph_query_leaves_only_philosophy_navigation() {
    let mut state = state();
    run_user(&mut state, UserAction::OpenPalette);
    type_query(&mut state, "philosoph");

    assert_eq!(palette_ids(&state), vec!["nav-philosophy".to_string()]);
    let registry = state.command_registry();
    let entry = registry.get("nav-philosophy").expect("entry");
    assert_eq!(entry.command, Command::Navigate(ViewId::Philosophy));
}

#[test]
fn deep_link_to_core_skills_from_home() {
    let mut state = state();
    assert_eq!(state.router.current_view(), ViewId::Home);
    mount(&mut state, ViewId::Home, &[], 90);
    run_user(&mut state, UserAction::ScrollBy(20));
    assert_eq!(state.router.scroll.offset, 20);

    let effects = run_user(
        &mut state,
        UserAction::Navigate(NavigationTarget::section(ViewId::Skills, "skills-core")),
    );
    assert_eq!(state.router.current_view(), ViewId::Skills);
    assert_eq!(state.router.scroll.offset, 0);
    assert_eq!(
        effects,
        vec![
            FolioEffect::BeginViewTransition(ViewId::Skills),
            FolioEffect::ScheduleTimer {
                timer: TimerKind::SectionSettle,
                delay_ms: 350,
            },
            FolioEffect::RequestFrame,
        ]
    );

    mount(&mut state, ViewId::Skills, &[("skills-languages", 3), ("skills-core", 44)], 110);
    run_runtime(&mut state, RuntimeAction::TimerFired(TimerKind::SectionSettle));
    assert_eq!(state.router.scroll.target, Some(42));
}

#[test]
fn arrow_down_clamps_on_five_results() {
    let mut state = state();
    run_user(&mut state, UserAction::OpenPalette);
    type_query(&mut state, "ro");
    assert_eq!(
        palette_ids(&state),
        vec![
            "nav-projects".to_string(),
            "accent-rose".to_string(),
            "link-github".to_string(),
            "link-linkedin".to_string(),
            "link-cv".to_string(),
        ]
    );

    for _ in 0..3 {
        run_user(&mut state, UserAction::PaletteMoveDown);
    }
    assert_eq!(selected(&state), 3);
    for _ in 0..2 {
        run_user(&mut state, UserAction::PaletteMoveDown);
    }
    assert_eq!(selected(&state), 4);
}

#[test]
fn dark_then_system_with_light_host_resolves_light() {
    let mut state = state();
    run_runtime(&mut state, RuntimeAction::SystemSchemeChanged(ResolvedMode::Light));
    run_user(&mut state, UserAction::SetMode(ThemeMode::Dark));
    assert_eq!(state.theme.resolved_mode(), ResolvedMode::Dark);

    run_user(&mut state, UserAction::SetMode(ThemeMode::System));
    assert_eq!(state.theme.resolved_mode(), ResolvedMode::Light);
}
