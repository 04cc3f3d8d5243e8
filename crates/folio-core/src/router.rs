use std::collections::BTreeMap;

use crate::state::NavigationTarget;
use crate::state::SectionId;
use crate::state::ViewId;

/// Row positions of section anchors, registered by each view when it is laid
/// out. A view re-registers on every layout change, replacing its old set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionRegistry {
    anchors: BTreeMap<ViewId, BTreeMap<SectionId, u16>>,
}

impl SectionRegistry {
    pub fn mount(&mut self, view: ViewId, anchors: impl IntoIterator<Item = (SectionId, u16)>) {
        self.anchors.insert(view, anchors.into_iter().collect());
    }

    pub fn unmount(&mut self, view: ViewId) {
        self.anchors.remove(&view);
    }

    pub fn is_mounted(&self, view: ViewId) -> bool {
        self.anchors.contains_key(&view)
    }

    pub fn resolve(&self, view: ViewId, section: &SectionId) -> Option<u16> {
        self.anchors.get(&view)?.get(section).copied()
    }

}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u16,
    pub target: Option<u16>,
    pub max_offset: u16,
}

impl ScrollState {
    pub fn reset_to_top(&mut self) {
        self.offset = 0;
        self.target = None;
    }

    pub fn set_bounds(&mut self, content_rows: u16, viewport_rows: u16) {
        self.max_offset = content_rows.saturating_sub(viewport_rows);
        self.offset = self.offset.min(self.max_offset);
        if let Some(target) = self.target.as_mut() {
            *target = (*target).min(self.max_offset);
        }
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.target = None;
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max_offset));
        self.offset = next as u16;
    }

    pub fn smooth_to(&mut self, row: u16) {
        let row = row.min(self.max_offset);
        self.target = if row == self.offset { None } else { Some(row) };
    }

    /// Advances an in-flight smooth scroll by one frame. Returns true while
    /// still moving.
    pub fn step(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let distance = target.abs_diff(self.offset);
        let stride = distance.div_ceil(3).max(1);
        if target > self.offset {
            self.offset = self.offset.saturating_add(stride).min(target);
        } else {
            self.offset = self.offset.saturating_sub(stride).max(target);
        }
        if self.offset == target {
            self.target = None;
            false
        } else {
            true
        }
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigateOutcome {
    pub previous: ViewId,
    pub view_changed: bool,
    pub has_pending_section: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionScroll {
    Scrolled { section: SectionId, row: u16 },
    AnchorMissing(SectionId),
    NothingPending,
}

#[derive(Debug, Clone)]
pub struct NavigationRouter {
    current: ViewId,
    pending_section: Option<SectionId>,
    pub scroll: ScrollState,
    pub sections: SectionRegistry,
}

impl NavigationRouter {
    pub fn new(initial: ViewId) -> Self {
        Self {
            current: initial,
            pending_section: None,
            scroll: ScrollState::default(),
            sections: SectionRegistry::default(),
        }
    }

    pub fn current_view(&self) -> ViewId {
        self.current
    }

    pub fn pending_section(&self) -> Option<&SectionId> {
        self.pending_section.as_ref()
    }

    /// Last write wins: the view is set unconditionally, the pending section
    /// is replaced (or cleared), and a view change snaps scroll to the top and
    /// drops the old view's anchors.
    pub fn navigate(&mut self, target: impl Into<NavigationTarget>) -> NavigateOutcome {
        let NavigationTarget { view, section } = target.into();
        let previous = self.current;
        self.current = view;
        self.pending_section = section;
        let view_changed = previous != view;
        if view_changed {
            self.scroll.reset_to_top();
            self.sections.unmount(previous);
        }
        NavigateOutcome {
            previous,
            view_changed,
            has_pending_section: self.pending_section.is_some(),
        }
    }

    /// Applies the pending section scroll for the current view. The pending
    /// target is consumed whether or not its anchor exists.
    pub fn settle(&mut self, margin_rows: u16) -> SectionScroll {
        let Some(section) = self.pending_section.take() else {
            return SectionScroll::NothingPending;
        };
        match self.sections.resolve(self.current, &section) {
            Some(row) => {
                self.scroll.smooth_to(row.saturating_sub(margin_rows));
                SectionScroll::Scrolled { section, row }
            }
            None => SectionScroll::AnchorMissing(section),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn mounted_router() -> NavigationRouter {
        let mut router = NavigationRouter::new(ViewId::Home);
        router.sections.mount(
            ViewId::Skills,
            vec![
                (SectionId::from("skills-languages"), 4),
                (SectionId::from("skills-core"), 40),
            ],
        );
        router.scroll.set_bounds(120, 30);
        router
    }

    #[test]
    fn navigate_is_last_write_wins() {
        let mut router = NavigationRouter::new(ViewId::Home);
        for view in [ViewId::Projects, ViewId::About, ViewId::About, ViewId::Skills] {
            router.navigate(view);
            assert_eq!(router.current_view(), view);
        }
    }

    #[test]
    fn view_change_resets_scroll_but_same_view_keeps_it() {
        let mut router = mounted_router();
        router.scroll.scroll_by(12);
        assert_eq!(router.scroll.offset, 12);

        let outcome = router.navigate(ViewId::Home);
        assert!(!outcome.view_changed);
        assert_eq!(router.scroll.offset, 12);

        let outcome = router.navigate(ViewId::Skills);
        assert!(outcome.view_changed);
        assert_eq!(router.scroll.offset, 0);
        assert_eq!(router.scroll.target, None);
    }

    #[test]
    fn bare_navigation_clears_pending_section() {
        let mut router = mounted_router();
        router.navigate(NavigationTarget::section(ViewId::Skills, "skills-core"));
        assert!(router.pending_section().is_some());
        router.navigate(ViewId::Projects);
        assert_eq!(router.pending_section(), None);
    }

    #[test]
    fn settle_scrolls_anchor_below_top_margin() {
        let mut router = mounted_router();
        router.navigate(NavigationTarget::section(ViewId::Skills, "skills-core"));

        let outcome = router.settle(2);
        assert_eq!(
            outcome,
            SectionScroll::Scrolled {
                section: SectionId::from("skills-core"),
                row: 40,
            }
        );
        assert_eq!(router.scroll.target, Some(38));
        assert_eq!(router.pending_section(), None);
        assert_eq!(router.settle(2), SectionScroll::NothingPending);
    }

    #[test]
    fn missing_anchor_is_consumed_without_scrolling() {
        let mut router = mounted_router();
        router.navigate(NavigationTarget::section(ViewId::Skills, "skills-nope"));

        assert_eq!(
            router.settle(2),
            SectionScroll::AnchorMissing(SectionId::from("skills-nope"))
        );
        assert_eq!(router.scroll.target, None);
        assert_eq!(router.pending_section(), None);
    }

    #[test]
    fn smooth_scroll_converges_and_clamps() {
        let mut scroll = ScrollState::default();
        scroll.set_bounds(50, 20);
        scroll.smooth_to(100);
        assert_eq!(scroll.target, Some(30));

        let mut frames = 0;
        while scroll.step() {
            frames += 1;
            assert!(frames < 30, "smooth scroll did not converge");
        }
        assert_eq!(scroll.offset, 30);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn manual_scroll_cancels_animation() {
        let mut scroll = ScrollState::default();
        scroll.set_bounds(100, 10);
        scroll.smooth_to(40);
        scroll.scroll_by(-5);
        assert_eq!(scroll.target, None);
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn remount_replaces_anchor_rows() {
        let mut registry = SectionRegistry::default();
        registry.mount(ViewId::Skills, vec![(SectionId::from("skills-core"), 40)]);
        registry.mount(ViewId::Skills, vec![(SectionId::from("skills-core"), 52)]);
        assert_eq!(registry.resolve(ViewId::Skills, &SectionId::from("skills-core")), Some(52));
        registry.unmount(ViewId::Skills);
        assert!(!registry.is_mounted(ViewId::Skills));
    }

    #[test]
    fn leaving_a_view_forgets_its_anchors() {
        let mut router = mounted_router();
        router.navigate(ViewId::Skills);
        assert!(router.sections.is_mounted(ViewId::Skills));

        router.navigate(ViewId::About);
        assert!(!router.sections.is_mounted(ViewId::Skills));

        router.navigate(NavigationTarget::section(ViewId::Skills, "skills-core"));
        assert_eq!(
            router.settle(2),
            SectionScroll::AnchorMissing(SectionId::from("skills-core"))
        );
    }
}
