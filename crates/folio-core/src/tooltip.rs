use std::sync::Arc;

use crate::state::ViewId;

/// Something in a rendered view that shows a tooltip after a hover delay.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TooltipTarget {
    pub view: ViewId,
    pub key: Arc<str>,
}

impl TooltipTarget {
    pub fn new(view: ViewId, key: impl Into<Arc<str>>) -> Self {
        Self {
            view,
            key: key.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TooltipState {
    hovered: Option<TooltipTarget>,
    visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipHover {
    /// Same target as before; the pending timer keeps running.
    Unchanged,
    /// A new target; the delay restarts.
    Started,
    /// Pointer left every target.
    Left,
}

impl TooltipState {
    pub fn hovered(&self) -> Option<&TooltipTarget> {
        self.hovered.as_ref()
    }

    pub fn visible(&self) -> Option<&TooltipTarget> {
        if self.visible {
            self.hovered.as_ref()
        } else {
            None
        }
    }

    pub fn hover(&mut self, target: Option<TooltipTarget>) -> TooltipHover {
        if self.hovered == target {
            return TooltipHover::Unchanged;
        }
        self.visible = false;
        self.hovered = target;
        if self.hovered.is_some() {
            TooltipHover::Started
        } else {
            TooltipHover::Left
        }
    }

    /// The delay elapsed. Returns false when nothing is hovered any more.
    pub fn fire(&mut self) -> bool {
        if self.hovered.is_none() {
            return false;
        }
        self.visible = true;
        true
    }

    pub fn dismiss(&mut self) -> bool {
        let had_any = self.hovered.is_some();
        self.hovered = None;
        self.visible = false;
        had_any
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn shows_only_after_fire() {
        let mut tooltip = TooltipState::default();
        let target = TooltipTarget::new(ViewId::Skills, "Rust");

        assert_eq!(tooltip.hover(Some(target.clone())), TooltipHover::Started);
        assert_eq!(tooltip.visible(), None);
        assert!(tooltip.fire());
        assert_eq!(tooltip.visible(), Some(&target));
    }

    #[test]
    fn moving_within_target_does_not_restart() {
        let mut tooltip = TooltipState::default();
        let target = TooltipTarget::new(ViewId::Skills, "Rust");
        tooltip.hover(Some(target.clone()));
        assert_eq!(tooltip.hover(Some(target)), TooltipHover::Unchanged);
    }

    #[test]
    fn switching_target_hides_current_tooltip() {
        let mut tooltip = TooltipState::default();
        tooltip.hover(Some(TooltipTarget::new(ViewId::Skills, "Rust")));
        tooltip.fire();

        assert_eq!(
            tooltip.hover(Some(TooltipTarget::new(ViewId::Skills, "C++"))),
            TooltipHover::Started
        );
        assert_eq!(tooltip.visible(), None);
    }

    #[test]
    fn fire_after_leave_is_ignored() {
        let mut tooltip = TooltipState::default();
        tooltip.hover(Some(TooltipTarget::new(ViewId::Home, "stat-years")));
        assert_eq!(tooltip.hover(None), TooltipHover::Left);
        assert!(!tooltip.fire());
        assert_eq!(tooltip.visible(), None);
    }
}
