use crate::state::NavigationTarget;
use crate::state::SectionId;
use crate::state::ViewId;
use crate::theme::ResolvedMode;
use crate::theme::ThemeMode;
use crate::timers::TimerKind;
use crate::tooltip::TooltipTarget;

#[derive(Debug, Clone)]
pub enum FolioAction {
    User(UserAction),
    Runtime(RuntimeAction),
}

impl From<UserAction> for FolioAction {
    fn from(action: UserAction) -> Self {
        Self::User(action)
    }
}

impl From<RuntimeAction> for FolioAction {
    fn from(action: RuntimeAction) -> Self {
        Self::Runtime(action)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    TogglePalette,
    OpenPalette,
    ClosePalette,
    PaletteMoveUp,
    PaletteMoveDown,
    PaletteQueryInput(char),
    PaletteQueryBackspace,
    PaletteQueryPaste(String),
    /// Pointer over the entry at this display index.
    PaletteHover(usize),
    PaletteSubmit,
    /// Click on the entry at this display index.
    PaletteInvoke(usize),

    Navigate(NavigationTarget),
    NextView,
    PrevView,
    ScrollBy(i32),
    ScrollToTop,

    SetMode(ThemeMode),
    ToggleResolvedMode,
    SetAccent(String),
    CycleAccent,

    SelectNextCard,
    SelectPrevCard,
    SelectCard(usize),
    OpenDetail,
    ShowHelp,
    CloseOverlay,

    HoverTooltip(Option<TooltipTarget>),
    CopyContact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeAction {
    SystemSchemeChanged(ResolvedMode),
    TimerFired(TimerKind),
    ViewTransitionFinished(ViewId),
    /// Layout of the current view: anchor rows plus the sizes that bound
    /// scrolling.
    ViewMounted {
        view: ViewId,
        anchors: Vec<(SectionId, u16)>,
        content_rows: u16,
        viewport_rows: u16,
    },
    PaletteViewport(usize),
    ScrollTick,
}
