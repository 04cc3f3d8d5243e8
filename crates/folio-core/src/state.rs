use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::commands::CommandRegistry;
use crate::config::Config;
use crate::content::PORTFOLIO;
use crate::error::FolioError;
use crate::palette::PaletteState;
use crate::router::NavigationRouter;
use crate::theme::ThemeStore;
use crate::tooltip::TooltipState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    Home,
    About,
    Philosophy,
    Experience,
    Projects,
    Skills,
}

impl ViewId {
    pub const ALL: [ViewId; 6] = [
        Self::Home,
        Self::About,
        Self::Philosophy,
        Self::Experience,
        Self::Projects,
        Self::Skills,
    ];

    pub fn next(self) -> Self {
        match self {
            Self::Home => Self::About,
            Self::About => Self::Philosophy,
            Self::Philosophy => Self::Experience,
            Self::Experience => Self::Projects,
            Self::Projects => Self::Skills,
            Self::Skills => Self::Home,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Home => Self::Skills,
            Self::About => Self::Home,
            Self::Philosophy => Self::About,
            Self::Experience => Self::Philosophy,
            Self::Projects => Self::Experience,
            Self::Skills => Self::Projects,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Philosophy => "Philosophy",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Philosophy => "philosophy",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Skills => "skills",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|view| *view == self)
            .unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = FolioError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .find(|view| view.as_str() == needle)
            .copied()
            .ok_or_else(|| FolioError::UnknownView(value.to_string()))
    }
}

/// Anchor name inside a view's rendered output. Only meaningful together
/// with the view that lays it out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(Arc<str>);

impl SectionId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationTarget {
    pub view: ViewId,
    pub section: Option<SectionId>,
}

impl NavigationTarget {
    pub fn view(view: ViewId) -> Self {
        Self {
            view,
            section: None,
        }
    }

    pub fn section(view: ViewId, section: impl Into<SectionId>) -> Self {
        Self {
            view,
            section: Some(section.into()),
        }
    }
}

impl From<ViewId> for NavigationTarget {
    fn from(view: ViewId) -> Self {
        Self::view(view)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTarget {
    Project(usize),
    Experience(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Palette(PaletteState),
    Detail(DetailTarget),
    Help,
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

#[derive(Debug, Clone)]
pub struct Interaction {
    pub overlay: Overlay,
    pub tooltip: TooltipState,
}

#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub project: usize,
    pub experience: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub settle_delay_ms: u64,
    pub focus_delay_ms: u64,
    pub tooltip_delay_ms: u64,
    pub scroll_margin_rows: u16,
}

impl Default for Timing {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Timing {
    pub fn from_config(config: &Config) -> Self {
        Self {
            settle_delay_ms: config.navigation.settle_delay_ms,
            focus_delay_ms: config.palette.focus_delay_ms,
            tooltip_delay_ms: config.tooltip.delay_ms,
            scroll_margin_rows: config.navigation.scroll_margin_rows,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PortfolioState {
    pub router: NavigationRouter,
    pub theme: ThemeStore,
    pub interaction: Interaction,
    pub selection: Selection,
    pub timing: Timing,
}

impl PortfolioState {
    pub fn new(theme: ThemeStore, timing: Timing) -> Self {
        Self {
            router: NavigationRouter::new(ViewId::Home),
            theme,
            interaction: Interaction {
                overlay: Overlay::None,
                tooltip: TooltipState::default(),
            },
            selection: Selection::default(),
            timing,
        }
    }

    pub fn palette(&self) -> Option<&PaletteState> {
        match &self.interaction.overlay {
            Overlay::Palette(palette) => Some(palette),
            _ => None,
        }
    }

    pub fn palette_mut(&mut self) -> Option<&mut PaletteState> {
        match &mut self.interaction.overlay {
            Overlay::Palette(palette) => Some(palette),
            _ => None,
        }
    }

    /// Snapshot of every invocable command for the current theme state.
    pub fn command_registry(&self) -> CommandRegistry {
        CommandRegistry::build(&self.theme, PORTFOLIO.quick_links)
    }

    pub fn card_count(&self, view: ViewId) -> usize {
        match view {
            ViewId::Projects => PORTFOLIO.projects.len(),
            ViewId::Experience => PORTFOLIO.experience.len(),
            _ => 0,
        }
    }
}
