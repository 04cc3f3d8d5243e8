use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs};
use ratatui::Frame;

use folio_core::commands::group_commands;
use folio_core::content::PORTFOLIO;
use folio_core::palette::{no_results_message, palette_rows, PaletteRow, PaletteState};
use folio_core::state::{DetailTarget, Overlay, PortfolioState, ViewId};
use folio_core::theme::{AppliedTheme, ResolvedMode};

use crate::views::{self, wrap, DocLine, LineKind, ViewDocument};

pub const NARROW_WIDTH: u16 = 80;
const SIDEBAR_WIDTH: u16 = 26;
const SIDEBAR_VIEWS_TOP: u16 = 2;
const SIDEBAR_MODE_ROW: u16 = SIDEBAR_VIEWS_TOP + ViewId::ALL.len() as u16 + 1;
const SIDEBAR_ACCENT_ROW: u16 = SIDEBAR_MODE_ROW + 1;
const TOOLTIP_WIDTH: u16 = 48;

const HELP_KEYS: &[(&str, &str)] = &[
    ("Ctrl+K  /", "Toggle the command palette"),
    ("1-6", "Jump to a view"),
    ("h l  Left Right", "Previous / next view"),
    ("j k  Up Down", "Scroll"),
    ("PgUp PgDn", "Scroll a page"),
    ("g  G", "Top / bottom"),
    ("n p", "Select next / previous card"),
    ("Enter", "Open the selected card"),
    ("t", "Toggle light / dark"),
    ("a", "Cycle accent color"),
    ("y", "Copy contact email"),
    ("Esc", "Close overlay"),
    ("q  Ctrl+C", "Quit"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiPalette {
    pub accent: Color,
    pub accent_soft: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub bg: Color,
    pub selected_bg: Color,
}

impl UiPalette {
    /// Derives every UI color from the accent and the resolved mode.
    pub fn from_theme(theme: AppliedTheme) -> Self {
        let accent = theme.accent.rgb;
        let (fg, muted, bg) = match theme.resolved {
            ResolvedMode::Dark => ([229, 231, 235], [148, 163, 184], [18, 18, 22]),
            ResolvedMode::Light => ([31, 41, 55], [100, 116, 139], [250, 249, 247]),
        };
        Self {
            accent: rgb(accent),
            accent_soft: mix(accent, bg, 0.7),
            fg: rgb(fg),
            muted: rgb(muted),
            border: mix(accent, bg, 0.45),
            bg: rgb(bg),
            selected_bg: mix(accent, bg, 0.25),
        }
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}

fn mix(a: [u8; 3], b: [u8; 3], weight: f32) -> Color {
    let channel = |x: u8, y: u8| {
        (f32::from(x) * weight + f32::from(y) * (1.0 - weight))
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Color::Rgb(channel(a[0], b[0]), channel(a[1], b[1]), channel(a[2], b[2]))
}

/// Screen regions shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub sidebar: Option<Rect>,
    pub tabs: Option<Rect>,
    pub content: Rect,
    pub body: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        let (main, footer) = (rows[0], rows[1]);

        if area.width >= NARROW_WIDTH {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .split(main);
            Self {
                sidebar: Some(cols[0]),
                tabs: None,
                content: cols[1],
                body: bordered_inner(cols[1]),
                footer,
            }
        } else {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(0)])
                .split(main);
            Self {
                sidebar: None,
                tabs: Some(parts[0]),
                content: parts[1],
                body: bordered_inner(parts[1]),
                footer,
            }
        }
    }

    /// Document row under the pointer, given the current scroll offset.
    pub fn document_row(&self, column: u16, row: u16, offset: u16) -> Option<u16> {
        if !hit(self.body, column, row) {
            return None;
        }
        Some(row - self.body.y + offset)
    }
}

fn bordered_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

pub fn hit(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarHit {
    View(ViewId),
    ToggleMode,
    CycleAccent,
}

pub fn sidebar_hit(area: Rect, column: u16, row: u16) -> Option<SidebarHit> {
    let inner = bordered_inner(area);
    if !hit(inner, column, row) {
        return None;
    }
    let offset = row - inner.y;
    if let Some(view) = offset
        .checked_sub(SIDEBAR_VIEWS_TOP)
        .and_then(|idx| ViewId::from_index(usize::from(idx)))
    {
        return Some(SidebarHit::View(view));
    }
    match offset {
        SIDEBAR_MODE_ROW => Some(SidebarHit::ToggleMode),
        SIDEBAR_ACCENT_ROW => Some(SidebarHit::CycleAccent),
        _ => None,
    }
}

fn tab_title(view: ViewId) -> String {
    format!("{} {}", view.index() + 1, view.label())
}

/// Mirrors the `Tabs` widget layout: one cell of padding on each side of a
/// title and a one-cell divider between titles.
pub fn tab_hit(area: Rect, column: u16, row: u16) -> Option<ViewId> {
    if !hit(area, column, row) {
        return None;
    }
    let mut x = area.x + 1;
    for view in ViewId::ALL {
        let width = tab_title(view).chars().count() as u16 + 2;
        if column >= x && column < x + width {
            return Some(view);
        }
        x += width + 1;
    }
    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLayout {
    pub frame: Rect,
    pub input: Rect,
    pub results_frame: Rect,
    pub results: Rect,
}

pub fn palette_layout(area: Rect) -> PaletteLayout {
    let frame = centered_rect(70, 70, area);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(frame);
    PaletteLayout {
        frame,
        input: parts[0],
        results_frame: parts[1],
        results: bordered_inner(parts[1]),
    }
}

pub fn detail_area(area: Rect) -> Rect {
    let width = (area.width / 2 + area.width / 20).max(area.width.min(40));
    Rect::new(
        area.x + area.width - width,
        area.y,
        width,
        area.height.saturating_sub(1),
    )
}

pub fn help_area(area: Rect) -> Rect {
    centered_rect(60, 70, area)
}

pub struct RenderContext<'a> {
    pub state: &'a PortfolioState,
    pub document: &'a ViewDocument,
    pub palette: UiPalette,
    pub layout: ScreenLayout,
    pub transitioning: bool,
    pub status: Option<&'a str>,
}

pub fn draw(f: &mut Frame, ctx: &RenderContext<'_>) {
    let p = ctx.palette;
    f.render_widget(
        Block::default().style(Style::default().bg(p.bg).fg(p.fg)),
        f.area(),
    );

    if let Some(sidebar) = ctx.layout.sidebar {
        render_sidebar(f, sidebar, ctx);
    }
    if let Some(tabs) = ctx.layout.tabs {
        render_tabs(f, tabs, ctx);
    }
    render_content(f, ctx);
    render_tooltip(f, ctx);
    render_footer(f, ctx);

    match &ctx.state.interaction.overlay {
        Overlay::Palette(palette) => render_palette(f, ctx, palette),
        Overlay::Detail(target) => render_detail(f, ctx, *target),
        Overlay::Help => render_help(f, ctx),
        Overlay::None => {}
    }
}

fn render_sidebar(f: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
    let p = ctx.palette;
    let theme = &ctx.state.theme;
    let current = ctx.state.router.current_view();

    let mut lines = vec![
        Line::from(Span::styled(
            PORTFOLIO.personal.name,
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    for view in ViewId::ALL {
        let label = tab_title(view);
        if view == current {
            lines.push(Line::from(Span::styled(
                format!("> {label}"),
                Style::default()
                    .fg(p.accent)
                    .bg(p.selected_bg)
                    .add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!("  {label}"),
                Style::default().fg(p.fg),
            )));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Mode   ", Style::default().fg(p.muted)),
        Span::raw(format!(
            "{} ({})",
            theme.mode().as_str(),
            theme.resolved_mode().as_str()
        )),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Accent ", Style::default().fg(p.muted)),
        Span::styled("■ ", Style::default().fg(p.accent)),
        Span::raw(theme.accent().name),
    ]));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "t mode  a accent",
        Style::default().fg(p.muted),
    )));
    lines.push(Line::from(Span::styled(
        "Ctrl+K commands",
        Style::default().fg(p.muted),
    )));

    let sidebar = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.border)),
    );
    f.render_widget(sidebar, area);
}

fn render_tabs(f: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
    let p = ctx.palette;
    let titles: Vec<Line> = ViewId::ALL
        .iter()
        .map(|view| Line::from(tab_title(*view)))
        .collect();
    let tabs = Tabs::new(titles)
        .select(ctx.state.router.current_view().index())
        .style(Style::default().fg(p.muted))
        .highlight_style(Style::default().fg(p.accent).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(p.border)),
        );
    f.render_widget(tabs, area);
}

fn render_content(f: &mut Frame, ctx: &RenderContext<'_>) {
    let p = ctx.palette;
    let view = ctx.state.router.current_view();
    let scroll = ctx.state.router.scroll;

    let lines: Vec<Line> = ctx
        .document
        .lines
        .iter()
        .map(|line| styled_line(line, p))
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.border))
        .title(Span::styled(
            format!(" {} ", view.label()),
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(
            Line::from(Span::styled(
                format!(" {}/{} ", scroll.offset, scroll.max_offset),
                Style::default().fg(p.muted),
            ))
            .alignment(Alignment::Right),
        );

    let mut paragraph = Paragraph::new(lines).block(block).scroll((scroll.offset, 0));
    if ctx.transitioning {
        paragraph = paragraph.style(Style::default().add_modifier(Modifier::DIM));
    }
    f.render_widget(paragraph, ctx.layout.content);
}

fn styled_line(line: &DocLine, p: UiPalette) -> Line<'_> {
    let style = match line.kind {
        LineKind::Title => Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        LineKind::Subtitle => Style::default().fg(p.fg).add_modifier(Modifier::BOLD),
        LineKind::Heading => Style::default()
            .fg(p.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        LineKind::Body | LineKind::Blank => Style::default().fg(p.fg),
        LineKind::Muted => Style::default().fg(p.muted),
        LineKind::Accent => Style::default().fg(p.accent_soft),
        LineKind::Link => Style::default().fg(p.accent),
        LineKind::Card { selected: true } => Style::default()
            .fg(p.accent)
            .bg(p.selected_bg)
            .add_modifier(Modifier::BOLD),
        LineKind::Card { selected: false } => {
            Style::default().fg(p.fg).add_modifier(Modifier::BOLD)
        }
    };
    Line::from(Span::styled(line.text.as_str(), style))
}

fn render_tooltip(f: &mut Frame, ctx: &RenderContext<'_>) {
    let state = ctx.state;
    let Some(target) = state.interaction.tooltip.visible() else {
        return;
    };
    if target.view != state.router.current_view() {
        return;
    }
    let Some(spot) = ctx.document.tooltip_for(target) else {
        return;
    };
    let body = ctx.layout.body;
    let offset = state.router.scroll.offset;
    if spot.row < offset || spot.row - offset >= body.height {
        return;
    }

    let p = ctx.palette;
    let anchor_y = body.y + (spot.row - offset);
    let width = TOOLTIP_WIDTH.min(body.width);
    let text = wrap(&spot.body, usize::from(width.saturating_sub(2)));
    let height = u16::try_from(text.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(body.height);
    let below = anchor_y + 1;
    let y = if below + height <= body.y + body.height {
        below
    } else {
        anchor_y.saturating_sub(height).max(body.y)
    };
    let x = body.x + (body.width - width).min(4);
    let area = Rect::new(x, y, width, height);

    let lines: Vec<Line> = text.into_iter().map(Line::from).collect();
    let tooltip = Paragraph::new(lines)
        .style(Style::default().bg(p.bg).fg(p.fg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(p.accent))
                .title(Span::styled(
                    format!(" {} ", spot.title),
                    Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
                )),
        );
    f.render_widget(Clear, area);
    f.render_widget(tooltip, area);
}

fn render_footer(f: &mut Frame, ctx: &RenderContext<'_>) {
    let p = ctx.palette;
    let text = match ctx.status {
        Some(status) => Span::styled(status, Style::default().fg(p.accent)),
        None => Span::styled(
            " Ctrl+K palette | 1-6 views | j/k scroll | n/p cards | t mode | a accent | ? help | q quit",
            Style::default().fg(p.muted),
        ),
    };
    f.render_widget(Paragraph::new(Line::from(text)), ctx.layout.footer);
}

fn render_palette(f: &mut Frame, ctx: &RenderContext<'_>, palette: &PaletteState) {
    let p = ctx.palette;
    let layout = palette_layout(f.area());
    f.render_widget(Clear, layout.frame);

    let query_line = if palette.query.is_empty() {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(p.accent)),
            Span::styled("Type a command or search...", Style::default().fg(p.muted)),
        ])
    } else {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(p.accent)),
            Span::styled(palette.query.as_str(), Style::default().fg(p.fg)),
        ])
    };
    let input = Paragraph::new(query_line)
        .style(Style::default().bg(p.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(p.accent))
                .title(Span::styled(
                    " Command palette ",
                    Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
                )),
        );
    f.render_widget(input, layout.input);
    if palette.input_focused {
        let typed = u16::try_from(palette.query.chars().count()).unwrap_or(u16::MAX);
        let max_x = layout.input.x + layout.input.width.saturating_sub(2);
        let x = (layout.input.x + 3).saturating_add(typed).min(max_x);
        f.set_cursor_position((x, layout.input.y + 1));
    }

    let results_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.border))
        .title_bottom(Line::from(Span::styled(
            " Up/Down move | Enter run | Esc close ",
            Style::default().fg(p.muted),
        )));
    f.render_widget(
        results_block.style(Style::default().bg(p.bg)),
        layout.results_frame,
    );

    let registry = ctx.state.command_registry();
    let entries = registry.filter(&palette.query);
    if entries.is_empty() {
        let empty = Paragraph::new(no_results_message(&palette.query))
            .alignment(Alignment::Center)
            .style(Style::default().fg(p.muted));
        f.render_widget(empty, layout.results);
        return;
    }

    let groups = group_commands(&entries);
    let rows = palette_rows(&groups);
    let lines: Vec<Line> = rows
        .iter()
        .skip(palette.scroll_top)
        .take(usize::from(layout.results.height))
        .map(|row| match row {
            PaletteRow::Heading(heading) => Line::from(Span::styled(
                *heading,
                Style::default().fg(p.muted).add_modifier(Modifier::BOLD),
            )),
            PaletteRow::Entry { index, entry } => {
                let selected = *index == palette.selected;
                let base = if selected {
                    Style::default().bg(p.selected_bg)
                } else {
                    Style::default()
                };
                let marker = if selected { "> " } else { "  " };
                let mut spans = vec![
                    Span::styled(marker, base.fg(p.accent)),
                    Span::styled(entry.label.as_str(), base.fg(p.fg)),
                ];
                if let Some(description) = &entry.description {
                    spans.push(Span::styled(
                        format!("  {description}"),
                        base.fg(p.muted),
                    ));
                }
                Line::from(spans)
            }
        })
        .collect();
    f.render_widget(Paragraph::new(lines), layout.results);
}

fn render_detail(f: &mut Frame, ctx: &RenderContext<'_>, target: DetailTarget) {
    let p = ctx.palette;
    let area = detail_area(f.area());
    let document = views::detail(target, area.width.saturating_sub(2));
    let lines: Vec<Line> = document
        .lines
        .iter()
        .map(|line| styled_line(line, p))
        .collect();
    let sheet = Paragraph::new(lines)
        .style(Style::default().bg(p.bg).fg(p.fg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(p.accent))
                .title(Span::styled(
                    " Details ",
                    Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
                ))
                .title_bottom(Line::from(Span::styled(
                    " Esc close ",
                    Style::default().fg(p.muted),
                ))),
        );
    f.render_widget(Clear, area);
    f.render_widget(sheet, area);
}

fn render_help(f: &mut Frame, ctx: &RenderContext<'_>) {
    let p = ctx.palette;
    let area = help_area(f.area());
    let lines: Vec<Line> = HELP_KEYS
        .iter()
        .map(|(keys, description)| {
            Line::from(vec![
                Span::styled(format!("{keys:<18}"), Style::default().fg(p.accent)),
                Span::styled(*description, Style::default().fg(p.fg)),
            ])
        })
        .collect();
    let help = Paragraph::new(lines)
        .style(Style::default().bg(p.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(p.accent))
                .title(" Keys "),
        );
    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
