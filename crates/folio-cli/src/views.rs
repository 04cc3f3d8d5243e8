use folio_core::content::Experience;
use folio_core::content::Project;
use folio_core::content::Stat;
use folio_core::content::PORTFOLIO;
use folio_core::content::SECTION_ABOUT_INTERESTS;
use folio_core::content::SECTION_PHILOSOPHY_JOURNEY;
use folio_core::content::SECTION_PHILOSOPHY_PRINCIPLES;
use folio_core::content::SECTION_PROJECTS_PERSONAL_CRAFT;
use folio_core::content::SECTION_SKILLS_CERTIFICATIONS;
use folio_core::content::SECTION_SKILLS_CORE;
use folio_core::content::SECTION_SKILLS_EDUCATION;
use folio_core::content::SECTION_SKILLS_FRAMEWORKS;
use folio_core::content::SECTION_SKILLS_LANGUAGES;
use folio_core::state::DetailTarget;
use folio_core::state::NavigationTarget;
use folio_core::state::SectionId;
use folio_core::state::Selection;
use folio_core::state::ViewId;
use folio_core::tooltip::TooltipTarget;

const MIN_WIDTH: u16 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title,
    Subtitle,
    Heading,
    Body,
    Muted,
    Accent,
    Link,
    Card { selected: bool },
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLine {
    pub text: String,
    pub kind: LineKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipSpot {
    pub row: u16,
    pub target: TooltipTarget,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpot {
    pub row: u16,
    pub target: NavigationTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSpot {
    pub index: usize,
    pub first_row: u16,
    pub last_row: u16,
}

/// A laid-out view: every row is final, so anchor and hit-test rows match
/// what ends up on screen.
#[derive(Debug, Clone, Default)]
pub struct ViewDocument {
    pub lines: Vec<DocLine>,
    pub anchors: Vec<(SectionId, u16)>,
    pub tooltips: Vec<TooltipSpot>,
    pub links: Vec<LinkSpot>,
    pub cards: Vec<CardSpot>,
}

impl ViewDocument {
    pub fn content_rows(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    pub fn tooltip_at(&self, row: u16) -> Option<&TooltipSpot> {
        self.tooltips.iter().find(|spot| spot.row == row)
    }

    pub fn tooltip_for(&self, target: &TooltipTarget) -> Option<&TooltipSpot> {
        self.tooltips.iter().find(|spot| &spot.target == target)
    }

    pub fn link_at(&self, row: u16) -> Option<&NavigationTarget> {
        self.links
            .iter()
            .find(|spot| spot.row == row)
            .map(|spot| &spot.target)
    }

    pub fn card_at(&self, row: u16) -> Option<usize> {
        self.cards
            .iter()
            .find(|card| (card.first_row..=card.last_row).contains(&row))
            .map(|card| card.index)
    }
}

pub fn build(view: ViewId, width: u16, selection: &Selection) -> ViewDocument {
    let mut doc = DocBuilder::new(width);
    match view {
        ViewId::Home => home(&mut doc),
        ViewId::About => about(&mut doc),
        ViewId::Philosophy => philosophy(&mut doc),
        ViewId::Experience => experience(&mut doc, selection.experience),
        ViewId::Projects => projects(&mut doc, selection.project),
        ViewId::Skills => skills(&mut doc),
    }
    doc.finish()
}

pub fn detail(target: DetailTarget, width: u16) -> ViewDocument {
    let mut doc = DocBuilder::new(width);
    match target {
        DetailTarget::Project(index) => match PORTFOLIO.projects.get(index) {
            Some(project) => project_detail(&mut doc, project),
            None => doc.push(LineKind::Muted, "Nothing selected"),
        },
        DetailTarget::Experience(index) => match PORTFOLIO.experience.get(index) {
            Some(experience) => experience_detail(&mut doc, experience),
            None => doc.push(LineKind::Muted, "Nothing selected"),
        },
    }
    doc.finish()
}

/// Where clicking a stat leads. The CGPA stat points at the education
/// block rather than the top of the skills view.
pub fn stat_target(stat: &Stat) -> NavigationTarget {
    if stat.key == "stat-cgpa" {
        NavigationTarget::section(stat.action_view, SECTION_SKILLS_EDUCATION)
    } else {
        NavigationTarget::view(stat.action_view)
    }
}

fn home(doc: &mut DocBuilder) {
    let personal = &PORTFOLIO.personal;
    doc.push(LineKind::Title, personal.name);
    doc.push(LineKind::Subtitle, personal.role);
    doc.push(LineKind::Muted, personal.location);
    doc.blank();
    for tagline in personal.taglines {
        doc.bullet(LineKind::Accent, tagline);
    }
    doc.blank();
    doc.wrapped(LineKind::Body, personal.about, 0);

    doc.heading("At a glance");
    for stat in PORTFOLIO.stats {
        let row = doc.row();
        doc.push(
            LineKind::Link,
            format!("{:>9}  {:<14} {} >", stat.value, stat.caption, stat.action_label),
        );
        doc.doc.tooltips.push(TooltipSpot {
            row,
            target: TooltipTarget::new(ViewId::Home, stat.key),
            title: stat.title.to_string(),
            body: format!("{} ({})", stat.description, stat.meta),
        });
        doc.doc.links.push(LinkSpot {
            row,
            target: stat_target(stat),
        });
    }

    doc.heading("Core expertise");
    for core in PORTFOLIO.skills.core {
        let row = doc.row();
        doc.push(LineKind::Body, format!("  {}", core.name));
        doc.doc.tooltips.push(TooltipSpot {
            row,
            target: TooltipTarget::new(ViewId::Home, core.name),
            title: core.name.to_string(),
            body: core.description.to_string(),
        });
    }
    doc.link(
        "  View all >",
        NavigationTarget::section(ViewId::Skills, SECTION_SKILLS_CORE),
    );

    doc.heading("Personal craft");
    for project in PORTFOLIO.projects.iter().take(3) {
        doc.link(
            &format!("  {} [{}]", project.title, project.category),
            NavigationTarget::view(ViewId::Projects),
        );
    }
    doc.link(
        "  View all >",
        NavigationTarget::section(ViewId::Projects, SECTION_PROJECTS_PERSONAL_CRAFT),
    );

    doc.heading("Quick links");
    for link in PORTFOLIO.quick_links {
        doc.push(LineKind::Body, format!("  {:<16} {}", link.label, link.url));
    }
    doc.push(LineKind::Muted, "  Ctrl+K opens them from anywhere");
}

fn about(doc: &mut DocBuilder) {
    doc.push(LineKind::Title, "About");
    doc.blank();
    doc.wrapped(LineKind::Body, PORTFOLIO.personal.about, 0);

    doc.heading("The journey");
    for (idx, chapter) in PORTFOLIO.journey.iter().enumerate() {
        if idx > 0 {
            doc.blank();
        }
        doc.push(LineKind::Subtitle, chapter.title);
        doc.push(LineKind::Muted, chapter.period);
        doc.wrapped(LineKind::Body, chapter.description, 2);
    }

    doc.section_heading(SECTION_ABOUT_INTERESTS, "Beyond code");
    for interest in PORTFOLIO.interests {
        doc.bullet(LineKind::Accent, interest.name);
        doc.wrapped(LineKind::Body, interest.description, 2);
    }

    doc.heading("Research publications");
    for (idx, publication) in PORTFOLIO.publications.iter().enumerate() {
        if idx > 0 {
            doc.blank();
        }
        doc.wrapped(LineKind::Subtitle, publication.title, 2);
        doc.wrapped(LineKind::Muted, publication.authors, 2);
        doc.wrapped(
            LineKind::Accent,
            &format!(
                "{} | {} | {}",
                publication.journal, publication.volume, publication.year
            ),
            2,
        );
        if let Some(url) = publication.url() {
            doc.wrapped(LineKind::Muted, &url, 2);
        }
    }

    doc.heading("Security research (Null Byte)");
    doc.wrapped(
        LineKind::Body,
        "Published as H4ck3R_777, with the second most-read article on the platform during 2018-2020.",
        2,
    );
    for article in PORTFOLIO.nullbyte_articles {
        doc.bullet(LineKind::Body, article.title);
        if let Some(note) = article.note {
            doc.wrapped(LineKind::Accent, note, 4);
        }
        doc.wrapped(LineKind::Muted, article.link, 4);
    }
    doc.wrapped(
        LineKind::Muted,
        &format!("All articles: {}", PORTFOLIO.personal.nullbyte),
        2,
    );
}

fn philosophy(doc: &mut DocBuilder) {
    doc.push(LineKind::Title, "Engineering philosophy");
    doc.blank();
    doc.wrapped(LineKind::Body, PORTFOLIO.personal.philosophy, 0);

    doc.section_heading(SECTION_PHILOSOPHY_PRINCIPLES, "Principles");
    for (idx, principle) in PORTFOLIO.principles.iter().enumerate() {
        doc.push(
            LineKind::Subtitle,
            format!("{:02} {}", idx + 1, principle.title),
        );
        doc.wrapped(LineKind::Body, principle.description, 3);
    }

    doc.section_heading(SECTION_PHILOSOPHY_JOURNEY, "Reflections");
    for (idx, reflection) in PORTFOLIO.reflections.iter().enumerate() {
        if idx > 0 {
            doc.blank();
        }
        doc.push(LineKind::Subtitle, reflection.title);
        doc.wrapped(LineKind::Body, reflection.content, 2);
        doc.wrapped(LineKind::Accent, reflection.highlight, 2);
    }
}

fn experience(doc: &mut DocBuilder, selected: usize) {
    doc.push(LineKind::Title, "Experience");
    doc.push(LineKind::Muted, "n/p to select, Enter for details");
    for (index, item) in PORTFOLIO.experience.iter().enumerate() {
        doc.blank();
        let first_row = doc.row();
        doc.card_header(
            index == selected,
            &format!("{} @ {}", item.role, item.company),
        );
        doc.push(
            LineKind::Muted,
            format!("  {} | {}", item.period, item.location),
        );
        doc.wrapped(LineKind::Body, item.summary, 2);
        doc.wrapped(LineKind::Muted, &item.tech.join(", "), 2);
        doc.close_card(index, first_row);
    }
}

fn projects(doc: &mut DocBuilder, selected: usize) {
    doc.push(LineKind::Title, "Projects");
    doc.push(LineKind::Muted, "n/p to select, Enter for details");
    for (index, project) in PORTFOLIO.projects.iter().enumerate() {
        doc.blank();
        let first_row = doc.row();
        doc.card_header(
            index == selected,
            &format!("{} [{}]", project.title, project.category),
        );
        doc.wrapped(LineKind::Body, project.summary, 2);
        doc.wrapped(LineKind::Muted, &project.tech.join(", "), 2);
        doc.close_card(index, first_row);
    }
}

fn skills(doc: &mut DocBuilder) {
    let skills = &PORTFOLIO.skills;
    doc.push(LineKind::Title, "Skills");
    doc.push(LineKind::Muted, "Hover a language or expertise for details");

    doc.section_heading(SECTION_SKILLS_LANGUAGES, "Languages");
    for language in skills.languages {
        let row = doc.row();
        doc.push(
            LineKind::Body,
            format!("  {:<12} {:<10} {}", language.name, language.level, language.years),
        );
        doc.doc.tooltips.push(TooltipSpot {
            row,
            target: TooltipTarget::new(ViewId::Skills, language.name),
            title: format!("{} ({})", language.name, language.level),
            body: language.note.to_string(),
        });
    }

    doc.section_heading(SECTION_SKILLS_FRAMEWORKS, "Frameworks");
    for framework in skills.frameworks {
        doc.bullet(
            LineKind::Body,
            &format!("{} ({})", framework.name, framework.category),
        );
    }

    doc.section_heading(SECTION_SKILLS_CORE, "Core expertise");
    for core in skills.core {
        let row = doc.row();
        doc.push(LineKind::Subtitle, format!("  {}", core.name));
        doc.doc.tooltips.push(TooltipSpot {
            row,
            target: TooltipTarget::new(ViewId::Skills, core.name),
            title: core.name.to_string(),
            body: core.description.to_string(),
        });
    }

    doc.heading("Tools");
    doc.wrapped(LineKind::Body, &skills.tools.join(", "), 2);

    doc.section_heading(SECTION_SKILLS_CERTIFICATIONS, "Certifications");
    for cert in PORTFOLIO.certifications {
        doc.bullet(LineKind::Body, &format!("{} - {}", cert.name, cert.issuer));
        doc.wrapped(LineKind::Muted, cert.note, 2);
    }

    let education = &PORTFOLIO.education;
    doc.section_heading(SECTION_SKILLS_EDUCATION, "Education");
    doc.push(LineKind::Subtitle, education.degree);
    doc.push(
        LineKind::Muted,
        format!("{} | {}", education.institution, education.period),
    );
    doc.push(LineKind::Body, format!("CGPA {}", education.cgpa));
    for achievement in education.achievements {
        doc.bullet(LineKind::Body, achievement);
    }
}

fn project_detail(doc: &mut DocBuilder, project: &Project) {
    doc.wrapped(LineKind::Title, project.title, 0);
    doc.push(LineKind::Muted, project.category);
    doc.blank();
    doc.wrapped(LineKind::Body, project.summary, 0);

    doc.heading("Challenge");
    doc.wrapped(LineKind::Body, project.challenge, 0);
    doc.heading("Approach");
    doc.wrapped(LineKind::Body, project.approach, 0);
    doc.heading("Impact");
    for impact in project.impact {
        doc.bullet(LineKind::Body, impact);
    }
    doc.heading("Tech");
    doc.wrapped(LineKind::Accent, &project.tech.join(", "), 0);
    if let Some(link) = project.link {
        doc.blank();
        doc.wrapped(LineKind::Link, link, 0);
    }
}

fn experience_detail(doc: &mut DocBuilder, item: &Experience) {
    doc.wrapped(LineKind::Title, item.role, 0);
    doc.push(LineKind::Subtitle, item.company);
    doc.push(
        LineKind::Muted,
        format!("{} | {}", item.period, item.location),
    );

    doc.heading("Highlights");
    for highlight in item.highlights {
        doc.bullet(LineKind::Body, highlight);
    }
    if !item.modules.is_empty() {
        doc.heading("Modules");
        for module in item.modules {
            doc.push(LineKind::Subtitle, module.name);
            doc.wrapped(LineKind::Body, module.description, 2);
            doc.wrapped(LineKind::Accent, module.impact, 2);
        }
    }
    doc.heading("Impact");
    for impact in item.impact {
        doc.bullet(LineKind::Body, impact);
    }
    doc.heading("Tech");
    doc.wrapped(LineKind::Accent, &item.tech.join(", "), 0);
}

struct DocBuilder {
    width: usize,
    doc: ViewDocument,
}

impl DocBuilder {
    fn new(width: u16) -> Self {
        Self {
            width: usize::from(width.max(MIN_WIDTH)),
            doc: ViewDocument::default(),
        }
    }

    fn row(&self) -> u16 {
        self.doc.content_rows()
    }

    /// Single row; anything past the width is cut so later rows stay put.
    fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        let text: String = text.into().chars().take(self.width).collect();
        self.doc.lines.push(DocLine { text, kind });
    }

    fn blank(&mut self) {
        self.doc.lines.push(DocLine {
            text: String::new(),
            kind: LineKind::Blank,
        });
    }

    fn wrapped(&mut self, kind: LineKind, text: &str, indent: usize) {
        let pad = " ".repeat(indent);
        for line in wrap(text, self.width.saturating_sub(indent)) {
            self.push(kind, format!("{pad}{line}"));
        }
    }

    fn bullet(&mut self, kind: LineKind, text: &str) {
        for (idx, line) in wrap(text, self.width.saturating_sub(4)).into_iter().enumerate() {
            let marker = if idx == 0 { "  * " } else { "    " };
            self.push(kind, format!("{marker}{line}"));
        }
    }

    /// Single clickable row that navigates to `target`.
    fn link(&mut self, text: &str, target: NavigationTarget) {
        let row = self.row();
        self.push(LineKind::Link, text);
        self.doc.links.push(LinkSpot { row, target });
    }

    fn heading(&mut self, text: &str) {
        if !self.doc.lines.is_empty() {
            self.blank();
        }
        self.push(LineKind::Heading, text);
    }

    /// Heading whose row is registered as a navigation anchor.
    fn section_heading(&mut self, section: &str, text: &str) {
        if !self.doc.lines.is_empty() {
            self.blank();
        }
        let row = self.row();
        self.doc.anchors.push((SectionId::from(section), row));
        self.push(LineKind::Heading, text);
    }

    fn card_header(&mut self, selected: bool, text: &str) {
        let marker = if selected { "> " } else { "  " };
        let kind = LineKind::Card { selected };
        for (idx, line) in wrap(text, self.width.saturating_sub(2)).into_iter().enumerate() {
            let prefix = if idx == 0 { marker } else { "  " };
            self.push(kind, format!("{prefix}{line}"));
        }
    }

    fn close_card(&mut self, index: usize, first_row: u16) {
        let last_row = self.row().saturating_sub(1).max(first_row);
        self.doc.cards.push(CardSpot {
            index,
            first_row,
            last_row,
        });
    }

    fn finish(self) -> ViewDocument {
        self.doc
    }
}

/// Greedy word wrap by character count. Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word = word;
        let mut word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        while word_len > width {
            let split = word
                .char_indices()
                .nth(width)
                .map(|(idx, _)| idx)
                .unwrap_or(word.len());
            lines.push(word[..split].to_string());
            word = &word[split..];
            word_len -= width;
        }
        if word_len == 0 {
            continue;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn anchor_names(doc: &ViewDocument) -> Vec<&str> {
        doc.anchors.iter().map(|(id, _)| id.as_str()).collect()
    }

    #[test]
    fn wrap_breaks_on_words_and_splits_long_ones() {
        assert_eq!(wrap("a bb ccc", 4), vec!["a bb", "ccc"]);
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("", 10), vec![String::new()]);
        assert_eq!(wrap("  spaced   out  ", 20), vec!["spaced out"]);
    }

    #[test]
    fn skills_view_registers_every_section_in_order() {
        let doc = build(ViewId::Skills, 80, &Selection::default());
        assert_eq!(
            anchor_names(&doc),
            vec![
                SECTION_SKILLS_LANGUAGES,
                SECTION_SKILLS_FRAMEWORKS,
                SECTION_SKILLS_CORE,
                SECTION_SKILLS_CERTIFICATIONS,
                SECTION_SKILLS_EDUCATION,
            ]
        );
        let rows: Vec<u16> = doc.anchors.iter().map(|(_, row)| *row).collect();
        assert!(rows.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn anchor_rows_point_at_headings_at_any_width() {
        for width in [24, 60, 120] {
            for view in ViewId::ALL {
                let doc = build(view, width, &Selection::default());
                for (section, row) in &doc.anchors {
                    let line = &doc.lines[usize::from(*row)];
                    assert_eq!(line.kind, LineKind::Heading, "{} at width {width}", section.as_str());
                }
            }
        }
    }

    #[test]
    fn narrow_layout_pushes_anchors_down() {
        let wide = build(ViewId::Philosophy, 120, &Selection::default());
        let narrow = build(ViewId::Philosophy, 30, &Selection::default());
        assert!(narrow.anchors[0].1 > wide.anchors[0].1);
        assert!(narrow.content_rows() > wide.content_rows());
    }

    #[test]
    fn lines_never_exceed_width() {
        for view in ViewId::ALL {
            let doc = build(view, 32, &Selection::default());
            assert!(doc.lines.iter().all(|line| line.text.chars().count() <= 32));
        }
    }

    #[test]
    fn cards_cover_their_rows_and_mark_selection() {
        let selection = Selection {
            project: 1,
            experience: 0,
        };
        let doc = build(ViewId::Projects, 80, &selection);
        assert_eq!(doc.cards.len(), PORTFOLIO.projects.len());

        let second = doc.cards[1];
        assert_eq!(doc.card_at(second.first_row), Some(1));
        assert_eq!(doc.card_at(second.last_row), Some(1));
        assert_eq!(
            doc.lines[usize::from(second.first_row)].kind,
            LineKind::Card { selected: true }
        );
        assert_eq!(
            doc.lines[usize::from(doc.cards[0].first_row)].kind,
            LineKind::Card { selected: false }
        );
        assert_eq!(doc.card_at(0), None);
    }

    #[test]
    fn skill_rows_carry_tooltips() {
        let doc = build(ViewId::Skills, 80, &Selection::default());
        let target = TooltipTarget::new(ViewId::Skills, "C++");
        let spot = doc.tooltip_for(&target).expect("c++ tooltip");
        assert_eq!(doc.tooltip_at(spot.row), Some(spot));
        assert!(doc.lines[usize::from(spot.row)].text.contains("C++"));
        let cpp = PORTFOLIO
            .skills
            .languages
            .iter()
            .find(|language| language.name == "C++")
            .expect("c++");
        assert_eq!(spot.body, cpp.note);
    }

    #[test]
    fn home_stats_link_to_their_views() {
        let doc = build(ViewId::Home, 80, &Selection::default());
        let cgpa = doc
            .tooltip_for(&TooltipTarget::new(ViewId::Home, "stat-cgpa"))
            .expect("cgpa stat");
        assert_eq!(
            doc.link_at(cgpa.row),
            Some(&NavigationTarget::section(ViewId::Skills, SECTION_SKILLS_EDUCATION))
        );
        let experience = doc
            .tooltip_for(&TooltipTarget::new(ViewId::Home, "stat-experience"))
            .expect("experience stat");
        assert_eq!(
            doc.link_at(experience.row),
            Some(&NavigationTarget::view(ViewId::Experience))
        );
    }

    #[test]
    fn home_view_all_links_deep_link_into_views() {
        let doc = build(ViewId::Home, 100, &Selection::default());
        let sections: Vec<(ViewId, &str)> = doc
            .links
            .iter()
            .filter_map(|spot| {
                spot.target
                    .section
                    .as_ref()
                    .map(|section| (spot.target.view, section.as_str()))
            })
            .collect();
        assert_eq!(
            sections,
            vec![
                (ViewId::Skills, SECTION_SKILLS_EDUCATION),
                (ViewId::Skills, SECTION_SKILLS_CORE),
                (ViewId::Projects, SECTION_PROJECTS_PERSONAL_CRAFT),
            ]
        );

        // The projects view has no personal-craft heading; following the link
        // lands on the top of the view.
        let projects = build(ViewId::Projects, 100, &Selection::default());
        assert!(projects
            .anchors
            .iter()
            .all(|(section, _)| section.as_str() != SECTION_PROJECTS_PERSONAL_CRAFT));
    }

    #[test]
    fn home_core_expertise_rows_carry_tooltips() {
        let doc = build(ViewId::Home, 80, &Selection::default());
        for core in PORTFOLIO.skills.core {
            let spot = doc
                .tooltip_for(&TooltipTarget::new(ViewId::Home, core.name))
                .expect("core skill tooltip");
            assert_eq!(spot.body, core.description);
        }
    }

    #[test]
    fn about_lists_publications_and_articles() {
        let doc = build(ViewId::About, 120, &Selection::default());
        let text: Vec<&str> = doc.lines.iter().map(|line| line.text.trim()).collect();
        assert!(text.contains(&"Research publications"));
        assert!(text.contains(&"https://doi.org/10.55197/qjssh.v4i3.251"));
        assert!(text.contains(&"Security research (Null Byte)"));
        for article in PORTFOLIO.nullbyte_articles {
            assert!(text.iter().any(|line| line.ends_with(article.title)));
        }
    }

    #[test]
    fn detail_sheet_for_missing_card_is_a_placeholder() {
        let doc = detail(DetailTarget::Project(99), 40);
        assert_eq!(doc.lines.len(), 1);
        assert_eq!(doc.lines[0].kind, LineKind::Muted);

        let doc = detail(DetailTarget::Experience(0), 40);
        assert!(doc.lines.iter().any(|line| line.text == "Highlights"));
    }
}
