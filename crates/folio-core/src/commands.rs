use serde::Deserialize;
use serde::Serialize;

use crate::content::QuickLink;
use crate::state::ViewId;
use crate::theme::ThemeMode;
use crate::theme::ThemeStore;
use crate::theme::ACCENT_COLORS;

pub const CURRENTLY_ACTIVE: &str = "Currently active";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandCategory {
    Navigation,
    Theme,
    Accent,
    Links,
}

impl CommandCategory {
    pub const ORDER: [CommandCategory; 4] =
        [Self::Navigation, Self::Theme, Self::Accent, Self::Links];

    pub fn heading(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::Theme => "Appearance",
            Self::Accent => "Accent Colors",
            Self::Links => "Quick Links",
        }
    }
}

/// What invoking a palette entry does. Accents are carried by name so the
/// type stays serializable; names always come from the built-in palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Command {
    Navigate(ViewId),
    SetMode(ThemeMode),
    SetAccent(String),
    OpenLink(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEntry {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    pub category: CommandCategory,
    pub keywords: Vec<String>,
    pub command: Command,
}

impl CommandEntry {
    fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        category: CommandCategory,
        keywords: &[&str],
        command: Command,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: Some(description.into()),
            category,
            keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
            command,
        }
    }

    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.label.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|description| description.to_lowercase().contains(needle))
            || self
                .keywords
                .iter()
                .any(|keyword| keyword.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandGroup<'a> {
    pub category: CommandCategory,
    pub heading: &'static str,
    pub entries: Vec<&'a CommandEntry>,
}

/// Immutable snapshot of every invocable command. Rebuilt whenever the theme
/// changes so the "Currently active" descriptions stay accurate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    pub fn build(theme: &ThemeStore, links: &[QuickLink]) -> Self {
        let mut entries = Vec::with_capacity(6 + 3 + ACCENT_COLORS.len() + links.len());
        entries.extend(navigation_entries());

        let mode = theme.mode();
        for (candidate, label, idle, keywords) in [
            (
                ThemeMode::Light,
                "Light Mode",
                "Switch to light theme",
                &["light", "bright", "day", "theme"][..],
            ),
            (
                ThemeMode::Dark,
                "Dark Mode",
                "Switch to dark theme",
                &["dark", "night", "theme"][..],
            ),
            (
                ThemeMode::System,
                "System Theme",
                "Follow system preference",
                &["system", "auto", "preference", "theme"][..],
            ),
        ] {
            let description = if candidate == mode { CURRENTLY_ACTIVE } else { idle };
            entries.push(CommandEntry::new(
                format!("theme-{}", candidate.as_str()),
                label,
                description,
                CommandCategory::Theme,
                keywords,
                Command::SetMode(candidate),
            ));
        }

        let accent = theme.accent();
        for color in ACCENT_COLORS.iter() {
            let lower = color.name.to_lowercase();
            let description = if color.name == accent.name {
                CURRENTLY_ACTIVE.to_string()
            } else {
                format!("Set {} as accent", color.name)
            };
            entries.push(CommandEntry::new(
                format!("accent-{lower}"),
                color.name,
                description,
                CommandCategory::Accent,
                &[lower.as_str(), "color", "accent", "theme"],
                Command::SetAccent(color.name.to_string()),
            ));
        }

        for link in links {
            entries.push(CommandEntry::new(
                link.id,
                link.label,
                link.description,
                CommandCategory::Links,
                link.keywords,
                Command::OpenLink(link.url.to_string()),
            ));
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Plain substring containment over label, description and keywords. A
    /// blank query keeps everything in build order; there is no ranking.
    pub fn filter(&self, query: &str) -> Vec<&CommandEntry> {
        if query.trim().is_empty() {
            return self.entries.iter().collect();
        }
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.matches(&needle))
            .collect()
    }
}

/// Partitions filtered entries by the fixed category order. Entries keep
/// their relative order and empty categories are dropped.
pub fn group_commands<'a>(entries: &[&'a CommandEntry]) -> Vec<CommandGroup<'a>> {
    CommandCategory::ORDER
        .iter()
        .filter_map(|category| {
            let members: Vec<&CommandEntry> = entries
                .iter()
                .copied()
                .filter(|entry| entry.category == *category)
                .collect();
            if members.is_empty() {
                None
            } else {
                Some(CommandGroup {
                    category: *category,
                    heading: category.heading(),
                    entries: members,
                })
            }
        })
        .collect()
}

/// Filtered entries flattened in display order: the order the selection
/// index walks through.
pub fn display_order<'a>(groups: &[CommandGroup<'a>]) -> Vec<&'a CommandEntry> {
    groups
        .iter()
        .flat_map(|group| group.entries.iter().copied())
        .collect()
}

fn navigation_entries() -> Vec<CommandEntry> {
    ViewId::ALL
        .iter()
        .map(|view| {
            let (description, keywords): (&str, &[&str]) = match view {
                ViewId::Home => ("Go to overview", &["home", "overview", "main", "dashboard"]),
                ViewId::About => (
                    "Personal information",
                    &["about", "me", "info", "personal", "bio"],
                ),
                ViewId::Philosophy => (
                    "Engineering mindset & principles",
                    &["philosophy", "mindset", "principles", "values", "driving force"],
                ),
                ViewId::Experience => (
                    "Work history",
                    &["experience", "work", "job", "career", "history"],
                ),
                ViewId::Projects => (
                    "Portfolio projects",
                    &["projects", "portfolio", "work", "showcase"],
                ),
                ViewId::Skills => (
                    "Technical expertise",
                    &["skills", "tech", "stack", "expertise", "abilities"],
                ),
            };
            CommandEntry::new(
                format!("nav-{}", view.as_str()),
                view.label(),
                description,
                CommandCategory::Navigation,
                keywords,
                Command::Navigate(*view),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::content::PORTFOLIO;
    use crate::theme::accent_by_name;
    use crate::theme::ResolvedMode;

    fn registry_for(mode: ThemeMode, accent: &str) -> CommandRegistry {
        let accent = accent_by_name(accent).expect("accent");
        let theme = ThemeStore::new(mode, accent, ResolvedMode::Dark);
        CommandRegistry::build(&theme, PORTFOLIO.quick_links)
    }

    fn ids(entries: &[&CommandEntry]) -> Vec<String> {
        entries.iter().map(|entry| entry.id.clone()).collect()
    }

    #[test]
    fn build_order_and_unique_ids() {
        let registry = registry_for(ThemeMode::Dark, "Copper");
        assert_eq!(registry.len(), 6 + 3 + 8 + 4);

        let categories: Vec<CommandCategory> = registry
            .entries()
            .iter()
            .map(|entry| entry.category)
            .collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);

        let unique: HashSet<&str> = registry.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(unique.len(), registry.len());
    }

    #[test]
    fn blank_query_is_identity() {
        let registry = registry_for(ThemeMode::Dark, "Copper");
        let all: Vec<&CommandEntry> = registry.entries().iter().collect();
        assert_eq!(registry.filter(""), all);
        assert_eq!(registry.filter("   "), all);
    }

    #[test]
    fn filter_is_sound_and_complete() {
        let registry = registry_for(ThemeMode::System, "Teal");
        for query in ["theme", "WORK", "co", "acc", "mail", "zzz"] {
            let needle = query.to_lowercase();
            let filtered = registry.filter(query);
            for entry in &filtered {
                assert!(entry.matches(&needle), "{} should match {query}", entry.id);
            }
            let expected: Vec<&CommandEntry> = registry
                .entries()
                .iter()
                .filter(|entry| entry.matches(&needle))
                .collect();
            assert_eq!(filtered, expected, "query {query}");
        }
    }

    #[test]
    fn philosoph_matches_only_the_philosophy_view() {
        let registry = registry_for(ThemeMode::Dark, "Copper");
        let filtered = registry.filter("philosoph");
        assert_eq!(ids(&filtered), vec!["nav-philosophy".to_string()]);
        assert_eq!(filtered[0].command, Command::Navigate(ViewId::Philosophy));
    }

    #[test]
    fn keyword_with_space_matches() {
        let registry = registry_for(ThemeMode::Dark, "Copper");
        assert_eq!(
            ids(&registry.filter("driving f")),
            vec!["nav-philosophy".to_string()]
        );
    }

    #[test]
    fn currently_active_tracks_requested_mode_and_accent() {
        let registry = registry_for(ThemeMode::System, "Teal");
        let described = |id: &str| {
            registry
                .get(id)
                .and_then(|entry| entry.description.clone())
                .expect("entry")
        };
        assert_eq!(described("theme-system"), CURRENTLY_ACTIVE);
        assert_eq!(described("theme-dark"), "Switch to dark theme");
        assert_eq!(described("accent-teal"), CURRENTLY_ACTIVE);
        assert_eq!(described("accent-sky"), "Set Sky as accent");
    }

    #[test]
    fn currently_active_query_finds_both_active_entries() {
        let registry = registry_for(ThemeMode::Light, "Rose");
        assert_eq!(
            ids(&registry.filter("currently")),
            vec!["theme-light".to_string(), "accent-rose".to_string()]
        );
    }

    #[test]
    fn grouping_drops_empty_categories_and_keeps_order() {
        let registry = registry_for(ThemeMode::Dark, "Copper");
        let filtered = registry.filter("theme");
        let groups = group_commands(&filtered);

        let headings: Vec<&str> = groups.iter().map(|group| group.heading).collect();
        assert_eq!(headings, vec!["Appearance", "Accent Colors"]);
        assert_eq!(groups[0].entries.len(), 3);
        assert_eq!(groups[1].entries.len(), 8);
        assert_eq!(display_order(&groups).len(), filtered.len());
    }

    #[test]
    fn email_entry_describes_address_and_opens_mailto() {
        let registry = registry_for(ThemeMode::Dark, "Copper");
        let email = registry.get("link-email").expect("email");
        assert_eq!(email.description.as_deref(), Some("m.shahzad.ms72@gmail.com"));
        assert_eq!(
            email.command,
            Command::OpenLink("mailto:m.shahzad.ms72@gmail.com".to_string())
        );
    }

    #[test]
    fn command_serializes_with_kind_tag() {
        let encoded = serde_json::to_string(&Command::SetAccent("Teal".to_string())).expect("encode");
        assert_eq!(encoded, r#"{"kind":"set_accent","value":"Teal"}"#);
    }
}
