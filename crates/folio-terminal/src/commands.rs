//! Built-in portfolio commands.
//!
//! Content commands are mechanical renderers over the shared [`Profile`]
//! document; the only command with a side effect is `theme`, which goes
//! through [`CommandContext::set_theme`].

use std::sync::Arc;

use async_trait::async_trait;

use folio_types::error::Result;

use crate::content::{Card, Component};
use crate::interpreter::{Command, CommandContext, CommandOutput, CommandTable};
use crate::profile::Profile;

/// Canonical name of the designated clear command. The session treats a
/// resolution to this descriptor specially (history is emptied instead of
/// appended to), so aliases clear too.
pub const CLEAR_COMMAND: &str = "clear";

/// Names shown by `help`, in display order.
const HELP_CHIPS: &[&str] = &[
    "whoami",
    "experience",
    "projects",
    "skills",
    "certifications",
    "contact",
    "theme",
];

/// Register the full built-in command set over a profile document.
pub fn register_builtins(table: &mut CommandTable, profile: Arc<Profile>) {
    table.register(Arc::new(HelpCmd));
    table.register(Arc::new(ClearCmd));
    table.register(Arc::new(WhoamiCmd {
        profile: Arc::clone(&profile),
    }));
    table.register(Arc::new(ExperienceCmd {
        profile: Arc::clone(&profile),
    }));
    table.register(Arc::new(ProjectsCmd {
        profile: Arc::clone(&profile),
    }));
    table.register(Arc::new(SkillsCmd {
        profile: Arc::clone(&profile),
    }));
    table.register(Arc::new(CertificationsCmd {
        profile: Arc::clone(&profile),
    }));
    table.register(Arc::new(ContactCmd { profile }));
    table.register(Arc::new(ThemeCmd));
}

/// `help` -- chips row of the primary commands.
struct HelpCmd;

#[async_trait]
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Display commands"
    }
    fn aliases(&self) -> &[&str] {
        &["h", "?"]
    }
    async fn execute(
        &self,
        _args: &[String],
        _ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput> {
        let chips = HELP_CHIPS.iter().map(|c| c.to_string()).collect();
        Ok(CommandOutput::Component(Component::plain().chips(chips)))
    }
}

/// `clear` -- the designated clear command. The output itself is empty
/// text; the history wipe happens in the session transition.
struct ClearCmd;

#[async_trait]
impl Command for ClearCmd {
    fn name(&self) -> &str {
        CLEAR_COMMAND
    }
    fn description(&self) -> &str {
        "Clear terminal"
    }
    fn aliases(&self) -> &[&str] {
        &["cls"]
    }
    async fn execute(
        &self,
        _args: &[String],
        _ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(String::new()))
    }
}

/// `whoami` -- identity card, quick-info card, and tag row.
struct WhoamiCmd {
    profile: Arc<Profile>,
}

#[async_trait]
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "About me"
    }
    fn aliases(&self) -> &[&str] {
        &["about", "bio"]
    }
    async fn execute(
        &self,
        _args: &[String],
        _ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput> {
        let id = &self.profile.identity;
        let main = Card {
            title: id.name.clone(),
            subtitle: Some(id.title.clone()),
            body: Some(id.tagline.clone()),
            ..Card::default()
        };
        let quick = Card {
            title: "Quick Info".to_string(),
            tags: vec![id.location.clone(), id.education.clone(), id.tenure.clone()],
            ..Card::default()
        };
        Ok(CommandOutput::Component(
            Component::plain()
                .card(main)
                .card(quick)
                .chips(id.tags.clone()),
        ))
    }
}

/// `experience` -- one card per work-history entry.
struct ExperienceCmd {
    profile: Arc<Profile>,
}

#[async_trait]
impl Command for ExperienceCmd {
    fn name(&self) -> &str {
        "experience"
    }
    fn description(&self) -> &str {
        "Work history"
    }
    fn aliases(&self) -> &[&str] {
        &["exp", "work"]
    }
    async fn execute(
        &self,
        _args: &[String],
        _ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput> {
        let mut component = Component::with_heading("Experience");
        for entry in &self.profile.experience {
            component = component.card(Card {
                title: entry.role.clone(),
                subtitle: Some(entry.organization.clone()),
                period: Some(entry.period.clone()),
                badge: Some(String::from(if entry.current { "Current" } else { "Previous" })),
                body: Some(entry.summary.clone()),
                ..Card::default()
            });
        }
        Ok(CommandOutput::Component(component))
    }
}

/// `projects` -- one linked card per project.
struct ProjectsCmd {
    profile: Arc<Profile>,
}

#[async_trait]
impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn description(&self) -> &str {
        "My projects"
    }
    fn aliases(&self) -> &[&str] {
        &["proj"]
    }
    async fn execute(
        &self,
        _args: &[String],
        _ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput> {
        let mut component = Component::with_heading("Projects");
        for project in &self.profile.projects {
            component = component.card(Card {
                title: project.name.clone(),
                body: Some(project.summary.clone()),
                tags: project.tags.clone(),
                link: project.link.clone(),
                ..Card::default()
            });
        }
        Ok(CommandOutput::Component(component))
    }
}

/// `skills` -- one card per skill group, items as tags.
struct SkillsCmd {
    profile: Arc<Profile>,
}

#[async_trait]
impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn description(&self) -> &str {
        "Tech stack"
    }
    fn aliases(&self) -> &[&str] {
        &["tech", "stack"]
    }
    async fn execute(
        &self,
        _args: &[String],
        _ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput> {
        let mut component = Component::with_heading("Skills");
        for group in &self.profile.skill_groups {
            component = component.card(Card {
                title: group.name.clone(),
                tags: group.items.clone(),
                ..Card::default()
            });
        }
        Ok(CommandOutput::Component(component))
    }
}

/// `certifications` -- one card per certification.
struct CertificationsCmd {
    profile: Arc<Profile>,
}

#[async_trait]
impl Command for CertificationsCmd {
    fn name(&self) -> &str {
        "certifications"
    }
    fn description(&self) -> &str {
        "Certifications"
    }
    fn aliases(&self) -> &[&str] {
        &["certs"]
    }
    async fn execute(
        &self,
        _args: &[String],
        _ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput> {
        let mut component = Component::with_heading("Certifications");
        for cert in &self.profile.certifications {
            component = component.card(Card::titled(cert.name.clone()));
        }
        Ok(CommandOutput::Component(component))
    }
}

/// `contact` -- one linked card per contact channel.
struct ContactCmd {
    profile: Arc<Profile>,
}

#[async_trait]
impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn description(&self) -> &str {
        "Contact me"
    }
    fn aliases(&self) -> &[&str] {
        &["email", "connect"]
    }
    async fn execute(
        &self,
        _args: &[String],
        _ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput> {
        let mut component = Component::with_heading("Connect");
        for channel in &self.profile.contacts {
            component = component.card(Card {
                title: channel.label.clone(),
                body: Some(channel.value.clone()),
                link: channel.link.clone(),
                ..Card::default()
            });
        }
        Ok(CommandOutput::Component(component))
    }
}

/// `theme` -- list available themes, or switch to a named one.
struct ThemeCmd;

#[async_trait]
impl Command for ThemeCmd {
    fn name(&self) -> &str {
        "theme"
    }
    fn description(&self) -> &str {
        "Change theme"
    }
    async fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput> {
        let Some(name) = args.first() else {
            let chips = ctx.themes().names().iter().map(|n| n.to_string()).collect();
            return Ok(CommandOutput::Component(Component::plain().chips(chips)));
        };
        if ctx.set_theme(name) {
            Ok(CommandOutput::Success(format!("✓ Theme: {name}")))
        } else {
            Ok(CommandOutput::Error(format!("✗ Unknown: {name}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Block;
    use folio_theme::ThemeRegistry;

    fn table() -> CommandTable {
        let profile = Arc::new(Profile::embedded().unwrap());
        let mut table = CommandTable::new();
        register_builtins(&mut table, profile);
        table
    }

    fn registry() -> ThemeRegistry {
        ThemeRegistry::builtin().unwrap()
    }

    async fn run(table: &CommandTable, line: &str) -> (CommandOutput, String) {
        let themes = registry();
        let mut active = themes.default_theme().clone();
        let (name, args) = crate::interpreter::parse_line(line).unwrap();
        let cmd = table.resolve(&name).unwrap();
        let mut ctx = CommandContext::new(&themes, &mut active);
        let out = cmd.execute(&args, &mut ctx).await.unwrap();
        (out, active.name.clone())
    }

    #[test]
    fn every_builtin_resolves_by_name_and_alias() {
        let table = table();
        for token in [
            "help",
            "h",
            "?",
            "clear",
            "cls",
            "whoami",
            "about",
            "bio",
            "experience",
            "exp",
            "work",
            "projects",
            "proj",
            "skills",
            "tech",
            "stack",
            "certifications",
            "certs",
            "contact",
            "email",
            "connect",
            "theme",
        ] {
            assert!(table.resolve(token).is_some(), "unresolved: {token}");
        }
    }

    #[test]
    fn work_belongs_to_experience() {
        let table = table();
        assert_eq!(table.resolve("work").unwrap().name(), "experience");
    }

    #[tokio::test]
    async fn help_lists_primary_commands() {
        let (out, _) = run(&table(), "help").await;
        let CommandOutput::Component(c) = out else {
            panic!("expected Component");
        };
        let Block::Chips { items } = &c.blocks[0] else {
            panic!("expected Chips");
        };
        assert!(items.contains(&"whoami".to_string()));
        assert!(items.contains(&"theme".to_string()));
        assert!(!items.contains(&"help".to_string()));
    }

    #[tokio::test]
    async fn clear_outputs_empty_text() {
        let (out, _) = run(&table(), "clear").await;
        match out {
            CommandOutput::Text(s) => assert!(s.is_empty()),
            other => panic!("expected Text, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn whoami_renders_identity() {
        let (out, _) = run(&table(), "whoami").await;
        let CommandOutput::Component(c) = out else {
            panic!("expected Component");
        };
        let Block::Card(card) = &c.blocks[0] else {
            panic!("expected Card");
        };
        assert_eq!(card.title, "Revanth B");
    }

    #[tokio::test]
    async fn experience_cards_carry_badges() {
        let (out, _) = run(&table(), "experience").await;
        let CommandOutput::Component(c) = out else {
            panic!("expected Component");
        };
        let badges: Vec<_> = c
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Card(card) => card.badge.as_deref(),
                Block::Chips { .. } => None,
            })
            .collect();
        assert_eq!(badges, vec!["Current", "Previous"]);
    }

    #[tokio::test]
    async fn projects_cards_are_linked() {
        let (out, _) = run(&table(), "projects").await;
        let CommandOutput::Component(c) = out else {
            panic!("expected Component");
        };
        assert_eq!(c.heading.as_deref(), Some("Projects"));
        assert_eq!(c.blocks.len(), 3);
        for block in &c.blocks {
            let Block::Card(card) = block else {
                panic!("expected Card");
            };
            assert!(card.link.is_some());
        }
    }

    #[tokio::test]
    async fn theme_without_args_lists_registry_names() {
        let (out, active) = run(&table(), "theme").await;
        let CommandOutput::Component(c) = out else {
            panic!("expected Component");
        };
        let Block::Chips { items } = &c.blocks[0] else {
            panic!("expected Chips");
        };
        assert_eq!(items, &["cyber", "matrix", "aurora", "sunset"]);
        assert_eq!(active, "cyber");
    }

    #[tokio::test]
    async fn theme_switch_success() {
        let (out, active) = run(&table(), "theme matrix").await;
        match out {
            CommandOutput::Success(s) => assert_eq!(s, "✓ Theme: matrix"),
            other => panic!("expected Success, got {other:?}"),
        }
        assert_eq!(active, "matrix");
    }

    #[tokio::test]
    async fn theme_switch_unknown_is_error_output() {
        let (out, active) = run(&table(), "theme daylight").await;
        match out {
            CommandOutput::Error(s) => assert_eq!(s, "✗ Unknown: daylight"),
            other => panic!("expected Error, got {other:?}"),
        }
        assert_eq!(active, "cyber");
    }

    #[tokio::test]
    async fn uppercase_theme_argument_is_lowercased_before_lookup() {
        // The whole line is lowercased before splitting, so this resolves.
        let (out, active) = run(&table(), "THEME SUNSET").await;
        assert!(matches!(out, CommandOutput::Success(_)));
        assert_eq!(active, "sunset");
    }
}
