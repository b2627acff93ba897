//! Command trait, table, and resolution logic.
//!
//! Resolution is an exact map lookup over canonical names and aliases. The
//! table is built once at session start and never mutated afterwards; name
//! and alias uniqueness is a construction-time invariant enforced at
//! registration.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use folio_theme::{Theme, ThemeRegistry};
use folio_types::error::Result;

use crate::content::Component;

/// Output produced by a command.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum CommandOutput {
    /// Plain text.
    Text(String),
    /// Renderable payload owned by the presentation layer. The engine
    /// routes this by kind only and never inspects its shape.
    Component(Component),
    /// Short confirmation line.
    Success(String),
    /// Short failure line.
    Error(String),
}

/// Mutable session surface exposed to commands during execution.
///
/// Commands never touch session state directly; the only mutation they can
/// request is a theme swap, and everything else travels back through the
/// returned [`CommandOutput`].
pub struct CommandContext<'a> {
    themes: &'a ThemeRegistry,
    active: &'a mut Theme,
}

impl<'a> CommandContext<'a> {
    pub fn new(themes: &'a ThemeRegistry, active: &'a mut Theme) -> Self {
        Self { themes, active }
    }

    /// Swap the active theme by registry name. Returns `false` and leaves
    /// the theme untouched when the name is unknown.
    pub fn set_theme(&mut self, name: &str) -> bool {
        match self.themes.get(name) {
            Some(theme) => {
                *self.active = theme.clone();
                true
            },
            None => false,
        }
    }

    /// The theme registry, for listing available names.
    pub fn themes(&self) -> &ThemeRegistry {
        self.themes
    }

    /// The currently active theme.
    pub fn active_theme(&self) -> &Theme {
        self.active
    }
}

/// A single executable command.
#[async_trait]
pub trait Command: Send + Sync {
    /// Canonical command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Alternate names resolving to this command.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Execute the command with parsed arguments. May suspend.
    async fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput>;
}

/// Registry of available commands resolved by name or alias.
pub struct CommandTable {
    commands: HashMap<String, Arc<dyn Command>>,
}

impl CommandTable {
    /// Create an empty command table.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command under its canonical name and every alias.
    ///
    /// Panics on a name or alias collision: the table is built once from a
    /// closed command set, so a collision is a defect in that set, not a
    /// runtime condition.
    pub fn register(&mut self, cmd: Arc<dyn Command>) {
        let name = cmd.name().to_string();
        let prev = self.commands.insert(name.clone(), Arc::clone(&cmd));
        assert!(prev.is_none(), "command name collision: {name}");
        for alias in cmd.aliases() {
            let prev = self.commands.insert(alias.to_string(), Arc::clone(&cmd));
            assert!(prev.is_none(), "command alias collision: {alias}");
        }
    }

    /// Resolve a lowercased token to a command by canonical name or alias.
    pub fn resolve(&self, token: &str) -> Option<&Arc<dyn Command>> {
        self.commands.get(token)
    }

    /// Canonical (name, description) pairs, sorted by name.
    pub fn list(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .commands
            .iter()
            .filter(|(key, cmd)| key.as_str() == cmd.name())
            .map(|(_, cmd)| (cmd.name().to_string(), cmd.description().to_string()))
            .collect();
        entries.sort();
        entries
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a raw input line into a command token and positional arguments.
///
/// Returns `None` when the line is blank after trimming; resolution is
/// skipped entirely in that case. The whole trimmed line is lowercased
/// before splitting, so argument case is not preserved.
pub fn parse_line(raw: &str) -> Option<(String, Vec<String>)> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lowered = trimmed.to_lowercase();
    let mut tokens = lowered.split_whitespace().map(str::to_string);
    let name = tokens.next()?;
    Some((name, tokens.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::error::FolioError;

    struct EchoCmd;

    #[async_trait]
    impl Command for EchoCmd {
        fn name(&self) -> &str {
            "echo"
        }
        fn description(&self) -> &str {
            "Print arguments"
        }
        fn aliases(&self) -> &[&str] {
            &["say"]
        }
        async fn execute(
            &self,
            args: &[String],
            _ctx: &mut CommandContext<'_>,
        ) -> Result<CommandOutput> {
            Ok(CommandOutput::Text(args.join(" ")))
        }
    }

    struct FailCmd;

    #[async_trait]
    impl Command for FailCmd {
        fn name(&self) -> &str {
            "fail"
        }
        fn description(&self) -> &str {
            "Always errors"
        }
        async fn execute(
            &self,
            _args: &[String],
            _ctx: &mut CommandContext<'_>,
        ) -> Result<CommandOutput> {
            Err(FolioError::Command("simulated failure".into()))
        }
    }

    fn registry() -> ThemeRegistry {
        ThemeRegistry::builtin().unwrap()
    }

    // -- parse_line --

    #[test]
    fn blank_lines_skip_resolution() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   \t  ").is_none());
    }

    #[test]
    fn line_is_trimmed_and_split() {
        let (name, args) = parse_line("  echo   hello    world  ").unwrap();
        assert_eq!(name, "echo");
        assert_eq!(args, vec!["hello", "world"]);
    }

    #[test]
    fn whole_line_is_lowercased() {
        // Argument case is destroyed along with the command token's.
        let (name, args) = parse_line("Theme CYBER").unwrap();
        assert_eq!(name, "theme");
        assert_eq!(args, vec!["cyber"]);
    }

    #[test]
    fn no_args_yields_empty_vec() {
        let (name, args) = parse_line("help").unwrap();
        assert_eq!(name, "help");
        assert!(args.is_empty());
    }

    // -- CommandTable --

    #[test]
    fn resolve_by_name_and_alias() {
        let mut table = CommandTable::new();
        table.register(Arc::new(EchoCmd));
        assert!(table.resolve("echo").is_some());
        assert!(table.resolve("say").is_some());
        assert!(table.resolve("shout").is_none());
    }

    #[test]
    fn alias_resolves_to_same_command() {
        let mut table = CommandTable::new();
        table.register(Arc::new(EchoCmd));
        let by_name = table.resolve("echo").unwrap();
        let by_alias = table.resolve("say").unwrap();
        assert_eq!(by_name.name(), by_alias.name());
    }

    #[test]
    #[should_panic(expected = "command name collision")]
    fn duplicate_name_panics() {
        let mut table = CommandTable::new();
        table.register(Arc::new(EchoCmd));
        table.register(Arc::new(EchoCmd));
    }

    #[test]
    fn list_is_canonical_and_sorted() {
        let mut table = CommandTable::new();
        table.register(Arc::new(FailCmd));
        table.register(Arc::new(EchoCmd));
        let listed = table.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].0, "echo");
        assert_eq!(listed[1].0, "fail");
    }

    // -- CommandContext --

    #[test]
    fn set_theme_hit_swaps_active() {
        let themes = registry();
        let mut active = themes.default_theme().clone();
        let mut ctx = CommandContext::new(&themes, &mut active);
        assert!(ctx.set_theme("matrix"));
        assert_eq!(ctx.active_theme().name, "matrix");
    }

    #[test]
    fn set_theme_miss_leaves_active() {
        let themes = registry();
        let mut active = themes.default_theme().clone();
        let mut ctx = CommandContext::new(&themes, &mut active);
        assert!(!ctx.set_theme("daylight"));
        assert_eq!(ctx.active_theme().name, "cyber");
    }

    // -- execution --

    #[tokio::test]
    async fn execute_text_output() {
        let themes = registry();
        let mut active = themes.default_theme().clone();
        let mut ctx = CommandContext::new(&themes, &mut active);
        let args = vec!["hello".to_string(), "world".to_string()];
        match EchoCmd.execute(&args, &mut ctx).await.unwrap() {
            CommandOutput::Text(s) => assert_eq!(s, "hello world"),
            other => panic!("expected Text, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn execute_error_propagates() {
        let themes = registry();
        let mut active = themes.default_theme().clone();
        let mut ctx = CommandContext::new(&themes, &mut active);
        let err = FailCmd.execute(&[], &mut ctx).await.unwrap_err();
        assert!(format!("{err}").contains("simulated failure"));
    }

    #[test]
    fn output_serializes_with_kind_tag() {
        let json = serde_json::to_string(&CommandOutput::Error("nope".into())).unwrap();
        assert!(json.contains("\"kind\":\"error\""));
        assert!(json.contains("\"content\":\"nope\""));
    }
}
