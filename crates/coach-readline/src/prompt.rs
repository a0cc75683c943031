//! Line-editor helper: slash commands and numbered suggested prompts.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use coach_core::response::SUGGESTED_PROMPTS;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

const COMMANDS: [&str; 5] = ["/credits", "/reset", "/history", "/help", "/quit"];

/// Suggested prompt picked by its 1-based number, e.g. `"2"`.
pub fn suggested_prompt(input: &str) -> Option<&'static str> {
    let n = input.trim().parse::<usize>().ok()?;
    n.checked_sub(1).and_then(|index| SUGGESTED_PROMPTS.get(index).copied())
}

/// rustyline helper for the coach prompt.
///
/// Numbers only hint and complete while `suggestions` is set, which the REPL
/// clears once the first user message is in.
pub struct CoachHelper {
    suggestions: Arc<AtomicBool>,
}

impl CoachHelper {
    pub fn new(suggestions: Arc<AtomicBool>) -> Self {
        Self { suggestions }
    }

    fn pick(&self, line: &str) -> Option<&'static str> {
        if self.suggestions.load(Ordering::Relaxed) {
            suggested_prompt(line)
        } else {
            None
        }
    }
}

impl Helper for CoachHelper {}

impl Completer for CoachHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if let Some(prompt) = self.pick(line) {
            let pair = Pair {
                display: prompt.to_string(),
                replacement: prompt.to_string(),
            };
            return Ok((0, vec![pair]));
        }

        if !line.starts_with('/') {
            return Ok((0, vec![]));
        }
        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CoachHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !line.starts_with('/') {
            return Borrowed(line);
        }
        if COMMANDS.contains(&line.trim_end()) {
            Owned(line.bright_cyan().to_string())
        } else {
            Owned(line.red().to_string())
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CoachHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }

        if let Some(prompt) = self.pick(line) {
            return Some(format!("  {prompt}"));
        }

        if line.starts_with('/') && !line.contains(' ') {
            COMMANDS
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CoachHelper {}

#[cfg(test)]
mod tests {
    use super::*;
    use rustyline::history::DefaultHistory;

    fn helper(suggestions: bool) -> CoachHelper {
        CoachHelper::new(Arc::new(AtomicBool::new(suggestions)))
    }

    fn complete(helper: &CoachHelper, line: &str) -> Vec<String> {
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        let (_, pairs) = helper.complete(line, line.len(), &ctx).unwrap();
        pairs.into_iter().map(|p| p.replacement).collect()
    }

    fn hint(helper: &CoachHelper, line: &str) -> Option<String> {
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        helper.hint(line, line.len(), &ctx)
    }

    #[test]
    fn test_suggested_prompt_is_one_based() {
        assert_eq!(suggested_prompt("1"), Some(SUGGESTED_PROMPTS[0]));
        assert_eq!(suggested_prompt(" 6 "), Some(SUGGESTED_PROMPTS[5]));
        assert_eq!(suggested_prompt("0"), None);
        assert_eq!(suggested_prompt("7"), None);
        assert_eq!(suggested_prompt("two"), None);
    }

    #[test]
    fn test_slash_commands_complete() {
        let helper = helper(true);
        assert_eq!(complete(&helper, "/cr"), vec!["/credits".to_string()]);
        assert!(complete(&helper, "hello").is_empty());
    }

    #[test]
    fn test_number_completes_to_prompt_while_suggestions_show() {
        let flag = Arc::new(AtomicBool::new(true));
        let helper = CoachHelper::new(Arc::clone(&flag));
        assert_eq!(complete(&helper, "3"), vec![SUGGESTED_PROMPTS[2].to_string()]);

        flag.store(false, Ordering::Relaxed);
        assert!(complete(&helper, "3").is_empty());
    }

    #[test]
    fn test_number_hints_its_prompt() {
        assert_eq!(
            hint(&helper(true), "2"),
            Some(format!("  {}", SUGGESTED_PROMPTS[1]))
        );
        assert_eq!(hint(&helper(false), "2"), None);
    }

    #[test]
    fn test_hint_suggests_rest_of_command() {
        assert_eq!(hint(&helper(false), "/his").as_deref(), Some("tory"));
        assert_eq!(hint(&helper(false), "/history"), None);
    }
}
