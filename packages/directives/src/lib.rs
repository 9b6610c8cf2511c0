//! Interactivity boundary classification.
//!
//! Decides whether a generated module needs the client-runtime directive.
//! This is a heuristic over source text, not control-flow analysis: rules
//! are an ordered, enumerable table so each one is individually testable.
//! False positives are tolerable; false negatives are bugs.

use regex::Regex;
use std::borrow::Cow;
use weaver_model::is_always_interactive;

/// The module-level client-runtime marker.
pub const CLIENT_DIRECTIVE: &str = "\"use client\";";

/// One classification rule.
pub struct DirectiveRule {
    pub name: &'static str,
    pattern: Regex,
}

impl DirectiveRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            // Patterns are compile-time constants.
            pattern: Regex::new(pattern).unwrap(),
        }
    }

    pub fn matches(&self, source: &str) -> bool {
        self.pattern.is_match(source)
    }
}

/// Ordered rule table; the first matching rule wins.
pub struct DirectiveRules {
    rules: Vec<DirectiveRule>,
}

impl DirectiveRules {
    pub fn new() -> Self {
        Self {
            rules: vec![
                DirectiveRule::new(
                    "react-hooks",
                    r"\b(useState|useEffect|useLayoutEffect|useReducer|useCallback|useMemo|useContext|useRef|useTransition)\s*\(",
                ),
                DirectiveRule::new(
                    "browser-globals",
                    r"\b(window|document|navigator|localStorage|sessionStorage)\b",
                ),
                DirectiveRule::new(
                    "event-handlers",
                    r"\bon(Click|Change|Submit|Input|KeyDown|KeyUp|MouseEnter|MouseLeave|MouseMove|Focus|Blur|Scroll|TouchStart|TouchEnd)\s*=",
                ),
                DirectiveRule::new(
                    "observer-apis",
                    r"\b(IntersectionObserver|ResizeObserver|MutationObserver|requestAnimationFrame)\b",
                ),
                DirectiveRule::new(
                    "animation-imports",
                    r#"import\s+\{[^}]*\}\s+from\s+["'](framer-motion|motion/react)["']"#,
                ),
            ],
        }
    }

    pub fn rules(&self) -> &[DirectiveRule] {
        &self.rules
    }

    /// Name of the first matching rule, if any.
    pub fn classify(&self, source: &str) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| rule.matches(source))
            .map(|rule| rule.name)
    }

    /// Ensure `source` carries the client directive when it needs one.
    ///
    /// Returns the input unchanged (borrowed, byte-identical) when the
    /// directive is already present or no rule applies. Sources from an
    /// always-interactive group get the directive unconditionally.
    pub fn ensure<'a>(&self, source: &'a str, group: &str) -> Cow<'a, str> {
        if has_directive(source) {
            return Cow::Borrowed(source);
        }
        if is_always_interactive(group) || self.classify(source).is_some() {
            return Cow::Owned(format!("{}\n\n{}", CLIENT_DIRECTIVE, source));
        }
        Cow::Borrowed(source)
    }
}

impl Default for DirectiveRules {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper constructing the default rule table.
pub fn ensure_client_directive<'a>(source: &'a str, group: &str) -> Cow<'a, str> {
    DirectiveRules::new().ensure(source, group)
}

/// The directive must be the first statement; either quote style counts.
fn has_directive(source: &str) -> bool {
    let head = source.trim_start();
    head.starts_with("\"use client\"") || head.starts_with("'use client'")
}

#[cfg(test)]
mod tests {
    use super::*;

    const INERT: &str = "export function Badge() {\n  return <span>ok</span>;\n}\n";

    #[test]
    fn already_directive_returns_byte_identical() {
        let source = "\"use client\";\n\nexport function Widget() {}\n";
        let result = ensure_client_directive(source, "blocks");
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result.as_ref(), source);

        let single_quoted = "'use client'\nexport default {}\n";
        let result = ensure_client_directive(single_quoted, "blocks");
        assert_eq!(result.as_ref(), single_quoted);
    }

    #[test]
    fn always_interactive_group_is_unconditional() {
        let result = ensure_client_directive(INERT, "animations");
        assert!(result.starts_with(CLIENT_DIRECTIVE));
    }

    #[test]
    fn inert_source_is_unchanged() {
        let result = ensure_client_directive(INERT, "blocks");
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result.as_ref(), INERT);
    }

    #[test]
    fn detects_react_hooks() {
        let source = "const [open, setOpen] = useState(false);\n";
        assert_eq!(DirectiveRules::new().classify(source), Some("react-hooks"));
        assert!(ensure_client_directive(source, "blocks").starts_with(CLIENT_DIRECTIVE));
    }

    #[test]
    fn hook_name_without_call_does_not_match() {
        let source = "// mentions useState in prose only\n";
        assert_eq!(DirectiveRules::new().classify(source), None);
    }

    #[test]
    fn detects_browser_globals_with_word_boundary() {
        let source = "const width = window.innerWidth;\n";
        assert_eq!(
            DirectiveRules::new().classify(source),
            Some("browser-globals")
        );

        // Identifier containing the word is not a match.
        let source = "const windowed = true;\n";
        assert_eq!(DirectiveRules::new().classify(source), None);
    }

    #[test]
    fn detects_event_handler_attributes() {
        let source = "<button onClick={() => setOpen(true)}>go</button>\n";
        assert_eq!(
            DirectiveRules::new().classify(source),
            Some("event-handlers")
        );
    }

    #[test]
    fn detects_observer_apis() {
        let source = "const observer = new IntersectionObserver(callback);\n";
        assert_eq!(
            DirectiveRules::new().classify(source),
            Some("observer-apis")
        );

        let source = "requestAnimationFrame(tick);\n";
        assert_eq!(
            DirectiveRules::new().classify(source),
            Some("observer-apis")
        );
    }

    #[test]
    fn detects_animation_runtime_imports() {
        let source = "import { motion } from \"framer-motion\";\nexport const x = 1;\n";
        assert_eq!(
            DirectiveRules::new().classify(source),
            Some("animation-imports")
        );

        let source = "import { animate } from 'motion/react';\n";
        assert_eq!(
            DirectiveRules::new().classify(source),
            Some("animation-imports")
        );
    }

    #[test]
    fn first_matching_rule_wins() {
        let source = "useState(0); window.alert(1);\n";
        assert_eq!(DirectiveRules::new().classify(source), Some("react-hooks"));
    }

    #[test]
    fn directive_is_prepended_once() {
        let source = "const x = window.location.href;\n";
        let once = ensure_client_directive(source, "blocks");
        let twice = ensure_client_directive(&once, "blocks");
        assert_eq!(once.as_ref(), twice.as_ref());
    }
}
