//! Option specifications: the facets one configuration value may carry.
//!
//! Every option is declared as an [`OptionSpec`] with up to three facets.
//! An `argument` facet accepts a positional value, a `flag` facet accepts
//! a named command flag, and a `prompt` facet asks interactively when
//! neither supplied the value.

use crate::resolved::ResolvedValues;
use crate::rules::ValueRule;
use crate::value::OptionValue;
use std::fmt;
use std::sync::Arc;

/// What kind of raw value an argument or flag accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A free-form string.
    Text,
    /// A boolean; flags of this kind accept a `no-` negated spelling.
    Bool,
}

/// Positional argument facet.
#[derive(Debug, Clone)]
pub struct ArgumentSpec {
    /// Help text shown by the CLI.
    pub description: String,
    /// Value shape accepted.
    pub kind: ValueKind,
    /// Whether the run aborts when the positional is absent.
    pub required: bool,
}

impl ArgumentSpec {
    /// An optional text positional.
    pub fn optional(description: &str) -> Self {
        Self {
            description: description.to_string(),
            kind: ValueKind::Text,
            required: false,
        }
    }

    /// A required text positional. A missing value is a fatal
    /// precondition failure, never a prompt.
    pub fn required(description: &str) -> Self {
        Self {
            required: true,
            ..Self::optional(description)
        }
    }

    /// Override the accepted value shape.
    pub fn with_kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Command flag facet.
///
/// The flag spelling derives from the option name with underscores
/// rendered as hyphens; `alias` is a single-character shorthand.
#[derive(Debug, Clone)]
pub struct FlagSpec {
    /// Help text shown by the CLI.
    pub description: Option<String>,
    /// Value shape accepted.
    pub kind: ValueKind,
    /// Value adopted without prompting when the flag is not supplied
    /// and no prompt facet resolves the option.
    pub default: Option<OptionValue>,
    /// Single-character shorthand, e.g. `t` for `--title`.
    pub alias: Option<char>,
}

impl FlagSpec {
    /// A flag taking a text value.
    pub fn text() -> Self {
        Self {
            description: None,
            kind: ValueKind::Text,
            default: None,
            alias: None,
        }
    }

    /// A boolean flag, negatable via its `no-` spelling.
    pub fn boolean() -> Self {
        Self {
            kind: ValueKind::Bool,
            ..Self::text()
        }
    }

    /// Adds help text.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Adds a static default.
    pub fn with_default(mut self, value: impl Into<OptionValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Adds a single-character alias.
    pub fn with_alias(mut self, alias: char) -> Self {
        self.alias = Some(alias);
        self
    }
}

/// How a prompt collects its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Free-text input.
    Input,
    /// Single choice from a fixed list.
    Select,
    /// Any subset of a fixed list.
    MultiSelect,
}

/// A default computed from the values resolved before the prompt runs.
///
/// Plain function pointers cannot capture an environment, which makes the
/// contract structural: a derived default reads its explicit parameter
/// and nothing else.
pub type DeriveFn = fn(&ResolvedValues) -> OptionValue;

/// The default presented with a prompt.
#[derive(Debug, Clone)]
pub enum DefaultValue {
    /// A fixed value, captured when the prompt is queued.
    Literal(OptionValue),
    /// An index into the prompt's choices, translated to the choice text
    /// only when the prompt runs.
    ChoiceIndex(usize),
    /// Computed from the resolved-so-far mapping when the prompt runs.
    Derived(DeriveFn),
}

/// Interactive prompt facet.
#[derive(Clone)]
pub struct PromptSpec {
    /// Presentation-only label; answers always merge under the option
    /// name, never under this.
    pub display_name: Option<String>,
    /// The question shown to the user.
    pub message: String,
    /// Optional second message line (rendered styled by the CLI).
    pub hint: Option<String>,
    /// How the answer is collected.
    pub kind: PromptKind,
    /// Choice texts for `Select`/`MultiSelect` prompts.
    pub choices: Vec<String>,
    /// Default presented with the prompt.
    pub default: Option<DefaultValue>,
    /// Validation applied to each candidate answer.
    pub validate: Option<Arc<dyn ValueRule>>,
}

impl PromptSpec {
    fn new(message: &str, kind: PromptKind, choices: &[&str]) -> Self {
        Self {
            display_name: None,
            message: message.to_string(),
            hint: None,
            kind,
            choices: choices.iter().map(|c| c.to_string()).collect(),
            default: None,
            validate: None,
        }
    }

    /// A free-text prompt.
    pub fn input(message: &str) -> Self {
        Self::new(message, PromptKind::Input, &[])
    }

    /// A single-choice prompt over the given choices.
    pub fn select(message: &str, choices: &[&str]) -> Self {
        Self::new(message, PromptKind::Select, choices)
    }

    /// A multiple-choice prompt over the given choices.
    pub fn multi_select(message: &str, choices: &[&str]) -> Self {
        Self::new(message, PromptKind::MultiSelect, choices)
    }

    /// Adds a presentation label.
    pub fn with_display_name(mut self, name: &str) -> Self {
        self.display_name = Some(name.to_string());
        self
    }

    /// Adds a second message line.
    pub fn with_hint(mut self, hint: &str) -> Self {
        self.hint = Some(hint.to_string());
        self
    }

    /// Adds a default.
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Adds a validation rule.
    pub fn with_rule(mut self, rule: impl ValueRule + 'static) -> Self {
        self.validate = Some(Arc::new(rule));
        self
    }
}

impl fmt::Debug for PromptSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptSpec")
            .field("display_name", &self.display_name)
            .field("message", &self.message)
            .field("hint", &self.hint)
            .field("kind", &self.kind)
            .field("choices", &self.choices)
            .field("default", &self.default)
            .field("validate", &self.validate.is_some())
            .finish()
    }
}

/// One named option: at least one facet is present.
#[derive(Debug, Clone, Default)]
pub struct OptionSpec {
    /// Positional argument facet.
    pub argument: Option<ArgumentSpec>,
    /// Command flag facet.
    pub flag: Option<FlagSpec>,
    /// Interactive prompt facet.
    pub prompt: Option<PromptSpec>,
}

impl OptionSpec {
    /// An empty spec; chain facet builders onto it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a positional argument facet.
    pub fn with_argument(mut self, argument: ArgumentSpec) -> Self {
        self.argument = Some(argument);
        self
    }

    /// Adds a flag facet.
    pub fn with_flag(mut self, flag: FlagSpec) -> Self {
        self.flag = Some(flag);
        self
    }

    /// Adds a prompt facet.
    pub fn with_prompt(mut self, prompt: PromptSpec) -> Self {
        self.prompt = Some(prompt);
        self
    }
}
