//! Builtin option table for Primer CSS modules.
//!
//! Each entry names one option of the module generator and declares how
//! it may be supplied: as a positional argument, as a command flag, or
//! through an interactive prompt. Entry order matters; derived defaults
//! read only options declared before them.

use crate::error::Result;
use crate::option::{ArgumentSpec, DefaultValue, FlagSpec, OptionSpec, PromptSpec};
use crate::resolved::ResolvedValues;
use crate::rules::{RuleContext, ValueRule, Verdict};
use crate::value::OptionValue;
use async_trait::async_trait;
use gen_text::{capitalize, strip_primer_prefix};

/// Meta-packages a module can be registered under.
pub const META_PACKAGES: &[&str] = &[
    "primer-css",
    "primer-core",
    "primer-product",
    "primer-marketing",
];

/// Recognized module type names.
pub const MODULE_TYPES: &[&str] = &["components", "objects", "utilities", "meta", "tools"];

const CATEGORY_CHOICES: &[&str] = &["core", "product", "marketing", "meta", ""];

/// Accepts module names containing the substring `primer`.
#[derive(Debug, Default)]
pub struct ModuleNameRule;

#[async_trait]
impl ValueRule for ModuleNameRule {
    async fn check(&self, candidate: &OptionValue, _ctx: &RuleContext<'_>) -> Result<Verdict> {
        let name = candidate.as_text().unwrap_or("");
        if name.contains("primer") {
            Ok(Verdict::Accept)
        } else {
            Ok(Verdict::reject("Module names must include \"primer\""))
        }
    }
}

/// Accepts an empty docs path, or one that exists on disk.
///
/// A failing existence check is a collaborator fault and surfaces as an
/// error, never as a rejection.
#[derive(Debug, Default)]
pub struct DocsPathRule;

#[async_trait]
impl ValueRule for DocsPathRule {
    async fn check(&self, candidate: &OptionValue, ctx: &RuleContext<'_>) -> Result<Verdict> {
        let path = candidate.as_text().unwrap_or("");
        if path.is_empty() {
            return Ok(Verdict::Accept);
        }
        tracing::debug!(path, "checking docs path");
        if ctx.probe(path).await? {
            Ok(Verdict::Accept)
        } else {
            Ok(Verdict::reject(format!(
                "No such file: \"{}\" in {}",
                path,
                ctx.cwd.display()
            )))
        }
    }
}

/// Title default: the module name without its `primer-` prefix,
/// capitalized. Reads the `module` entry of the resolved mapping.
fn default_title(resolved: &ResolvedValues) -> OptionValue {
    let module = resolved.get_text("module").unwrap_or("");
    OptionValue::Text(capitalize(strip_primer_prefix(module)))
}

/// Dependents default: `primer-css` plus the meta-package matching the
/// resolved `category`. The `meta` category and the empty-string choice
/// add no further package.
fn default_dependents(resolved: &ResolvedValues) -> OptionValue {
    let mut packages = vec!["primer-css".to_string()];
    if let Some(category) = resolved.get_text("category") {
        if category != "meta" && !category.is_empty() {
            packages.push(format!("primer-{category}"));
        }
    }
    OptionValue::List(packages)
}

/// The Primer module options, in resolution order.
pub fn primer_options() -> Vec<(String, OptionSpec)> {
    let mut options = Vec::new();
    let mut add = |name: &str, spec: OptionSpec| options.push((name.to_string(), spec));

    // The module name on npm. The only positional; prompted for when
    // not supplied on the command line.
    add(
        "module",
        OptionSpec::new()
            .with_argument(ArgumentSpec::optional("The name of your module (on npm)"))
            .with_prompt(
                PromptSpec::input("What should the module name be (on npm)?")
                    .with_display_name("module")
                    .with_rule(ModuleNameRule),
            ),
    );

    // The module type. Only CSS modules are generated today.
    add(
        "type",
        OptionSpec::new().with_flag(FlagSpec::text().with_default("css")),
    );

    // The human-readable title.
    add(
        "title",
        OptionSpec::new()
            .with_flag(FlagSpec::text().with_alias('t'))
            .with_prompt(
                PromptSpec::input("What should the title be (for humans)?")
                    .with_default(DefaultValue::Derived(default_title)),
            ),
    );

    add(
        "description",
        OptionSpec::new().with_flag(FlagSpec::text()).with_prompt(
            PromptSpec::input("Describe your module in a single sentence.")
                .with_hint("(This will go into the package.json and README.md.)")
                .with_default(DefaultValue::Literal(OptionValue::from(
                    "TODO: fill in this description later",
                ))),
        ),
    );

    add(
        "category",
        OptionSpec::new().with_flag(FlagSpec::text()).with_prompt(
            PromptSpec::select("Which meta-package does this belong to?", CATEGORY_CHOICES)
                .with_default(DefaultValue::Literal(OptionValue::from("core"))),
        ),
    );

    add(
        "module_type",
        OptionSpec::new().with_flag(FlagSpec::text()).with_prompt(
            PromptSpec::select("What type of module is this?", MODULE_TYPES)
                .with_default(DefaultValue::ChoiceIndex(0)),
        ),
    );

    // Supplying --dependents (or --no-dependents) skips the prompt.
    add(
        "dependents",
        OptionSpec::new()
            .with_flag(FlagSpec::boolean().with_description(
                "Update dependent package.json files (use --no-dependents to disable)",
            ))
            .with_prompt(
                PromptSpec::multi_select(
                    "Which meta-package(s) should we add this to?",
                    META_PACKAGES,
                )
                .with_default(DefaultValue::Derived(default_dependents)),
            ),
    );

    add(
        "docs",
        OptionSpec::new().with_flag(FlagSpec::text()).with_prompt(
            PromptSpec::input("Where can we find the docs?")
                .with_hint("(We'll read this file from the path you provide.)")
                .with_rule(DocsPathRule),
        ),
    );

    add(
        "status",
        OptionSpec::new().with_flag(FlagSpec::text().with_default("Experimental")),
    );

    add(
        "todo",
        OptionSpec::new().with_flag(
            FlagSpec::boolean()
                .with_description("Output TODO reminders (use --no-todo to disable)")
                .with_default(true),
        ),
    );

    add(
        "verbose",
        OptionSpec::new().with_flag(
            FlagSpec::boolean()
                .with_description("Output more useful debugging info")
                .with_alias('v'),
        ),
    );

    options
}
