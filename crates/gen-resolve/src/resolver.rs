//! The two-pass option resolver.
//!
//! One [`Resolver`] run walks the registry in declaration order twice.
//! The immediate pass settles everything the command line already
//! answers (positional arguments, flags, negated booleans) and queues a
//! prompt job for each option still open. The prompt pass then executes
//! the queued jobs strictly in that same order, so a later prompt's
//! derived default or validator can read every earlier answer.

use crate::engine::{PromptEngine, PromptRequest};
use crate::error::{ResolveError, Result};
use crate::flags;
use crate::input::CliValues;
use gen_schema::{
    DefaultValue, OptionValue, PathProbe, PromptSpec, ResolvedValues, RuleContext,
    SchemaRegistry, Verdict,
};
use std::path::PathBuf;

/// Resolves option values for one invocation.
///
/// Owns nothing global: the registry is shared read-only data, the
/// engine and probe are collaborators supplied by the caller, and the
/// resolved mapping is created fresh per [`Resolver::resolve`] call.
pub struct Resolver<'a> {
    registry: &'a SchemaRegistry,
    engine: &'a mut dyn PromptEngine,
    probe: &'a dyn PathProbe,

    /// Working directory reported in validation messages.
    /// Defaults to the process working directory; overridable for tests.
    cwd: PathBuf,
}

impl<'a> Resolver<'a> {
    /// Builds a resolver over the given registry and collaborators.
    pub fn new(
        registry: &'a SchemaRegistry,
        engine: &'a mut dyn PromptEngine,
        probe: &'a dyn PathProbe,
    ) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            registry,
            engine,
            probe,
            cwd,
        }
    }

    /// Overrides the working directory used in validation messages.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    /// Resolves every registered option against the supplied input.
    ///
    /// Fails fast on a missing required argument (before any prompt is
    /// presented) and on collaborator faults. Validation rejections
    /// never surface here; they re-present the affected prompt until an
    /// answer is accepted.
    pub async fn resolve(&mut self, input: &CliValues) -> Result<ResolvedValues> {
        let registry = self.registry;
        let mut resolved = ResolvedValues::new();
        let mut queue: Vec<(&str, &PromptSpec)> = Vec::new();
        let mut next_positional = 0usize;

        for (name, spec) in registry.specs_in_order() {
            if let Some(argument) = &spec.argument {
                let slot = next_positional;
                next_positional += 1;
                // A supplied value of mismatched shape counts as absent.
                let supplied = input
                    .positional(slot)
                    .and_then(|raw| flags::coerce_positional(argument.kind, raw));
                match supplied {
                    Some(value) => {
                        tracing::debug!(option = name, %value, "resolved from argument");
                        resolved.set(name, value);
                        continue;
                    }
                    None if argument.required => {
                        return Err(ResolveError::MissingArgument {
                            name: name.to_string(),
                        });
                    }
                    None => {}
                }
            }

            if let Some(flag) = &spec.flag {
                if let Some(value) = flags::lookup(name, flag, input) {
                    tracing::debug!(option = name, %value, "resolved from flag");
                    resolved.set(name, value);
                    continue;
                }
            }

            if let Some(prompt) = &spec.prompt {
                queue.push((name, prompt));
                continue;
            }

            if let Some(default) = spec.flag.as_ref().and_then(|flag| flag.default.as_ref()) {
                tracing::debug!(option = name, value = %default, "resolved from static default");
                resolved.set(name, default.clone());
                continue;
            }

            tracing::debug!(option = name, "left unresolved");
        }

        for (name, prompt) in queue {
            self.run_prompt(name, prompt, &mut resolved).await?;
        }

        Ok(resolved)
    }

    /// Presents one queued prompt until an answer is accepted.
    async fn run_prompt(
        &mut self,
        name: &str,
        prompt: &PromptSpec,
        resolved: &mut ResolvedValues,
    ) -> Result<()> {
        // Computed once; rejections re-present the same default.
        let default = effective_default(name, prompt, resolved)?;

        loop {
            let request = PromptRequest {
                option: name,
                display_name: prompt.display_name.as_deref(),
                message: &prompt.message,
                hint: prompt.hint.as_deref(),
                kind: prompt.kind,
                choices: &prompt.choices,
                default: default.clone(),
            };
            let candidate = self.engine.prompt(request).await?;

            let verdict = match &prompt.validate {
                Some(rule) => {
                    let ctx = RuleContext {
                        resolved,
                        paths: self.probe,
                        cwd: &self.cwd,
                    };
                    rule.check(&candidate, &ctx).await?
                }
                None => Verdict::Accept,
            };

            match verdict {
                Verdict::Accept => {
                    tracing::debug!(option = name, %candidate, "resolved from prompt");
                    resolved.set(name, candidate);
                    return Ok(());
                }
                Verdict::Reject { message } => {
                    tracing::warn!(option = name, %message, "prompt answer rejected");
                    self.engine.reject(&message).await?;
                }
            }
        }
    }
}

/// The default presented with a prompt, in its final literal form.
///
/// Choice indexes are translated here, against the finalized choice
/// list; derived defaults read the mapping resolved so far.
fn effective_default(
    name: &str,
    prompt: &PromptSpec,
    resolved: &ResolvedValues,
) -> Result<Option<OptionValue>> {
    match &prompt.default {
        None => Ok(None),
        Some(DefaultValue::Literal(value)) => Ok(Some(value.clone())),
        Some(DefaultValue::ChoiceIndex(index)) => {
            let choice =
                prompt
                    .choices
                    .get(*index)
                    .ok_or_else(|| ResolveError::DefaultIndexOutOfRange {
                        name: name.to_string(),
                        index: *index,
                        len: prompt.choices.len(),
                    })?;
            Ok(Some(OptionValue::from(choice.as_str())))
        }
        Some(DefaultValue::Derived(derive)) => Ok(Some(derive(resolved))),
    }
}
