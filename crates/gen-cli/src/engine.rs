//! Interactive prompts for unresolved options.
//!
//! Uses dialoguer for terminal-based input and selection.

use async_trait::async_trait;
use colored::Colorize;
use dialoguer::{Input, MultiSelect, Select};
use gen_resolve::{PromptEngine, PromptError, PromptRequest};
use gen_schema::{OptionValue, PromptKind};

/// Prompt engine over the controlling terminal.
pub struct DialoguerEngine;

impl DialoguerEngine {
    /// The prompt text: the message, with the hint as a styled second
    /// line when present.
    fn render_message(request: &PromptRequest<'_>) -> String {
        match request.hint {
            Some(hint) => format!("{}\n{}", request.message, hint.yellow()),
            None => request.message.to_string(),
        }
    }

    fn input(request: &PromptRequest<'_>) -> std::result::Result<OptionValue, PromptError> {
        let mut input = Input::<String>::new()
            .with_prompt(Self::render_message(request))
            .allow_empty(true);
        if let Some(OptionValue::Text(default)) = &request.default {
            input = input.default(default.clone());
        }
        let answer = input.interact_text().map_err(prompt_failed)?;
        Ok(OptionValue::Text(answer))
    }

    fn select(request: &PromptRequest<'_>) -> std::result::Result<OptionValue, PromptError> {
        let mut select = Select::new()
            .with_prompt(Self::render_message(request))
            .items(request.choices);
        if let Some(OptionValue::Text(default)) = &request.default {
            if let Some(position) = request.choices.iter().position(|choice| choice == default) {
                select = select.default(position);
            }
        }
        let index = select.interact().map_err(prompt_failed)?;
        Ok(OptionValue::Text(request.choices[index].clone()))
    }

    fn multi_select(request: &PromptRequest<'_>) -> std::result::Result<OptionValue, PromptError> {
        let mut multi = MultiSelect::new()
            .with_prompt(Self::render_message(request))
            .items(request.choices);
        if let Some(OptionValue::List(defaults)) = &request.default {
            let checked: Vec<bool> = request
                .choices
                .iter()
                .map(|choice| defaults.contains(choice))
                .collect();
            multi = multi.defaults(&checked);
        }
        let indices = multi.interact().map_err(prompt_failed)?;
        Ok(OptionValue::List(
            indices
                .into_iter()
                .map(|index| request.choices[index].clone())
                .collect(),
        ))
    }
}

#[async_trait]
impl PromptEngine for DialoguerEngine {
    async fn prompt(
        &mut self,
        request: PromptRequest<'_>,
    ) -> std::result::Result<OptionValue, PromptError> {
        match request.kind {
            PromptKind::Input => Self::input(&request),
            PromptKind::Select => Self::select(&request),
            PromptKind::MultiSelect => Self::multi_select(&request),
        }
    }

    async fn reject(&mut self, message: &str) -> std::result::Result<(), PromptError> {
        eprintln!("{} {}", ">>".red().bold(), message.red());
        Ok(())
    }
}

fn prompt_failed(err: dialoguer::Error) -> PromptError {
    PromptError::new(err.to_string())
}
