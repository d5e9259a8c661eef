//! Scripted prompt engine.

use async_trait::async_trait;
use gen_resolve::{PromptEngine, PromptError, PromptRequest};
use gen_schema::{OptionValue, PromptKind};
use std::collections::VecDeque;

/// Owned snapshot of one presented prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRecord {
    pub option: String,
    pub display_name: Option<String>,
    pub message: String,
    pub hint: Option<String>,
    pub kind: PromptKind,
    pub choices: Vec<String>,
    pub default: Option<OptionValue>,
}

/// Prompt engine driven by a queue of canned answers.
///
/// Records every request and every rejection message, so tests can
/// assert on what was asked, in what order, and with which computed
/// defaults. Running out of answers is a [`PromptError`], which makes
/// an unexpected extra prompt fail the test loudly.
#[derive(Debug, Default)]
pub struct ScriptedPrompts {
    answers: VecDeque<OptionValue>,
    records: Vec<PromptRecord>,
    rejections: Vec<String>,
}

impl ScriptedPrompts {
    /// An engine with no queued answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the next answer.
    pub fn answer(mut self, value: impl Into<OptionValue>) -> Self {
        self.answers.push_back(value.into());
        self
    }

    /// Prompts presented so far, in order.
    pub fn records(&self) -> &[PromptRecord] {
        &self.records
    }

    /// Rejection messages relayed so far, in order.
    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }
}

#[async_trait]
impl PromptEngine for ScriptedPrompts {
    async fn prompt(
        &mut self,
        request: PromptRequest<'_>,
    ) -> std::result::Result<OptionValue, PromptError> {
        self.records.push(PromptRecord {
            option: request.option.to_string(),
            display_name: request.display_name.map(str::to_string),
            message: request.message.to_string(),
            hint: request.hint.map(str::to_string),
            kind: request.kind,
            choices: request.choices.to_vec(),
            default: request.default.clone(),
        });
        self.answers.pop_front().ok_or_else(|| {
            PromptError::new(format!("no scripted answer left for {}", request.option))
        })
    }

    async fn reject(&mut self, message: &str) -> std::result::Result<(), PromptError> {
        self.rejections.push(message.to_string());
        Ok(())
    }
}
