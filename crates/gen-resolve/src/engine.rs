//! Prompt engine seam.
//!
//! The resolver computes everything a prompt needs (message, choices,
//! effective default) and hands it to a [`PromptEngine`] to present.
//! The CLI plugs in an interactive terminal engine; tests plug in a
//! scripted one.

use crate::error::PromptError;
use async_trait::async_trait;
use gen_schema::{OptionValue, PromptKind};

/// One prompt, fully computed and ready to present.
#[derive(Debug)]
pub struct PromptRequest<'a> {
    /// Option name the accepted answer merges under.
    pub option: &'a str,
    /// Presentation-only label; never used as a merge key.
    pub display_name: Option<&'a str>,
    /// Question shown to the user.
    pub message: &'a str,
    /// Optional second message line.
    pub hint: Option<&'a str>,
    /// How the answer is collected.
    pub kind: PromptKind,
    /// Choices for select and multi-select prompts.
    pub choices: &'a [String],
    /// Effective default: literals captured, choice indexes translated
    /// to their text, derived defaults already computed.
    pub default: Option<OptionValue>,
}

/// Presents prompts and relays rejection messages.
///
/// Takes `&mut self`: the interactive engine owns a terminal session and
/// scripted test engines consume queued answers.
#[async_trait]
pub trait PromptEngine: Send {
    /// Presents a prompt and returns the raw answer.
    async fn prompt(
        &mut self,
        request: PromptRequest<'_>,
    ) -> std::result::Result<OptionValue, PromptError>;

    /// Shows a validation rejection inline, before the same prompt is
    /// re-presented.
    async fn reject(&mut self, message: &str) -> std::result::Result<(), PromptError>;
}
