use crate::error::AiError;
use crate::gemini::TextGenerator;
use crate::rewriter::ToneRewriter;
use crate::tone::Tone;
use crate::tools::{self, ToolId};

/// Counters shown under the input box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    pub chars: usize,
    pub words: usize,
    pub lines: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        let blank = text.trim().is_empty();
        Self {
            chars: text.chars().count(),
            words: if blank { 0 } else { text.split_whitespace().count() },
            lines: if blank { 0 } else { text.split('\n').count() },
        }
    }
}

/// The caller's two text buffers.
///
/// Every action reads from the output when there is one, otherwise from the
/// input, and writes the output, so transforms chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    input: String,
    output: String,
}

impl Session {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: String::new(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Replace the input. Editing the source discards any previous output.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
        self.output.clear();
    }

    /// Empty the input. Unlike editing, this keeps the current output.
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn source(&self) -> &str {
        if self.output.is_empty() {
            &self.input
        } else {
            &self.output
        }
    }

    pub fn stats(&self) -> TextStats {
        TextStats::of(&self.input)
    }

    pub fn apply_tool(&mut self, tool: ToolId) {
        if self.source().is_empty() {
            return;
        }
        log::debug!("Session: applying {}", tool);
        self.output = tools::apply(self.source(), tool);
    }

    /// Apply a tool by wire identifier; unknown identifiers still write the
    /// unchanged source to the output.
    pub fn apply_tool_by_id(&mut self, id: &str) {
        if self.source().is_empty() {
            return;
        }
        self.output = tools::apply_by_id(self.source(), id);
    }

    /// Rewrite the current source. On failure both buffers are left as they were.
    pub async fn rewrite<G: TextGenerator>(
        &mut self,
        rewriter: &ToneRewriter<G>,
        tone: Tone,
    ) -> Result<(), AiError> {
        if self.source().is_empty() {
            return Ok(());
        }
        log::debug!("Session: requesting {} rewrite", tone);
        let refined = rewriter.rewrite(self.source(), tone).await?;
        self.output = refined;
        Ok(())
    }
}
