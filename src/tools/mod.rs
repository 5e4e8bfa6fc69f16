pub mod case;
pub mod formatting;
pub mod manipulation;
pub mod sorting;
pub mod style_map;
pub mod styling;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownTool;

/// Identifier of a text transform; the dispatch key of [`apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolId {
    #[serde(rename = "removeWhitespace")]
    TrimWhitespace,
    #[serde(rename = "removeEmptyLines")]
    RemoveEmptyLines,
    #[serde(rename = "uppercase")]
    Uppercase,
    #[serde(rename = "lowercase")]
    Lowercase,
    #[serde(rename = "sentenceCase")]
    SentenceCase,
    #[serde(rename = "bold")]
    Bold,
    #[serde(rename = "italic")]
    Italic,
    #[serde(rename = "underline")]
    Underline,
    #[serde(rename = "sortAZ")]
    SortAZ,
    #[serde(rename = "sortZA")]
    SortZA,
    #[serde(rename = "lineNumbers")]
    LineNumbers,
    #[serde(rename = "tabsToSpaces")]
    TabsToSpaces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolCategory {
    Formatting,
    Case,
    Sorting,
    Manipulation,
    Styling,
    Ai,
}

impl ToolCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ToolCategory::Formatting => "Formatting",
            ToolCategory::Case => "Case",
            ToolCategory::Sorting => "Sorting",
            ToolCategory::Manipulation => "Manipulation",
            ToolCategory::Styling => "Styling",
            ToolCategory::Ai => "AI Features",
        }
    }
}

/// Static description of a tool shown by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub id: ToolId,
    pub label: &'static str,
    pub category: ToolCategory,
    pub description: &'static str,
}

const fn tool(
    id: ToolId,
    label: &'static str,
    category: ToolCategory,
    description: &'static str,
) -> ToolDescriptor {
    ToolDescriptor { id, label, category, description }
}

/// The tool catalog, in display order.
pub static TOOLS: [ToolDescriptor; 12] = [
    tool(ToolId::TrimWhitespace, "Trim Whitespace", ToolCategory::Formatting, "Remove extra spaces and tabs."),
    tool(ToolId::RemoveEmptyLines, "Remove Empty Lines", ToolCategory::Formatting, "Delete lines with no content."),
    tool(ToolId::Uppercase, "UPPERCASE", ToolCategory::Case, "Convert all text to uppercase."),
    tool(ToolId::Lowercase, "lowercase", ToolCategory::Case, "Convert all text to lowercase."),
    tool(ToolId::SentenceCase, "Sentence case", ToolCategory::Case, "Capitalize first letter of sentences."),
    tool(ToolId::Bold, "Bold Text", ToolCategory::Styling, "Convert text to Unicode Bold."),
    tool(ToolId::Italic, "Italic Text", ToolCategory::Styling, "Convert text to Unicode Italic."),
    tool(ToolId::Underline, "Underline", ToolCategory::Styling, "Add Unicode underline."),
    tool(ToolId::SortAZ, "Sort Lines A-Z", ToolCategory::Sorting, "Sort lines alphabetically."),
    tool(ToolId::SortZA, "Reverse Sort Z-A", ToolCategory::Sorting, "Sort lines reverse alphabetically."),
    tool(ToolId::LineNumbers, "Add Line Numbers", ToolCategory::Manipulation, "Add 1. 2. 3. to each line."),
    tool(ToolId::TabsToSpaces, "Tabs to Spaces", ToolCategory::Manipulation, "Convert tab characters to 4 spaces."),
];

impl ToolId {
    pub fn all() -> impl Iterator<Item = ToolId> {
        TOOLS.iter().map(|t| t.id)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolId::TrimWhitespace => "removeWhitespace",
            ToolId::RemoveEmptyLines => "removeEmptyLines",
            ToolId::Uppercase => "uppercase",
            ToolId::Lowercase => "lowercase",
            ToolId::SentenceCase => "sentenceCase",
            ToolId::Bold => "bold",
            ToolId::Italic => "italic",
            ToolId::Underline => "underline",
            ToolId::SortAZ => "sortAZ",
            ToolId::SortZA => "sortZA",
            ToolId::LineNumbers => "lineNumbers",
            ToolId::TabsToSpaces => "tabsToSpaces",
        }
    }

    pub fn parse(id: &str) -> Option<ToolId> {
        ToolId::all().find(|tool| tool.as_str() == id)
    }

    pub fn descriptor(&self) -> &'static ToolDescriptor {
        // TOOLS holds one entry per variant, in declaration order.
        &TOOLS[*self as usize]
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolId {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolId::parse(s).ok_or_else(|| UnknownTool(s.to_string()))
    }
}

/// Run one transform over `text`. Empty input always gives empty output.
pub fn apply(text: &str, tool: ToolId) -> String {
    if text.is_empty() {
        return String::new();
    }

    match tool {
        ToolId::TrimWhitespace => formatting::trim_whitespace(text),
        ToolId::RemoveEmptyLines => formatting::remove_empty_lines(text),
        ToolId::Uppercase => case::uppercase(text),
        ToolId::Lowercase => case::lowercase(text),
        ToolId::SentenceCase => case::sentence_case(text),
        ToolId::Bold => styling::bold(text),
        ToolId::Italic => styling::italic(text),
        ToolId::Underline => styling::underline(text),
        ToolId::SortAZ => sorting::sort_ascending(text),
        ToolId::SortZA => sorting::sort_descending(text),
        ToolId::LineNumbers => manipulation::line_numbers(text),
        ToolId::TabsToSpaces => manipulation::tabs_to_spaces(text),
    }
}

/// Like [`apply`], keyed by the wire identifier. Unknown identifiers return
/// the input unchanged.
pub fn apply_by_id(text: &str, id: &str) -> String {
    match ToolId::parse(id) {
        Some(tool) => apply(text, tool),
        None => {
            log::debug!("unknown tool identifier {:?}, leaving text unchanged", id);
            text.to_string()
        }
    }
}
