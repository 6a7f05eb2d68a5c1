//! Page and block model of a manuscript, and its Markdown form.

use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ReportError, ReportResult};

pub const FOOTER_PREFIX: &str = "Prophetic Manuscript";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Subheading {
        text: String,
    },
    /// A labelled value with an optional explanatory note.
    Row {
        label: String,
        value: String,
        note: Option<String>,
    },
    Paragraph {
        text: String,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub heading: String,
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            blocks: Vec::new(),
        }
    }

    pub fn subheading(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Subheading { text: text.into() });
        self
    }

    pub fn row(mut self, label: impl Into<String>, value: impl ToString) -> Self {
        self.blocks.push(Block::Row {
            label: label.into(),
            value: value.to_string(),
            note: None,
        });
        self
    }

    pub fn row_with_note(
        mut self,
        label: impl Into<String>,
        value: impl ToString,
        note: impl Into<String>,
    ) -> Self {
        self.blocks.push(Block::Row {
            label: label.into(),
            value: value.to_string(),
            note: Some(note.into()),
        });
        self
    }

    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Paragraph { text: text.into() });
        self
    }

    /// Rows on this page, in order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str)> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Row { label, value, .. } => Some((label.as_str(), value.as_str())),
            _ => None,
        })
    }

    fn write_markdown(&self, out: &mut String) {
        let _ = writeln!(out, "## {}\n", self.heading.to_uppercase());
        for block in &self.blocks {
            match block {
                Block::Subheading { text } => {
                    let _ = writeln!(out, "### {}\n", text.to_uppercase());
                }
                Block::Row { label, value, note } => {
                    let _ = writeln!(out, "- **{label}:** {value}");
                    if let Some(note) = note {
                        let _ = writeln!(out, "  _{note}_");
                    }
                }
                Block::Paragraph { text } => {
                    let _ = writeln!(out, "\n{text}\n");
                }
            }
        }
    }
}

/// An unnumbered cover followed by numbered pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manuscript {
    pub cover: Page,
    pub pages: Vec<Page>,
}

impl Manuscript {
    /// Look up a numbered page by heading.
    pub fn page(&self, heading: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.heading == heading)
    }

    /// Cover and pages separated by rules; every numbered page ends with a
    /// `Page n` footer.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# {}\n", self.cover.heading.to_uppercase());
        for block in &self.cover.blocks {
            match block {
                Block::Subheading { text } | Block::Paragraph { text } => {
                    let _ = writeln!(out, "{text}\n");
                }
                Block::Row { label, value, .. } => {
                    let _ = writeln!(out, "{label}: **{value}**\n");
                }
            }
        }

        for (i, page) in self.pages.iter().enumerate() {
            out.push_str("---\n\n");
            page.write_markdown(&mut out);
            let _ = writeln!(out, "\n_{FOOTER_PREFIX} | Page {}_\n", i + 1);
        }
        out
    }

    /// Write the Markdown form to `path`.
    pub fn write_to(&self, path: &Path) -> ReportResult<()> {
        std::fs::write(path, self.to_markdown()).map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), pages = self.pages.len(), "manuscript written");
        Ok(())
    }
}
