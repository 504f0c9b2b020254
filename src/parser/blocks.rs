//! Splits a suggestion response into candidate recipe blocks.

/// A contiguous span of lines belonging to one candidate recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    /// Text after the `## ` marker, `None` for a leading blob without one
    pub heading: Option<&'a str>,
    /// Every line after the heading, blank lines included
    pub lines: Vec<&'a str>,
}

impl Block<'_> {
    pub fn content_lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(|line| line.trim()).filter(|line| !line.is_empty())
    }

    pub fn is_blank(&self) -> bool {
        self.heading.is_none() && self.content_lines().next().is_none()
    }
}

/// Returns the heading text when `line` starts with the `## ` marker.
///
/// The marker includes its space: a bare `##` is ordinary text.
pub fn heading_text(line: &str) -> Option<&str> {
    line.strip_prefix("## ").map(str::trim)
}

/// Whether a heading names a section of the enclosing recipe rather than a new one.
pub fn is_section_heading(text: &str) -> bool {
    const SECTION_LABELS: &[&str] = &[
        "ingredients",
        "ingredient",
        "required ingredients",
        "instructions",
        "instruction",
        "steps",
        "step",
    ];

    let label = text
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    SECTION_LABELS.contains(&label.as_str())
}

pub fn has_heading(text: &str) -> bool {
    text.lines().any(|line| heading_text(line).is_some())
}

/// Split `text` at every recipe heading, each block keeping its own heading.
///
/// Section headings (`## Ingredients`, `## Steps`) stay inside the block that
/// encloses them. Blank blocks are not returned.
pub fn split_blocks(text: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut current = Block {
        heading: None,
        lines: Vec::new(),
    };

    for line in text.lines() {
        match heading_text(line) {
            Some(title) if !is_section_heading(title) => {
                let finished = std::mem::replace(
                    &mut current,
                    Block {
                        heading: Some(title),
                        lines: Vec::new(),
                    },
                );
                if !finished.is_blank() {
                    blocks.push(finished);
                }
            }
            _ => current.lines.push(line),
        }
    }

    if !current.is_blank() {
        blocks.push(current);
    }

    blocks
}
