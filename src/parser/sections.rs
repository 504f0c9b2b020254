//! Classifies the lines of one block into ingredients and instructions.
//!
//! Classification is a small state machine. Each non-blank line is first run
//! through [`RULES`] in order; the first rule whose predicate holds decides
//! the next section and whether the line itself is data. The line is then
//! appended to whichever section is current.

use regex::Regex;
use std::sync::LazyLock;

/// Leading "digits, optional dot, whitespace", e.g. `2. ` or `10 `.
static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.?\s+").expect("numbered-line pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    None,
    Ingredients,
    Instructions,
}

/// What a matching rule does to the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Switch section and drop the line, it is only a label
    Label(Section),
    /// Switch section and keep the line as data
    Enter(Section),
}

/// A line as seen by the rule predicates.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    pub text: &'a str,
    lower: &'a str,
}

impl Line<'_> {
    fn mentions(&self, needle: &str) -> bool {
        self.lower.contains(needle)
    }

    fn mentions_instructions(&self) -> bool {
        self.mentions("instruction") || self.mentions("step")
    }

    fn is_numbered(&self) -> bool {
        NUMBERED.is_match(self.text)
    }
}

pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&Line<'_>, Section) -> bool,
    pub effect: Effect,
}

pub static RULES: &[Rule] = &[
    Rule {
        name: "ingredients-label",
        applies: ingredients_label,
        effect: Effect::Label(Section::Ingredients),
    },
    Rule {
        name: "numbered-step-label",
        applies: numbered_step_label,
        effect: Effect::Enter(Section::Instructions),
    },
    Rule {
        name: "instructions-label",
        applies: instructions_label,
        effect: Effect::Label(Section::Instructions),
    },
    Rule {
        name: "numbered-line",
        applies: numbered_line,
        effect: Effect::Enter(Section::Instructions),
    },
    Rule {
        name: "bulleted-line",
        applies: bulleted_line,
        effect: Effect::Enter(Section::Ingredients),
    },
];

fn ingredients_label(line: &Line<'_>, _: Section) -> bool {
    line.mentions("ingredient")
}

fn numbered_step_label(line: &Line<'_>, _: Section) -> bool {
    line.mentions_instructions() && line.is_numbered()
}

fn instructions_label(line: &Line<'_>, _: Section) -> bool {
    line.mentions_instructions()
}

fn numbered_line(line: &Line<'_>, section: Section) -> bool {
    section != Section::Instructions && line.is_numbered()
}

fn bulleted_line(line: &Line<'_>, section: Section) -> bool {
    section == Section::None && line.text.starts_with('*')
}

/// First rule matching `text` in the given section, if any.
pub fn matching_rule(text: &str, section: Section) -> Option<&'static Rule> {
    let lower = text.to_lowercase();
    let line = Line { text, lower: &lower };
    RULES.iter().find(|rule| (rule.applies)(&line, section))
}

/// Lines of one block sorted into sections.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Sections {
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub notes: Vec<String>,
}

impl Sections {
    pub fn is_unstructured(&self) -> bool {
        self.ingredients.is_empty() && self.instructions.is_empty()
    }
}

/// Run the section state machine over already trimmed, non-blank lines.
pub fn classify<'a>(lines: impl IntoIterator<Item = &'a str>) -> Sections {
    let mut sections = Sections::default();
    let mut current = Section::None;

    for text in lines {
        if let Some(rule) = matching_rule(text, current) {
            match rule.effect {
                Effect::Label(next) => {
                    current = next;
                    continue;
                }
                Effect::Enter(next) => current = next,
            }
        }

        match current {
            Section::Ingredients => sections.ingredients.push(strip_bullet(text).to_string()),
            Section::Instructions => sections.instructions.push(strip_number(text).to_string()),
            Section::None => sections.notes.push(text.to_string()),
        }
    }

    sections
}

fn strip_bullet(text: &str) -> &str {
    match text.strip_prefix('*') {
        Some(rest) => rest.trim(),
        None => text,
    }
}

fn strip_number(text: &str) -> &str {
    match NUMBERED.find(text) {
        Some(prefix) => text[prefix.end()..].trim(),
        None => text,
    }
}
