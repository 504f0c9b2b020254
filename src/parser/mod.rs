//! Tolerant parser for recipe suggestions written in loose markdown.
//!
//! The expected shape is a run of blocks, each introduced by `## Title` and
//! followed by `* ingredient` bullets and `1. step` lines, but the generator
//! is free to drift from it. Parsing never fails: blocks that cannot be
//! structured come back as prose instructions, and a response with no
//! headings at all becomes a single "Note from Chef" record.

mod blocks;
mod sections;

pub use blocks::{has_heading, heading_text, is_section_heading, split_blocks, Block};
pub use sections::{classify, matching_rule, Effect, Line, Rule, Section, Sections, RULES};

use crate::model::{RecipeRecord, UNTITLED_RECIPE};
use log::{debug, info, warn};

/// Parse a suggestion response into recipe records, in response order.
pub fn parse(raw_text: &str) -> Vec<RecipeRecord> {
    let trimmed = raw_text.trim();
    if trimmed.is_empty() {
        debug!("Recipe parser: nothing to parse");
        return Vec::new();
    }

    // Headings are looked up before trimming so a trailing "## " keeps its marker
    if !has_heading(raw_text) {
        info!("Recipe parser: response is a single message, not recipes");
        return vec![RecipeRecord::chef_note(trimmed)];
    }

    let records: Vec<RecipeRecord> = split_blocks(raw_text).iter().map(parse_block).collect();
    debug!("Recipe parser: parsed {} recipe blocks", records.len());
    records
}

/// Turn one block into a record, falling back to prose when no section was found.
pub fn parse_block(block: &Block<'_>) -> RecipeRecord {
    let title = match block.heading {
        Some(title) if !title.is_empty() => title,
        _ => UNTITLED_RECIPE,
    };

    let mut record = RecipeRecord::new(title);
    let sections = classify(block.content_lines());

    if sections.is_unstructured() {
        let lines: Vec<String> = block.content_lines().map(String::from).collect();
        if !lines.is_empty() {
            warn!(
                "Recipe parser: no sections found for \"{}\", treating {} lines as instructions",
                title,
                lines.len()
            );
        }
        record.instructions = lines;
        return record;
    }

    record.ingredients = sections.ingredients;
    record.instructions = sections.instructions;
    record.notes = sections.notes;
    record
}
