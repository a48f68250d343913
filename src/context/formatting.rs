//! Compact text renderings of the document-tree summary

use super::models::{DomNode, HeadingNode, Landmarks, SectionsFound};

/// Headings listed in the hierarchy tier
pub const MAX_HEADINGS: usize = 10;
/// Characters of heading text kept per entry
pub const MAX_HEADING_CHARS: usize = 30;
pub const MAX_NESTING_DEPTH: usize = 4;
/// Children visited per node while rendering nesting
pub const MAX_CHILDREN: usize = 5;
pub const MAX_NESTING_LINES: usize = 30;

pub const NO_HEADINGS: &str = "No headings detected";
pub const NO_SECTIONS: &str = "No sections detected";
pub const NO_DOM: &str = "No DOM structure available";

/// Indented heading outline, one line per heading
pub fn format_heading_hierarchy(headings: &[HeadingNode]) -> String {
    if headings.is_empty() {
        return NO_HEADINGS.to_string();
    }

    headings
        .iter()
        .take(MAX_HEADINGS)
        .map(|heading| {
            let level = heading.level.unwrap_or(1).max(1);
            let indent = "  ".repeat(usize::from(level) - 1);
            let section = heading.section.as_deref().unwrap_or("content");
            let text: String = heading
                .text
                .as_deref()
                .unwrap_or_default()
                .chars()
                .take(MAX_HEADING_CHARS)
                .collect();
            format!("{}- H{} ({}): \"{}...\"", indent, level, section, text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Landmarks and detected page sections
pub fn format_section_structure(landmarks: &Landmarks, sections: &SectionsFound) -> String {
    let mut lines = Vec::new();

    if landmarks.has_header() {
        lines.push("- Header: Present (semantic <header>)".to_string());
    }
    if sections.hero.found {
        let width = sections.hero.container_width.as_deref().unwrap_or("unknown");
        lines.push(format!("- Hero: Present (container width: {}px)", width));
    }
    if landmarks.has_main() {
        lines.push("- Main: Present (semantic <main>)".to_string());
    }
    if sections.content.found {
        let width = sections.content.container_width.as_deref().unwrap_or("unknown");
        lines.push(format!("- Content: Present (container width: {}px)", width));
    }
    if !landmarks.aside.is_empty() {
        lines.push(format!("- Sidebars: {} detected", landmarks.aside.len()));
    }
    if landmarks.has_footer() {
        lines.push("- Footer: Present (semantic <footer>)".to_string());
    }

    if lines.is_empty() {
        NO_SECTIONS.to_string()
    } else {
        lines.join("\n")
    }
}

/// Nesting of semantic nodes; nodes without a role are flattened into
/// their parent's level.
///
/// A missing or empty root yields [`NO_DOM`]. A root with no semantic
/// descendants yields an empty string.
pub fn format_dom_nesting(root: Option<&DomNode>) -> String {
    let Some(root) = root.filter(|r| !is_blank(r)) else {
        return NO_DOM.to_string();
    };

    let mut lines = Vec::new();
    walk(root, 0, &mut lines);
    lines.truncate(MAX_NESTING_LINES);
    lines.join("\n")
}

fn is_blank(node: &DomNode) -> bool {
    node.tag_name.is_none() && node.role.is_none() && node.children.is_empty()
}

fn walk(node: &DomNode, depth: usize, lines: &mut Vec<String>) {
    if depth > MAX_NESTING_DEPTH {
        return;
    }

    let Some(role) = node.role.as_deref().filter(|r| !r.is_empty()) else {
        for child in node.children.iter().take(MAX_CHILDREN) {
            walk(child, depth, lines);
        }
        return;
    };

    let tag = node.tag_name.as_deref().unwrap_or("div");
    lines.push(format!("{}<{}> <!-- {} -->", "  ".repeat(depth), tag, role));

    for child in node.children.iter().take(MAX_CHILDREN) {
        walk(child, depth + 1, lines);
    }
}
