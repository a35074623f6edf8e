//! Project details panel: requirements and follow-up questions, rendered
//! from markdown into flat blocks the presentation layer can lay out.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use crate::models::Project;

pub const NO_REQUIREMENTS: &str = "No requirements specified.";
pub const NO_QUESTIONS: &str = "No questions specified.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Requirements,
    Questions,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Requirements, Section::Questions];

    pub fn heading(self) -> &'static str {
        match self {
            Section::Requirements => "Project Requirements",
            Section::Questions => "Followup Questions",
        }
    }

    fn source(self, project: &Project) -> &str {
        let (field, placeholder) = match self {
            Section::Requirements => (project.requirements.as_deref(), NO_REQUIREMENTS),
            Section::Questions => (project.questions.as_deref(), NO_QUESTIONS),
        };
        field.filter(|s| !s.trim().is_empty()).unwrap_or(placeholder)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(String),
    Item { depth: usize, marker: String, text: String },
    Code(String),
    Rule,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub section: Section,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectDetailsView {
    /// Project data has not arrived (or failed to load).
    Loading,
    Loaded(Vec<SectionView>),
}

impl ProjectDetailsView {
    pub fn from_project(project: Option<&Project>) -> Self {
        match project {
            None => ProjectDetailsView::Loading,
            Some(project) => ProjectDetailsView::Loaded(
                Section::ALL
                    .into_iter()
                    .map(|section| SectionView {
                        section,
                        blocks: render_markdown(section.source(project)),
                    })
                    .collect(),
            ),
        }
    }
}

fn flush(buf: &mut String) -> Option<String> {
    let text = buf.trim().to_string();
    buf.clear();
    (!text.is_empty()).then_some(text)
}

/// Emit pending text before a nested block starts: as the open list item's
/// text, or as a paragraph outside lists.
fn flush_open(blocks: &mut Vec<Block>, buf: &mut String, depth: usize, markers: &[String]) {
    let Some(text) = flush(buf) else {
        return;
    };
    blocks.push(match markers.last() {
        Some(marker) => Block::Item {
            depth,
            marker: marker.clone(),
            text,
        },
        None => Block::Paragraph(text),
    });
}

/// Flatten markdown into blocks. Inline styling is dropped; list nesting is
/// kept as a depth.
pub fn render_markdown(source: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut buf = String::new();
    // One entry per open list: the next number for ordered lists.
    let mut lists: Vec<Option<u64>> = Vec::new();
    let mut markers: Vec<String> = Vec::new();

    for event in Parser::new(source) {
        match event {
            Event::Start(Tag::List(start)) => {
                flush_open(&mut blocks, &mut buf, lists.len(), &markers);
                lists.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                lists.pop();
            }
            Event::Start(Tag::Item) => {
                let marker = match lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{n}.");
                        *n += 1;
                        marker
                    }
                    _ => "•".to_string(),
                };
                markers.push(marker);
            }
            Event::End(TagEnd::Item) => {
                let marker = markers.pop().unwrap_or_default();
                if let Some(text) = flush(&mut buf) {
                    blocks.push(Block::Item {
                        depth: lists.len(),
                        marker,
                        text,
                    });
                }
            }
            Event::End(TagEnd::Paragraph) => {
                if lists.is_empty() {
                    if let Some(text) = flush(&mut buf) {
                        blocks.push(Block::Paragraph(text));
                    }
                } else {
                    buf.push(' ');
                }
            }
            Event::End(TagEnd::Heading(level)) => {
                if let Some(text) = flush(&mut buf) {
                    blocks.push(Block::Heading {
                        level: level as u8,
                        text,
                    });
                }
            }
            Event::Start(Tag::CodeBlock(_)) => {
                flush_open(&mut blocks, &mut buf, lists.len(), &markers);
            }
            Event::End(TagEnd::HtmlBlock) => {
                flush_open(&mut blocks, &mut buf, lists.len(), &markers);
            }
            Event::End(TagEnd::CodeBlock) => {
                let code = buf.trim_end().to_string();
                buf.clear();
                blocks.push(Block::Code(code));
            }
            // Raw HTML is kept as text.
            Event::Text(text)
            | Event::Code(text)
            | Event::Html(text)
            | Event::InlineHtml(text) => buf.push_str(&text),
            Event::SoftBreak => buf.push(' '),
            Event::HardBreak => buf.push('\n'),
            Event::Rule => blocks.push(Block::Rule),
            _ => {}
        }
    }
    if let Some(text) = flush(&mut buf) {
        blocks.push(Block::Paragraph(text));
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_for_empty_fields() {
        let project = Project {
            id: "P1".into(),
            requirements: Some(String::new()),
            questions: None,
        };
        let ProjectDetailsView::Loaded(sections) = ProjectDetailsView::from_project(Some(&project))
        else {
            panic!("expected loaded view");
        };
        assert_eq!(sections[0].section, Section::Requirements);
        assert_eq!(sections[0].blocks, vec![Block::Paragraph(NO_REQUIREMENTS.into())]);
        assert_eq!(sections[1].blocks, vec![Block::Paragraph(NO_QUESTIONS.into())]);
    }

    #[test]
    fn test_no_project_is_loading() {
        assert_eq!(ProjectDetailsView::from_project(None), ProjectDetailsView::Loading);
    }

    #[test]
    fn test_markdown_structure() {
        let blocks = render_markdown(
            "# Goals\n\nShip the **beta**\nsoon.\n\n- login\n- export\n  1. csv\n  2. pdf\n\n---\n\n```\nlet x = 1;\n```\n",
        );
        assert_eq!(
            blocks,
            vec![
                Block::Heading { level: 1, text: "Goals".into() },
                Block::Paragraph("Ship the beta soon.".into()),
                Block::Item { depth: 1, marker: "•".into(), text: "login".into() },
                Block::Item { depth: 1, marker: "•".into(), text: "export".into() },
                Block::Item { depth: 2, marker: "1.".into(), text: "csv".into() },
                Block::Item { depth: 2, marker: "2.".into(), text: "pdf".into() },
                Block::Rule,
                Block::Code("let x = 1;".into()),
            ]
        );
    }

    #[test]
    fn test_code_block_inside_list_item_keeps_item_text() {
        let blocks = render_markdown("- install it\n\n  ```\n  cargo run\n  ```\n- done\n");
        assert_eq!(
            blocks,
            vec![
                Block::Item { depth: 1, marker: "•".into(), text: "install it".into() },
                Block::Code("cargo run".into()),
                Block::Item { depth: 1, marker: "•".into(), text: "done".into() },
            ]
        );
    }

    #[test]
    fn test_raw_html_is_kept_as_text() {
        let blocks = render_markdown("<div>note</div>\n\nSee <b>this</b> part.\n");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph("<div>note</div>".into()),
                Block::Paragraph("See <b>this</b> part.".into()),
            ]
        );
    }
}
