//! Recursive rendering of nested recipe steps into nested lists.

use crate::model::Step;
use html_escape::encode_text;
use std::fmt::Write;

/// Tree form of a rendered step sequence. Always present, even when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepList {
    /// Nesting depth the list was built at. Does not affect markup.
    pub level: usize,
    pub items: Vec<StepItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepItem {
    pub text: String,
    /// Nested list for group steps, `None` for plain text steps
    pub children: Option<StepList>,
}

impl StepList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html);
        html
    }

    fn write_html(&self, out: &mut String) {
        out.push_str("<ul>");
        for item in &self.items {
            let _ = write!(out, r#"<li class="substep">{}"#, encode_text(&item.text));
            if let Some(children) = &item.children {
                children.write_html(out);
            }
            out.push_str("</li>");
        }
        out.push_str("</ul>");
    }
}

/// Build the list tree for `steps`; groups recurse at `level + 1`.
pub fn build(steps: &[Step], level: usize) -> StepList {
    let items = steps
        .iter()
        .map(|step| StepItem {
            text: step.text().to_string(),
            children: match step {
                Step::Text(_) => None,
                Step::Group { substeps, .. } => Some(build(substeps, level + 1)),
            },
        })
        .collect();

    StepList { level, items }
}

/// Render `steps` as nested `<ul>` markup.
pub fn render(steps: &[Step], level: usize) -> String {
    build(steps, level).to_html()
}
