//! Markdown README renderer.

use readmegen_core::{
    application::ports::DocumentRenderer,
    domain::{AnswerSet, Field, Licence, RenderContext, RenderDocument},
    error::ReadmeResult,
};
use tracing::instrument;

use super::licences;

const PLACEHOLDER: &str = "_Not provided._";

/// Renders an answer set into a README with a fixed section order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Create a new markdown renderer.
    pub fn new() -> Self {
        Self
    }
}

struct Section {
    title: &'static str,
    body: String,
}

impl Section {
    fn new(title: &'static str, body: impl Into<String>) -> Self {
        Self {
            title,
            body: body.into(),
        }
    }

    fn anchor(&self) -> String {
        self.title.to_lowercase().replace(' ', "-")
    }
}

impl DocumentRenderer for MarkdownRenderer {
    #[instrument(skip_all, fields(title = answers.get(Field::Title)))]
    fn render(
        &self,
        answers: &AnswerSet,
        context: &RenderContext,
    ) -> ReadmeResult<RenderDocument> {
        let licence = answers.licence()?;
        let sections = sections(answers, licence, context);

        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", answers.get(Field::Title).trim()));
        if let Some(badge) = licence.badge() {
            out.push_str(&format!("{badge}\n\n"));
        }

        out.push_str("## Description\n\n");
        out.push_str(&body_or_placeholder(answers.get(Field::Description)));
        out.push_str("\n\n");

        out.push_str("## Table of Contents\n\n");
        for section in &sections {
            out.push_str(&format!("- [{}](#{})\n", section.title, section.anchor()));
        }

        for section in &sections {
            out.push_str(&format!("\n## {}\n\n{}\n", section.title, section.body));
        }

        Ok(RenderDocument::new(out))
    }
}

fn sections(answers: &AnswerSet, licence: Licence, context: &RenderContext) -> Vec<Section> {
    let mut sections = vec![
        Section::new(
            "Installation",
            body_or_placeholder(answers.get(Field::Installation)),
        ),
        Section::new("Usage", body_or_placeholder(answers.get(Field::Usage))),
    ];

    let tech = answers.list(Field::Tech);
    if !tech.is_empty() {
        let list: Vec<String> = tech.iter().map(|t| format!("- {t}")).collect();
        sections.push(Section::new("Technologies", list.join("\n")));
    }

    sections.push(Section::new(
        "Contributing",
        body_or_placeholder(answers.get(Field::Contribute)),
    ));
    sections.push(Section::new(
        "Tests",
        body_or_placeholder(answers.get(Field::Tests)),
    ));

    if let Some(body) = licence_body(licence, context.year(), answers.get(Field::Name).trim()) {
        sections.push(Section::new("Licence", body));
    }

    sections.push(Section::new("Questions", footer(answers)));
    sections
}

fn licence_body(licence: Licence, year: i32, holder: &str) -> Option<String> {
    let badge = licence.badge()?;
    let link = licence.link()?;
    let spdx = licence.spdx()?;
    let notice = licences::notice(licence, year, holder)?;
    Some(format!(
        "{badge}\n\nThis project is licensed under the [{}]({link}) \
         (SPDX: `{spdx}`).\n\n```text\n{notice}\n```",
        licence.as_str()
    ))
}

fn footer(answers: &AnswerSet) -> String {
    let name = answers.get(Field::Name).trim();
    let email = answers.get(Field::Email).trim();
    let github = answers.get(Field::Github).trim();

    let mut out = format!(
        "Created by {name} ([{email}](mailto:{email})).\n\n\
         Find more of my work on GitHub: [{github}](https://github.com/{github})."
    );

    let collaborators = answers.list(Field::Collaborators);
    if !collaborators.is_empty() {
        out.push_str(&format!("\n\nCollaborators: {}", collaborators.join(", ")));
    }
    out
}

fn body_or_placeholder(text: &str) -> String {
    let text = text.trim_end();
    if text.trim().is_empty() {
        PLACEHOLDER.to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> AnswerSet {
        AnswerSet::new()
            .with(Field::Name, "Jo")
            .with(Field::Email, "jo@x.com")
            .with(Field::Github, "jo")
            .with(Field::Title, "Demo")
            .with(Field::Description, "A demo.")
            .with(Field::Installation, "npm i demo run")
            .with(Field::Usage, "run it now")
            .with(Field::Licence, "MIT Licence")
            .with(Field::Collaborators, "")
            .with(Field::TargetDir, "./docs")
    }

    fn render(answers: &AnswerSet) -> String {
        MarkdownRenderer::new()
            .render(answers, &RenderContext::new(2026))
            .unwrap()
            .into_string()
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let doc = render(&answers().with(Field::Tech, "rust"));
        let order = [
            "# Demo",
            "## Description",
            "## Table of Contents",
            "## Installation",
            "## Usage",
            "## Technologies",
            "## Contributing",
            "## Tests",
            "## Licence",
            "## Questions",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|heading| doc.find(heading).unwrap_or_else(|| panic!("missing {heading}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{doc}");
    }

    #[test]
    fn rendering_is_idempotent() {
        let answers = answers();
        assert_eq!(render(&answers), render(&answers));
    }

    #[test]
    fn no_licence_omits_section_badge_and_toc_entry() {
        let doc = render(&answers().with(Field::Licence, "No Licence"));
        assert!(!doc.contains("## Licence"));
        assert!(!doc.contains("(#licence)"));
        assert!(!doc.contains("img.shields.io"));
    }

    #[test]
    fn every_real_licence_renders_a_section() {
        for licence in Licence::ALL.iter().filter(|l| !l.is_none()) {
            let doc = render(&answers().with(Field::Licence, licence.as_str()));
            let section = doc.split("## Licence").nth(1).expect("licence section");
            assert!(section.contains(licence.as_str()));
            assert!(section.contains(&format!("(SPDX: `{}`)", licence.spdx().unwrap())));
            assert!(section.contains("```text"));
        }
    }

    #[test]
    fn mit_section_names_holder_and_year() {
        let doc = render(&answers());
        assert!(doc.contains("Copyright (c) 2026 Jo"));
        assert!(doc.contains("https://opensource.org/licenses/MIT"));
    }

    #[test]
    fn empty_collaborators_render_nothing() {
        let doc = render(&answers());
        assert!(!doc.contains("Collaborators"));
    }

    #[test]
    fn collaborators_are_credited() {
        let doc = render(&answers().with(Field::Collaborators, "Ann, Bo ,"));
        assert!(doc.contains("Collaborators: Ann, Bo"));
    }

    #[test]
    fn footer_links_author() {
        let doc = render(&answers());
        assert!(doc.contains("[jo@x.com](mailto:jo@x.com)"));
        assert!(doc.contains("[jo](https://github.com/jo)"));
    }

    #[test]
    fn blank_free_text_gets_placeholder() {
        let doc = render(&answers());
        let tests = doc.split("## Tests").nth(1).unwrap();
        assert!(tests.trim_start().starts_with(PLACEHOLDER));
    }

    #[test]
    fn empty_tech_list_omits_section() {
        let doc = render(&answers().with(Field::Tech, " , "));
        assert!(!doc.contains("Technologies"));
    }

    #[test]
    fn unknown_licence_is_an_error() {
        let result = MarkdownRenderer::new()
            .render(&answers().with(Field::Licence, "WTFPL"), &RenderContext::new(2026));
        assert!(result.is_err());
    }
}
