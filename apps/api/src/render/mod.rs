//! Template Renderer: a pure mapping from a document snapshot to HTML.
//!
//! `render` dispatches on the presentation mode with an exhaustive match;
//! adding a layout means one enum variant, one template and one arm here.

pub mod handlers;
pub mod layouts;
pub mod view;

use askama::Template;
use serde::Serialize;
use tracing::error;

use crate::export::export_title;
use crate::models::{PresentationMode, ResumeDocument};
use crate::render::layouts::{ClassicLayout, ContemporaryLayout, MinimalLayout, PrintablePage};
use crate::render::view::DocumentView;

pub use view::SectionKind;

/// Output of one render pass.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RenderedDocument {
    pub mode: PresentationMode,
    /// Suggested title for printing or saving.
    pub title: String,
    /// Sections that made it onto the page, in order.
    pub sections: Vec<SectionKind>,
    /// Layout markup without the surrounding page.
    pub html: String,
}

impl RenderedDocument {
    /// Wraps the layout markup in a standalone page with print styles.
    pub fn to_page(&self) -> String {
        let page = PrintablePage {
            title: &self.title,
            template_id: self.mode.id(),
            body: &self.html,
        };
        render_or_empty(&page, "page")
    }
}

pub fn render(doc: &ResumeDocument) -> RenderedDocument {
    render_with(doc, doc.presentation_mode)
}

/// Renders `doc` with `mode`, ignoring the document's own selection.
pub fn render_with(doc: &ResumeDocument, mode: PresentationMode) -> RenderedDocument {
    let view = DocumentView::new(doc);
    let html = match mode {
        PresentationMode::Classic => render_or_empty(&ClassicLayout { view: &view }, mode.id()),
        PresentationMode::Minimal => render_or_empty(&MinimalLayout { view: &view }, mode.id()),
        PresentationMode::Contemporary => {
            render_or_empty(&ContemporaryLayout { view: &view }, mode.id())
        }
    };
    RenderedDocument {
        mode,
        title: export_title(&doc.contact.name),
        sections: view.sections(),
        html,
    }
}

/// Template rendering only fails if a `Display` impl fails, which none of
/// the string fields do. Keep the renderer total anyway.
fn render_or_empty<T: Template>(template: &T, name: &str) -> String {
    template.render().unwrap_or_else(|e| {
        error!("Failed to render template '{name}': {e}");
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactField, EducationField, EntryField, EntryList, WorkField};

    const ALL_SECTIONS: [SectionKind; 5] = [
        SectionKind::Summary,
        SectionKind::Work,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Projects,
    ];

    fn rendered_sections(html: &str) -> Vec<SectionKind> {
        ALL_SECTIONS
            .into_iter()
            .filter(|s| html.contains(&format!("data-section=\"{}\"", s.as_str())))
            .collect()
    }

    fn variants() -> Vec<ResumeDocument> {
        let sample = ResumeDocument::sample();
        vec![
            sample.clone(),
            ResumeDocument::default(),
            sample.update_summary(""),
            sample.remove_entry(EntryList::Projects, "1"),
            sample
                .remove_entry(EntryList::Work, "1")
                .remove_entry(EntryList::Education, "1")
                .set_skills_from_text(""),
            sample.set_skills_from_text(" , "),
        ]
    }

    #[test]
    fn test_dispatch_uses_selected_mode() {
        for mode in PresentationMode::ALL {
            let doc = ResumeDocument::sample().set_presentation_mode(mode);
            let rendered = render(&doc);
            assert_eq!(rendered.mode, mode);
        }
        let classic = render(&ResumeDocument::sample());
        assert!(classic.html.contains("resume classic"));
        let modern = render(
            &ResumeDocument::sample().set_presentation_mode(PresentationMode::Contemporary),
        );
        assert!(modern.html.contains("resume contemporary"));
    }

    #[test]
    fn test_layouts_render_same_sections() {
        for doc in variants() {
            let expected = DocumentView::new(&doc).sections();
            for mode in PresentationMode::ALL {
                let rendered = render_with(&doc, mode);
                assert_eq!(rendered.sections, expected);
                assert_eq!(
                    rendered_sections(&rendered.html),
                    expected,
                    "layout {} disagrees on sections",
                    mode.id()
                );
            }
        }
    }

    #[test]
    fn test_empty_projects_render_no_projects_heading() {
        let doc = ResumeDocument::sample().remove_entry(EntryList::Projects, "1");
        for mode in PresentationMode::ALL {
            let html = render_with(&doc, mode).html;
            assert!(!html.contains("Projects</h2>"), "{} shows projects", mode.id());
            assert!(!html.contains("E-commerce Platform"));
        }
    }

    #[test]
    fn test_optional_fields_only_when_present() {
        let mut doc = ResumeDocument::sample();
        doc.contact.website = None;
        doc.education_entries[0].gpa = None;
        doc.project_entries[0].link = Some(String::new());
        for mode in PresentationMode::ALL {
            let html = render_with(&doc, mode).html;
            assert!(!html.contains("johndoe.com<"), "{} shows website", mode.id());
            assert!(html.contains("linkedin.com"));
            assert!(!html.contains("GPA:"));
            assert!(!html.contains("github.com"));
        }
    }

    #[test]
    fn test_all_layouts_show_same_values() {
        let doc = ResumeDocument::sample();
        for mode in PresentationMode::ALL {
            let html = render_with(&doc, mode).html;
            for value in [
                "John Doe",
                "john.doe@email.com",
                "Tech Corp",
                "Senior Software Engineer",
                "Jan 2022 - Present",
                "University of California",
                "GPA: 3.8",
                "TypeScript",
                "Stripe API",
                "github.com",
            ] {
                assert!(html.contains(value), "{} missing {value}", mode.id());
            }
        }
    }

    /// Removes the element whose text contains `text`.
    fn strip_element(html: &str, text: &str) -> String {
        let at = html.find(text).unwrap();
        let start = html[..at].rfind('<').unwrap();
        let close = at + html[at..].find("</").unwrap();
        let end = close + html[close..].find('>').unwrap() + 1;
        format!("{}{}", &html[..start], &html[end..])
    }

    #[test]
    fn test_single_field_edit_changes_only_that_value() {
        let doc = ResumeDocument::sample();
        let skills = doc.skills.join(", ").replace("Python", "Rust");
        // (edited document, value shown before, value shown after)
        let cases = [
            (
                doc.update_contact(ContactField::Phone, "(555) 999-0000"),
                "(555) 123-4567",
                "(555) 999-0000",
            ),
            (
                doc.update_summary("Seasoned platform engineer"),
                doc.summary.as_str(),
                "Seasoned platform engineer",
            ),
            (
                doc.update_entry("1", EntryField::Work(WorkField::Company), "Initech"),
                "Tech Corp",
                "Initech",
            ),
            (
                doc.update_entry("1", EntryField::Education(EducationField::Gpa), "3.95"),
                "3.8",
                "3.95",
            ),
            (doc.set_skills_from_text(&skills), "Python", "Rust"),
        ];

        for (edited, old, new) in &cases {
            let (old, new) = (*old, *new);
            for mode in PresentationMode::ALL {
                let before = render_with(&doc, mode).html;
                let after = render_with(edited, mode).html;
                assert!(after.contains(new), "{mode:?}: missing {new}");
                assert_eq!(after.replace(new, old), before, "{mode:?}: {new}");
            }
        }
    }

    #[test]
    fn test_clearing_gpa_removes_only_that_line() {
        let doc = ResumeDocument::sample();
        let cleared = doc.update_entry("1", EntryField::Education(EducationField::Gpa), "");
        for mode in PresentationMode::ALL {
            let before = render_with(&doc, mode).html;
            let after = render_with(&cleared, mode).html;
            assert!(!after.contains("GPA"));
            assert_eq!(strip_element(&before, "GPA: 3.8"), after, "{mode:?}");
        }
    }

    #[test]
    fn test_classic_renders_description_lines_as_bullets() {
        let mut doc = ResumeDocument::sample();
        doc.work_entries[0].description = "Led team\nCut costs".to_string();
        let html = render(&doc).html;
        assert!(html.contains("<li>Led team</li>"));
        assert!(html.contains("<li>Cut costs</li>"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let doc = ResumeDocument::sample().update_summary("<script>alert(1)</script>");
        for mode in PresentationMode::ALL {
            let html = render_with(&doc, mode).html;
            assert!(!html.contains("<script>"));
            assert!(html.contains("&lt;script&gt;"));
        }
    }

    #[test]
    fn test_page_wraps_body_with_title() {
        let rendered = render(&ResumeDocument::sample());
        let page = rendered.to_page();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>John_Doe_Resume</title>"));
        assert!(page.contains(&rendered.html));
    }
}
