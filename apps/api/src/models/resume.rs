//! Resume document model and its pure edit operations.
//!
//! Every operation takes `&self` and returns a fresh snapshot; nothing here
//! mutates a document in place. Serialized field names (`template`,
//! `personalInfo`, `workExperience`, ...) are fixed so existing stored
//! records keep loading.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::editor::ids::IdSequence;

// ────────────────────────────────────────────────────────────────────────────
// Presentation mode
// ────────────────────────────────────────────────────────────────────────────

/// The closed set of layouts a document can be rendered with.
///
/// Deserialization through this type is strict: unknown ids are rejected.
/// Stored documents go through [`lenient_mode`] instead, which falls back to
/// [`PresentationMode::Classic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PresentationMode {
    /// Serif, centered header, bulleted experience.
    #[default]
    #[serde(rename = "harvard")]
    Classic,
    /// Plain sans-serif layout.
    #[serde(rename = "basic")]
    Minimal,
    /// Colored header band and accent rules.
    #[serde(rename = "modern")]
    Contemporary,
}

impl PresentationMode {
    pub const ALL: [PresentationMode; 3] = [
        PresentationMode::Classic,
        PresentationMode::Minimal,
        PresentationMode::Contemporary,
    ];

    pub fn id(self) -> &'static str {
        match self {
            PresentationMode::Classic => "harvard",
            PresentationMode::Minimal => "basic",
            PresentationMode::Contemporary => "modern",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PresentationMode::Classic => "Harvard",
            PresentationMode::Minimal => "Basic",
            PresentationMode::Contemporary => "Modern",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PresentationMode::Classic => "Professional template with classic formatting",
            PresentationMode::Minimal => "Clean and simple layout",
            PresentationMode::Contemporary => "Contemporary design with color accents",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.id() == id)
    }
}

/// Accepts any JSON value for the stored `template` field. Anything that is
/// not a known id (missing, null, a number, a retired layout name) becomes
/// the classic layout.
fn lenient_mode<'de, D>(deserializer: D) -> Result<PresentationMode, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let mode = match raw.as_ref().and_then(serde_json::Value::as_str) {
        Some(id) => PresentationMode::from_id(id).unwrap_or_else(|| {
            warn!("Unknown template id '{id}' in stored document, using classic layout");
            PresentationMode::Classic
        }),
        None => PresentationMode::Classic,
    };
    Ok(mode)
}

// ────────────────────────────────────────────────────────────────────────────
// Document records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkEntry {
    pub id: String,
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl ProjectEntry {
    /// Replaces `technologies` with the comma-separated pieces of `raw`.
    pub fn set_technologies_from_text(&self, raw: &str) -> Self {
        ProjectEntry {
            technologies: split_list_text(raw),
            ..self.clone()
        }
    }
}

/// One complete snapshot of the resume being edited.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    #[serde(rename = "template", deserialize_with = "lenient_mode")]
    pub presentation_mode: PresentationMode,
    #[serde(rename = "personalInfo")]
    pub contact: Contact,
    pub summary: String,
    #[serde(rename = "workExperience")]
    pub work_entries: Vec<WorkEntry>,
    #[serde(rename = "education")]
    pub education_entries: Vec<EducationEntry>,
    pub skills: Vec<String>,
    #[serde(rename = "projects")]
    pub project_entries: Vec<ProjectEntry>,
}

// ────────────────────────────────────────────────────────────────────────────
// Field selectors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryList {
    Work,
    Education,
    Projects,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Location,
    Website,
    Linkedin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkField {
    Company,
    Role,
    Duration,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Institution,
    Degree,
    Duration,
    Gpa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectField {
    Name,
    Description,
    Link,
}

/// A field on one of the entry lists. The variant names the list, so a
/// field can never be applied to the wrong kind of entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Work(WorkField),
    Education(EducationField),
    Project(ProjectField),
}

// ────────────────────────────────────────────────────────────────────────────
// Edit operations
// ────────────────────────────────────────────────────────────────────────────

impl ResumeDocument {
    pub fn set_presentation_mode(&self, mode: PresentationMode) -> Self {
        ResumeDocument {
            presentation_mode: mode,
            ..self.clone()
        }
    }

    pub fn update_contact(&self, field: ContactField, value: &str) -> Self {
        let mut contact = self.contact.clone();
        match field {
            ContactField::Name => contact.name = value.to_string(),
            ContactField::Email => contact.email = value.to_string(),
            ContactField::Phone => contact.phone = value.to_string(),
            ContactField::Location => contact.location = value.to_string(),
            ContactField::Website => contact.website = optional_text(value),
            ContactField::Linkedin => contact.linkedin = optional_text(value),
        }
        ResumeDocument {
            contact,
            ..self.clone()
        }
    }

    pub fn update_summary(&self, value: &str) -> Self {
        ResumeDocument {
            summary: value.to_string(),
            ..self.clone()
        }
    }

    /// Appends an empty entry to `list`. The id comes from `ids` and is
    /// skipped forward until it does not collide with an id already in the
    /// list.
    pub fn add_entry(&self, list: EntryList, ids: &mut IdSequence) -> Self {
        let mut next = self.clone();
        match list {
            EntryList::Work => {
                let id = ids.next_unused(|id| next.work_entries.iter().any(|e| e.id == id));
                next.work_entries.push(WorkEntry {
                    id,
                    ..WorkEntry::default()
                });
            }
            EntryList::Education => {
                let id = ids.next_unused(|id| next.education_entries.iter().any(|e| e.id == id));
                next.education_entries.push(EducationEntry {
                    id,
                    ..EducationEntry::default()
                });
            }
            EntryList::Projects => {
                let id = ids.next_unused(|id| next.project_entries.iter().any(|e| e.id == id));
                next.project_entries.push(ProjectEntry {
                    id,
                    ..ProjectEntry::default()
                });
            }
        }
        next
    }

    /// Sets one field on the entry with `id`. Unknown ids leave the document
    /// unchanged.
    pub fn update_entry(&self, id: &str, field: EntryField, value: &str) -> Self {
        let mut next = self.clone();
        match field {
            EntryField::Work(field) => {
                if let Some(entry) = next.work_entries.iter_mut().find(|e| e.id == id) {
                    let slot = match field {
                        WorkField::Company => &mut entry.company,
                        WorkField::Role => &mut entry.role,
                        WorkField::Duration => &mut entry.duration,
                        WorkField::Description => &mut entry.description,
                    };
                    *slot = value.to_string();
                }
            }
            EntryField::Education(field) => {
                if let Some(entry) = next.education_entries.iter_mut().find(|e| e.id == id) {
                    match field {
                        EducationField::Institution => entry.institution = value.to_string(),
                        EducationField::Degree => entry.degree = value.to_string(),
                        EducationField::Duration => entry.duration = value.to_string(),
                        EducationField::Gpa => entry.gpa = optional_text(value),
                    }
                }
            }
            EntryField::Project(field) => {
                if let Some(entry) = next.project_entries.iter_mut().find(|e| e.id == id) {
                    match field {
                        ProjectField::Name => entry.name = value.to_string(),
                        ProjectField::Description => entry.description = value.to_string(),
                        ProjectField::Link => entry.link = optional_text(value),
                    }
                }
            }
        }
        next
    }

    pub fn remove_entry(&self, list: EntryList, id: &str) -> Self {
        let mut next = self.clone();
        match list {
            EntryList::Work => next.work_entries.retain(|e| e.id != id),
            EntryList::Education => next.education_entries.retain(|e| e.id != id),
            EntryList::Projects => next.project_entries.retain(|e| e.id != id),
        }
        next
    }

    pub fn set_skills_from_text(&self, raw: &str) -> Self {
        ResumeDocument {
            skills: split_list_text(raw),
            ..self.clone()
        }
    }

    /// Applies [`ProjectEntry::set_technologies_from_text`] to the project
    /// with `id`; no-op when there is none.
    pub fn set_project_technologies(&self, id: &str, raw: &str) -> Self {
        let mut next = self.clone();
        if let Some(entry) = next.project_entries.iter_mut().find(|e| e.id == id) {
            *entry = entry.set_technologies_from_text(raw);
        }
        next
    }

    /// Iterates every entry id across all three lists.
    pub fn entry_ids(&self) -> impl Iterator<Item = &str> {
        self.work_entries
            .iter()
            .map(|e| e.id.as_str())
            .chain(self.education_entries.iter().map(|e| e.id.as_str()))
            .chain(self.project_entries.iter().map(|e| e.id.as_str()))
    }
}

/// Splits comma-separated input, trims each piece and drops empty ones.
/// Order and duplicates are kept.
pub fn split_list_text(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

fn optional_text(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_work() -> ResumeDocument {
        ResumeDocument {
            work_entries: vec![WorkEntry {
                id: "1".to_string(),
                company: "Tech Corp".to_string(),
                role: "Engineer".to_string(),
                duration: "2020 - 2022".to_string(),
                description: "Built things".to_string(),
            }],
            ..ResumeDocument::default()
        }
    }

    #[test]
    fn test_skills_split_trims_and_drops_empty() {
        let doc = ResumeDocument::default().set_skills_from_text("  A ,B,, C ");
        assert_eq!(doc.skills, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_skills_split_keeps_duplicates_in_order() {
        let doc = ResumeDocument::default().set_skills_from_text("Rust, Go, Rust");
        assert_eq!(doc.skills, vec!["Rust", "Go", "Rust"]);
    }

    #[test]
    fn test_skills_split_blank_input_clears() {
        let doc = ResumeDocument::default()
            .set_skills_from_text("Rust")
            .set_skills_from_text(" , ,");
        assert!(doc.skills.is_empty());
    }

    #[test]
    fn test_technologies_split_on_entry() {
        let entry = ProjectEntry::default().set_technologies_from_text("React,  Node.js ,");
        assert_eq!(entry.technologies, vec!["React", "Node.js"]);
    }

    #[test]
    fn test_add_entry_twice_gives_distinct_ids() {
        let mut ids = IdSequence::starting_at(1);
        let doc = ResumeDocument::default()
            .add_entry(EntryList::Work, &mut ids)
            .add_entry(EntryList::Work, &mut ids);
        assert_eq!(doc.work_entries.len(), 2);
        assert_ne!(doc.work_entries[0].id, doc.work_entries[1].id);
    }

    #[test]
    fn test_add_entry_skips_ids_already_in_list() {
        let mut ids = IdSequence::starting_at(1);
        let doc = doc_with_work().add_entry(EntryList::Work, &mut ids);
        assert_eq!(doc.work_entries[1].id, "2");
        assert_eq!(doc.work_entries[1].company, "");
    }

    #[test]
    fn test_add_entry_appends_empty_project() {
        let mut ids = IdSequence::starting_at(7);
        let doc = ResumeDocument::default().add_entry(EntryList::Projects, &mut ids);
        assert_eq!(
            doc.project_entries,
            vec![ProjectEntry {
                id: "7".to_string(),
                ..ProjectEntry::default()
            }]
        );
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let doc = doc_with_work();
        assert_eq!(doc.remove_entry(EntryList::Work, "missing"), doc);
        assert_eq!(doc.remove_entry(EntryList::Education, "1"), doc);
    }

    #[test]
    fn test_remove_entry_filters_match() {
        let doc = doc_with_work().remove_entry(EntryList::Work, "1");
        assert!(doc.work_entries.is_empty());
    }

    #[test]
    fn test_update_entry_changes_only_target_field() {
        let doc = doc_with_work();
        let next = doc.update_entry("1", EntryField::Work(WorkField::Role), "Lead");
        assert_eq!(next.work_entries[0].role, "Lead");
        assert_eq!(next.work_entries[0].company, "Tech Corp");
        assert_eq!(next.summary, doc.summary);
    }

    #[test]
    fn test_update_entry_unknown_id_is_noop() {
        let doc = doc_with_work();
        let next = doc.update_entry("9", EntryField::Work(WorkField::Company), "X");
        assert_eq!(next, doc);
    }

    #[test]
    fn test_update_entry_does_not_cross_lists() {
        let doc = doc_with_work();
        let next = doc.update_entry("1", EntryField::Project(ProjectField::Name), "X");
        assert_eq!(next, doc);
    }

    #[test]
    fn test_empty_optional_value_clears_field() {
        let doc = ResumeDocument::default()
            .update_contact(ContactField::Website, "example.com")
            .update_contact(ContactField::Website, "");
        assert_eq!(doc.contact.website, None);
    }

    #[test]
    fn test_update_contact_leaves_other_fields() {
        let doc = ResumeDocument::default()
            .update_contact(ContactField::Email, "a@b.c")
            .update_contact(ContactField::Name, "Ada");
        assert_eq!(doc.contact.email, "a@b.c");
        assert_eq!(doc.contact.name, "Ada");
    }

    #[test]
    fn test_set_project_technologies_by_id() {
        let mut ids = IdSequence::starting_at(1);
        let doc = ResumeDocument::default()
            .add_entry(EntryList::Projects, &mut ids)
            .set_project_technologies("1", "Rust, Axum");
        assert_eq!(doc.project_entries[0].technologies, vec!["Rust", "Axum"]);
    }

    #[test]
    fn test_mode_ids_round_trip() {
        for mode in PresentationMode::ALL {
            assert_eq!(PresentationMode::from_id(mode.id()), Some(mode));
        }
        assert_eq!(PresentationMode::from_id("fancy"), None);
    }

    #[test]
    fn test_strict_mode_rejects_unknown_id() {
        assert!(serde_json::from_str::<PresentationMode>("\"fancy\"").is_err());
        assert_eq!(
            serde_json::from_str::<PresentationMode>("\"modern\"").unwrap(),
            PresentationMode::Contemporary
        );
    }

    #[test]
    fn test_stored_unknown_mode_falls_back_to_classic() {
        let doc: ResumeDocument =
            serde_json::from_str(r#"{"template": "fancy", "summary": "hi"}"#).unwrap();
        assert_eq!(doc.presentation_mode, PresentationMode::Classic);
        assert_eq!(doc.summary, "hi");

        let doc: ResumeDocument = serde_json::from_str(r#"{"template": null}"#).unwrap();
        assert_eq!(doc.presentation_mode, PresentationMode::Classic);
    }
}
