//! Form edits as data. Each variant maps onto exactly one document
//! operation; applying an edit never fails.

use serde::{Deserialize, Serialize};

use crate::editor::ids::IdSequence;
use crate::models::{
    ContactField, EducationField, EntryField, EntryList, PresentationMode, ProjectField,
    ResumeDocument, WorkField,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    SetPresentationMode {
        template: PresentationMode,
    },
    UpdateContact {
        field: ContactField,
        value: String,
    },
    UpdateSummary {
        value: String,
    },
    AddEntry {
        list: EntryList,
    },
    UpdateWork {
        id: String,
        field: WorkField,
        value: String,
    },
    UpdateEducation {
        id: String,
        field: EducationField,
        value: String,
    },
    UpdateProject {
        id: String,
        field: ProjectField,
        value: String,
    },
    RemoveEntry {
        list: EntryList,
        id: String,
    },
    SetSkills {
        text: String,
    },
    SetTechnologies {
        id: String,
        text: String,
    },
}

impl Edit {
    /// Short name used in logs.
    pub fn op(&self) -> &'static str {
        match self {
            Edit::SetPresentationMode { .. } => "set_presentation_mode",
            Edit::UpdateContact { .. } => "update_contact",
            Edit::UpdateSummary { .. } => "update_summary",
            Edit::AddEntry { .. } => "add_entry",
            Edit::UpdateWork { .. } => "update_work",
            Edit::UpdateEducation { .. } => "update_education",
            Edit::UpdateProject { .. } => "update_project",
            Edit::RemoveEntry { .. } => "remove_entry",
            Edit::SetSkills { .. } => "set_skills",
            Edit::SetTechnologies { .. } => "set_technologies",
        }
    }

    pub fn apply(&self, doc: &ResumeDocument, ids: &mut IdSequence) -> ResumeDocument {
        match self {
            Edit::SetPresentationMode { template } => doc.set_presentation_mode(*template),
            Edit::UpdateContact { field, value } => doc.update_contact(*field, value),
            Edit::UpdateSummary { value } => doc.update_summary(value),
            Edit::AddEntry { list } => doc.add_entry(*list, ids),
            Edit::UpdateWork { id, field, value } => {
                doc.update_entry(id, EntryField::Work(*field), value)
            }
            Edit::UpdateEducation { id, field, value } => {
                doc.update_entry(id, EntryField::Education(*field), value)
            }
            Edit::UpdateProject { id, field, value } => {
                doc.update_entry(id, EntryField::Project(*field), value)
            }
            Edit::RemoveEntry { list, id } => doc.remove_entry(*list, id),
            Edit::SetSkills { text } => doc.set_skills_from_text(text),
            Edit::SetTechnologies { id, text } => doc.set_project_technologies(id, text),
        }
    }
}
