pub mod resume;
pub mod sample;

pub use resume::{
    ContactField, EducationField, EntryField, EntryList, PresentationMode, ProjectField,
    ResumeDocument, WorkField,
};
