//! Data selection shared by every layout.
//!
//! Layouts never look at a [`ResumeDocument`] directly. They receive a
//! [`DocumentView`], which has already decided which sections exist and
//! which optional fields are shown. A layout can change how things look,
//! not what is on the page.

use serde::Serialize;

use crate::models::ResumeDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Work,
    Education,
    Skills,
    Projects,
}

impl SectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Work => "work",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
        }
    }
}

pub struct ContactView<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub location: &'a str,
    pub website: Option<&'a str>,
    pub linkedin: Option<&'a str>,
}

impl ContactView<'_> {
    pub fn has_links(&self) -> bool {
        self.website.is_some() || self.linkedin.is_some()
    }
}

pub struct WorkView<'a> {
    pub company: &'a str,
    pub role: &'a str,
    pub duration: &'a str,
    pub description: &'a str,
    /// Non-blank description lines, for layouts that render bullets.
    pub bullets: Vec<&'a str>,
}

pub struct EducationView<'a> {
    pub institution: &'a str,
    pub degree: &'a str,
    pub duration: &'a str,
    pub gpa: Option<&'a str>,
}

pub struct ProjectView<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub technologies: &'a [String],
    pub link: Option<&'a str>,
}

pub struct DocumentView<'a> {
    pub contact: ContactView<'a>,
    pub summary: Option<&'a str>,
    pub work: Vec<WorkView<'a>>,
    pub education: Vec<EducationView<'a>>,
    pub skills: &'a [String],
    pub projects: Vec<ProjectView<'a>>,
}

impl<'a> DocumentView<'a> {
    pub fn new(doc: &'a ResumeDocument) -> Self {
        let contact = &doc.contact;
        DocumentView {
            contact: ContactView {
                name: &contact.name,
                email: &contact.email,
                phone: &contact.phone,
                location: &contact.location,
                website: present(&contact.website),
                linkedin: present(&contact.linkedin),
            },
            summary: (!doc.summary.is_empty()).then_some(doc.summary.as_str()),
            work: doc
                .work_entries
                .iter()
                .map(|e| WorkView {
                    company: &e.company,
                    role: &e.role,
                    duration: &e.duration,
                    description: &e.description,
                    bullets: e
                        .description
                        .lines()
                        .map(str::trim)
                        .filter(|line| !line.is_empty())
                        .collect(),
                })
                .collect(),
            education: doc
                .education_entries
                .iter()
                .map(|e| EducationView {
                    institution: &e.institution,
                    degree: &e.degree,
                    duration: &e.duration,
                    gpa: present(&e.gpa),
                })
                .collect(),
            skills: &doc.skills,
            projects: doc
                .project_entries
                .iter()
                .map(|e| ProjectView {
                    name: &e.name,
                    description: &e.description,
                    technologies: &e.technologies,
                    link: present(&e.link),
                })
                .collect(),
        }
    }

    /// Sections with content, in reading order.
    pub fn sections(&self) -> Vec<SectionKind> {
        let mut sections = Vec::new();
        if self.summary.is_some() {
            sections.push(SectionKind::Summary);
        }
        if !self.work.is_empty() {
            sections.push(SectionKind::Work);
        }
        if !self.education.is_empty() {
            sections.push(SectionKind::Education);
        }
        if !self.skills.is_empty() {
            sections.push(SectionKind::Skills);
        }
        if !self.projects.is_empty() {
            sections.push(SectionKind::Projects);
        }
        sections
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
