use crate::models::resume::{
    Contact, EducationEntry, PresentationMode, ProjectEntry, ResumeDocument, WorkEntry,
};

impl ResumeDocument {
    /// The content a fresh session starts with when nothing is stored yet.
    pub fn sample() -> Self {
        ResumeDocument {
            presentation_mode: PresentationMode::Classic,
            contact: Contact {
                name: "John Doe".to_string(),
                email: "john.doe@email.com".to_string(),
                phone: "(555) 123-4567".to_string(),
                location: "San Francisco, CA".to_string(),
                website: Some("johndoe.com".to_string()),
                linkedin: Some("linkedin.com/in/johndoe".to_string()),
            },
            summary: "Experienced software engineer with a passion for building scalable web \
                      applications and solving complex problems."
                .to_string(),
            work_entries: vec![WorkEntry {
                id: "1".to_string(),
                company: "Tech Corp".to_string(),
                role: "Senior Software Engineer".to_string(),
                duration: "Jan 2022 - Present".to_string(),
                description: "Led development of microservices architecture serving 10M+ users. \
                              Improved system performance by 40% and reduced deployment time by 60%."
                    .to_string(),
            }],
            education_entries: vec![EducationEntry {
                id: "1".to_string(),
                institution: "University of California".to_string(),
                degree: "Bachelor of Science in Computer Science".to_string(),
                duration: "2018 - 2022".to_string(),
                gpa: Some("3.8".to_string()),
            }],
            skills: ["JavaScript", "TypeScript", "React", "Node.js", "Python", "AWS", "Docker"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            project_entries: vec![ProjectEntry {
                id: "1".to_string(),
                name: "E-commerce Platform".to_string(),
                description: "Built a full-stack e-commerce platform with React, Node.js, and \
                              PostgreSQL"
                    .to_string(),
                technologies: ["React", "Node.js", "PostgreSQL", "Stripe API"]
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                link: Some("github.com/johndoe/ecommerce".to_string()),
            }],
        }
    }
}
