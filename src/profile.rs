use std::sync::LazyLock;

use rust_embed::Embed;
use serde::Deserialize;
use serde_json::{Map, Value};

pub const NO_NAME: &str = "No Name Found";
pub const NO_TITLE: &str = "No Title Found";
pub const NO_EMAIL: &str = "No Email Found";
pub const NO_PHONE: &str = "No Phone Found";
pub const NO_LOCATION: &str = "No Location Found";
pub const NO_SUMMARY: &str = "No professional summary found.";
pub const NO_TECH: &str = "Tech Stack N/A";
pub const NO_DESCRIPTION: &str = "No description available.";

/// Body returned by the extraction backend for a CV upload.
///
/// Every field is optional; extraction quality varies wildly between CVs and
/// the backend omits anything it could not find.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub extracted: Option<RawProfile>,
    #[serde(default, rename = "cvUploaded")]
    pub cv_uploaded: Option<CvUploadMeta>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CvUploadMeta {
    #[serde(default, rename = "originalName")]
    pub original_name: Option<String>,
    #[serde(default, rename = "downloadLink")]
    pub download_link: Option<String>,
}

/// Profile fields exactly as the extractor produced them, before any
/// defaulting. Kept loose on purpose: strings may arrive as numbers and
/// prose may arrive as lists.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub experience_years: Option<LooseText>,
    #[serde(default)]
    pub professional_summary: Option<String>,
    #[serde(default)]
    pub contact: Option<RawContact>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub skills: Option<Map<String, Value>>,
    #[serde(default)]
    pub experience: Option<Vec<RawExperience>>,
    #[serde(default)]
    pub projects: Option<Vec<RawProject>>,
    #[serde(default)]
    pub education: Option<Vec<RawEducation>>,
    #[serde(default)]
    pub awards: Option<Vec<RawAward>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawContact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawExperience {
    #[serde(default)]
    pub company: Option<String>,
    // some payloads call this `role`
    #[serde(default, alias = "role")]
    pub title: Option<String>,
    #[serde(default)]
    pub years: Option<LooseText>,
    #[serde(default)]
    pub start_date: Option<LooseText>,
    #[serde(default)]
    pub end_date: Option<LooseText>,
    #[serde(default)]
    pub description: Option<LooseLines>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawProject {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tech: Option<LooseLines>,
    #[serde(default)]
    pub description: Option<LooseLines>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawEducation {
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub start_year: Option<LooseText>,
    #[serde(default)]
    pub end_year: Option<LooseText>,
    #[serde(default)]
    pub cgpa: Option<LooseText>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawAward {
    #[serde(default)]
    pub title: Option<String>,
    // some payloads call this `company`
    #[serde(default, alias = "company")]
    pub issuer: Option<String>,
    #[serde(default)]
    pub date: Option<LooseText>,
}

/// Value that may arrive as either a string or a bare number.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LooseText {
    Text(String),
    Number(f64),
}

impl LooseText {
    pub fn as_text(&self) -> String {
        match self {
            LooseText::Text(s) => s.trim().to_string(),
            LooseText::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            LooseText::Number(n) => n.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            LooseText::Text(s) => s.trim().is_empty(),
            LooseText::Number(_) => false,
        }
    }
}

/// Prose that may arrive as one free-text blob or a pre-split list.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LooseLines {
    Text(String),
    List(Vec<String>),
}

impl LooseLines {
    /// Sentence-splits free text; passes lists through. Blank items are
    /// dropped either way.
    pub fn lines(&self) -> Vec<String> {
        match self {
            LooseLines::Text(s) => s
                .split(". ")
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect(),
            LooseLines::List(items) => items
                .iter()
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
        }
    }

    pub fn joined(&self, sep: &str) -> String {
        match self {
            LooseLines::Text(s) => s.trim().to_string(),
            LooseLines::List(items) => items
                .iter()
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .collect::<Vec<_>>()
                .join(sep),
        }
    }
}

/// Fully-defaulted profile consumed by every template. Normalization happens
/// exactly once, right after the upload response lands; renderers never see
/// missing fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PortfolioData {
    pub name: String,
    pub position: String,
    /// "5 Years Experience" style label, empty when the CV never said.
    pub experience_label: String,
    pub summary: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Empty when absent so templates can hide the link.
    pub github: String,
    pub linkedin: String,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub education: Vec<EducationEntry>,
    pub awards: Vec<AwardEntry>,
    pub cv: Option<CvUploadMeta>,
}

impl PortfolioData {
    /// Leading word of the name, for templates that greet informally.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub company: String,
    pub title: String,
    /// Free-form range like "2021 - Present", empty when unknown.
    pub period: String,
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: String,
    pub tech: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_year: String,
    pub end_year: String,
    pub grade: String,
}

impl EducationEntry {
    /// "Degree in Field" with whichever halves are known.
    pub fn degree_line(&self) -> String {
        match (self.degree.is_empty(), self.field.is_empty()) {
            (false, false) => format!("{} in {}", self.degree, self.field),
            (false, true) => self.degree.clone(),
            (true, false) => self.field.clone(),
            (true, true) => String::new(),
        }
    }

    pub fn span(&self) -> String {
        match (self.start_year.is_empty(), self.end_year.is_empty()) {
            (false, false) => format!("{} - {}", self.start_year, self.end_year),
            (false, true) => self.start_year.clone(),
            (true, false) => self.end_year.clone(),
            (true, true) => String::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AwardEntry {
    pub title: String,
    pub issuer: String,
    pub date: String,
}

/// Builds the display profile for an upload response, including the stored-CV
/// metadata. Total: `None` yields the all-placeholder profile.
pub fn from_response(response: Option<&UploadResponse>) -> PortfolioData {
    let mut data = normalize(response.and_then(|r| r.extracted.as_ref()));
    data.cv = response.and_then(|r| r.cv_uploaded.clone());
    data
}

/// Collapses a raw extraction into a fully-populated [`PortfolioData`].
pub fn normalize(raw: Option<&RawProfile>) -> PortfolioData {
    let contact = raw.and_then(|r| r.contact.as_ref());
    let experience_label = raw
        .and_then(|r| r.experience_years.as_ref())
        .filter(|years| !years.is_empty())
        .map(|years| format!("{} Years Experience", years.as_text()))
        .unwrap_or_default();

    PortfolioData {
        name: text_or(raw.and_then(|r| r.name.as_deref()), NO_NAME),
        position: text_or(raw.and_then(|r| r.position.as_deref()), NO_TITLE),
        experience_label,
        summary: text_or(raw.and_then(|r| r.professional_summary.as_deref()), NO_SUMMARY),
        email: text_or(contact.and_then(|c| c.email.as_deref()), NO_EMAIL),
        phone: text_or(contact.and_then(|c| c.phone.as_deref()), NO_PHONE),
        location: text_or(contact.and_then(|c| c.location.as_deref()), NO_LOCATION),
        github: text_or(raw.and_then(|r| r.github.as_deref()), ""),
        linkedin: text_or(raw.and_then(|r| r.linkedin.as_deref()), ""),
        skills: raw
            .and_then(|r| r.skills.as_ref())
            .map(skill_groups)
            .unwrap_or_default(),
        experience: raw
            .and_then(|r| r.experience.as_deref())
            .unwrap_or_default()
            .iter()
            .map(experience_entry)
            .collect(),
        projects: raw
            .and_then(|r| r.projects.as_deref())
            .unwrap_or_default()
            .iter()
            .map(project_entry)
            .collect(),
        education: raw
            .and_then(|r| r.education.as_deref())
            .unwrap_or_default()
            .iter()
            .map(education_entry)
            .collect(),
        awards: raw
            .and_then(|r| r.awards.as_deref())
            .unwrap_or_default()
            .iter()
            .map(award_entry)
            .collect(),
        cv: None,
    }
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

fn loose_text(value: Option<&LooseText>) -> String {
    value
        .filter(|v| !v.is_empty())
        .map(LooseText::as_text)
        .unwrap_or_default()
}

/// Keeps the extractor's category order; empty groups are dropped rather than
/// rendered as bare headings.
fn skill_groups(map: &Map<String, Value>) -> Vec<SkillGroup> {
    map.iter()
        .filter_map(|(category, value)| {
            let items: Vec<String> = match value {
                Value::Array(list) => list
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect(),
                Value::String(s) if !s.trim().is_empty() => vec![s.trim().to_string()],
                _ => Vec::new(),
            };
            (!items.is_empty()).then(|| SkillGroup {
                category: category.clone(),
                items,
            })
        })
        .collect()
}

fn experience_entry(raw: &RawExperience) -> ExperienceEntry {
    ExperienceEntry {
        company: text_or(raw.company.as_deref(), ""),
        title: text_or(raw.title.as_deref(), ""),
        period: period_of(raw),
        highlights: raw
            .description
            .as_ref()
            .map(LooseLines::lines)
            .unwrap_or_default(),
    }
}

/// Prefers a verbatim `years` range; otherwise joins the date pair with a
/// "Present" end for ongoing roles.
fn period_of(raw: &RawExperience) -> String {
    if let Some(years) = raw.years.as_ref().filter(|y| !y.is_empty()) {
        return years.as_text();
    }
    match raw.start_date.as_ref().filter(|s| !s.is_empty()) {
        Some(start) => {
            let end = raw
                .end_date
                .as_ref()
                .filter(|e| !e.is_empty())
                .map(LooseText::as_text)
                .unwrap_or_else(|| "Present".to_string());
            format!("{} - {}", start.as_text(), end)
        }
        None => String::new(),
    }
}

fn project_entry(raw: &RawProject) -> ProjectEntry {
    ProjectEntry {
        title: text_or(raw.title.as_deref(), ""),
        tech: raw
            .tech
            .as_ref()
            .map(|t| t.joined(", "))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| NO_TECH.to_string()),
        description: raw
            .description
            .as_ref()
            .map(|d| d.joined(" "))
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
    }
}

fn education_entry(raw: &RawEducation) -> EducationEntry {
    EducationEntry {
        institution: text_or(raw.institution.as_deref(), ""),
        degree: text_or(raw.degree.as_deref(), ""),
        field: text_or(raw.field_of_study.as_deref(), ""),
        start_year: loose_text(raw.start_year.as_ref()),
        end_year: loose_text(raw.end_year.as_ref()),
        grade: loose_text(raw.cgpa.as_ref()),
    }
}

fn award_entry(raw: &RawAward) -> AwardEntry {
    AwardEntry {
        title: text_or(raw.title.as_deref(), ""),
        issuer: text_or(raw.issuer.as_deref(), ""),
        date: loose_text(raw.date.as_ref()),
    }
}

#[derive(Embed)]
#[folder = "data"]
#[include = "*.json"]
struct SampleData;

/// Demo profile rendered by the gallery previews so shoppers see real content
/// before they upload anything.
pub static SAMPLE_PROFILE: LazyLock<PortfolioData> = LazyLock::new(|| {
    let parsed = SampleData::get("sample_profile.json")
        .and_then(|file| serde_json::from_slice::<UploadResponse>(file.data.as_ref()).ok());
    if parsed.is_none() {
        log::warn!("bundled sample profile failed to parse; previews fall back to placeholders");
    }
    from_response(parsed.as_ref())
});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile_from(value: serde_json::Value) -> RawProfile {
        serde_json::from_value(value).expect("test payload should deserialize")
    }

    #[test]
    fn test_normalize_none_uses_placeholders() {
        let data = normalize(None);
        assert_eq!(data.name, NO_NAME);
        assert_eq!(data.position, NO_TITLE);
        assert_eq!(data.email, NO_EMAIL);
        assert_eq!(data.phone, NO_PHONE);
        assert_eq!(data.location, NO_LOCATION);
        assert_eq!(data.summary, NO_SUMMARY);
        assert_eq!(data.experience_label, "");
        assert_eq!(data.github, "");
        assert_eq!(data.linkedin, "");
        assert!(data.skills.is_empty());
        assert!(data.experience.is_empty());
        assert!(data.cv.is_none());
    }

    #[test]
    fn test_normalize_blank_strings_fall_back() {
        let raw = profile_from(json!({
            "name": "   ",
            "position": "",
            "contact": { "email": " " }
        }));
        let data = normalize(Some(&raw));
        assert_eq!(data.name, NO_NAME);
        assert_eq!(data.position, NO_TITLE);
        assert_eq!(data.email, NO_EMAIL);
    }

    #[test]
    fn test_experience_label_from_number() {
        let raw = profile_from(json!({ "experience_years": 5 }));
        assert_eq!(normalize(Some(&raw)).experience_label, "5 Years Experience");

        let raw = profile_from(json!({ "experience_years": "8+" }));
        assert_eq!(
            normalize(Some(&raw)).experience_label,
            "8+ Years Experience"
        );
    }

    #[test]
    fn test_period_prefers_years_range() {
        let raw = profile_from(json!({
            "experience": [{ "years": "2021 - Present", "start_date": "2019" }]
        }));
        assert_eq!(normalize(Some(&raw)).experience[0].period, "2021 - Present");
    }

    #[test]
    fn test_period_from_dates_defaults_open_end() {
        let raw = profile_from(json!({
            "experience": [
                { "start_date": "2019", "end_date": "2021" },
                { "start_date": 2022 },
                {}
            ]
        }));
        let data = normalize(Some(&raw));
        assert_eq!(data.experience[0].period, "2019 - 2021");
        assert_eq!(data.experience[1].period, "2022 - Present");
        assert_eq!(data.experience[2].period, "");
    }

    #[test]
    fn test_description_string_splits_into_highlights() {
        let raw = profile_from(json!({
            "experience": [{
                "description": "Led the team. Shipped the product.  Cut costs."
            }]
        }));
        let highlights = &normalize(Some(&raw)).experience[0].highlights;
        assert_eq!(
            highlights,
            &vec![
                "Led the team".to_string(),
                "Shipped the product".to_string(),
                "Cut costs.".to_string()
            ]
        );
    }

    #[test]
    fn test_description_list_passes_through() {
        let raw = profile_from(json!({
            "experience": [{
                "description": ["Built APIs serving 1M+ users.", "  ", "Mentored juniors."]
            }]
        }));
        let highlights = &normalize(Some(&raw)).experience[0].highlights;
        assert_eq!(highlights.len(), 2);
        assert_eq!(highlights[0], "Built APIs serving 1M+ users.");
    }

    #[test]
    fn test_role_alias_maps_to_title() {
        let raw = profile_from(json!({
            "experience": [{ "role": "Senior Developer", "company": "Acme" }]
        }));
        let entry = &normalize(Some(&raw)).experience[0];
        assert_eq!(entry.title, "Senior Developer");
        assert_eq!(entry.company, "Acme");
    }

    #[test]
    fn test_skills_preserve_order_and_drop_empty_groups() {
        let raw = profile_from(json!({
            "skills": {
                "Backend": ["Node.js", "Go"],
                "Empty": [],
                "Frontend": ["React"],
                "Note": "just one"
            }
        }));
        let skills = normalize(Some(&raw)).skills;
        let categories: Vec<&str> = skills.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, vec!["Backend", "Frontend", "Note"]);
        assert_eq!(skills[2].items, vec!["just one".to_string()]);
    }

    #[test]
    fn test_project_defaults() {
        let raw = profile_from(json!({ "projects": [{ "title": "Thing" }] }));
        let project = &normalize(Some(&raw)).projects[0];
        assert_eq!(project.tech, NO_TECH);
        assert_eq!(project.description, NO_DESCRIPTION);
    }

    #[test]
    fn test_project_tech_list_joins() {
        let raw = profile_from(json!({
            "projects": [{ "tech": ["React", "Node.js"] }]
        }));
        assert_eq!(normalize(Some(&raw)).projects[0].tech, "React, Node.js");
    }

    #[test]
    fn test_award_company_alias() {
        let raw = profile_from(json!({
            "awards": [{ "title": "Best Hack", "company": "Big Corp", "date": 2023 }]
        }));
        let award = &normalize(Some(&raw)).awards[0];
        assert_eq!(award.issuer, "Big Corp");
        assert_eq!(award.date, "2023");
    }

    #[test]
    fn test_education_helpers() {
        let raw = profile_from(json!({
            "education": [{
                "degree": "B.S. Computer Science",
                "field_of_study": "Information Systems",
                "start_year": 2016,
                "end_year": 2020,
                "cgpa": 3.9
            }]
        }));
        let edu = &normalize(Some(&raw)).education[0];
        assert_eq!(
            edu.degree_line(),
            "B.S. Computer Science in Information Systems"
        );
        assert_eq!(edu.span(), "2016 - 2020");
        assert_eq!(edu.grade, "3.9");
    }

    #[test]
    fn test_from_response_carries_cv_meta() {
        let response: UploadResponse = serde_json::from_value(json!({
            "extracted": { "name": "Ada" },
            "cvUploaded": {
                "originalName": "ada.pdf",
                "downloadLink": "/files/ada.pdf"
            }
        }))
        .expect("response should deserialize");
        let data = from_response(Some(&response));
        assert_eq!(data.name, "Ada");
        let cv = data.cv.expect("cv meta should survive");
        assert_eq!(cv.original_name.as_deref(), Some("ada.pdf"));
    }

    #[test]
    fn test_first_name_and_initials() {
        let mut data = normalize(None);
        data.name = "Alex Chen".to_string();
        assert_eq!(data.first_name(), "Alex");
        assert_eq!(data.initials(), "AC");
    }

    #[test]
    fn test_sample_profile_is_complete() {
        let sample = &*SAMPLE_PROFILE;
        assert_eq!(sample.name, "ALEX CHEN");
        assert_eq!(sample.position, "Full-Stack Developer");
        assert_eq!(sample.experience_label, "5 Years Experience");
        assert_eq!(sample.skills.len(), 6);
        assert_eq!(sample.skills[0].category, "Backend");
        assert_eq!(sample.experience[0].period, "2021 - Present");
        assert_eq!(sample.experience[0].highlights.len(), 3);
        assert_eq!(sample.awards[0].issuer, "Tech Giants Forum");
        assert!(!sample.github.is_empty());
    }
}
