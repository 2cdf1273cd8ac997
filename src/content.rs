use std::sync::LazyLock;

use chrono::NaiveDate;
use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

static SITE_CONTENT: LazyLock<Result<SiteContent, ContentError>> = LazyLock::new(SiteContent::load);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content file {file}: {reason}")]
    ParseError { file: String, reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub headline: String,
    pub tagline: String,
    pub description: String,
    pub about: Vec<String>,
    pub portrait: String,
    pub cv: String,
    pub contact: ContactDetails,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDetails {
    pub phone: String,
    pub email: String,
    pub location: String,
}

impl ContactDetails {
    pub fn tel_href(&self) -> String {
        let digits = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect::<String>();
        format!("tel:{digits}")
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    LinkedIn,
    Facebook,
    Instagram,
    X,
    Orcid,
    GitHub,
}

impl SocialKind {
    pub fn label(self) -> &'static str {
        match self {
            SocialKind::LinkedIn => "LinkedIn",
            SocialKind::Facebook => "Facebook",
            SocialKind::Instagram => "Instagram",
            SocialKind::X => "X",
            SocialKind::Orcid => "ORCID",
            SocialKind::GitHub => "GitHub",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub period: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Degree {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub website: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub institution: String,
    pub period: String,
    pub website: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degrees: Vec<Degree>,
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub authors: String,
    pub year: u16,
    pub summary: String,
    pub link: String,
}

/// A conference talk, seminar or webinar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Talk {
    pub date: NaiveDate,
    pub format: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Award {
    pub title: String,
    pub organization: String,
    pub date: NaiveDate,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volunteering {
    pub role: String,
    pub organization: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Everything the page displays that isn't layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub experience: Vec<Job>,
    pub education: Education,
    pub skills: Vec<String>,
    pub publications: Vec<Publication>,
    pub talks: Vec<Talk>,
    pub awards: Vec<Award>,
    pub volunteering: Vec<Volunteering>,
}

fn load_file<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = ContentAssets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|e| ContentError::ParseError {
        file: name.to_string(),
        reason: e.to_string(),
    })
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        Ok(Self {
            profile: load_file("profile.json")?,
            experience: load_file("experience.json")?,
            education: load_file("education.json")?,
            skills: load_file("skills.json")?,
            publications: load_file("publications.json")?,
            talks: load_file("talks.json")?,
            awards: load_file("awards.json")?,
            volunteering: load_file("volunteering.json")?,
        })
    }
}

/// Site content, parsed on first use and kept for the life of the process.
pub fn site_content() -> Result<&'static SiteContent, ContentError> {
    SITE_CONTENT.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let content = site_content().expect("embedded content should parse");
        assert!(!content.profile.name.is_empty());
        assert!(!content.profile.about.is_empty());
        assert!(!content.experience.is_empty());
        assert!(!content.education.degrees.is_empty());
        assert!(!content.education.certifications.is_empty());
        assert!(!content.skills.is_empty());
        assert!(!content.publications.is_empty());
        assert!(!content.talks.is_empty());
        assert!(!content.awards.is_empty());
        assert!(!content.volunteering.is_empty());
    }

    #[test]
    fn test_every_file_is_read() {
        let files = ContentAssets::iter().collect::<Vec<_>>();
        for name in [
            "profile.json",
            "experience.json",
            "education.json",
            "skills.json",
            "publications.json",
            "talks.json",
            "awards.json",
            "volunteering.json",
        ] {
            assert!(files.iter().any(|f| f == name), "{name} missing");
        }
    }

    #[test]
    fn test_profile_assets_are_served() {
        let profile = &site_content().expect("embedded content should parse").profile;
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for path in [&profile.portrait, &profile.cv] {
            let file = path.strip_prefix('/').expect("asset paths are site-absolute");
            assert!(public.join(file).is_file(), "{path} missing from public/");
        }
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            load_file::<Vec<String>>("nope.json").unwrap_err(),
            ContentError::NotFound("nope.json".to_string())
        );
    }

    #[test]
    fn test_optional_links() {
        let award: Award = serde_json::from_str(
            r#"{"title":"t","organization":"o","date":"2023-10-11","description":"d"}"#,
        )
        .unwrap();
        assert_eq!(award.link, None);
        assert_eq!(award.date.format("%B %-d, %Y").to_string(), "October 11, 2023");

        let volunteering: Volunteering = serde_json::from_str(
            r#"{"role":"r","organization":"o","period":"p","description":"d","link":null}"#,
        )
        .unwrap();
        assert_eq!(volunteering.link, None);
    }

    #[test]
    fn test_contact_hrefs() {
        let details = ContactDetails {
            phone: "+254 758171136".to_string(),
            email: "someone@example.org".to_string(),
            location: "Nairobi, Kenya".to_string(),
        };
        assert_eq!(details.tel_href(), "tel:+254758171136");
        assert_eq!(details.mailto_href(), "mailto:someone@example.org");
    }
}
