//! Job advertisements and candidate profiles, and the documents built from them.
//!
//! The matcher only sees free text. These types join the structured fields
//! into one document per side of a comparison, separated by single spaces.
//! Missing optional fields contribute an empty string.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobAdvertisement {
    pub job_title: String,
    pub job_description: String,
    pub required_skills: Option<String>,
    pub key_technologies: Option<String>,
    pub industry: String,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub startup_description: String,
}

impl JobAdvertisement {
    /// Title, description, skills, technologies, industry, experience,
    /// education and startup description
    pub fn document(&self) -> String {
        [
            self.job_title.as_str(),
            self.job_description.as_str(),
            self.required_skills.as_deref().unwrap_or_default(),
            self.key_technologies.as_deref().unwrap_or_default(),
            self.industry.as_str(),
            self.experience.as_deref().unwrap_or_default(),
            self.education.as_deref().unwrap_or_default(),
            self.startup_description.as_str(),
        ]
        .join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioItem {
    pub title: String,
    pub description: String,
    pub skills: Option<String>,
    pub technologies: Option<String>,
    pub industry: Option<String>,
}

impl PortfolioItem {
    /// Title, description, skills, technologies and industry
    pub fn document(&self) -> String {
        [
            self.title.as_str(),
            self.description.as_str(),
            self.skills.as_deref().unwrap_or_default(),
            self.technologies.as_deref().unwrap_or_default(),
            self.industry.as_deref().unwrap_or_default(),
        ]
        .join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub items: Vec<PortfolioItem>,
}

impl Portfolio {
    pub fn document(&self) -> String {
        self.items
            .iter()
            .map(PortfolioItem::document)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A candidate's application: extracted CV text plus an optional portfolio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobApplication {
    pub cv_text: String,
    pub portfolio: Option<Portfolio>,
}

impl JobApplication {
    /// CV text followed by the portfolio document
    pub fn document(&self) -> String {
        match &self.portfolio {
            Some(portfolio) => format!("{} {}", self.cv_text, portfolio.document()),
            None => self.cv_text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ai_project() -> PortfolioItem {
        PortfolioItem {
            title: "AI Project".into(),
            description: "Built a machine learning model.".into(),
            skills: Some("Python,Machine Learning".into()),
            technologies: Some("TensorFlow".into()),
            industry: Some("Tech".into()),
        }
    }

    #[test]
    fn job_ad_fields_are_joined_in_order() {
        let ad = JobAdvertisement {
            job_title: "Data Scientist".into(),
            job_description: "Analyze data.".into(),
            required_skills: Some("Python".into()),
            key_technologies: Some("Pandas".into()),
            industry: "Tech".into(),
            experience: Some("3+ years".into()),
            education: Some("BSc".into()),
            startup_description: "AI startup.".into(),
        };
        assert_eq!(
            ad.document(),
            "Data Scientist Analyze data. Python Pandas Tech 3+ years BSc AI startup."
        );
    }

    #[test]
    fn missing_fields_leave_empty_slots() {
        let ad = JobAdvertisement {
            job_title: "Engineer".into(),
            ..JobAdvertisement::default()
        };
        assert_eq!(ad.document(), format!("Engineer{}", " ".repeat(7)));
    }

    #[test]
    fn application_appends_portfolio() {
        let app = JobApplication {
            cv_text: "Python TensorFlow".into(),
            portfolio: Some(Portfolio {
                items: vec![ai_project(), ai_project()],
            }),
        };
        let item = ai_project().document();
        assert_eq!(app.document(), format!("Python TensorFlow {item} {item}"));
        assert_eq!(
            item,
            "AI Project Built a machine learning model. Python,Machine Learning TensorFlow Tech"
        );
    }

    #[test]
    fn application_without_portfolio_is_its_cv() {
        let app = JobApplication {
            cv_text: "C# ASP.NET".into(),
            portfolio: None,
        };
        assert_eq!(app.document(), "C# ASP.NET");
    }
}
