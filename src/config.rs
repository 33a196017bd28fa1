use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// Words dropped before n-grams are built.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "is", "in", "at", "on", "of", "for", "with", "to",
    "from", "by", "it", "this", "that",
];

/// Domain phrases recognized as whole terms, matched as plain substrings.
pub const DEFAULT_PHRASES: &[&str] = &[
    // data science and machine learning
    "machine learning", "deep learning", "artificial intelligence", "data science",
    "data analysis", "predictive analytics", "natural language processing", "computer vision",
    "reinforcement learning", "neural networks", "big data", "data visualization",
    "data engineering", "time series forecasting", "random forest", "support vector machines",
    // software engineering
    "web development", "full stack development", "backend development", "frontend development",
    "api design", "restful services", "microservices architecture", "cloud computing",
    "agile development", "test-driven development", "continuous integration", "devops",
    "unit testing", "containerization", "docker", "kubernetes", "distributed systems",
    "version control", "git",
    // cloud
    "aws", "azure", "google cloud platform", "serverless architecture",
    "infrastructure as code", "cloud migration",
    // cybersecurity
    "cybersecurity", "network security", "penetration testing", "vulnerability assessment",
    "threat intelligence", "incident response", "firewalls", "encryption", "identity management",
    // general
    "agile methodology", "project management", "scrum", "jira", "trello",
    "software design patterns", "object-oriented programming", "system design",
    "scalability", "high availability",
    // languages
    "python", "java", "c#", "javascript", "typescript", "go", "ruby", "php",
    "rust", "scala", "swift", "kotlin",
    // databases and storage
    "sql", "nosql", "mongodb", "postgresql", "mysql", "redis", "elasticsearch",
    "data lakes", "data warehousing",
    // tooling
    "gitlab", "github", "jenkins", "circleci", "terraform", "ansible", "puppet",
];

/// Static vocabulary of the analyzer.
///
/// Missing keys in a TOML override fall back to the built-in lists, so a file
/// holding only `phrases = [...]` keeps the default stop words.
///
/// ```toml
/// phrases = ["machine learning", "rust"]
/// stop_words = ["a", "the"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub phrases: Vec<String>,
    pub stop_words: Vec<String>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect(),
            stop_words: DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MatcherConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| MatchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
