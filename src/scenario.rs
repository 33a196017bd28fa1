//! Labelled evaluation scenarios and the threshold sweep over them.
//!
//! A suite file lists scenarios in one of three shapes (plain documents,
//! portfolio items against job ads, applications against job ads) with
//! ground-truth cases given as 0-based indices. Loading resolves every case
//! into a pair of documents, so evaluation only deals with text.

use std::fmt;
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::MatcherConfig;
use crate::error::{MatchError, Result};
use crate::profile::{JobAdvertisement, JobApplication, Portfolio};
use crate::vectorizer::evaluate::{
    classify::ThresholdClassifier,
    metrics::{calculate_metrics, Metrics},
    scoring::Matcher,
};

/// Thresholds swept when a suite does not name its own
pub const DEFAULT_THRESHOLDS: &[f64] = &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];

const BUILTIN_SUITE: &str = include_str!("../data/scenarios.toml");

/// Ground truth for one comparison, by index into the scenario's lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub left: usize,
    pub right: usize,
    pub is_match: bool,
}

/// A scenario as written in a suite file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScenarioSpec {
    /// `left` and `right` both index `documents`.
    /// Labels print each index plus `label_offset`.
    Documents {
        name: String,
        documents: Vec<String>,
        #[serde(default)]
        label_offset: usize,
        cases: Vec<Case>,
    },
    /// `left` indexes the portfolio's items, `right` the job ads
    PortfolioItems {
        name: String,
        job_ads: Vec<JobAdvertisement>,
        portfolio: Portfolio,
        cases: Vec<Case>,
    },
    /// `left` indexes the applications, `right` the job ads
    Applications {
        name: String,
        job_ads: Vec<JobAdvertisement>,
        applications: Vec<JobApplication>,
        cases: Vec<Case>,
    },
}

fn lookup<'a, T>(items: &'a [T], index: usize, what: &str, scenario: &str) -> Result<&'a T> {
    items.get(index).ok_or_else(|| {
        MatchError::invalid_argument(format!(
            "scenario {scenario:?}: {what} index {index} out of range (have {})",
            items.len()
        ))
    })
}

impl ScenarioSpec {
    pub fn name(&self) -> &str {
        match self {
            ScenarioSpec::Documents { name, .. }
            | ScenarioSpec::PortfolioItems { name, .. }
            | ScenarioSpec::Applications { name, .. } => name,
        }
    }

    /// Turn every case into a labelled document pair.
    ///
    /// # Errors
    /// [`MatchError::InvalidArgument`] when a case indexes past its list.
    pub fn resolve(&self) -> Result<Scenario> {
        let name = self.name();
        let pairs = match self {
            ScenarioSpec::Documents {
                documents,
                label_offset,
                cases,
                ..
            } => cases
                .iter()
                .map(|case| {
                    Ok(LabelledPair {
                        label: format!(
                            "Document {} vs Document {}",
                            case.left + label_offset,
                            case.right + label_offset
                        ),
                        left: lookup(documents, case.left, "document", name)?.clone(),
                        right: lookup(documents, case.right, "document", name)?.clone(),
                        is_match: case.is_match,
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            ScenarioSpec::PortfolioItems {
                job_ads,
                portfolio,
                cases,
                ..
            } => cases
                .iter()
                .map(|case| {
                    Ok(LabelledPair {
                        label: format!("Portfolio {} vs JobAd {}", case.left, case.right),
                        left: lookup(&portfolio.items, case.left, "portfolio item", name)?.document(),
                        right: lookup(job_ads, case.right, "job ad", name)?.document(),
                        is_match: case.is_match,
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            ScenarioSpec::Applications {
                job_ads,
                applications,
                cases,
                ..
            } => cases
                .iter()
                .map(|case| {
                    Ok(LabelledPair {
                        label: format!("JobApplication {} vs JobAd {}", case.left, case.right),
                        left: lookup(applications, case.left, "application", name)?.document(),
                        right: lookup(job_ads, case.right, "job ad", name)?.document(),
                        is_match: case.is_match,
                    })
                })
                .collect::<Result<Vec<_>>>()?,
        };
        Ok(Scenario {
            name: name.to_string(),
            pairs,
        })
    }
}

/// Two documents to compare and whether they truly match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelledPair {
    pub label: String,
    pub left: String,
    pub right: String,
    pub is_match: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub name: String,
    pub pairs: Vec<LabelledPair>,
}

impl Scenario {
    /// Score every pair in order on a fresh [`Matcher`], classify at
    /// `threshold`, and compare against the labels.
    pub fn evaluate(&self, threshold: f64, config: &MatcherConfig) -> Result<ScenarioReport> {
        let classifier = ThresholdClassifier::new(threshold);
        let mut matcher: Matcher = Matcher::with_config(config);
        let pairs: Vec<PairOutcome> = self
            .pairs
            .iter()
            .map(|pair| {
                let score = matcher.average_matching_score(&pair.left, &pair.right);
                PairOutcome {
                    label: pair.label.clone(),
                    score,
                    predicted: classifier.classify(score),
                    actual: pair.is_match,
                }
            })
            .collect();
        let actual: Vec<bool> = pairs.iter().map(|p| p.actual).collect();
        let predicted: Vec<bool> = pairs.iter().map(|p| p.predicted).collect();
        let metrics = calculate_metrics(&actual, &predicted)?;
        debug!(scenario = %self.name, threshold, %metrics, "evaluated scenario");
        Ok(ScenarioReport {
            name: self.name.clone(),
            threshold,
            pairs,
            metrics,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairOutcome {
    pub label: String,
    pub score: f64,
    pub predicted: bool,
    pub actual: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub threshold: f64,
    pub pairs: Vec<PairOutcome>,
    pub metrics: Metrics,
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "========== {} ==========", self.name.to_uppercase())?;
        for pair in &self.pairs {
            writeln!(
                f,
                "{}, Score: {:.6}, Predicted Match: {}",
                pair.label, pair.score, pair.predicted
            )?;
        }
        writeln!(f, "{}", self.metrics)
    }
}

/// Every scenario evaluated at one threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepReport {
    pub threshold: f64,
    pub scenarios: Vec<ScenarioReport>,
}

impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "========== TESTING WITH THRESHOLD: {:.1} ==========", self.threshold)?;
        writeln!(f)?;
        for report in &self.scenarios {
            writeln!(f, "{report}")?;
        }
        writeln!(f, "========== END OF TESTS FOR THRESHOLD: {:.1} ==========", self.threshold)
    }
}

/// Pretty JSON of a sweep
pub fn reports_to_json(reports: &[SweepReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

#[derive(Debug, Deserialize)]
struct SuiteFile {
    #[serde(default = "default_thresholds")]
    thresholds: Vec<f64>,
    scenarios: Vec<ScenarioSpec>,
}

fn default_thresholds() -> Vec<f64> {
    DEFAULT_THRESHOLDS.to_vec()
}

/// Scenarios plus the thresholds to sweep them at
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suite {
    pub thresholds: Vec<f64>,
    pub scenarios: Vec<Scenario>,
}

impl Suite {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: SuiteFile = toml::from_str(text)?;
        let scenarios = file
            .scenarios
            .iter()
            .map(ScenarioSpec::resolve)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            thresholds: file.thresholds,
            scenarios,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| MatchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The seven ground-truth scenarios shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_SUITE)
    }

    /// Evaluate every scenario at each of `thresholds`.
    /// Thresholds run in parallel; reports keep the order of `thresholds`.
    ///
    /// # Errors
    /// [`MatchError::InvalidArgument`] for a threshold that is not finite.
    pub fn sweep(&self, thresholds: &[f64], config: &MatcherConfig) -> Result<Vec<SweepReport>> {
        if let Some(bad) = thresholds.iter().find(|t| !t.is_finite()) {
            return Err(MatchError::invalid_argument(format!("threshold {bad} is not finite")));
        }
        info!(
            thresholds = thresholds.len(),
            scenarios = self.scenarios.len(),
            "running threshold sweep"
        );
        thresholds
            .par_iter()
            .map(|&threshold| {
                let scenarios = self
                    .scenarios
                    .iter()
                    .map(|scenario| scenario.evaluate(threshold, config))
                    .collect::<Result<Vec<_>>>()?;
                Ok(SweepReport { threshold, scenarios })
            })
            .collect()
    }

    /// [`Suite::sweep`] over the suite's own thresholds
    pub fn sweep_default(&self, config: &MatcherConfig) -> Result<Vec<SweepReport>> {
        self.sweep(&self.thresholds, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_SUITE: &str = r#"
        thresholds = [0.2]

        [[scenarios]]
        kind = "documents"
        name = "Tiny"
        documents = ["Rust and Docker", "Docker with Rust", "Sourdough baking"]
        cases = [
            { left = 0, right = 1, is_match = true },
            { left = 0, right = 2, is_match = false },
        ]
    "#;

    #[test]
    fn suite_resolves_documents() {
        let suite = Suite::from_toml_str(SMALL_SUITE).unwrap();
        assert_eq!(suite.thresholds, vec![0.2]);
        let pair = &suite.scenarios[0].pairs[1];
        assert_eq!(pair.label, "Document 0 vs Document 2");
        assert_eq!(pair.right, "Sourdough baking");
        assert!(!pair.is_match);
    }

    #[test]
    fn label_offset_shifts_printed_indices_only() {
        let text = SMALL_SUITE.replace("name = \"Tiny\"", "name = \"Tiny\"\n        label_offset = 1");
        let suite = Suite::from_toml_str(&text).unwrap();
        let pair = &suite.scenarios[0].pairs[1];
        assert_eq!(pair.label, "Document 1 vs Document 3");
        assert_eq!(pair.right, "Sourdough baking");
    }

    #[test]
    fn thresholds_default_to_the_standard_sweep() {
        let text = SMALL_SUITE.replace("thresholds = [0.2]", "");
        let suite = Suite::from_toml_str(&text).unwrap();
        assert_eq!(suite.thresholds, DEFAULT_THRESHOLDS);
    }

    #[test]
    fn out_of_range_case_is_rejected() {
        let text = SMALL_SUITE.replace("right = 2", "right = 7");
        let err = Suite::from_toml_str(&text).unwrap_err();
        assert!(matches!(err, MatchError::InvalidArgument { .. }), "got {err:?}");
        assert!(err.to_string().contains("index 7"));
    }

    #[test]
    fn evaluate_scores_and_classifies() {
        let suite = Suite::from_toml_str(SMALL_SUITE).unwrap();
        let report = suite.scenarios[0].evaluate(0.2, &MatcherConfig::default()).unwrap();
        assert!(report.pairs[0].predicted);
        assert_eq!(report.pairs[1].score, 0.0);
        assert!(!report.pairs[1].predicted);
        assert_eq!(report.metrics.accuracy, 1.0);
        assert_eq!(report.metrics.f1, 1.0);
    }

    #[test]
    fn report_renders_console_lines() {
        let suite = Suite::from_toml_str(SMALL_SUITE).unwrap();
        let report = suite.scenarios[0].evaluate(0.2, &MatcherConfig::default()).unwrap();
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "========== TINY ==========");
        assert_eq!(lines[2], "Document 0 vs Document 2, Score: 0.000000, Predicted Match: false");
        assert_eq!(
            lines[3],
            "Accuracy: 1.00, Precision: 1.00, Recall: 1.00, F1 Score: 1.00"
        );
    }

    #[test]
    fn sweep_keeps_threshold_order() {
        let suite = Suite::from_toml_str(SMALL_SUITE).unwrap();
        let thresholds = [0.9, 0.1, 0.5];
        let reports = suite.sweep(&thresholds, &MatcherConfig::default()).unwrap();
        let seen: Vec<f64> = reports.iter().map(|r| r.threshold).collect();
        assert_eq!(seen, thresholds);
    }

    #[test]
    fn sweep_rejects_nan_threshold() {
        let suite = Suite::from_toml_str(SMALL_SUITE).unwrap();
        assert!(suite.sweep(&[0.1, f64::NAN], &MatcherConfig::default()).is_err());
    }
}
