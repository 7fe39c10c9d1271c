//! Scenario definitions.

use std::path::PathBuf;

use finnsyll_constraint::CheckerConfig;

use crate::assertion::Assertion;
use crate::error::{ScenarioError, ScenarioResult};
use crate::loader::Fixtures;
use crate::runner::Runner;

/// Directory holding the fixture files.
pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// A named step with the assertion its result must satisfy.
#[derive(Debug)]
pub struct Step {
    pub name: String,
    pub assertion: Assertion,
}

/// A scenario: fixtures, a checker configuration, and ordered steps.
#[derive(Debug)]
pub struct Scenario {
    name: String,
    fixtures_path: Option<PathBuf>,
    fixtures_source: Option<String>,
    config: CheckerConfig,
    steps: Vec<Step>,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixtures_path: None,
            fixtures_source: None,
            config: CheckerConfig::default(),
            steps: Vec::new(),
        }
    }

    /// Fixture file, relative to the data directory.
    pub fn fixtures(mut self, path: &str) -> Self {
        self.fixtures_path = Some(data_dir().join(path));
        self
    }

    /// Inline fixtures, used instead of a file.
    pub fn fixtures_source(mut self, source: &str) -> Self {
        self.fixtures_source = Some(source.to_string());
        self
    }

    pub fn config(mut self, config: CheckerConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a step with its assertion.
    pub fn step<F>(mut self, name: &str, f: F) -> Self
    where
        F: FnOnce(Assertion) -> Assertion,
    {
        self.steps.push(Step {
            name: name.to_string(),
            assertion: f(Assertion::new()),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn checker_config(&self) -> &CheckerConfig {
        &self.config
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Load the fixtures: inline source first, then the file.
    pub fn load_fixtures(&self) -> ScenarioResult<Fixtures> {
        if let Some(ref source) = self.fixtures_source {
            return Fixtures::parse(source);
        }
        match self.fixtures_path {
            Some(ref path) => Fixtures::load(path),
            None => Err(ScenarioError::missing_fixtures(&self.name)),
        }
    }

    /// Run the scenario.
    pub fn run(&self) -> ScenarioResult<()> {
        Runner::new(self)?.run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finnsyll_constraint::Constraint;

    #[test]
    fn test_scenario_builder() {
        let scenario = Scenario::new("builder")
            .fixtures_source("--# light\nka.la\n")
            .config(CheckerConfig::lenient())
            .step("light", |a| a.weights("L.L").well_formed());

        assert_eq!(scenario.name(), "builder");
        assert_eq!(scenario.steps().len(), 1);
        assert_eq!(
            scenario.checker_config().severity(Constraint::Native),
            finnsyll_constraint::ViolationSeverity::Warning
        );
    }

    #[test]
    fn test_missing_fixtures() {
        let err = Scenario::new("empty").run().unwrap_err();
        assert!(matches!(err, ScenarioError::MissingFixtures { .. }));
    }

    #[test]
    fn test_missing_fixture_file() {
        let err = Scenario::new("absent")
            .fixtures("does-not-exist.syll")
            .run()
            .unwrap_err();
        assert!(matches!(err, ScenarioError::FileRead { .. }));
    }
}
