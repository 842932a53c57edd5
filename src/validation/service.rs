/*!
 * Validation service that orchestrates all validators.
 *
 * This module provides a unified interface for running every deck check
 * on a source text and its parsed document.
 */

use log::debug;

use crate::app_config::ValidationConfig;
use crate::deck::{DeckParser, Document};

use super::diagnostic::ValidationReport;
use super::header::HeaderValidator;
use super::scenes::SceneValidator;
use super::slides::SlideValidator;

/// Runs all validators over one deck
pub struct ValidationService {
    config: ValidationConfig,
}

impl ValidationService {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Whether warnings count as failures
    pub fn is_strict(&self) -> bool {
        self.config.strict
    }

    /// Validate a deck; `source` is the text `document` was parsed from
    pub fn validate(&self, source: &str, document: &Document) -> ValidationReport {
        let mut report = ValidationReport::new();

        let header_entries = DeckParser::new(source).header_entries();
        HeaderValidator::validate(header_entries.as_deref(), &mut report);
        SceneValidator::validate(document, &mut report);
        SlideValidator::validate(document, &mut report);

        debug!(
            "Validation finished: {} error(s), {} warning(s)",
            report.error_count(),
            report.warning_count()
        );
        report
    }

    /// Parse and validate in one step
    pub fn validate_source(&self, source: &str) -> ValidationReport {
        let document = DeckParser::new(source).parse();
        self.validate(source, &document)
    }

    /// Whether a report passes under this service's configuration
    pub fn passed(&self, report: &ValidationReport) -> bool {
        report.passed(self.config.strict)
    }
}

impl Default for ValidationService {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
