use anyhow::{Result, Context, anyhow};
use log::{error, warn, info, debug};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::deck::{DeckParser, Document, ElementKind};
use crate::errors::DeckError;
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::latex::LatexRenderer;
use crate::validation::{Severity, ValidationReport, ValidationService};

// @module: Application controller for deck rendering

/// One rendered output of a deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDeck {
    /// Language the slides were filtered by, `None` for an unfiltered render
    pub language: Option<String>,
    /// LaTeX source
    pub latex: String,
}

/// Outcome of processing a directory of decks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderSummary {
    /// Decks rendered successfully
    pub processed: usize,
    /// Decks that failed
    pub failed: usize,
    /// Files written
    pub written: Vec<PathBuf>,
}

/// Main application controller for deck rendering
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Render only this language when set
    language: Option<String>,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self {
            config,
            language: None,
        })
    }

    /// Restrict every run to a single language
    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Collect the `lang` tags of all slides.
    ///
    /// Every slide must carry a non-empty `lang`; the first one without it
    /// aborts with `DeckError::MissingLanguage`.
    pub fn discover_languages(document: &Document) -> std::result::Result<BTreeSet<String>, DeckError> {
        let mut languages = BTreeSet::new();
        for scene in &document.scenes {
            for (idx, element) in scene.elements.iter().enumerate() {
                if element.kind() != ElementKind::Slide {
                    continue;
                }
                match element.param("lang") {
                    Some(lang) if !lang.is_empty() => {
                        languages.insert(lang.to_string());
                    }
                    _ => {
                        return Err(DeckError::MissingLanguage {
                            scene: scene.title.clone(),
                            position: idx + 1,
                        });
                    }
                }
            }
        }
        Ok(languages)
    }

    /// Render a parsed deck: once unfiltered, or once per language when
    /// the slides use more than one language
    pub fn render_deck(&self, document: &Document) -> Result<Vec<RenderedDeck>> {
        let languages = Self::discover_languages(document)?;
        let settings = self.config.latex.render_settings();

        let targets: Vec<Option<String>> = match &self.language {
            Some(requested) => {
                let tag = language_utils::resolve_deck_language(requested, languages.iter().map(String::as_str))
                    .ok_or_else(|| anyhow!(
                        "Language '{}' not found in deck. Available languages: {}",
                        requested,
                        languages.iter().cloned().collect::<Vec<_>>().join(", ")
                    ))?;
                vec![Some(tag.to_string())]
            }
            None if languages.len() > 1 => languages.into_iter().map(Some).collect(),
            None => vec![None],
        };

        debug!("Rendering {} output(s)", targets.len());

        Ok(targets
            .into_iter()
            .map(|language| {
                let latex = LatexRenderer::new(document)
                    .with_settings(settings.clone())
                    .with_language(language.as_deref())
                    .render();
                RenderedDeck { language, latex }
            })
            .collect())
    }

    /// Directory outputs for `input_file` are written to
    pub fn output_dir_for(&self, input_file: &Path) -> PathBuf {
        match &self.config.output.directory {
            Some(dir) => PathBuf::from(dir),
            None => input_file.parent().unwrap_or(Path::new("")).to_path_buf(),
        }
    }

    /// Output path of one rendered deck
    pub fn output_path_for(&self, input_file: &Path, language: Option<&str>) -> PathBuf {
        FileManager::generate_output_path(
            input_file,
            self.output_dir_for(input_file),
            language,
            &self.config.output.suffix,
            &self.config.output.extension,
        )
    }

    /// Render one deck file and write its output(s).
    ///
    /// Returns the paths written. Existing outputs are kept unless
    /// `force_overwrite` is set.
    pub fn run(&self, input_file: &Path, force_overwrite: bool) -> Result<Vec<PathBuf>> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let source = FileManager::read_to_string(input_file)?;
        let document = DeckParser::new(&source).parse();

        if self.config.validation.check_before_render {
            let report = self.validation_service().validate(&source, &document);
            Self::log_report(&report);
        }

        let rendered = self
            .render_deck(&document)
            .with_context(|| format!("Failed to render deck: {:?}", input_file))?;

        let mut written = Vec::new();
        for output in rendered {
            let output_path = self.output_path_for(input_file, output.language.as_deref());
            if output_path.exists() && !force_overwrite {
                warn!("Skipping {:?}, output already exists (use -f to force overwrite)", output_path);
                continue;
            }

            FileManager::write_to_file(&output_path, &output.latex)?;
            match output.language.as_deref().map(language_utils::get_language_name) {
                Some(Ok(name)) => info!("LaTeX output ({}) written to {:?}", name, output_path),
                _ => info!("LaTeX output written to {:?}", output_path),
            }
            written.push(output_path);
        }

        Ok(written)
    }

    /// Render every deck below `input_dir`; failures are logged and counted
    pub fn run_folder(&self, input_dir: &Path, force_overwrite: bool) -> Result<FolderSummary> {
        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let decks = FileManager::find_decks(input_dir)?;
        if decks.is_empty() {
            warn!("No deck files found in directory: {:?}", input_dir);
            return Ok(FolderSummary::default());
        }

        let progress_bar = ProgressBar::new(decks.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} decks {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style);

        let mut summary = FolderSummary::default();
        for deck in &decks {
            progress_bar.set_message(
                deck.file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_default(),
            );

            match self.run(deck, force_overwrite) {
                Ok(written) => {
                    summary.processed += 1;
                    summary.written.extend(written);
                }
                Err(e) => {
                    error!("Error processing {:?}: {:#}", deck, e);
                    summary.failed += 1;
                }
            }
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        info!(
            "Finished processing {} deck(s), {} failed",
            summary.processed, summary.failed
        );
        Ok(summary)
    }

    /// Validate one deck file
    pub fn check(&self, input_file: &Path) -> Result<ValidationReport> {
        let source = FileManager::read_to_string(input_file)?;
        Ok(self.validation_service().validate_source(&source))
    }

    /// Whether a report passes under the configured strictness
    pub fn check_passed(&self, report: &ValidationReport) -> bool {
        self.validation_service().passed(report)
    }

    /// Parse a deck file and return its tree as pretty JSON
    pub fn dump_ast(&self, input_file: &Path) -> Result<String> {
        let source = FileManager::read_to_string(input_file)?;
        let document = DeckParser::new(&source).parse();
        serde_json::to_string_pretty(&document).context("Failed to serialize document")
    }

    fn validation_service(&self) -> ValidationService {
        ValidationService::new(self.config.validation.clone())
    }

    fn log_report(report: &ValidationReport) {
        for diagnostic in &report.diagnostics {
            match diagnostic.severity {
                Severity::Error => error!("{}", diagnostic),
                Severity::Warning => warn!("{}", diagnostic),
            }
        }
    }
}
