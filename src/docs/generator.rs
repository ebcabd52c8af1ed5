use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

use super::{generate_fonts_page, generate_preferences_page, preferences_schema_json};

/// A generated documentation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocPage {
    /// Reference of every preference key
    Preferences,
    /// Font catalog
    Fonts,
}

impl DocPage {
    /// Every page, in generation order.
    pub const ALL: [DocPage; 2] = [DocPage::Preferences, DocPage::Fonts];

    /// Page name, also the file stem.
    pub fn name(self) -> &'static str {
        match self {
            DocPage::Preferences => "preferences",
            DocPage::Fonts => "fonts",
        }
    }

    /// Looks a page up by name.
    pub fn named(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.name() == name)
    }

    /// Markdown content of the page.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::SchemaConversion` if the schema cannot be serialized.
    pub fn render(self) -> Result<String, DocsError> {
        match self {
            DocPage::Preferences => generate_preferences_page(),
            DocPage::Fonts => Ok(generate_fonts_page()),
        }
    }
}

/// Writes the markdown documentation and the JSON schema to a directory.
pub struct DocsGenerator {
    output_dir: PathBuf,
}

impl Default for DocsGenerator {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("docs"),
        }
    }
}

impl DocsGenerator {
    /// Creates a new documentation generator with default output directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom output directory for generated documentation.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Generates every page plus `preferences.schema.json`.
    ///
    /// Returns the written files.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::FileWrite` if the directory or a file cannot be written.
    pub fn generate_all(&self) -> Result<Vec<PathBuf>, DocsError> {
        let mut written = Vec::new();

        for page in DocPage::ALL {
            written.push(self.generate_page(page)?);
        }
        written.push(self.generate_schema()?);

        Ok(written)
    }

    /// Generates a single page by name.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::InvalidPageName` if no page has this name.
    pub fn generate_page_by_name(&self, page_name: &str) -> Result<PathBuf, DocsError> {
        let page = DocPage::named(page_name)
            .ok_or_else(|| DocsError::InvalidPageName(page_name.to_string()))?;

        self.generate_page(page)
    }

    /// Returns a list of all available page names.
    pub fn list_pages(&self) -> Vec<&'static str> {
        DocPage::ALL.iter().map(|page| page.name()).collect()
    }

    /// Writes one page.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::FileWrite` if the file cannot be written.
    pub fn generate_page(&self, page: DocPage) -> Result<PathBuf, DocsError> {
        let content = page.render()?;
        self.write(&format!("{}.md", page.name()), &content)
    }

    /// Writes the JSON schema of the preference file.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::FileWrite` if the file cannot be written.
    pub fn generate_schema(&self) -> Result<PathBuf, DocsError> {
        let content = preferences_schema_json()?;
        self.write("preferences.schema.json", &content)
    }

    fn write(&self, file_name: &str, content: &str) -> Result<PathBuf, DocsError> {
        fs::create_dir_all(&self.output_dir).map_err(|err| DocsError::FileWrite {
            path: self.output_dir.clone(),
            details: err.to_string(),
        })?;

        let filepath = Path::new(&self.output_dir).join(file_name);
        fs::write(&filepath, content).map_err(|err| DocsError::FileWrite {
            path: filepath.clone(),
            details: err.to_string(),
        })?;

        Ok(filepath)
    }
}

/// Errors that can occur during documentation generation.
#[derive(Error, Debug)]
pub enum DocsError {
    /// Output could not be written
    #[error("failed to write '{path}': {details}")]
    FileWrite {
        /// File or directory being written
        path: PathBuf,
        /// Error details
        details: String,
    },

    /// No page has this name
    #[error("unknown page '{0}'")]
    InvalidPageName(String),

    /// A schema could not be serialized
    #[error("failed to convert schema for {section}: {details}")]
    SchemaConversion {
        /// Section being generated
        section: String,
        /// Error details
        details: String,
    },
}
