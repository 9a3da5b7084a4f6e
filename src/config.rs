use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("root_level must be between 1 and 6, got {0}")]
    InvalidRootLevel(u8),

    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Deepest heading level that is left unwrapped.
///
/// Headings with a level strictly greater than this open a section. Only
/// 1 through 6 can be constructed, so a `RootLevel` that exists is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "u8")]
pub struct RootLevel(u8);

impl RootLevel {
    pub fn new(level: u8) -> Result<Self, ConfigError> {
        if (1..=6).contains(&level) {
            Ok(Self(level))
        } else {
            Err(ConfigError::InvalidRootLevel(level))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Whether a heading of `level` gets its own section.
    pub fn wraps(self, level: u8) -> bool {
        level > self.0
    }
}

impl Default for RootLevel {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u8> for RootLevel {
    type Error = ConfigError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl fmt::Display for RootLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub sections: SectionsConfig,
    pub markdown: MarkdownConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SectionsConfig {
    pub enabled: bool,
    pub root_level: RootLevel,
    /// Emit `<section class="levelN">` instead of a bare `<section>`.
    pub level_class: bool,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            root_level: RootLevel::default(),
            level_class: false,
        }
    }
}

/// Extensions passed through to the Markdown engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub tables: bool,
    pub tasklists: bool,
    pub strikethrough: bool,
    pub footnotes: bool,
    pub heading_attributes: bool,
    /// Treat a leading `---` delimited YAML block as frontmatter and leave it
    /// out of the output.
    pub frontmatter: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            tables: true,
            tasklists: true,
            strikethrough: false,
            footnotes: false,
            heading_attributes: false,
            frontmatter: true,
        }
    }
}

impl MarkdownConfig {
    pub fn options(&self) -> pulldown_cmark::Options {
        use pulldown_cmark::Options;

        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, self.tables);
        options.set(Options::ENABLE_TASKLISTS, self.tasklists);
        options.set(Options::ENABLE_STRIKETHROUGH, self.strikethrough);
        options.set(Options::ENABLE_FOOTNOTES, self.footnotes);
        options.set(Options::ENABLE_HEADING_ATTRIBUTES, self.heading_attributes);
        options.set(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS, self.frontmatter);
        options
    }
}

/// Settings given on the command line, applied over whatever config was loaded.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub root_level: Option<u8>,
    pub no_sections: bool,
    pub level_class: bool,
}

impl Config {
    /// The bundled `default_config.toml`, validated by the build script.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("default_config.toml validated by build.rs")
    }

    /// Pick the config source: an explicit path must load, otherwise `local`
    /// is used when it exists, otherwise the compiled default.
    pub fn resolve(explicit: Option<&Path>, local: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None if local.exists() => Self::load(local),
            None => Ok(Self::compiled_default()),
        }
    }

    pub fn with_overrides(mut self, overrides: &Overrides) -> Result<Self, ConfigError> {
        if let Some(level) = overrides.root_level {
            self.sections.root_level = RootLevel::new(level)?;
        }
        if overrides.no_sections {
            self.sections.enabled = false;
        }
        if overrides.level_class {
            self.sections.level_class = true;
        }
        Ok(self)
    }

    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from a TOML file. Missing keys take their default values,
    /// but an unreadable or invalid file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content, path)?;
        log::debug!(
            "loaded config from {} (root_level = {}, sections enabled = {})",
            path.display(),
            config.sections.root_level,
            config.sections.enabled
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    fn parse(content: &str) -> Result<Config, ConfigError> {
        Config::from_toml_str(content, Path::new("test.toml"))
    }

    #[test]
    fn compiled_default_matches_default_impl() {
        let compiled = Config::compiled_default();
        let built = Config::default();

        assert_eq!(compiled.sections.enabled, built.sections.enabled);
        assert_eq!(compiled.sections.root_level, built.sections.root_level);
        assert_eq!(compiled.sections.level_class, built.sections.level_class);
        assert_eq!(compiled.markdown.tables, built.markdown.tables);
        assert_eq!(compiled.markdown.tasklists, built.markdown.tasklists);
        assert_eq!(compiled.markdown.strikethrough, built.markdown.strikethrough);
        assert_eq!(compiled.markdown.footnotes, built.markdown.footnotes);
        assert_eq!(
            compiled.markdown.heading_attributes,
            built.markdown.heading_attributes
        );
        assert_eq!(compiled.markdown.frontmatter, built.markdown.frontmatter);
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(6)]
    fn accepts_root_level_in_range(#[case] level: u8) {
        assert_eq!(RootLevel::new(level).unwrap().get(), level);
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(255)]
    fn rejects_root_level_out_of_range(#[case] level: u8) {
        let err = RootLevel::new(level).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRootLevel(l) if l == level));
        assert_eq!(
            err.to_string(),
            format!("root_level must be between 1 and 6, got {level}")
        );
    }

    #[test]
    fn wraps_only_deeper_headings() {
        let root = RootLevel::new(2).unwrap();
        assert!(!root.wraps(1));
        assert!(!root.wraps(2));
        assert!(root.wraps(3));
        assert!(root.wraps(6));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = parse("[sections]\nroot_level = 3\n").unwrap();
        assert_eq!(config.sections.root_level.get(), 3);
        assert!(config.sections.enabled);
        assert!(config.markdown.tables);
    }

    #[test]
    fn empty_file_is_default() {
        let config = parse("").unwrap();
        assert_eq!(config.sections.root_level, RootLevel::default());
        assert!(!config.sections.level_class);
    }

    #[test]
    fn invalid_root_level_in_file_fails() {
        let err = parse("[sections]\nroot_level = 9\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("root_level must be between 1 and 6"));
    }

    #[test]
    fn malformed_toml_fails() {
        let err = parse("[sections\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn load_missing_file_is_error() {
        let err = Config::load(Path::new("/nonexistent/sectionize.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn resolve_explicit_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let local = dir.path().join("sectionize.toml");
        fs::write(&local, "[sections]\nroot_level = 2\n").unwrap();

        let missing = dir.path().join("missing.toml");
        let err = Config::resolve(Some(missing.as_path()), &local).unwrap_err();
        assert!(matches!(err, ConfigError::Read { path, .. } if path == missing));
    }

    #[test]
    fn resolve_prefers_explicit_over_local() {
        let dir = TempDir::new().unwrap();
        let local = dir.path().join("sectionize.toml");
        let explicit = dir.path().join("explicit.toml");
        fs::write(&local, "[sections]\nroot_level = 2\n").unwrap();
        fs::write(&explicit, "[sections]\nroot_level = 4\n").unwrap();

        let config = Config::resolve(Some(explicit.as_path()), &local).unwrap();
        assert_eq!(config.sections.root_level.get(), 4);

        let config = Config::resolve(None, &local).unwrap();
        assert_eq!(config.sections.root_level.get(), 2);
    }

    #[test]
    fn resolve_falls_back_to_compiled_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::resolve(None, &dir.path().join("sectionize.toml")).unwrap();
        assert_eq!(config.sections.root_level, RootLevel::default());
        assert!(config.sections.enabled);
    }

    #[test]
    fn invalid_root_level_override_fails() {
        let overrides = Overrides {
            root_level: Some(9),
            ..Overrides::default()
        };
        let err = Config::default().with_overrides(&overrides).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRootLevel(9)));
    }

    #[test]
    fn overrides_replace_file_values() {
        let config = parse("[sections]\nenabled = true\nroot_level = 2\nlevel_class = false\n").unwrap();
        let overrides = Overrides {
            root_level: Some(3),
            no_sections: true,
            level_class: true,
        };
        let config = config.with_overrides(&overrides).unwrap();

        assert_eq!(config.sections.root_level.get(), 3);
        assert!(!config.sections.enabled);
        assert!(config.sections.level_class);
    }

    #[test]
    fn empty_overrides_keep_file_values() {
        let config = parse("[sections]\nenabled = false\nroot_level = 5\n").unwrap();
        let config = config.with_overrides(&Overrides::default()).unwrap();

        assert_eq!(config.sections.root_level.get(), 5);
        assert!(!config.sections.enabled);
        assert!(!config.sections.level_class);
    }

    #[test]
    fn options_follow_flags() {
        use pulldown_cmark::Options;

        let config = parse("[markdown]\ntables = false\nfootnotes = true\n").unwrap();
        let options = config.markdown.options();
        assert!(!options.contains(Options::ENABLE_TABLES));
        assert!(options.contains(Options::ENABLE_FOOTNOTES));
        assert!(options.contains(Options::ENABLE_TASKLISTS));
        assert!(options.contains(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS));
    }
}
