use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::WqConfig;
use crate::classification::RangeClassifier;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".wqindex.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<WqConfig> {
    let config = toml::from_str::<WqConfig>(contents)?;

    // Unknown index names are fatal; gaps and overlaps only warn.
    config.classification_scales()?;
    for (name, ranges) in &config.classification {
        for problem in RangeClassifier::new(ranges.clone()).validate() {
            log::warn!("Classification for '{}': {}", name, problem);
        }
    }

    for (symbol, custom) in &config.standards.overrides {
        for (field, value) in [
            ("ideal", custom.ideal),
            ("permissible", custom.permissible),
            ("mac", custom.mac),
        ] {
            match value {
                Some(v) if !v.is_finite() => {
                    return Err(Error::configuration(format!(
                        "standard '{}': {} must be a finite number",
                        symbol, field
                    )));
                }
                Some(v) if v <= 0.0 && field != "ideal" => {
                    log::warn!(
                        "Standard '{}' has {} = {}; indices dividing by it will skip or reject it",
                        symbol,
                        field,
                        v
                    );
                }
                _ => {}
            }
        }
    }

    Ok(config)
}

/// Load configuration from an explicit path
pub fn load_config_from_path(path: &Path) -> Result<WqConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::configuration(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let config = parse_and_validate_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<WqConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}: {}. Using defaults.", config_path.display(), e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.wqindex.toml`
pub fn load_config_from(start: PathBuf) -> WqConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            WqConfig::default()
        })
}

pub fn load_config() -> WqConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            WqConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indices::IndexKind;
    use crate::io::output::OutputFormat;
    use crate::units::Unit;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [input]
            unit = "mg/L"

            [standards.overrides.Pb]
            mac = 10.0

            [standards.overrides.U]
            name = "Uranium"
            category = "heavy_metal"
            permissible = 30.0

            [[classification.hpi]]
            max = 100.0
            label = "Low pollution"
            severity = 1

            [[classification.hpi]]
            min = 100.0
            label = "High pollution"
            severity = 3

            [output]
            default_format = "markdown"
            detailed = true

            [parallel]
            jobs = 2
        "#})
        .unwrap();

        assert_eq!(config.input.unit, Unit::MgPerL);
        assert_eq!(config.output.default_format, OutputFormat::Markdown);
        assert!(config.output.detailed);
        assert_eq!(config.parallel.jobs, 2);

        let registry = config.build_registry().unwrap();
        assert_eq!(registry.lookup("U").unwrap().name, "Uranium");
        assert_eq!(
            registry.lookup("Pb").unwrap().max_allowable_concentration,
            10.0
        );

        let scales = config.classification_scales().unwrap();
        assert_eq!(scales.classify(IndexKind::Hpi, 120.0).label, "High pollution");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert!(config.standards.include_defaults);
        assert_eq!(config.input.unit, Unit::UgPerL);
        assert_eq!(config.output.default_format, OutputFormat::Terminal);
    }

    #[test]
    fn test_invalid_unit_is_rejected() {
        let err = parse_and_validate_config("[input]\nunit = \"grains\"\n").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_non_finite_override_is_rejected() {
        let err = parse_and_validate_config("[standards.overrides.Pb]\nmac = nan\n").unwrap_err();
        assert!(err.to_string().contains("finite"));
    }

    #[test]
    fn test_directory_ancestors_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }

    #[test]
    fn test_load_config_from_ancestor() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[parallel]\njobs = 3\n",
        )
        .unwrap();
        let nested = temp.path().join("data").join("2024");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config_from(nested);
        assert_eq!(config.parallel.jobs, 3);
    }

    #[test]
    fn test_load_config_from_missing_path_errors() {
        let temp = TempDir::new().unwrap();
        let err = load_config_from_path(&temp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
