//! Filesystem side of the CLI: config file and external example sources.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use patchbook_core::{
    Catalog, CatalogBuilder, CatalogError, Config, ExternalSource, IntegrityPolicy, Result,
    SourceFormat, CONFIG_FILE, DEFAULT_CONFIG_TEMPLATE,
};

/// Get config file path
pub fn config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(CONFIG_FILE)
}

/// Load config from base directory (defaults when absent)
pub fn load_config(base_dir: &Path) -> Result<Config> {
    let path = config_path(base_dir);
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)?;
    Config::from_toml_str(&content)
}

/// Save config to base directory
pub fn save_config(config: &Config, base_dir: &Path) -> Result<()> {
    fs::create_dir_all(base_dir)?;
    fs::write(config_path(base_dir), config.to_toml_string()?)?;
    Ok(())
}

/// Initialize config with default template, keeping an existing file
pub fn init_config(base_dir: &Path) -> Result<PathBuf> {
    let path = config_path(base_dir);
    fs::create_dir_all(base_dir)?;

    if !path.exists() {
        fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
    }

    Ok(path)
}

/// Parse one source file, picking the format from its extension
pub fn load_source(path: &Path) -> Result<ExternalSource> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let format = SourceFormat::from_extension(extension).ok_or_else(|| {
        CatalogError::UnsupportedSourceFormat {
            extension: extension.to_string(),
        }
    })?;

    let content = fs::read_to_string(path)?;
    ExternalSource::parse(&path.display().to_string(), &content, format)
}

/// Source files below a directory, sorted by path
pub fn collect_source_dir(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .and_then(SourceFormat::from_extension)
                .is_some()
        })
        .collect()
}

/// Where the catalog's external sources come from, in merge order
pub struct SourcePlan {
    /// Configured sources, relative to the base directory
    pub configured: Vec<String>,
    /// `--source` arguments
    pub explicit: Vec<PathBuf>,
    /// `--source-dir` argument
    pub directory: Option<PathBuf>,
}

impl SourcePlan {
    /// Resolved paths: configured, then explicit, then directory contents
    pub fn paths(&self, base_dir: &Path) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self
            .configured
            .iter()
            .map(|s| base_dir.join(s))
            .collect();
        paths.extend(self.explicit.iter().cloned());
        if let Some(dir) = &self.directory {
            paths.extend(collect_source_dir(dir));
        }
        paths
    }
}

/// Build the catalog from builtin data plus every planned source
pub fn build_catalog(base_dir: &Path, plan: &SourcePlan, policy: IntegrityPolicy) -> Result<Catalog> {
    let mut builder = CatalogBuilder::new().with_policy(policy);
    for path in plan.paths(base_dir) {
        debug!(path = %path.display(), "loading example source");
        builder = builder.with_source(load_source(&path)?);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PLAYGROUND: &str = r#"
name = "playground"
title = "Playground"

[[categories]]
id = "sketches"
title = "Sketches"

[[examples]]
id = "noise-sketch"
title = "Noise Sketch"
category = "sketches"
code = "WhiteNoise n;"
"#;

    const COMMUNITY: &str = r#"{
        "name": "community",
        "examples": [
            {"id": "wobble", "title": "Wobble", "category": "synths", "code": "x"}
        ]
    }"#;

    fn no_sources() -> SourcePlan {
        SourcePlan {
            configured: Vec::new(),
            explicit: Vec::new(),
            directory: None,
        }
    }

    #[test]
    fn config_missing_file_is_default() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn config_save_load() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.set("catalog.policy", "strict").unwrap();
        save_config(&config, temp.path()).unwrap();

        let loaded = load_config(temp.path()).unwrap();
        assert_eq!(loaded.policy(), IntegrityPolicy::Strict);
    }

    #[test]
    fn config_init_keeps_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = init_config(temp.path()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_TEMPLATE);

        fs::write(&path, "[catalog]\npolicy = \"strict\"\n").unwrap();
        init_config(temp.path()).unwrap();
        assert_eq!(load_config(temp.path()).unwrap().policy(), IntegrityPolicy::Strict);
    }

    #[test]
    fn load_source_by_extension() {
        let temp = TempDir::new().unwrap();
        let toml_path = temp.path().join("playground.toml");
        let json_path = temp.path().join("community.json");
        let yaml_path = temp.path().join("other.yaml");
        fs::write(&toml_path, PLAYGROUND).unwrap();
        fs::write(&json_path, COMMUNITY).unwrap();
        fs::write(&yaml_path, "name: other").unwrap();

        assert_eq!(load_source(&toml_path).unwrap().name, "playground");
        assert_eq!(load_source(&json_path).unwrap().name, "community");
        assert!(matches!(
            load_source(&yaml_path),
            Err(CatalogError::UnsupportedSourceFormat { .. })
        ));
    }

    #[test]
    fn source_dir_is_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("b.toml"), PLAYGROUND).unwrap();
        fs::write(temp.path().join("a.json"), COMMUNITY).unwrap();
        fs::write(temp.path().join("notes.txt"), "ignored").unwrap();
        fs::write(temp.path().join("nested").join("c.toml"), PLAYGROUND).unwrap();

        let names: Vec<String> = collect_source_dir(temp.path())
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "b.toml", "c.toml"]);
    }

    #[test]
    fn build_catalog_merges_sources_in_plan_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("playground.toml"), PLAYGROUND).unwrap();
        let community = temp.path().join("community.json");
        fs::write(&community, COMMUNITY).unwrap();

        let plan = SourcePlan {
            configured: vec!["playground.toml".to_string()],
            explicit: vec![community],
            directory: None,
        };
        let catalog = build_catalog(temp.path(), &plan, IntegrityPolicy::Strict).unwrap();

        let ids: Vec<&str> = catalog.examples().iter().map(|e| e.id()).collect();
        let noise = ids.iter().position(|id| *id == "noise-sketch").unwrap();
        let wobble = ids.iter().position(|id| *id == "wobble").unwrap();
        let fm = ids.iter().position(|id| *id == "fm-poly-synth").unwrap();
        assert!(noise < wobble && wobble < fm);
        assert_eq!(catalog.category_title("sketches"), "Sketches");
    }

    #[test]
    fn build_catalog_without_sources_is_builtin() {
        let temp = TempDir::new().unwrap();
        let catalog = build_catalog(temp.path(), &no_sources(), IntegrityPolicy::Lenient).unwrap();
        assert_eq!(catalog.len(), Catalog::builtin().unwrap().len());
    }

    #[test]
    fn build_catalog_reports_missing_source() {
        let temp = TempDir::new().unwrap();
        let plan = SourcePlan {
            configured: Vec::new(),
            explicit: vec![temp.path().join("missing.toml")],
            directory: None,
        };
        let err = build_catalog(temp.path(), &plan, IntegrityPolicy::Lenient).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
