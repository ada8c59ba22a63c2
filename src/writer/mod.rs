//! Writes a generated bundle to disk as markdown documents plus a JSON export.
//!
//! | File                 | Content |
//! |----------------------|---------|
//! | `digital_ideas.md`   | Scored digital product ideas |
//! | `physical_ideas.md`  | Scored physical / print-on-demand ideas |
//! | `prompts.md`         | AI prompts |
//! | `bundle.json`        | The full bundle, camelCase JSON |
//! | `README.md`          | Overview and reproduction command |

pub mod error;
pub mod markdown;

use std::fs;
use std::path::{Path, PathBuf};

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::idea_engine::{
    catalogs::{DIGITAL_TEMPLATES, PHYSICAL_TEMPLATES, PROMPT_TEMPLATES, SCORE_BASELINES},
    models::{Category, GeneratedBundle, Scores, TypeKeyword},
};

pub use error::{Result, WriteError};

pub const DIGITAL_FILE: &str = "digital_ideas.md";
pub const PHYSICAL_FILE: &str = "physical_ideas.md";
pub const PROMPTS_FILE: &str = "prompts.md";
pub const BUNDLE_FILE: &str = "bundle.json";
pub const README_FILE: &str = "README.md";

/// Default target of [`export_templates`] when the CLI gets no path.
pub const DEFAULT_TEMPLATES_FILE: &str = "templates.json";

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| WriteError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: PathBuf, contents: &str) -> Result<PathBuf> {
    fs::write(&path, contents).map_err(|source| WriteError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(path)
}

/// Render `bundle` into `out_dir`, creating the directory if needed.
///
/// Returns the written paths in a stable order.
pub fn write_output_files(bundle: &GeneratedBundle, out_dir: &Path) -> Result<Vec<PathBuf>> {
    create_dir_all(out_dir)?;

    let json = serde_json::to_string_pretty(bundle)?;
    let documents = [
        (DIGITAL_FILE, markdown::ideas_document(bundle, Category::Digital)),
        (PHYSICAL_FILE, markdown::ideas_document(bundle, Category::Physical)),
        (PROMPTS_FILE, markdown::prompts_document(bundle)),
        (BUNDLE_FILE, json),
        (README_FILE, markdown::readme(bundle)),
    ];

    documents
        .iter()
        .map(|(name, contents)| write_file(out_dir.join(name), contents))
        .collect()
}

/// Baseline rows as a JSON object, keys in lookup order.
struct ScorePatterns(&'static [(TypeKeyword, Scores)]);

impl Serialize for ScorePatterns {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (keyword, scores) in self.0 {
            map.serialize_entry(keyword.as_str(), scores)?;
        }
        map.end()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TemplateExport {
    digital: &'static [&'static str],
    physical: &'static [&'static str],
    prompts: &'static [&'static str],
    score_patterns: ScorePatterns,
}

/// Dump the built-in catalogs and score baselines as pretty JSON.
pub fn export_templates(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }

    let export = TemplateExport {
        digital: DIGITAL_TEMPLATES,
        physical: PHYSICAL_TEMPLATES,
        prompts: PROMPT_TEMPLATES,
        score_patterns: ScorePatterns(SCORE_BASELINES),
    };
    let json = serde_json::to_string_pretty(&export)?;
    write_file(path.to_path_buf(), &json)?;
    Ok(())
}
