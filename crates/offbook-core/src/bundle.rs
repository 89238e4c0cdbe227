//! Packaging bundle description.
//!
//! Defines the structure of the JSON file the external bundling tool
//! consumes when producing the distributable artifact. This is purely
//! data: the exclusion list is advisory and is never validated against the
//! application's actual imports — keeping it in sync is the packager's job.

use crate::error::{OffBookError, Result};
use crate::persist;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A data directory embedded into the artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataDir {
    /// Source directory relative to the project root.
    pub source: PathBuf,
    /// Destination path inside the bundle.
    pub dest: String,
}

/// Declarative description of the packaged artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleSpec {
    /// Output artifact name.
    pub name: String,
    /// Icon file; absent when the platform build ships without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<PathBuf>,
    /// Reverse-DNS bundle identifier.
    pub bundle_identifier: String,
    /// Data directories embedded into the artifact.
    #[serde(default)]
    pub data_dirs: Vec<DataDir>,
    /// Module names known to be unused at runtime; the bundler omits them
    /// to shrink the artifact.
    #[serde(default)]
    pub excluded_modules: Vec<String>,
    /// Run the executable through a general-purpose compressor.
    #[serde(default)]
    pub compress: bool,
}

impl Default for BundleSpec {
    fn default() -> Self {
        Self {
            name: "Scene Partner".to_string(),
            icon: None,
            bundle_identifier: "com.offbook.scenepartner".to_string(),
            data_dirs: vec![
                DataDir {
                    source: PathBuf::from("app/resources"),
                    dest: "resources".to_string(),
                },
            ],
            excluded_modules: [
                "tkinter",
                "test",
                "unittest",
                "pydoc",
                "doctest",
                "lib2to3",
                "xmlrpc",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            compress: false,
        }
    }
}

impl BundleSpec {
    /// Load a bundle spec from a JSON file.
    ///
    /// Unlike settings, a missing spec file is an error: the packager was
    /// pointed at something that isn't there.
    pub fn load(path: &Path) -> Result<Self> {
        persist::read_json(path)?
            .ok_or_else(|| OffBookError::FileNotFound(path.to_path_buf()))
    }

    /// Save the bundle spec to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        persist::write_json(path, self)
    }
}
