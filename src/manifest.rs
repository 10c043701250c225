use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::output::{timestamp, write_pretty_json};
use crate::{MANIFEST_FILE, SOURCE, VERSION};

const TIMETABLE_DESCRIPTION: &str = "Единый файл с данными всех типов транспорта";
const FORMAT: &str = "JSON";
const ENCODING: &str = "UTF-8";

/// `meta.json`: static description of the published files
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub last_updated: String,
    pub version: String,
    pub source: String,
    pub files: ManifestFiles,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ManifestFiles {
    #[serde(rename = "timetable.json")]
    pub timetable: FileEntry,
    #[serde(rename = "buses.json")]
    pub buses: FileEntry,
    #[serde(rename = "trolleybuses.json")]
    pub trolleybuses: FileEntry,
    #[serde(rename = "minibuses.json")]
    pub minibuses: FileEntry,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    pub description: String,
    pub format: String,
    pub encoding: String,
}

impl FileEntry {
    fn json(description: &str) -> Self {
        Self {
            description: description.to_string(),
            format: FORMAT.to_string(),
            encoding: ENCODING.to_string(),
        }
    }
}

pub fn build_manifest() -> Manifest {
    Manifest {
        last_updated: timestamp(),
        version: VERSION.to_string(),
        source: SOURCE.to_string(),
        files: ManifestFiles {
            timetable: FileEntry::json(TIMETABLE_DESCRIPTION),
            buses: FileEntry::json(Category::Buses.description()),
            trolleybuses: FileEntry::json(Category::Trolleybuses.description()),
            minibuses: FileEntry::json(Category::Minibuses.description()),
        },
    }
}

/// Write `meta.json` into `data_dir`, returning its path.
pub fn write_manifest(data_dir: &Path, manifest: &Manifest) -> Result<PathBuf> {
    let path = data_dir.join(MANIFEST_FILE);
    write_pretty_json(&path, manifest)?;
    info!("Wrote {:?}", path);
    Ok(path)
}
