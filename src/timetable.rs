use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::category::Category;
use crate::error::LoadError;
use crate::output::{timestamp, write_pretty_json};
use crate::{SOURCE, TIMETABLE_FILE, VERSION};

/// The merged `timetable.json` document
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    pub metadata: Metadata,
    pub data: TimetableData,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub version: String,
    pub generated_at: String,
    pub source: String,
    pub transport_types: Vec<Category>,
    pub total_routes: usize,
    pub total_stops: usize,
}

/// One entry per category, serialized in `Category::ALL` order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimetableData {
    pub buses: CategoryEntry,
    pub trolleybuses: CategoryEntry,
    pub minibuses: CategoryEntry,
}

impl TimetableData {
    pub fn get(&self, category: Category) -> &CategoryEntry {
        match category {
            Category::Buses => &self.buses,
            Category::Trolleybuses => &self.trolleybuses,
            Category::Minibuses => &self.minibuses,
        }
    }
}

/// Either the export passed through verbatim or `{"error": "..."}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryEntry {
    Failed(LoadFailure),
    Loaded(Value),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoadFailure {
    pub error: String,
}

impl CategoryEntry {
    pub fn error(&self) -> Option<&str> {
        match self {
            CategoryEntry::Failed(f) => Some(&f.error),
            CategoryEntry::Loaded(_) => None,
        }
    }
}

impl From<LoadError> for CategoryEntry {
    fn from(e: LoadError) -> Self {
        CategoryEntry::Failed(LoadFailure { error: e.to_string() })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteCounts {
    pub routes: usize,
    pub stops: usize,
}

/// Count routes and their stops. Missing `routes` / `stops` count as empty.
/// Arrays, objects and strings count their elements, entries or characters;
/// null, numbers and booleans have no size and are an error, as is a route
/// that is not an object.
pub fn count_routes(doc: &Value) -> std::result::Result<RouteCounts, String> {
    let obj = doc
        .as_object()
        .ok_or_else(|| format!("top-level JSON is not an object (found {})", kind(doc)))?;

    let Some(routes) = obj.get("routes") else {
        return Ok(RouteCounts::default());
    };
    let len = sized_len(routes).ok_or_else(|| format!("'routes' has no length (found {})", kind(routes)))?;

    let mut counts = RouteCounts { routes: len, stops: 0 };
    let items = match routes {
        Value::Array(arr) => arr,
        // iterating an object or string yields strings, never routes
        _ if len > 0 => return Err("route #0 is not an object (found string)".to_string()),
        _ => return Ok(counts),
    };

    for (i, route) in items.iter().enumerate() {
        let route = route
            .as_object()
            .ok_or_else(|| format!("route #{i} is not an object (found {})", kind(route)))?;
        if let Some(stops) = route.get("stops") {
            counts.stops += sized_len(stops)
                .ok_or_else(|| format!("'stops' of route #{i} has no length (found {})", kind(stops)))?;
        }
    }
    Ok(counts)
}

fn sized_len(v: &Value) -> Option<usize> {
    match v {
        Value::Array(arr) => Some(arr.len()),
        Value::Object(map) => Some(map.len()),
        Value::String(s) => Some(s.chars().count()),
        _ => None,
    }
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read and count one category export from `data_dir`.
pub fn load_category(
    data_dir: &Path,
    category: Category,
) -> std::result::Result<(Value, RouteCounts), LoadError> {
    let path = category.input_path(data_dir);
    if !path.exists() {
        return Err(LoadError::MissingInputFile { path });
    }

    let raw = fs::read_to_string(&path).map_err(|e| LoadError::invalid(&path, e))?;
    let doc: Value = serde_json::from_str(&raw).map_err(|e| LoadError::invalid(&path, e))?;
    let counts = count_routes(&doc).map_err(|e| LoadError::invalid(&path, e))?;
    Ok((doc, counts))
}

/// Merge every category found in `data_dir`. Never fails: a category that
/// cannot be loaded is recorded as an error entry and contributes nothing.
pub fn build_timetable(data_dir: &Path) -> Timetable {
    let mut total = RouteCounts::default();

    let [buses, trolleybuses, minibuses] = Category::ALL.map(|category| {
        match load_category(data_dir, category) {
            Ok((doc, counts)) => {
                total.routes += counts.routes;
                total.stops += counts.stops;
                println!("✓ {category}: {} routes", counts.routes);
                info!("{category}: {} routes, {} stops", counts.routes, counts.stops);
                CategoryEntry::Loaded(doc)
            }
            Err(e @ LoadError::MissingInputFile { .. }) => {
                println!("⚠ {} not found", category.file_name());
                warn!("{category}: {:?} not found", e.path());
                e.into()
            }
            Err(e) => {
                println!("✗ Failed to load {category}: {e}");
                error!("{category}: {:?}: {e}", e.path());
                e.into()
            }
        }
    });

    Timetable {
        metadata: Metadata {
            version: VERSION.to_string(),
            generated_at: timestamp(),
            source: SOURCE.to_string(),
            transport_types: Category::ALL.to_vec(),
            total_routes: total.routes,
            total_stops: total.stops,
        },
        data: TimetableData { buses, trolleybuses, minibuses },
    }
}

/// Write `timetable.json` into `data_dir`, returning its path.
pub fn write_timetable(data_dir: &Path, timetable: &Timetable) -> Result<PathBuf> {
    let path = data_dir.join(TIMETABLE_FILE);
    write_pretty_json(&path, timetable)?;
    info!("Wrote {:?}", path);
    Ok(path)
}
