use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// Transport types published by brestgortrans.by
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Buses,
    Trolleybuses,
    Minibuses,
}

impl Category {
    // processing and output order, never sorted
    pub const ALL: [Category; 3] = [Category::Buses, Category::Trolleybuses, Category::Minibuses];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Buses => "buses",
            Category::Trolleybuses => "trolleybuses",
            Category::Minibuses => "minibuses",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.json", self.as_str())
    }

    pub fn input_path(self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Buses => "Данные автобусных маршрутов",
            Category::Trolleybuses => "Данные троллейбусных маршрутов",
            Category::Minibuses => "Данные маршрутных такси",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
