//! Loading tables from JSON files.
//!
//! Each table lives in its own file inside a tables directory:
//!
//! ```text
//! birthsigns.json  {"birthsigns": [{"sign": "...", "disposition": "..."}]}
//! coat.json        {"colors": [{"color": "..."}], "patterns": [{"pattern": "..."}]}
//! detail.json      {"details": [{"detail": "..."}]}
//! background.json  {"hp": [{"pips": [{"background": "...", "item1": "...", "item2": "..."}]}]}
//! ```
//!
//! Every table is checked for emptiness as it is loaded, so the resolvers
//! never see a table they cannot roll on.

use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{TableError, TableResult};
use crate::model::{Background, BackgroundTable, Birthsign, BirthsignTable, CoatTable, DetailTable};

/// File name of the birthsign table.
pub const BIRTHSIGNS_FILE: &str = "birthsigns.json";
/// File name of the coat table.
pub const COAT_FILE: &str = "coat.json";
/// File name of the detail table.
pub const DETAIL_FILE: &str = "detail.json";
/// File name of the background table.
pub const BACKGROUND_FILE: &str = "background.json";

const BUILTIN_BIRTHSIGNS: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../tables/birthsigns.json"));
const BUILTIN_COAT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../tables/coat.json"));
const BUILTIN_DETAIL: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../tables/detail.json"));
const BUILTIN_BACKGROUND: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../tables/background.json"));

#[derive(Deserialize)]
struct BirthsignsFile {
    birthsigns: Vec<Birthsign>,
}

#[derive(Deserialize)]
struct CoatFile {
    colors: Vec<ColorRecord>,
    patterns: Vec<PatternRecord>,
}

#[derive(Deserialize)]
struct ColorRecord {
    color: String,
}

#[derive(Deserialize)]
struct PatternRecord {
    pattern: String,
}

#[derive(Deserialize)]
struct DetailsFile {
    details: Vec<DetailRecord>,
}

#[derive(Deserialize)]
struct DetailRecord {
    detail: String,
}

#[derive(Deserialize)]
struct BackgroundFile {
    hp: Vec<HpRow>,
}

#[derive(Deserialize)]
struct HpRow {
    pips: Vec<Background>,
}

fn parse<T: DeserializeOwned>(json: &str, table: &'static str) -> TableResult<T> {
    serde_json::from_str(json).map_err(|source| TableError::Parse { table, source })
}

fn read(path: &Path) -> TableResult<String> {
    tracing::debug!(path = %path.display(), "reading table");
    std::fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl BirthsignTable {
    /// Parse a birthsign table from JSON.
    pub fn from_json(json: &str) -> TableResult<Self> {
        let file: BirthsignsFile = parse(json, "birthsigns")?;
        let table = Self {
            entries: file.birthsigns,
        };
        table.ensure_filled()?;
        Ok(table)
    }

    /// Read and parse a birthsign table file.
    pub fn load(path: &Path) -> TableResult<Self> {
        Self::from_json(&read(path)?)
    }
}

impl CoatTable {
    /// Parse a coat table from JSON.
    pub fn from_json(json: &str) -> TableResult<Self> {
        let file: CoatFile = parse(json, "coat")?;
        let table = Self {
            colors: file.colors.into_iter().map(|c| c.color).collect(),
            patterns: file.patterns.into_iter().map(|p| p.pattern).collect(),
        };
        table.ensure_filled()?;
        Ok(table)
    }

    /// Read and parse a coat table file.
    pub fn load(path: &Path) -> TableResult<Self> {
        Self::from_json(&read(path)?)
    }
}

impl DetailTable {
    /// Parse a detail table from JSON.
    pub fn from_json(json: &str) -> TableResult<Self> {
        let file: DetailsFile = parse(json, "details")?;
        let table = Self {
            details: file.details.into_iter().map(|d| d.detail).collect(),
        };
        table.ensure_filled()?;
        Ok(table)
    }

    /// Read and parse a detail table file.
    pub fn load(path: &Path) -> TableResult<Self> {
        Self::from_json(&read(path)?)
    }
}

impl BackgroundTable {
    /// Parse a background grid from JSON.
    pub fn from_json(json: &str) -> TableResult<Self> {
        let file: BackgroundFile = parse(json, "backgrounds")?;
        let table = Self {
            rows: file.hp.into_iter().map(|row| row.pips).collect(),
        };
        table.ensure_filled()?;
        Ok(table)
    }

    /// Read and parse a background table file.
    pub fn load(path: &Path) -> TableResult<Self> {
        Self::from_json(&read(path)?)
    }
}

/// All four trait tables, loaded once and shared by the resolvers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSet {
    /// Birthsigns and dispositions.
    pub birthsigns: BirthsignTable,
    /// Coat colors and patterns.
    pub coat: CoatTable,
    /// Physical details.
    pub details: DetailTable,
    /// Backgrounds by HP and Pips.
    pub backgrounds: BackgroundTable,
}

impl TableSet {
    /// The rulebook tables bundled with the crate.
    pub fn builtin() -> TableResult<Self> {
        Ok(Self {
            birthsigns: BirthsignTable::from_json(BUILTIN_BIRTHSIGNS)?,
            coat: CoatTable::from_json(BUILTIN_COAT)?,
            details: DetailTable::from_json(BUILTIN_DETAIL)?,
            backgrounds: BackgroundTable::from_json(BUILTIN_BACKGROUND)?,
        })
    }

    /// Load every table from `dir`, using the standard file names.
    pub fn load_dir(dir: &Path) -> TableResult<Self> {
        let tables = Self {
            birthsigns: BirthsignTable::load(&dir.join(BIRTHSIGNS_FILE))?,
            coat: CoatTable::load(&dir.join(COAT_FILE))?,
            details: DetailTable::load(&dir.join(DETAIL_FILE))?,
            backgrounds: BackgroundTable::load(&dir.join(BACKGROUND_FILE))?,
        };
        tracing::debug!(
            dir = %dir.display(),
            birthsigns = tables.birthsigns.entries.len(),
            colors = tables.coat.colors.len(),
            patterns = tables.coat.patterns.len(),
            details = tables.details.details.len(),
            rows = tables.backgrounds.row_count(),
            columns = tables.backgrounds.column_count(),
            "loaded tables"
        );
        Ok(tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn builtin_tables_match_rulebook() {
        let tables = TableSet::builtin().unwrap();
        assert_eq!(tables.birthsigns.entries.len(), 6);
        assert_eq!(tables.birthsigns.entries[0].sign, "Star");
        assert_eq!(tables.coat.colors.len(), 6);
        assert_eq!(tables.coat.patterns.len(), 6);
        assert_eq!(tables.details.details.len(), 36);
        assert_eq!(tables.backgrounds.row_count(), 6);
        assert_eq!(tables.backgrounds.column_count(), 6);
        assert!(tables.backgrounds.ensure_covers(6, 6).is_ok());
    }

    #[test]
    fn birthsigns_from_json() {
        let t = BirthsignTable::from_json(
            r#"{"birthsigns": [
                {"sign": "Star", "disposition": "Brave"},
                {"sign": "Moon", "disposition": "Wise"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(t.entries.len(), 2);
        assert_eq!(t.entries[1].disposition, "Wise");
    }

    #[test]
    fn coat_from_json() {
        let t = CoatTable::from_json(
            r#"{
                "colors": [{"color": "Tan"}],
                "patterns": [{"pattern": "Solid"}, {"pattern": "Banded"}]
            }"#,
        )
        .unwrap();
        assert_eq!(t.colors, vec!["Tan"]);
        assert_eq!(t.patterns, vec!["Solid", "Banded"]);
    }

    #[test]
    fn background_from_json() {
        let t = BackgroundTable::from_json(
            r#"{"hp": [{"pips": [
                {"background": "Woodcutter", "item1": "Axe", "item2": "Twine"}
            ]}]}"#,
        )
        .unwrap();
        assert_eq!(t.get(1, 1).unwrap().item1, "Axe");
    }

    #[test]
    fn empty_list_is_an_error() {
        let err = DetailTable::from_json(r#"{"details": []}"#).unwrap_err();
        assert!(matches!(err, TableError::Empty("details")));
    }

    #[test]
    fn wrong_shape_is_a_parse_error() {
        let err = DetailTable::from_json(r#"{"details": ["plain string"]}"#).unwrap_err();
        assert!(matches!(err, TableError::Parse { table: "details", .. }));
        let err = CoatTable::from_json("").unwrap_err();
        assert!(matches!(err, TableError::Parse { table: "coat", .. }));
    }

    #[test]
    fn load_dir_reads_all_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(BIRTHSIGNS_FILE), BUILTIN_BIRTHSIGNS).unwrap();
        fs::write(dir.path().join(COAT_FILE), BUILTIN_COAT).unwrap();
        let details = r#"{"details": [{"detail": "Eyepatch"}]}"#;
        fs::write(dir.path().join(DETAIL_FILE), details).unwrap();
        fs::write(dir.path().join(BACKGROUND_FILE), BUILTIN_BACKGROUND).unwrap();

        let tables = TableSet::load_dir(dir.path()).unwrap();
        assert_eq!(tables.details.details, vec!["Eyepatch"]);
        assert_eq!(tables.birthsigns, TableSet::builtin().unwrap().birthsigns);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(BIRTHSIGNS_FILE), BUILTIN_BIRTHSIGNS).unwrap();

        let err = TableSet::load_dir(dir.path()).unwrap_err();
        match err {
            TableError::Io { path, .. } => assert!(path.ends_with(COAT_FILE)),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
