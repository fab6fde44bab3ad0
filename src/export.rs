use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Column order of the CSV output, matching the field order of [`Clinic`].
pub const FIELD_NAMES: [&str; 7] = [
    "name",
    "address",
    "postcode",
    "city",
    "phone",
    "data_overlay_label",
    "website",
];

/// One extracted directory listing.
///
/// `name` and `address` come straight from the result card and are never
/// empty-by-absence: a card missing either element is rejected before this
/// struct is built. `postcode` and `city` are derived from the address
/// text; the remaining fields pass through the card's anchors unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clinic {
    pub name: String,
    pub address: String,
    pub postcode: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub data_overlay_label: Option<String>,
    pub website: Option<String>,
}

/// Write all records to `path` as UTF-8 CSV, header row included.
///
/// Absent fields become empty cells. A run that found nothing still
/// produces the header row.
pub fn write_csv(path: &Path, clinics: &[Clinic]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    // serialize() emits the header lazily; an empty run still owes one.
    if clinics.is_empty() {
        writer.write_record(FIELD_NAMES)?;
    }
    for clinic in clinics {
        writer.serialize(clinic)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn sample() -> Vec<Clinic> {
        vec![
            Clinic {
                name: "Clinique des Grangettes".to_string(),
                address: "Chemin des Grangettes 7, 1224 Chêne-Bougeries".to_string(),
                postcode: Some("1224".to_string()),
                city: Some("Chêne-Bougeries".to_string()),
                phone: Some("tel:+41227191111".to_string()),
                data_overlay_label: Some("022 719 11 11".to_string()),
                website: Some("https://www.grangettes.ch".to_string()),
            },
            Clinic {
                name: "Praxis am See".to_string(),
                address: "Seestrasse 9, Luzern".to_string(),
                postcode: None,
                city: Some("Luzern".to_string()),
                phone: None,
                data_overlay_label: None,
                website: None,
            },
        ]
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("localch_scraper_{}_{}.csv", name, std::process::id()))
    }

    #[test]
    fn round_trip() {
        let path = temp_path("round_trip");
        write_csv(&path, &sample()).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<Clinic> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(rows, sample());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn header_row_is_fixed() {
        let path = temp_path("header");
        write_csv(&path, &sample()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(header, FIELD_NAMES.join(","));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn absent_fields_are_empty_cells() {
        let path = temp_path("absent");
        write_csv(&path, &sample()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let sparse_row = content.lines().nth(2).unwrap();
        assert_eq!(sparse_row, "Praxis am See,\"Seestrasse 9, Luzern\",,Luzern,,,");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn empty_run_still_writes_header() {
        let path = temp_path("empty");
        write_csv(&path, &[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim_end(), FIELD_NAMES.join(","));

        fs::remove_file(&path).unwrap();
    }
}
