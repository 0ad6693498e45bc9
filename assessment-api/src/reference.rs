use crate::error::AppResult;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct AddressRecord {
    #[serde(rename = "Province Name", default)]
    province: String,
    #[serde(rename = "City/Municipality Name", default)]
    municipality: String,
    #[serde(rename = "Barangay Name", default)]
    barangay: String,
}

/// Province → municipality → barangays, every level sorted and de-duplicated
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AddressHierarchy(BTreeMap<String, BTreeMap<String, BTreeSet<String>>>);

impl AddressHierarchy {
    /// Parses the delimited address listing. Rows missing any of the three names are skipped.
    pub fn from_reader<R: Read>(reader: R) -> AppResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut hierarchy: BTreeMap<String, BTreeMap<String, BTreeSet<String>>> = BTreeMap::new();
        let mut skipped = 0usize;

        for record in csv_reader.deserialize::<AddressRecord>() {
            let record = record?;
            if record.province.is_empty()
                || record.municipality.is_empty()
                || record.barangay.is_empty()
            {
                skipped += 1;
                continue;
            }

            hierarchy
                .entry(record.province)
                .or_default()
                .entry(record.municipality)
                .or_default()
                .insert(record.barangay);
        }

        debug!(
            provinces = hierarchy.len(),
            skipped, "Loaded address hierarchy"
        );
        Ok(Self(hierarchy))
    }

    pub fn from_path(path: &Path) -> AppResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Loads the hierarchy for the form page; an unreadable file yields an empty hierarchy.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(hierarchy) => hierarchy,
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Address file unavailable, continuing without it");
                Self::default()
            }
        }
    }

    pub fn provinces(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    impl AddressHierarchy {
        fn is_empty(&self) -> bool {
            self.0.is_empty()
        }

        fn municipalities(&self, province: &str) -> Vec<&str> {
            self.0
                .get(province)
                .map(|m| m.keys().map(String::as_str).collect())
                .unwrap_or_default()
        }

        fn barangays(&self, province: &str, municipality: &str) -> Vec<&str> {
            self.0
                .get(province)
                .and_then(|m| m.get(municipality))
                .map(|b| b.iter().map(String::as_str).collect())
                .unwrap_or_default()
        }
    }

    const SAMPLE: &str = "\
Region,Province Name,City/Municipality Name,Barangay Name
VI,Iloilo,Pototan,Amamaros
VI,Iloilo,Pototan,Abangay
VI,Iloilo,Pototan,Abangay
VI,Iloilo,Janiuay,Aquino
VI,Capiz,Roxas City,Bago
VI,Capiz,,Orphan
VI,,Nowhere,Nothing
";

    #[test]
    fn test_hierarchy_is_sorted_and_deduplicated() {
        let hierarchy = AddressHierarchy::from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(hierarchy.provinces(), vec!["Capiz", "Iloilo"]);
        assert_eq!(hierarchy.municipalities("Iloilo"), vec!["Janiuay", "Pototan"]);
        assert_eq!(
            hierarchy.barangays("Iloilo", "Pototan"),
            vec!["Abangay", "Amamaros"]
        );
    }

    #[test]
    fn test_incomplete_rows_are_skipped() {
        let hierarchy = AddressHierarchy::from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(hierarchy.municipalities("Capiz"), vec!["Roxas City"]);
        assert!(hierarchy.municipalities("").is_empty());
    }

    #[test]
    fn test_serializes_as_nested_object() {
        let hierarchy = AddressHierarchy::from_reader(SAMPLE.as_bytes()).unwrap();
        let json = serde_json::to_value(&hierarchy).unwrap();

        assert_eq!(json["Iloilo"]["Pototan"][0], "Abangay");
        assert_eq!(json["Capiz"]["Roxas City"][0], "Bago");
    }

    #[test]
    fn test_missing_file_yields_empty_hierarchy() {
        let hierarchy = AddressHierarchy::load_or_empty(Path::new("/nonexistent/address.csv"));
        assert!(hierarchy.is_empty());
    }

    #[test]
    fn test_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let hierarchy = AddressHierarchy::from_path(file.path()).unwrap();
        assert_eq!(hierarchy.provinces().len(), 2);
    }
}
