// crates/geoparse-core/src/loader.rs

//! # Data Loader
//!
//! Handles the physical layer (file access, optional gzip) and hands the
//! JSON payload to [`convert::from_raw`](crate::convert::from_raw).

use crate::convert::from_raw;
use crate::error::{GeoError, Result};
use crate::model::GeoDb;
use crate::raw::CountriesRaw;
use crate::traits::{DatasetProvider, GeoBackend};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::info;

impl<B: GeoBackend> GeoDb<B> {
    /// Parses a countries+states+cities JSON array from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: CountriesRaw = serde_json::from_reader(reader)?;
        from_raw(raw)
    }

    /// Loads a dataset file (`.json`, or `.json.gz` with the `compact`
    /// feature), optionally keeping only the listed ISO2 codes.
    pub fn load_from_path(path: impl AsRef<Path>, filter: Option<&[&str]>) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        let mut db = Self::from_reader(reader)?;
        if let Some(iso2) = filter {
            db.retain_iso2(iso2);
        }
        info!(
            path = %path.display(),
            countries = db.countries.len(),
            "dataset loaded"
        );
        Ok(db)
    }
}

/// Opens a file, buffers it, and wraps `.gz` files in a gzip decoder.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoError::NotFound(format!("dataset not found at {}: {e}", path.display()))
    })?;
    let reader = BufReader::new(file);

    let gzipped = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
    if gzipped {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(GeoError::InvalidData(format!(
                "{} is gzip-compressed; enable the `compact` feature",
                path.display()
            )));
        }
    }
    Ok(Box::new(reader))
}

/// A dataset on disk, read when the resolver is built.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
    filter: Option<Vec<String>>,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            filter: None,
        }
    }

    /// Keep only countries with these ISO2 codes.
    pub fn with_filter<I, S>(mut self, iso2: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter = Some(iso2.into_iter().map(Into::into).collect());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<B: GeoBackend> DatasetProvider<B> for JsonFile {
    fn provide(self) -> Result<GeoDb<B>> {
        let filter: Option<Vec<&str>> = self
            .filter
            .as_ref()
            .map(|codes| codes.iter().map(String::as_str).collect());
        GeoDb::load_from_path(&self.path, filter.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::DefaultBackend;

    #[test]
    fn missing_file_is_not_found() {
        let err = GeoDb::<DefaultBackend>::load_from_path("/definitely/not/here.json", None)
            .unwrap_err();
        assert!(matches!(err, GeoError::NotFound(_)));
    }

    #[test]
    fn reader_parses_minimal_array() {
        let json = r#"[{"name":"Andorra","iso2":"AD","iso3":"AND","states":[]}]"#;
        let db = GeoDb::<DefaultBackend>::from_reader(json.as_bytes()).unwrap();
        assert_eq!(db.countries().len(), 1);
        assert_eq!(db.countries()[0].iso3(), "AND");
        assert_eq!(db.countries()[0].id(), 1);
    }

    #[test]
    fn json_file_keeps_path_and_applies_filter() {
        let path = std::env::temp_dir().join(format!("geoparse-loader-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"name":"Andorra","iso2":"AD"},{"name":"Austria","iso2":"AT"}]"#,
        )
        .unwrap();

        let file = JsonFile::new(&path).with_filter(["at"]);
        assert_eq!(file.path(), path.as_path());
        let db: GeoDb<DefaultBackend> = file.provide().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(db.countries().len(), 1);
        assert_eq!(db.countries()[0].name(), "Austria");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = GeoDb::<DefaultBackend>::from_reader("{not json".as_bytes()).unwrap_err();
        assert!(matches!(err, GeoError::Json(_)));
    }
}
