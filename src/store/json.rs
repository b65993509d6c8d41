use crate::error::{Result, RubricError};
use crate::store::{insert_record, remove_record, replace_record, Record, Store};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed store: one pretty-printed JSON array per collection, stored as
/// `<data dir>/<collection>.json`.
#[derive(Debug, Clone)]
pub struct JsonStore<R> {
    path: PathBuf,
    _record: PhantomData<R>,
}

impl<R> JsonStore<R>
where
    R: Record + Serialize + DeserializeOwned,
{
    pub fn open(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir).map_err(RubricError::Io)?;
        Ok(Self {
            path: data_dir.join(format!("{}.json", R::COLLECTION)),
            _record: PhantomData,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<R>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    // The collection is written beside the target and renamed over it, so a
    // failed write leaves the previous file intact.
    fn save(&self, records: &[R]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        let temp_path = self.temp_path();
        let mut file = File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &self.path)?;
        debug!(path = %self.path.display(), count = records.len(), "collection written");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl<R> Store<R> for JsonStore<R>
where
    R: Record + Serialize + DeserializeOwned,
{
    fn get(&self, id: &str) -> Result<Option<R>> {
        Ok(self.load()?.into_iter().find(|record| record.id() == id))
    }

    fn list(&self) -> Result<Vec<R>> {
        self.load()
    }

    fn add(&mut self, record: R) -> Result<R> {
        let mut records = self.load()?;
        let record = insert_record(&mut records, record)?;
        self.save(&records)?;
        Ok(record)
    }

    fn update(&mut self, record: R) -> Result<()> {
        let mut records = self.load()?;
        replace_record(&mut records, record)?;
        self.save(&records)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let mut records = self.load()?;
        remove_record(&mut records, id)?;
        self.save(&records)
    }
}
