use super::{GameData, GameStore, StoreError};
use log::info;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A game saved as pretty-printed JSON in one file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl GameStore for JsonFileStore {
    fn load(&self) -> Result<Option<GameData>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        let data: GameData =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;
        info!(
            "loaded game {} with {} found words from {}",
            data.main_letter,
            data.found_words.len(),
            self.path.display()
        );
        Ok(Some(data))
    }

    fn save(&mut self, data: &GameData) -> Result<(), StoreError> {
        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;

        // Write next to the target and rename so a crash never leaves half a file
        let temp = NamedTempFile::new_in(parent).map_err(|e| self.io_error(e))?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            serde_json::to_writer_pretty(&mut writer, data).map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;
            writer.flush().map_err(|e| self.io_error(e))?;
        }
        temp.persist(&self.path)
            .map_err(|e| self.io_error(e.error))?;

        info!(
            "saved {} found words to {}",
            data.found_words.len(),
            self.path.display()
        );
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("removed {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}
