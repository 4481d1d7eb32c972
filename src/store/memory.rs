use super::{GameData, GameStore, StoreError};

/// Keeps the game in memory; nothing survives the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Option<GameData>,
    saves: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `data`
    #[must_use]
    pub const fn with(data: GameData) -> Self {
        Self {
            data: Some(data),
            saves: 0,
        }
    }

    /// Number of successful saves since creation
    #[must_use]
    pub const fn saves(&self) -> usize {
        self.saves
    }
}

impl GameStore for MemoryStore {
    fn load(&self) -> Result<Option<GameData>, StoreError> {
        Ok(self.data.clone())
    }

    fn save(&mut self, data: &GameData) -> Result<(), StoreError> {
        self.data = Some(data.clone());
        self.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.data = None;
        Ok(())
    }
}
