//! Auxiliary seat-map registry
//!
//! The venue tooling ships a `seats.json` document alongside exports. It is
//! loaded at startup for parity with that tooling, but no current
//! transformation consumes it, so load failures must never block roster
//! processing; callers log and continue.

use std::path::Path;

use tracing::info;

use crate::app::models::Seat;
use crate::{Error, Result};

/// In-memory seat-map registry loaded from the auxiliary JSON document
#[derive(Debug, Clone, Default)]
pub struct SeatRegistry {
    seats: Vec<Seat>,
}

impl SeatRegistry {
    /// Load the registry from a JSON document
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::seat_registry(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let seats: Vec<Seat> = serde_json::from_str(&content).map_err(|e| {
            Error::seat_registry(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        info!("Loaded {} seats from {}", seats.len(), path.display());
        Ok(Self { seats })
    }

    /// All seats in the registry
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Number of seats loaded
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Whether the registry holds no seats
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
}
