/// Game dimensions and cadence.
mod test;

use crate::error::GameError;
use serde::Deserialize;
use std::time::Duration;

/// Tunable parameters of a bingo server.
///
/// Defaults match the classic setup: numbers `0..100`, 3×7 tickets, one
/// draw every five seconds, at most ten tickets granted per request.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Size of the number range; the pool holds `0..range_size`.
    pub range_size: u32,
    /// Rows per ticket.
    pub rows_per_ticket: usize,
    /// Distinct numbers per row.
    pub numbers_per_row: usize,
    /// Delay between consecutive draws while a game is running.
    pub draw_interval: Duration,
    /// Upper bound applied to a single ticket request.
    pub max_tickets_per_request: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            range_size: 100,
            rows_per_ticket: 3,
            numbers_per_row: 7,
            draw_interval: Duration::from_secs(5),
            max_tickets_per_request: 10,
        }
    }
}

impl GameConfig {
    /// Number of cells on one ticket.
    pub fn cells_per_ticket(&self) -> usize {
        self.rows_per_ticket * self.numbers_per_row
    }

    /// Checks that the configuration can actually produce tickets and
    /// drive a session.
    ///
    /// A layout whose cell count exceeds the range size cannot hold
    /// pairwise-distinct numbers and is rejected up front.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.range_size == 0 {
            return Err(GameError::InvalidConfig(
                "range_size must be positive".into(),
            ));
        }
        if self.rows_per_ticket == 0 || self.numbers_per_row == 0 {
            return Err(GameError::InvalidConfig(
                "ticket dimensions must be positive".into(),
            ));
        }
        if self.draw_interval.is_zero() {
            return Err(GameError::InvalidConfig(
                "draw_interval must be positive".into(),
            ));
        }
        if self.max_tickets_per_request == 0 {
            return Err(GameError::InvalidConfig(
                "max_tickets_per_request must be positive".into(),
            ));
        }
        let cells = self.cells_per_ticket();
        if cells > self.range_size as usize {
            return Err(GameError::InvalidTicketLayout {
                cells,
                range_size: self.range_size,
            });
        }
        Ok(())
    }

    /// Clamps a requested ticket count into `1..=max_tickets_per_request`.
    ///
    /// Clients may send anything, including zero or negative counts.
    pub fn clamp_ticket_count(&self, requested: i64) -> u32 {
        requested.clamp(1, i64::from(self.max_tickets_per_request)) as u32
    }
}
