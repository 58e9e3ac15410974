
use rand::seq::index;
use serde::{Deserialize, Serialize};

/// A player's card: rows of numbers plus the flags the win scan flips as
/// the game progresses.
///
/// All numbers on a ticket are pairwise distinct across the whole card,
/// not merely within each row. Both flags are monotonic: a row's
/// `line_announced` flag and the ticket's `won` flag only ever go from
/// false to true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    rows: Vec<Vec<u32>>,
    line_announced: Vec<bool>,
    won: bool,
}

impl Ticket {
    /// Samples a fresh ticket: `rows × per_row` numbers drawn without
    /// replacement from `0..range_size`, split into rows in sample order.
    ///
    /// Sampling deliberately ignores the live draw pool: a ticket may hold
    /// numbers that already came out and is judged against the draw
    /// history alone. The layout must have passed
    /// [`GameConfig::validate`](crate::config::GameConfig::validate);
    /// generation assumes `rows × per_row <= range_size`.
    pub fn generate(rows: usize, per_row: usize, range_size: u32) -> Ticket {
        let numbers = index::sample(&mut rand::rng(), range_size as usize, rows * per_row);
        let rows: Vec<Vec<u32>> = numbers
            .into_vec()
            .chunks(per_row)
            .map(|chunk| chunk.iter().map(|&n| n as u32).collect())
            .collect();
        Ticket::from_rows(rows)
    }

    /// Builds a ticket from explicit rows with all flags cleared.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Ticket {
        let row_count = rows.len();
        Ticket {
            rows,
            line_announced: vec![false; row_count],
            won: false,
        }
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn line_announced(&self, row: usize) -> bool {
        self.line_announced[row]
    }

    /// Sets the row's line flag; `true` when this call newly flipped it.
    pub(crate) fn mark_line(&mut self, row: usize) -> bool {
        if self.line_announced[row] {
            return false;
        }
        self.line_announced[row] = true;
        true
    }

    pub fn all_lines_announced(&self) -> bool {
        self.line_announced.iter().all(|&announced| announced)
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub(crate) fn mark_won(&mut self) {
        self.won = true;
    }
}
