
use crate::config::GameConfig;
use crate::error::GameError;
use crate::ticket::Ticket;
use std::collections::HashMap;
use tracing::debug;

/// Connection-scoped player record.
///
/// The display name is derived from the connection id at registration;
/// tickets are kept in request order. The record lives exactly as long as
/// the connection: nothing survives a disconnect.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    tickets: Vec<Ticket>,
}

impl Player {
    fn new(id: u64) -> Player {
        Player {
            name: format!("player-{id}"),
            tickets: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub(crate) fn tickets_mut(&mut self) -> &mut Vec<Ticket> {
        &mut self.tickets
    }
}

/// Players keyed by connection id, with registration order preserved so
/// win scans visit them deterministically.
#[derive(Debug, Default)]
pub struct Registry {
    players: HashMap<u64, Player>,
    order: Vec<u64>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Admits a new connection with zero tickets and a derived name.
    pub fn register(&mut self, id: u64) -> Result<(), GameError> {
        if self.players.contains_key(&id) {
            return Err(GameError::AlreadyRegistered(id));
        }
        self.players.insert(id, Player::new(id));
        self.order.push(id);
        Ok(())
    }

    /// Appends `count` freshly generated tickets and returns the player's
    /// full collection, or `None` for an unknown id.
    ///
    /// No bound is enforced here; callers clamp the count first.
    pub fn add_tickets(&mut self, id: u64, count: u32, config: &GameConfig) -> Option<&[Ticket]> {
        let player = self.players.get_mut(&id)?;
        for _ in 0..count {
            player.tickets.push(Ticket::generate(
                config.rows_per_ticket,
                config.numbers_per_row,
                config.range_size,
            ));
        }
        debug!(client = id, total = player.tickets.len(), "tickets granted");
        Some(&player.tickets)
    }

    /// Drops the record and every ticket it owns. Unknown ids are fine.
    pub fn remove(&mut self, id: u64) {
        if self.players.remove(&id).is_some() {
            self.order.retain(|&other| other != id);
        }
    }

    /// Iteration-stable view for a win scan: ids in registration order.
    ///
    /// The copy keeps the scan independent of removals happening in the
    /// same tick; a snapshotted id that has since disconnected simply
    /// fails the lookup.
    pub fn snapshot(&self) -> Vec<u64> {
        self.order.clone()
    }

    pub fn player(&self, id: u64) -> Option<&Player> {
        self.players.get(&id)
    }

    pub(crate) fn player_mut(&mut self, id: u64) -> Option<&mut Player> {
        self.players.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
