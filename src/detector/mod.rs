
use crate::registry::Registry;
use std::collections::HashSet;

/// A win surfaced by one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinEvent {
    /// Every number of the row is in the draw history and the row had not
    /// been announced before.
    Line { client: u64, ticket: usize, row: usize },
    /// Every row of the ticket is complete.
    Bingo { client: u64, ticket: usize },
}

/// Scans the snapshotted players' tickets against the drawn set and
/// returns the tick's ordered event sequence.
///
/// Players are visited in snapshot order, tickets in ownership order and
/// rows in definition order, so the sequence is deterministic for a given
/// tick; the order carries no fairness guarantee across players. Tickets
/// that already won are skipped entirely. Row and won flags are flipped
/// monotonically on the live records, which is what makes each event fire
/// at most once over a ticket's lifetime. Ids that left the registry
/// after the snapshot was taken are skipped.
pub fn scan(registry: &mut Registry, snapshot: &[u64], drawn: &HashSet<u32>) -> Vec<WinEvent> {
    let mut events = Vec::new();
    for &client in snapshot {
        let Some(player) = registry.player_mut(client) else {
            continue;
        };
        for (ticket_index, ticket) in player.tickets_mut().iter_mut().enumerate() {
            if ticket.is_won() {
                continue;
            }
            for row in 0..ticket.row_count() {
                let complete = ticket.rows()[row].iter().all(|number| drawn.contains(number));
                if complete && ticket.mark_line(row) {
                    events.push(WinEvent::Line {
                        client,
                        ticket: ticket_index,
                        row,
                    });
                }
            }
            if ticket.all_lines_announced() {
                ticket.mark_won();
                events.push(WinEvent::Bingo {
                    client,
                    ticket: ticket_index,
                });
            }
        }
    }
    events
}
