//! Realtime front ends bridging sockets to the game server.
//!
//! The core never touches a socket: each adapter here owns the accept
//! loop, allocates connection ids, drains the peer queue into its socket
//! and feeds parsed requests back into
//! [`BingoServer`](crate::server::BingoServer).

pub mod axum;
pub mod ws;
