//! Server-authoritative multiplayer bingo over pluggable realtime
//! transports.
//!
//! One [`server::BingoServer`] runs one shared session: it draws numbers
//! at a fixed cadence from a [`pool::DrawPool`], tracks every
//! connection's [`ticket::Ticket`]s in a [`registry::Registry`], scans
//! for lines and bingos after each draw and announces everything through
//! a [`gateway::Gateway`].
//!
//! The game core never touches a socket. Transports adapt it to the
//! outside world: [`transport::ws`] serves a plain TCP listener,
//! [`transport::axum`] mounts the game on an existing `Router`, and
//! [`gateway::peers::PeerGateway`] doubles as an in-process channel
//! transport for tests and embedding.
//!
//! ```no_run
//! use tombola::config::GameConfig;
//! use tombola::gateway::peers::PeerGateway;
//! use tombola::server::BingoServer;
//! use tombola::transport::ws::WsTransport;
//!
//! #[tokio::main]
//! async fn main() {
//!     let server = BingoServer::new(GameConfig::default(), PeerGateway::new()).unwrap();
//!     let mut transport = WsTransport::new(server);
//!     transport.bind_addr("0.0.0.0:3000").await.unwrap();
//!     transport.listen().await.unwrap();
//! }
//! ```

pub mod config;
pub mod detector;
pub mod error;
pub mod event;
pub mod gateway;
pub mod pool;
pub mod registry;
pub mod server;
pub mod session;
pub mod ticket;
pub mod transport;
