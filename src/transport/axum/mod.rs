/// Websocket front end mounted on an axum `Router`.
mod test;

use crate::event::ClientRequest;
use crate::gateway::next_connection_id;
use crate::gateway::peers::PeerGateway;
use crate::server::BingoServer;
use axum::extract::ws::{Message, Utf8Bytes, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use futures_util::{SinkExt, StreamExt};
use tracing::{debug, warn};

/// Bridges axum websocket upgrades to the game server, for embedding the
/// game into an existing application (typically next to its static asset
/// routes).
pub struct AxumTransport {
    server: BingoServer<PeerGateway>,
}

impl AxumTransport {
    pub fn new(server: BingoServer<PeerGateway>) -> AxumTransport {
        AxumTransport { server }
    }

    /// Mounts the websocket endpoint on `path` and returns the router.
    pub fn attach_router(&self, path: &str, router: Router) -> Router {
        let server = self.server.clone();
        router.route(
            path,
            get(move |ws: WebSocketUpgrade| Self::ws_handler(ws, server)),
        )
    }

    async fn ws_handler(
        ws: WebSocketUpgrade,
        server: BingoServer<PeerGateway>,
    ) -> impl IntoResponse {
        ws.on_upgrade(move |socket| Self::socket_worker(socket, server))
    }

    async fn socket_worker(socket: WebSocket, server: BingoServer<PeerGateway>) {
        let (mut sink, mut stream) = socket.split();

        let client_id = next_connection_id();
        let mut outbound = server.gateway().register(client_id).await;

        let writer = tokio::spawn(async move {
            while let Some(event) = outbound.recv().await {
                let json = match serde_json::to_string(&event) {
                    Ok(json) => json,
                    Err(err) => {
                        warn!(%err, "skipping unserializable event");
                        continue;
                    }
                };
                if sink.send(Message::Text(Utf8Bytes::from(json))).await.is_err() {
                    break;
                }
            }
        });

        server.handle_connect(client_id).await;

        while let Some(message) = stream.next().await {
            match message {
                Ok(Message::Text(text)) => match serde_json::from_str::<ClientRequest>(&text) {
                    Ok(request) => server.handle_request(client_id, request).await,
                    Err(err) => {
                        debug!(client = client_id, %err, "ignoring malformed request")
                    }
                },
                Ok(Message::Close(_)) => break,
                Ok(_) => {}
                Err(err) => {
                    debug!(client = client_id, %err, "socket error");
                    break;
                }
            }
        }

        server.gateway().deregister(client_id).await;
        server.handle_disconnect(client_id).await;
        writer.abort();
    }
}
