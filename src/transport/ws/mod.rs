
use crate::event::ClientRequest;
use crate::gateway::next_connection_id;
use crate::gateway::peers::PeerGateway;
use crate::server::BingoServer;
use futures_util::{SinkExt, StreamExt};
use std::io;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::accept_async;
use tungstenite::{Message, Utf8Bytes};
use tracing::{debug, warn};

/// Accepts TCP connections, upgrades them to websockets and bridges each
/// socket to the game server.
pub struct WsTransport {
    server: BingoServer<PeerGateway>,
    listener: Option<TcpListener>,
}

impl WsTransport {
    pub fn new(server: BingoServer<PeerGateway>) -> WsTransport {
        WsTransport {
            server,
            listener: None,
        }
    }

    pub fn bind_listener(&mut self, listener: TcpListener) {
        self.listener = Some(listener);
    }

    pub async fn bind_addr(&mut self, addr: &str) -> io::Result<()> {
        self.listener = Some(TcpListener::bind(addr).await?);
        Ok(())
    }

    /// Accept loop; runs until the listener fails.
    pub async fn listen(&mut self) -> io::Result<()> {
        let listener = self.listener.take().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotConnected, "no listener bound")
        })?;
        loop {
            let (stream, addr) = listener.accept().await?;
            debug!(%addr, "incoming connection");
            tokio::spawn(Self::connection_worker(stream, self.server.clone()));
        }
    }

    async fn connection_worker(stream: TcpStream, server: BingoServer<PeerGateway>) {
        let websocket = match accept_async(stream).await {
            Ok(websocket) => websocket,
            Err(err) => {
                warn!(%err, "websocket handshake failed");
                return;
            }
        };
        let (mut sink, mut stream) = websocket.split();

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
