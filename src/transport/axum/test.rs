#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::event::Event;
    use crate::gateway::peers::PeerGateway;
    use crate::server::BingoServer;
    use crate::transport::axum::AxumTransport;
    use axum::Router;
    use futures_util::{SinkExt, StreamExt};
    use std::net::SocketAddr;
    use std::time::Duration;
    use tokio::net::TcpListener;
    use tokio_tungstenite::connect_async;
    use tungstenite::{Message, Utf8Bytes};

    async fn serve_app(config: GameConfig) -> (SocketAddr, BingoServer<PeerGateway>) {
        let server = BingoServer::new(config, PeerGateway::new()).unwrap();
        let transport = AxumTransport::new(server.clone());
        let app = transport.attach_router("/ws", Router::new());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (addr, server)
    }

    #[tokio::test]
    async fn upgrade_and_round_trip_through_the_router() {
        let (addr, server) = serve_app(GameConfig::default()).await;
        let (mut socket, _) = connect_async(format!("ws://{addr}/ws")).await.unwrap();

        let frame = tokio::time::timeout(Duration::from_secs(5), socket.next())
            .await
            .expect("no frame within 5s")
            .expect("socket closed")
            .expect("socket error");
        let event: Event = match frame {
            Message::Text(text) => serde_json::from_str(&text).unwrap(),
            other => panic!("expected a text frame, got {other:?}"),
        };
        match event {
            Event::InitialState(report) => assert!(!report.running),
            other => panic!("expected estado-inicial, got {other:?}"),
        }
        assert_eq!(server.player_count().await, 1);

        socket
            .send(Message::Text(Utf8Bytes::from(
                r#"{"type":"request-cartones","data":{"count":1}}"#.to_string(),
            )))
            .await
            .unwrap();
        let frame = tokio::time::timeout(Duration::from_secs(5), socket.next())
            .await
            .expect("no frame within 5s")
            .expect("socket closed")
            .expect("socket error");
        match frame {
            Message::Text(text) => match serde_json::from_str::<Event>(&text).unwrap() {
                Event::Tickets { tickets } => assert_eq!(tickets.len(), 1),
                other => panic!("expected cartones, got {other:?}"),
            },
            other => panic!("expected a text frame, got {other:?}"),
        }
    }
}
