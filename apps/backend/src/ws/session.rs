use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::services::room_flow::RoomFlowService;
use crate::services::rooms::ConnId;
use crate::state::app_state::AppState;
use crate::ws::protocol::{ClientMsg, ServerMsg};

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let session = RoomWsSession::new(Uuid::new_v4(), app_state.rooms.clone());
    ws::start(session, &req, stream)
}

/// One websocket connection. Outbound room traffic arrives through the
/// connection's outbox; command rejections are answered directly.
pub struct RoomWsSession {
    conn_id: ConnId,
    rooms: RoomFlowService,
    last_heartbeat: Instant,
}

impl RoomWsSession {
    pub fn new(conn_id: ConnId, rooms: RoomFlowService) -> Self {
        Self {
            conn_id,
            rooms,
            last_heartbeat: Instant::now(),
        }
    }

    fn send_json(ctx: &mut ws::WebsocketContext<Self>, msg: &ServerMsg) {
        match serde_json::to_string(msg) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "[WS SESSION] failed to serialize outbound message"),
        }
    }

    fn send_error(ctx: &mut ws::WebsocketContext<Self>, code: ErrorCode, message: impl Into<String>) {
        Self::send_json(
            ctx,
            &ServerMsg::Error {
                code,
                message: message.into(),
            },
        );
    }

    fn send_error_and_close(
        &self,
        ctx: &mut ws::WebsocketContext<Self>,
        code: ErrorCode,
        message: impl Into<String>,
    ) {
        Self::send_error(ctx, code, message);
        ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
        ctx.stop();
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(conn_id = %actor.conn_id, "[WS SESSION] heartbeat timed out");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
    }

    /// Route a client command to the coordinator. Successful commands reply
    /// through the outbox; the `Err` goes back to this socket only.
    fn dispatch(&self, cmd: ClientMsg) -> Result<(), AppError> {
        let conn = self.conn_id;
        match cmd {
            ClientMsg::CreateRoom {
                player_name,
                config,
            } => self.rooms.create_room(conn, &player_name, config).map(drop),
            ClientMsg::JoinRoom {
                room_id,
                player_name,
            } => self.rooms.join_room(conn, &room_id, &player_name).map(drop),
            ClientMsg::RejoinRoom { room_id, player_id } => {
                self.rooms.rejoin_room(conn, &room_id, &player_id).map(drop)
            }
            ClientMsg::StartGame => self.rooms.start_game(conn),
            ClientMsg::PlaceBid { bid } => self.rooms.place_bid(conn, bid),
            ClientMsg::PlayCard { card_id } => self.rooms.play_card(conn, &card_id),
            ClientMsg::NextRound => self.rooms.next_round(conn),
        }
    }
}

impl Actor for RoomWsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(conn_id = %self.conn_id, "[WS SESSION] started");

        let (tx, rx) = mpsc::unbounded_channel();
        self.rooms.registry().register_connection(self.conn_id, tx);
        ctx.add_stream(UnboundedReceiverStream::new(rx));

        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.rooms.disconnect(self.conn_id);
        info!(conn_id = %self.conn_id, "[WS SESSION] stopped");
    }
}

/// Outbox traffic: joined confirmations and masked game views.
impl StreamHandler<ServerMsg> for RoomWsSession {
    fn handle(&mut self, msg: ServerMsg, ctx: &mut Self::Context) {
        Self::send_json(ctx, &msg);
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for RoomWsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();

                let parsed: Result<ClientMsg, _> = serde_json::from_str(&text);
                let cmd = match parsed {
                    Ok(cmd) => cmd,
                    Err(err) => {
                        debug!(conn_id = %self.conn_id, error = %err, "[WS SESSION] unparsable message");
                        Self::send_error(ctx, ErrorCode::BadRequest, "Malformed message");
                        return;
                    }
                };

                let kind = cmd.kind();
                if let Err(err) = self.dispatch(cmd) {
                    debug!(
                        conn_id = %self.conn_id,
                        action = kind,
                        code = %err.code(),
                        "[WS SESSION] command rejected"
                    );
                    Self::send_error(ctx, err.code(), err.detail());
                }
            }
            Ok(ws::Message::Binary(_)) => {
                self.last_heartbeat = Instant::now();
                self.send_error_and_close(ctx, ErrorCode::BadRequest, "Binary not supported");
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Nop) => {
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(
                    conn_id = %self.conn_id,
                    error = %err,
                    "[WS SESSION] protocol error"
                );
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
            }
        }
    }
}
