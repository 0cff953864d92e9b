use std::time::Duration;

use anyhow::{Context, Result};
use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use rakugaki_core::round::{RoundAdvance, RoundState};
use rakugaki_core::sketch::Sketchpad;
use rakugaki_core::view::View;
use rakugaki_core::{decode, encode, ClientMsg, ScoreEntry, ServerMsg};
use rakugaki_raster::snapshot_data_url;
use tokio::net::TcpStream;
use tokio::time::{sleep_until, Instant};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};
use url::Url;

use crate::doodler::{DoodleConfig, Doodler};

pub(crate) const DEFAULT_ENDPOINT: &str = "ws://localhost:8787/game";
const ROUND_COMPLETE_NOTICE: &str = "game over, thanks for playing!";

type WsSink = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;

pub(crate) struct PlayConfig {
    pub(crate) url: String,
    pub(crate) room_id: String,
    pub(crate) user_name: String,
    pub(crate) host: bool,
    pub(crate) n_odai: u32,
    pub(crate) n_time_sec: u64,
    pub(crate) start_delay_ms: u64,
}

pub(crate) async fn run_play(
    config: PlayConfig,
    doodle: DoodleConfig,
    seed: Option<u64>,
) -> Result<()> {
    let mut doodler = Doodler::new(seed, doodle)?;
    Url::parse(&config.url).with_context(|| format!("invalid endpoint url {}", config.url))?;
    let (ws, _) = connect_async(config.url.as_str())
        .await
        .with_context(|| format!("connect to {}", config.url))?;
    info!(url = %config.url, "connected");
    let (mut write, mut read) = ws.split();

    let mut view = View::new();
    let mut round = RoundState::new();
    let mut pad = Sketchpad::new();

    let join = ClientMsg::EnterRoom {
        room_id: config.room_id.clone(),
        user_name: config.user_name.clone(),
    };
    send_msg(&mut write, &join).await?;
    view.show_lobby();
    println!("joined room {} as {}", config.room_id, config.user_name);

    let mut start_at = config
        .host
        .then(|| Instant::now() + Duration::from_millis(config.start_delay_ms));
    let mut round_deadline: Option<Instant> = None;
    let mut stroke_at: Option<Instant> = None;

    loop {
        tokio::select! {
            message = read.next() => {
                let Some(message) = message else {
                    info!("server closed the stream");
                    break;
                };
                let message = match message {
                    Ok(message) => message,
                    Err(err) => {
                        warn!(%err, "socket error, ending session");
                        break;
                    }
                };
                match message {
                    Message::Text(text) => {
                        let Some(msg) = decode::<ServerMsg>(&text) else {
                            debug!(frame = %text, "dropping unrecognized frame");
                            continue;
                        };
                        match msg {
                            ServerMsg::EnterRoom { name } => {
                                println!("* {name} joined");
                                view.push_member(name);
                            }
                            ServerMsg::GameStart { odai, n_time } => {
                                info!(prompts = odai.len(), n_time, "game starting");
                                start_at = None;
                                round.begin(odai, n_time);
                                pad.clear();
                                if let Some(prompt) = round.current_prompt() {
                                    view.show_drawing();
                                    view.set_prompt(prompt.to_string());
                                    println!("draw: {prompt}");
                                    round_deadline = Some(Instant::now() + round.round_duration());
                                    stroke_at = Some(Instant::now() + doodler.think_delay());
                                } else {
                                    view.set_notice(ROUND_COMPLETE_NOTICE.to_string());
                                    println!("{ROUND_COMPLETE_NOTICE}");
                                    break;
                                }
                            }
                            ServerMsg::Predict { scores } => {
                                view.set_results(scores);
                                print_scoreboard(view.results());
                            }
                            ServerMsg::ImgSave { scores } => {
                                debug!(rows = scores.len(), "drawing stored");
                            }
                        }
                    }
                    Message::Close(_) => {
                        info!("server closed the connection");
                        break;
                    }
                    _ => {}
                }
            }
            _ = sleep_until(start_at.unwrap_or_else(Instant::now)), if start_at.is_some() => {
                start_at = None;
                info!(n_odai = config.n_odai, n_time_sec = config.n_time_sec, "starting game");
                let start = ClientMsg::StartGame {
                    room_id: config.room_id.clone(),
                    n_odai: config.n_odai,
                    n_time_sec: config.n_time_sec,
                };
                if let Err(err) = send_msg(&mut write, &start).await {
                    warn!(%err, "send failed, ending session");
                    break;
                }
            }
            _ = sleep_until(stroke_at.unwrap_or_else(Instant::now)), if stroke_at.is_some() => {
                doodler.doodle_stroke(&mut pad);
                if let Some(prompt) = round.current_prompt() {
                    let index = round.prompt_index();
                    if let Err(err) = send_snapshot(&mut write, &pad, prompt, index, false).await {
                        warn!(%err, "send failed, ending session");
                        break;
                    }
                }
                stroke_at = Some(Instant::now() + doodler.think_delay());
            }
            _ = sleep_until(round_deadline.unwrap_or_else(Instant::now)), if round_deadline.is_some() => {
                round_deadline = None;
                stroke_at = None;
                if let Some(shot) = round.expire() {
                    info!(prompt = %shot.prompt, "time up, submitting final drawing");
                    if let Err(err) =
                        send_snapshot(&mut write, &pad, &shot.prompt, shot.index, true).await
                    {
                        warn!(%err, "send failed, ending session");
                        break;
                    }
                    pad.clear();
                }
                match round.advance() {
                    Some(RoundAdvance::Next { prompt }) => {
                        println!("draw: {prompt}");
                        view.set_prompt(prompt);
                        round_deadline = Some(Instant::now() + round.round_duration());
                        stroke_at = Some(Instant::now() + doodler.think_delay());
                    }
                    Some(RoundAdvance::Complete) => {
                        view.set_notice(ROUND_COMPLETE_NOTICE.to_string());
                        println!("{ROUND_COMPLETE_NOTICE}");
                        break;
                    }
                    None => {}
                }
            }
        }
    }

    let _ = write.send(Message::Close(None)).await;
    Ok(())
}

async fn send_msg(write: &mut WsSink, msg: &ClientMsg) -> Result<()> {
    let Some(text) = encode(msg) else {
        return Ok(());
    };
    write.send(Message::Text(text)).await.context("send frame")?;
    Ok(())
}

async fn send_snapshot(
    write: &mut WsSink,
    pad: &Sketchpad,
    prompt: &str,
    index: usize,
    is_fin: bool,
) -> Result<()> {
    let img_b64 = snapshot_data_url(pad)?;
    let msg = ClientMsg::Predict {
        odai: prompt.to_string(),
        is_fin,
        img_id: index.to_string(),
        img_b64,
    };
    send_msg(write, &msg).await
}

fn print_scoreboard(results: &[ScoreEntry]) {
    if results.is_empty() {
        return;
    }
    let line = results
        .iter()
        .map(|entry| format!("{} {:.1}", entry.key, entry.value))
        .collect::<Vec<_>>()
        .join(" | ");
    println!("guesses: {line}");
}
