use serde::{Deserialize, Serialize};

use crate::round::DEFAULT_ROUND_SECS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ClientMsg {
    EnterRoom {
        room_id: String,
        user_name: String,
    },
    StartGame {
        room_id: String,
        n_odai: u32,
        n_time_sec: u64,
    },
    Predict {
        odai: String,
        is_fin: bool,
        img_id: String,
        img_b64: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ServerMsg {
    EnterRoom {
        name: String,
    },
    #[serde(alias = "start_game")]
    GameStart {
        #[serde(default)]
        odai: Vec<String>,
        #[serde(default = "default_round_secs")]
        n_time: u64,
    },
    Predict {
        scores: Vec<ScoreEntry>,
    },
    ImgSave {
        #[serde(default)]
        scores: Vec<ScoreEntry>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub key: String,
    pub value: f64,
}

fn default_round_secs() -> u64 {
    DEFAULT_ROUND_SECS
}
