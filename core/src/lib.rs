pub mod codec;
pub mod protocol;
pub mod round;
pub mod sketch;
pub mod view;

pub use codec::{decode, encode};
pub use protocol::{ClientMsg, ScoreEntry, ServerMsg};
pub use round::{
    FinalShot, RoundAdvance, RoundPhase, RoundState, DEFAULT_PROMPT_COUNT, DEFAULT_ROUND_SECS,
};
pub use sketch::{Sketchpad, Stroke, CANVAS_HEIGHT, CANVAS_WIDTH, STROKE_COLOR, STROKE_WIDTH};
pub use view::{avatar_index, Participant, Screen, View, AVATAR_COUNT, RESULT_ROWS};
