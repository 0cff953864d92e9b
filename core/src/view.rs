use crate::protocol::ScoreEntry;

pub const AVATAR_COUNT: u8 = 10;
pub const RESULT_ROWS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Lobby,
    Drawing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub name: String,
    pub avatar: u8,
}

pub fn avatar_index(name: &str) -> u8 {
    let mut acc = 0x9E37_79B9u32;
    for byte in name.bytes() {
        acc = (acc ^ u32::from(byte)).wrapping_mul(0x0100_0193);
    }
    (acc % u32::from(AVATAR_COUNT)) as u8
}

#[derive(Debug, Clone)]
pub struct View {
    screen: Screen,
    roster: Vec<Participant>,
    prompt: Option<String>,
    results: Vec<ScoreEntry>,
    notice: Option<String>,
}

impl View {
    pub fn new() -> Self {
        Self {
            screen: Screen::Login,
            roster: Vec::new(),
            prompt: None,
            results: Vec::new(),
            notice: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn show_lobby(&mut self) {
        self.screen = Screen::Lobby;
    }

    pub fn show_drawing(&mut self) {
        self.screen = Screen::Drawing;
    }

    pub fn push_member(&mut self, name: String) {
        let avatar = avatar_index(&name);
        self.roster.push(Participant { name, avatar });
    }

    pub fn roster(&self) -> &[Participant] {
        &self.roster
    }

    pub fn set_prompt(&mut self, prompt: String) {
        self.prompt = Some(prompt);
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn set_results(&mut self, scores: Vec<ScoreEntry>) {
        self.results = scores;
        self.results.truncate(RESULT_ROWS);
    }

    pub fn results(&self) -> &[ScoreEntry] {
        &self.results
    }

    pub fn set_notice(&mut self, notice: String) {
        self.notice = Some(notice);
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}
