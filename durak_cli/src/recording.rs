use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use durak::{DeckSize, GameResult, Suit, TurnRecord};
use serde::Serialize;

/// Collects the turns of a game and writes them out as JSON once it ends.
pub struct Recorder {
    directory: PathBuf,
    turns: Vec<TurnRecord>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            directory,
            turns: Vec::new(),
        })
    }

    pub fn store_turn(&mut self, record: &TurnRecord) {
        self.turns.push(record.clone());
    }

    /// Writes `durak_<seed>.json` and returns its path.
    pub fn write_game_recording(
        &mut self,
        header: GameHeader,
        result: &GameResult,
    ) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("durak_{}.json", header.seed));
        let writer = BufWriter::new(File::create(&filepath)?);
        let recording = GameRecording {
            header,
            turns: std::mem::take(&mut self.turns),
            result,
        };
        serde_json::to_writer_pretty(writer, &recording)?;
        Ok(filepath)
    }
}

/// What a game was set up with.
#[derive(Serialize)]
pub struct GameHeader {
    pub seed: u64,
    pub deck: DeckSize,
    pub trump: Suit,
    pub players: Vec<String>,
}

#[derive(Serialize)]
struct GameRecording<'a> {
    #[serde(flatten)]
    header: GameHeader,
    turns: Vec<TurnRecord>,
    result: &'a GameResult,
}

#[cfg(test)]
mod tests {
    use durak::{card, Action, Stack};

    use super::*;

    #[test]
    fn missing_directory_is_rejected() {
        let dir = std::env::temp_dir().join("durak_recorder_does_not_exist");
        assert!(Recorder::new(dir).is_err());
    }

    #[test]
    fn writes_turns_and_result() {
        let name = format!("durak_recorder_{}", std::process::id());
        let dir = std::env::temp_dir().join(name);
        std::fs::create_dir_all(&dir).unwrap();
        let mut recorder = Recorder::new(dir.clone()).unwrap();
        recorder.store_turn(&TurnRecord {
            turn: 0,
            player: String::from("Comp1"),
            action: Action::Attack {
                cards: Stack::single(card!(3, Spades)),
            },
            drawn: 1,
            eliminated: false,
        });
        let header = GameHeader {
            seed: 99,
            deck: DeckSize::Short,
            trump: Suit::Hearts,
            players: vec![String::from("Comp1"), String::from("Comp2")],
        };
        let result = GameResult::Durak {
            losers: vec![String::from("Comp2")],
        };
        let path = recorder.write_game_recording(header, &result).unwrap();
        assert_eq!(path, dir.join("durak_99.json"));

        let text = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["seed"], 99);
        assert_eq!(json["deck"], "short");
        assert_eq!(json["trump"], "H");
        assert_eq!(json["turns"][0]["action"]["type"], "attack");
        assert_eq!(json["turns"][0]["action"]["cards"][0]["suit"], "S");
        assert_eq!(json["turns"][0]["action"]["cards"][0]["rank"], 3);
        assert_eq!(json["result"]["losers"][0], "Comp2");
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
