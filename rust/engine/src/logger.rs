use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::engine::Settlement;
use crate::hand::Category;
use crate::pot::PayoutMap;
use crate::showdown::Path as ResolutionPath;
use crate::state::{Street, TerminalState};

/// A live player's hand as shown at showdown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownHand {
    pub player: usize,
    pub category: Category,
    pub tiebreakers: [u8; 5],
}

/// Complete record of one settled hand.
/// Serialized to JSONL format for hand history storage and aggregation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SettlementRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// RNG seed used to deal the hand, when it was dealt by a seeded deck
    #[serde(default)]
    pub seed: Option<u64>,
    /// Timestamp when the hand was settled (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    pub street: Street,
    /// Community cards on the board (up to 5 cards)
    pub board: Vec<Card>,
    pub pot: u64,
    pub path: ResolutionPath,
    pub winners: Vec<usize>,
    pub payouts: PayoutMap,
    /// Evaluated hands, present only for showdowns
    #[serde(default)]
    pub hands: Vec<ShowdownHand>,
}

impl SettlementRecord {
    pub fn from_settlement(
        hand_id: impl Into<String>,
        state: &TerminalState,
        settlement: &Settlement,
    ) -> Self {
        let hands = settlement
            .resolution
            .hands
            .iter()
            .map(|(&player, h)| ShowdownHand {
                player,
                category: h.category,
                tiebreakers: h.tiebreakers,
            })
            .collect();
        Self {
            hand_id: hand_id.into(),
            seed: None,
            ts: None,
            street: state.street,
            board: state.community.cards().to_vec(),
            pot: state.pot,
            path: settlement.resolution.path,
            winners: settlement.resolution.winners.clone(),
            payouts: settlement.payouts.clone(),
            hands,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Whether the recorded payouts add up to the recorded pot.
    pub fn conserves_chips(&self) -> bool {
        self.payouts.total() == self.pot
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`SettlementRecord`]s to a JSONL file, one record per line.
#[derive(Debug)]
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    /// Opens `path` for appending, creating it and its parent directories.
    ///
    /// Ids continue after the highest one already in the file for today's
    /// date, so separate runs appending to one history never repeat an id.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let date = Utc::now().format("%Y%m%d").to_string();
        let seq = last_seq(path, &date)?;
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date,
            seq,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &SettlementRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct RecordId {
    hand_id: String,
}

/// Highest sequence number among `date`-prefixed ids in an existing history.
/// Unreadable lines are skipped; a missing file starts at 0.
fn last_seq(path: &Path, date: &str) -> std::io::Result<u32> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };
    let prefix = format!("{}-", date);
    Ok(content
        .lines()
        .filter_map(|line| serde_json::from_str::<RecordId>(line).ok())
        .filter_map(|rec| rec.hand_id.strip_prefix(&prefix)?.parse::<u32>().ok())
        .max()
        .unwrap_or(0))
}
