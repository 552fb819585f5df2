//! Statistics aggregation over settlement history.
//!
//! Reads JSONL files (plain or `.jsonl.zst`, or a directory tree of them)
//! written by `settle --history` / `deal --history` and summarizes them. Every
//! record is checked for chip conservation: its payouts must sum to its pot.

use crate::error::CliError;
use crate::io_utils::read_text_auto;
use crate::ui;
use showdown_engine::logger::SettlementRecord;
use showdown_engine::showdown::Path as ResolutionPath;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Default)]
struct StatsState {
    hands: u64,
    showdowns: u64,
    eliminations: u64,
    split_pots: u64,
    chips: u64,
    chips_won: BTreeMap<usize, u64>,
    skipped: u64,
    corrupted: u64,
    stats_ok: bool,
}

impl StatsState {
    fn record(&mut self, rec: &SettlementRecord) {
        self.hands += 1;
        match rec.path {
            ResolutionPath::Showdown => self.showdowns += 1,
            ResolutionPath::Elimination => self.eliminations += 1,
            ResolutionPath::NoContest => {}
        }
        if rec.winners.len() > 1 {
            self.split_pots += 1;
        }
        self.chips += rec.pot;
        for (player, amount) in rec.payouts.iter() {
            *self.chips_won.entry(player).or_insert(0) += amount;
        }
    }
}

/// Aggregates statistics from JSONL settlement history.
///
/// Corrupted lines are counted and skipped; an incomplete final line (no
/// trailing newline) is discarded. Any record that fails chip conservation
/// makes the command fail after printing the summary.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(&input);
    let mut state = StatsState {
        stats_ok: true,
        ..StatsState::default()
    };

    if path.is_dir() {
        let mut stack = vec![path.to_path_buf()];
        while let Some(d) = stack.pop() {
            let rd = match std::fs::read_dir(&d) {
                Ok(v) => v,
                Err(_) => continue,
            };
            let mut entries: Vec<_> = rd.filter_map(Result::ok).map(|e| e.path()).collect();
            entries.sort();
            for p in entries {
                if p.is_dir() {
                    stack.push(p);
                } else if let Some(fname) = p.file_name().and_then(|f| f.to_str())
                    && (fname.ends_with(".jsonl") || fname.ends_with(".jsonl.zst"))
                {
                    match read_text_auto(&p.to_string_lossy()) {
                        Ok(content) => consume_content(&content, &mut state, err)?,
                        Err(_) => state.corrupted += 1,
                    }
                }
            }
        }
    } else {
        match read_text_auto(&input) {
            Ok(s) => consume_content(&s, &mut state, err)?,
            Err(e) => {
                ui::write_error(err, &format!("Failed to read {}: {}", input, e))?;
                return Err(CliError::InvalidInput(format!(
                    "Failed to read {}: {}",
                    input, e
                )));
            }
        }
    }

    if state.corrupted > 0 {
        ui::write_error(
            err,
            &format!("Skipped {} corrupted record(s)", state.corrupted),
        )?;
    }
    if state.skipped > 0 {
        ui::display_warning(
            err,
            &format!("Discarded {} incomplete final line(s)", state.skipped),
        )?;
    }
    if !path.is_dir() && state.hands == 0 && (state.corrupted > 0 || state.skipped > 0) {
        ui::write_error(err, "Invalid record")?;
        return Err(CliError::InvalidInput("Invalid record".to_string()));
    }

    let summary = serde_json::json!({
        "hands": state.hands,
        "showdowns": state.showdowns,
        "eliminations": state.eliminations,
        "split_pots": state.split_pots,
        "chips": state.chips,
        "chips_won": state.chips_won,
    });
    let json_output = serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_output)?;
    if state.stats_ok {
        Ok(())
    } else {
        Err(CliError::InvalidInput(
            "Statistics validation failed".to_string(),
        ))
    }
}

fn consume_content(
    content: &str,
    state: &mut StatsState,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let has_trailing_nl = content.ends_with('\n');
    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    for (i, line) in lines.iter().enumerate() {
        let rec: SettlementRecord = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(_) => {
                if i == lines.len() - 1 && !has_trailing_nl {
                    state.skipped += 1;
                } else {
                    state.corrupted += 1;
                }
                continue;
            }
        };

        if !rec.conserves_chips() {
            state.stats_ok = false;
            ui::write_error(
                err,
                &format!(
                    "Chip conservation violated at hand {}: payouts {} vs pot {}",
                    rec.hand_id,
                    rec.payouts.total(),
                    rec.pot
                ),
            )?;
            continue;
        }
        state.record(&rec);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ELIMINATION: &str = r#"{"hand_id":"20250101-000001","seed":null,"ts":"2025-01-01T00:00:00Z","street":"preflop","board":[],"pot":30,"path":"elimination","winners":[1],"payouts":{"0":0,"1":30},"hands":[]}"#;
    const SPLIT: &str = r#"{"hand_id":"20250101-000002","street":"river","board":[],"pot":101,"path":"showdown","winners":[0,1],"payouts":{"0":51,"1":50}}"#;
    const LEAKY: &str = r#"{"hand_id":"20250101-000003","street":"river","board":[],"pot":100,"path":"showdown","winners":[0],"payouts":{"0":90,"1":0}}"#;

    fn stats_for(content: &str) -> (Result<(), CliError>, String, String) {
        let mut temp = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut temp, content.as_bytes()).unwrap();
        let path = temp.path().to_str().unwrap().to_string();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_stats_command(path, &mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_stats_empty_file() {
        let (result, out, _) = stats_for("");
        assert!(result.is_ok());
        assert!(out.contains("\"hands\": 0"));
    }

    #[test]
    fn test_stats_aggregates_paths_and_chips() {
        let (result, out, _) = stats_for(&format!("{}\n{}\n", ELIMINATION, SPLIT));
        assert!(result.is_ok());
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["hands"], 2);
        assert_eq!(json["showdowns"], 1);
        assert_eq!(json["eliminations"], 1);
        assert_eq!(json["split_pots"], 1);
        assert_eq!(json["chips"], 131);
        assert_eq!(json["chips_won"]["0"], 51);
        assert_eq!(json["chips_won"]["1"], 80);
    }

    #[test]
    fn test_stats_chip_conservation_violation() {
        let (result, _, err) = stats_for(&format!("{}\n{}\n", ELIMINATION, LEAKY));
        assert!(result.is_err());
        assert!(err.contains("Chip conservation violated at hand 20250101-000003"));
    }

    #[test]
    fn test_stats_corrupted_record() {
        let (result, out, err) = stats_for(&format!("{}\n{{invalid json}}\n{}\n", ELIMINATION, SPLIT));
        assert!(result.is_ok());
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["hands"], 2);
        assert!(err.contains("corrupted"));
    }

    #[test]
    fn test_stats_incomplete_final_line_is_discarded() {
        let (result, out, err) = stats_for(&format!("{}\n{{\"hand_id\":\"2025", ELIMINATION));
        assert!(result.is_ok());
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["hands"], 1);
        assert!(err.contains("incomplete final line"));
    }

    #[test]
    fn test_stats_only_garbage_is_invalid() {
        let (result, _, err) = stats_for("not json\n");
        assert!(result.is_err());
        assert!(err.contains("Invalid record"));
    }

    #[test]
    fn test_stats_nonexistent_file() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result =
            handle_stats_command("/nonexistent/path/to/file.jsonl".into(), &mut out, &mut err);
        assert!(result.is_err());
    }
}
