//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use showdown_engine::pot::OddChipOrder;

#[derive(Parser, Debug)]
#[command(
    name = "showdown",
    version,
    about = "Showdown resolution and pot settlement for flop-style poker"
)]
pub struct ShowdownCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate the best five-card hand from hole cards and a board
    Eval {
        /// Two hole cards, e.g. `--hole Ah Kd`
        #[arg(long, num_args = 2, required = true)]
        hole: Vec<String>,
        /// Three to five board cards, e.g. `--board Qh Jh Th`
        #[arg(long, num_args = 3..=5, required = true)]
        board: Vec<String>,
    },
    /// Settle a finished hand described by a JSON table file
    Settle {
        #[arg(long)]
        input: String,
        /// Who receives leftover chips from an uneven split
        #[arg(long, value_enum)]
        odd_chip: Option<OddChipRule>,
        /// Append the settlement to this JSONL hand history
        #[arg(long)]
        history: Option<String>,
    },
    /// Deal a seeded hand to the river and settle it
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=10))]
        players: Option<u8>,
        #[arg(long)]
        history: Option<String>,
    },
    /// Aggregate a JSONL hand history file or directory
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Odd-chip convention as chosen on the command line or in configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OddChipRule {
    /// Lowest player index first
    #[default]
    Ascending,
    /// First winner seated after the dealer button
    Button,
}

impl OddChipRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            OddChipRule::Ascending => "ascending",
            OddChipRule::Button => "button",
        }
    }

    /// Engine ordering for this rule. `Button` needs a button seat and falls
    /// back to ascending order without one.
    pub fn order(self, button: Option<usize>) -> OddChipOrder {
        match (self, button) {
            (OddChipRule::Button, Some(button)) => OddChipOrder::FromButton { button },
            _ => OddChipOrder::AscendingIndex,
        }
    }
}
