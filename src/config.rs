//! Game configuration: command-line flags and the startup prompts

use std::io::{BufRead, Write};

use clap::{Parser, ValueEnum};
use tracing::warn;

use crate::board::Player;
use crate::engine::{SearchAlgorithm, DEFAULT_DEPTH};
use crate::error::{CheckersError, Result};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human: Player },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Player::Red }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Human vs AI
    Pve,
    /// Human vs Human
    Pvp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Red,
    Blue,
}

impl From<ColorArg> for Player {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Red => Player::Red,
            ColorArg::Blue => Player::Blue,
        }
    }
}

/// Command-line interface
#[derive(Debug, Parser)]
#[command(name = "checkers", version, about = "Checkers with a minimax AI")]
pub struct Cli {
    /// Human vs AI or Human vs Human
    #[arg(long, value_enum, default_value_t = ModeArg::Pve)]
    pub mode: ModeArg,

    /// Color played by the human in PvE (Red moves first)
    #[arg(long, value_enum, default_value_t = ColorArg::Red)]
    pub human: ColorArg,

    /// Search algorithm used by the AI
    #[arg(long, value_enum, default_value_t = SearchAlgorithm::AlphaBeta)]
    pub algorithm: SearchAlgorithm,

    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    pub depth: u8,

    /// Ask for the settings on stdin instead of using flags
    #[arg(long)]
    pub interactive: bool,
}

/// Settings consumed once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    pub algorithm: SearchAlgorithm,
    pub depth: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            algorithm: SearchAlgorithm::default(),
            depth: DEFAULT_DEPTH,
        }
    }
}

impl GameConfig {
    /// Reject settings the engine cannot run with
    pub fn validate(self) -> Result<Self> {
        if self.depth == 0 {
            return Err(CheckersError::InvalidDepth(0));
        }
        Ok(self)
    }

    /// Color played by the AI, `None` in hotseat mode
    pub fn ai_player(&self) -> Option<Player> {
        match self.mode {
            GameMode::PvE { human } => Some(human.opponent()),
            GameMode::PvP => None,
        }
    }

    /// Run the startup dialogue on `input`, echoing questions to `output`.
    ///
    /// An unknown mode is an error. A bad color falls back to Red and a bad
    /// depth to the default, both with a warning; any algorithm answer other
    /// than `2` selects plain minimax.
    pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Self> {
        writeln!(output, "Welcome to Checkers!")?;

        let mode = ask(input, output, "Select mode: 1 for Human vs AI, 2 for Human vs Human: ")?;
        match mode.as_str() {
            "1" => {}
            "2" => {
                return Ok(Self {
                    mode: GameMode::PvP,
                    ..Self::default()
                })
            }
            _ => return Err(CheckersError::InvalidMode(mode)),
        }

        let color = ask(input, output, "Do you want to play as Red (R) or Blue (B)? ")?;
        let human = match color.to_ascii_uppercase().as_str() {
            "R" => Player::Red,
            "B" => Player::Blue,
            other => {
                warn!(answer = other, "invalid color, defaulting to Red");
                writeln!(output, "Invalid choice. Defaulting to Red.")?;
                Player::Red
            }
        };

        let algorithm = ask(
            input,
            output,
            "Select AI algorithm: 1 for Minimax, 2 for Alpha-Beta Pruning: ",
        )?;
        let algorithm = SearchAlgorithm::from_flag(algorithm == "2");

        let depth = ask(input, output, "Enter AI depth limit (e.g., 3, 4, 5): ")?;
        let depth = match parse_depth(&depth) {
            Ok(depth) => depth,
            Err(err) => {
                warn!(%err, default = DEFAULT_DEPTH, "invalid depth, using default");
                writeln!(output, "Invalid depth. Defaulting to {DEFAULT_DEPTH}.")?;
                DEFAULT_DEPTH
            }
        };

        Self {
            mode: GameMode::PvE { human },
            algorithm,
            depth,
        }
        .validate()
    }
}

impl TryFrom<Cli> for GameConfig {
    type Error = CheckersError;

    fn try_from(cli: Cli) -> Result<Self> {
        let mode = match cli.mode {
            ModeArg::Pve => GameMode::PvE {
                human: cli.human.into(),
            },
            ModeArg::Pvp => GameMode::PvP,
        };
        Self {
            mode,
            algorithm: cli.algorithm,
            depth: cli.depth,
        }
        .validate()
    }
}

/// Parse a depth answer; must be a whole number of at least one ply
pub fn parse_depth(text: &str) -> Result<u8> {
    let value: i64 = text
        .trim()
        .parse()
        .map_err(|_| CheckersError::InvalidDepth(0))?;
    match u8::try_from(value) {
        Ok(depth) if depth >= 1 => Ok(depth),
        _ => Err(CheckersError::InvalidDepth(value)),
    }
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{question}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_prompt(answers: &str) -> (Result<GameConfig>, String) {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = GameConfig::prompt(&mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_prompt_pve() {
        let (config, _) = run_prompt("1\nb\n2\n4\n");
        let config = config.unwrap();
        assert_eq!(config.mode, GameMode::PvE { human: Player::Blue });
        assert_eq!(config.algorithm, SearchAlgorithm::AlphaBeta);
        assert_eq!(config.depth, 4);
        assert_eq!(config.ai_player(), Some(Player::Red));
    }

    #[test]
    fn test_prompt_pvp_skips_ai_questions() {
        let (config, output) = run_prompt("2\n");
        let config = config.unwrap();
        assert_eq!(config.mode, GameMode::PvP);
        assert_eq!(config.ai_player(), None);
        assert!(!output.contains("depth"));
    }

    #[test]
    fn test_prompt_invalid_mode() {
        let (config, _) = run_prompt("3\n");
        assert!(matches!(config, Err(CheckersError::InvalidMode(m)) if m == "3"));
    }

    #[test]
    fn test_prompt_defaults() {
        let (config, output) = run_prompt("1\ngreen\n1\nabc\n");
        let config = config.unwrap();
        assert_eq!(config.mode, GameMode::PvE { human: Player::Red });
        assert_eq!(config.algorithm, SearchAlgorithm::Minimax);
        assert_eq!(config.depth, DEFAULT_DEPTH);
        assert!(output.contains("Defaulting to Red"));
        assert!(output.contains("Invalid depth"));
    }

    #[test]
    fn test_prompt_non_positive_depth() {
        let (config, _) = run_prompt("1\nR\n2\n0\n");
        assert_eq!(config.unwrap().depth, DEFAULT_DEPTH);
        let (config, _) = run_prompt("1\nR\n2\n-2\n");
        assert_eq!(config.unwrap().depth, DEFAULT_DEPTH);
    }

    #[test]
    fn test_parse_depth() {
        assert_eq!(parse_depth("5").unwrap(), 5);
        assert_eq!(parse_depth(" 2 ").unwrap(), 2);
        assert!(matches!(parse_depth("0"), Err(CheckersError::InvalidDepth(0))));
        assert!(matches!(parse_depth("-1"), Err(CheckersError::InvalidDepth(-1))));
        assert!(parse_depth("x").is_err());
    }

    #[test]
    fn test_validate_rejects_zero_depth() {
        let config = GameConfig {
            depth: 0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(CheckersError::InvalidDepth(0))));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["checkers"]);
        let config = GameConfig::try_from(cli).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.ai_player(), Some(Player::Blue));
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "checkers",
            "--mode",
            "pve",
            "--human",
            "blue",
            "--algorithm",
            "minimax",
            "--depth",
            "5",
        ]);
        let config = GameConfig::try_from(cli).unwrap();
        assert_eq!(config.mode, GameMode::PvE { human: Player::Blue });
        assert_eq!(config.algorithm, SearchAlgorithm::Minimax);
        assert_eq!(config.depth, 5);
    }

    #[test]
    fn test_cli_rejects_zero_depth() {
        let cli = Cli::parse_from(["checkers", "--depth", "0"]);
        assert!(GameConfig::try_from(cli).is_err());
    }
}
