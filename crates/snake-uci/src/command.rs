//! UCI command parsing.

use snake_core::Position;

use crate::error::UciError;

/// Parameters for the `go` command.
///
/// Only a fixed depth is honoured; clock parameters are accepted and
/// ignored since every search runs to its full depth.
#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Search to this depth instead of the configured one.
    pub depth: Option<u8>,
}

/// An option settable through `setoption`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciOption {
    /// `Depth`: plies searched per move.
    Depth(u8),
    /// `Seed`: jitter seed, or `None` to seed from the OS.
    Seed(Option<u64>),
    /// `Jitter`: enable tie-breaking jitter.
    Jitter(bool),
}

/// A parsed UCI command.
#[derive(Debug)]
pub enum Command {
    /// `uci` -- identify the engine.
    Uci,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `ucinewgame` -- reset engine state.
    UciNewGame,
    /// `position` -- set up a position with optional moves applied.
    Position(Position),
    /// `go` -- search and report the best move.
    Go(GoParams),
    /// `setoption` -- change an engine option.
    SetOption(UciOption),
    /// `stop` -- searches are synchronous, so there is nothing to stop.
    Stop,
    /// `quit` -- exit the engine.
    Quit,
    /// Unrecognized command (silently ignored per the UCI protocol).
    Unknown(String),
}

/// Parse a single line of UCI input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, UciError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "uci" => Ok(Command::Uci),
        "isready" => Ok(Command::IsReady),
        "ucinewgame" => Ok(Command::UciNewGame),
        "stop" => Ok(Command::Stop),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(&tokens[1..]),
        "go" => parse_go(&tokens[1..]),
        "setoption" => parse_setoption(&tokens[1..]),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 d7d5 ...]`
/// - `position fen <fen-string> [moves e2e4 d7d5 ...]`
fn parse_position(tokens: &[&str]) -> Result<Command, UciError> {
    let moves_at = tokens
        .iter()
        .position(|&token| token == "moves")
        .unwrap_or(tokens.len());
    let (setup, rest) = tokens.split_at(moves_at);

    let mut position = match setup {
        ["startpos"] => Position::new(),
        ["fen", fen @ ..] if !fen.is_empty() => {
            let fen = fen.join(" ");
            fen.parse::<Position>()
                .map_err(|_| UciError::InvalidFen { fen: fen.clone() })?
        }
        _ => return Err(UciError::MalformedPosition),
    };

    // rest is empty or starts with "moves"
    for uci_move in rest.iter().skip(1) {
        position
            .push_uci(uci_move)
            .map_err(|_| UciError::InvalidMove {
                uci_move: uci_move.to_string(),
            })?;
    }

    Ok(Command::Position(position))
}

/// Parse the `go` command arguments. Unknown tokens are silently skipped.
fn parse_go(tokens: &[&str]) -> Result<Command, UciError> {
    let mut params = GoParams::default();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                params.depth = Some(parse_value(tokens.get(i + 1), "depth")?);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    Ok(Command::Go(params))
}

/// Parse `setoption name <name> value <value>`.
fn parse_setoption(tokens: &[&str]) -> Result<Command, UciError> {
    if tokens.first() != Some(&"name") {
        return Err(UciError::MissingValue {
            param: "name".to_string(),
        });
    }
    let value_at = tokens
        .iter()
        .position(|&token| token == "value")
        .unwrap_or(tokens.len());
    let name = tokens[1..value_at].join(" ");
    let value = tokens.get(value_at + 1);

    let option = match name.to_ascii_lowercase().as_str() {
        "depth" => {
            let depth: u8 = parse_value(value, "Depth")?;
            if depth == 0 {
                return Err(UciError::InvalidValue {
                    param: "Depth".to_string(),
                    value: "0".to_string(),
                });
            }
            UciOption::Depth(depth)
        }
        "seed" => match value {
            Some(&"none") => UciOption::Seed(None),
            _ => UciOption::Seed(Some(parse_value(value, "Seed")?)),
        },
        "jitter" => UciOption::Jitter(parse_value(value, "Jitter")?),
        _ => return Err(UciError::UnknownOption { name }),
    };

    Ok(Command::SetOption(option))
}

/// Parse the value following a parameter name.
fn parse_value<T: std::str::FromStr>(token: Option<&&str>, param: &str) -> Result<T, UciError> {
    let value = token.ok_or_else(|| UciError::MissingValue {
        param: param.to_string(),
    })?;
    value.parse().map_err(|_| UciError::InvalidValue {
        param: param.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use snake_core::{Color, PositionOracle};

    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert!(matches!(parse_command("uci").unwrap(), Command::Uci));
        assert!(matches!(parse_command("isready").unwrap(), Command::IsReady));
        assert!(matches!(parse_command("ucinewgame").unwrap(), Command::UciNewGame));
        assert!(matches!(parse_command("stop").unwrap(), Command::Stop));
        assert!(matches!(parse_command("quit").unwrap(), Command::Quit));
    }

    #[test]
    fn parse_position_startpos() {
        match parse_command("position startpos").unwrap() {
            Command::Position(position) => assert_eq!(position, Position::new()),
            _ => panic!("expected Position"),
        }
    }

    #[test]
    fn parse_position_startpos_with_moves() {
        match parse_command("position startpos moves e2e4 e7e5 g1f3").unwrap() {
            Command::Position(position) => {
                assert_eq!(position.depth(), 3);
                assert_eq!(position.side_to_move(), Color::Black);
            }
            _ => panic!("expected Position"),
        }
    }

    #[test]
    fn parse_position_fen_with_moves() {
        let cmd = parse_command(
            "position fen rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1 moves c7c5",
        )
        .unwrap();
        match cmd {
            Command::Position(position) => {
                assert_eq!(position.side_to_move(), Color::White);
                assert_eq!(position.fullmove_number(), 2);
            }
            _ => panic!("expected Position"),
        }
    }

    #[test]
    fn parse_position_errors() {
        assert!(matches!(parse_command("position"), Err(UciError::MalformedPosition)));
        assert!(matches!(parse_command("position fen"), Err(UciError::MalformedPosition)));
        assert!(matches!(
            parse_command("position fen invalid"),
            Err(UciError::InvalidFen { .. })
        ));
        assert!(matches!(
            parse_command("position startpos moves e2e5"),
            Err(UciError::InvalidMove { .. })
        ));
    }

    #[test]
    fn parse_go_depth() {
        match parse_command("go depth 4").unwrap() {
            Command::Go(params) => assert_eq!(params.depth, Some(4)),
            _ => panic!("expected Go"),
        }
    }

    #[test]
    fn parse_go_ignores_clock() {
        match parse_command("go wtime 300000 btime 300000 winc 2000 binc 2000").unwrap() {
            Command::Go(params) => assert!(params.depth.is_none()),
            _ => panic!("expected Go"),
        }
    }

    #[test]
    fn parse_go_invalid_depth() {
        assert!(parse_command("go depth").is_err());
        assert!(parse_command("go depth abc").is_err());
    }

    #[test]
    fn parse_setoption_values() {
        let cases = [
            ("setoption name Depth value 5", UciOption::Depth(5)),
            ("setoption name Seed value 42", UciOption::Seed(Some(42))),
            ("setoption name Seed value none", UciOption::Seed(None)),
            ("setoption name Jitter value false", UciOption::Jitter(false)),
        ];
        for (line, expected) in cases {
            match parse_command(line).unwrap() {
                Command::SetOption(option) => assert_eq!(option, expected, "{line}"),
                _ => panic!("expected SetOption for {line}"),
            }
        }
    }

    #[test]
    fn parse_setoption_errors() {
        assert!(matches!(
            parse_command("setoption name Hash value 16"),
            Err(UciError::UnknownOption { .. })
        ));
        assert!(matches!(
            parse_command("setoption name Depth value 0"),
            Err(UciError::InvalidValue { .. })
        ));
        assert!(matches!(
            parse_command("setoption name Depth"),
            Err(UciError::MissingValue { .. })
        ));
    }

    #[test]
    fn parse_unknown_and_empty() {
        assert!(matches!(parse_command("foobar").unwrap(), Command::Unknown(_)));
        assert!(matches!(parse_command("").unwrap(), Command::Unknown(_)));
    }
}
