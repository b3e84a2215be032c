//! Supply modes: queue only, or queue plus reserve stack

use serde::{Deserialize, Serialize};

/// Which containers a session runs with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupplyMode {
    QueueOnly,
    #[default]
    WithReserve,
}

impl SupplyMode {
    pub fn name(&self) -> &'static str {
        match self {
            SupplyMode::QueueOnly => "Queue Only",
            SupplyMode::WithReserve => "Queue + Reserve",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SupplyMode::QueueOnly => "Play from the front, insert at the back",
            SupplyMode::WithReserve => "Set pieces aside on a stack and use them later",
        }
    }

    pub fn has_reserve(&self) -> bool {
        matches!(self, SupplyMode::WithReserve)
    }

    /// Commands offered in this mode, in menu order (exit last)
    pub fn commands(&self) -> &'static [Command] {
        match self {
            SupplyMode::QueueOnly => &[Command::Play, Command::Insert, Command::Exit],
            SupplyMode::WithReserve => &[
                Command::Play,
                Command::Reserve,
                Command::UseReserved,
                Command::Exit,
            ],
        }
    }

    pub fn all() -> &'static [SupplyMode] {
        &[SupplyMode::QueueOnly, SupplyMode::WithReserve]
    }
}

/// A numbered entry of the in-session action menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play,
    Insert,
    Reserve,
    UseReserved,
    Exit,
}

impl Command {
    /// Code the player types for this command. Insert and Reserve share
    /// code 2; no mode offers both.
    pub fn code(&self) -> i64 {
        match self {
            Command::Exit => 0,
            Command::Play => 1,
            Command::Insert | Command::Reserve => 2,
            Command::UseReserved => 3,
        }
    }

    /// Map a typed code back to a command available in `mode`
    pub fn from_code(code: i64, mode: SupplyMode) -> Option<Command> {
        mode.commands()
            .iter()
            .copied()
            .find(|command| command.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Command::Play => "Play piece",
            Command::Insert => "Insert new piece",
            Command::Reserve => "Reserve piece",
            Command::UseReserved => "Use reserved piece",
            Command::Exit => "Exit",
        }
    }

    /// Short note on which container the command touches
    pub fn detail(&self) -> &'static str {
        match self {
            Command::Play => "dequeue",
            Command::Insert => "enqueue",
            Command::Reserve => "queue -> stack",
            Command::UseReserved => "pop",
            Command::Exit => "back to menu",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_only_codes() {
        let mode = SupplyMode::QueueOnly;
        assert_eq!(Command::from_code(1, mode), Some(Command::Play));
        assert_eq!(Command::from_code(2, mode), Some(Command::Insert));
        assert_eq!(Command::from_code(0, mode), Some(Command::Exit));
        assert_eq!(Command::from_code(3, mode), None);
    }

    #[test]
    fn test_reserve_codes() {
        let mode = SupplyMode::WithReserve;
        assert_eq!(Command::from_code(2, mode), Some(Command::Reserve));
        assert_eq!(Command::from_code(3, mode), Some(Command::UseReserved));
        assert_eq!(Command::from_code(-1, mode), None);
        assert_eq!(Command::from_code(4, mode), None);
    }

    #[test]
    fn test_codes_unique_per_mode() {
        for &mode in SupplyMode::all() {
            let mut codes: Vec<_> = mode.commands().iter().map(|c| c.code()).collect();
            codes.sort();
            codes.dedup();
            assert_eq!(codes.len(), mode.commands().len());
        }
    }
}
