use crate::run_length::RunLengthCodec;

const ARGUMENT_SEPARATOR: char = '\t';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search { query: String },
    Diff { first: String, second: String },
    Mode { protein: String },
}

/// Why a non-blank script line produced no command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    UnknownCommand(String),
    MissingArguments {
        command: String,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Blank,
    Skipped(SkipReason),
    Command(Command),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Search { .. } => "search",
            Self::Diff { .. } => "diff",
            Self::Mode { .. } => "mode",
        }
    }

    /// Command text as echoed in the transcript header. Search queries are shown
    /// run-length decoded.
    pub fn echo(&self) -> String {
        match self {
            Self::Search { query } => {
                format!("{}\t{}", self.name(), RunLengthCodec::decode(query))
            }
            Self::Diff { first, second } => format!("{}\t{first}\t{second}", self.name()),
            Self::Mode { protein } => format!("{}\t{protein}", self.name()),
        }
    }
}

fn required_arguments(command: &str) -> Option<usize> {
    match command {
        "search" | "mode" => Some(1),
        "diff" => Some(2),
        _ => None,
    }
}

pub fn parse_command_tokens(tokens: &[&str]) -> ParsedLine {
    let Some((&cmd, args)) = tokens.split_first() else {
        return ParsedLine::Blank;
    };
    let Some(expected) = required_arguments(cmd) else {
        return ParsedLine::Skipped(SkipReason::UnknownCommand(cmd.to_string()));
    };
    if args.len() < expected {
        return ParsedLine::Skipped(SkipReason::MissingArguments {
            command: cmd.to_string(),
            expected,
            found: args.len(),
        });
    }
    let command = match cmd {
        "search" => Command::Search {
            query: args[0].to_string(),
        },
        "diff" => Command::Diff {
            first: args[0].to_string(),
            second: args[1].to_string(),
        },
        _ => Command::Mode {
            protein: args[0].to_string(),
        },
    };
    ParsedLine::Command(command)
}

/// Parses one tab-separated script line. Every field is trimmed; extra arguments are ignored.
pub fn parse_command_line(line: &str) -> ParsedLine {
    if line.trim().is_empty() {
        return ParsedLine::Blank;
    }
    let tokens: Vec<&str> = line.split(ARGUMENT_SEPARATOR).map(str::trim).collect();
    parse_command_tokens(&tokens)
}
