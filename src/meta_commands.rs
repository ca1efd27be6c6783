use std::fmt;

use crate::{
    repl::{parse_addresses, ParseAddressError},
    replacer::{ParsePolicyError, Policy},
};

pub const HELP: &str = "\
<address> [<address> ...]   access logical addresses one after another
.trace <address> ...        replay a reference string (Optimal sees its future)
.policy [fifo|lru|optimal]  show or change the replacement policy
.reset                      return to the startup state
.table                      show the page table
.memory                     show physical memory
.disk                       show the backing store
.queue                      show the frame load order
.history                    show the access history
.stats                      show hit and fault counters
.help                       show this text
.exit                       quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    Exit,
    Help,
    Reset,
    Policy(Option<Policy>),
    Trace(Vec<usize>),
    Table,
    Memory,
    Disk,
    Queue,
    History,
    Stats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommandError {
    UnrecognizedCommand(String),
    MissingArgument(&'static str),
    InvalidPolicy(ParsePolicyError),
    InvalidAddress(ParseAddressError),
}

impl fmt::Display for MetaCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaCommandError::UnrecognizedCommand(command) => {
                write!(f, "Unrecognized command '{}', try .help", command)
            }
            MetaCommandError::MissingArgument(command) => {
                write!(f, "{} needs at least one argument", command)
            }
            MetaCommandError::InvalidPolicy(err) => write!(f, "{}", err),
            MetaCommandError::InvalidAddress(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for MetaCommandError {}

impl From<ParsePolicyError> for MetaCommandError {
    fn from(err: ParsePolicyError) -> Self {
        MetaCommandError::InvalidPolicy(err)
    }
}

impl From<ParseAddressError> for MetaCommandError {
    fn from(err: ParseAddressError) -> Self {
        MetaCommandError::InvalidAddress(err)
    }
}

pub fn parse_meta_command(input: &str) -> Result<MetaCommand, MetaCommandError> {
    let input = input.trim();
    let (command, args) = input
        .split_once(char::is_whitespace)
        .map_or((input, ""), |(command, args)| (command, args.trim()));
    match command {
        ".exit" | ".quit" => Ok(MetaCommand::Exit),
        ".help" => Ok(MetaCommand::Help),
        ".reset" => Ok(MetaCommand::Reset),
        ".policy" if args.is_empty() => Ok(MetaCommand::Policy(None)),
        ".policy" => Ok(MetaCommand::Policy(Some(args.parse()?))),
        ".trace" => {
            let trace = parse_addresses(args)?;
            if trace.is_empty() {
                return Err(MetaCommandError::MissingArgument(".trace"));
            }
            Ok(MetaCommand::Trace(trace))
        }
        ".table" => Ok(MetaCommand::Table),
        ".memory" => Ok(MetaCommand::Memory),
        ".disk" => Ok(MetaCommand::Disk),
        ".queue" => Ok(MetaCommand::Queue),
        ".history" => Ok(MetaCommand::History),
        ".stats" => Ok(MetaCommand::Stats),
        _ => Err(MetaCommandError::UnrecognizedCommand(command.to_string())),
    }
}
