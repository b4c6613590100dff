//! # recordstore
//! An in-memory record manager with an AVL-tree name index.
//!
//! ## Features
//! - Add, remove, update, and search records by id or name
//! - Sorted listing by name, color, size, or weight
//! - Self-balancing ordered index ([`AvlIndex`]) with O(log n) insert and remove
//! - Bounded change log of recent edits
//! - Command parsing with case-insensitive commands
//!
//! ## Usage
//! This crate is primarily consumed by the binary in `main.rs`,
//! which provides the REPL interface. All reusable logic and
//! unit tests live here so the project can be tested with `cargo test`.
// =====================================================================
// File: lib.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Record Manager Project
// Date: Oct. 16, 2026
//
//   This module implements the command-line interface (CLI)
//   that accepts the following commands:
//
//     `ADD <name> <color> <size> <weight>` -> Add a record, prints it with its new id
//     `LIST [name|color|size|weight]`      -> All records sorted by field (default name)
//     `REMOVE <id>`       -> Remove a record by id
//     `FIND <name>`       -> Records with that name (case-insensitive), insertion order
//     `GET <id>`          -> Record with that id
//     `UPDATE <id> [color=<v>] [size=<v>] [weight=<v>]` -> Patch fields, blank keeps value
//     `HISTORY`           -> Recent changes, newest first
//     `HELP`              -> Print usage
//     `EXIT` / `QUIT`     -> Terminate the program
// =====================================================================
pub mod config;
pub use config::StoreConfig;

pub mod error;
pub use error::StoreError;

pub mod index;
pub use index::{AvlIndex, AvlNode, Comparator, NaturalOrder};

pub mod store;
pub use store::{
    ChangeEntry, ChangeKind, ChangeLog, Record, RecordDraft, RecordId, RecordPatch, RecordStore,
    SortField,
};

use std::io::{self, BufRead};
use tracing::warn;

/// Usage line printed for `HELP` and unknown commands.
pub const PROPER_SYNTAX: &str = "Syntax Usage: ADD <name> <color> <size> <weight>, LIST [field], \
REMOVE <id>, FIND <name>, GET <id>, UPDATE <id> [color=..] [size=..] [weight=..], HISTORY, EXIT";

/// Result of handling a single user command.
///
/// - `Continue` means the REPL should keep running.
/// - `Exit` means the REPL should break out and terminate.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    Exit,
}


/// Read–Evaluate–Print Loop (REPL) to handle interactive command input.
///
/// Continuously reads user commands from standard input, executes them
/// against `store`, and prints responses back to standard output.
///
/// # Example
/// ```no_run
/// use recordstore::{RecordStore, repl_loop};
///
/// let mut store = RecordStore::new();
/// repl_loop(&mut store); // <- waits for user input interactively
/// ```
pub fn repl_loop(store: &mut RecordStore) {
    let stdin = io::stdin();

    // Form a loop to iterate over each input line; lock mutex
    for input_line in stdin.lock().lines() {
        let full_command = match input_line {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "failed to read from stdin, stopping");
                break;
            }
        };
        let (cmd, args) = parse_command(&full_command);

        // Process command and arguments
        match handle_command(&cmd, &args, PROPER_SYNTAX, store) {
            CommandResult::Exit => break,
            CommandResult::Continue => (),
        }
    }
}


/// Parses a raw input line into a command and its arguments.
///
/// The first token is treated as the command (normalized to uppercase),
/// and the remaining tokens are collected as arguments. Leading and
/// trailing whitespace is ignored.
pub fn parse_command(line: &str) -> (String, Vec<String>) {
    let trimmed_line = line.trim();
    let mut command_segments = trimmed_line.split_whitespace();
    // Pulling out the command to normalize if lowercase is used
    let cmd = command_segments.next().unwrap_or("").to_uppercase();
    let args: Vec<String> = command_segments.map(|s| s.to_string()).collect();

    (cmd, args)
}


/// Handles a single user command and returns whether the REPL should continue or exit.
///
/// - Only supported commands will operate - Any other input: Prints an error and redisplays the syntax.
/// - Failed commands print `ERR: <reason>` and leave the store untouched.
///
/// The `proper_syntax` argument is displayed in error messages to guide the user.
pub fn handle_command(cmd: &str, args: &[String], proper_syntax: &str, store: &mut RecordStore) -> CommandResult {
    let outcome = match cmd {
        // Add command format:  ADD <name> <color> <size> <weight>
        "ADD" => add_record(args, store),

        // List command format:  LIST [field]
        "LIST" => list_records(args, store),

        // Remove command format:  REMOVE <id>
        "REMOVE" => {
            single_id(cmd, args).and_then(|id| {
                let record = store.remove(id).ok_or(StoreError::NotFound(id))?;
                println!("Removed: {}", record);
                Ok(())
            })
        }

        // Get command format:  GET <id>
        "GET" => {
            single_id(cmd, args).and_then(|id| {
                let record = store.search_by_id(id).ok_or(StoreError::NotFound(id))?;
                println!("{}", record);
                Ok(())
            })
        }

        // Find command format:  FIND <name>
        "FIND" => find_records(args, store),

        // Update command format:  UPDATE <id> [field=value ...]
        "UPDATE" => update_record(args, store),

        "HISTORY" => {
            let changes = store.recent_changes();
            if changes.is_empty() {
                println!("No changes yet.");
            }
            for line in changes {
                println!("{}", line);
            }
            Ok(())
        }

        "HELP" => {
            println!("{}", proper_syntax);
            Ok(())
        }

        // Exit command
        "EXIT" | "QUIT" => {
            println!("Exiting...");
            return CommandResult::Exit;
        }

        // Empty input
        "" => {
            println!("Enter a command.");
            Ok(())
        }

        // Everything else will be noted and returned as an error
        _ => {
            println!("ERROR: command '{}' not handled", cmd);
            println!("{}", proper_syntax);
            Ok(())
        }
    };

    if let Err(e) = outcome {
        warn!(command = cmd, error = %e, "command rejected");
        println!("ERR: {}", e);
    }
    CommandResult::Continue
}


// =========================
// Command helpers
// =========================

/// Parse a record id argument.
fn parse_id(raw: &str) -> Result<RecordId, StoreError> {
    raw.parse::<RecordId>()
        .map_err(|_| StoreError::InvalidInput(format!("'{}' is not a record id", raw)))
}


/// Commands that take exactly one id argument.
fn single_id(cmd: &str, args: &[String]) -> Result<RecordId, StoreError> {
    match args {
        [id] => parse_id(id),
        _ => Err(StoreError::InvalidInput(format!("{} requires exactly one <id>", cmd))),
    }
}


fn add_record(args: &[String], store: &mut RecordStore) -> Result<(), StoreError> {
    let [name, color, size, weight] = args else {
        return Err(StoreError::InvalidInput(
            "ADD requires <name> <color> <size> <weight>".to_string(),
        ));
    };

    let record = store.add(RecordDraft::new(name.as_str(), color.as_str(), size.as_str(), weight.as_str()));
    println!("Added: {}", record);
    Ok(())
}


fn list_records(args: &[String], store: &RecordStore) -> Result<(), StoreError> {
    let field = match args {
        [] => SortField::Name,
        [field] => field.parse()?,
        _ => return Err(StoreError::InvalidInput("LIST takes at most one field".to_string())),
    };

    let records = store.list_sorted(field);
    if records.is_empty() {
        println!("No records.");
        return Ok(());
    }

    println!("Records sorted by {}:", field);
    for record in records {
        println!("{}", record);
    }
    Ok(())
}


fn find_records(args: &[String], store: &RecordStore) -> Result<(), StoreError> {
    let [name] = args else {
        return Err(StoreError::InvalidInput("FIND requires exactly one <name>".to_string()));
    };

    let found = store.search_by_name(name);
    if found.is_empty() {
        println!("No records named '{}'.", name);
    }
    for record in found {
        println!("{}", record);
    }
    Ok(())
}


/// Build a patch from `field=value` arguments. An empty value keeps the
/// current field, matching a blank answer in the interactive prompt.
fn parse_patch(args: &[String]) -> Result<RecordPatch, StoreError> {
    let mut patch = RecordPatch::default();

    for arg in args {
        let (field, value) = arg.split_once('=').ok_or_else(|| {
            StoreError::InvalidInput(format!("expected <field>=<value>, got '{}'", arg))
        })?;

        let slot = match field.to_lowercase().as_str() {
            "color" => &mut patch.color,
            "size" => &mut patch.size,
            "weight" => &mut patch.weight,
            _ => {
                return Err(StoreError::InvalidInput(format!(
                    "'{}' cannot be updated (expected color, size or weight)",
                    field
                )));
            }
        };
        *slot = Some(value.to_string());
    }
    Ok(patch)
}


fn update_record(args: &[String], store: &mut RecordStore) -> Result<(), StoreError> {
    let Some((id, fields)) = args.split_first() else {
        return Err(StoreError::InvalidInput("UPDATE requires an <id>".to_string()));
    };

    let id = parse_id(id)?;
    let patch = parse_patch(fields)?;

    let record = store.update(id, patch).ok_or(StoreError::NotFound(id))?;
    println!("Updated: {}", record);
    Ok(())
}



// =================================================================
// lib.rs Unit tests
// =================================================================

#[cfg(test)]
mod main_lib_tests {
    use super::*;

    fn run(line: &str, store: &mut RecordStore) -> CommandResult {
        let (cmd, args) = parse_command(line);
        handle_command(&cmd, &args, "Usage", store)
    }

    #[test]
    fn test_parse_exit_command() {
        let (cmd, args) = parse_command("EXIT");
        assert_eq!(cmd, "EXIT");
        assert!(args.is_empty());
    }

    #[test]
    fn test_exit_and_quit_commands() {
        let mut store = RecordStore::new();
        assert_eq!(run("EXIT", &mut store), CommandResult::Exit);
        assert_eq!(run("quit", &mut store), CommandResult::Exit);
    }

    #[test]
    fn test_parse_add_command() {
        let (cmd, args) = parse_command("ADD Lion Gold Large 190kg");
        assert_eq!(cmd, "ADD");
        assert_eq!(args, vec!["Lion", "Gold", "Large", "190kg"]);
    }

    #[test]
    fn test_whitespace_command() {
        let (cmd, args) = parse_command("   find     Lion      ");
        assert_eq!(cmd, "FIND");
        assert_eq!(args, vec!["Lion"]);
    }

    #[test]
    fn test_parse_invalid_command() {
        let mut store = RecordStore::new();
        // Should not exit on bad command
        assert_eq!(run("FLY away", &mut store), CommandResult::Continue);
        assert_eq!(run("", &mut store), CommandResult::Continue);
    }

    #[test]
    fn test_add_command_inserts_record() {
        let mut store = RecordStore::new();
        assert_eq!(run("add Lion Gold Large 190kg", &mut store), CommandResult::Continue);

        let record = store.search_by_id(1).expect("record added");
        assert_eq!(record.name(), "Lion");
        assert_eq!(record.weight, "190kg");
    }

    #[test]
    fn test_add_with_missing_fields_is_rejected() {
        let mut store = RecordStore::new();
        run("ADD Lion Gold", &mut store);
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_command() {
        let mut store = RecordStore::new();
        run("ADD Bear Brown Large 300kg", &mut store);

        run("REMOVE 1", &mut store);
        assert!(store.is_empty());

        // Missing id and bad id both leave the store alone
        run("REMOVE 1", &mut store);
        run("REMOVE bear", &mut store);
        assert_eq!(store.recent_changes().len(), 2);
    }

    #[test]
    fn test_update_command_applies_fields() {
        let mut store = RecordStore::new();
        run("ADD Zebra Striped Medium 250kg", &mut store);
        run("UPDATE 1 color=Black size= WEIGHT=260kg", &mut store);

        let record = store.search_by_id(1).expect("record exists");
        assert_eq!(record.color, "Black");
        assert_eq!(record.size, "Medium");
        assert_eq!(record.weight, "260kg");
    }

    #[test]
    fn test_update_command_rejects_bad_fields() {
        let mut store = RecordStore::new();
        run("ADD Zebra Striped Medium 250kg", &mut store);
        run("UPDATE 1 name=Horse", &mut store);
        run("UPDATE 1 color", &mut store);
        run("UPDATE x color=Red", &mut store);

        let record = store.search_by_id(1).expect("record exists");
        assert_eq!(record.name(), "Zebra");
        assert_eq!(record.color, "Striped");
        // Only the add was logged
        assert_eq!(store.recent_changes().len(), 1);
    }

    #[test]
    fn test_parse_patch() {
        let args = vec!["color=Red".to_string(), "Weight=".to_string()];
        let patch = parse_patch(&args).expect("valid patch");
        assert_eq!(patch.color.as_deref(), Some("Red"));
        assert_eq!(patch.weight.as_deref(), Some(""));
        assert!(patch.size.is_none());
    }

    #[test]
    fn test_parse_id_rejects_text() {
        assert_eq!(parse_id("12"), Ok(12));
        assert!(matches!(parse_id("twelve"), Err(StoreError::InvalidInput(_))));
        assert!(matches!(parse_id("-1"), Err(StoreError::InvalidInput(_))));
    }

    #[test]
    fn test_read_only_commands_continue() {
        let mut store = RecordStore::new();
        run("ADD Lion Gold Large 190kg", &mut store);
        for line in ["LIST", "LIST color", "LIST age", "LIST a b", "FIND lion", "GET 1", "GET 9", "HISTORY", "HELP"] {
            assert_eq!(run(line, &mut store), CommandResult::Continue, "{}", line);
        }
        assert_eq!(store.len(), 1);
        assert_eq!(store.recent_changes().len(), 1);
    }
}
