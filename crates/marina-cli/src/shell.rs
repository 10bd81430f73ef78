//! The interactive menu loop.
//!
//! The shell owns input acquisition and prompting; every decision about
//! records, balances, and the fleet is delegated to the core library. Each
//! menu letter maps to one core command, and no command failure ever ends
//! the loop.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use marina::{ops, CommandError, DecodeOptions, Fleet};

const MENU_PROMPT: &str = "(I)nventory, (A)dd, (R)emove, (P)ayment, (M)onth, e(X)it : ";
const DATA_PROMPT: &str = "Please enter the boat data in CSV format                 : ";
const NAME_PROMPT: &str = "Please enter the boat name                               : ";
const AMOUNT_PROMPT: &str = "Please enter the amount to be paid                       : ";

/// The interactive shell over one fleet and its backing file.
pub struct Shell {
    fleet: Fleet,
    path: PathBuf,
    options: DecodeOptions,
}

impl Shell {
    pub fn new(fleet: Fleet, path: PathBuf, options: DecodeOptions) -> Self {
        Self {
            fleet,
            path,
            options,
        }
    }

    /// Runs the menu loop until e(X)it or end of input, then saves.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Welcome to the Boat Management System")?;
        writeln!(out, "-------------------------------------")?;
        writeln!(out)?;

        loop {
            write!(out, "{MENU_PROMPT}")?;
            out.flush()?;
            let Some(command) = read_line(&mut input)? else {
                break;
            };
            let command = command.trim();
            if command.is_empty() {
                continue;
            }

            match command.chars().next().map(|c| c.to_ascii_lowercase()) {
                Some('i') => {
                    for row in ops::list(&self.fleet) {
                        writeln!(out, "{row}")?;
                    }
                    writeln!(out)?;
                }
                Some('a') => {
                    self.add_boat(&mut input, &mut out)?;
                    writeln!(out)?;
                }
                Some('r') => {
                    self.remove_boat(&mut input, &mut out)?;
                    writeln!(out)?;
                }
                Some('p') => {
                    self.accept_payment(&mut input, &mut out)?;
                    writeln!(out)?;
                }
                Some('m') => {
                    ops::apply_monthly_charge(&mut self.fleet);
                    writeln!(out)?;
                }
                Some('x') => {
                    writeln!(out)?;
                    writeln!(out, "Exiting the Boat Management System")?;
                    writeln!(out)?;
                    self.save();
                    return Ok(());
                }
                _ => {
                    writeln!(out, "Invalid option {command}")?;
                    writeln!(out)?;
                }
            }
        }

        // End of input without an explicit exit still persists the fleet.
        self.save();
        Ok(())
    }

    fn add_boat<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        write!(out, "{DATA_PROMPT}")?;
        out.flush()?;
        let Some(record) = read_line(input)? else {
            return Ok(());
        };
        match ops::add(&mut self.fleet, &record, &self.options) {
            Ok(()) => {}
            Err(CommandError::InvalidRecord(err)) => {
                tracing::debug!(%err, "rejected add record");
                writeln!(out, "Invalid CSV format.")?;
            }
            Err(err) => report(out, &err)?,
        }
        Ok(())
    }

    fn remove_boat<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        write!(out, "{NAME_PROMPT}")?;
        out.flush()?;
        let Some(name) = read_line(input)? else {
            return Ok(());
        };
        match ops::remove(&mut self.fleet, name.trim()) {
            Ok(()) => {}
            Err(err) => report(out, &err)?,
        }
        Ok(())
    }

    fn accept_payment<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<()> {
        write!(out, "{NAME_PROMPT}")?;
        out.flush()?;
        let Some(name) = read_line(input)? else {
            return Ok(());
        };
        let name = name.trim();
        if self.fleet.find(name).is_none() {
            writeln!(out, "No boat with that name")?;
            return Ok(());
        }

        write!(out, "{AMOUNT_PROMPT}")?;
        out.flush()?;
        let Some(amount) = read_line(input)? else {
            return Ok(());
        };
        let Ok(amount) = amount.trim().parse::<f64>() else {
            // The reference shell silently returns to the menu here.
            return Ok(());
        };

        match ops::accept_payment(&mut self.fleet, name, amount) {
            Ok(_) => {}
            Err(err) => report(out, &err)?,
        }
        Ok(())
    }

    fn save(&self) {
        if let Err(err) = self.fleet.save_path(&self.path) {
            tracing::error!(path = %self.path.display(), %err, "unable to write data file");
            eprintln!("Unable to write file '{}'", self.path.display());
        }
    }

    #[cfg(test)]
    fn fleet(&self) -> &Fleet {
        &self.fleet
    }
}

/// Prints the user-facing message for a failed command.
fn report<W: Write>(out: &mut W, err: &CommandError) -> io::Result<()> {
    match err {
        CommandError::NotFound { .. } => writeln!(out, "No boat with that name"),
        CommandError::CapacityExceeded { .. } => {
            writeln!(out, "Cannot add new boat: the fleet is full.")
        }
        CommandError::PaymentExceedsBalance { balance } => {
            writeln!(out, "That is more than the amount owed, ${balance:.2}")
        }
        CommandError::InvalidRecord(_) => writeln!(out, "Invalid CSV format."),
    }
}

/// Reads one line, returning `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use super::*;

    fn run_session(initial: &str, script: &str) -> (String, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boats.csv");
        std::fs::write(&path, initial).unwrap();

        let options = DecodeOptions::strict();
        let fleet = Fleet::load_path(&path, Some(120), &options).unwrap();
        let mut shell = Shell::new(fleet, path.clone(), options);

        let mut out = Vec::new();
        shell.run(Cursor::new(script), &mut out).unwrap();

        let saved = std::fs::read_to_string(&path).unwrap();
        (String::from_utf8(out).unwrap(), saved)
    }

    #[test]
    fn test_inventory_and_exit() {
        let (out, saved) = run_session("Big Brother,20,slip,27,1450.00\n", "i\nx\n");
        assert!(out.contains("Welcome to the Boat Management System"));
        assert!(out.contains("Big Brother"));
        assert!(out.contains("$1450.00"));
        assert!(out.contains("Exiting the Boat Management System"));
        assert_eq!(saved, "Big Brother,20,slip,27,1450.00\n");
    }

    #[test]
    fn test_add_then_save_sorted() {
        let (_, saved) = run_session(
            "Whisper,30,storage,5,10.00\n",
            "a\nAlbatross,40,land,B,20.00\nx\n",
        );
        assert_eq!(
            saved,
            "Albatross,40,land,B,20.00\nWhisper,30,storage,5,10.00\n"
        );
    }

    #[test]
    fn test_add_invalid_record_message() {
        let (out, saved) = run_session("", "a\nnot a record\nx\n");
        assert!(out.contains("Invalid CSV format."));
        assert_eq!(saved, "");
    }

    #[test]
    fn test_remove_unknown_boat_message() {
        let (out, _) = run_session("", "r\nNessie\nx\n");
        assert!(out.contains("No boat with that name"));
    }

    #[test]
    fn test_payment_flow_and_guard() {
        let initial = "Big Brother,20,slip,27,1450.00\n";
        let script = "m\np\nBig Brother\n1700.00\np\nBig Brother\n0.01\nx\n";
        let (out, saved) = run_session(initial, script);
        assert!(out.contains("That is more than the amount owed, $0.00"));
        assert_eq!(saved, "Big Brother,20,slip,27,0.00\n");
    }

    #[test]
    fn test_invalid_option_and_eof_saves() {
        let (out, saved) = run_session("Grace,22,land,C,12.50\n", "q\n");
        assert!(out.contains("Invalid option q"));
        assert_eq!(saved, "Grace,22,land,C,12.50\n");
    }

    #[test]
    fn test_menu_letters_are_case_insensitive() {
        let (out, _) = run_session("Grace,22,land,C,12.50\n", "I\nX\n");
        assert!(out.contains("Grace"));
        assert!(out.contains("Exiting"));
    }

    #[test]
    fn test_shell_state_matches_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boats.csv");
        let options = DecodeOptions::strict();
        let fleet = Fleet::load_path(&path, Some(120), &options).unwrap();
        let mut shell = Shell::new(fleet, path.clone(), options);
        shell
            .run(Cursor::new("a\nGrace,22,slip,3,0.00\nx\n"), &mut Vec::new())
            .unwrap();
        assert_eq!(shell.fleet().len(), 1);
        assert!(path.exists());
    }
}
