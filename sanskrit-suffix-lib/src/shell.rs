// Interactive menu front end over a registry it owns.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::analyzer;
use crate::error::{Error, Result};
use crate::output;
use crate::registry::{RegistryConfig, SuffixRegistry};

const BANNER: &str = "===================================\n \
                      Sanskrit Suffix Identifier\n\
                      ===================================\n";

const MENU: &str = "1. Show all known suffixes\n\
                    2. Analyze a word\n\
                    3. Add a new suffix\n\
                    4. Exit\n";

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Analyze,
    Add,
    Exit,
}

/// Why a menu line was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BadChoice {
    NotANumber,
    OutOfRange,
}

impl MenuChoice {
    fn parse(line: &str) -> std::result::Result<Self, BadChoice> {
        match line.trim().parse::<i64>() {
            Ok(1) => Ok(MenuChoice::List),
            Ok(2) => Ok(MenuChoice::Analyze),
            Ok(3) => Ok(MenuChoice::Add),
            Ok(4) => Ok(MenuChoice::Exit),
            Ok(_) => Err(BadChoice::OutOfRange),
            Err(_) => Err(BadChoice::NotANumber),
        }
    }
}

/// Line-oriented interactive session.
pub struct Shell<R, W> {
    registry: SuffixRegistry,
    config: RegistryConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(registry: SuffixRegistry, config: RegistryConfig, input: R, output: W) -> Self {
        Self {
            registry,
            config,
            input,
            output,
        }
    }

    pub fn registry(&self) -> &SuffixRegistry {
        &self.registry
    }

    /// Hand back the registry (with any additions) once the session is over.
    pub fn into_registry(self) -> SuffixRegistry {
        self.registry
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{BANNER}{MENU}Enter your choice: ")?;
            self.output.flush()?;

            let line = match self.read_line()? {
                Some(l) => l,
                None => {
                    debug!("input closed at menu prompt");
                    writeln!(self.output)?;
                    return Ok(());
                }
            };

            match MenuChoice::parse(&line) {
                Ok(MenuChoice::List) => {
                    write!(self.output, "\n{}\n", output::to_listing(&self.registry))?;
                }
                Ok(MenuChoice::Analyze) => self.analyze_prompt()?,
                Ok(MenuChoice::Add) => self.add_prompt()?,
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                Err(BadChoice::NotANumber) => writeln!(self.output, "Invalid input. Try again.\n")?,
                Err(BadChoice::OutOfRange) => writeln!(self.output, "Invalid choice. Try again.\n")?,
            }
        }
    }

    fn analyze_prompt(&mut self) -> Result<()> {
        let word = match self.prompt("Enter a Sanskrit word (transliterated, no spaces): ")? {
            Some(w) => w,
            None => return Ok(writeln!(self.output, "Error reading word.\n")?),
        };

        match analyzer::analyze(&self.registry, &word) {
            Ok(outcome) => writeln!(self.output, "{}", output::to_report(&outcome))?,
            Err(Error::EmptyInput) => writeln!(self.output, "Empty word.")?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn add_prompt(&mut self) -> Result<()> {
        let suffix = match self.prompt("Enter new suffix (e.g. 'ena', 'asya'): ")? {
            Some(s) => s,
            None => return Ok(writeln!(self.output, "Error reading suffix.\n")?),
        };
        let category = match self.prompt("Enter category / description: ")? {
            Some(c) => c,
            None => return Ok(writeln!(self.output, "Error reading category.\n")?),
        };

        match self.registry.add(&suffix, &category, &self.config) {
            Ok(_) => writeln!(self.output, "Suffix added successfully.\n")?,
            Err(e) => {
                warn!(error = %e, "rejected suffix");
                writeln!(self.output, "{e}. Suffix not added.\n")?;
            }
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed = buf.strip_suffix('\n').unwrap_or(&buf);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }
}
