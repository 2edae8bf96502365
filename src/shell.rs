use std::io::{self, BufRead, Write};

use crate::{
    catalog::Catalog,
    command::{Outcome, dispatch},
    render::{OutputFormat, write_json, write_text},
};

/// Lines printed above the prompt
const BANNER: &[&str] = &[
    "Welcome to the Library!",
    "=============================================================================",
    "Here are the commands that you can input:",
    "1. list                              -> to display all book and its status",
    "2. get [code_of_book]                -> to show name of book by code",
    "3. add [code_of_book] [name_of_book] -> to add new book",
    "4. rent [code_of_book]               -> to update status of book rented",
    "5. return [code_of_book]             -> to update status of book returned",
    "6. rented                            -> to display all rented books",
    "7. exit                              -> to exit the program",
    "=============================================================================",
];

/// Prompt written before each command
const PROMPT: &str = "Command : ";

/// ANSI sequence clearing the terminal and homing the cursor
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Presentation settings of the shell
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ShellConfig {
    /// Print the command menu before every prompt (text mode only)
    pub banner: bool,
    /// Print the prompt before reading a line
    pub prompt: bool,
    /// Clear the terminal before every command
    pub clear_screen: bool,
    /// Wait for Enter after every command
    pub pause: bool,
    /// Colour confirmations and errors
    pub color: bool,
    /// Output format for outcomes
    pub format: OutputFormat,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            banner: true,
            prompt: true,
            clear_screen: false,
            pause: false,
            color: false,
            format: OutputFormat::Text,
        }
    }
}

/// Read-dispatch-print loop over any line source and sink
#[derive(Debug)]
pub struct Shell<R, W> {
    /// The catalog commands run against
    catalog: Catalog,
    /// Presentation settings
    config: ShellConfig,
    /// Line source
    input: R,
    /// Output sink
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    #[must_use]
    pub fn new(catalog: Catalog, config: ShellConfig, input: R, output: W) -> Self {
        Self { catalog, config, input, output }
    }

    /// The catalog as the commands so far left it
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run until `exit` or end of input
    ///
    /// # Errors
    ///
    /// Returns the first I/O error raised by the input or the output.
    pub fn run(&mut self) -> io::Result<()> {
        let mut line = String::new();
        loop {
            self.print_header()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(());
            }

            let outcome = dispatch(&mut self.catalog, &line);
            match self.config.format {
                OutputFormat::Text => write_text(&mut self.output, &outcome, self.config.color)?,
                OutputFormat::Json => write_json(&mut self.output, &outcome)?,
            }
            self.output.flush()?;

            if outcome == Outcome::Exit {
                return Ok(());
            }

            if self.config.pause {
                line.clear();
                if self.input.read_line(&mut line)? == 0 {
                    return Ok(());
                }
            }
        }
    }

    /// Clear screen, menu and prompt as configured
    fn print_header(&mut self) -> io::Result<()> {
        if self.config.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}")?;
        }
        if self.config.banner && self.config.format == OutputFormat::Text {
            for line in BANNER {
                writeln!(self.output, "{line}")?;
            }
        }
        if self.config.prompt {
            write!(self.output, "{PROMPT}")?;
        }
        self.output.flush()
    }
}
