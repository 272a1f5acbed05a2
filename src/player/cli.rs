use std::io::{self, BufRead, Write};

use log::warn;

use crate::core::{Aim, CellSet, Coord, ShotSource};

/// Errors produced while parsing a typed target such as `C7`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("too short - need a column letter and a row number (e.g. A5)")]
    TooShort,
    #[error("invalid column '{0}' - must be a letter")]
    BadColumn(char),
    #[error("column '{column}' is off the board - must be A-{last}")]
    ColumnOutOfRange { column: char, last: char },
    #[error("invalid row '{0}' - must be a number")]
    BadRow(String),
    #[error("row {row} is off the board - must be 0-{last}")]
    RowOutOfRange { row: usize, last: usize },
}

/// Column letter for a zero-based column index.
pub fn column_letter(col: usize) -> char {
    (b'A' + (col % 26) as u8) as char
}

/// Human-readable label of a cell, column letter then zero-based row.
pub fn coord_label(at: Coord) -> String {
    format!("{}{}", column_letter(at.col), at.row)
}

/// Parse `<Letter><Number>` into a cell of an N×N board. The letter picks the
/// column (case-insensitive), the number is the zero-based row.
pub fn parse_target<const N: usize>(input: &str) -> Result<Coord, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or(ParseError::Empty)?.to_ascii_uppercase();
    let row_str = chars.as_str().trim();
    if row_str.is_empty() {
        return Err(ParseError::TooShort);
    }
    if !col_ch.is_ascii_uppercase() {
        return Err(ParseError::BadColumn(col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= N {
        return Err(ParseError::ColumnOutOfRange {
            column: col_ch,
            last: column_letter(N.saturating_sub(1)),
        });
    }
    let row: usize = row_str
        .parse()
        .map_err(|_| ParseError::BadRow(row_str.to_string()))?;
    if row >= N {
        return Err(ParseError::RowOutOfRange {
            row,
            last: N.saturating_sub(1),
        });
    }
    Ok(Coord::new(row, col))
}

fn is_quit(input: &str) -> bool {
    ["q", "quit", "exit"]
        .iter()
        .any(|word| input.eq_ignore_ascii_case(word))
}

/// Print `message` and block until a line is entered.
///
/// Returns `false` at end of input or when the line is a quit command.
pub fn wait_for_enter<I, W>(input: &mut I, output: &mut W, message: &str) -> io::Result<bool>
where
    I: LineInput + ?Sized,
    W: Write + ?Sized,
{
    write!(output, "{}", message)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(false);
    }
    Ok(!is_quit(line.trim()))
}

/// Line-oriented input for [`ConsoleShooter`].
///
/// `io::Stdin` locks per call, so two shooters sharing the terminal in
/// hot-seat mode can each hold their own handle.
pub trait LineInput {
    /// Read one line into `buf`; `Ok(0)` signals end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineInput for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineInput for io::Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Human player typing targets at a terminal.
///
/// Malformed, off-board and already-tried targets are reported and
/// reprompted. End of input, a read error or `quit` cancels the match.
pub struct ConsoleShooter<I, W> {
    input: I,
    output: W,
    label: String,
}

impl ConsoleShooter<io::Stdin, io::Stdout> {
    /// Shooter reading from stdin and prompting on stdout.
    pub fn stdio(label: impl Into<String>) -> Self {
        Self::new(label, io::stdin(), io::stdout())
    }
}

impl<I: LineInput, W: Write> ConsoleShooter<I, W> {
    pub fn new(label: impl Into<String>, input: I, output: W) -> Self {
        Self {
            input,
            output,
            label: label.into(),
        }
    }

    /// Consume the shooter, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_target<const N: usize>(&mut self, excluded: &CellSet<N>) -> io::Result<Aim> {
        loop {
            write!(self.output, "{}, enter your shot (e.g., A5): ", self.label)?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(Aim::Cancelled);
            }
            let line = line.trim();
            if is_quit(line) {
                return Ok(Aim::Cancelled);
            }
            match parse_target::<N>(line) {
                Ok(at) if excluded.contains(at.row, at.col) => {
                    writeln!(
                        self.output,
                        "You already fired at {}. Choose another target.",
                        coord_label(at)
                    )?;
                }
                Ok(at) => return Ok(Aim::Fire(at)),
                Err(e) => writeln!(self.output, "Invalid input: {}", e)?,
            }
        }
    }
}

impl<I: LineInput, W: Write, const N: usize> ShotSource<N> for ConsoleShooter<I, W> {
    fn next_shot(&mut self, excluded: &CellSet<N>) -> Aim {
        match self.read_target(excluded) {
            Ok(aim) => aim,
            Err(e) => {
                warn!("{}: terminal i/o failed, cancelling: {}", self.label, e);
                Aim::Cancelled
            }
        }
    }

    fn label(&self) -> &str {
        &self.label
    }
}
