//! Interactive unit count prompts.
//!
//! Reads from any `BufRead` and writes prompts to any `Write` so the loop can
//! be driven from tests.

use std::io::{self, BufRead, Write};

use btec_model::UnitCounts;

pub const PASS_PROMPT: &str = "Please enter the number of units achieved at pass level: ";
pub const MERIT_PROMPT: &str = "Please enter the number of units achieved at merit level: ";
pub const DISTINCTION_PROMPT: &str =
    "Please enter the number of units achieved at distinction level: ";
pub const INVALID_NUMBER: &str = "Please enter a number.";

/// Prompt until the user enters a non-negative whole number.
///
/// # Errors
///
/// Returns `UnexpectedEof` if input ends before a valid number is read.
pub fn prompt_count<R, W>(input: &mut R, output: &mut W, message: &str) -> io::Result<u32>
where
    R: BufRead,
    W: Write + ?Sized,
{
    write!(output, "{message}")?;
    output.flush()?;
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no input received",
            ));
        }
        if let Ok(count) = line.trim().parse::<u32>() {
            return Ok(count);
        }
        writeln!(output, "{INVALID_NUMBER}")?;
        write!(output, "\n{message}")?;
        output.flush()?;
    }
}

/// Fill in any unit counts not already supplied, prompting in
/// pass, merit, distinction order.
pub fn read_unit_counts<R, W>(
    input: &mut R,
    output: &mut W,
    pass: Option<u32>,
    merit: Option<u32>,
    distinction: Option<u32>,
) -> io::Result<UnitCounts>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let pass = match pass {
        Some(count) => count,
        None => prompt_count(input, output, PASS_PROMPT)?,
    };
    let merit = match merit {
        Some(count) => count,
        None => prompt_count(input, output, MERIT_PROMPT)?,
    };
    let distinction = match distinction {
        Some(count) => count,
        None => prompt_count(input, output, DISTINCTION_PROMPT)?,
    };
    Ok(UnitCounts::new(pass, merit, distinction))
}
