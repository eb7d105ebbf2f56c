//! Screen rendering for the console session.
//!
//! Every function writes one screen (or part of one) to a writer. None of
//! them read input.

use std::io::{self, Write};

use rust_decimal::Decimal;

use crate::config::ProgramMetadata;
use crate::models::{AwardeeReport, SummaryReport};

const GREEN: &str = "\x1b[0;32m";
const RESET: &str = "\x1b[0m";
const CLEAR: &str = "\x1b[2J\x1b[H";

const BANNER_RULE: &str =
    "==================================================================================";
const MENU_RULE: &str = "-----------------------------------------";

/// Terminal features the screens may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenStyle {
    /// Emit ANSI colour codes.
    pub color: bool,
    /// Emit the clear-screen sequence.
    pub clear: bool,
}

impl Default for ScreenStyle {
    fn default() -> Self {
        Self {
            color: true,
            clear: true,
        }
    }
}

impl ScreenStyle {
    fn green(&self) -> &'static str {
        if self.color { GREEN } else { "" }
    }

    fn reset(&self) -> &'static str {
        if self.color { RESET } else { "" }
    }
}

/// Formats a dollar amount without trailing zeros.
pub fn format_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}

/// Clears the terminal when the style allows it.
pub fn clear_screen<W: Write>(out: &mut W, style: ScreenStyle) -> io::Result<()> {
    if style.clear {
        write!(out, "{}", CLEAR)?;
    }
    Ok(())
}

/// Writes the startup banner and the continue prompt.
pub fn write_splash<W: Write>(
    out: &mut W,
    program: &ProgramMetadata,
    style: ScreenStyle,
) -> io::Result<()> {
    write!(out, "{}", style.green())?;
    writeln!(out)?;
    writeln!(out, "{}", BANNER_RULE)?;
    writeln!(out, "   WELCOME TO THE {}   ", program.name)?;
    writeln!(out, "{}", BANNER_RULE)?;
    writeln!(out, "    VERSION: {}", program.version)?;
    writeln!(out, "    DESCRIPTION: {}", program.description)?;
    writeln!(out, "    AUTHOR: {}", program.author)?;
    writeln!(out, "    LICENCE#: {}", program.licence)?;
    writeln!(out, "{}\n\n", BANNER_RULE)?;
    writeln!(out, "Press Enter to continue...")?;
    write!(out, "{}", style.reset())?;
    out.flush()
}

/// Writes the main menu.
pub fn write_menu<W: Write>(out: &mut W, style: ScreenStyle) -> io::Result<()> {
    write!(out, "{}", style.green())?;
    writeln!(out, "{}", MENU_RULE)?;
    writeln!(out, "TUITION GRANT APPLICATION SYSTEM")?;
    writeln!(out, "{}", MENU_RULE)?;
    writeln!(out, "MENU OPTIONS")?;
    writeln!(out, "{}", MENU_RULE)?;
    writeln!(out, "A.  INPUT APPLICATION DETAILS FOR STUDENT")?;
    writeln!(out, "B.  DISPLAY SUMMARY OF APPLICATIONS")?;
    writeln!(out, "C.  DISPLAY GRANT AWARDEES")?;
    writeln!(out, "X.  EXIT")?;
    writeln!(out, "{}", MENU_RULE)?;
    write!(out, "{}", style.reset())
}

/// Writes the header shown before each application is entered.
pub fn write_entry_header<W: Write>(out: &mut W, processed: usize) -> io::Result<()> {
    writeln!(out, "\nNUMBER OF APPLICATIONS PROCESSED: {}", processed)?;
    writeln!(out, "_______________________________________")?;
    writeln!(out, "INPUT APPLICATION DETAILS FOR STUDENT")?;
    writeln!(out, "_______________________________________\n")
}

/// Writes the summary of applications.
pub fn write_summary<W: Write>(out: &mut W, report: &SummaryReport) -> io::Result<()> {
    writeln!(out, "__________________________________________")?;
    writeln!(out, "\nDISPLAY SUMMARY OF APPLICATIONS")?;
    writeln!(out, "__________________________________________")?;
    writeln!(
        out,
        "CURRENT NUMBER OF STUDENT APPLICATIONS: {}\n\n",
        report.count()
    )?;

    if report.entries.is_empty() {
        writeln!(out, "==================================")?;
        writeln!(out, "NO APPLICATIONS TO SUMMARIZE")?;
        writeln!(out, "==================================\n")?;
    } else {
        for entry in &report.entries {
            writeln!(out, "\nAPPLICATION NUMBER: {}", entry.application_number)?;
            writeln!(out, "STUDENT NAME: {}", entry.student_name)?;
            writeln!(out, "TUITION SHORTFALL ($): {}", format_amount(entry.shortfall))?;
            writeln!(out, "STATUS: {}", entry.status)?;
        }
        writeln!(out)?;
    }

    let stats = &report.statistics;
    writeln!(out, "TOTAL TUITION SHORTFALL ($): {}", format_amount(stats.total))?;
    writeln!(out, "AVERAGE TUITION SHORTFALL ($): {}", format_amount(stats.average))?;
    writeln!(out, "MAXIMUM TUITION SHORTFALL ($): {}", format_amount(stats.maximum))?;
    writeln!(out, "MINIMUM TUITION SHORTFALL ($): {}\n", format_amount(stats.minimum))
}

/// Writes the grant awardees.
pub fn write_awardees<W: Write>(out: &mut W, report: &AwardeeReport) -> io::Result<()> {
    writeln!(out, "____________________________")?;
    writeln!(out, "\nGRANT AWARDEES RECORDS")?;
    writeln!(out, "____________________________\n")?;

    for entry in &report.entries {
        writeln!(out, "APPLICATION NUMBER: {}", entry.application_number)?;
        writeln!(out, "STUDENT NAME: {}", entry.student_name)?;
        writeln!(out, "POINTS FROM GPA: {}", entry.gpa_points)?;
        writeln!(out, "POINTS FROM SHORTFALL: {}", entry.shortfall_points)?;
        writeln!(out, "TOTAL ACCUMULATED POINTS: {}\n", entry.total_points)?;
        writeln!(out, "{}\n", entry.tier.message())?;
    }

    if report.is_empty() {
        writeln!(out, "ZERO GRANTS APPROVED\n")?;
    }
    Ok(())
}

/// Writes the exit message.
pub fn write_exit<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n\n<Exiting Application>")?;
    out.flush()
}
