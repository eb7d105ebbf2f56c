//! Main menu options.

use crate::error::{GrantError, GrantResult};

/// A main menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// `A`: enter application details.
    InputApplications,
    /// `B`: display the summary of applications.
    DisplaySummary,
    /// `C`: display grant awardees.
    DisplayAwardees,
    /// `X`: exit.
    Exit,
}

impl MenuOption {
    /// Parses one line of menu input.
    ///
    /// The trimmed line must be exactly one of `A`, `B`, `C` or `X`, in
    /// either case.
    pub fn parse(raw: &str) -> GrantResult<Self> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let option = match (chars.next(), chars.next()) {
            (Some(c), None) => match c.to_ascii_uppercase() {
                'A' => Some(MenuOption::InputApplications),
                'B' => Some(MenuOption::DisplaySummary),
                'C' => Some(MenuOption::DisplayAwardees),
                'X' => Some(MenuOption::Exit),
                _ => None,
            },
            _ => None,
        };

        option.ok_or_else(|| GrantError::OutOfDomain {
            field: "menu_option".to_string(),
            message: format!("'{}' is not one of A, B, C, X", trimmed),
        })
    }
}

/// Parses the answer to "add another application?".
///
/// Returns false for `N`/`n`, true for any other non-empty answer. Only the
/// first non-blank character is considered.
pub fn parse_add_another(raw: &str) -> GrantResult<bool> {
    match raw.trim().chars().next() {
        Some(c) => Ok(!c.eq_ignore_ascii_case(&'n')),
        None => Err(GrantError::OutOfDomain {
            field: "add_another".to_string(),
            message: "answer Y or N".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(MenuOption::parse("a").unwrap(), MenuOption::InputApplications);
        assert_eq!(MenuOption::parse("B").unwrap(), MenuOption::DisplaySummary);
        assert_eq!(MenuOption::parse("c").unwrap(), MenuOption::DisplayAwardees);
        assert_eq!(MenuOption::parse("x").unwrap(), MenuOption::Exit);
    }

    #[test]
    fn test_parse_ignores_surrounding_whitespace() {
        assert_eq!(MenuOption::parse("  X \t").unwrap(), MenuOption::Exit);
    }

    #[test]
    fn test_parse_rejects_unknown_and_multi_character_input() {
        assert!(MenuOption::parse("D").is_err());
        assert!(MenuOption::parse("").is_err());
        assert!(MenuOption::parse("AB").is_err());
    }

    #[test]
    fn test_invalid_option_is_recoverable() {
        assert!(MenuOption::parse("?").unwrap_err().is_recoverable());
    }

    #[test]
    fn test_add_another_only_n_stops() {
        assert!(!parse_add_another("N").unwrap());
        assert!(!parse_add_another("no").unwrap());
        assert!(parse_add_another("Y").unwrap());
        assert!(parse_add_another("maybe").unwrap());
    }

    #[test]
    fn test_add_another_empty_is_rejected() {
        assert!(parse_add_another("   ").is_err());
    }
}
