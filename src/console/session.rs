//! The interactive menu session.

use std::io::{BufRead, Write};

use tracing::{info, info_span};
use uuid::Uuid;

use crate::config::GrantConfig;
use crate::error::{GrantError, GrantResult};
use crate::reporting::{build_awardee_report, build_summary};
use crate::store::ApplicationStore;
use crate::validation::{parse_gpa, parse_shortfall, validate_name};

use super::menu::{MenuOption, parse_add_another};
use super::prompt::Prompter;
use super::screens::{self, ScreenStyle};

/// Behaviour switches for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Show the startup banner and wait for Enter.
    pub show_splash: bool,
    /// Terminal features used when drawing screens.
    pub style: ScreenStyle,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            show_splash: true,
            style: ScreenStyle::default(),
        }
    }
}

/// One run of the menu loop, owning the application store.
///
/// Reads commands from `R` and renders screens to `W` until the user exits
/// or the input ends. All records are discarded when the session is dropped.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use tuition_grants::config::ConfigLoader;
/// use tuition_grants::console::{ScreenStyle, Session, SessionOptions};
///
/// let config = ConfigLoader::embedded().unwrap().into_config();
/// let options = SessionOptions {
///     show_splash: false,
///     style: ScreenStyle { color: false, clear: false },
/// };
/// let input = Cursor::new("a\nAlice\n3.6\n15000\nn\n\nx\n");
///
/// let mut session = Session::new(config, options, input, Vec::new());
/// session.run().unwrap();
///
/// assert_eq!(session.store().count(), 1);
/// ```
#[derive(Debug)]
pub struct Session<R, W> {
    id: Uuid,
    config: GrantConfig,
    options: SessionOptions,
    store: ApplicationStore,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty store.
    pub fn new(config: GrantConfig, options: SessionOptions, input: R, output: W) -> Self {
        let store = ApplicationStore::new(config.store.clone());
        Self {
            id: Uuid::new_v4(),
            config,
            options,
            store,
            prompter: Prompter::new(input, output),
        }
    }

    /// Returns the session's correlation ID.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the application store.
    pub fn store(&self) -> &ApplicationStore {
        &self.store
    }

    /// Consumes the session and returns the output writer.
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Runs the menu loop until the user exits or the input ends.
    ///
    /// End of input is treated as an exit command. Only console I/O failures
    /// are returned as errors.
    pub fn run(&mut self) -> GrantResult<()> {
        let span = info_span!("session", session_id = %self.id);
        let _guard = span.enter();
        info!("Session started");

        let result = match self.run_menu() {
            Err(GrantError::InputClosed) => {
                info!("Input closed, ending session");
                screens::write_exit(self.prompter.output()).map_err(GrantError::from)
            }
            other => other,
        };

        info!(applications = self.store.count(), "Session ended");
        result
    }

    fn run_menu(&mut self) -> GrantResult<()> {
        let style = self.options.style;

        if self.options.show_splash {
            screens::write_splash(self.prompter.output(), &self.config.program, style)?;
            self.prompter.read_line()?;
        }

        loop {
            screens::clear_screen(self.prompter.output(), style)?;
            screens::write_menu(self.prompter.output(), style)?;

            let option = self.prompter.ask_until(
                "\nEnter your option: ",
                "Invalid option. Please enter A, B, C, or X.",
                MenuOption::parse,
            )?;
            info!(option = ?option, "Menu option selected");

            match option {
                MenuOption::InputApplications => self.enter_applications()?,
                MenuOption::DisplaySummary => self.display_summary()?,
                MenuOption::DisplayAwardees => self.display_awardees()?,
                MenuOption::Exit => {
                    screens::write_exit(self.prompter.output())?;
                    return Ok(());
                }
            }
        }
    }

    fn enter_applications(&mut self) -> GrantResult<()> {
        let style = self.options.style;
        let limits = self.config.limits.clone();
        let gpa_prompt = format!(
            "Enter Student GPA ({} - {}): ",
            limits.gpa_min, limits.gpa_max
        );
        let gpa_retry = format!(
            "Invalid GPA. Please enter a value between {} and {}.",
            limits.gpa_min, limits.gpa_max
        );
        let shortfall_retry = format!(
            "Invalid shortfall. Please enter a value between {} and {}.",
            screens::format_amount(limits.shortfall_min),
            screens::format_amount(limits.shortfall_max)
        );

        while !self.store.is_full() {
            screens::clear_screen(self.prompter.output(), style)?;
            screens::write_entry_header(self.prompter.output(), self.store.count())?;

            let name = self.prompter.ask_until(
                "Enter Student's Name: ",
                "Student name cannot be empty. Please enter a valid name.",
                validate_name,
            )?;
            let gpa = self
                .prompter
                .ask_until(&gpa_prompt, &gpa_retry, |raw| parse_gpa(raw, &limits))?;
            let shortfall = self.prompter.ask_until(
                "Enter Student Tuition Shortfall ($): ",
                &shortfall_retry,
                |raw| parse_shortfall(raw, &limits),
            )?;

            self.store.add(name, gpa, shortfall)?;

            let another = self.prompter.ask_until(
                "\nDo you want to add another application? [ Y/N ]: ",
                "Please enter Y or N.",
                parse_add_another,
            )?;
            if !another {
                break;
            }
        }

        if self.store.is_full() {
            writeln!(
                self.prompter.output(),
                "Maximum number of students reached. Cannot add more applications."
            )?;
        }

        self.prompter.pause()
    }

    fn display_summary(&mut self) -> GrantResult<()> {
        screens::clear_screen(self.prompter.output(), self.options.style)?;

        let report = build_summary(&mut self.store, &self.config);
        screens::write_summary(self.prompter.output(), &report)?;

        self.prompter.pause()
    }

    fn display_awardees(&mut self) -> GrantResult<()> {
        screens::clear_screen(self.prompter.output(), self.options.style)?;

        let report = build_awardee_report(&mut self.store, &self.config);
        screens::write_awardees(self.prompter.output(), &report)?;

        self.prompter.pause()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::ApplicationStatus;
    use std::io::Cursor;

    fn plain_options() -> SessionOptions {
        SessionOptions {
            show_splash: false,
            style: ScreenStyle {
                color: false,
                clear: false,
            },
        }
    }

    fn run_session(config: GrantConfig, input: &str) -> (ApplicationStore, String) {
        let mut session = Session::new(
            config,
            plain_options(),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        );
        session.run().unwrap();
        let store = session.store().clone();
        let output = String::from_utf8(session.into_output()).unwrap();
        (store, output)
    }

    fn config() -> GrantConfig {
        ConfigLoader::embedded().unwrap().into_config()
    }

    #[test]
    fn test_exit_immediately() {
        let (store, output) = run_session(config(), "X\n");

        assert!(store.is_empty());
        assert!(output.contains("<Exiting Application>"));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let (store, output) = run_session(config(), "a\nAlice\n");

        assert!(store.is_empty());
        assert!(output.ends_with("<Exiting Application>\n"));
    }

    #[test]
    fn test_entry_reprompts_each_invalid_field() {
        let input = "A\n\nAlice\nfour\n4.5\n3.6\n-1\n60000\n15000\nN\n\nX\n";
        let (store, output) = run_session(config(), input);

        assert_eq!(store.count(), 1);
        let record = &store.records()[0];
        assert_eq!(record.student_name, "Alice");
        assert_eq!(record.status, ApplicationStatus::Unset);

        assert_eq!(
            output
                .matches("Student name cannot be empty. Please enter a valid name.")
                .count(),
            1
        );
        assert_eq!(
            output
                .matches("Invalid GPA. Please enter a value between 0.0 and 4.0.")
                .count(),
            2
        );
        assert_eq!(
            output
                .matches("Invalid shortfall. Please enter a value between 0 and 50000.")
                .count(),
            2
        );
    }

    #[test]
    fn test_capacity_message_when_store_fills() {
        let mut config = config();
        config.store.capacity = 2;
        let input = "A\nAlice\n3.6\n15000\nY\nBob\n2.0\n5000\ny\n\nA\n\nX\n";
        let (store, output) = run_session(config, input);

        assert_eq!(store.count(), 2);
        assert_eq!(
            output
                .matches("Maximum number of students reached. Cannot add more applications.")
                .count(),
            2
        );
    }

    #[test]
    fn test_full_store_skips_entry_prompts() {
        let mut config = config();
        config.store.capacity = 1;
        let input = "A\nAlice\n3.6\n15000\nY\n\nA\n\nX\n";
        let (store, output) = run_session(config, input);

        assert_eq!(store.count(), 1);
        assert_eq!(output.matches("Enter Student's Name: ").count(), 1);
        assert_eq!(
            output
                .matches("Maximum number of students reached. Cannot add more applications.")
                .count(),
            2
        );
    }

    #[test]
    fn test_invalid_menu_option_reprompts() {
        let (_, output) = run_session(config(), "Q\n\nx\n");

        assert_eq!(
            output
                .matches("Invalid option. Please enter A, B, C, or X.")
                .count(),
            2
        );
        // The menu is drawn once; invalid options do not redraw it.
        assert_eq!(output.matches("MENU OPTIONS").count(), 1);
    }
}
