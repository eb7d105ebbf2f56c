//! Interactive console front end.
//!
//! The session is generic over any `BufRead` input and `Write` output, so a
//! terminal, a pipe, or an in-memory buffer can drive it the same way.

mod menu;
mod prompt;
mod screens;
mod session;

pub use menu::{MenuOption, parse_add_another};
pub use prompt::Prompter;
pub use screens::{
    ScreenStyle, clear_screen, format_amount, write_awardees, write_entry_header, write_exit,
    write_menu, write_splash, write_summary,
};
pub use session::{Session, SessionOptions};
