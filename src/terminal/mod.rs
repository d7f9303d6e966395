//! Terminal mode and size handling

pub mod util;

pub use util::{get_terminal_size, is_tty, restore_termios, set_raw_mode, write_raw_line};
