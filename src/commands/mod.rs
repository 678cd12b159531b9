//! Command parsing, handling and dispatch.
//!
//! ```text
//! raw line ──► parse_input ──► Command::from_token ──► handler_for
//!                                                         │
//!                              message ◄── dispatch ◄─────┘
//! ```

pub mod dispatcher;
pub mod handlers;
pub mod parser;

pub use dispatcher::{dispatch, Handler};
pub use parser::{parse_input, Command, ParsedInput};

/// The handler for `command`, or `None` for `exit`, which the session
/// loop handles itself.
pub fn handler_for(command: Command) -> Option<Handler> {
    let handler: Handler = match command {
        Command::Hello => handlers::hello,
        Command::Add => handlers::add_contact,
        Command::Change => handlers::change_contact,
        Command::Delete => handlers::delete_contact,
        Command::Find => handlers::find_contact,
        Command::Phone => handlers::show_phone,
        Command::All => handlers::show_all,
        Command::Exit => return None,
    };
    Some(handler)
}
