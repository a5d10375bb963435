//! Interactive command loop.
//!
//! [`Session`] holds the state and handles one line at a time; [`run`] wires
//! it to the terminal through [`InputHandler`].

pub mod input;
pub mod session;

pub use input::{InputEvent, InputHandler, PROMPT};
pub use session::{Reply, Session};

use anyhow::Result;

pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Run the loop until `close`/`exit` or end of input.
///
/// End of input saves the book just like `exit`. Ctrl-C only prints a hint.
pub fn run(mut session: Session, mut input: InputHandler) -> Result<()> {
    println!("{}", WELCOME);

    loop {
        match input.read_line()? {
            InputEvent::Line(line) => match session.handle_line(&line)? {
                Reply::Continue(message) => println!("{}", message),
                Reply::Exit(message) => {
                    println!("{}", message);
                    break;
                }
            },
            InputEvent::Interrupted => println!("Use 'close' or 'exit' to quit."),
            InputEvent::Eof => {
                println!("{}", session.shutdown()?);
                break;
            }
        }
    }

    if let Err(e) = input.save_history() {
        tracing::warn!(error = %e, "Failed to save command history");
    }

    Ok(())
}
