pub mod command;

pub use command::{stylize, LetterCommand};
