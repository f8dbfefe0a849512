//! Shared numbered-menu loop
//!
//! Handler errors are printed and the loop continues. End of input leaves
//! the loop quietly; only failures writing the menu itself propagate.

use std::io::{BufRead, Write};

use crate::output::is_quiet;
use crate::prompt::Prompter;
use crate::ui;
use crate::{Error, Result};

pub trait Menu {
    const TITLE: &'static str;
    const WELCOME: &'static str;
    const TAGLINE: &'static str;
    const FAREWELL: &'static str;
    /// Labels for choices `1..=OPTIONS.len()`. The last one exits.
    const OPTIONS: &'static [&'static str];

    /// Handle a choice in `1..OPTIONS.len()`.
    fn handle<R: BufRead, W: Write>(&mut self, choice: usize, prompter: &mut Prompter<R, W>) -> Result<()>;
}

pub fn run<M, R, W>(menu: &mut M, prompter: &mut Prompter<R, W>) -> Result<()>
where
    M: Menu,
    R: BufRead,
    W: Write,
{
    if !is_quiet() {
        ui::banner(prompter.out(), M::WELCOME, M::TAGLINE)?;
    }

    let exit = M::OPTIONS.len();
    loop {
        ui::menu(prompter.out(), M::TITLE, M::OPTIONS)?;

        let raw = match prompter.line("Enter choice: ") {
            Ok(raw) => raw,
            Err(Error::InputClosed) => return Ok(()),
            Err(e) => return Err(e),
        };

        match raw.parse::<usize>().ok().filter(|c| (1..=exit).contains(c)) {
            Some(choice) if choice == exit => {
                ui::success(prompter.out(), M::FAREWELL)?;
                return Ok(());
            }
            Some(choice) => match menu.handle(choice, prompter) {
                Ok(()) => {}
                Err(Error::InputClosed) => return Ok(()),
                Err(e) => {
                    tracing::debug!("{} option {} failed: {:?}", M::TITLE, choice, e);
                    ui::error(prompter.out(), &format!("Error: {e}"))?;
                }
            },
            None => ui::error(
                prompter.out(),
                &format!("Invalid choice. Please enter a number between 1 and {exit}."),
            )?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct Counter {
        hits: usize,
    }

    impl Menu for Counter {
        const TITLE: &'static str = "Counter";
        const WELCOME: &'static str = "Welcome";
        const TAGLINE: &'static str = "Counts things";
        const FAREWELL: &'static str = "Bye!";
        const OPTIONS: &'static [&'static str] = &["Hit", "Fail", "Exit"];

        fn handle<R: BufRead, W: Write>(&mut self, choice: usize, _: &mut Prompter<R, W>) -> Result<()> {
            match choice {
                1 => {
                    self.hits += 1;
                    Ok(())
                }
                _ => Err(Error::validation("boom")),
            }
        }
    }

    fn drive(input: &str) -> (Counter, String) {
        let mut menu = Counter { hits: 0 };
        let mut p = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run(&mut menu, &mut p).unwrap();
        (menu, String::from_utf8(p.into_output()).unwrap())
    }

    #[test]
    fn test_dispatch_and_exit() {
        let (menu, out) = drive("1\n1\n3\n1\n");
        assert_eq!(menu.hits, 2);
        assert!(out.contains("Bye!"));
    }

    #[test]
    fn test_errors_do_not_end_loop() {
        let (menu, out) = drive("2\n1\n3\n");
        assert_eq!(menu.hits, 1);
        assert!(out.contains("Error: boom"));
    }

    #[test]
    fn test_invalid_choice() {
        let (_, out) = drive("9\nabc\n3\n");
        assert_eq!(out.matches("Invalid choice. Please enter a number between 1 and 3.").count(), 2);
    }

    #[test]
    fn test_eof_exits_cleanly() {
        let (menu, out) = drive("1\n");
        assert_eq!(menu.hits, 1);
        assert!(!out.contains("Bye!"));
    }
}
