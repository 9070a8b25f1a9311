use anyhow::{anyhow, Result};
use console::Term;
use dialoguer::{
    theme::{SimpleTheme, Theme},
    Input,
};
use std::future::Future;
use std::io::{self, BufRead, Write};

use crate::log;

pub const ADDRESS_PROMPT: &str = "Enter a Solana address (or type 'exit' to quit)";
pub const CONTINUE_PROMPT: &str = "Press Enter to check another address, or type 'exit' to quit";

pub fn is_exit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("exit")
}

/// Line-oriented operator input.
pub trait Prompter {
    /// Reads one line; `None` once the input is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Waits for a key press before moving on.
    fn pause(&mut self) -> Result<()>;

    fn clear(&mut self) -> Result<()>;
}

/// Renders prompts as plain `prompt: ` lines.
pub struct TermPrompter {
    term: Term,
    theme: SimpleTheme,
    clear: bool,
}

impl TermPrompter {
    pub fn new(clear: bool) -> Self {
        Self {
            term: Term::stdout(),
            theme: SimpleTheme,
            clear,
        }
    }
}

impl Prompter for TermPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        if self.term.is_term() {
            let line = Input::<String>::with_theme(&self.theme)
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text_on(&self.term)
                .map_err(|e| anyhow!("Failed to get user input: {}", e))?;
            return Ok(Some(line));
        }

        // Piped input
        let mut rendered = String::new();
        self.theme.format_input_prompt(&mut rendered, prompt, None)?;
        print!("{}", rendered);
        io::stdout().flush()?;
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line.trim_end_matches(['\r', '\n']).to_string())),
        }
    }

    fn pause(&mut self) -> Result<()> {
        if self.term.is_term() {
            self.term.read_key()?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.clear && self.term.is_term() {
            self.term.clear_screen()?;
        }
        Ok(())
    }
}

/// Prompts for addresses and checks each one until the operator types `exit`
/// or the input closes. Errors from a check never end the loop; only failing
/// to read input does.
pub async fn interactive_loop<P, F, Fut>(prompter: &mut P, mut check: F) -> Result<()>
where
    P: Prompter,
    F: FnMut(String) -> Fut,
    Fut: Future<Output = ()>,
{
    loop {
        prompter.clear()?;

        let address = match prompter.read_line(ADDRESS_PROMPT)? {
            Some(line) if !is_exit(&line) => line,
            _ => return Ok(()),
        };

        check(address).await;
        log::print_divider();

        match prompter.read_line(CONTINUE_PROMPT)? {
            Some(line) if !is_exit(&line) => continue,
            _ => return Ok(()),
        }
    }
}
