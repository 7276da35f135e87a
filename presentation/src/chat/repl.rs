//! REPL (Read-Eval-Print Loop) for the chat widget

use crate::ConsoleFormatter;
use crate::progress::WaitingIndicator;
use portfolio_application::ChatWidgetController;
use portfolio_domain::ChatState;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// What a slash command asks the loop to do
#[derive(Debug, PartialEq, Eq)]
enum CommandOutcome {
    Continue,
    Quit,
}

/// Interactive chat REPL
pub struct ChatRepl {
    controller: ChatWidgetController,
    server: String,
    show_progress: bool,
}

impl ChatRepl {
    pub fn new(controller: ChatWidgetController, server: impl Into<String>) -> Self {
        Self {
            controller,
            server: server.into(),
            show_progress: true,
        }
    }

    /// Set whether to show the waiting spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("portfolio").join("chat_history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.controller.open();
        self.print_welcome();

        loop {
            let prompt = match self.controller.state() {
                ChatState::Closed => "(closed) >>> ",
                _ => ">>> ",
            };

            match rl.readline(prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line) == CommandOutcome::Quit {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);
                    self.send(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            Portfolio - Chat Widget          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Server: {}", self.server);
        println!();
        Self::print_help();

        for message in self.controller.transcript().iter() {
            println!("{}", ConsoleFormatter::format_message(message));
        }
        println!();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /history          - Show the conversation so far");
        println!("  /close            - Close the chat widget");
        println!("  /open             - Reopen the chat widget");
        println!("  /quit, /exit, /q  - Exit chat");
        println!();
    }

    fn handle_command(&mut self, cmd: &str) -> CommandOutcome {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                CommandOutcome::Quit
            }
            "/help" | "/h" | "/?" => {
                println!();
                Self::print_help();
                CommandOutcome::Continue
            }
            "/history" => {
                println!();
                for message in self.controller.transcript().iter() {
                    println!("{}", ConsoleFormatter::format_message(message));
                }
                println!();
                CommandOutcome::Continue
            }
            "/close" => {
                self.controller.close();
                println!("Chat closed. Type /open to continue.");
                CommandOutcome::Continue
            }
            "/open" => {
                self.controller.open();
                println!("Chat open.");
                CommandOutcome::Continue
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                CommandOutcome::Continue
            }
        }
    }

    async fn send(&mut self, line: &str) {
        if self.controller.state() == ChatState::Closed {
            println!("Chat is closed. Type /open to continue.");
            return;
        }

        let indicator = WaitingIndicator::start("Thinking...", self.show_progress);
        let reply = self.controller.submit(line).await.cloned();
        indicator.finish();

        if let Some(message) = reply {
            println!("{}", ConsoleFormatter::format_message(&message));
        }
        println!();
    }
}
