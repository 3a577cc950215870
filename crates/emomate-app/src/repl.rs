//! Interactive chat loop.

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use emomate_ai::session::{self, SendOutcome};
use emomate_ai::{ChatClient, SessionSnapshot, SessionStore, TurnRole};

/// Run the interactive chat session until the user quits.
pub async fn run(client: &dyn ChatClient) -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut store = SessionStore::new();

    println!(
        "{}",
        "EmoMate — your space for emotional clarity".bright_cyan().bold()
    );
    println!(
        "{}",
        "Everything you share stays in this session only.".bright_black()
    );
    println!(
        "{}",
        "Type a message to begin, /new for a fresh session, /quit to leave.\n".bright_black()
    );

    loop {
        match rl.readline("you> ") {
            Ok(line) => {
                let input = line.trim();
                match input {
                    "" => continue,
                    "/quit" | "/exit" | "exit" | "quit" => break,
                    "/new" => start_new_session(&mut store, &mut rl),
                    _ => {
                        let _ = rl.add_history_entry(input);
                        store.set_draft(input);
                        if session::send(&mut store, client).await != SendOutcome::Rejected {
                            render_reply(&store.snapshot());
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "(use /quit to leave)".bright_black());
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    println!("{}", "Take care of yourself.".bright_cyan());
    Ok(())
}

fn start_new_session(store: &mut SessionStore, rl: &mut DefaultEditor) {
    if store.reset_with(|| confirm_clear(rl)) {
        println!("{}", "Started a new session.\n".bright_black());
    } else {
        println!("{}", "Keeping the current conversation.\n".bright_black());
    }
}

/// The yes/no gate for clearing a non-empty session. Anything but an
/// explicit yes (including a readline error) declines.
fn confirm_clear(rl: &mut DefaultEditor) -> bool {
    let prompt =
        "Start a new session? This will clear the current conversation for your privacy. [y/N] ";
    match rl.readline(prompt) {
        Ok(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

/// Render the newest exchange from a session snapshot.
///
/// Turn text may carry lightweight markup (bold, lists); it is printed
/// as-is and left to the terminal.
fn render_reply(snapshot: &SessionSnapshot) {
    if snapshot.busy {
        return;
    }
    if let Some(turn) = snapshot.turns.last() {
        if turn.role == TurnRole::Model {
            println!("\n{} {}\n", "emomate>".bright_magenta().bold(), turn.text);
        }
    }
}
