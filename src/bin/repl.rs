//! Interactive demo client for the in-memory chat backend.
//!
//! Drives one `ChatService` from a REPL, with a listener echoing every
//! stored message live.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin banter
//! ```

use std::sync::Arc;

use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use banter::{
    ChatService, ConversationId, ListenerError, Message, MessageListener,
    logger::setup_logger,
};

#[derive(Parser)]
#[command(
    name = "banter",
    about = "Interactive demo client for the in-memory chat backend"
)]
struct Args {
    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Prints every stored message as it arrives.
struct PrintListener;

impl MessageListener for PrintListener {
    fn on_message(&self, message: &Message) -> Result<(), ListenerError> {
        println!("<< [conversation {}] {}", message.conversation_id, message);
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    let rt = tokio::runtime::Runtime::new()?;
    let service = Arc::new(ChatService::in_memory());

    rt.block_on(seed(&service));
    rt.block_on(service.add_message_listener(Arc::new(PrintListener)));

    println!("banter demo. Type 'help' for commands.");
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;
                if !rt.block_on(dispatch(&service, line)) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                tracing::error!("readline error: {e}");
                break;
            }
        }
    }

    Ok(())
}

/// Pre-populate the backend so the REPL has something to show.
async fn seed(service: &ChatService) {
    let general = service
        .create_conversation(
            "General Chat",
            &[
                "Alice".to_string(),
                "Bob".to_string(),
                "Charlie".to_string(),
            ],
        )
        .await;
    service.create_conversation("Random", &[]).await;

    for (sender, text) in [("Alice", "Hello everyone!"), ("Charlie", "Hi all!")] {
        if let Err(e) = service.send_message(general.id, sender, text, None).await {
            tracing::warn!("failed to seed message: {e}");
        }
    }
}

/// Execute one REPL command. Returns `false` when the loop should stop.
async fn dispatch(service: &ChatService, line: &str) -> bool {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let rest: Vec<&str> = parts.collect();

    match command {
        "help" => print_help(),
        "list" => {
            for conversation in service.all_conversations().await {
                let mut participants: Vec<&str> =
                    conversation.participants.iter().map(String::as_str).collect();
                participants.sort_unstable();
                println!("{} [{}]", conversation, participants.join(", "));
            }
        }
        "new" => match rest.split_first() {
            Some((name, participants)) => {
                let participants: Vec<String> =
                    participants.iter().map(|p| p.to_string()).collect();
                let conversation = service.create_conversation(name, &participants).await;
                println!("created {conversation}");
            }
            None => println!("usage: new <name> [participants...]"),
        },
        "show" => match parse_id(&rest) {
            Some(id) => match service.conversation(id).await {
                Some(conversation) => {
                    println!("{conversation}");
                    for message in service.messages(id).await {
                        println!("  {message}");
                    }
                }
                None => println!("conversation {id} not found"),
            },
            None => println!("usage: show <id>"),
        },
        "join" => match (parse_id(&rest), rest.get(1)) {
            (Some(id), Some(user)) => {
                if service.add_participant(id, user).await {
                    println!("{user} joined conversation {id}");
                } else {
                    println!("conversation {id} not found");
                }
            }
            _ => println!("usage: join <id> <user>"),
        },
        "send" => match (parse_id(&rest), rest.get(1)) {
            (Some(id), Some(user)) if rest.len() > 2 => {
                let text = rest[2..].join(" ");
                if let Err(e) = service.send_message(id, user, &text, None).await {
                    println!("send failed: {e}");
                }
            }
            _ => println!("usage: send <id> <user> <text...>"),
        },
        "dump" => match parse_id(&rest) {
            Some(id) => match service.conversation(id).await {
                Some(conversation) => {
                    let dump = serde_json::json!({
                        "conversation": conversation,
                        "messages": service.messages(id).await,
                    });
                    match serde_json::to_string_pretty(&dump) {
                        Ok(json) => println!("{json}"),
                        Err(e) => tracing::error!("failed to serialize dump: {e}"),
                    }
                }
                None => println!("conversation {id} not found"),
            },
            None => println!("usage: dump <id>"),
        },
        "quit" | "exit" => return false,
        other => println!("unknown command '{other}'; type 'help'"),
    }

    true
}

fn parse_id(rest: &[&str]) -> Option<ConversationId> {
    rest.first()?.parse::<i64>().ok().map(ConversationId::new)
}

fn print_help() {
    println!("commands:");
    println!("  list                      show all conversations");
    println!("  new <name> [users...]     create a conversation");
    println!("  show <id>                 show a conversation and its messages");
    println!("  join <id> <user>          add a participant");
    println!("  send <id> <user> <text>   send a message");
    println!("  dump <id>                 dump a conversation as JSON");
    println!("  quit                      leave");
}
