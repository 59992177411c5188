//! The chat loop: read a line, send it through the `ChatClient`, print the
//! reply or the client-side apology.
//!
//! Readline handling is inlined here: the loop owns the `Readline` and its
//! `SharedWriter`, and Ctrl+D, Ctrl+C, and a dead terminal all just end the
//! session. Slash commands handle everything that is not a question:
//! `/stage <n>` picks the section tag, `/suggest` lists the stage's starter
//! questions, `/use <n>` sends one of them.

use std::io::Write;

use console::style;
use rustyline_async::{Readline, ReadlineEvent, SharedWriter};

use stagecoach_core::client::{ChatClient, SendOutcome};
use stagecoach_infra::gateway::HttpGateway;

use super::banner::print_welcome_banner;
use crate::cli::suggestions;

/// Greeting printed before the first prompt; mirrors the widget's opening
/// message.
const GREETING: &str = "Hi! I'm your study coach. Pick a stage with /stage <n> if you like, \
or just tell me what you're working on.";

/// Run the interactive chat loop against a gateway at `url`.
pub async fn run_chat_loop(url: &str, section: Option<String>) -> anyhow::Result<()> {
    let mut client = ChatClient::new(HttpGateway::new(url));
    client.set_section(section);

    print_welcome_banner(url, client.section());

    let (mut rl, mut out) = Readline::new("you> ".to_string())?;
    writeln!(out, "{} {GREETING}", style("coach:").green().bold())?;

    loop {
        let line = match rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => line,
            Ok(ReadlineEvent::Eof) | Ok(ReadlineEvent::Interrupted) | Err(_) => break,
        };
        let line = line.trim();

        if let Some(command) = line.strip_prefix('/') {
            if handle_command(command, &mut client, &mut out).await? {
                break;
            }
            continue;
        }
        ask(line, &mut client, &mut out).await?;
    }

    println!("\nBye!");
    Ok(())
}

/// Send one question and print the outcome.
async fn ask(
    text: &str,
    client: &mut ChatClient<HttpGateway>,
    out: &mut SharedWriter,
) -> anyhow::Result<()> {
    if text.trim().is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", style("coach is thinking...").dim())?;

    match client.send(text).await {
        SendOutcome::Reply(reply) => {
            writeln!(out, "{} {reply}", style("coach:").green().bold())?;
        }
        SendOutcome::Failed(apology) => {
            writeln!(out, "{} {apology}", style("coach:").yellow().bold())?;
        }
        SendOutcome::Busy => {
            writeln!(out, "{}", style("Still waiting on the previous question...").dim())?;
        }
        SendOutcome::RejectedEmpty => {}
    }
    Ok(())
}

/// Handle a slash command. Returns true when the loop should exit.
async fn handle_command(
    command: &str,
    client: &mut ChatClient<HttpGateway>,
    out: &mut SharedWriter,
) -> anyhow::Result<bool> {
    let mut parts = command.split_whitespace();
    match parts.next() {
        Some("quit") | Some("exit") => return Ok(true),

        Some("stage") => match parts.next() {
            Some(n) => {
                let key = if n.starts_with("stage") {
                    n.to_string()
                } else {
                    format!("stage{n}")
                };
                if suggestions::for_stage(&key).is_some() {
                    client.set_section(Some(key.clone()));
                    writeln!(out, "Section set to {key}.")?;
                } else {
                    writeln!(out, "Unknown stage '{n}'. Use 1-8.")?;
                }
            }
            None => {
                client.set_section(None);
                writeln!(out, "Section cleared.")?;
            }
        },

        Some("suggest") => match client.section().and_then(suggestions::for_stage) {
            Some(list) => {
                for (i, question) in list.iter().enumerate() {
                    writeln!(out, "  {}. {question}", i + 1)?;
                }
                writeln!(out, "{}", style("Send one with /use <n>.").dim())?;
            }
            None => writeln!(out, "Pick a stage first with /stage <n>.")?,
        },

        Some("use") => {
            let picked = parts
                .next()
                .and_then(|n| n.parse::<usize>().ok())
                .filter(|n| (1..=3).contains(n))
                .and_then(|n| {
                    client
                        .section()
                        .and_then(suggestions::for_stage)
                        .map(|list| list[n - 1])
                });
            match picked {
                Some(question) => {
                    writeln!(out, "{} {question}", style("you:").bold())?;
                    ask(question, client, out).await?;
                }
                None => writeln!(out, "Usage: /use <1-3> after picking a stage.")?,
            }
        }

        _ => {
            writeln!(out, "Commands: /stage <1-8>, /suggest, /use <n>, /quit")?;
        }
    }
    Ok(false)
}
