//! Free-text chat loop with a transcript

use std::io::{self, BufRead, Write};

use retailx_api::app::AssistantService;
use retailx_api::render::render_response;

/// One question and its rendered answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub user: String,
    pub assistant: String,
}

#[derive(Debug, Default)]
pub struct Transcript {
    exchanges: Vec<Exchange>,
}

impl Transcript {
    pub fn push(&mut self, user: &str, assistant: &str) {
        self.exchanges.push(Exchange {
            user: user.to_string(),
            assistant: assistant.to_string(),
        });
    }

    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    pub fn render(&self) -> String {
        if self.exchanges.is_empty() {
            return "No messages yet.\n".to_string();
        }
        let mut buf = String::new();
        for exchange in &self.exchanges {
            buf.push_str(&format!("You: {}\n", exchange.user));
            buf.push_str(&format!("Assistant: {}\n", exchange.assistant));
        }
        buf
    }
}

/// Answer lines until `exit`/`quit` or end of input, returning the transcript
pub fn run_chat<R: BufRead, W: Write>(
    assistant: &AssistantService,
    input: &mut R,
    out: &mut W,
) -> io::Result<Transcript> {
    let mut transcript = Transcript::default();
    writeln!(
        out,
        "RetailX Assistant. Ask a question, 'help' for examples, 'history' for the transcript, 'exit' to leave."
    )?;

    loop {
        write!(out, "You: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();

        match message.to_lowercase().as_str() {
            "" => continue,
            "exit" | "quit" => {
                writeln!(out, "Goodbye!")?;
                break;
            }
            "history" => {
                write!(out, "{}", transcript.render())?;
                continue;
            }
            _ => {}
        }

        let reply = render_response(&assistant.answer(message));
        let reply = reply.trim_end();
        writeln!(out, "Assistant: {}", reply)?;
        transcript.push(message, reply);
    }

    Ok(transcript)
}
