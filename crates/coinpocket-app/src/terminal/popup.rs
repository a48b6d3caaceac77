//! Popups answered on the terminal
//!
//! Requests from `ChannelPopup` are rendered as a numbered menu; the user
//! types a number or a button id. Empty input or end of input dismisses, and
//! so does the request's deadline passing.
//!
//! Stdin is read on its own thread so a prompt can stop waiting without the
//! user pressing Enter.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use coinpocket::host::{PopupOutcome, PopupParams, PopupRequest};
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError};
use log::{debug, warn};

use crate::error::Result;

/// Forward lines from `input` over a channel on a named thread
///
/// The channel disconnects at end of input or on a read error.
pub fn spawn_line_reader<R: BufRead + Send + 'static>(input: R) -> Result<Receiver<String>> {
    let (tx, rx) = unbounded();
    std::thread::Builder::new()
        .name("stdin".into())
        .spawn(move || {
            for line in input.lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Terminal input failed: {e}");
                        break;
                    }
                }
            }
        })?;
    Ok(rx)
}

/// Serves popup requests from the terminal until every requester is gone
pub struct TerminalPopup {
    requests: Receiver<PopupRequest>,
    lines: Receiver<String>,
}

impl TerminalPopup {
    /// Answer popups from stdin
    pub fn new(requests: Receiver<PopupRequest>) -> Result<Self> {
        let lines = spawn_line_reader(io::BufReader::new(io::stdin()))?;
        Ok(Self::with_lines(requests, lines))
    }

    /// Answer popups from an existing line source
    pub fn with_lines(requests: Receiver<PopupRequest>, lines: Receiver<String>) -> Self {
        Self { requests, lines }
    }

    /// Blocking loop, call from the thread that owns the terminal
    pub fn run(self) {
        self.run_with(&mut io::stdout());
    }

    /// Like `run`, rendering to `output`
    pub fn run_with<W: Write>(self, output: &mut W) {
        for request in self.requests.iter() {
            // Anything typed while no prompt was shown belongs to no one
            let stale = self.lines.try_iter().count();
            if stale > 0 {
                debug!("Discarding {stale} line(s) of unprompted input");
            }
            if request.is_expired() {
                debug!("Popup {:?} expired before it was shown", request.params.title);
                continue;
            }

            let deadline = request.deadline();
            let outcome = match prompt(&request.params, &self.lines, output, deadline) {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!("Terminal popup failed: {e}");
                    PopupOutcome::Dismissed
                }
            };
            request.reply(outcome);
        }
    }
}

/// Render `params` to `output` and wait for a choice from `lines`
///
/// Gives up with `Dismissed` once `deadline` passes.
pub fn prompt<W: Write>(
    params: &PopupParams,
    lines: &Receiver<String>,
    output: &mut W,
    deadline: Instant,
) -> io::Result<PopupOutcome> {
    writeln!(output)?;
    writeln!(output, "== {} ==", params.title)?;
    writeln!(output, "{}", params.message)?;
    for (i, button) in params.buttons.iter().enumerate() {
        writeln!(output, "  {}) {}", i + 1, button.label())?;
    }

    loop {
        write!(output, "Choice (empty to dismiss): ")?;
        output.flush()?;

        let line = match lines.recv_deadline(deadline) {
            Ok(line) => line,
            Err(RecvTimeoutError::Timeout) => {
                writeln!(output)?;
                writeln!(output, "No answer in time, prompt dismissed")?;
                return Ok(PopupOutcome::Dismissed);
            }
            Err(RecvTimeoutError::Disconnected) => return Ok(PopupOutcome::Dismissed),
        };
        let choice = line.trim();
        if choice.is_empty() {
            return Ok(PopupOutcome::Dismissed);
        }

        if let Some(button) = pick(params, choice) {
            return Ok(PopupOutcome::Pressed(button.to_string()));
        }
        writeln!(output, "Invalid choice: {choice}")?;
    }
}

fn pick<'a>(params: &'a PopupParams, choice: &str) -> Option<&'a str> {
    if let Ok(n) = choice.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| params.buttons.get(i))
            .map(|b| b.id.as_str());
    }
    params
        .buttons
        .iter()
        .find(|b| b.id.eq_ignore_ascii_case(choice))
        .map(|b| b.id.as_str())
}
