//! Side-effect runner
//!
//! Executes the [`Command`]s returned by [`App::update`](crate::app::App::update).
//! Clipboard and file writes finish immediately and report back as a notification.
//! The redirect timer sleeps on its own thread and posts
//! [`Message::RedirectElapsed`] into the channel the main loop drains. Pending
//! timer deadlines are tracked so the loop can wake up when one is due.

use crate::app::{Command, Message, Notification};
use crate::clipboard::ClipboardSink;
use crate::models::save_download;
use flume::{Receiver, Sender};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

/// How long `drain` waits for a timer thread whose deadline has already passed
const TIMER_GRACE: Duration = Duration::from_millis(20);

pub struct Effects<C: ClipboardSink> {
    clipboard: C,
    download_dir: PathBuf,
    sender: Sender<Message>,
    receiver: Receiver<Message>,
    /// Deadlines of redirect timers that have not reported back yet
    timers: Vec<Instant>,
}

impl<C: ClipboardSink> Effects<C> {
    pub fn new(clipboard: C, download_dir: PathBuf) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            clipboard,
            download_dir,
            sender,
            receiver,
            timers: Vec::new(),
        }
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Earliest pending timer deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().min().copied()
    }

    /// Messages posted by background timers since the last call. A timer whose
    /// deadline has passed is waited on briefly so it lands in this batch.
    pub fn drain(&mut self) -> Vec<Message> {
        let mut messages: Vec<Message> = self.receiver.try_iter().collect();
        let overdue = self
            .next_deadline()
            .is_some_and(|due| due <= Instant::now());
        if overdue && !messages.contains(&Message::RedirectElapsed) {
            messages.extend(self.receiver.recv_timeout(TIMER_GRACE).ok());
        }
        for message in &messages {
            self.settle(message);
        }
        messages
    }

    /// Block up to `timeout` for the next background message
    pub fn recv_timeout(&mut self, timeout: Duration) -> Option<Message> {
        let message = self.receiver.recv_timeout(timeout).ok()?;
        self.settle(&message);
        Some(message)
    }

    fn settle(&mut self, message: &Message) {
        if *message == Message::RedirectElapsed {
            if let Some(earliest) = self.next_deadline() {
                self.timers.retain(|due| *due != earliest);
            }
        }
    }

    /// Run `command`; the returned message (if any) should be dispatched next.
    /// `Command::Quit` is left to the caller.
    pub fn run(&mut self, command: Command) -> Option<Message> {
        match command {
            Command::CopyToClipboard { text, success } => {
                match self.clipboard.set_text(&text) {
                    Ok(()) => {
                        tracing::info!(bytes = text.len(), "copied to clipboard");
                        Some(Message::Notify(Notification::success(success)))
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "clipboard write failed");
                        Some(Message::Notify(Notification::error(e.to_string())))
                    }
                }
            }
            Command::Download(snippet) => match save_download(&self.download_dir, &snippet) {
                Ok(path) => {
                    tracing::info!(path = %path.display(), "snippet downloaded");
                    Some(Message::Notify(Notification::success("Snippet downloaded!")))
                }
                Err(e) => {
                    tracing::error!(error = %e, "download failed");
                    Some(Message::Notify(Notification::error(format!("{e:#}"))))
                }
            },
            Command::ScheduleRedirect(delay) => {
                self.timers.push(Instant::now() + delay);
                let sender = self.sender.clone();
                thread::spawn(move || {
                    thread::sleep(delay);
                    let _ = sender.send(Message::RedirectElapsed);
                });
                None
            }
            Command::Quit => None,
        }
    }
}
