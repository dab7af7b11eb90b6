use std::{io::BufRead, sync::Arc, thread};

use tokio::sync::{Mutex, mpsc};

/// Lines typed on stdin, read on a dedicated thread.
///
/// Both the session loop and confirmation prompts pull from the same source,
/// whoever asks first gets the next line.
pub struct Input {
    lines: Mutex<mpsc::Receiver<String>>,
}

impl Input {
    pub fn stdin() -> Arc<Self> {
        let (tx, rx) = mpsc::channel(16);
        thread::spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.blocking_send(line).is_err() {
                    break;
                }
            }
        });

        Arc::new(Self {
            lines: Mutex::new(rx),
        })
    }

    /// Next line without its terminator, `None` once stdin is closed.
    pub async fn next_line(&self) -> Option<String> {
        self.lines.lock().await.recv().await
    }
}
