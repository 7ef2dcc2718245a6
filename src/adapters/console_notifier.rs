use std::io::Write;
use std::sync::Mutex;

use crate::core::interfaces::ports::UserNotifier;

pub struct ConsoleNotifier<W: Write + Send> {
    output: Mutex<W>,
}

impl ConsoleNotifier<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::with_output(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleNotifier<W> {
    pub fn with_output(output: W) -> Self {
        Self {
            output: Mutex::new(output),
        }
    }

    fn frame_message(message: &str) -> String {
        let width = message
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let border = "─".repeat(width + 2);

        let mut framed = format!("┌{}┐\n", border);
        for line in message.lines() {
            let padding = " ".repeat(width - line.chars().count());
            framed.push_str(&format!("│ {}{} │\n", line, padding));
        }
        if message.is_empty() {
            framed.push_str("│  │\n");
        }
        framed.push_str(&format!("└{}┘\n", border));
        framed
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> UserNotifier for ConsoleNotifier<W> {
    fn notify(&self, message: &str) {
        let mut output = self
            .output
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Err(error) = output
            .write_all(Self::frame_message(message).as_bytes())
            .and_then(|_| output.flush())
        {
            log::error!("[NOTIFIER] Failed to write notification: {}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_writes_framed_message() {
        let notifier = ConsoleNotifier::with_output(Vec::new());

        notifier.notify("Text extracted: HELLO");

        let written = String::from_utf8(notifier.into_output()).unwrap();
        assert!(written.contains("│ Text extracted: HELLO │"));
        assert!(written.starts_with('┌'));
    }

    #[test]
    fn test_multiline_message_lines_are_padded_to_same_width() {
        let framed = ConsoleNotifier::<Vec<u8>>::frame_message("Text extracted: A\nlonger line");

        let widths: Vec<usize> = framed.lines().map(|line| line.chars().count()).collect();
        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_each_notification_is_written_separately() {
        let notifier = ConsoleNotifier::with_output(Vec::new());

        notifier.notify("Error: no text found");
        notifier.notify("Text extracted: ok");

        let written = String::from_utf8(notifier.into_output()).unwrap();
        assert_eq!(written.matches('┌').count(), 2);
    }
}
