//! Message box text derived from the clear count.

use std::fmt::Write;

use arrayvec::{ArrayString, ArrayVec};

/// One line of the message box. `row` is relative to the box interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageLine {
    pub row: u8,
    pub text: ArrayString<16>,
}

pub type MessageLines = ArrayVec<MessageLine, 5>;

fn line(row: u8, text: &str) -> MessageLine {
    let mut out = ArrayString::new();
    // Every fixed string below fits; a u32 count plus " TIMES" is at most 16 bytes.
    let _ = out.try_push_str(text);
    MessageLine { row, text: out }
}

/// Lines to show for a session that has cleared rows `clear_count` times.
///
/// ```
/// use wastedris_core::message::message_lines;
///
/// assert!(message_lines(0).is_empty());
/// let texts: Vec<_> = message_lines(3).iter().map(|l| l.text.to_string()).collect();
/// assert_eq!(texts, ["YOU WASTED", "YOUR TIME", "3 TIMES"]);
/// ```
pub fn message_lines(clear_count: u32) -> MessageLines {
    let mut lines = MessageLines::new();
    if clear_count == 0 {
        return lines;
    }

    lines.push(line(0, "YOU WASTED"));
    lines.push(line(1, "YOUR TIME"));

    if clear_count == 2 {
        lines.push(line(2, "AGAIN"));
    } else if clear_count > 2 {
        let mut text = ArrayString::<16>::new();
        let _ = write!(text, "{clear_count} TIMES");
        lines.push(MessageLine { row: 2, text });
    }

    if clear_count > 10 {
        lines.push(line(4, "It's time"));
        lines.push(line(5, "to regret"));
    }

    lines
}
