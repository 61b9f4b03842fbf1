use std::io::{self, BufRead};

use crate::error::{Error, Result};

/// Appended to every transmitted command and expected on every received line.
pub const CRLF: &str = "\r\n";

const POSITIVE: &str = "+OK";
const NEGATIVE: &str = "-ERR";
const TERMINATOR: &str = ".\r\n";

/// Reads and decodes one server reply.
///
/// The first line is classified by its status marker: "+OK" yields the
/// payload from the 4th byte onward (marker and space skipped), "-ERR"
/// surfaces the explanation from the 5th byte as [`Error::Negative`], and
/// anything else is [`Error::Malformed`] with no further consumption.
///
/// When `multi_line` is set, subsequent lines are appended to the payload
/// until a line that is exactly ".\r\n"; the terminator line is consumed and
/// excluded. Responses are framed by content, not by length, so reading
/// continues until the terminator appears or the stream fails.
pub fn read_response<R: BufRead>(reader: &mut R, multi_line: bool) -> Result<String> {
    let line = read_line(reader)?;

    if line.starts_with(POSITIVE) {
        let mut msg = line.get(4..).unwrap_or_default().to_string();

        if multi_line {
            loop {
                let body_line = read_line(reader)?;
                if body_line == TERMINATOR {
                    break;
                }
                msg.push_str(&body_line);
            }
        }

        Ok(msg)
    } else if line.starts_with(NEGATIVE) {
        Err(Error::Negative(
            line.get(5..).unwrap_or_default().trim_end().to_string(),
        ))
    } else {
        Err(Error::Malformed)
    }
}

fn read_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    let n = reader.read_line(&mut line)?;
    if n == 0 {
        return Err(Error::Transport(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "connection closed by server",
        )));
    }
    Ok(line)
}
