use std::io::{BufReader, Read, Write};
use std::net::TcpStream;

use tracing::debug;

use crate::auth::Authenticator;
use crate::command::{Command, Verb};
use crate::error::{Error, Result};
use crate::response::{read_response, CRLF};

/// Result of a STAT command: message count and total mailbox size in octets.
/// Messages already marked as deleted are not included by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub mail_count: u64,
    pub mailbox_size: u64,
}

/// Result of a `LIST <n>` command: the message's index and size in octets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageInfo {
    pub index: u64,
    pub size: u64,
}

/// A live POP3 session.
///
/// The client exclusively owns the underlying stream; the protocol is
/// strictly half-duplex request/reply, so a session must not be driven from
/// two call sites at once. Every operation blocks until its full round trip
/// completes or fails. Timeouts are not imposed here; a caller wanting
/// bounded latency sets read/write deadlines on the stream before handing it
/// over.
pub struct Client<S: Read + Write> {
    stream: BufReader<S>,
    server_name: String,
    greeting: String,
}

impl Client<TcpStream> {
    /// Connects to a POP3 server at `addr` ("host:port") and reads the
    /// greeting. The host part becomes the server name.
    pub fn dial(addr: &str) -> Result<Client<TcpStream>> {
        let host = addr.split(':').next().unwrap_or(addr).to_string();
        let conn = TcpStream::connect(addr).map_err(Error::Transport)?;
        Client::new(conn, host)
    }
}

impl<S: Read + Write> Client<S> {
    /// Builds a client over an existing connection and downloads the server
    /// greeting. On failure the stream is dropped, which closes it.
    pub fn new(stream: S, server_name: impl Into<String>) -> Result<Client<S>> {
        let mut stream = BufReader::new(stream);
        let greeting = read_response(&mut stream, false)?;
        Ok(Client {
            stream,
            server_name: server_name.into(),
            greeting: greeting.trim_end().to_string(),
        })
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    /// The banner text the server sent at connect time.
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// Sends one command and decodes one reply. All commands funnel through
    /// here.
    ///
    /// The command line plus CRLF is transmitted as a single write and
    /// flushed before the reply is awaited. On [`Error::Malformed`] the
    /// stream is left in an undefined framing position and the session
    /// should be treated as unusable.
    pub fn command(&mut self, command: &Command, multi_line: bool) -> Result<String> {
        let line = command.to_string();
        debug!(verb = command.verb().as_str(), "sending command");

        let framed = format!("{}{}", line, CRLF);
        let conn = self.stream.get_mut();
        conn.write_all(framed.as_bytes()).map_err(Error::Transport)?;
        conn.flush().map_err(Error::Transport)?;

        read_response(&mut self.stream, multi_line)
    }

    /// Authenticates with the server using the provided mechanism.
    pub fn login<A: Authenticator>(&mut self, auth: &A) -> Result<()> {
        auth.authenticate(self)
    }

    /// Sends NOOP; the server replies with a positive response and nothing
    /// else changes.
    pub fn ping(&mut self) -> Result<String> {
        self.command(&Command::new(Verb::Noop), false)
            .map(trimmed)
    }

    /// Unmarks every message that has been marked as deleted in this session.
    pub fn reset(&mut self) -> Result<String> {
        self.command(&Command::new(Verb::Rset), false)
            .map(trimmed)
    }

    /// Marks a mail as deleted. The server removes marked mails when the
    /// session ends with QUIT.
    pub fn delete(&mut self, index: u32) -> Result<String> {
        check_index(index)?;
        self.command(&Command::new(Verb::Dele).arg(index), false)
            .map(trimmed)
    }

    /// Ends the session. The server enters its UPDATE state and removes all
    /// mails marked as deleted. Consumes the client; the stream is closed on
    /// return whether or not the command succeeded.
    pub fn quit(mut self) -> Result<String> {
        self.command(&Command::new(Verb::Quit), false).map(trimmed)
    }

    /// Retrieves the number of mails in the mailbox and their total size.
    pub fn stat(&mut self) -> Result<Stat> {
        let payload = self.command(&Command::new(Verb::Stat), false)?;
        match integer_fields(&payload).as_slice() {
            [count, size] => Ok(Stat {
                mail_count: *count,
                mailbox_size: *size,
            }),
            _ => Err(Error::Malformed),
        }
    }

    /// Lists every message as raw "index size" lines, with the count header
    /// the server echoes on the first line already dropped.
    pub fn list(&mut self) -> Result<Vec<String>> {
        let payload = self.command(&Command::new(Verb::List), true)?;
        Ok(payload.lines().skip(1).map(str::to_string).collect())
    }

    /// Asks the server for a single message's index and size.
    pub fn list_message(&mut self, index: u32) -> Result<MessageInfo> {
        check_index(index)?;
        let payload = self.command(&Command::new(Verb::List).arg(index), false)?;
        match integer_fields(&payload).as_slice() {
            [index, size] => Ok(MessageInfo {
                index: *index,
                size: *size,
            }),
            _ => Err(Error::Malformed),
        }
    }

    /// Downloads the full text of one message, with the echoed size header
    /// on the first payload line dropped. Line terminators are preserved.
    pub fn retrieve(&mut self, index: u32) -> Result<String> {
        check_index(index)?;
        let payload = self.command(&Command::new(Verb::Retr).arg(index), true)?;
        Ok(drop_header_line(&payload))
    }

    /// Downloads the headers of one message plus `lines` lines of its body.
    pub fn top(&mut self, index: u32, lines: u32) -> Result<String> {
        check_index(index)?;
        let payload = self.command(&Command::new(Verb::Top).arg(index).arg(lines), true)?;
        Ok(drop_header_line(&payload))
    }

    /// Lists the server-assigned unique id of every message as raw
    /// "index uid" lines.
    pub fn uidl(&mut self) -> Result<Vec<String>> {
        let payload = self.command(&Command::new(Verb::Uidl), true)?;
        Ok(payload.lines().skip(1).map(str::to_string).collect())
    }

    /// Asks the server for a single message's unique id line.
    pub fn uidl_message(&mut self, index: u32) -> Result<String> {
        check_index(index)?;
        self.command(&Command::new(Verb::Uidl).arg(index), false)
            .map(trimmed)
    }
}

fn check_index(index: u32) -> Result<()> {
    if index == 0 {
        return Err(Error::InvalidArgument(
            "message index must be greater than zero",
        ));
    }
    Ok(())
}

fn trimmed(payload: String) -> String {
    payload.trim_end().to_string()
}

fn drop_header_line(payload: &str) -> String {
    match payload.find('\n') {
        Some(pos) => payload[pos + 1..].to_string(),
        None => String::new(),
    }
}

/// Pulls every whitespace-delimited token that parses as an integer, in
/// order. Deliberately loose: servers that pad responses with extra
/// whitespace or trailing text still parse.
fn integer_fields(payload: &str) -> Vec<u64> {
    payload
        .split_whitespace()
        .filter_map(|token| token.parse::<u64>().ok())
        .collect()
}
