//! Client-side implementation of the Post Office Protocol version 3 as
//! defined in RFC 1939.
//!
//! [`Client`] owns one connection to a POP3 server and exposes one method
//! per protocol command. The connection is any `Read + Write` byte stream;
//! [`Client::dial`] opens a plain TCP one for you.
//!
//! ```no_run
//! use pop3::{Client, PlainAuth};
//!
//! # fn main() -> Result<(), pop3::Error> {
//! let mut client = Client::dial("pop.example.com:110")?;
//! client.login(&PlainAuth::new("alice", "hunter2"))?;
//! let stat = client.stat()?;
//! println!("{} mails, {} octets", stat.mail_count, stat.mailbox_size);
//! client.quit()?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod command;
pub mod error;
pub mod response;

#[cfg(test)]
pub(crate) mod testutil;

pub use crate::auth::{Authenticator, PlainAuth};
pub use crate::client::{Client, MessageInfo, Stat};
pub use crate::command::{Command, Verb};
pub use crate::error::{Error, Result};
