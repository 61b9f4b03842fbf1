use std::io::{Read, Write};

use crate::client::Client;
use crate::command::{Command, Verb};
use crate::error::Result;

/// An authentication mechanism for the AUTHORIZATION phase of a session.
///
/// Mechanisms beyond USER/PASS (APOP and friends) plug in by implementing
/// this trait; they issue their commands through [`Client::command`] and
/// never touch the stream directly.
pub trait Authenticator {
    fn authenticate<S: Read + Write>(&self, client: &mut Client<S>) -> Result<()>;
}

/// Plaintext authentication: USER followed by PASS.
pub struct PlainAuth {
    user: String,
    pass: String,
}

impl PlainAuth {
    pub fn new(user: impl Into<String>, pass: impl Into<String>) -> PlainAuth {
        PlainAuth {
            user: user.into(),
            pass: pass.into(),
        }
    }
}

impl Authenticator for PlainAuth {
    /// PASS is only sent once USER has been accepted; the first failure
    /// propagates.
    fn authenticate<S: Read + Write>(&self, client: &mut Client<S>) -> Result<()> {
        client.command(&Command::new(Verb::User).arg(&self.user), false)?;
        client.command(&Command::new(Verb::Pass).arg(&self.pass), false)?;
        Ok(())
    }
}
