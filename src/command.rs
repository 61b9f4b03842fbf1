use std::fmt;

/// The fixed POP3 command vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    User,
    Pass,
    Noop,
    Rset,
    Dele,
    Quit,
    Stat,
    List,
    Retr,
    Top,
    Uidl,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::User => "USER",
            Verb::Pass => "PASS",
            Verb::Noop => "NOOP",
            Verb::Rset => "RSET",
            Verb::Dele => "DELE",
            Verb::Quit => "QUIT",
            Verb::Stat => "STAT",
            Verb::List => "LIST",
            Verb::Retr => "RETR",
            Verb::Top => "TOP",
            Verb::Uidl => "UIDL",
        }
    }
}

/// One command line: a verb plus zero or more arguments. Constructed and
/// consumed within a single round trip, never persisted.
#[derive(Debug, Clone)]
pub struct Command {
    verb: Verb,
    args: Vec<String>,
}

impl Command {
    pub fn new(verb: Verb) -> Command {
        Command {
            verb,
            args: Vec::new(),
        }
    }

    pub fn arg<T: fmt::Display>(mut self, value: T) -> Command {
        self.args.push(value.to_string());
        self
    }

    pub fn verb(&self) -> Verb {
        self.verb
    }
}

/// Renders the wire line, space-separated, without the trailing CRLF (the
/// channel appends it).
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.verb.as_str())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
