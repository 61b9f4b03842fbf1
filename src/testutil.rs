//! Shared test double: a scripted bidirectional stream.

use std::cell::RefCell;
use std::io::{self, Read, Write};
use std::rc::Rc;

/// A `Read + Write` stream backed by a canned server script. Clones share
/// state, so a test can keep a handle while the client owns the stream.
///
/// Reads feed at most one line per call. A buffered reader on top therefore
/// pulls exactly the lines the parser asks for, which lets tests observe how
/// many bytes were actually consumed.
#[derive(Clone)]
pub struct ScriptedStream {
    inner: Rc<RefCell<Shared>>,
}

struct Shared {
    input: Vec<u8>,
    pos: usize,
    written: Vec<u8>,
    write_calls: usize,
}

impl ScriptedStream {
    pub fn new(script: impl Into<String>) -> ScriptedStream {
        ScriptedStream {
            inner: Rc::new(RefCell::new(Shared {
                input: script.into().into_bytes(),
                pos: 0,
                written: Vec::new(),
                write_calls: 0,
            })),
        }
    }

    /// Everything the client has transmitted so far.
    pub fn written(&self) -> String {
        String::from_utf8(self.inner.borrow().written.clone()).unwrap()
    }

    /// Number of write calls the client has issued.
    pub fn write_count(&self) -> usize {
        self.inner.borrow().write_calls
    }

    /// Number of scripted bytes the client has not read.
    pub fn unread(&self) -> usize {
        let shared = self.inner.borrow();
        shared.input.len() - shared.pos
    }
}

impl Read for ScriptedStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut shared = self.inner.borrow_mut();
        let rest = &shared.input[shared.pos..];
        if rest.is_empty() || buf.is_empty() {
            return Ok(0);
        }
        // One line per call, at most.
        let line_len = match rest.iter().position(|&b| b == b'\n') {
            Some(pos) => pos + 1,
            None => rest.len(),
        };
        let n = line_len.min(buf.len());
        buf[..n].copy_from_slice(&rest[..n]);
        shared.pos += n;
        Ok(n)
    }
}

impl Write for ScriptedStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut shared = self.inner.borrow_mut();
        shared.written.extend_from_slice(buf);
        shared.write_calls += 1;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
