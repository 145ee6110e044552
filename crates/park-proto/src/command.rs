//! Zero-copy command parsing.
//!
//! A command line is a verb followed by whitespace-separated arguments,
//! e.g. `park KA-01-HH-1234 White Mobil`. [`CommandRef`] borrows every
//! token from the input line, so parsing allocates only when a command
//! carries more than a handful of arguments.

use smallvec::SmallVec;

use crate::error::CommandParseError;

/// Most commands carry at most three arguments (`park`), so four inline
/// slots keep the common case off the heap.
const INLINE_ARGS: usize = 4;

/// A parsed command borrowing from the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRef<'a> {
    name: &'a str,
    args: SmallVec<[&'a str; INLINE_ARGS]>,
    raw: &'a str,
}

impl<'a> CommandRef<'a> {
    /// Parse one line into a command.
    ///
    /// Trailing `\r\n` is stripped and runs of whitespace collapse, so
    /// `park  KA-01-HH-1234   White Mobil\r\n` parses the same as its
    /// single-spaced form. A line with no tokens at all is an error.
    ///
    /// # Example
    ///
    /// ```
    /// use park_proto::CommandRef;
    ///
    /// let cmd = CommandRef::parse("park KA-01-HH-1234 White Mobil").unwrap();
    /// assert_eq!(cmd.name(), "park");
    /// assert_eq!(cmd.arg(0), Some("KA-01-HH-1234"));
    /// assert_eq!(cmd.arg(2), Some("Mobil"));
    /// assert_eq!(cmd.arg(3), None);
    /// ```
    pub fn parse(line: &'a str) -> Result<Self, CommandParseError> {
        let raw = line.trim_end_matches(['\r', '\n']);
        let mut tokens = raw.split_whitespace();
        let name = tokens.next().ok_or(CommandParseError::EmptyLine)?;
        let args = tokens.collect();
        Ok(Self { name, args, raw })
    }

    /// The command verb, exactly as typed. Dispatch is case-sensitive, so
    /// no normalization happens here.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Argument at `index`, if present.
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).copied()
    }

    /// All arguments in order.
    pub fn args(&self) -> &[&'a str] {
        &self.args
    }

    /// The line as received, minus the trailing newline.
    pub fn raw(&self) -> &'a str {
        self.raw
    }
}
