//! URScript output data model: command lines, auxiliary builders and
//! structured control-flow blocks.
//!
//! Every builder renders one line of the controller's textual grammar. The
//! exact spelling of each line is load-bearing: the script interpreter on
//! the controller parses the text verbatim, so keyword spacing and numeric
//! precision must not drift.

use std::fmt;

/// A single immutable line of URScript, always newline-terminated.
///
/// Commands are produced by the builders in this crate and either streamed
/// to a controller session or buffered into a program by the caller; they
/// are never mutated after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptCommand(String);

impl ScriptCommand {
    /// Wraps a fully formatted line. Every builder guarantees the newline
    /// terminator, so this stays crate-private.
    pub(crate) fn new(line: String) -> Self {
        Self(line)
    }

    /// The command text, including the trailing newline.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the command, returning the owned text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ScriptCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ScriptCommand {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// URScript boolean literals are capitalized.
fn bool_literal(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Keyword opening a control-flow block.
///
/// Replaces the open integer discriminant of the historical protocol layer
/// (0/1/2); any other kind is unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    /// Opens an `if` block.
    If,
    /// Opens a `while` loop.
    While,
    /// Opens an `elif` arm of an enclosing `if` block.
    Elif,
}

impl BlockKind {
    fn keyword(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::While => "while",
            Self::Elif => "elif",
        }
    }
}

/// Shows a blocking popup dialog on the teach pendant.
///
/// `message` and `title` are inserted verbatim; no quoting or escaping is
/// performed.
pub fn popup(message: &str, title: &str) -> ScriptCommand {
    ScriptCommand::new(format!("popup(\"{message}\",\"{title}\")\n"))
}

/// Writes a two-part text message to the controller log.
pub fn text_message(s1: &str, s2: &str) -> ScriptCommand {
    ScriptCommand::new(format!("textmsg(\"{s1}\",\"{s2}\")\n"))
}

/// Pauses program execution for `seconds`.
pub fn sleep(seconds: f64) -> ScriptCommand {
    ScriptCommand::new(format!("sleep({seconds})\n"))
}

/// Drives digital output `id` high or low.
pub fn set_digital_output(id: u8, level: bool) -> ScriptCommand {
    ScriptCommand::new(format!("set_digital_out({id},{})\n", bool_literal(level)))
}

/// Reads standard digital input `id`.
///
/// Also usable as a block condition; see [`open_block`].
pub fn read_digital_input(id: u8) -> ScriptCommand {
    ScriptCommand::new(format!("get_standard_digital_in({id})\n"))
}

/// Sets standard analog output `channel` to the relative `level` in `[0, 1]`.
pub fn set_analog_output(channel: u8, level: f64) -> ScriptCommand {
    ScriptCommand::new(format!("set_standard_analog_out({channel},{level})\n"))
}

/// Joins two condition fragments into one composite condition with `and`.
///
/// Trailing newlines are stripped from both inputs. The result carries no
/// newline of its own and must be wrapped by [`open_block`] before it can
/// appear in a program.
pub fn combine_conditions(c1: &str, c2: &str) -> String {
    let mut combined = String::from(c1.trim_end_matches('\n'));
    combined.push_str("and ");
    combined.push_str(c2.trim_end_matches('\n'));
    combined
}

/// Opens a control-flow block comparing `condition` against a boolean.
///
/// The condition's trailing newline is stripped, so the output of
/// [`read_digital_input`] or [`combine_conditions`] can be passed directly.
/// Every opened block must be closed with [`end_block`].
pub fn open_block(kind: BlockKind, condition: &str, expected: bool) -> ScriptCommand {
    ScriptCommand::new(format!(
        "{} {} == {}:\n",
        kind.keyword(),
        condition.trim_end_matches('\n'),
        bool_literal(expected),
    ))
}

/// Terminates the innermost open block.
pub fn end_block() -> ScriptCommand {
    ScriptCommand::new(String::from("end\n"))
}
