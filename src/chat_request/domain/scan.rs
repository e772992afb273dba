//! Lexical token scanners for the chat request parser.
//!
//! Each scanner is anchored at a leader character and bounded: it walks
//! forward over a fixed character set and checks the terminating boundary
//! explicitly. There is no backtracking; the variable scanner's optional
//! argument is expressed as two explicit alternatives tried in order.

/// Leader character introducing an agent mention.
pub(crate) const AGENT_LEADER: char = '!';
/// Leader character introducing a variable or dynamic reference.
pub(crate) const VARIABLE_LEADER: char = '#';
/// Leader character introducing a slash command.
pub(crate) const COMMAND_LEADER: char = '/';

/// Extent of a scanned token, leader included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TokenSpan {
    /// Bytes covered by the token.
    pub byte_len: usize,
    /// Characters covered by the token.
    pub char_count: u32,
}

/// Captures of a scanned agent mention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AgentToken {
    pub name: String,
    pub span: TokenSpan,
}

/// Captures of a scanned variable reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VariableToken {
    pub name: String,
    pub argument: Option<u64>,
    pub span: TokenSpan,
}

/// Captures of a scanned dynamic-reference candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReferenceToken {
    pub name: String,
    pub argument: String,
    pub span: TokenSpan,
}

/// Captures of a scanned slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CommandToken {
    pub name: String,
    pub span: TokenSpan,
}

/// Returns `true` for the characters that can open a non-text segment.
pub(crate) const fn is_leader(character: char) -> bool {
    matches!(character, AGENT_LEADER | VARIABLE_LEADER | COMMAND_LEADER)
}

/// Returns `true` when a leader at this point sits at a word boundary:
/// the start of the message or just after whitespace.
pub(crate) fn leader_eligible(previous: Option<char>) -> bool {
    previous.is_none_or(char::is_whitespace)
}

/// Scans `!name` at the head of `rest`.
pub(crate) fn agent_token(rest: &str) -> Option<AgentToken> {
    let mut cursor = TokenCursor::new(rest);
    cursor.take_if(|character| character == AGENT_LEADER)?;
    let name = cursor.take_run(is_name_char)?;
    if !cursor.at_boundary() {
        return None;
    }
    Some(AgentToken {
        name,
        span: cursor.span(),
    })
}

/// Scans `/name` at the head of `rest`, anchored at the current offset.
pub(crate) fn command_token(rest: &str) -> Option<CommandToken> {
    let mut cursor = TokenCursor::new(rest);
    cursor.take_if(|character| character == COMMAND_LEADER)?;
    let name = cursor.take_run(is_name_char)?;
    if !cursor.at_boundary() {
        return None;
    }
    Some(CommandToken {
        name,
        span: cursor.span(),
    })
}

/// Scans `#name:digits` or `#name` at the head of `rest`.
///
/// The with-argument alternative is tried first; when its boundary check
/// fails, or the digits do not fit `u64`, the bare form is tried instead.
pub(crate) fn variable_token(rest: &str) -> Option<VariableToken> {
    variable_with_argument(rest).or_else(|| variable_bare(rest))
}

/// Scans `#name:argument` at the head of `rest`. Arguments permit dots so
/// file-like tokens such as `foo.ts` scan whole.
pub(crate) fn reference_token(rest: &str) -> Option<ReferenceToken> {
    let mut cursor = TokenCursor::new(rest);
    cursor.take_if(|character| character == VARIABLE_LEADER)?;
    let name = cursor.take_run(is_name_char)?;
    cursor.take_if(|character| character == ':')?;
    let argument = cursor.take_run(is_argument_char)?;
    if !cursor.at_boundary() {
        return None;
    }
    Some(ReferenceToken {
        name,
        argument,
        span: cursor.span(),
    })
}

fn variable_with_argument(rest: &str) -> Option<VariableToken> {
    let mut cursor = TokenCursor::new(rest);
    cursor.take_if(|character| character == VARIABLE_LEADER)?;
    let name = cursor.take_run(is_name_char)?;
    cursor.take_if(|character| character == ':')?;
    let digits = cursor.take_run(|character| character.is_ascii_digit())?;
    if !cursor.at_boundary() {
        return None;
    }
    let argument = digits.parse::<u64>().ok()?;
    Some(VariableToken {
        name,
        argument: Some(argument),
        span: cursor.span(),
    })
}

fn variable_bare(rest: &str) -> Option<VariableToken> {
    let mut cursor = TokenCursor::new(rest);
    cursor.take_if(|character| character == VARIABLE_LEADER)?;
    let name = cursor.take_run(is_name_char)?;
    if !cursor.at_boundary() {
        return None;
    }
    Some(VariableToken {
        name,
        argument: None,
        span: cursor.span(),
    })
}

/// Forward cursor over the head of the remaining message.
struct TokenCursor<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    byte_len: usize,
    char_count: u32,
}

impl<'a> TokenCursor<'a> {
    fn new(rest: &'a str) -> Self {
        Self {
            chars: rest.chars().peekable(),
            byte_len: 0,
            char_count: 0,
        }
    }

    /// Consumes the next character when `accept` returns true for it.
    fn take_if(&mut self, accept: impl Fn(char) -> bool) -> Option<char> {
        let candidate = *self.chars.peek()?;
        if !accept(candidate) {
            return None;
        }
        self.chars.next();
        self.byte_len = self.byte_len.saturating_add(candidate.len_utf8());
        self.char_count = self.char_count.saturating_add(1);
        Some(candidate)
    }

    /// Consumes a maximal non-empty run of accepted characters.
    fn take_run(&mut self, accept: impl Fn(char) -> bool + Copy) -> Option<String> {
        let mut run = String::new();
        while let Some(character) = self.take_if(accept) {
            run.push(character);
        }
        if run.is_empty() { None } else { Some(run) }
    }

    /// Returns `true` when the next character terminates a token: end of
    /// input, whitespace, or any other non-word character.
    fn at_boundary(&mut self) -> bool {
        self.chars.peek().is_none_or(|next| !is_word_char(*next))
    }

    const fn span(&self) -> TokenSpan {
        TokenSpan {
            byte_len: self.byte_len,
            char_count: self.char_count,
        }
    }
}

/// Word characters for boundary checks.
const fn is_word_char(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '_'
}

/// Characters permitted in agent, variable, and command names.
const fn is_name_char(character: char) -> bool {
    character.is_ascii_alphanumeric() || matches!(character, '-' | '_')
}

/// Characters permitted in dynamic-reference arguments.
const fn is_argument_char(character: char) -> bool {
    is_name_char(character) || character == '.'
}
