//! Line-oriented comment removal
//!
//! Only the comment delimiters are recognized. String and character
//! literals are not tracked, so a `//` inside `"http://..."` truncates the
//! line just like a real comment does.

const LINE_COMMENT: &str = "//";
const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

/// Scanner state carried from one line to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Normal,
    InBlockComment,
}

/// Remove `//` and `/* */` comments from `content`.
///
/// Trailing whitespace is trimmed from every line, runs of blank lines are
/// collapsed to one and leading blank lines are dropped. Lines are split on
/// `\n` and joined with `\n`. An unterminated block comment swallows the
/// rest of the input.
pub fn strip(content: &str) -> String {
    let mut state = ScanState::Normal;
    let mut output: Vec<String> = Vec::new();

    for line in content.split('\n') {
        let Some(candidate) = strip_line(line, &mut state) else {
            continue;
        };
        emit(&mut output, candidate);
    }

    output.join("\n")
}

/// Strip a single line, updating `state`.
///
/// Returns `None` when the whole line lies inside a block comment.
pub fn strip_line(line: &str, state: &mut ScanState) -> Option<String> {
    let mut rest = line;

    if *state == ScanState::InBlockComment {
        let end = rest.find(BLOCK_CLOSE)?;
        *state = ScanState::Normal;
        rest = rest[end + BLOCK_CLOSE.len()..].trim_start();
    }

    let mut candidate = match rest.find(BLOCK_OPEN) {
        Some(start) => {
            let before = &rest[..start];
            let after = &rest[start + BLOCK_OPEN.len()..];
            match after.find(BLOCK_CLOSE) {
                Some(end) => format!("{before}{}", &after[end + BLOCK_CLOSE.len()..]),
                None => {
                    *state = ScanState::InBlockComment;
                    before.to_string()
                }
            }
        }
        None => rest.to_string(),
    };

    if let Some(start) = candidate.find(LINE_COMMENT) {
        candidate.truncate(start);
    }

    candidate.truncate(candidate.trim_end().len());
    Some(candidate)
}

/// Append `line` unless it would start the output with a blank line or
/// follow another blank line.
fn emit(output: &mut Vec<String>, line: String) {
    let keep = match output.last() {
        _ if !line.is_empty() => true,
        Some(last) => !last.is_empty(),
        None => false,
    };
    if keep {
        output.push(line);
    }
}
