//! Yes/no style questions on the terminal.

use std::io::{self, BufRead, Write};

use colored::Colorize;

/// Ask `question` and return the lowercased answer.
///
/// `answers` lists the expected replies; the last one is the default and is
/// conventionally upper-cased in the prompt (`y/N`). An empty reply or EOF
/// selects it. Replies outside `answers` are returned as typed (lowercased)
/// so the caller can report them.
pub fn confirm<R: BufRead, W: Write>(
    question: &str,
    answers: &[&str],
    input: &mut R,
    output: &mut W,
) -> io::Result<String> {
    let default = answers
        .last()
        .map(|a| a.to_lowercase())
        .unwrap_or_default();

    write!(output, "{question} {}: ", format!("({})", answers.join("/")).bright_black())?;
    output.flush()?;

    let mut raw = String::new();
    input.read_line(&mut raw)?;
    let reply = raw.trim();
    if reply.is_empty() {
        return Ok(default);
    }
    Ok(reply.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(reply: &str) -> (String, String) {
        let mut input = Cursor::new(reply.as_bytes().to_vec());
        let mut output = Vec::new();
        let answer = confirm("Overwrite?", &["y", "N"], &mut input, &mut output).expect("confirm");
        (answer, String::from_utf8(output).expect("utf-8"))
    }

    #[test]
    fn empty_reply_selects_default() {
        assert_eq!(ask("\n").0, "n");
    }

    #[test]
    fn eof_selects_default() {
        assert_eq!(ask("").0, "n");
    }

    #[test]
    fn reply_is_trimmed_and_lowercased() {
        assert_eq!(ask("  Y \n").0, "y");
    }

    #[test]
    fn unexpected_reply_is_passed_through() {
        assert_eq!(ask("Perhaps\n").0, "perhaps");
    }

    #[test]
    fn prompt_lists_answers() {
        let (_, shown) = ask("y\n");
        assert!(shown.starts_with("Overwrite? "));
        assert!(shown.contains("y/N"));
    }
}
