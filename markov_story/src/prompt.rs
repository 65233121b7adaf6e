use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{}", message).context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read answer")?;
    if read == 0 {
        bail!("No answer given to prompt '{}'", message.trim());
    }
    Ok(line.trim().to_string())
}

pub fn prompt_filename<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    let answer = prompt_line(input, output, "enter training filename: ")?;
    Ok(PathBuf::from(answer))
}

pub fn prompt_max_words<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<usize> {
    let answer = prompt_line(input, output, "enter maximum number of words: ")?;
    answer
        .parse()
        .with_context(|| format!("'{}' is not a valid number of words", answer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_trimmed_answer() {
        let mut input = Cursor::new("  story.txt \n");
        let mut output = Vec::new();
        let path = prompt_filename(&mut input, &mut output).unwrap();
        assert_eq!(path, PathBuf::from("story.txt"));
        assert_eq!(String::from_utf8(output).unwrap(), "enter training filename: ");
    }

    #[test]
    fn parses_word_count() {
        let mut input = Cursor::new("25\n");
        let mut output = Vec::new();
        assert_eq!(prompt_max_words(&mut input, &mut output).unwrap(), 25);
    }

    #[test]
    fn rejects_non_numeric_word_count() {
        let mut input = Cursor::new("lots\n");
        let mut output = Vec::new();
        assert!(prompt_max_words(&mut input, &mut output).is_err());
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(prompt_filename(&mut input, &mut output).is_err());
    }

    #[test]
    fn answers_are_consumed_in_order() {
        let mut input = Cursor::new("tale.txt\n7\n");
        let mut output = Vec::new();
        assert_eq!(
            prompt_filename(&mut input, &mut output).unwrap(),
            PathBuf::from("tale.txt")
        );
        assert_eq!(prompt_max_words(&mut input, &mut output).unwrap(), 7);
    }
}
