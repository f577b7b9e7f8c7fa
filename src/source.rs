/// Word source - turns input lines into a WordList
use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::core::terminal::PromptContext;
use crate::core::words::WordList;

/// Read lines until the first blank line or end of input.
///
/// Each line is trimmed and split on whitespace runs; the tokens of one line
/// are appended as a single batch.
pub fn read_words<R, W>(mut input: R, prompt: &mut PromptContext<W>) -> io::Result<WordList>
where
    R: BufRead,
    W: Write,
{
    let mut words = WordList::new();
    let mut line = String::new();

    prompt.banner()?;
    loop {
        prompt.prompt()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("input stream closed");
            prompt.line_break()?;
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            debug!("empty line, stopping");
            break;
        }

        let before = words.len();
        words.append(trimmed.split_whitespace());
        debug!(added = words.len() - before, max_length = words.max_length(), "line accepted");
    }
    prompt.finish()?;

    info!(words = words.len(), max_length = words.max_length(), "input collected");
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(input: &str) -> WordList {
        let mut prompt = PromptContext::new(Vec::new(), false);
        read_words(Cursor::new(input), &mut prompt).unwrap()
    }

    #[test]
    fn splits_lines_on_whitespace_runs() {
        let words = read("  moo\tfoobar   baz \nqux\n\n");
        assert_eq!(words.words(), ["moo", "foobar", "baz", "qux"]);
        assert_eq!(words.max_length(), 6);
    }

    #[test]
    fn stops_at_first_blank_line() {
        let words = read("one\n   \ntwo\n");
        assert_eq!(words.words(), ["one"]);
    }

    #[test]
    fn end_of_stream_ends_input() {
        let words = read("alpha beta");
        assert_eq!(words.words(), ["alpha", "beta"]);
    }

    #[test]
    fn empty_input_gives_empty_list() {
        assert!(read("").is_empty());
    }

    #[test]
    fn prompts_once_per_line() {
        let mut prompt = PromptContext::new(Vec::new(), true);
        read_words(Cursor::new("a b\nc\n\n"), &mut prompt).unwrap();
        let out = String::from_utf8(prompt.into_inner()).unwrap();
        assert_eq!(out.matches("$> ").count(), 4);
        assert!(out.ends_with("$> [END OF INPUT]\n"));
    }

    #[test]
    fn closed_stream_breaks_line_before_marker() {
        let mut prompt = PromptContext::new(Vec::new(), true);
        read_words(Cursor::new("a"), &mut prompt).unwrap();
        let out = String::from_utf8(prompt.into_inner()).unwrap();
        assert!(out.contains("$> $> \n"));
    }
}
