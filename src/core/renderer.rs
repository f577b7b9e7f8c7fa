/// Box renderers for word lists - pure functions, no terminal state
use tracing::trace;

use crate::core::layout::Layout;
use crate::core::words::{word_len, WordList};

/// Render `words` in the given layout. `width` only applies to [`Layout::Row`].
pub fn render(words: &WordList, layout: Layout, width: Option<usize>) -> String {
    let out = match layout {
        Layout::Row => render_row(words, width),
        Layout::Page => render_page(words),
        Layout::Table => render_table(words),
    };
    trace!(%layout, words = words.len(), bytes = out.len(), "rendered word list");
    out
}

/// One horizontal row of cells.
///
/// `width` is the minimum field width of every cell and defaults to the
/// longest word. Longer words widen their own cell, nothing is truncated.
/// Words are centered in their field; when the slack is odd the extra space
/// goes to the right.
pub fn render_row(words: &WordList, width: Option<usize>) -> String {
    let width = width.unwrap_or_else(|| words.max_length());

    let mut border = String::from("+");
    let mut content = String::from("|");

    for word in words {
        let len = word_len(word);
        let field = width.max(len);

        push_repeated(&mut border, '-', field + 2);
        border.push('+');

        let slack = field - len;
        let left = slack / 2;
        content.push(' ');
        push_repeated(&mut content, ' ', left);
        content.push_str(word);
        push_repeated(&mut content, ' ', slack - left);
        content.push_str(" |");
    }
    border.push('\n');
    content.push('\n');

    let mut out = String::with_capacity(border.len() * 2 + content.len());
    out.push_str(&border);
    out.push_str(&content);
    out.push_str(&border);
    out
}

/// A vertical page of left-aligned cells sharing one frame.
pub fn render_page(words: &WordList) -> String {
    let border = column_border(words.max_length());
    let mut out = border.clone();
    if words.is_empty() {
        return out;
    }
    for word in words {
        push_column_line(&mut out, word, words.max_length());
    }
    out.push_str(&border);
    out
}

/// Like [`render_page`], with a border after every cell.
pub fn render_table(words: &WordList) -> String {
    let border = column_border(words.max_length());
    let mut out = border.clone();
    for word in words {
        push_column_line(&mut out, word, words.max_length());
        out.push_str(&border);
    }
    out
}

fn column_border(max_length: usize) -> String {
    let mut line = String::with_capacity(max_length + 5);
    line.push('+');
    push_repeated(&mut line, '-', max_length + 2);
    line.push_str("+\n");
    line
}

fn push_column_line(out: &mut String, word: &str, max_length: usize) {
    out.push_str("| ");
    out.push_str(word);
    push_repeated(out, ' ', max_length.saturating_sub(word_len(word)));
    out.push_str(" |\n");
}

fn push_repeated(out: &mut String, ch: char, count: usize) {
    out.extend(std::iter::repeat(ch).take(count));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(words: &[&str]) -> WordList {
        words.iter().copied().collect()
    }

    #[test]
    fn row_defaults_width_to_longest_word() {
        let out = render_row(&list(&["moo", "foobar", "baz"]), None);
        assert_eq!(
            out,
            "+--------+--------+--------+\n\
             |  moo   | foobar |  baz   |\n\
             +--------+--------+--------+\n"
        );
    }

    #[test]
    fn row_with_zero_width_fits_each_word() {
        let out = render_row(&list(&["moo", "foobar", "baz"]), Some(0));
        assert_eq!(
            out,
            "+-----+--------+-----+\n\
             | moo | foobar | baz |\n\
             +-----+--------+-----+\n"
        );
    }

    #[test]
    fn row_puts_odd_slack_on_the_right() {
        let out = render_row(&list(&["a", "bb"]), Some(4));
        assert_eq!(
            out,
            "+------+------+\n\
             |  a   |  bb  |\n\
             +------+------+\n"
        );
    }

    #[test]
    fn row_width_never_truncates() {
        let out = render_row(&list(&["lengthy", "x"]), Some(3));
        assert_eq!(
            out,
            "+---------+-----+\n\
             | lengthy |  x  |\n\
             +---------+-----+\n"
        );
    }

    #[test]
    fn row_of_empty_list_degenerates() {
        assert_eq!(render_row(&WordList::new(), None), "+\n|\n+\n");
        assert_eq!(render_row(&WordList::new(), Some(5)), "+\n|\n+\n");
    }

    #[test]
    fn row_handles_empty_word() {
        let out = render_row(&list(&["", "ab"]), None);
        assert_eq!(out, "+----+----+\n|    | ab |\n+----+----+\n");
    }

    #[test]
    fn page_frames_all_words_once() {
        let out = render_page(&list(&["moo", "foobar", "baz"]));
        assert_eq!(
            out,
            "+--------+\n\
             | moo    |\n\
             | foobar |\n\
             | baz    |\n\
             +--------+\n"
        );
    }

    #[test]
    fn table_separates_every_word() {
        let out = render_table(&list(&["moo", "foobar", "baz"]));
        assert_eq!(
            out,
            "+--------+\n\
             | moo    |\n\
             +--------+\n\
             | foobar |\n\
             +--------+\n\
             | baz    |\n\
             +--------+\n"
        );
    }

    #[test]
    fn empty_columns_render_a_single_border() {
        assert_eq!(render_page(&WordList::new()), "+--+\n");
        assert_eq!(render_table(&WordList::new()), "+--+\n");
    }

    #[test]
    fn multibyte_words_pad_by_chars() {
        let out = render_page(&list(&["héllo", "日本"]));
        assert_eq!(out, "+-------+\n| héllo |\n| 日本    |\n+-------+\n");
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        let words = list(&["one", "three"]);
        assert_eq!(render(&words, Layout::Row, Some(7)), render_row(&words, Some(7)));
        assert_eq!(render(&words, Layout::Page, Some(7)), render_page(&words));
        assert_eq!(render(&words, Layout::Table, None), render_table(&words));
        assert_eq!(words.render(Layout::Row), render_row(&words, None));
    }
}
