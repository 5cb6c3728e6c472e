//! Colored rendering of unified-diff lines.

use colored::{ColoredString, Colorize};

/// Classification of a unified-diff line by its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffTone {
    FileRemoved,
    FileAdded,
    Hunk,
    Deletion,
    Addition,
    Context,
}

/// Classify a line. File headers are matched before bare deletions and
/// additions, so `---`/`+++` never fall through to `-`/`+`.
pub fn classify(line: &str) -> DiffTone {
    if line.starts_with("---") {
        DiffTone::FileRemoved
    } else if line.starts_with("+++") {
        DiffTone::FileAdded
    } else if line.starts_with("@@") {
        DiffTone::Hunk
    } else if line.starts_with('-') {
        DiffTone::Deletion
    } else if line.starts_with('+') {
        DiffTone::Addition
    } else {
        DiffTone::Context
    }
}

fn paint(line: &str) -> ColoredString {
    match classify(line) {
        DiffTone::FileRemoved => line.bright_magenta(),
        DiffTone::FileAdded => line.bright_cyan(),
        DiffTone::Hunk => line.bright_yellow(),
        DiffTone::Deletion => line.bright_red(),
        DiffTone::Addition => line.bright_green(),
        DiffTone::Context => line.bright_black(),
    }
}

/// Render a diff to the terminal, one forward pass, top to bottom.
pub fn render_diff<'a, I>(lines: I)
where
    I: IntoIterator<Item = &'a str>,
{
    for line in lines {
        println!("{}", paint(line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_headers_win_over_bare_markers() {
        assert_eq!(classify("--- base"), DiffTone::FileRemoved);
        assert_eq!(classify("+++ repo"), DiffTone::FileAdded);
        assert_eq!(classify("-removed line"), DiffTone::Deletion);
        assert_eq!(classify("+added line"), DiffTone::Addition);
    }

    #[test]
    fn hunk_and_context() {
        assert_eq!(classify("@@ -1,3 +1,3 @@"), DiffTone::Hunk);
        assert_eq!(classify(" unchanged"), DiffTone::Context);
        assert_eq!(classify(""), DiffTone::Context);
    }
}
