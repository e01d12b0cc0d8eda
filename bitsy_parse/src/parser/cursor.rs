use std::str::Lines;

/// Forward-only line reader with a one-line pushback buffer.
///
/// Several decoders must look at one line past their own record to decide
/// whether it still belongs to them (a `>` continuation frame, an optional
/// `NAME` tail). When it does not, the line is pushed back so the dispatcher
/// can route it to the next record. Nothing further back is ever re-read.
pub(super) struct LineCursor<'a> {
    lines: Lines<'a>,
    pushed: Option<&'a str>,
    line_no: usize,
}

impl<'a> LineCursor<'a> {
    pub(super) fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines(),
            pushed: None,
            line_no: 0,
        }
    }

    /// Next line, without its line terminator. `None` at end of input.
    pub(super) fn next_line(&mut self) -> Option<&'a str> {
        let line = match self.pushed.take() {
            Some(line) => Some(line),
            None => self.lines.next().map(|l| l.strip_suffix('\r').unwrap_or(l)),
        };
        if line.is_some() {
            self.line_no += 1;
        }
        line
    }

    /// Return `line` to the stream; the next `next_line` call yields it again.
    ///
    /// Only one line can be buffered at a time, and only the line most
    /// recently returned by [`next_line`](Self::next_line).
    pub(super) fn push_back(&mut self, line: &'a str) {
        debug_assert!(self.pushed.is_none(), "pushback buffer already occupied");
        self.pushed = Some(line);
        self.line_no -= 1;
    }

    /// 1-based number of the line most recently returned by `next_line`.
    pub(super) fn line_no(&self) -> usize {
        self.line_no
    }
}
