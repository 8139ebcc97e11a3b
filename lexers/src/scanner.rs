#![deny(warnings)]

/// A cursor over a lazily buffered iterator.
///
/// Everything pulled from `src` stays in `buf`, so the cursor can be moved
/// back to any earlier `mark`. A second anchor (`start`) tracks where the
/// lexeme being built began; `extract` hands out the items between the
/// anchor and the cursor.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    pos: usize,
    start: usize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.prep_buffer(self.pos + 1);
        let item = self.buf.get(self.pos).cloned()?;
        self.pos += 1;
        Some(item)
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), pos: 0, start: 0}
    }

    /// Number of items consumed so far, usable as a backtrack point.
    pub fn mark(&self) -> usize { self.pos }

    /// Move the cursor back to a previous mark. Marks past what has been
    /// buffered, or before the lexeme anchor, are refused.
    pub fn restore(&mut self, mark: usize) -> bool {
        if mark < self.start || mark > self.buf.len() {
            return false;
        }
        self.pos = mark;
        true
    }

    // pull from the source until `n` items are buffered (or it runs dry)
    fn prep_buffer(&mut self, n: usize) {
        while self.buf.len() < n {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => break,
            }
        }
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        self.prep_buffer(self.pos + 1);
        self.buf.get(self.pos).cloned()
    }

    /// Advance only if the next item satisfies `pred`.
    pub fn accept_if<F>(&mut self, pred: F) -> Option<I::Item>
        where F: FnOnce(&I::Item) -> bool
    {
        let next = self.peek()?;
        if !pred(&next) {
            return None;
        }
        self.pos += 1;
        Some(next)
    }

    /// Items between the lexeme anchor and the cursor.
    pub fn view(&self) -> &[I::Item] {
        &self.buf[self.start..self.pos]
    }

    /// Drop what has been scanned since the anchor.
    pub fn ignore(&mut self) {
        self.start = self.pos;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let items = self.view().to_vec();
        self.ignore();
        items
    }
}


impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    pub fn accept(&mut self, what: &I::Item) -> Option<I::Item> {
        self.accept_if(|next| next == what)
    }

    // Advance the scanner only if the next item is in the 'any' set
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        self.accept_if(|next| any.contains(next))
    }

    // Skip over the 'over' set, result is if the scanner was advanced
    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() { advanced = true; }
        advanced
    }

    // Advance until an element in the 'any' set or EOF is next,
    // return if the scanner advanced
    pub fn until_any(&mut self, any: &[I::Item]) -> bool {
        let mut advanced = false;
        while self.accept_if(|next| !any.contains(next)).is_some() {
            advanced = true;
        }
        advanced
    }
}
