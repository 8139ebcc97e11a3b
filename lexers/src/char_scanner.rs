#![deny(warnings)]

use crate::scanner::Scanner;

static WHITE: &[char] = &[' ', '\t', '\n', '\r', '\x0b', '\x0c'];
static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];


/*
 * Every scan_* helper is all-or-nothing: on a miss the cursor is left where
 * it was. On a hit the matched text is extracted, so the caller is expected
 * to have called ignore() (or skip_whitespace) before starting a lexeme.
 */
impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    // discard a run of whitespace (possibly empty) plus anything before it
    pub fn skip_whitespace(&mut self) -> bool {
        let skipped = self.skip_all(WHITE);
        self.ignore();
        skipped
    }

    // scan [0-9]+
    pub fn scan_digits(&mut self) -> Option<String> {
        if !self.skip_all(DIGITS) {
            return None;
        }
        Some(self.extract_string())
    }

    // scan a single char out of the 'any' set
    pub fn scan_any_of(&mut self, any: &[char]) -> Option<String> {
        self.accept_any(any)?;
        Some(self.extract_string())
    }

    // scan exactly 'keyword'
    pub fn scan_keyword(&mut self, keyword: &str) -> Option<String> {
        let backtrack = self.mark();
        for c in keyword.chars() {
            if self.accept(&c).is_none() {
                self.restore(backtrack);
                return None;
            }
        }
        Some(self.extract_string())
    }

    // scan \S+
    pub fn scan_non_whitespace(&mut self) -> Option<String> {
        if !self.until_any(WHITE) {
            return None;
        }
        Some(self.extract_string())
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_digits() {
        let tests = vec!["0", "7", "42", "0012", "98765432109876543210"];
        for t in tests.iter() {
            let result = Scanner::new(t.chars()).scan_digits();
            assert_eq!(Some(t.to_string()), result);
        }
        let mut s = Scanner::new("12+3".chars());
        assert_eq!(s.scan_digits(), Some(format!("12")));
        assert_eq!(s.scan_digits(), None);
        assert_eq!(s.peek(), Some('+'));
    }

    #[test]
    fn scan_keywords() {
        let mut s = Scanner::new("sqrsqrt(".chars());
        assert_eq!(s.scan_keyword("sqrt"), None);
        assert_eq!(s.mark(), 0);
        assert_eq!(s.scan_keyword("sqr"), Some(format!("sqr")));
        assert_eq!(s.scan_keyword("sqrt"), Some(format!("sqrt")));
        assert_eq!(s.scan_any_of(&['(', ')']), Some(format!("(")));
        assert_eq!(s.scan_keyword("sqrt"), None);
    }

    #[test]
    fn scan_whitespace_runs() {
        let mut s = Scanner::new(" \t 1 x2+ \n".chars());
        assert!(s.skip_whitespace());
        assert_eq!(s.scan_digits(), Some(format!("1")));
        assert!(s.skip_whitespace());
        assert!(!s.skip_whitespace());
        assert_eq!(s.scan_non_whitespace(), Some(format!("x2+")));
        assert!(s.skip_whitespace());
        assert_eq!(s.scan_non_whitespace(), None);
        assert_eq!(s.next(), None);
    }
}
