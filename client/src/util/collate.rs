//! Locale-aware ordering for user-facing text.
//!
//! Uses the Unicode Collation Algorithm with the CLDR root tailoring, so
//! "Émile" sorts with the E names and case only breaks ties. Equal
//! collation keys fall back to code-point order to keep sorts total.

#[cfg(test)]
#[path = "collate_test.rs"]
mod collate_test;

use std::cell::RefCell;
use std::cmp::Ordering;

use feruca::Collator;

thread_local! {
    static COLLATOR: RefCell<Collator> = RefCell::new(Collator::default());
}

#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| collator.borrow_mut().collate(a, b)).then_with(|| a.cmp(b))
}
