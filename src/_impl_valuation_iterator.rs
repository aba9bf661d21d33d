use super::{Valuation, ValuationIterator};

impl ValuationIterator {
    /// Create a new iterator with a specified number of variables.
    pub fn new(num_vars: usize) -> ValuationIterator {
        ValuationIterator(Some(Valuation::all_false(num_vars)))
    }
}

impl Iterator for ValuationIterator {
    type Item = Valuation;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(valuation) = &self.0 {
            let ret = valuation.clone();
            self.0 = valuation.next();
            Some(ret)
        } else {
            None
        }
    }
}
