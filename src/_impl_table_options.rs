use super::{TableOptions, MAX_TABLE_VARIABLES};

impl TableOptions {
    /// Number of variables allowed by `TableOptions::default()` (about a million rows).
    pub const DEFAULT_MAX_VARIABLES: u16 = 20;

    /// Create options with the given variable limit. Limits above `MAX_TABLE_VARIABLES`
    /// are clamped.
    pub fn new(max_variables: u16) -> TableOptions {
        TableOptions {
            max_variables: max_variables.min(MAX_TABLE_VARIABLES),
        }
    }

    /// Copy of these options with a different variable limit.
    pub fn with_max_variables(self, max_variables: u16) -> TableOptions {
        TableOptions::new(max_variables)
    }

    /// The largest number of variables for which a table will be built.
    pub fn max_variables(&self) -> u16 {
        self.max_variables
    }
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions::new(Self::DEFAULT_MAX_VARIABLES)
    }
}

#[cfg(test)]
mod tests {
    use crate::{TableOptions, MAX_TABLE_VARIABLES};

    #[test]
    fn table_options_limits() {
        assert_eq!(20, TableOptions::default().max_variables());
        assert_eq!(
            4,
            TableOptions::default().with_max_variables(4).max_variables()
        );
        assert_eq!(
            MAX_TABLE_VARIABLES,
            TableOptions::new(u16::MAX).max_variables()
        );
    }
}
