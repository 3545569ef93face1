use std::fmt::{self, Debug, Display, Formatter};

use prettytable::{format, Cell, Row, Table};
use separator::Separatable;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<usize>,
    unique_states: Vec<usize>,
    duplicate_states: Vec<usize>,
    expanded_states: Vec<usize>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    /// Every state the search produced, including the start and all duplicates.
    pub fn total_created(&self) -> usize {
        self.created_states.iter().sum()
    }

    /// Distinct states the search has seen.
    pub fn total_unique(&self) -> usize {
        self.unique_states.iter().sum()
    }

    pub fn total_duplicates(&self) -> usize {
        self.duplicate_states.iter().sum()
    }

    pub fn total_expanded(&self) -> usize {
        self.expanded_states.iter().sum()
    }

    /// Number of depths at which something was created.
    pub fn depths(&self) -> usize {
        self.created_states.len()
    }

    pub(crate) fn add_created(&mut self, depth: usize) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    pub(crate) fn add_unique(&mut self, depth: usize) -> bool {
        Self::add(&mut self.unique_states, depth)
    }

    pub(crate) fn add_duplicate(&mut self, depth: usize) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    pub(crate) fn add_expanded(&mut self, depth: usize) -> bool {
        Self::add(&mut self.expanded_states, depth)
    }

    /// Returns true if this is the first state at `depth`.
    fn add(counts: &mut Vec<usize>, depth: usize) -> bool {
        let mut ret = false;

        // while because duplicates can leave a depth empty in some of the vecs
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }

    fn at(counts: &[usize], depth: usize) -> usize {
        counts.get(depth).cloned().unwrap_or(0)
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table.set_titles(Row::new(vec![
            Cell::new("Depth"),
            Cell::new("Created"),
            Cell::new("Unique"),
            Cell::new("Duplicates"),
            Cell::new("Expanded"),
        ]));
        // created_states is the longest vec - everything else is created first
        for depth in 0..self.created_states.len() {
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&self.created_states[depth].separated_string()),
                Cell::new(&Self::at(&self.unique_states, depth).separated_string()),
                Cell::new(&Self::at(&self.duplicate_states, depth).separated_string()),
                Cell::new(&Self::at(&self.expanded_states, depth).separated_string()),
            ]));
        }
        table
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "unique by depth: {:?}", self.unique_states)?;
        writeln!(f, "duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(f, "total unique: {}", self.total_unique().separated_string())?;
        writeln!(f, "total duplicates: {}", self.total_duplicates().separated_string())?;
        writeln!(f, "total expanded: {}", self.total_expanded().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let unique = self.total_unique();
        let expanded = self.total_expanded();
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique states total: {}", unique.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", self.total_duplicates().separated_string())?;
        writeln!(f, "Unique but not expanded total: {}", (unique - expanded).separated_string())?;
        writeln!(f)?;
        write!(f, "{}", self.table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_by_depth() {
        let mut stats = Stats::new();
        assert!(stats.add_created(0));
        assert!(stats.add_unique(0));
        assert!(stats.add_expanded(0));
        assert!(stats.add_created(1));
        assert!(!stats.add_created(1));
        assert!(stats.add_unique(1));
        assert!(stats.add_duplicate(1));
        // skipping a depth still works
        assert!(stats.add_duplicate(3));

        assert_eq!(stats.total_created(), 3);
        assert_eq!(stats.total_unique(), 2);
        assert_eq!(stats.total_duplicates(), 2);
        assert_eq!(stats.total_expanded(), 1);
        assert_eq!(stats.depths(), 2);
        assert_eq!(Stats::at(&stats.duplicate_states, 2), 0);
        assert_eq!(Stats::at(&stats.duplicate_states, 3), 1);
        assert_eq!(Stats::at(&stats.duplicate_states, 10), 0);
    }

    #[test]
    fn formatting_totals() {
        let mut stats = Stats::new();
        for _ in 0..1500 {
            stats.add_created(0);
            stats.add_unique(0);
        }
        stats.add_expanded(0);

        let debug = format!("{:?}", stats);
        assert!(debug.contains("total created: 1,500\n"));
        assert!(debug.contains("total expanded: 1\n"));

        let display = stats.to_string();
        assert!(display.starts_with("States created total: 1,500\n"));
        assert!(display.contains("Unique but not expanded total: 1,499\n"));
        assert!(display.contains("Depth"));
    }

    #[test]
    fn table_rows_by_depth() {
        let mut stats = Stats::new();
        stats.add_created(0);
        stats.add_unique(0);
        stats.add_expanded(0);
        for _ in 0..2 {
            stats.add_created(1);
        }
        stats.add_unique(1);
        stats.add_duplicate(1);

        let table = stats.table().to_string();
        let rows: Vec<Vec<&str>> = table
            .lines()
            .map(|line| line.split_whitespace().collect())
            .filter(|row: &Vec<&str>| !row.is_empty())
            .collect();
        assert_eq!(rows[0], vec!["Depth", "Created", "Unique", "Duplicates", "Expanded"]);
        assert_eq!(rows[1], vec!["0:", "1", "1", "0", "1"]);
        assert_eq!(rows[2], vec!["1:", "2", "1", "1", "0"]);
        assert_eq!(rows.len(), 3);

        // rendering the whole report goes through the same table
        assert!(stats.to_string().ends_with(&table));
    }
}
