use super::query::{ViewModel, EMPTY_PLACEHOLDER};
use prettytable::{format, row, Cell, Row, Table};

pub struct View {}

impl View {
    /// Builds the task table: one row per task, or a single placeholder row
    /// when nothing matches the current filter.
    pub fn table(view: &ViewModel) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.set_titles(row!["ID", "DONE", "TASK", "PRIORITY", "ADDED"]);
        if view.is_empty() {
            table.add_row(Row::new(vec![Cell::new(EMPTY_PLACEHOLDER).with_hspan(5)]));
            return table;
        }
        for task in &view.rows {
            let done = if task.completed { "[x]" } else { "[ ]" };
            table.add_row(row![
                task.id,
                done,
                task.text,
                task.priority,
                task.date_label
            ]);
        }
        table
    }

    /// Prints the table followed by the counter line.
    pub fn render(view: &ViewModel) {
        Self::table(view).printstd();
        println!("{}  (filter: {}, sort: {})", view.counter, view.filter, view.sort);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::query::derive_view;
    use crate::libs::task::{FilterMode, Priority, SortMode, Task};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_empty_view_has_placeholder_row() {
        let view = derive_view(&[], FilterMode::All, SortMode::DateAdded);
        let rendered = View::table(&view).to_string();
        assert!(rendered.contains(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn test_rows_show_task_fields() {
        let at = Utc.with_ymd_and_hms(2024, 6, 14, 12, 0, 0).unwrap();
        let mut task = Task::new("42".into(), "Water plants", Priority::Low, at).unwrap();
        task.completed = true;
        let view = derive_view(&[task], FilterMode::All, SortMode::DateAdded);
        let rendered = View::table(&view).to_string();
        assert!(rendered.contains("Water plants"));
        assert!(rendered.contains("[x]"));
        assert!(rendered.contains("low"));
        assert!(!rendered.contains(EMPTY_PLACEHOLDER));
    }
}
