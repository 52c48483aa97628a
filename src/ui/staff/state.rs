//! Staff panel state management

use crate::events::{Event, Payload};
use crate::models::{Table, TableStatus};
use crate::workers::SequenceGuard;

#[derive(Debug, Clone)]
pub struct StaffPanelState {
    pub tables: Vec<Table>,
    /// True until the first successful fetch.
    pub loading: bool,
    /// Table whose status change is in flight.
    pub updating: Option<u64>,
    /// Index of the highlighted row.
    pub selected: usize,
    guard: SequenceGuard,
}

impl Default for StaffPanelState {
    fn default() -> Self {
        Self::new(SequenceGuard::default())
    }
}

impl StaffPanelState {
    pub fn new(guard: SequenceGuard) -> Self {
        Self {
            tables: Vec::new(),
            loading: true,
            updating: None,
            selected: 0,
            guard,
        }
    }

    /// Failed fetches are only logged; the stale table list stays.
    pub fn apply(&mut self, event: &Event) {
        match &event.payload {
            Some(Payload::Tables(tables)) => {
                if self.guard.admit(event.seq) {
                    self.tables = tables.clone();
                    self.loading = false;
                    self.selected = self.selected.min(self.tables.len().saturating_sub(1));
                }
            }
            Some(Payload::UpdateFinished(_)) => self.updating = None,
            _ => {}
        }
    }

    pub fn selected_table(&self) -> Option<&Table> {
        self.tables.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.tables.is_empty() {
            self.selected = (self.selected + 1) % self.tables.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.tables.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.tables.len() - 1);
        }
    }

    /// Marks the selected table as updating and returns what to send, unless
    /// that table already has a change in flight.
    pub fn begin_update(&mut self, status: TableStatus) -> Option<(u64, TableStatus)> {
        let table_id = self.selected_table()?.id;
        if self.updating == Some(table_id) {
            return None;
        }
        self.updating = Some(table_id);
        Some((table_id, status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::View;
    use crate::logging::LogLevel;

    fn tables(count: u64) -> Vec<Table> {
        (1..=count)
            .map(|id| Table {
                id,
                number: format!("T{}", id),
                capacity: 4,
                status: TableStatus::Available,
                occupied_since: None,
            })
            .collect()
    }

    fn loaded(count: u64) -> StaffPanelState {
        let mut state = StaffPanelState::default();
        state.apply(&Event::tables(View::StaffPanel, 1, tables(count)));
        state
    }

    #[test]
    fn test_loading_until_first_fetch() {
        let mut state = StaffPanelState::default();
        assert!(state.loading);
        state.apply(&Event::fetch_failed(
            View::StaffPanel,
            1,
            "Failed to fetch data".to_string(),
            "timeout".to_string(),
            LogLevel::Warn,
        ));
        assert!(state.loading);
        state.apply(&Event::tables(View::StaffPanel, 2, tables(2)));
        assert!(!state.loading);
    }

    #[test]
    fn test_begin_update_marks_row_and_blocks_repeat() {
        let mut state = loaded(3);
        state.select_next();
        assert_eq!(
            state.begin_update(TableStatus::Occupied),
            Some((2, TableStatus::Occupied))
        );
        assert_eq!(state.updating, Some(2));
        assert_eq!(state.begin_update(TableStatus::Reserved), None);

        state.apply(&Event::update_finished(2));
        assert_eq!(state.updating, None);
        assert!(state.begin_update(TableStatus::Reserved).is_some());
    }

    #[test]
    fn test_begin_update_without_tables() {
        let mut state = StaffPanelState::default();
        assert_eq!(state.begin_update(TableStatus::Available), None);
        assert_eq!(state.updating, None);
    }

    #[test]
    fn test_selection_wraps_and_clamps() {
        let mut state = loaded(3);
        state.select_previous();
        assert_eq!(state.selected, 2);
        state.select_next();
        assert_eq!(state.selected, 0);

        state.selected = 2;
        state.apply(&Event::tables(View::StaffPanel, 2, tables(1)));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_refetch_after_update_is_not_overwritten_by_older_poll() {
        let mut state = loaded(1);
        let mut changed = tables(1);
        changed[0].status = TableStatus::Occupied;

        // The write path's re-fetch (seq 3) lands before a slow poll issued earlier (seq 2).
        state.apply(&Event::tables(View::StaffPanel, 3, changed));
        state.apply(&Event::tables(View::StaffPanel, 2, tables(1)));
        assert_eq!(state.tables[0].status, TableStatus::Occupied);
    }
}
