use crate::core::TimePointIndex;
use crate::core::bar_colorer::PrecomputedBars;
use crate::core::series_data::PlotRow;
use crate::error::{ChartError, ChartResult};

/// Rows of one series ordered by strictly increasing index.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotList<S> {
    rows: Vec<PlotRow<S>>,
}

impl<S> Default for PlotList<S> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<S> PlotList<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from unordered rows.
    ///
    /// Rows are stably sorted by index; when an index repeats, the last row
    /// supplied for it is kept.
    #[must_use]
    pub fn from_rows(mut rows: Vec<PlotRow<S>>) -> Self {
        rows.sort_by(|left, right| left.index.cmp(&right.index));
        let mut canonical: Vec<PlotRow<S>> = Vec::with_capacity(rows.len());
        for row in rows {
            match canonical.last_mut() {
                Some(last) if last.index == row.index => *last = row,
                _ => canonical.push(row),
            }
        }
        Self { rows: canonical }
    }

    #[must_use]
    pub fn rows(&self) -> &[PlotRow<S>] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn first_row(&self) -> Option<&PlotRow<S>> {
        self.rows.first()
    }

    #[must_use]
    pub fn last_row(&self) -> Option<&PlotRow<S>> {
        self.rows.last()
    }

    /// Appends a row whose index is newer than the current last row.
    pub fn append(&mut self, row: PlotRow<S>) -> ChartResult<()> {
        if let Some(last) = self.rows.last()
            && row.index <= last.index
        {
            return Err(ChartError::InvalidData(format!(
                "row index {} must be greater than last index {}",
                row.index, last.index
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Position of the row with `index` in `rows()`.
    #[must_use]
    pub fn position_of(&self, index: TimePointIndex) -> Option<usize> {
        self.rows.binary_search_by_key(&index, |row| row.index).ok()
    }

    #[must_use]
    pub fn value_at(&self, index: TimePointIndex) -> Option<&PlotRow<S>> {
        self.position_of(index).map(|position| &self.rows[position])
    }

    /// Locates the row at `index` together with the row stored before it.
    #[must_use]
    pub fn value_with_previous(&self, index: TimePointIndex) -> Option<PrecomputedBars<'_, S>> {
        let position = self.position_of(index)?;
        let previous = position
            .checked_sub(1)
            .map(|previous_position| &self.rows[previous_position]);
        Some(PrecomputedBars::new(&self.rows[position], previous))
    }
}

#[cfg(test)]
mod tests {
    use super::PlotList;
    use crate::core::series_data::{LineRowStyle, PlotRow, PlotRowValue};

    fn row(index: i64, price: f64) -> PlotRow<LineRowStyle> {
        PlotRow::new(index, PlotRowValue::single(price).expect("finite price"))
    }

    #[test]
    fn from_rows_sorts_and_keeps_last_duplicate() {
        let list = PlotList::from_rows(vec![row(5, 1.0), row(2, 2.0), row(5, 3.0), row(1, 4.0)]);
        let indices: Vec<i64> = list.rows().iter().map(|row| row.index).collect();
        assert_eq!(indices, vec![1, 2, 5]);
        assert_eq!(list.value_at(5).expect("row 5").value.close, 3.0);
    }

    #[test]
    fn append_rejects_stale_or_repeated_index() {
        let mut list = PlotList::from_rows(vec![row(1, 1.0), row(2, 2.0)]);
        assert!(list.append(row(2, 9.0)).is_err());
        assert!(list.append(row(0, 9.0)).is_err());
        list.append(row(4, 3.0)).expect("append newer row");
        assert_eq!(list.len(), 3);
        assert_eq!(list.value_at(2).expect("row 2").value.close, 2.0);
    }

    #[test]
    fn value_with_previous_returns_adjacent_rows() {
        let list = PlotList::from_rows(vec![row(10, 1.0), row(12, 2.0), row(15, 3.0)]);
        let pair = list.value_with_previous(12).expect("pair");
        assert_eq!(pair.value.index, 12);
        assert_eq!(pair.previous_value.map(|row| row.index), Some(10));

        let first = list.value_with_previous(10).expect("first pair");
        assert!(first.previous_value.is_none());
        assert!(list.value_with_previous(11).is_none());
    }
}
