use super::slot::ChartSlot;
use std::collections::BTreeMap;

/// Handle to a rendered chart that owns drawing resources until disposed
pub trait DisposableChart {
    fn dispose(self);
}

/// Live chart per slot.
///
/// A slot is either empty or holds exactly one handle. Every replacement
/// disposes the previous handle first, and dropping the registry disposes
/// whatever is still live.
pub struct SlotRegistry<H: DisposableChart> {
    charts: BTreeMap<ChartSlot, H>,
}

impl<H: DisposableChart> Default for SlotRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: DisposableChart> SlotRegistry<H> {
    pub fn new() -> Self {
        Self {
            charts: BTreeMap::new(),
        }
    }

    /// Disposes the slot's chart, leaving the slot empty
    pub fn dispose(&mut self, slot: ChartSlot) -> bool {
        match self.charts.remove(&slot) {
            Some(handle) => {
                handle.dispose();
                true
            }
            None => false,
        }
    }

    /// Disposes every live chart; returns how many were released
    pub fn dispose_all(&mut self) -> usize {
        let charts = std::mem::take(&mut self.charts);
        let released = charts.len();
        for (_, handle) in charts {
            handle.dispose();
        }
        released
    }

    /// Stores a new chart for the slot, disposing the previous one first
    pub fn install(&mut self, slot: ChartSlot, handle: H) {
        self.dispose(slot);
        self.charts.insert(slot, handle);
    }

    /// Disposes the slot's chart, then stores whatever `render` produces.
    ///
    /// The old chart is released even when `render` fails; the slot is then
    /// left empty.
    pub fn rerender<E, F>(&mut self, slot: ChartSlot, render: F) -> Result<(), E>
    where
        F: FnOnce() -> Result<H, E>,
    {
        self.dispose(slot);
        let handle = render()?;
        self.charts.insert(slot, handle);
        Ok(())
    }

    /// Disposes every live chart, then renders `slots` in order.
    ///
    /// Stops at the first failing slot: slots before it hold their new
    /// chart, that slot and every later one stay empty.
    pub fn redraw<I, E, F>(&mut self, slots: I, mut render: F) -> Result<(), E>
    where
        I: IntoIterator<Item = ChartSlot>,
        F: FnMut(ChartSlot) -> Result<H, E>,
    {
        self.dispose_all();
        for slot in slots {
            self.rerender(slot, || render(slot))?;
        }
        Ok(())
    }

    pub fn get(&self, slot: ChartSlot) -> Option<&H> {
        self.charts.get(&slot)
    }

    pub fn is_rendered(&self, slot: ChartSlot) -> bool {
        self.charts.contains_key(&slot)
    }

    pub fn live_count(&self) -> usize {
        self.charts.len()
    }
}

impl<H: DisposableChart> Drop for SlotRegistry<H> {
    fn drop(&mut self) {
        self.dispose_all();
    }
}
