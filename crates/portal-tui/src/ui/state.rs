// Per-view state for the billing page.

use portal_core::billing::BillingSnapshot;
use portal_core::models::{Invoice, PaymentMethod};
use portal_core::pagination::PageCursor;

/// Lifecycle of one billing mount: Loading until the load task reports back,
/// then Ready or Error. Completion of the load is the only way out of
/// Loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Error(String),
}

/// Everything the billing view owns. Rebuilt from scratch on every mount;
/// nothing here survives leaving the module.
#[derive(Debug)]
pub struct BillingState {
    pub phase: LoadPhase,
    pub invoices: Vec<Invoice>,
    pub payment_methods: Vec<PaymentMethod>,
    pub cursor: PageCursor,
    /// Row selection within the visible page.
    pub selected_row: usize,
    /// Mount counter. Load completions tagged with an older generation
    /// belong to a superseded mount and are dropped, so a remount never
    /// observes a stale load.
    generation: u64,
}

impl Default for BillingState {
    fn default() -> Self {
        Self {
            phase: LoadPhase::Loading,
            invoices: Vec::new(),
            payment_methods: Vec::new(),
            cursor: PageCursor::default(),
            selected_row: 0,
            generation: 0,
        }
    }
}

impl BillingState {
    /// Start a fresh mount: wipe data, enter Loading, bump the generation.
    /// Returns the generation tag the load task must report back with.
    pub fn begin_load(&mut self) -> u64 {
        let generation = self.generation + 1;
        *self = Self::default();
        self.generation = generation;
        generation
    }

    /// Discard this mount's data on module exit. The generation counter is
    /// kept, not zeroed: it must stay monotonic across mounts so a load
    /// still in flight from this mount can never collide with a tag handed
    /// out by a later one.
    pub fn reset(&mut self) {
        let generation = self.generation;
        *self = Self::default();
        self.generation = generation;
    }

    pub fn apply_loaded(&mut self, generation: u64, snapshot: BillingSnapshot) {
        if generation != self.generation {
            return;
        }
        self.invoices = snapshot.invoices;
        self.payment_methods = snapshot.payment_methods;
        self.phase = LoadPhase::Ready;
    }

    pub fn apply_failed(&mut self, generation: u64, message: String) {
        if generation != self.generation {
            return;
        }
        self.phase = LoadPhase::Error(message);
    }

    pub fn visible_invoices(&self) -> &[Invoice] {
        self.cursor.slice(&self.invoices)
    }

    pub fn selected_invoice(&self) -> Option<&Invoice> {
        self.visible_invoices().get(self.selected_row)
    }

    pub fn select_next_row(&mut self) {
        let visible = self.visible_invoices().len();
        if self.selected_row + 1 < visible {
            self.selected_row += 1;
        }
    }

    pub fn select_prev_row(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn next_page(&mut self) {
        self.cursor.next_page(self.invoices.len());
        self.clamp_selection();
    }

    pub fn prev_page(&mut self) {
        self.cursor.prev_page();
        self.clamp_selection();
    }

    pub fn cycle_page_size(&mut self) {
        self.cursor.cycle_page_size();
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let visible = self.visible_invoices().len();
        self.selected_row = self.selected_row.min(visible.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use portal_core::models::InvoiceStatus;

    fn snapshot(count: usize) -> BillingSnapshot {
        let now = Utc::now();
        let invoices = (0..count)
            .map(|i| Invoice {
                id: format!("INV-{i:04}"),
                issued_at: now - Duration::days(30 * i as i64),
                amount_cents: 25000,
                status: InvoiceStatus::Paid,
                description: format!("Invoice {i}"),
                document_ref: format!("/billing/invoices/INV-{i:04}/document"),
            })
            .collect();
        BillingSnapshot {
            invoices,
            payment_methods: Vec::new(),
        }
    }

    #[test]
    fn load_lifecycle_reaches_ready() {
        let mut state = BillingState::default();
        let generation = state.begin_load();
        assert_eq!(state.phase, LoadPhase::Loading);

        state.apply_loaded(generation, snapshot(25));
        assert_eq!(state.phase, LoadPhase::Ready);
        assert_eq!(state.invoices.len(), 25);
    }

    #[test]
    fn load_failure_reaches_error_with_message() {
        let mut state = BillingState::default();
        let generation = state.begin_load();
        state.apply_failed(generation, "relay unreachable".to_string());
        assert_eq!(
            state.phase,
            LoadPhase::Error("relay unreachable".to_string())
        );
    }

    #[test]
    fn stale_generation_results_are_dropped() {
        let mut state = BillingState::default();
        let old = state.begin_load();
        let current = state.begin_load();

        state.apply_loaded(old, snapshot(25));
        assert_eq!(state.phase, LoadPhase::Loading);

        state.apply_failed(old, "too late".to_string());
        assert_eq!(state.phase, LoadPhase::Loading);

        state.apply_loaded(current, snapshot(25));
        assert_eq!(state.phase, LoadPhase::Ready);
    }

    #[test]
    fn reset_keeps_the_generation_monotonic() {
        let mut state = BillingState::default();
        let first_mount = state.begin_load();

        // Leave the module while the load is still in flight, then remount.
        state.reset();
        let second_mount = state.begin_load();
        assert!(second_mount > first_mount);

        state.apply_loaded(first_mount, snapshot(25));
        assert_eq!(state.phase, LoadPhase::Loading);

        state.apply_loaded(second_mount, snapshot(25));
        assert_eq!(state.phase, LoadPhase::Ready);
    }

    #[test]
    fn pagination_shows_expected_slices() {
        let mut state = BillingState::default();
        let generation = state.begin_load();
        state.apply_loaded(generation, snapshot(25));

        assert_eq!(state.visible_invoices().len(), 10);
        assert_eq!(state.visible_invoices()[0].id, "INV-0000");

        state.next_page();
        state.next_page();
        let visible = state.visible_invoices();
        assert_eq!(visible.len(), 5);
        assert_eq!(visible[0].id, "INV-0020");
    }

    #[test]
    fn page_size_change_on_a_later_page_resets_to_start() {
        let mut state = BillingState::default();
        let generation = state.begin_load();
        state.apply_loaded(generation, snapshot(25));

        state.next_page();
        state.next_page();
        state.cursor.set_page_size(5);
        let visible = state.visible_invoices();
        assert_eq!(visible.len(), 5);
        assert_eq!(visible[0].id, "INV-0000");
    }

    #[test]
    fn row_selection_is_clamped_to_the_visible_page() {
        let mut state = BillingState::default();
        let generation = state.begin_load();
        state.apply_loaded(generation, snapshot(25));

        for _ in 0..20 {
            state.select_next_row();
        }
        assert_eq!(state.selected_row, 9);

        // Last page has 5 rows; selection must follow.
        state.next_page();
        state.next_page();
        assert_eq!(state.selected_row, 4);
        assert_eq!(state.selected_invoice().unwrap().id, "INV-0024");
    }

    #[test]
    fn remount_discards_previous_data() {
        let mut state = BillingState::default();
        let generation = state.begin_load();
        state.apply_loaded(generation, snapshot(25));

        state.begin_load();
        assert_eq!(state.phase, LoadPhase::Loading);
        assert!(state.invoices.is_empty());
    }
}
