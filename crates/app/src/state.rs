//! Application state and the operations the screens invoke on it.

use pepstock_analytics::{SalesTotal, sales_by_peptide};
use pepstock_core::{EditSelection, IdAllocator};
use pepstock_customers::{CustomerDirectory, CustomerField, CustomerId, CustomerRejection};
use pepstock_inventory::{StockEntryId, StockIntake, StockLedger, StockRejection};
use pepstock_sales::{
    DraftOrder, LineField, OrderBook, OrderId, OrderItem, OrderRejection, OrderStatus,
};

use crate::views::{OrderSummary, order_summary};

/// Everything the shell owns, behind one value: the three domain components
/// plus the order draft, the per-screen edit selections, and the last stock
/// notice.
///
/// Declined operations return their rejection and change nothing; the shell
/// may surface or ignore them. Dangling references are never chased down
/// here; rows resolve them (or not) at render time.
#[derive(Debug, Clone)]
pub struct AppState {
    stock: StockLedger,
    customers: CustomerDirectory,
    orders: OrderBook,
    draft: DraftOrder,
    stock_edit: EditSelection<StockEntryId>,
    customer_edit: EditSelection<CustomerId>,
    stock_notice: Option<String>,
}

impl AppState {
    /// Empty state; ids are allocated from the wall clock.
    pub fn new() -> Self {
        Self {
            stock: StockLedger::new(),
            customers: CustomerDirectory::new(),
            orders: OrderBook::new(),
            draft: DraftOrder::new(),
            stock_edit: EditSelection::new(),
            customer_edit: EditSelection::new(),
            stock_notice: None,
        }
    }

    /// The demo state the app ships with: two peptides, two customers, two
    /// orders, built through the public operations with small deterministic
    /// ids (1 and 2 per collection, fresh ids continuing from 3).
    pub fn sample() -> Self {
        let mut state = Self {
            stock: StockLedger::with_allocator(IdAllocator::starting_at(1)),
            customers: CustomerDirectory::with_allocator(IdAllocator::starting_at(1)),
            orders: OrderBook::with_allocator(IdAllocator::starting_at(1)),
            draft: DraftOrder::new(),
            stock_edit: EditSelection::new(),
            customer_edit: EditSelection::new(),
            stock_notice: None,
        };

        let peptide_a = state
            .stock
            .add("Peptide A", 100)
            .map(|intake| intake.entry_id())
            .unwrap_or(StockEntryId::UNSET);
        let peptide_b = state
            .stock
            .add("Peptide B", 150)
            .map(|intake| intake.entry_id())
            .unwrap_or(StockEntryId::UNSET);

        let lab_corp = state
            .customers
            .add(
                "Lab Corp",
                "contact@labcorp.com",
                "123-456-7890",
                "123 Lab St, Science City, SC 12345",
            )
            .unwrap_or(CustomerId::UNSET);
        let biotech = state
            .customers
            .add(
                "BioTech Inc",
                "info@biotechinc.com",
                "987-654-3210",
                "456 Bio Ave, Tech Town, TT 67890",
            )
            .unwrap_or(CustomerId::UNSET);

        let _ = state.orders.compose(
            lab_corp,
            &[OrderItem {
                peptide_id: peptide_a,
                quantity: 50,
            }],
        );
        if let Ok(shipped) = state.orders.compose(
            biotech,
            &[OrderItem {
                peptide_id: peptide_b,
                quantity: 75,
            }],
        ) {
            state.orders.set_status(shipped, OrderStatus::Shipped);
        }

        state
    }

    // ---- stock ----

    pub fn stock(&self) -> &StockLedger {
        &self.stock
    }

    /// The last merge notice, if the most recent successful add was a merge.
    pub fn stock_notice(&self) -> Option<&str> {
        self.stock_notice.as_deref()
    }

    pub fn stock_edit(&self) -> &EditSelection<StockEntryId> {
        &self.stock_edit
    }

    /// Add stock from the intake form.
    ///
    /// A merge surfaces its notice; a plain creation clears the previous
    /// one; a decline leaves both the notice and the ledger untouched.
    pub fn add_peptide(
        &mut self,
        name: &str,
        quantity: i64,
    ) -> Result<StockIntake, StockRejection> {
        let outcome = self.stock.add(name, quantity);
        match &outcome {
            Ok(intake) => {
                match intake {
                    StockIntake::Created(id) => {
                        tracing::info!(%id, name, quantity, "stock entry created");
                    }
                    StockIntake::Merged { id, added, .. } => {
                        tracing::info!(%id, added, "stock merged into existing entry");
                    }
                }
                self.stock_notice = intake.notice();
            }
            Err(rejection) => {
                tracing::debug!(%rejection, "stock add declined");
            }
        }
        outcome
    }

    /// The `+` / `-` stepper (any delta). Floors at zero; unknown ids no-op.
    pub fn adjust_stock(&mut self, id: StockEntryId, delta: i64) {
        self.stock.adjust_quantity(id, delta);
    }

    /// Direct numeric edit; negative input clamps to zero.
    pub fn set_stock_quantity(&mut self, id: StockEntryId, quantity: i64) {
        self.stock.set_quantity(id, quantity);
    }

    /// Inline rename while the row is in edit mode.
    pub fn rename_peptide(&mut self, id: StockEntryId, name: &str) {
        self.stock.rename(id, name);
    }

    /// Delete the entry. Order lines referencing it keep their id and render
    /// as Unknown from then on.
    pub fn delete_peptide(&mut self, id: StockEntryId) {
        self.stock.remove(id);
        tracing::info!(%id, "stock entry deleted");
    }

    /// Open one stock row for inline editing (closing any other).
    pub fn edit_peptide(&mut self, id: StockEntryId) {
        self.stock_edit.start(id);
    }

    /// Leave stock edit mode; edits were applied live.
    pub fn save_peptide_edit(&mut self) {
        self.stock_edit.save();
    }

    // ---- customers ----

    pub fn customers(&self) -> &CustomerDirectory {
        &self.customers
    }

    pub fn customer_edit(&self) -> &EditSelection<CustomerId> {
        &self.customer_edit
    }

    pub fn add_customer(
        &mut self,
        name: &str,
        email: &str,
        phone: &str,
        address: &str,
    ) -> Result<CustomerId, CustomerRejection> {
        let outcome = self.customers.add(name, email, phone, address);
        match &outcome {
            Ok(id) => tracing::info!(%id, name, "customer added"),
            Err(rejection) => tracing::debug!(%rejection, "customer add declined"),
        }
        outcome
    }

    pub fn update_customer(&mut self, id: CustomerId, field: CustomerField, value: &str) {
        self.customers.update(id, field, value);
    }

    /// Delete the customer. Orders keep referencing the id; their rows
    /// simply stop resolving a name.
    pub fn delete_customer(&mut self, id: CustomerId) {
        self.customers.remove(id);
        tracing::info!(%id, "customer deleted");
    }

    pub fn edit_customer(&mut self, id: CustomerId) {
        self.customer_edit.start(id);
    }

    pub fn save_customer_edit(&mut self) {
        self.customer_edit.save();
    }

    // ---- orders ----

    pub fn orders(&self) -> &OrderBook {
        &self.orders
    }

    pub fn draft(&self) -> &DraftOrder {
        &self.draft
    }

    /// Pick the draft's customer (or clear it with `CustomerId::UNSET`).
    pub fn select_order_customer(&mut self, id: CustomerId) {
        self.draft.select_customer(id);
    }

    pub fn add_draft_line(&mut self) {
        self.draft.add_line();
    }

    pub fn update_draft_line(&mut self, index: usize, field: LineField, value: i64) {
        self.draft.update_line(index, field, value);
    }

    pub fn remove_draft_line(&mut self, index: usize) {
        self.draft.remove_line(index);
    }

    /// Submit the draft.
    ///
    /// On success the order is committed as Pending and the draft resets to
    /// a single blank line; on decline the draft stays exactly as typed.
    /// Stock is not decremented either way.
    pub fn place_order(&mut self) -> Result<OrderId, OrderRejection> {
        let outcome = self
            .orders
            .compose(self.draft.customer_id(), self.draft.items());
        match &outcome {
            Ok(id) => {
                tracing::info!(%id, customer = %self.draft.customer_id(), "order placed");
                self.draft.reset();
            }
            Err(rejection) => {
                tracing::debug!(%rejection, "order declined");
            }
        }
        outcome
    }

    /// Status dropdown write-through; no transition rules.
    pub fn set_order_status(&mut self, id: OrderId, status: OrderStatus) {
        self.orders.set_status(id, status);
    }

    pub fn delete_order(&mut self, id: OrderId) {
        self.orders.remove(id);
        tracing::info!(%id, "order deleted");
    }

    /// Order rows with customer and peptide names resolved against current
    /// state; dangling references come back `None`.
    pub fn order_summaries(&self) -> Vec<OrderSummary> {
        self.orders
            .orders()
            .iter()
            .map(|order| order_summary(order, &self.customers, &self.stock))
            .collect()
    }

    // ---- analytics ----

    /// Current chart rows, recomputed in full on every call.
    pub fn sales_summary(&self) -> Vec<SalesTotal> {
        sales_by_peptide(&self.orders, &self.stock)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_sets_the_notice_and_creation_clears_it() {
        let mut state = AppState::sample();

        state.add_peptide("peptide a", 40).unwrap();
        assert_eq!(state.stock_notice(), Some("Added 40 to existing Peptide A"));

        state.add_peptide("Peptide C", 10).unwrap();
        assert_eq!(state.stock_notice(), None);
    }

    #[test]
    fn declined_add_keeps_the_previous_notice() {
        let mut state = AppState::sample();
        state.add_peptide("peptide b", 5).unwrap();
        let notice = state.stock_notice().map(str::to_string);
        assert!(notice.is_some());

        let outcome = state.add_peptide("", 5);

        assert!(outcome.is_err());
        assert_eq!(state.stock_notice(), notice.as_deref());
    }

    #[test]
    fn placing_an_order_resets_the_draft() {
        let mut state = AppState::sample();
        let customer = state.customers().customers()[0].id();
        let peptide = state.stock().entries()[0].id();

        state.select_order_customer(customer);
        state.update_draft_line(0, LineField::Peptide, peptide.0.as_u64() as i64);
        state.update_draft_line(0, LineField::Quantity, 10);
        state.place_order().unwrap();

        assert_eq!(state.draft(), &DraftOrder::new());
    }

    #[test]
    fn declined_order_keeps_the_draft_as_typed() {
        let mut state = AppState::sample();
        state.update_draft_line(0, LineField::Quantity, 10);

        let outcome = state.place_order();

        assert_eq!(outcome, Err(OrderRejection::CustomerNotSelected));
        assert_eq!(state.draft().items()[0].quantity, 10);
        assert_eq!(state.orders().len(), 2);
    }

    #[test]
    fn edit_selections_are_independent_per_screen() {
        let mut state = AppState::sample();
        let entry = state.stock().entries()[0].id();
        let customer = state.customers().customers()[1].id();

        state.edit_peptide(entry);
        state.edit_customer(customer);

        assert!(state.stock_edit().is_editing(entry));
        assert!(state.customer_edit().is_editing(customer));

        state.save_peptide_edit();
        assert_eq!(state.stock_edit().editing(), None);
        assert!(state.customer_edit().is_editing(customer));
    }
}
