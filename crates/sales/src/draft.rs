use pepstock_core::EntityId;
use pepstock_customers::CustomerId;
use pepstock_inventory::StockEntryId;

use crate::order::OrderItem;

/// Which field of a draft line an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineField {
    /// The peptide picker; the value is a raw entry id, and anything
    /// non-positive clears the selection back to unset.
    Peptide,
    /// The quantity input; the value is stored exactly as typed.
    Quantity,
}

/// An order under construction, held by the caller until submitted.
///
/// Starts as a single blank line and returns to that shape on [`reset`].
/// Nothing here touches the committed book, and nothing is validated while
/// typing; `OrderBook::compose` judges the draft only at submission.
///
/// [`reset`]: DraftOrder::reset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftOrder {
    customer_id: CustomerId,
    items: Vec<OrderItem>,
}

impl DraftOrder {
    pub fn new() -> Self {
        Self {
            customer_id: CustomerId::UNSET,
            items: vec![OrderItem::blank()],
        }
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Pick the customer, or clear the pick with [`CustomerId::UNSET`].
    pub fn select_customer(&mut self, id: CustomerId) {
        self.customer_id = id;
    }

    /// Append a blank line for the builder to fill in.
    pub fn add_line(&mut self) {
        self.items.push(OrderItem::blank());
    }

    /// Drop the line at `index`; out-of-range indices are a no-op. The draft
    /// may end up with no lines at all, in which case submission declines.
    pub fn remove_line(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Write one field of one line from a raw form value. Quantities are
    /// stored unclamped; only the first line is ever checked, and only at
    /// composition time. Out-of-range indices are a no-op.
    pub fn update_line(&mut self, index: usize, field: LineField, value: i64) {
        let Some(item) = self.items.get_mut(index) else {
            return;
        };
        match field {
            LineField::Peptide => {
                item.peptide_id = StockEntryId::new(EntityId::from_raw(value.max(0) as u64));
            }
            LineField::Quantity => item.quantity = value,
        }
    }

    /// Back to the single blank line of a fresh draft.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for DraftOrder {
    fn default() -> Self {
        Self::new()
    }
}
