use serde::{Deserialize, Serialize};
use thiserror::Error;

use pepstock_core::{Entity, EntityId, IdAllocator, find_by_id};
use pepstock_customers::CustomerId;
use pepstock_inventory::StockEntryId;

/// Sales order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub EntityId);

impl OrderId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Sales order fulfilment status.
///
/// Any status may be overwritten with any other, in either direction; the
/// dropdown is a plain write-through. Deletion is the only exit from the
/// lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// Statuses in the order the picker lists them.
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an order: which peptide and how many units.
///
/// `peptide_id` is a plain reference into the stock ledger; after a deletion
/// it dangles, and on never-filled-in draft lines it stays
/// [`StockEntryId::UNSET`]. Only the first line of an order is validated at
/// composition time, so committed quantities past line one may be zero or
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub peptide_id: StockEntryId,
    pub quantity: i64,
}

impl OrderItem {
    /// The blank line a draft starts from.
    pub fn blank() -> Self {
        Self {
            peptide_id: StockEntryId::UNSET,
            quantity: 0,
        }
    }
}

/// A committed sales order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    items: Vec<OrderItem>,
    status: OrderStatus,
}

impl Order {
    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        self.id
    }
}

/// Why a composition was declined. The book is unchanged in every case.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OrderRejection {
    #[error("no customer selected")]
    CustomerNotSelected,
    #[error("order has no line items")]
    NoLineItems,
    #[error("no peptide selected")]
    PeptideNotSelected,
    #[error("quantity must be positive")]
    NonPositiveQuantity,
}

/// The order book: every committed order, in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBook {
    orders: Vec<Order>,
    ids: IdAllocator,
}

impl OrderBook {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            ids: IdAllocator::new(),
        }
    }

    /// Book with a caller-chosen allocator (deterministic ids for tests and
    /// seeded states).
    pub fn with_allocator(ids: IdAllocator) -> Self {
        Self {
            orders: Vec::new(),
            ids,
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        find_by_id(&self.orders, id)
    }

    /// Commit a new order under a fresh id.
    ///
    /// Requires a selected customer, at least one line, and a filled-in
    /// first line (selected peptide, positive quantity). Only the first line
    /// is checked; later lines are committed exactly as entered. Successful
    /// orders start [`OrderStatus::Pending`], and stock is not decremented.
    pub fn compose(
        &mut self,
        customer_id: CustomerId,
        items: &[OrderItem],
    ) -> Result<OrderId, OrderRejection> {
        if !customer_id.is_set() {
            return Err(OrderRejection::CustomerNotSelected);
        }
        let first = items.first().ok_or(OrderRejection::NoLineItems)?;
        if !first.peptide_id.is_set() {
            return Err(OrderRejection::PeptideNotSelected);
        }
        if first.quantity <= 0 {
            return Err(OrderRejection::NonPositiveQuantity);
        }

        let id = OrderId::new(self.ids.allocate());
        self.orders.push(Order {
            id,
            customer_id,
            items: items.to_vec(),
            status: OrderStatus::Pending,
        });
        Ok(id)
    }

    /// Overwrite the status; any status is reachable from any other.
    /// Unknown ids are a no-op.
    pub fn set_status(&mut self, id: OrderId, status: OrderStatus) {
        if let Some(order) = self.orders.iter_mut().find(|order| order.id == id) {
            order.status = status;
        }
    }

    /// Delete unconditionally, from any status.
    pub fn remove(&mut self, id: OrderId) {
        self.orders.retain(|order| order.id != id);
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}
