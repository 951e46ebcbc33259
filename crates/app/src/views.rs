//! Render-ready projections of committed state.
//!
//! Ids are resolved against current collections at the moment of rendering,
//! never ahead of time; that is what lets deletions and renames show up
//! retroactively in existing rows.

use serde::Serialize;

use pepstock_customers::CustomerDirectory;
use pepstock_inventory::StockLedger;
use pepstock_sales::{Order, OrderId, OrderStatus};

/// One rendered order line: the peptide's current name, if its id still
/// resolves, and the quantity exactly as committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSummary {
    pub peptide: Option<String>,
    pub quantity: i64,
}

/// One rendered order row. A deleted customer or peptide renders as `None`
/// rather than failing; the underlying ids stay committed untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub customer: Option<String>,
    pub lines: Vec<LineSummary>,
    pub status: OrderStatus,
}

pub fn order_summary(
    order: &Order,
    customers: &CustomerDirectory,
    ledger: &StockLedger,
) -> OrderSummary {
    OrderSummary {
        id: order.id(),
        customer: customers.name_of(order.customer_id()).map(str::to_string),
        lines: order
            .items()
            .iter()
            .map(|item| LineSummary {
                peptide: ledger.name_of(item.peptide_id).map(str::to_string),
                quantity: item.quantity,
            })
            .collect(),
        status: order.status(),
    }
}
