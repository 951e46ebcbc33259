use serde::{Deserialize, Serialize};

use pepstock_inventory::StockLedger;
use pepstock_sales::OrderBook;

/// Label for lines whose peptide id no longer resolves to a ledger entry.
pub const UNKNOWN_PEPTIDE: &str = "Unknown";

/// One chart row: resolved peptide name and total units ordered under it.
///
/// Serializes flat (`{"name": ..., "quantity": ...}`), which is the shape
/// the chart consumes directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesTotal {
    pub name: String,
    pub quantity: i64,
}

/// Total ordered units per peptide, keyed by resolved name.
///
/// Walks every line of every order (all statuses count the same) and
/// resolves each line's peptide against the ledger's *current* naming.
/// Dangling ids bucket under [`UNKNOWN_PEPTIDE`]; renames retroactively move
/// a peptide's history to its new name; two entries sharing a name share one
/// bucket. Rows come out in first-encounter order, and quantities are summed
/// exactly as committed (unchecked lines past the first may subtract).
pub fn sales_by_peptide(book: &OrderBook, ledger: &StockLedger) -> Vec<SalesTotal> {
    let mut totals: Vec<SalesTotal> = Vec::new();

    for order in book.orders() {
        for item in order.items() {
            let name = ledger.name_of(item.peptide_id).unwrap_or(UNKNOWN_PEPTIDE);
            match totals.iter_mut().find(|row| row.name == name) {
                Some(row) => row.quantity += item.quantity,
                None => totals.push(SalesTotal {
                    name: name.to_string(),
                    quantity: item.quantity,
                }),
            }
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    use pepstock_core::{EntityId, IdAllocator};
    use pepstock_customers::CustomerId;
    use pepstock_inventory::StockEntryId;
    use pepstock_sales::{OrderItem, OrderStatus};

    fn test_customer_id() -> CustomerId {
        CustomerId::new(EntityId::from_raw(1))
    }

    fn line(peptide_id: StockEntryId, quantity: i64) -> OrderItem {
        OrderItem {
            peptide_id,
            quantity,
        }
    }

    fn seeded() -> (OrderBook, StockLedger, StockEntryId, StockEntryId) {
        let mut ledger = StockLedger::with_allocator(IdAllocator::starting_at(1));
        let a = ledger.add("Peptide A", 100).unwrap().entry_id();
        let b = ledger.add("Peptide B", 150).unwrap().entry_id();
        let book = OrderBook::with_allocator(IdAllocator::starting_at(1));
        (book, ledger, a, b)
    }

    #[test]
    fn accumulates_across_orders_by_name() {
        let (mut book, ledger, a, _) = seeded();
        book.compose(test_customer_id(), &[line(a, 50)]).unwrap();
        book.compose(test_customer_id(), &[line(a, 25)]).unwrap();

        let totals = sales_by_peptide(&book, &ledger);

        assert_eq!(
            totals,
            vec![SalesTotal {
                name: "Peptide A".to_string(),
                quantity: 75,
            }]
        );
    }

    #[test]
    fn rows_follow_first_encounter_order() {
        let (mut book, ledger, a, b) = seeded();
        book.compose(test_customer_id(), &[line(b, 75)]).unwrap();
        book.compose(test_customer_id(), &[line(a, 50), line(b, 5)]).unwrap();

        let totals = sales_by_peptide(&book, &ledger);
        let names: Vec<&str> = totals.iter().map(|row| row.name.as_str()).collect();

        assert_eq!(names, vec!["Peptide B", "Peptide A"]);
    }

    #[test]
    fn deleting_the_peptide_moves_its_whole_total_to_unknown() {
        let (mut book, mut ledger, a, _) = seeded();
        book.compose(test_customer_id(), &[line(a, 50)]).unwrap();
        book.compose(test_customer_id(), &[line(a, 25)]).unwrap();

        ledger.remove(a);

        assert_eq!(
            sales_by_peptide(&book, &ledger),
            vec![SalesTotal {
                name: UNKNOWN_PEPTIDE.to_string(),
                quantity: 75,
            }]
        );
    }

    #[test]
    fn dangling_ids_bucket_under_unknown() {
        let (mut book, mut ledger, a, b) = seeded();
        book.compose(test_customer_id(), &[line(a, 50)]).unwrap();
        book.compose(test_customer_id(), &[line(b, 75)]).unwrap();

        ledger.remove(a);

        let totals = sales_by_peptide(&book, &ledger);
        assert_eq!(
            totals,
            vec![
                SalesTotal {
                    name: UNKNOWN_PEPTIDE.to_string(),
                    quantity: 50,
                },
                SalesTotal {
                    name: "Peptide B".to_string(),
                    quantity: 75,
                },
            ]
        );
    }

    #[test]
    fn renames_move_history_to_the_new_name() {
        let (mut book, mut ledger, a, _) = seeded();
        book.compose(test_customer_id(), &[line(a, 50)]).unwrap();

        ledger.rename(a, "Peptide A2");

        let totals = sales_by_peptide(&book, &ledger);
        assert_eq!(totals[0].name, "Peptide A2");
        assert_eq!(totals[0].quantity, 50);
    }

    #[test]
    fn entries_sharing_a_name_share_a_bucket() {
        let (mut book, mut ledger, a, b) = seeded();
        book.compose(test_customer_id(), &[line(a, 50)]).unwrap();
        book.compose(test_customer_id(), &[line(b, 75)]).unwrap();

        ledger.rename(b, "Peptide A");

        let totals = sales_by_peptide(&book, &ledger);
        assert_eq!(
            totals,
            vec![SalesTotal {
                name: "Peptide A".to_string(),
                quantity: 125,
            }]
        );
    }

    #[test]
    fn all_statuses_count_the_same() {
        let (mut book, ledger, a, _) = seeded();
        let first = book.compose(test_customer_id(), &[line(a, 50)]).unwrap();
        book.compose(test_customer_id(), &[line(a, 25)]).unwrap();
        book.set_status(first, OrderStatus::Delivered);

        let totals = sales_by_peptide(&book, &ledger);
        assert_eq!(totals[0].quantity, 75);
    }

    #[test]
    fn unchecked_lines_sum_as_committed() {
        // Lines past the first are never validated; a negative one subtracts.
        let (mut book, ledger, a, _) = seeded();
        book.compose(test_customer_id(), &[line(a, 50), line(a, -10)])
            .unwrap();

        let totals = sales_by_peptide(&book, &ledger);
        assert_eq!(totals[0].quantity, 40);
    }

    #[test]
    fn empty_book_yields_no_rows() {
        let (book, ledger, _, _) = seeded();
        assert!(sales_by_peptide(&book, &ledger).is_empty());
    }

    #[test]
    fn rows_serialize_flat_for_the_chart() {
        let (mut book, ledger, a, _) = seeded();
        book.compose(test_customer_id(), &[line(a, 50)]).unwrap();

        let totals = sales_by_peptide(&book, &ledger);
        let json = serde_json::to_value(&totals).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{ "name": "Peptide A", "quantity": 50 }])
        );
    }
}
