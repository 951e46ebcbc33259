fn main() {
    pepstock_observability::init();

    let state = pepstock_app::AppState::sample();

    tracing::info!(
        stock_entries = state.stock().len(),
        customers = state.customers().len(),
        orders = state.orders().len(),
        "sample state ready"
    );

    // Demo run: print the chart payload for the shipped sample data.
    let totals = state.sales_summary();
    let json = serde_json::to_string_pretty(&totals).unwrap_or_else(|_| "[]".to_string());
    println!("{json}");
}
