use crate::dashboards::d410_retail_sales::projection::{
    project_rows, SaleRow, TableRow, COLUMN_COUNT, NO_DATA_LABEL,
};
use crate::shared::components::table::SortableHeaderCell;
use contracts::dashboards::d410_retail_sales::SaleRecordDto;
use contracts::enums::{SalesSort, SortKey};
use leptos::prelude::*;

/// Sales table; sorting is delegated to the backend through `on_sort`.
#[component]
pub fn SalesTable(
    #[prop(into)]
    records: Signal<Vec<SaleRecordDto>>,

    #[prop(into)]
    current_sort: Signal<SalesSort>,

    on_sort: Callback<SortKey>,
) -> impl IntoView {
    view! {
        <table class="data-table sales-table">
            <thead>
                <tr>
                    <SortableHeaderCell
                        label=SortKey::Customer.display_name()
                        sort_key=SortKey::Customer
                        current_sort=current_sort
                        on_sort=on_sort
                    />
                    <th>"Product"</th>
                    <th>"Category"</th>
                    <th>"Region"</th>
                    <SortableHeaderCell
                        label=SortKey::Quantity.display_name()
                        sort_key=SortKey::Quantity
                        current_sort=current_sort
                        on_sort=on_sort
                    />
                    <SortableHeaderCell
                        label=SortKey::Date.display_name()
                        sort_key=SortKey::Date
                        current_sort=current_sort
                        on_sort=on_sort
                    />
                </tr>
            </thead>
            <tbody>
                {move || records.with(|records| {
                    project_rows(records)
                        .into_iter()
                        .map(render_row)
                        .collect_view()
                })}
            </tbody>
        </table>
    }
}

fn render_row(row: TableRow) -> AnyView {
    match row {
        TableRow::NoData => view! {
            <tr class="sales-table__empty">
                <td colspan=COLUMN_COUNT.to_string()>{NO_DATA_LABEL}</td>
            </tr>
        }
        .into_any(),
        TableRow::Sale(SaleRow {
            customer,
            product,
            category,
            region,
            quantity,
            date,
        }) => view! {
            <tr>
                <td>{customer}</td>
                <td>{product}</td>
                <td>{category}</td>
                <td>{region}</td>
                <td class="sales-table__number">{quantity}</td>
                <td>{date}</td>
            </tr>
        }
        .into_any(),
    }
}
