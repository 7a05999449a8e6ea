//! Header cell that requests server-side ordering by its column
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Balance"
//!     sort_key="balance"
//!     active_key=Signal::derive(move || state.with(|s| s.sort_by.code()))
//!     ascending=Signal::derive(move || state.with(|s| s.sort_order == SortOrder::Asc))
//!     on_sort=Callback::new(move |key| toggle_sort(key))
//! />
//! ```

use leptos::prelude::*;
use thaw::TableHeaderCell;

/// Arrow shown next to the label; empty for columns that are not active.
pub fn sort_indicator(active_key: &str, sort_key: &str, ascending: bool) -> &'static str {
    if active_key != sort_key {
        ""
    } else if ascending {
        " \u{25B2}"
    } else {
        " \u{25BC}"
    }
}

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,
    /// Value passed to `on_sort` when clicked
    sort_key: &'static str,
    #[prop(into)]
    active_key: Signal<&'static str>,
    #[prop(into)]
    ascending: Signal<bool>,
    on_sort: Callback<&'static str>,
    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    let class = move || {
        if active_key.get() == sort_key {
            "table__sortable-header table__sortable-header--active"
        } else {
            "table__sortable-header"
        }
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div class=class style="cursor: pointer;" on:click=move |_| on_sort.run(sort_key)>
                {label}
                <span class="table__sort-indicator">
                    {move || sort_indicator(active_key.get(), sort_key, ascending.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(sort_indicator("balance", "tier", true), "");
        assert_eq!(sort_indicator("balance", "balance", true), " \u{25B2}");
        assert_eq!(sort_indicator("balance", "balance", false), " \u{25BC}");
    }
}
