//! Table cell for peso amounts
//!
//! ```ignore
//! <TableCellMoney value=tx.net_amount />
//! <TableCellMoney value=balance bold=true color_by_sign=false />
//! ```

use super::number_format::format_clp;
use leptos::prelude::*;
use thaw::TableCell;

/// Right-aligned CLP amount; positive values green, negative red
#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<f64>,

    #[prop(optional, default = true)]
    color_by_sign: bool,

    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let cell_style = move || {
        let mut styles = Vec::new();
        if color_by_sign {
            let v = value.get();
            if v > 0.0 {
                styles.push("color: var(--color-success-700)");
            } else if v < 0.0 {
                styles.push("color: var(--color-error-700)");
            }
        }
        if bold {
            styles.push("font-weight: 600");
        }
        styles.join("; ")
    };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>
                {move || format_clp(value.get())}
            </span>
        </TableCell>
    }
}
