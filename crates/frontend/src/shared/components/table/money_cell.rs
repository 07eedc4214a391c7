use contracts::domain::money::format_minor_units_with_currency;
use leptos::prelude::*;

/// Right-aligned money cell. Takes the raw minor-unit amount; division
/// by 100 happens only here, at render time.
#[component]
pub fn MoneyCell(
    amount: i64,
    currency: String,

    /// Green for positive, red for negative amounts.
    #[prop(optional)]
    color_by_sign: bool,
) -> impl IntoView {
    let style = if color_by_sign && amount > 0 {
        "color: var(--color-success-700);"
    } else if color_by_sign && amount < 0 {
        "color: var(--color-error-700);"
    } else {
        ""
    };

    view! {
        <td class="table__cell-money" style=style>
            {format_minor_units_with_currency(amount, &currency)}
        </td>
    }
}
