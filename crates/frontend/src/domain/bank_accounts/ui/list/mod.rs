use contracts::domain::bank_account::BankAccountRow;
use contracts::query::{FilterValue, SortDirection, SortSpec};
use leptos::prelude::*;
use thaw::*;

use super::form::BankAccountFormModal;
use crate::layout::modal::ModalService;
use crate::shared::collection_query::{CollectionQuery, CollectionSource, QueryState};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const SOURCE: CollectionSource = CollectionSource {
    path: "bank-accounts",
    search_fields: &["iban", "holderName"],
    error_fallback: "Failed to load bank accounts",
};

#[component]
pub fn BankAccountsList() -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    let query = CollectionQuery::<BankAccountRow>::with_state(
        SOURCE,
        QueryState::with_sort(SortSpec::single("bankName", SortDirection::Ascending)),
    );

    let state = query.state();
    let items = query.items();
    let loading = query.loading();
    let is_filter_expanded = RwSignal::new(true);

    let sort = Signal::derive(move || state.get().sort);
    let search = Signal::derive(move || state.get().search);
    let bank_name_filter = Signal::derive(move || state.get().filters.scalar_value("bankName"));
    let active_filters_count = Signal::derive(move || state.get().filters.active_count());

    let editing = RwSignal::new(Option::<BankAccountRow>::None);

    let open_create = move |_| {
        editing.set(None);
        modal.show();
    };

    view! {
        <PageFrame page_id="bank_accounts--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Bank accounts"</h1>
                    <span class="badge badge--primary">
                        {move || state.get().pagination.total_items.to_string()}
                    </span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=open_create>
                        {icon("plus")}
                        " New account"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| query.refresh()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div
                            class="filter-panel-header__left"
                            on:click=move |_| is_filter_expanded.update(|e| *e = !*e)
                        >
                            {icon("filter")}
                            <span class="filter-panel__title">"Filters"</span>
                            {move || {
                                let count = active_filters_count.get();
                                if count > 0 {
                                    view! { <span class="filter-panel__badge">{count}</span> }.into_any()
                                } else {
                                    view! { <></> }.into_any()
                                }
                            }}
                        </div>

                        <div class="filter-panel-header__center">
                            <PaginationControls
                                page=Signal::derive(move || state.get().pagination.page)
                                total_pages=Signal::derive(move || state.get().pagination.total_pages())
                                total_count=Signal::derive(move || state.get().pagination.total_items)
                                page_size=Signal::derive(move || state.get().pagination.page_size)
                                on_page_change=Callback::new(move |page| query.set_page(page))
                                on_page_size_change=Callback::new(move |size| query.set_page_size(size))
                            />
                        </div>
                    </div>

                    <Show when=move || is_filter_expanded.get()>
                        <div class="filter-panel-content">
                            <Flex gap=FlexGap::Small align=FlexAlign::End>
                                <div class="filter-field">
                                    <label class="filter-field__label">"Bank"</label>
                                    // Scalar filter: an emptied field is dropped
                                    // from the outgoing query entirely.
                                    <input
                                        type="text"
                                        class="filter-field__input"
                                        placeholder="Bank name..."
                                        prop:value=move || bank_name_filter.get()
                                        on:input=move |ev| {
                                            query.set_filter(
                                                "bankName",
                                                FilterValue::Scalar(event_target_value(&ev)),
                                            );
                                        }
                                    />
                                </div>
                                <SearchInput
                                    value=search
                                    on_change=Callback::new(move |text: String| query.set_search(text))
                                    placeholder="Search IBAN or holder...".to_string()
                                />
                            </Flex>
                        </div>
                    </Show>
                </div>

                <Show when=move || loading.get()>
                    <div class="table-loading">"Loading..."</div>
                </Show>

                <div class="table-wrapper">
                    <table class="table">
                        <thead>
                            <tr>
                                <SortableHeaderCell
                                    field="bankName"
                                    label="Bank"
                                    sort=sort
                                    on_toggle=Callback::new(move |field| query.toggle_sort(field))
                                />
                                <SortableHeaderCell
                                    field="holderName"
                                    label="Holder"
                                    sort=sort
                                    on_toggle=Callback::new(move |field| query.toggle_sort(field))
                                />
                                <th>"IBAN"</th>
                                <th>"Currency"</th>
                                <th>"Default"</th>
                                <SortableHeaderCell
                                    field="createdAt"
                                    label="Created"
                                    sort=sort
                                    on_toggle=Callback::new(move |field| query.toggle_sort(field))
                                />
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || items.get()
                                key=|row| row.id.to_string()
                                children=move |row| {
                                    let row_for_edit = row.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <a
                                                    href="#"
                                                    class="table__link"
                                                    on:click=move |e| {
                                                        e.prevent_default();
                                                        editing.set(Some(row_for_edit.clone()));
                                                        modal.show();
                                                    }
                                                >
                                                    {row.bank_name.clone()}
                                                </a>
                                            </td>
                                            <td class="table__cell-truncate">{row.holder_name.clone()}</td>
                                            <td class="table__cell-mono">{row.iban.clone()}</td>
                                            <td>{row.currency.clone()}</td>
                                            <td>
                                                {if row.is_default {
                                                    view! { <span class="badge badge--success">"Yes"</span> }.into_any()
                                                } else {
                                                    view! { <span class="badge badge--neutral">"No"</span> }.into_any()
                                                }}
                                            </td>
                                            <td>{format_datetime(&row.created_at)}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>

            <BankAccountFormModal
                editing=editing
                on_saved=Callback::new(move |_| query.refresh())
            />
        </PageFrame>
    }
}
