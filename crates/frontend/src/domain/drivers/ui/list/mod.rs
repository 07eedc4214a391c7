use contracts::domain::driver::DriverRow;
use contracts::query::{SortDirection, SortSpec};
use leptos::prelude::*;
use thaw::*;

use crate::shared::collection_query::{CollectionQuery, CollectionSource, QueryState};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::date_utils::format_optional_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const SOURCE: CollectionSource = CollectionSource {
    path: "drivers",
    search_fields: &["name", "phone", "licenseNumber"],
    error_fallback: "Failed to load drivers",
};

#[component]
pub fn DriversList() -> impl IntoView {
    let query = CollectionQuery::<DriverRow>::with_state(
        SOURCE,
        QueryState::with_sort(SortSpec::single("name", SortDirection::Ascending)),
    );

    let state = query.state();
    let items = query.items();
    let loading = query.loading();

    let sort = Signal::derive(move || state.get().sort);
    let search = Signal::derive(move || state.get().search);

    view! {
        <PageFrame page_id="drivers--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Drivers"</h1>
                    <span class="badge badge--primary">
                        {move || state.get().pagination.total_items.to_string()}
                    </span>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |text: String| query.set_search(text))
                        placeholder="Search name, phone or licence...".to_string()
                    />
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
                </div>

                <Show when=move || loading.get()>
                    <div class="table-loading">"Loading..."</div>
                </Show>

                <div class="table-wrapper">
                    <table class="table">
                        <thead>
                            <tr>
                                <SortableHeaderCell
                                    field="name"
                                    label="Name"
                                    sort=sort
                                    on_toggle=Callback::new(move |field| query.toggle_sort(field))
                                />
                                <th>"Phone"</th>
                                <th>"Licence"</th>
                                <SortableHeaderCell
                                    field="hiredOn"
                                    label="Hired"
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
                                    view! {
                                        <tr>
                                            <td>{row.name.clone()}</td>
                                            <td class="table__cell-mono">{row.phone.clone()}</td>
                                            <td class="table__cell-mono">{row.license_number.clone()}</td>
                                            <td>{format_optional_date(&row.hired_on)}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </PageFrame>
    }
}
