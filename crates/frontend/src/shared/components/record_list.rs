//! Server-paginated table of API records.
//!
//! Filters come from the table filter registry. Page size, sorting, hidden
//! columns and column names persist in the UI state store under the table id.

use std::collections::HashSet;

use contracts::shared::choices::{list_count, list_records, scalar_to_string};
use contracts::shared::form_fields::{FormContext, FormMode};
use contracts::shared::requests::RequestTracker;
use contracts::shared::table_filters::{table_filters, ActiveFilters};
use contracts::system::auth::Permission;
use contracts::system::printing::PrintKind;
use gloo_timers::future::TimeoutFuture;
use leptos::children::ToChildren;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use thaw::*;

use super::pagination_controls::PaginationControls;
use super::table::{next_sorting, SortableHeaderCell, TableCheckbox};
use super::table_filter_panel::TableFilterPanel;
use crate::shared::api::get_value;
use crate::shared::date_utils::format_date;
use crate::shared::forms::EntityFormDialog;
use crate::shared::icons::icon;
use crate::shared::settings::use_feature_flags;
use crate::shared::storage::with_ui_state;
use crate::system::auth::context::use_auth;
use crate::system::printing::PrintDialog;

const SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    /// Cell text; defaults to the record field named like the column
    pub render: Option<fn(&Value) -> String>,
}

impl Column {
    pub fn new(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            sortable: true,
            render: None,
        }
    }

    pub fn unsorted(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn render(mut self, render: fn(&Value) -> String) -> Self {
        self.render = Some(render);
        self
    }

    pub fn text(&self, record: &Value) -> String {
        match self.render {
            Some(render) => render(record),
            None => field_text(record, self.name),
        }
    }
}

/// Text at a dotted record path (`part_detail.full_name`); empty when absent
pub fn field_text(record: &Value, path: &str) -> String {
    path.split('.')
        .try_fold(record, |value, key| value.get(key))
        .and_then(scalar_to_string)
        .unwrap_or_default()
}

/// Label of a numeric `status` code; unknown codes are shown as numbers
pub fn status_text(record: &Value, label: fn(u16) -> Option<&'static str>) -> String {
    record
        .get("status")
        .and_then(Value::as_u64)
        .and_then(|code| u16::try_from(code).ok())
        .and_then(label)
        .map(str::to_string)
        .unwrap_or_else(|| field_text(record, "status"))
}

/// Boolean field as Yes/No
pub fn flag_text(record: &Value, path: &str) -> String {
    match path
        .split('.')
        .try_fold(record, |value, key| value.get(key))
        .and_then(Value::as_bool)
    {
        Some(true) => "Yes".to_string(),
        Some(false) => "No".to_string(),
        None => String::new(),
    }
}

/// Date field formatted for display
pub fn date_text(record: &Value, path: &str) -> String {
    let raw = field_text(record, path);
    if raw.is_empty() {
        raw
    } else {
        format_date(&raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialog {
    Create,
    Edit(i64),
    Print(PrintKind),
}

#[component]
pub fn RecordList(
    /// Filter registry id, also the key of the persisted table state
    table: &'static str,

    /// List endpoint (`/api/stock/`)
    endpoint: &'static str,

    columns: Vec<Column>,

    /// Permission role guarding create and edit
    #[prop(optional)]
    role: Option<&'static str>,

    /// Model with a form builder; enables create and edit
    #[prop(optional)]
    model: Option<&'static str>,

    /// Fixed query parameters, e.g. the part shown on a part page
    #[prop(optional)]
    params: Vec<(String, String)>,

    /// Initial values of records created from this table
    #[prop(optional)]
    create_context: FormContext,

    /// Print labels or reports for the selected rows, as this model type
    #[prop(optional)]
    print_model: Option<&'static str>,

    /// Row click handler; defaults to the edit dialog
    #[prop(optional)]
    on_open: Option<Callback<Value>>,
) -> impl IntoView {
    let flags = use_feature_flags().flags;
    let (auth_state, _) = use_auth();

    let filters = Memo::new(move |_| table_filters(table, &flags.get()));
    let active = RwSignal::new(ActiveFilters::with_defaults(&filters.get_untracked()));
    let search_input = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());
    let page = RwSignal::new(0usize);
    let page_size = RwSignal::new(with_ui_state(|s| s.page_size(table)));
    let sorting = RwSignal::new(with_ui_state(|s| s.sorting(table)));
    let hidden_columns = RwSignal::new(with_ui_state(|s| s.hidden_columns(table)));
    let column_names = RwSignal::new(with_ui_state(|s| s.column_names(table)));

    let records = RwSignal::new(Vec::<Value>::new());
    let total = RwSignal::new(0usize);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let selected = RwSignal::new(HashSet::<i64>::new());
    let reload = RwSignal::new(0u32);
    let dialog = RwSignal::new(None::<Dialog>);

    let tracker = StoredValue::new(RequestTracker::new());
    let params = StoredValue::new(params);
    let columns = StoredValue::new(columns);
    let create_context = StoredValue::new(create_context);

    // a changed query starts again at the first page
    Effect::new(move |_| {
        active.track();
        search.track();
        page_size.track();
        sorting.track();
        if page.get_untracked() != 0 {
            page.set(0);
        }
    });

    Effect::new(move |_| {
        reload.track();
        let mut query = params.get_value();
        query.extend(filters.with(|f| active.with(|a| a.to_query_pairs(f))));
        let term = search.get();
        if !term.is_empty() {
            query.push(("search".to_string(), term));
        }
        if let Some(sort) = sorting.get() {
            query.push(("ordering".to_string(), sort.ordering()));
        }
        let size = page_size.get();
        query.push(("limit".to_string(), size.to_string()));
        query.push(("offset".to_string(), (page.get() * size).to_string()));

        let Some(ticket) = tracker.try_update_value(|t| t.begin(table)) else {
            return;
        };
        loading.set(true);
        spawn_local(async move {
            let result = get_value(endpoint, &query).await;
            if !tracker.try_update_value(|t| t.complete(&ticket)).unwrap_or(false) {
                return;
            }
            loading.set(false);
            match result {
                Ok(body) => {
                    total.set(list_count(&body));
                    records.set(list_records(&body));
                    error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load table '{}': {}", table, e);
                    error.set(Some(e));
                }
            }
        });
    });

    on_cleanup(move || {
        let _ = tracker.try_update_value(|t| t.cancel_all());
    });

    let on_search = move |value: String| {
        search_input.set(value.clone());
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if search_input.try_get_untracked().as_deref() == Some(value.as_str()) {
                search.set(value);
            }
        });
    };

    let on_sort = Callback::new(move |column: String| {
        let next = sorting.with_untracked(|s| next_sorting(s.as_ref(), &column));
        with_ui_state(|s| s.set_sorting(table, Some(next.clone())));
        sorting.set(Some(next));
    });

    let on_rename = Callback::new(move |column: String| {
        let current = column_names
            .with_untracked(|names| names.get(&column).cloned())
            .unwrap_or_default();
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(Some(input)) = window
            .prompt_with_message_and_default("Column name (leave empty for the default)", &current)
        else {
            return;
        };
        let name = input.trim();
        with_ui_state(|s| s.set_column_name(table, &column, (!name.is_empty()).then_some(name)));
        column_names.set(with_ui_state(|s| s.column_names(table)));
    });

    let toggle_column = move |column: &'static str| {
        with_ui_state(|s| s.toggle_column(table, column));
        hidden_columns.set(with_ui_state(|s| s.hidden_columns(table)));
    };

    let visible_columns = move || {
        hidden_columns.with(|hidden| {
            columns.with_value(|cols| {
                cols.iter()
                    .filter(|c| !hidden.iter().any(|h| h == c.name))
                    .copied()
                    .collect::<Vec<_>>()
            })
        })
    };

    let allowed = move |permission: Permission| {
        role.map(|r| auth_state.with(|a| a.has(r, permission)))
            .unwrap_or(true)
    };
    let can_add = move || model.is_some() && allowed(Permission::Add);
    let can_change = move || model.is_some() && allowed(Permission::Change);

    let open_row = move |record: Value| {
        if let Some(open) = on_open {
            open.run(record);
        } else if can_change() {
            if let Some(pk) = record.get("pk").and_then(Value::as_i64) {
                dialog.set(Some(Dialog::Edit(pk)));
            }
        }
    };

    let toggle_row = move |pk: i64, checked: bool| {
        selected.update(|s| {
            if checked {
                s.insert(pk);
            } else {
                s.remove(&pk);
            }
        });
    };

    let pagination = ChildrenFn::to_children(move || {
        view! {
            <PaginationControls
                current_page=page
                total_count=total
                page_size=page_size
                on_page_change=Callback::new(move |p| page.set(p))
                on_page_size_change=Callback::new(move |size| {
                    with_ui_state(|s| s.set_page_size(table, size));
                    page_size.set(size);
                })
            />
        }
    });

    let close_dialog = Callback::new(move |_| dialog.set(None));
    let on_saved = Callback::new(move |_| {
        dialog.set(None);
        reload.update(|n| *n += 1);
    });

    let dialog_view = move || {
        let current = dialog.get()?;
        let model_name = model.unwrap_or_default();
        Some(match current {
            Dialog::Create => view! {
                <EntityFormDialog
                    title="Create"
                    model=model_name
                    endpoint=endpoint
                    mode=FormMode::Create
                    context=create_context.get_value()
                    on_close=close_dialog
                    on_saved=on_saved
                />
            }
            .into_any(),
            Dialog::Edit(pk) => view! {
                <EntityFormDialog
                    title="Edit"
                    model=model_name
                    endpoint=endpoint
                    mode=FormMode::Edit
                    pk=pk
                    on_close=close_dialog
                    on_saved=on_saved
                />
            }
            .into_any(),
            Dialog::Print(kind) => {
                let items: Vec<i64> = selected.with_untracked(|s| {
                    let mut items: Vec<i64> = s.iter().copied().collect();
                    items.sort_unstable();
                    items
                });
                view! {
                    <PrintDialog
                        kind=kind
                        model_type=print_model.unwrap_or_default()
                        items=items
                        on_close=close_dialog
                    />
                }
                .into_any()
            }
        })
    };

    view! {
        <div class="record-list" data-table=table>
            <div class="record-list__toolbar">
                <input
                    type="search"
                    class="record-list__search"
                    placeholder="Search"
                    prop:value=move || search_input.get()
                    on:input=move |ev| on_search(event_target_value(&ev))
                />
                {move || can_add().then(|| view! {
                    <Button appearance=ButtonAppearance::Primary size=ButtonSize::Small on_click=move |_| dialog.set(Some(Dialog::Create))>
                        {icon("plus")} "New"
                    </Button>
                })}
                {print_model.map(|_| view! {
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        disabled=Signal::derive(move || selected.with(HashSet::is_empty))
                        on_click=move |_| dialog.set(Some(Dialog::Print(PrintKind::Label)))
                    >
                        {icon("printer")} "Labels"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        disabled=Signal::derive(move || selected.with(HashSet::is_empty))
                        on_click=move |_| dialog.set(Some(Dialog::Print(PrintKind::Report)))
                    >
                        {icon("printer")} "Reports"
                    </Button>
                })}
                <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=move |_| reload.update(|n| *n += 1)>
                    {icon("refresh")}
                </Button>
                <details class="record-list__columns">
                    <summary>{icon("columns")}</summary>
                    {columns.with_value(|cols| cols.iter().copied().map(|col| view! {
                        <label class="record-list__column-toggle">
                            <input
                                type="checkbox"
                                prop:checked=move || hidden_columns.with(|h| !h.iter().any(|n| n == col.name))
                                on:change=move |_| toggle_column(col.name)
                            />
                            {col.label}
                        </label>
                    }).collect_view())}
                </details>
            </div>

            <TableFilterPanel table=table active=active pagination_controls=pagination />

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="table" class:table--loading=move || loading.get()>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox">
                                <input
                                    type="checkbox"
                                    class="table__checkbox"
                                    on:change=move |ev| {
                                        if event_target_checked(&ev) {
                                            let pks: HashSet<i64> = records.with(|rows| {
                                                rows.iter().filter_map(|r| r.get("pk").and_then(Value::as_i64)).collect()
                                            });
                                            selected.set(pks);
                                        } else {
                                            selected.set(HashSet::new());
                                        }
                                    }
                                />
                            </th>
                            {move || visible_columns().into_iter().map(|col| {
                                let label = Signal::derive(move || {
                                    column_names
                                        .with(|names| names.get(col.name).cloned())
                                        .unwrap_or_else(|| col.label.to_string())
                                });
                                view! {
                                    <SortableHeaderCell
                                        label=label
                                        column=col.name
                                        sortable=col.sortable
                                        sorting=sorting
                                        on_sort=on_sort
                                        on_rename=on_rename
                                    />
                                }
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let cols = visible_columns();
                            records.get().into_iter().map(|record| {
                                let pk = record.get("pk").and_then(Value::as_i64).unwrap_or_default();
                                let cells = cols.iter().map(|col| view! {
                                    <td class="table__cell">{col.text(&record)}</td>
                                }).collect_view();
                                view! {
                                    <tr
                                        class="table__row"
                                        class:table__row--selected=move || selected.with(|s| s.contains(&pk))
                                        on:click=move |_| open_row(record.clone())
                                    >
                                        <TableCheckbox
                                            checked=Signal::derive(move || selected.with(|s| s.contains(&pk)))
                                            on_change=Callback::new(move |checked| toggle_row(pk, checked))
                                        />
                                        {cells}
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            {dialog_view}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cell_text_follows_dotted_paths() {
        let record = json!({
            "pk": 4,
            "quantity": 12.5,
            "part_detail": {"full_name": "R-10K | Resistor"},
            "batch": null
        });
        assert_eq!(field_text(&record, "quantity"), "12.5");
        assert_eq!(field_text(&record, "part_detail.full_name"), "R-10K | Resistor");
        assert_eq!(field_text(&record, "batch"), "");
        assert_eq!(field_text(&record, "location_detail.name"), "");
    }

    #[test]
    fn custom_renderer_wins() {
        let column = Column::new("status", "Status").render(|r| format!("#{}", field_text(r, "status")));
        assert_eq!(column.text(&json!({"status": 10})), "#10");
        assert!(!Column::new("notes", "Notes").unsorted().sortable);
    }

    #[test]
    fn status_and_date_cells() {
        let label: fn(u16) -> Option<&'static str> = |code| (code == 10).then_some("OK");
        assert_eq!(status_text(&json!({"status": 10}), label), "OK");
        assert_eq!(status_text(&json!({"status": 99}), label), "99");
        assert_eq!(date_text(&json!({"target_date": "2024-03-15"}), "target_date"), "15 Mar 2024");
        assert_eq!(date_text(&json!({}), "target_date"), "");
        assert_eq!(flag_text(&json!({"is_staff": true}), "is_staff"), "Yes");
        assert_eq!(flag_text(&json!({"is_staff": "x"}), "is_staff"), "");
    }
}
