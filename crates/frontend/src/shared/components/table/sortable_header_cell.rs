use contracts::shared::ui_state::SortStatus;
use leptos::prelude::*;

/// Next sorting after a click on `column`: ascending first, then toggled
pub fn next_sorting(current: Option<&SortStatus>, column: &str) -> SortStatus {
    match current {
        Some(sort) if sort.column == column => SortStatus {
            column: column.to_string(),
            ascending: !sort.ascending,
        },
        _ => SortStatus {
            column: column.to_string(),
            ascending: true,
        },
    }
}

/// Header cell; sortable columns show the direction and sort on click.
/// Double click renames the column.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: Signal<String>,

    #[prop(into)]
    column: String,

    sortable: bool,

    #[prop(into)]
    sorting: Signal<Option<SortStatus>>,

    on_sort: Callback<String>,

    #[prop(optional)]
    on_rename: Option<Callback<String>>,
) -> impl IntoView {
    let column = StoredValue::new(column);
    let indicator = move || {
        sorting.with(|s| match s {
            Some(sort) if column.with_value(|c| *c == sort.column) => {
                if sort.ascending {
                    " ▲"
                } else {
                    " ▼"
                }
            }
            _ => "",
        })
    };

    view! {
        <th
            class="table__header-cell"
            class:table__header-cell--sortable=sortable
            on:click=move |_| {
                if sortable {
                    on_sort.run(column.get_value());
                }
            }
            on:dblclick=move |_| {
                if let Some(rename) = on_rename {
                    rename.run(column.get_value());
                }
            }
        >
            {move || label.get()}
            <span class="table__sort-indicator">{indicator}</span>
        </th>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorting_cycles_on_same_column() {
        let first = next_sorting(None, "quantity");
        assert!(first.ascending);
        let second = next_sorting(Some(&first), "quantity");
        assert!(!second.ascending);
        let other = next_sorting(Some(&second), "batch");
        assert_eq!(other.column, "batch");
        assert!(other.ascending);
    }
}
