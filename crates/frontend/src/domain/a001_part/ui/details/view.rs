use contracts::domain::a001_part::Part;
use contracts::shared::form_fields::{FormContext, FormMode};
use contracts::system::auth::Permission;
use leptos::prelude::*;
use thaw::*;

use super::view_model::{part_panel_groups, part_panels, PartDetailsViewModel};
use crate::domain::a003_stock_item::ui::list::stock_columns;
use crate::domain::a006_supplier_part::ui::list::supplier_part_columns;
use crate::domain::a007_purchase_order::ui::list::purchase_order_columns;
use crate::domain::a008_sales_order::ui::list::sales_order_columns;
use crate::domain::a011_build_order::ui::list::build_order_columns;
use crate::layout::global_context::use_app_context;
use crate::shared::components::{PageHeader, PanelGroup, RecordList};
use crate::shared::forms::EntityFormDialog;
use crate::system::auth::context::use_auth;

#[component]
pub fn PartDetails(pk: i64, #[prop(into)] tab_key: String) -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, _) = use_auth();
    let vm = PartDetailsViewModel::new(pk);
    let tab_key = StoredValue::new(tab_key);
    let editing = RwSignal::new(false);

    let load = move || {
        vm.load(move |part: &Part| {
            tab_key.with_value(|key| ctx.update_tab_title(key, &part.full_name()));
        })
    };
    load();

    let panels = Signal::derive(move || {
        vm.part.with(|part| match part {
            Some(part) => auth_state.with(|auth| part_panels(part, &auth.roles)),
            None => Vec::new(),
        })
    });
    let can_edit = move || auth_state.with(|a| a.has("part", Permission::Change));
    let url_panel = tab_key.with_value(|key| ctx.url_panel(key));

    let title = Signal::derive(move || {
        vm.part
            .with(|p| p.as_ref().map(Part::full_name))
            .unwrap_or_else(|| format!("Part {}", pk))
    });
    let subtitle = Signal::derive(move || vm.part.with(|p| p.as_ref().map(|p| p.description.clone())));

    view! {
        <div class="page part-details">
            <PageHeader title=title subtitle=subtitle>
                {move || can_edit().then(|| view! {
                    <Button appearance=ButtonAppearance::Primary size=ButtonSize::Small on_click=move |_| editing.set(true)>
                        "Edit"
                    </Button>
                })}
            </PageHeader>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || vm.loading.get().then(|| view! { <div class="page__loading">"Loading..."</div> })}

            <PanelGroup
                page="part-detail"
                panels=panels
                groups=part_panel_groups()
                model="part"
                instance_id=Signal::derive(move || vm.part.with(|p| p.as_ref().map(|p| p.pk.to_string())))
                url_panel=url_panel
                render_panel=Callback::new(move |name: String| render_part_panel(&name, vm))
                on_select=Callback::new(move |name: String| {
                    tab_key.with_value(|key| ctx.set_panel(key, &name));
                })
            />

            {move || editing.get().then(|| view! {
                <EntityFormDialog
                    title="Edit Part"
                    model="part"
                    endpoint="/api/part/"
                    mode=FormMode::Edit
                    pk=pk
                    on_close=Callback::new(move |_| editing.set(false))
                    on_saved=Callback::new(move |_| {
                        editing.set(false);
                        load();
                    })
                />
            })}
        </div>
    }
}

fn part_filter(pk: i64) -> Vec<(String, String)> {
    vec![("part".to_string(), pk.to_string())]
}

fn render_part_panel(name: &str, vm: PartDetailsViewModel) -> AnyView {
    let pk = vm.pk;
    let with_part = || FormContext::new().with("part", pk);
    match name {
        "details" => view! { <PartAttributes vm=vm /> }.into_any(),
        "stock" => view! {
            <RecordList
                table="stock"
                endpoint="/api/stock/"
                columns=stock_columns()
                role="stock"
                model="stockitem"
                print_model="stockitem"
                params=part_filter(pk)
                create_context=with_part()
            />
        }
        .into_any(),
        "suppliers" => view! {
            <RecordList
                table="supplierpart"
                endpoint="/api/company/part/"
                columns=supplier_part_columns()
                role="purchase_order"
                model="supplierpart"
                params=part_filter(pk)
                create_context=with_part()
            />
        }
        .into_any(),
        "purchase_orders" => view! {
            <RecordList
                table="purchaseorder"
                endpoint="/api/order/po/"
                columns=purchase_order_columns()
                role="purchase_order"
                params=part_filter(pk)
            />
        }
        .into_any(),
        "sales_orders" => view! {
            <RecordList
                table="salesorder"
                endpoint="/api/order/so/"
                columns=sales_order_columns()
                role="sales_order"
                params=part_filter(pk)
            />
        }
        .into_any(),
        "builds" => view! {
            <RecordList
                table="build"
                endpoint="/api/build/"
                columns=build_order_columns()
                role="build"
                model="build"
                params=part_filter(pk)
                create_context=with_part()
            />
        }
        .into_any(),
        "notes" => view! {
            <div class="part-notes">
                {move || vm.part.with(|p| {
                    p.as_ref()
                        .and_then(|p| p.notes.clone())
                        .filter(|n| !n.trim().is_empty())
                        .unwrap_or_else(|| "No notes".to_string())
                })}
            </div>
        }
        .into_any(),
        other => {
            log::warn!("Part page has no panel '{}'", other);
            view! { <div class="placeholder">"Not implemented yet"</div> }.into_any()
        }
    }
}

#[component]
fn PartAttributes(vm: PartDetailsViewModel) -> impl IntoView {
    let yes_no = |flag: bool| if flag { "Yes" } else { "No" };
    move || {
        vm.part.get().map(|part| {
            let rows = vec![
                ("Name", part.name.clone()),
                ("IPN", part.ipn.clone().unwrap_or_default()),
                ("Revision", part.revision.clone().unwrap_or_default()),
                ("Description", part.description.clone()),
                ("Units", part.units.clone().unwrap_or_default()),
                (
                    "In Stock",
                    part.in_stock.map(|q| q.to_string()).unwrap_or_default(),
                ),
                (
                    "Default Expiry",
                    match part.default_expiry {
                        0 => String::new(),
                        days => format!("{} days", days),
                    },
                ),
                ("Active", yes_no(part.active).to_string()),
                ("Template", yes_no(part.is_template).to_string()),
                ("Assembly", yes_no(part.assembly).to_string()),
                ("Trackable", yes_no(part.trackable).to_string()),
                ("Purchaseable", yes_no(part.purchaseable).to_string()),
                ("Salable", yes_no(part.salable).to_string()),
            ];
            view! {
                <table class="details-table">
                    <tbody>
                        {rows.into_iter().map(|(label, value)| view! {
                            <tr>
                                <th>{label}</th>
                                <td>{value}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            }
        })
    }
}
