//! Tab content registry: the one place mapping a tab key to its view

use leptos::prelude::*;

use super::tab_labels::PART_DETAILS_PREFIX;
use crate::domain::a001_part::ui::categories::PartCategoryList;
use crate::domain::a001_part::ui::details::PartDetails;
use crate::domain::a001_part::ui::list::PartList;
use crate::domain::a003_stock_item::ui::list::StockItemList;
use crate::domain::a004_stock_location::ui::list::StockLocationList;
use crate::domain::a005_company::ui::list::CompanyList;
use crate::domain::a006_supplier_part::ui::list::SupplierPartList;
use crate::domain::a007_purchase_order::ui::list::PurchaseOrderList;
use crate::domain::a008_sales_order::ui::list::SalesOrderList;
use crate::domain::a009_return_order::ui::list::ReturnOrderList;
use crate::domain::a010_transfer_order::ui::list::TransferOrderList;
use crate::domain::a011_build_order::ui::list::BuildOrderList;
use crate::domain::a012_project_code::ui::list::ProjectCodeList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::users::ui::list::UsersListPage;

/// View of the tab `key`; unknown keys get a placeholder
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        // parts
        "a001_part" => view! { <PartList /> }.into_any(),
        "a001_part_category" => view! { <PartCategoryList /> }.into_any(),
        k if k.starts_with(PART_DETAILS_PREFIX) => {
            match k[PART_DETAILS_PREFIX.len()..].parse::<i64>() {
                Ok(pk) => view! { <PartDetails pk=pk tab_key=k.to_string() /> }.into_any(),
                Err(_) => {
                    log::warn!("Bad part tab key: {}", k);
                    let key_for_close = k.to_string();
                    view! {
                        <div class="placeholder">
                            "Unknown part "
                            <button on:click=move |_| tabs_store.close_tab(&key_for_close)>"Close"</button>
                        </div>
                    }
                    .into_any()
                }
            }
        }

        // stock
        "a003_stock_item" => view! { <StockItemList /> }.into_any(),
        "a004_stock_location" => view! { <StockLocationList /> }.into_any(),

        // purchasing and sales
        "a005_company" => view! { <CompanyList /> }.into_any(),
        "a006_supplier_part" => view! { <SupplierPartList /> }.into_any(),
        "a007_purchase_order" => view! { <PurchaseOrderList /> }.into_any(),
        "a008_sales_order" => view! { <SalesOrderList /> }.into_any(),
        "a009_return_order" => view! { <ReturnOrderList /> }.into_any(),
        "a010_transfer_order" => view! { <TransferOrderList /> }.into_any(),

        // manufacturing
        "a011_build_order" => view! { <BuildOrderList /> }.into_any(),
        "a012_project_code" => view! { <ProjectCodeList /> }.into_any(),

        // system
        "sys_users" => view! { <UsersListPage /> }.into_any(),

        _ => {
            log::warn!("Unknown tab type: {}", key);
            view! { <div class="placeholder">"Not implemented yet"</div> }.into_any()
        }
    }
}
