use contracts::domain::a001_part::Part;
use contracts::shared::panels::{PanelDescriptor, PanelGroupSpec};
use contracts::system::auth::UserRoles;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model;

/// Panels of the part page. Order panels are hidden when the part cannot
/// take part in that kind of order or the user may not view them.
pub fn part_panels(part: &Part, roles: &UserRoles) -> Vec<PanelDescriptor> {
    let purchasing = part.purchaseable && roles.can_view("purchase_order");
    vec![
        PanelDescriptor::new("details", "Part Details").icon("part"),
        PanelDescriptor::new("stock", "Stock")
            .icon("stock")
            .hidden_if(!roles.can_view("stock"))
            .notification_dot(part.in_stock.is_some_and(|q| q <= 0.0)),
        PanelDescriptor::new("suppliers", "Suppliers").hidden_if(!purchasing),
        PanelDescriptor::new("purchase_orders", "Purchase Orders").hidden_if(!purchasing),
        PanelDescriptor::new("sales_orders", "Sales Orders")
            .hidden_if(!part.salable || !roles.can_view("sales_order")),
        PanelDescriptor::new("builds", "Build Orders")
            .hidden_if(!part.assembly || !roles.can_view("build")),
        PanelDescriptor::new("notes", "Notes"),
    ]
}

pub fn part_panel_groups() -> Vec<PanelGroupSpec> {
    vec![
        PanelGroupSpec::new("inventory", "Inventory", &["details", "stock"]),
        PanelGroupSpec::new(
            "orders",
            "Orders",
            &["suppliers", "purchase_orders", "sales_orders", "builds"],
        ),
    ]
}

#[derive(Clone, Copy)]
pub struct PartDetailsViewModel {
    pub pk: i64,
    pub part: RwSignal<Option<Part>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
}

impl PartDetailsViewModel {
    pub fn new(pk: i64) -> Self {
        Self {
            pk,
            part: RwSignal::new(None),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    /// Fetch the part; `on_loaded` runs after every successful load
    pub fn load(&self, on_loaded: impl Fn(&Part) + 'static) {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            let result = model::fetch_part(this.pk).await;
            let _ = this.loading.try_set(false);
            match result {
                Ok(part) => {
                    on_loaded(&part);
                    let _ = this.error.try_set(None);
                    let _ = this.part.try_set(Some(part));
                }
                Err(e) => {
                    log::error!("Failed to load part {}: {}", this.pk, e);
                    let _ = this.error.try_set(Some(e));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::panels::compose_panels;
    use serde_json::json;

    fn part(flags: serde_json::Value) -> Part {
        let mut record = json!({"pk": 1, "name": "Widget"});
        if let (Some(target), Some(extra)) = (record.as_object_mut(), flags.as_object()) {
            target.extend(extra.clone());
        }
        serde_json::from_value(record).unwrap()
    }

    fn roles(names: &[&str]) -> UserRoles {
        let mut roles = UserRoles::default();
        for name in names {
            roles
                .roles
                .insert(name.to_string(), Some(vec!["view".to_string()]));
        }
        roles
    }

    fn visible(panels: &[PanelDescriptor]) -> Vec<&str> {
        panels
            .iter()
            .filter(|p| !p.hidden)
            .map(|p| p.name.as_str())
            .collect()
    }

    #[test]
    fn plain_part_shows_inventory_panels_only() {
        let panels = part_panels(&part(json!({})), &roles(&["stock", "purchase_order"]));
        assert_eq!(visible(&panels), vec!["details", "stock", "notes"]);
    }

    #[test]
    fn order_panels_follow_part_flags_and_roles() {
        let p = part(json!({"purchaseable": true, "salable": true, "assembly": true}));

        let all = part_panels(&p, &roles(&["stock", "purchase_order", "sales_order", "build"]));
        assert_eq!(all.iter().filter(|p| !p.hidden).count(), 7);

        let no_purchasing = part_panels(&p, &roles(&["stock", "sales_order", "build"]));
        assert_eq!(
            visible(&no_purchasing),
            vec!["details", "stock", "sales_orders", "builds", "notes"]
        );
    }

    #[test]
    fn empty_stock_raises_notification() {
        let p = part(json!({"in_stock": 0.0}));
        let panels = part_panels(&p, &roles(&["stock"]));
        assert!(panels[1].notification_dot);
    }

    #[test]
    fn groups_cover_static_panels() {
        let layout = compose_panels(
            part_panels(&part(json!({})), &UserRoles::default()),
            &part_panel_groups(),
            &[],
        );
        let ids: Vec<_> = layout.groups.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["inventory", "orders", "ungrouped"]);
        assert_eq!(layout.groups[2].panels, vec!["notes"]);
    }
}
