use crate::domain::a001_part::filters::{part_category_filters, part_filters};
use crate::domain::a003_stock_item::filters::{stock_filters, stock_test_filters};
use crate::domain::a004_stock_location::filters::stock_location_filters;
use crate::domain::a005_company::filters::company_filters;
use crate::domain::a006_supplier_part::filters::supplier_part_filters;
use crate::domain::a007_purchase_order::filters::purchase_order_filters;
use crate::domain::a008_sales_order::filters::sales_order_filters;
use crate::domain::a009_return_order::filters::return_order_filters;
use crate::domain::a010_transfer_order::filters::transfer_order_filters;
use crate::domain::a011_build_order::filters::build_order_filters;
use crate::domain::a012_project_code::filters::project_code_filters;
use crate::shared::settings::FeatureFlags;
use crate::system::users::user_filters;

use super::types::{filter_set, FilterSet, TableFilter};

/// Every table identifier the registry knows about
pub const KNOWN_TABLES: &[&str] = &[
    "build",
    "category",
    "company",
    "location",
    "part",
    "projectcode",
    "purchaseorder",
    "returnorder",
    "salesorder",
    "stock",
    "stocktests",
    "supplierpart",
    "transferorder",
    "users",
];

fn table_builder(table: &str, flags: &FeatureFlags) -> Option<Vec<TableFilter>> {
    let filters = match table {
        "build" => build_order_filters(flags),
        "category" => part_category_filters(),
        "company" => company_filters(),
        "location" => stock_location_filters(),
        "part" => part_filters(),
        "projectcode" => project_code_filters(),
        "purchaseorder" => purchase_order_filters(flags),
        "returnorder" => return_order_filters(flags),
        "salesorder" => sales_order_filters(flags),
        "stock" => stock_filters(flags),
        "stocktests" => stock_test_filters(),
        "supplierpart" => supplier_part_filters(),
        "transferorder" => transfer_order_filters(flags),
        "users" => user_filters(),
        _ => return None,
    };
    Some(filters)
}

/// Filters available for a table (identifier is case-insensitive).
///
/// An unknown identifier yields an empty set and a warning.
pub fn table_filters(table: &str, flags: &FeatureFlags) -> FilterSet {
    let key = table.trim().to_lowercase();
    match table_builder(&key, flags) {
        Some(filters) => filter_set(filters),
        None => {
            log::warn!("No table filters defined for table '{}'", table);
            FilterSet::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_filters::FilterType;
    use std::collections::BTreeSet;

    fn all_flag_combinations() -> Vec<FeatureFlags> {
        let mut out = Vec::new();
        for bits in 0..4u8 {
            out.push(FeatureFlags {
                stock_expiry: bits & 1 != 0,
                project_codes: bits & 2 != 0,
                ..FeatureFlags::default()
            });
        }
        out
    }

    fn keys(set: &FilterSet) -> BTreeSet<String> {
        set.keys().cloned().collect()
    }

    #[test]
    fn builders_produce_unique_names() {
        for flags in all_flag_combinations() {
            for table in KNOWN_TABLES {
                let raw = table_builder(table, &flags).unwrap();
                let unique: BTreeSet<_> = raw.iter().map(|f| f.name.clone()).collect();
                assert_eq!(raw.len(), unique.len(), "duplicate filter in '{table}'");
                assert!(!raw.is_empty(), "table '{table}' has no filters");
            }
        }
    }

    #[test]
    fn inferred_types_follow_precedence() {
        let flags = FeatureFlags {
            stock_expiry: true,
            project_codes: true,
            ..FeatureFlags::default()
        };
        for table in KNOWN_TABLES {
            for (name, filter) in table_filters(table, &flags) {
                assert_eq!(name, filter.name);
                let expected = if let Some(t) = filter.filter_type {
                    t
                } else if filter.api_url.is_some() && filter.model.is_some() {
                    FilterType::Api
                } else if filter.choices.is_some() || filter.choice_source.is_some() {
                    FilterType::Choice
                } else {
                    FilterType::Boolean
                };
                assert_eq!(filter.inferred_type(), expected, "{table}.{name}");
            }
        }
    }

    #[test]
    fn unknown_table_is_empty() {
        assert!(table_filters("no-such-table", &FeatureFlags::default()).is_empty());
        assert!(table_filters("", &FeatureFlags::default()).is_empty());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let flags = FeatureFlags::default();
        assert_eq!(
            keys(&table_filters("PurchaseOrder", &flags)),
            keys(&table_filters("purchaseorder", &flags))
        );
    }

    #[test]
    fn stock_scenario() {
        let expected: BTreeSet<String> = [
            "active",
            "assembly",
            "allocated",
            "available",
            "cascade",
            "depleted",
            "in_stock",
            "is_building",
            "include_variants",
            "installed",
            "sent_to_customer",
            "serialized",
            "serial",
            "serial_gte",
            "serial_lte",
            "status",
            "has_batch",
            "batch",
            "tracked",
            "has_purchase_price",
            "expiry_date_lte",
            "expiry_date_gte",
            "external",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let disabled = keys(&table_filters("STOCK", &FeatureFlags::default()));
        assert_eq!(disabled, expected);
        assert!(!disabled.contains("expired"));
        assert!(!disabled.contains("stale"));

        let enabled = keys(&table_filters(
            "Stock",
            &FeatureFlags {
                stock_expiry: true,
                ..FeatureFlags::default()
            },
        ));
        let added: BTreeSet<_> = enabled.difference(&disabled).cloned().collect();
        assert_eq!(
            added,
            ["expired", "stale"].iter().map(|s| s.to_string()).collect()
        );
        assert!(disabled.is_subset(&enabled));
    }

    #[test]
    fn project_code_flag_toggles_only_project_code_filters() {
        let gated: BTreeSet<String> = ["project_code", "has_project_code"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        for table in KNOWN_TABLES {
            let off = keys(&table_filters(table, &FeatureFlags::default()));
            let on = keys(&table_filters(
                table,
                &FeatureFlags {
                    project_codes: true,
                    ..FeatureFlags::default()
                },
            ));

            assert!(off.is_disjoint(&gated), "{table} leaks project code filters");
            let added: BTreeSet<_> = on.difference(&off).cloned().collect();
            assert!(off.is_subset(&on));
            assert!(
                added.is_empty() || added == gated,
                "{table} changed unexpected keys: {added:?}"
            );
        }

        for table in ["build", "purchaseorder", "salesorder", "returnorder", "transferorder"] {
            let on = keys(&table_filters(
                table,
                &FeatureFlags {
                    project_codes: true,
                    ..FeatureFlags::default()
                },
            ));
            assert!(gated.is_subset(&on), "{table} missing project code filters");
        }
    }

    #[test]
    fn remote_choice_filters_are_lazy() {
        let flags = FeatureFlags {
            project_codes: true,
            ..FeatureFlags::default()
        };
        let build = table_filters("build", &flags);
        for name in ["issued_by", "assigned_to", "project_code"] {
            assert!(build[name].has_lazy_choices(), "{name} should be lazy");
        }
        assert!(table_filters("location", &flags)["location_type"].has_lazy_choices());
    }
}
