use crate::shared::table_filters::TableFilter;

pub fn project_code_filters() -> Vec<TableFilter> {
    vec![TableFilter::boolean("has_responsible", "Has Responsible")
        .description("Show project codes with a responsible owner")]
}
