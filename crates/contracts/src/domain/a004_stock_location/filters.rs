use crate::shared::choices::RemoteChoices;
use crate::shared::table_filters::TableFilter;

pub fn stock_location_filters() -> Vec<TableFilter> {
    vec![
        TableFilter::boolean("cascade", "Include Sublocations")
            .description("Include sublocations in results"),
        TableFilter::boolean("structural", "Structural")
            .description("Show structural locations"),
        TableFilter::boolean("external", "External").description("Show external locations"),
        TableFilter::boolean("has_location_type", "Has Location Type"),
        TableFilter::remote("location_type", "Location Type", RemoteChoices::location_types())
            .description("Filter by location type"),
    ]
}
