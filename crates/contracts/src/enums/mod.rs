pub mod status_codes;

pub use status_codes::{
    BuildStatus, PurchaseOrderStatus, ReturnOrderStatus, SalesOrderStatus, StockStatus,
    TestResult, TransferOrderStatus,
};
