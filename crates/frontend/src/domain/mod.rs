//! List and detail pages per inventory entity

pub mod a001_part;
pub mod a003_stock_item;
pub mod a004_stock_location;
pub mod a005_company;
pub mod a006_supplier_part;
pub mod a007_purchase_order;
pub mod a008_sales_order;
pub mod a009_return_order;
pub mod a010_transfer_order;
pub mod a011_build_order;
pub mod a012_project_code;
