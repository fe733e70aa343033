//! Tables module - source tables, validation and the reference dataset.

pub mod reference_data;
mod tables_model;


pub use reference_data::{dataset_2024, REFERENCE_ANNUAL_TARGET, REFERENCE_YEAR};
pub use tables_model::{
    MonthlyRecord, MonthlyTable, PartnerId, PartnerMonthlyRecord, PartnerTable, TreasuryDataset,
};
