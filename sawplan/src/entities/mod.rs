mod part;
mod part_list;
mod plan;
mod row;
mod stock;

#[doc(inline)]
pub use part::Part;

#[doc(inline)]
pub use part_list::PartList;

#[doc(inline)]
pub use plan::CutPlan;

#[doc(inline)]
pub use row::Row;

#[doc(inline)]
pub use stock::Stock;
