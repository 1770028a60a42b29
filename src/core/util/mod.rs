pub mod plan_rows;
