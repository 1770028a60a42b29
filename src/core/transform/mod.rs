pub mod axis;
pub mod view_transform;
