use crate::core::data::viewport::Viewport;

/// One row to evaluate, and the row that receives a copy of it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RowPlan {
    pub y: i32,
    pub mirror: Option<i32>,
}

/// Lists the centre-relative rows a pass has to evaluate.
///
/// With `mirror` set only rows `y <= 0` are evaluated and each is copied to
/// `-y` when that row exists, which still covers every row of the viewport.
#[must_use]
pub fn plan_rows(viewport: Viewport, mirror: bool) -> Vec<RowPlan> {
    if viewport.is_empty() {
        return Vec::new();
    }

    let rows = viewport.y_range();

    if !mirror {
        return rows.map(|y| RowPlan { y, mirror: None }).collect();
    }

    (rows.start..=0)
        .map(|y| RowPlan {
            y,
            mirror: (y != 0 && rows.contains(&-y)).then_some(-y),
        })
        .collect()
}
