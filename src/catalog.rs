//! Crop schedule template catalogs.

use async_trait::async_trait;

use crate::error::CalendarResult;
use crate::schedule::{ActivitySchedule, CropSchedule};

/// Source of per-crop yearly activity templates.
///
/// Read-only; loaded once per calendar session. A failing catalog surfaces
/// [`crate::CalendarError::CatalogLoad`] and the calendar opens with user
/// events only, so the caller can offer a retry.
#[async_trait]
pub trait TemplateCatalog: Send + Sync {
    async fn crop_schedules(&self) -> CalendarResult<Vec<CropSchedule>>;
}

/// The built-in crop-care catalog.
///
/// Covers the staple crops the application ships schedules for; embedding
/// applications with their own template source implement
/// [`TemplateCatalog`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

#[async_trait]
impl TemplateCatalog for StaticCatalog {
    async fn crop_schedules(&self) -> CalendarResult<Vec<CropSchedule>> {
        Ok(builtin_schedules())
    }
}

fn builtin_schedules() -> Vec<CropSchedule> {
    // Rows are static and in range, so construction cannot fail
    let row = |activity: &str, description: &str, month: u32, day: u32| {
        ActivitySchedule::new(activity, description, month, day).expect("static schedule row")
    };

    vec![
        CropSchedule::new(
            "Wheat",
            vec![
                row("Sowing", "Sow seeds 5cm deep in rows 20cm apart", 11, 15),
                row(
                    "First irrigation",
                    "Irrigate at crown root initiation, about three weeks after sowing",
                    12, 6,
                ),
                row(
                    "Fertilizer top dressing",
                    "Apply the nitrogen split dose before the second irrigation",
                    1, 10,
                ),
                row("Weeding", "Remove broadleaf weeds between rows", 1, 25),
                row("Pest inspection", "Scout flag leaves for aphids", 2, 20),
                row("Harvesting", "Harvest once grain moisture falls below 14%", 4, 10),
            ],
        ),
        CropSchedule::new(
            "Rice",
            vec![
                row("Nursery sowing", "Raise seedlings in a puddled nursery bed", 5, 20),
                row("Transplanting", "Transplant 25-day seedlings, 2-3 per hill", 6, 15),
                row("Fertilizer application", "Basal NPK dose at transplanting", 6, 15),
                row("Weeding", "First hand weeding three weeks after transplanting", 7, 8),
                row("Pest control", "Monitor for stem borer and leaf folder", 8, 5),
                row("Harvesting", "Drain the field and harvest at full maturity", 10, 25),
            ],
        ),
        CropSchedule::new(
            "Maize",
            vec![
                row("Field preparation", "Plough twice and level the field", 6, 1),
                row("Sowing", "Dibble seeds 4cm deep at 60x20cm spacing", 6, 20),
                row("Thinning", "Thin to one healthy plant per hill", 7, 5),
                row("Fertilizer top dressing", "Urea side dressing at knee-high stage", 7, 20),
                row("Irrigation", "Critical watering at tasseling", 8, 15),
                row("Harvesting", "Harvest when husks dry and kernels harden", 10, 10),
            ],
        ),
        CropSchedule::new(
            "Tomato",
            vec![
                row("Nursery sowing", "Sow in trays under shade netting", 7, 1),
                row("Transplanting", "Move 4-week seedlings to ridges", 8, 1),
                row("Staking", "Stake plants before first flowering", 8, 25),
                row("Pest control", "Spray neem solution against fruit borer", 9, 10),
                row("Pruning", "Remove side shoots below the first truss", 9, 20),
                row("Harvesting", "Pick fruits at breaker stage every few days", 11, 1),
            ],
        ),
        CropSchedule::new(
            "Potato",
            vec![
                row("Field preparation", "Prepare ridges with well-rotted manure", 10, 1),
                row("Planting", "Plant sprouted tubers 20cm apart on ridges", 10, 20),
                row("Earthing up", "Cover stolons with soil at 25cm plant height", 11, 25),
                row("Irrigation", "Light frequent irrigation, keep ridges moist", 12, 10),
                row("Pest inspection", "Watch for late blight after cool, wet spells", 1, 5),
                row("Harvesting", "Harvest two weeks after haulm cutting", 2, 15),
            ],
        ),
    ]
}
