use chrono::{NaiveDate, NaiveDateTime};
use coworking_core::domain::models::booking::BookingWindow;
use coworking_core::domain::models::space::{NewSpaceParams, Space, SpaceConstraints};

pub fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

pub fn window(start: NaiveDateTime, end: NaiveDateTime) -> BookingWindow {
    BookingWindow::new(start, end, 0, 0).unwrap()
}

#[allow(dead_code)]
pub fn meeting_room(constraints: SpaceConstraints) -> Space {
    Space::new(NewSpaceParams {
        tenant_id: "tenant-1".to_string(),
        slug: "focus-room".to_string(),
        name: "Focus Room".to_string(),
        location: Some("2nd floor".to_string()),
        timezone: "Europe/Berlin".to_string(),
        constraints,
    })
}
