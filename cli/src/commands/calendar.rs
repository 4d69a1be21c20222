//! Terminal preview of the month grid: which days the browser would
//! allow selecting, with ineligible days rendered dimmed.

use crate::settings::Settings;
use chrono::Local;
use styleday_core::calendar::{EligibilityWindow, MonthCursor, MonthGrid};

/// Render the month grid `offset` whole months away from the current one.
/// The cursor moves without bound; eligibility is applied per day.
pub fn run(settings: &Settings, offset: i32) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let mut cursor = MonthCursor::containing(today);
    for _ in 0..offset.abs() {
        cursor = if offset >= 0 { cursor.next() } else { cursor.prev() };
    }

    let window = EligibilityWindow::new(settings.min_date()?, settings.boundary, today);
    let grid = MonthGrid::build(cursor, &window);

    println!("{}", grid.label);
    println!(" Su  Mo  Tu  We  Th  Fr  Sa");

    let mut column = 0;
    for _ in 0..grid.leading_blanks {
        print!("  . ");
        column += 1;
    }
    for cell in &grid.days {
        if cell.selectable {
            print!("{:>3} ", cell.day);
        } else {
            print!("({:>2})", cell.day);
        }
        column += 1;
        if column % 7 == 0 {
            println!();
        }
    }
    if column % 7 != 0 {
        println!();
    }
    println!("(..) not selectable");
    Ok(())
}
