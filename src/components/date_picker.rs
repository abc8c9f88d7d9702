//! Popover date picker with a month-grid calendar.

use chrono::{Datelike, NaiveDate, Utc};
use leptos::prelude::*;

const WEEKDAY_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Day cells for a month view: leading `None`s so the 1st lands under its
/// weekday column (weeks start on Sunday), then one `Some(day)` per day of
/// the month. Invalid year/month combinations yield an empty grid.
pub fn month_grid(year: i32, month: u32) -> Vec<Option<u32>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let lead = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(year, month);

    let mut cells = vec![None; lead];
    cells.extend((1..=days).map(Some));
    cells
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// Month shown when the picker opens without a selected date.
fn initial_view(selected: Option<NaiveDate>) -> (i32, u32) {
    let date = selected.unwrap_or_else(|| Utc::now().date_naive());
    (date.year(), date.month())
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

/// Button that opens a popover calendar; selecting a day runs `on_select`
/// with the chosen date and closes the popover.
#[component]
pub fn DatePicker(
    #[prop(into)] value: Signal<Option<NaiveDate>>,
    on_select: Callback<NaiveDate>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let view_month = RwSignal::new(initial_view(value.get_untracked()));

    let shift_month = move |delta: i32| {
        view_month.update(|(year, month)| {
            let index = *year * 12 + (*month as i32 - 1) + delta;
            *year = index.div_euclid(12);
            *month = index.rem_euclid(12) as u32 + 1;
        });
    };

    view! {
        <div class="relative">
            <button
                type="button"
                class="w-full px-3 py-2 text-sm text-left border border-gray-300 rounded-md bg-white hover:bg-gray-50"
                on:click=move |_| {
                    if !open.get_untracked() {
                        view_month.set(initial_view(value.get_untracked()));
                    }
                    open.update(|o| *o = !*o);
                }
            >
                {move || match value.get() {
                    Some(date) => date.format("%b %-d, %Y").to_string(),
                    None => "Pick a date".to_string(),
                }}
            </button>

            {move || open.get().then(|| {
                let (year, month) = view_month.get();
                view! {
                    <div class="absolute z-10 mt-1 p-3 bg-white border border-gray-300 rounded-md shadow-lg w-64">
                        <div class="flex items-center justify-between mb-2">
                            <button
                                type="button"
                                class="px-2 py-1 text-sm rounded hover:bg-gray-100"
                                on:click=move |_| shift_month(-1)
                            >
                                "<"
                            </button>
                            <span class="text-sm font-medium">
                                {format!("{} {}", month_name(month), year)}
                            </span>
                            <button
                                type="button"
                                class="px-2 py-1 text-sm rounded hover:bg-gray-100"
                                on:click=move |_| shift_month(1)
                            >
                                ">"
                            </button>
                        </div>
                        <div class="grid grid-cols-7 gap-1 text-center">
                            {WEEKDAY_HEADER.iter().map(|d| view! {
                                <span class="text-xs text-gray-400">{*d}</span>
                            }).collect_view()}
                            {month_grid(year, month).into_iter().map(|cell| match cell {
                                Some(day) => {
                                    let selected = value.get_untracked()
                                        == NaiveDate::from_ymd_opt(year, month, day);
                                    view! {
                                        <button
                                            type="button"
                                            class=if selected {
                                                "text-sm py-1 rounded bg-gray-900 text-white"
                                            } else {
                                                "text-sm py-1 rounded hover:bg-gray-100"
                                            }
                                            on:click=move |_| {
                                                if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                                                    on_select.run(date);
                                                }
                                                open.set(false);
                                            }
                                        >
                                            {day}
                                        </button>
                                    }.into_any()
                                }
                                None => view! { <span></span> }.into_any(),
                            }).collect_view()}
                        </div>
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_grid_day_counts() {
        let days = |year, month| month_grid(year, month).iter().flatten().count();
        assert_eq!(days(2026, 1), 31);
        assert_eq!(days(2026, 4), 30);
        assert_eq!(days(2025, 2), 28);
        // Leap year
        assert_eq!(days(2024, 2), 29);
    }

    #[test]
    fn test_month_grid_leading_blanks_align_the_first() {
        // 2026-01-01 is a Thursday: four leading blanks (Su..We).
        let grid = month_grid(2026, 1);
        assert_eq!(grid.iter().take_while(|c| c.is_none()).count(), 4);
        assert_eq!(grid[4], Some(1));

        // 2024-09-01 is a Sunday: no leading blanks.
        let grid = month_grid(2024, 9);
        assert_eq!(grid[0], Some(1));
    }

    #[test]
    fn test_month_grid_rejects_invalid_months() {
        assert!(month_grid(2026, 0).is_empty());
        assert!(month_grid(2026, 13).is_empty());
    }

    #[test]
    fn test_days_are_sequential() {
        let grid = month_grid(2026, 3);
        let days: Vec<u32> = grid.into_iter().flatten().collect();
        assert_eq!(days, (1..=31).collect::<Vec<_>>());
    }
}
