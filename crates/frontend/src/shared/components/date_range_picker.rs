use chrono::{Datelike, Duration, NaiveDate, Utc};
use contracts::domain::common::DateRange;
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::{from_input_value, to_input_value};

/// First and last day of a month
pub fn month_range(year: i32, month: u32) -> Option<DateRange> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(DateRange {
        date_from: Some(start),
        date_to: Some(next - Duration::days(1)),
    })
}

/// The month before the one `date` falls in
pub fn previous_month(date: NaiveDate) -> Option<DateRange> {
    if date.month() == 1 {
        month_range(date.year() - 1, 12)
    } else {
        month_range(date.year(), date.month() - 1)
    }
}

/// Two date inputs with "current month" / "previous month" shortcuts.
///
/// "Mes anterior" steps back from the selected start date, so repeated
/// clicks walk back month by month.
#[component]
pub fn DateRangePicker(
    #[prop(into)] range: Signal<DateRange>,
    on_change: Callback<DateRange>,
    #[prop(optional)] label: Option<&'static str>,
) -> impl IntoView {
    let set_from = move |raw: String| {
        let mut next = range.get_untracked();
        next.date_from = from_input_value(&raw);
        on_change.run(next);
    };
    let set_to = move |raw: String| {
        let mut next = range.get_untracked();
        next.date_to = from_input_value(&raw);
        on_change.run(next);
    };

    let current_month = move |_| {
        let today = Utc::now().date_naive();
        if let Some(month) = month_range(today.year(), today.month()) {
            on_change.run(month);
        }
    };

    let month_back = move |_| {
        let anchor = range
            .get_untracked()
            .date_from
            .unwrap_or_else(|| Utc::now().date_naive());
        if let Some(month) = previous_month(anchor) {
            on_change.run(month);
        }
    };

    let invalid = move || !range.with(|r| r.is_valid());

    view! {
        <div class="date-range-picker" class:date-range-picker--invalid=invalid>
            {label.map(|l| view! { <label class="date-range-picker__label">{l}</label> })}
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=move || range.with(|r| to_input_value(r.date_from))
                    on:change=move |ev| set_from(event_target_value(&ev))
                />
                <span>"—"</span>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=move || range.with(|r| to_input_value(r.date_to))
                    on:change=move |ev| set_to(event_target_value(&ev))
                />
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=current_month>
                    "Mes actual"
                </Button>
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=month_back>
                    "Mes anterior"
                </Button>
            </Flex>
            <Show when=invalid>
                <div class="form-group__error">"La fecha inicial es posterior a la final"</div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_month_range() {
        let feb = month_range(2024, 2).unwrap();
        assert_eq!(feb.date_from, Some(d("2024-02-01")));
        assert_eq!(feb.date_to, Some(d("2024-02-29")));

        let dec = month_range(2023, 12).unwrap();
        assert_eq!(dec.date_to, Some(d("2023-12-31")));
        assert!(month_range(2024, 13).is_none());
    }

    #[test]
    fn test_previous_month_crosses_year() {
        let prev = previous_month(d("2024-01-15")).unwrap();
        assert_eq!(prev.date_from, Some(d("2023-12-01")));
        assert_eq!(prev.date_to, Some(d("2023-12-31")));
    }
}
