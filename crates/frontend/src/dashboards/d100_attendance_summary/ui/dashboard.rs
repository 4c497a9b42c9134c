use super::donut::DonutChart;
use crate::dashboards::d100_attendance_summary::api;
use crate::dashboards::d100_attendance_summary::AttendanceWidgetConfig;
use chrono::Local;
use contracts::dashboards::d100_attendance_summary::{AttendancePeriod, AttendanceSummary};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;

const ACTIVE_TOGGLE_CLASS: &str = "bg-[#F8D146]";
const INACTIVE_TOGGLE_CLASS: &str = "bg-[#E1E1E1]";

fn toggle_class(period: AttendancePeriod, active: AttendancePeriod) -> String {
    let background = if period == active {
        ACTIVE_TOGGLE_CLASS
    } else {
        INACTIVE_TOGGLE_CLASS
    };
    format!("period-toggle {}", background)
}

/// Attendance donut with day/week/month toggles
#[component]
pub fn AttendanceSummaryDashboard(config: AttendanceWidgetConfig) -> impl IntoView {
    let active_period = RwSignal::new(config.initial_period);
    let summary = RwSignal::new(AttendanceSummary::default());
    let last_updated = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let endpoint = StoredValue::new(config.endpoint);
    // Bumped per request; only the newest response is rendered
    let generation = StoredValue::new(0u64);

    let initialize = move |period: AttendancePeriod| {
        let Some(current) = generation.try_update_value(|g| {
            *g += 1;
            *g
        }) else {
            return;
        };
        let Some(url_base) = endpoint.try_get_value() else {
            return;
        };
        loading.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            let data = api::get_attendance_summary_or_default(&url_base, period).await;

            if generation.try_get_value() != Some(current) {
                log::debug!("Dropping stale attendance response for '{}'", period);
                return;
            }
            summary.try_set(data);
            last_updated.try_set(Some(Local::now().format("%H:%M").to_string()));
            loading.try_set(false);
        });
    };

    initialize(active_period.get_untracked());

    // Periodic refresh; ends once the widget is unmounted and its signals are gone
    let interval_ms = config.refresh_interval_ms;
    if interval_ms > 0 {
        wasm_bindgen_futures::spawn_local(async move {
            loop {
                TimeoutFuture::new(interval_ms).await;
                let Some(period) = active_period.try_get_untracked() else {
                    log::debug!("Attendance widget disposed, stopping refresh");
                    break;
                };
                initialize(period);
            }
        });
    }

    let on_toggle = move |period: AttendancePeriod| {
        active_period.set(period);
        initialize(period);
    };

    view! {
        <Card class="attendance-summary">
            <div class="attendance-summary__toggles">
                {AttendancePeriod::all()
                    .into_iter()
                    .map(|period| {
                        view! {
                            <button
                                type="button"
                                class=move || toggle_class(period, active_period.get())
                                data-period=period.as_str()
                                on:click=move |_| on_toggle(period)
                            >
                                {period.display_name()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <DonutChart summary=summary />

            <div class="attendance-summary__footer">
                {move || {
                    if loading.get() {
                        "Loading...".to_string()
                    } else {
                        last_updated
                            .get()
                            .map(|t| format!("Updated at {}", t))
                            .unwrap_or_default()
                    }
                }}
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_class_marks_only_active_period() {
        assert_eq!(
            toggle_class(AttendancePeriod::Week, AttendancePeriod::Week),
            "period-toggle bg-[#F8D146]"
        );
        assert_eq!(
            toggle_class(AttendancePeriod::Day, AttendancePeriod::Week),
            "period-toggle bg-[#E1E1E1]"
        );
    }
}
