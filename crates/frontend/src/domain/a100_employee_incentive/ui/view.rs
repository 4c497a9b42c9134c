use super::view_model::IncentiveEditorViewModel;
use crate::domain::a100_employee_incentive::IncentiveEditorConfig;
use contracts::domain::a100_employee_incentive::{EmployeePay, IncentiveType};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Window event fired by the page whenever attendance records change
pub const ATTENDANCE_UPDATED_EVENT: &str = "attendanceUpdated";

fn popup_class(open: bool) -> &'static str {
    if open {
        "incentive-popup visible opacity-100"
    } else {
        "incentive-popup invisible opacity-0"
    }
}

/// Employee table with per-row salary and the add/deduct popup
#[component]
pub fn IncentiveEditor(config: IncentiveEditorConfig) -> impl IntoView {
    let vm = IncentiveEditorViewModel::new(config);
    vm.load_from_storage();

    // An optional event detail carries the refreshed employee list
    let handle = window_event_listener_untyped(ATTENDANCE_UPDATED_EVENT, move |ev| {
        let detail = ev
            .dyn_ref::<web_sys::CustomEvent>()
            .map(|custom| custom.detail())
            .filter(|detail| !detail.is_undefined() && !detail.is_null());

        match detail.map(serde_wasm_bindgen::from_value::<Vec<EmployeePay>>) {
            Some(Ok(employees)) => vm.replace_employees(employees),
            Some(Err(e)) => {
                log::warn!("Ignoring malformed {} detail: {}", ATTENDANCE_UPDATED_EVENT, e);
                vm.update_all_salaries();
            }
            None => vm.update_all_salaries(),
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="incentive-editor">
            <table class="incentive-editor__table">
                <thead>
                    <tr>
                        <th>"Employee"</th>
                        <th>"Rate / day"</th>
                        <th>"Days"</th>
                        <th>"Salary"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || vm.employees.get()
                        key=|employee| employee.id.clone()
                        children=move |employee| view! { <EmployeeRow vm=vm employee=employee /> }
                    />
                </tbody>
            </table>
            <IncentivePopup vm=vm />
        </div>
    }
}

#[component]
fn EmployeeRow(vm: IncentiveEditorViewModel, employee: EmployeePay) -> impl IntoView {
    // Rows are keyed by id; every cell re-reads the current pay data
    let id = employee.id;
    let id_for_name = id.clone();
    let id_for_rate = id.clone();
    let id_for_days = id.clone();
    let id_for_salary = id.clone();
    let id_for_indicator = id.clone();
    let id_for_click = id.clone();

    view! {
        <tr>
            <td>{move || vm.name_text(&id_for_name)}</td>
            <td>{move || vm.rate_text(&id_for_rate)}</td>
            <td>{move || vm.attendance_text(&id_for_days)}</td>
            <td>
                <span id=format!("salary-{}", id)>
                    {move || vm.salary_text(&id_for_salary)}
                </span>
                <span
                    id=format!("incentive-indicator-{}", id)
                    class="incentive-indicator"
                    title="Has add/deduct adjustment"
                    style=move || {
                        if vm.has_incentive_indicator(&id_for_indicator) {
                            "display: inline-block;"
                        } else {
                            "display: none;"
                        }
                    }
                >
                    "●"
                </span>
            </td>
            <td>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.show_incentive_popup(&id_for_click)
                >
                    "Add/Deduct"
                </Button>
            </td>
        </tr>
    }
}

#[component]
fn IncentivePopup(vm: IncentiveEditorViewModel) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(employee_id) = vm.editing.get_untracked() {
            vm.save_incentives(&employee_id);
        }
    };

    let type_radio = move |kind: IncentiveType| {
        view! {
            <label class="incentive-popup__radio">
                <input
                    type="radio"
                    id=kind.as_str()
                    name="incentive-type"
                    value=kind.as_str()
                    prop:checked=move || vm.form_type.get() == Some(kind)
                    on:change=move |_| vm.form_type.set(Some(kind))
                />
                {kind.display_name()}
            </label>
        }
    };

    view! {
        <div
            id="incentive-popup"
            class=move || popup_class(vm.is_popup_open())
            data-employee-id=move || vm.editing.get().unwrap_or_default()
        >
            <form on:submit=on_submit>
                <h1>{move || vm.popup_title()}</h1>
                <div class="incentive-popup__types">
                    {type_radio(IncentiveType::Add)}
                    {type_radio(IncentiveType::Subtract)}
                </div>
                <input
                    type="text"
                    inputmode="decimal"
                    id="field"
                    placeholder="Amount"
                    prop:value=move || vm.form_amount.get()
                    on:input=move |ev| vm.form_amount.set(event_target_value(&ev))
                />
                <div class="incentive-popup__actions">
                    <input
                        type="button"
                        value="Cancel"
                        on:click=move |_| vm.cancel_edit_incentives()
                    />
                    <input type="submit" value="Confirm" />
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_class_toggles_visibility() {
        assert_eq!(popup_class(true), "incentive-popup visible opacity-100");
        assert_eq!(popup_class(false), "incentive-popup invisible opacity-0");
    }
}
