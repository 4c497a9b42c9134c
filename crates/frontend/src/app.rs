//! Entry points called by the hosting page
//!
//! Each `mount_*` function renders one widget into an existing element and
//! returns a [`WidgetHandle`]. Unmounting the handle disposes the widget's
//! state, timers and window listeners.

use crate::dashboards::d100_attendance_summary::AttendanceWidgetConfig;
use crate::dashboards::AttendanceSummaryDashboard;
use crate::domain::a100_employee_incentive::ui::IncentiveEditor;
use crate::domain::a100_employee_incentive::IncentiveEditorConfig;
use crate::domain::a101_ph_location::ui::AddressFields;
use crate::domain::a101_ph_location::AddressFieldsConfig;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use std::any::Any;
use thaw::ConfigProvider;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// A mounted widget; dropping or unmounting it removes the widget
#[wasm_bindgen]
pub struct WidgetHandle {
    mounted: Option<Box<dyn Any>>,
}

#[wasm_bindgen]
impl WidgetHandle {
    pub fn unmount(&mut self) {
        if self.mounted.take().is_some() {
            log::debug!("Widget unmounted");
        }
    }
}

fn root_element(root_id: &str) -> Result<HtmlElement, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(root_id))
        .ok_or_else(|| JsValue::from_str(&format!("Element #{} not found", root_id)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("Element #{} is not an HTML element", root_id)))
}

/// Missing or `undefined` config means all defaults
fn parse_config<T: DeserializeOwned + Default>(config: JsValue) -> Result<T, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(config).map_err(JsValue::from)
}

fn mount<F, V>(root_id: &str, widget: F) -> Result<WidgetHandle, JsValue>
where
    F: FnOnce() -> V + Send + 'static,
    V: IntoView + 'static,
{
    let root = root_element(root_id)?;
    let handle = leptos::mount::mount_to(root, move || {
        view! { <ConfigProvider>{widget()}</ConfigProvider> }
    });
    log::debug!("Widget mounted into #{}", root_id);
    Ok(WidgetHandle {
        mounted: Some(Box::new(handle)),
    })
}

#[wasm_bindgen]
pub fn mount_attendance_summary(root_id: &str, config: JsValue) -> Result<WidgetHandle, JsValue> {
    let config: AttendanceWidgetConfig = parse_config(config)?;
    mount(root_id, move || view! { <AttendanceSummaryDashboard config=config /> })
}

#[wasm_bindgen]
pub fn mount_incentive_editor(root_id: &str, config: JsValue) -> Result<WidgetHandle, JsValue> {
    let config: IncentiveEditorConfig = parse_config(config)?;
    mount(root_id, move || view! { <IncentiveEditor config=config /> })
}

#[wasm_bindgen]
pub fn mount_address_fields(root_id: &str, config: JsValue) -> Result<WidgetHandle, JsValue> {
    let config: AddressFieldsConfig = parse_config(config)?;
    mount(root_id, move || view! { <AddressFields config=config /> })
}
