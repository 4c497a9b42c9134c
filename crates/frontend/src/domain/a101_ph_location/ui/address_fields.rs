use crate::domain::a101_ph_location::api;
use crate::domain::a101_ph_location::cascade::{ApplyOutcome, FetchRequest, LocationCascade};
use crate::domain::a101_ph_location::AddressFieldsConfig;
use contracts::domain::a101_ph_location::LocationRank;
use leptos::prelude::*;

/// Fetch the options answering `request` and keep priming down the chain
///
/// Failures are logged and leave the list as it was.
fn load_options(
    cascade: RwSignal<LocationCascade>,
    base_url: StoredValue<String>,
    request: FetchRequest,
) {
    let Some(base) = base_url.try_get_value() else {
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        let options = match api::fetch_options(&base, request.rank, &request.parent_code).await {
            Ok(options) => options,
            Err(e) => {
                log::error!(
                    "Error fetching {} options: {}",
                    request.rank.display_name(),
                    e
                );
                return;
            }
        };

        match cascade.try_update(|c| c.apply_options(&request, options)) {
            Some(ApplyOutcome::Applied { next: Some(next) }) => {
                load_options(cascade, base_url, next)
            }
            Some(ApplyOutcome::Applied { next: None }) => {}
            Some(ApplyOutcome::Stale) => log::debug!(
                "Dropping stale {} options for parent '{}'",
                request.rank.display_name(),
                request.parent_code
            ),
            None => log::debug!("Address fields disposed before options arrived"),
        }
    });
}

/// Region / province / city / barangay inputs with dependent option lists
#[component]
pub fn AddressFields(config: AddressFieldsConfig) -> impl IntoView {
    let cascade = RwSignal::new(LocationCascade::new(
        config.regions.clone(),
        config.initial_values(),
    ));
    let base_url = StoredValue::new(config.base_url.clone());

    let on_value = move |rank: LocationRank, value: String| {
        if let Some(request) = cascade.try_update(|c| c.set_value(rank, value)).flatten() {
            load_options(cascade, base_url, request);
        }
    };

    // Editing an existing record: resolve stored values without user input
    if let Some(request) = cascade.try_update(|c| c.prime()).flatten() {
        load_options(cascade, base_url, request);
    }

    let fields = LocationRank::ALL
        .into_iter()
        .map(|rank| {
            let (input_id, list_id) = config.element_ids(rank);
            let input_id = input_id.to_string();
            let list_id = list_id.to_string();
            let name = config.input_name(rank);

            view! {
                <div class="address-field">
                    <label for=input_id.clone()>{rank.display_name()}</label>
                    <input
                        id=input_id
                        type="text"
                        name=name
                        list=list_id.clone()
                        autocomplete="off"
                        prop:value=move || cascade.with(|c| c.value(rank).to_string())
                        prop:disabled=move || cascade.with(|c| !c.is_enabled(rank))
                        on:input=move |ev| on_value(rank, event_target_value(&ev))
                    />
                    <datalist id=list_id>
                        {move || {
                            cascade.with(|c| {
                                c.options(rank)
                                    .iter()
                                    .map(|option| {
                                        view! {
                                            <option
                                                value=option.name.clone()
                                                data-code=option.code.clone()
                                            ></option>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </datalist>
                </div>
            }
        })
        .collect_view();

    view! { <div class="address-fields">{fields}</div> }
}
