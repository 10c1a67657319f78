use contracts::domain::entity_form;
use contracts::shared::form_fields::{FormContext, FormMode, ValidationErrors};
use gloo_net::http::Method;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use thaw::*;

use super::controller::FormController;
use crate::shared::api::{get_value, submit_json};
use crate::shared::components::{FormField, ModalFrame};
use crate::shared::settings::use_feature_flags;

/// Create or edit dialog for any model with a form builder.
///
/// `endpoint` is the model's list endpoint (`/api/stock/`); an edit loads and
/// patches `{endpoint}{pk}/`.
#[component]
pub fn EntityFormDialog(
    #[prop(into)] title: String,
    #[prop(into)] model: String,
    #[prop(into)] endpoint: String,
    mode: FormMode,
    #[prop(optional)] pk: Option<i64>,
    /// Initial values and duplicate source for create mode
    #[prop(optional)]
    context: FormContext,
    on_close: Callback<()>,
    on_saved: Callback<Value>,
) -> impl IntoView {
    let flags = use_feature_flags().flags.get_untracked();
    let controller = FormController::new();
    let load_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let detail_path = pk.map(|pk| format!("{}{}/", endpoint, pk));
    let submit_path = detail_path.clone().unwrap_or_else(|| endpoint.clone());

    {
        let model = model.clone();
        let detail_path = detail_path.clone();
        spawn_local(async move {
            let context = match (mode, detail_path) {
                (FormMode::Edit, Some(path)) => match get_value(&path, &[]).await {
                    Ok(record) => FormContext::from_record(record),
                    Err(e) => {
                        log::error!("Failed to load {}: {}", path, e);
                        let _ = load_error.try_set(Some(e));
                        return;
                    }
                },
                _ => context,
            };
            match entity_form(&model, mode, &context, &flags) {
                Ok(form) => controller.install(form),
                Err(e) => {
                    log::error!("Cannot build {} form: {}", model, e);
                    let _ = load_error.try_set(Some(e.to_string()));
                }
            }
        });
    }

    let submit = move |_| {
        if saving.get_untracked() || !controller.is_ready() {
            return;
        }
        saving.set(true);
        let body = Value::Object(controller.submission());
        let method = if mode.is_create() { Method::POST } else { Method::PATCH };
        let path = submit_path.clone();
        spawn_local(async move {
            let result = submit_json(method, &path, &body).await;
            let _ = saving.try_set(false);
            match result {
                Ok(saved) => on_saved.run(saved),
                Err(errors) => {
                    log::warn!("Submission to {} rejected: {}", path, errors);
                    controller.set_errors(&errors);
                }
            }
        });
    };

    let field_names = move || controller.fields.with(|f| f.names().into_iter().map(str::to_string).collect::<Vec<_>>());

    view! {
        <ModalFrame on_close=on_close modal_class="modal--form">
            <div class="modal-header">
                <h2 class="modal-title">{title}</h2>
                <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=move |_| on_close.run(())>
                    "Close"
                </Button>
            </div>
            <div class="modal-body">
                {move || load_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || controller.errors.with(|errors: &ValidationErrors| {
                    (!errors.general.is_empty()).then(|| view! {
                        <div class="alert alert--error">
                            {errors.general.iter().map(|msg| view! { <p>{msg.clone()}</p> }).collect_view()}
                        </div>
                    })
                })}
                <For
                    each=field_names
                    key=|name| name.clone()
                    children=move |name| {
                        let field = controller.field(&name);
                        let error_name = name.clone();
                        let error = Signal::derive(move || {
                            controller.errors.with(|e| e.field(&error_name).map(str::to_string))
                        });
                        view! {
                            <FormField
                                field=field
                                error=error
                                on_change=Callback::new(move |value| controller.set_value(&name, value))
                            />
                        }
                    }
                />
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || saving.get() || load_error.with(Option::is_some))
                    on_click=submit
                >
                    {move || if saving.get() { "Saving..." } else { "Submit" }}
                </Button>
            </div>
        </ModalFrame>
    }
}
