//! Label / report printing for a selection of items

use contracts::shared::form_fields::{EntityForm, OptionsSchema};
use contracts::system::printing::{print_form, PrintKind};
use gloo_net::http::Method;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use thaw::*;

use crate::shared::api::{options_json, submit_json};
use crate::shared::api_utils::api_url;
use crate::shared::components::{FormField, ModalFrame};
use crate::shared::forms::FormController;

#[component]
pub fn PrintDialog(
    kind: PrintKind,
    /// Model type of the items (`stockitem`, `part`, ...)
    #[prop(into)]
    model_type: String,
    items: Vec<i64>,
    on_close: Callback<()>,
) -> impl IntoView {
    let controller = FormController::new();
    let load_error = RwSignal::new(None::<String>);
    let printing = RwSignal::new(false);
    let output = RwSignal::new(None::<String>);

    spawn_local(async move {
        let built = options_json(kind.endpoint())
            .await
            .and_then(|body| OptionsSchema::from_response(&body).map_err(|e| e.to_string()))
            .and_then(|schema| {
                EntityForm::new(print_form(&schema, kind, &model_type, &items), Vec::new())
                    .map_err(|e| e.to_string())
            });
        match built {
            Ok(form) => controller.install(form),
            Err(e) => {
                log::error!("Cannot prepare {} form: {}", kind.display_name(), e);
                let _ = load_error.try_set(Some(e));
            }
        }
    });

    let submit = move |_| {
        if printing.get_untracked() || !controller.is_ready() {
            return;
        }
        printing.set(true);
        let body = Value::Object(controller.submission());
        spawn_local(async move {
            let result = submit_json(Method::POST, kind.endpoint(), &body).await;
            let _ = printing.try_set(false);
            match result {
                // the output file may still be rendering; "output" is set once complete
                Ok(data) => {
                    let url = data.get("output").and_then(Value::as_str).map(str::to_string);
                    log::info!("{} started: {}", kind.display_name(), data);
                    let _ = output.try_set(url.or_else(|| Some(String::new())));
                }
                Err(errors) => controller.set_errors(&errors),
            }
        });
    };

    let field_names = move || {
        controller
            .fields
            .with(|f| f.names().into_iter().map(str::to_string).collect::<Vec<_>>())
    };

    view! {
        <ModalFrame on_close=on_close modal_class="modal--form">
            <div class="modal-header">
                <h2 class="modal-title">{kind.display_name()}</h2>
            </div>
            <div class="modal-body">
                {move || load_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || output.get().map(|url| {
                    if url.is_empty() {
                        view! { <div class="alert alert--info">"Printing started"</div> }.into_any()
                    } else {
                        view! {
                            <div class="alert alert--success">
                                <a href=api_url(&url) target="_blank">"Open output"</a>
                            </div>
                        }
                        .into_any()
                    }
                })}
                {move || controller.errors.with(|errors| {
                    errors.general.iter().map(|msg| view! { <div class="alert alert--error">{msg.clone()}</div> }).collect_view()
                })}
                <For
                    each=field_names
                    key=|name| name.clone()
                    children=move |name| {
                        let error_name = name.clone();
                        view! {
                            <FormField
                                field=controller.field(&name)
                                error=Signal::derive(move || {
                                    controller.errors.with(|e| e.field(&error_name).map(str::to_string))
                                })
                                on_change=Callback::new(move |value| controller.set_value(&name, value))
                            />
                        }
                    }
                />
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Close"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || printing.get() || load_error.with(Option::is_some))
                    on_click=submit
                >
                    "Print"
                </Button>
            </div>
        </ModalFrame>
    }
}
