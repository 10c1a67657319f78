//! Input widget for one form field, picked by field kind

use contracts::shared::choices::{scalar_to_string, Choice, ChoiceState, RemoteChoices};
use contracts::shared::form_fields::{FieldDescriptor, FieldKind};
use leptos::prelude::*;
use serde_json::Value;

use crate::shared::choices::RemoteChoiceLoader;
use crate::shared::icons::icon;

/// Label fields used for the options of a related lookup
fn related_label_fields(model: Option<&str>) -> &'static [&'static str] {
    match model {
        Some("part") => &["full_name"],
        Some("stockitem") => &["serial", "batch", "quantity"],
        Some("supplierpart") => &["SKU"],
        Some("manufacturerpart") => &["MPN"],
        Some("stocklocation") => &["pathstring"],
        Some("projectcode") => &["code"],
        Some("user") => &["username"],
        Some("purchaseorder") | Some("salesorder") | Some("returnorder") | Some("build") => {
            &["reference"]
        }
        _ => &["name"],
    }
}

/// Lookup source of a related field, including its current filters
pub fn related_source(field: &FieldDescriptor) -> Option<RemoteChoices> {
    let url = field.api_url.as_ref()?;
    let mut source = RemoteChoices::new(url.clone(), related_label_fields(field.model.as_deref()));
    // plugins are referenced by slug
    if field.model.as_deref() == Some("pluginconfig") {
        source.value_field = "key".to_string();
    }
    Some(
        field
            .filters
            .iter()
            .fold(source, |source, (k, v)| source.param(k.clone(), v.clone())),
    )
}

/// Parse an input string into the JSON value of a field kind; empty input clears the value
pub fn parse_input(kind: FieldKind, raw: &str) -> Option<Value> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match kind {
        FieldKind::Integer | FieldKind::Related => Some(
            raw.parse::<i64>()
                .map(Value::from)
                .unwrap_or_else(|_| Value::String(raw.to_string())),
        ),
        FieldKind::Decimal => Some(
            raw.parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(raw.to_string())),
        ),
        FieldKind::Boolean => Some(Value::Bool(raw == "true")),
        _ => Some(Value::String(raw.to_string())),
    }
}

#[component]
pub fn FormField(
    #[prop(into)]
    field: Signal<FieldDescriptor>,

    on_change: Callback<Option<Value>>,

    /// Validation message from the last submit
    #[prop(optional, into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    let kind = field.with_untracked(|f| f.kind);
    let text_value = Signal::derive(move || {
        field.with(|f| f.value.as_ref().and_then(scalar_to_string).unwrap_or_default())
    });
    let disabled = Signal::derive(move || field.with(|f| f.disabled));
    let emit = move |raw: String| on_change.run(parse_input(kind, &raw));

    let input = match kind {
        FieldKind::Boolean => view! {
            <input
                type="checkbox"
                prop:checked=move || field.with(|f| f.value == Some(Value::Bool(true)))
                disabled=disabled
                on:change=move |ev| on_change.run(Some(Value::Bool(event_target_checked(&ev))))
            />
        }
        .into_any(),
        FieldKind::Text => view! {
            <textarea
                class="form__textarea"
                prop:value=text_value
                disabled=disabled
                on:change=move |ev| emit(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldKind::Choice => {
            let choices = field.with_untracked(|f| f.choices.clone().unwrap_or_default());
            view! { <ChoiceInput choices=choices value=text_value disabled=disabled on_change=Callback::new(emit) /> }
                .into_any()
        }
        FieldKind::Related => view! {
            <RelatedInput field=field value=text_value disabled=disabled on_change=Callback::new(emit) />
        }
        .into_any(),
        other => {
            let (input_type, step) = match other {
                FieldKind::Integer => ("number", Some("1")),
                FieldKind::Decimal => ("number", Some("any")),
                FieldKind::Date => ("date", None),
                FieldKind::DateTime => ("datetime-local", None),
                FieldKind::Url => ("url", None),
                FieldKind::Email => ("email", None),
                _ => ("text", None),
            };
            view! {
                <input
                    type=input_type
                    step=step
                    class="form__input"
                    placeholder=move || field.with(|f| f.placeholder.clone())
                    prop:value=text_value
                    disabled=disabled
                    on:change=move |ev| emit(event_target_value(&ev))
                />
            }
            .into_any()
        }
    };

    view! {
        <div
            class="form__group"
            class:form__group--hidden=move || field.with(|f| f.hidden)
            class:form__group--error=move || error.with(Option::is_some)
        >
            <label class="form__label">
                {move || field.with(|f| f.icon.clone()).map(|name| icon(&name))}
                {move || field.with(|f| f.label.clone())}
                {move || field.with(|f| f.required).then(|| view! { <span class="form__required">"*"</span> })}
            </label>
            {input}
            {move || field.with(|f| f.help_text.clone()).map(|help| view! {
                <div class="form__help">{help}</div>
            })}
            {move || error.get().map(|msg| view! { <div class="form__error">{msg}</div> })}
        </div>
    }
}

#[component]
fn ChoiceInput(
    choices: Vec<Choice>,
    value: Signal<String>,
    disabled: Signal<bool>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="form__select"
            prop:value=value
            disabled=disabled
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">"---------"</option>
            {choices
                .into_iter()
                .map(|c| {
                    let v = c.value.clone();
                    view! { <option value=c.value selected=move || value.get() == v>{c.label}</option> }
                })
                .collect_view()}
        </select>
    }
}

/// Select over a related model; options are fetched on focus and refetched
/// whenever the lookup filters change
#[component]
fn RelatedInput(
    field: Signal<FieldDescriptor>,
    value: Signal<String>,
    disabled: Signal<bool>,
    on_change: Callback<String>,
) -> impl IntoView {
    let loader = RemoteChoiceLoader::new();
    let source = Memo::new(move |_| field.with(related_source));

    Effect::new(move |previous: Option<Option<RemoteChoices>>| {
        let current = source.get();
        match previous {
            Some(prev) if prev != current => loader.reset(),
            None if !value.get_untracked().is_empty() => {
                if let Some(src) = current.clone() {
                    loader.open(src);
                }
            }
            _ => {}
        }
        current
    });

    let open = move |_| {
        if let Some(src) = source.get_untracked() {
            loader.open(src);
        }
    };

    let options = move || match loader.state.get() {
        ChoiceState::Loaded(choices) => choices
            .into_iter()
            .map(|c| {
                let selected = value.get() == c.value;
                view! { <option value=c.value selected=selected>{c.label}</option> }
            })
            .collect_view()
            .into_any(),
        ChoiceState::Loading => view! { <option disabled=true>"Loading..."</option> }.into_any(),
        ChoiceState::NotLoaded => {
            let current = value.get();
            (!current.is_empty())
                .then(|| view! { <option value=current.clone() selected=true>{current.clone()}</option> })
                .into_any()
        }
    };

    view! {
        <select
            class="form__select"
            prop:value=value
            disabled=disabled
            on:focus=open
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">"---------"</option>
            {options}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn input_parsing_by_kind() {
        assert_eq!(parse_input(FieldKind::Integer, "12"), Some(json!(12)));
        assert_eq!(parse_input(FieldKind::Related, "7"), Some(json!(7)));
        assert_eq!(parse_input(FieldKind::Decimal, "2.5"), Some(json!(2.5)));
        assert_eq!(parse_input(FieldKind::String, " A-1 "), Some(json!("A-1")));
        assert_eq!(parse_input(FieldKind::Date, ""), None);
    }

    #[test]
    fn related_source_carries_filters() {
        let field = FieldDescriptor::related("supplier_part", "/api/company/part/", "supplierpart")
            .filter("part", "12");
        let source = related_source(&field).unwrap();
        assert_eq!(source.endpoint, "/api/company/part/");
        assert_eq!(source.label_fields, vec!["SKU"]);
        assert_eq!(source.params, vec![("part".to_string(), "12".to_string())]);
    }
}
