use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Overlay plus positioned surface for dialogs. The dialog renders its own header and actions.
#[component]
pub fn ModalFrame(
    on_close: Callback<()>,

    /// Extra class for the surface
    #[prop(optional, into)]
    modal_class: Option<String>,

    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // press and release must both happen on the overlay, so a text selection
    // dragged outside the dialog does not close it
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // closing synchronously drops the handler mid-dispatch
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let class = match modal_class {
        Some(extra) => format!("modal {extra}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=class on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
