use dioxus::prelude::*;

use quiz_core::panels::{PanelId, Point, ResizeCorner};

use crate::store::use_quiz_store;

pub(crate) fn pointer_of(evt: &MouseEvent) -> Point {
    let at = evt.client_coordinates();
    Point::new(at.x, at.y)
}

/// A draggable, resizable desktop window backed by one panel in the store.
///
/// Renders nothing until the panel is open and laid out.
#[component]
pub fn Window(
    id: PanelId,
    title: String,
    #[props(default)] extra_class: String,
    on_close: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let store = use_quiz_store();

    let (style, gesture_class) = {
        let panels = store.panels.read();
        let Some(panel) = panels.get(id) else {
            return rsx! {};
        };
        let Some(origin) = panel.position() else {
            return rsx! {};
        };
        let size = panel.size();
        let style = format!(
            "left: {}px; top: {}px; width: {}px; height: {}px; z-index: {};",
            origin.x,
            origin.y,
            size.width,
            size.height,
            panel.z_index()
        );
        let gesture_class = if panel.is_dragging() {
            " dragging"
        } else if panel.is_resizing() {
            " resizing"
        } else {
            ""
        };
        (style, gesture_class)
    };

    rsx! {
        section {
            class: "window window-{id} {extra_class}{gesture_class}",
            id: "window-{id}",
            style: "{style}",
            onmousedown: move |_| store.focus(id),
            div {
                class: "title-bar",
                onmousedown: move |evt: MouseEvent| store.begin_drag(id, pointer_of(&evt)),
                h2 { class: "title-text", "{title}" }
                if let Some(on_close) = on_close {
                    button {
                        class: "title-button",
                        r#type: "button",
                        aria_label: "Close",
                        onmousedown: move |evt: MouseEvent| evt.stop_propagation(),
                        onclick: move |_| on_close.call(()),
                        "X"
                    }
                }
            }
            div { class: "window-body", {children} }
            for corner in ResizeCorner::ALL {
                div {
                    key: "{corner.as_str()}",
                    class: "resize-handle resize-{corner.as_str()}",
                    onmousedown: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        store.begin_resize(id, pointer_of(&evt), corner);
                    },
                }
            }
        }
    }
}
