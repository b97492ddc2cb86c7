use dioxus::prelude::*;

use crate::store::use_quiz_store;
use crate::views::window::pointer_of;

/// The area windows live in. Feeds its size and pointer events to the panel manager.
#[component]
pub fn Desktop(children: Element) -> Element {
    let store = use_quiz_store();

    rsx! {
        div {
            class: "desktop",
            onresize: move |evt: Event<ResizeData>| {
                if let Ok(size) = evt.get_content_box_size() {
                    store.set_viewport(size.width, size.height);
                }
            },
            onmousemove: move |evt: MouseEvent| store.pointer_moved(pointer_of(&evt)),
            onmouseup: move |_| store.pointer_released(),
            onmouseleave: move |_| store.pointer_released(),
            {children}
        }
    }
}

#[component]
pub fn Taskbar(children: Element) -> Element {
    rsx! {
        footer { class: "taskbar",
            div { class: "taskbar-inner", {children} }
        }
    }
}
