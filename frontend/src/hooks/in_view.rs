use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use log::warn;

use crate::config::IN_VIEW_THRESHOLD;

struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Whether the element behind `node` is on screen. With `once` the hook
/// latches to `true` the first time the element shows up.
#[hook]
pub fn use_in_view(node: NodeRef, once: bool) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.setter();
        use_effect_with_deps(
            move |(node, once): &(NodeRef, bool)| {
                let observation = node.cast::<Element>().and_then(|element| {
                    observe(&element, *once, in_view)
                        .map_err(|err| warn!("in-view tracking unavailable: {:?}", err))
                        .ok()
                });
                move || drop(observation)
            },
            (node, once),
        );
    }

    *in_view
}

fn observe(element: &Element, once: bool, in_view: UseStateSetter<bool>) -> Result<Observation, JsValue> {
    let callback = Closure::wrap(Box::new(move |entries: Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let visible = entry.is_intersecting();
            if visible || !once {
                in_view.set(visible);
            }
        }
    }) as Box<dyn FnMut(Array)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(IN_VIEW_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(Observation { observer, _callback: callback })
}
