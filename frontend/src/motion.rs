//! Entrance and reveal transitions. All motion is CSS; Rust only decides which
//! classes an element carries and when a viewport reveal fires.

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

/// Delay between consecutive cards of a staggered reveal.
pub const STAGGER_STEP_MS: u32 = 100;

pub fn stagger_delay_ms(index: usize) -> u32 {
    STAGGER_STEP_MS.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

pub fn stagger_style(index: usize) -> String {
    format!("transition-delay: {}ms;", stagger_delay_ms(index))
}

pub fn reveal_classes(revealed: bool) -> Classes {
    classes!("reveal", revealed.then(|| "is-visible"))
}

/// Wrapper class for panels that animate height and opacity between 0 and auto/1.
pub fn collapsible_classes(open: bool) -> Classes {
    classes!("collapsible", open.then(|| "open"))
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(element: &Element, on_reveal: Callback<()>) -> Result<RevealObserver, JsValue> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });
            if visible {
                observer.disconnect();
                on_reveal.emit(());
            }
        },
    );
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    observer.observe(element);
    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

/// Returns `true` once the referenced element has entered the viewport. Never
/// goes back to `false`.
#[hook]
pub fn use_reveal_once(node: NodeRef) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let on_reveal = {
                    let revealed = revealed.clone();
                    Callback::from(move |_| revealed.set(true))
                };
                let guard = match node.cast::<Element>() {
                    Some(element) => match observe_once(&element, on_reveal) {
                        Ok(guard) => Some(guard),
                        Err(err) => {
                            warn!("viewport observer unavailable, revealing now: {:?}", err);
                            revealed.set(true);
                            None
                        }
                    },
                    None => {
                        warn!("reveal target not mounted, revealing now");
                        revealed.set(true);
                        None
                    }
                };
                move || drop(guard)
            },
            node,
        );
    }

    *revealed
}

pub const MOTION_CSS: &str = r#"
    @keyframes enter-slide {
        from { opacity: 0; transform: translateX(-50px); }
        to { opacity: 1; transform: translateX(0); }
    }

    @keyframes enter-scale {
        from { opacity: 0; transform: scale(0.8); }
        to { opacity: 1; transform: scale(1); }
    }

    @keyframes pulse-soft {
        0%, 100% { transform: scale(1); }
        50% { transform: scale(1.03); }
    }

    .enter-slide {
        animation: enter-slide 0.6s ease-out both;
    }

    .enter-scale {
        animation: enter-scale 0.8s ease-out 0.2s both;
    }

    .pulse {
        animation: pulse-soft 2s ease-in-out infinite;
    }

    .reveal {
        opacity: 0;
        transform: translateY(20px);
        transition-property: opacity, transform;
        transition-duration: 0.5s;
        transition-timing-function: ease-out;
    }

    .reveal.is-visible {
        opacity: 1;
        transform: translateY(0);
    }

    .collapsible {
        display: grid;
        grid-template-rows: 0fr;
        opacity: 0;
        transition: grid-template-rows 0.3s ease, opacity 0.3s ease;
    }

    .collapsible > .collapsible-inner {
        overflow: hidden;
    }

    .collapsible.open {
        grid-template-rows: 1fr;
        opacity: 1;
    }

    @media (prefers-reduced-motion: reduce) {
        .enter-slide, .enter-scale, .pulse { animation: none; }
        .reveal, .collapsible { transition: none; }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_by_step() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(3), 300);
        assert_eq!(stagger_style(2), "transition-delay: 200ms;");
    }

    #[test]
    fn stagger_saturates_for_huge_indices() {
        assert_eq!(stagger_delay_ms(u32::MAX as usize), u32::MAX);
        assert_eq!(stagger_delay_ms(usize::MAX), u32::MAX);
        assert_eq!(stagger_delay_ms(50_000_000), u32::MAX);
    }

    #[test]
    fn reveal_class_only_when_visible() {
        assert!(!reveal_classes(false).contains("is-visible"));
        assert!(reveal_classes(true).contains("is-visible"));
        assert!(reveal_classes(true).contains("reveal"));
    }

    #[test]
    fn collapsible_class_tracks_open() {
        assert!(!collapsible_classes(false).contains("open"));
        assert!(collapsible_classes(true).contains("open"));
    }
}
