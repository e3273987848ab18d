use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::error::{self, Result};

/// Something that can carry the one-way "visible" marker.
pub trait RevealTarget {
    fn is_revealed(&self) -> bool;
    fn reveal(&self);
}

impl RevealTarget for Element {
    fn is_revealed(&self) -> bool {
        self.class_list().contains(config::VISIBLE_CLASS)
    }

    fn reveal(&self) {
        if let Err(e) = self.class_list().add_1(config::VISIBLE_CLASS) {
            log::warn!("Failed to mark element visible: {:?}", e);
        }
    }
}

/// One entry of an intersection callback batch.
pub struct Intersection<T> {
    pub target: T,
    pub is_intersecting: bool,
}

/// Decides which targets get revealed. Only targets captured when the
/// revealer was created are ever marked, and nothing is marked after
/// `disconnect`.
pub struct Revealer<T> {
    targets: Vec<T>,
    connected: bool,
}

impl<T: RevealTarget + PartialEq> Revealer<T> {
    pub fn new(targets: Vec<T>) -> Self {
        Self {
            targets,
            connected: true,
        }
    }

    pub fn targets(&self) -> &[T] {
        &self.targets
    }

    /// Returns how many targets were newly revealed by this batch.
    pub fn handle_batch<I>(&self, entries: I) -> usize
    where
        I: IntoIterator<Item = Intersection<T>>,
    {
        if !self.connected {
            return 0;
        }

        let mut revealed = 0;
        for entry in entries {
            if !entry.is_intersecting || entry.target.is_revealed() {
                continue;
            }
            if !self.targets.contains(&entry.target) {
                continue;
            }
            entry.target.reveal();
            revealed += 1;
        }
        revealed
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Browser intersection observer bound to every `.scroll-reveal` element
/// present at construction. Dropping it disconnects the observer.
pub struct ScrollRevealObserver {
    observer: IntersectionObserver,
    revealer: Rc<RefCell<Revealer<Element>>>,
    _callback: ObserverCallback,
}

impl ScrollRevealObserver {
    pub fn attach(selector: &str, threshold: f64) -> Result<Self> {
        let document = error::document()?;
        let nodes = document.query_selector_all(selector)?;

        let mut targets = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            if let Some(element) = nodes.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                targets.push(element);
            }
        }

        let revealer = Rc::new(RefCell::new(Revealer::new(targets)));

        let callback: ObserverCallback = {
            let revealer = revealer.clone();
            Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| Intersection {
                        target: entry.target(),
                        is_intersecting: entry.is_intersecting(),
                    });
                let revealed = revealer.borrow().handle_batch(batch);
                if revealed > 0 {
                    log::debug!("Revealed {} section(s)", revealed);
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        for target in revealer.borrow().targets() {
            observer.observe(target);
        }
        log::debug!("Observing {} reveal target(s)", revealer.borrow().targets().len());

        Ok(Self {
            observer,
            revealer,
            _callback: callback,
        })
    }
}

impl Drop for ScrollRevealObserver {
    fn drop(&mut self) {
        self.revealer.borrow_mut().disconnect();
        self.observer.disconnect();
    }
}

/// Reveals `.scroll-reveal` elements of the calling component as they scroll
/// into view. Elements rendered after the first mount are not observed.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(
        move |_| {
            let observer = match ScrollRevealObserver::attach(
                &config::reveal_selector(),
                config::REVEAL_THRESHOLD,
            ) {
                Ok(observer) => Some(observer),
                Err(e) => {
                    log::warn!("Scroll reveal disabled: {}", e);
                    None
                }
            };

            move || drop(observer)
        },
        (), // Only the elements present on first mount are observed
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Counts how many times the marker was applied.
    struct FakeElement {
        name: &'static str,
        marks: Rc<Cell<u32>>,
    }

    impl FakeElement {
        fn new(name: &'static str) -> (Self, Rc<Cell<u32>>) {
            let marks = Rc::new(Cell::new(0));
            (Self { name, marks: marks.clone() }, marks)
        }

        fn handle(&self) -> Self {
            Self {
                name: self.name,
                marks: self.marks.clone(),
            }
        }
    }

    impl PartialEq for FakeElement {
        fn eq(&self, other: &Self) -> bool {
            self.name == other.name
        }
    }

    impl RevealTarget for FakeElement {
        fn is_revealed(&self) -> bool {
            self.marks.get() > 0
        }

        fn reveal(&self) {
            self.marks.set(self.marks.get() + 1);
        }
    }

    fn entry(target: &FakeElement, is_intersecting: bool) -> Intersection<FakeElement> {
        Intersection {
            target: target.handle(),
            is_intersecting,
        }
    }

    #[test]
    fn intersecting_target_is_marked_once() {
        let (card, marks) = FakeElement::new("card");
        let revealer = Revealer::new(vec![card.handle()]);

        assert_eq!(revealer.handle_batch([entry(&card, true)]), 1);
        // Scrolled out, then back in.
        assert_eq!(revealer.handle_batch([entry(&card, false)]), 0);
        assert_eq!(revealer.handle_batch([entry(&card, true)]), 0);

        assert_eq!(marks.get(), 1);
        assert!(card.is_revealed());
    }

    #[test]
    fn non_intersecting_entries_are_ignored() {
        let (card, marks) = FakeElement::new("card");
        let revealer = Revealer::new(vec![card.handle()]);

        assert_eq!(revealer.handle_batch([entry(&card, false)]), 0);
        assert_eq!(marks.get(), 0);
    }

    #[test]
    fn batch_marks_each_intersecting_target() {
        let (a, a_marks) = FakeElement::new("a");
        let (b, b_marks) = FakeElement::new("b");
        let (c, c_marks) = FakeElement::new("c");
        let revealer = Revealer::new(vec![a.handle(), b.handle(), c.handle()]);

        let revealed = revealer.handle_batch([entry(&a, true), entry(&b, false), entry(&c, true)]);
        assert_eq!(revealed, 2);
        assert_eq!((a_marks.get(), b_marks.get(), c_marks.get()), (1, 0, 1));
    }

    #[test]
    fn targets_outside_snapshot_are_never_marked() {
        let (known, _) = FakeElement::new("known");
        let (late, late_marks) = FakeElement::new("late");
        let revealer = Revealer::new(vec![known.handle()]);

        assert_eq!(revealer.handle_batch([entry(&late, true)]), 0);
        assert_eq!(late_marks.get(), 0);
        assert_eq!(revealer.targets().len(), 1);
    }

    #[test]
    fn nothing_is_marked_after_disconnect() {
        let (card, marks) = FakeElement::new("card");
        let mut revealer = Revealer::new(vec![card.handle()]);
        revealer.disconnect();
        assert_eq!(revealer.handle_batch([entry(&card, true)]), 0);
        assert_eq!(marks.get(), 0);
    }
}
