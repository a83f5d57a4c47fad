use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node};
use yew::prelude::*;

/// Zero or one active key. Selecting the active key again clears it.
///
/// Shared by dropdown menus, accordion cards, tab strips and hover
/// highlighted rows. Membership of the key is the caller's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusiveSelection<K> {
    active: Option<K>,
}

impl<K> Default for ExclusiveSelection<K> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<K: PartialEq> ExclusiveSelection<K> {
    pub fn select(&mut self, key: K) {
        if self.active.as_ref() == Some(&key) {
            self.active = None;
        } else {
            self.active = Some(key);
        }
    }

    pub fn close_all(&mut self) {
        self.active = None;
    }

    pub fn is_active(&self, key: &K) -> bool {
        self.active.as_ref() == Some(key)
    }

    pub fn active(&self) -> Option<&K> {
        self.active.as_ref()
    }

    /// Tab strips always show something: the default tab stands in when
    /// nothing is selected.
    pub fn active_or<'a>(&'a self, default: &'a K) -> &'a K {
        self.active().unwrap_or(default)
    }
}

pub enum SelectionAction<K> {
    Select(K),
    CloseAll,
}

impl<K: PartialEq + Clone> Reducible for ExclusiveSelection<K> {
    type Action = SelectionAction<K>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SelectionAction::Select(key) => {
                let mut next = (*self).clone();
                next.select(key);
                Rc::new(next)
            }
            SelectionAction::CloseAll if self.active.is_none() => self,
            SelectionAction::CloseAll => Rc::new(Self::default()),
        }
    }
}

#[derive(Clone)]
pub struct SelectionHandle<K: PartialEq + Clone + 'static> {
    inner: UseReducerHandle<ExclusiveSelection<K>>,
}

impl<K: PartialEq + Clone + 'static> SelectionHandle<K> {
    pub fn select(&self, key: K) {
        self.inner.dispatch(SelectionAction::Select(key));
    }

    pub fn close_all(&self) {
        self.inner.dispatch(SelectionAction::CloseAll);
    }

    pub fn is_active(&self, key: &K) -> bool {
        self.inner.is_active(key)
    }

    pub fn active_or(&self, default: K) -> K {
        self.inner.active_or(&default).clone()
    }

    pub fn select_callback<E: 'static>(&self, key: K) -> Callback<E> {
        let inner = self.inner.clone();
        Callback::from(move |_: E| inner.dispatch(SelectionAction::Select(key.clone())))
    }

    pub fn close_callback<E: 'static>(&self) -> Callback<E> {
        let inner = self.inner.clone();
        Callback::from(move |_: E| inner.dispatch(SelectionAction::CloseAll))
    }
}

#[hook]
pub fn use_exclusive_selection<K>() -> SelectionHandle<K>
where
    K: PartialEq + Clone + 'static,
{
    SelectionHandle {
        inner: use_reducer_eq(ExclusiveSelection::default),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusStep {
    Next,
    Previous,
}

impl FocusStep {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(FocusStep::Next),
            "ArrowUp" => Some(FocusStep::Previous),
            _ => None,
        }
    }
}

/// Circular index movement; `current == None` means focus sits outside
/// the list.
pub fn cycle_index(current: Option<usize>, len: usize, step: FocusStep) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let next = match (current.map(|i| i % len), step) {
        (None, FocusStep::Next) => 0,
        (None, FocusStep::Previous) => len - 1,
        (Some(i), FocusStep::Next) => (i + 1) % len,
        (Some(i), FocusStep::Previous) => (i + len - 1) % len,
    };
    Some(next)
}

/// Moves keyboard focus among the items matching `selector` inside
/// `container`. Returns whether focus moved.
pub fn move_focus(container: &Element, selector: &str, step: FocusStep) -> bool {
    let Ok(items) = container.query_selector_all(selector) else {
        return false;
    };
    let len = items.length() as usize;
    let focused = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element());
    let current = focused.and_then(|el| {
        let el: &Node = el.as_ref();
        (0..len).find(|&i| items.item(i as u32).map_or(false, |n| &n == el))
    });

    cycle_index(current, len, step)
        .and_then(|i| items.item(i as u32))
        .and_then(|n| n.dyn_into::<HtmlElement>().ok())
        .map_or(false, |el| el.focus().is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn dropdown_opens_then_closes_on_second_select() {
        let mut nav = ExclusiveSelection::default();
        nav.select("nav-careers");
        assert!(nav.is_active(&"nav-careers"));
        nav.select("nav-careers");
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn expanding_another_card_collapses_the_first() {
        let mut cards = ExclusiveSelection::default();
        cards.select(1);
        assert!(cards.is_active(&1));
        cards.select(2);
        assert!(!cards.is_active(&1));
        assert!(cards.is_active(&2));
    }

    #[test]
    fn close_all_is_idempotent() {
        let mut sel = ExclusiveSelection::<u32>::default();
        sel.close_all();
        assert_eq!(sel.active(), None);
        sel.select(7);
        sel.close_all();
        sel.close_all();
        assert_eq!(sel.active(), None);
    }

    #[test]
    fn unknown_keys_are_accepted() {
        let mut sel = ExclusiveSelection::default();
        sel.select("never-rendered".to_string());
        assert!(sel.is_active(&"never-rendered".to_string()));
    }

    #[test]
    fn tab_strip_falls_back_to_default() {
        let mut tabs = ExclusiveSelection::default();
        assert_eq!(*tabs.active_or(&"all"), "all");
        tabs.select("advanced");
        assert_eq!(*tabs.active_or(&"all"), "advanced");
        tabs.select("advanced");
        assert_eq!(*tabs.active_or(&"all"), "all");
    }

    #[test]
    fn reducer_close_all_keeps_identity_when_already_closed() {
        let closed = Rc::new(ExclusiveSelection::<u8>::default());
        let after = closed.clone().reduce(SelectionAction::CloseAll);
        assert!(Rc::ptr_eq(&closed, &after));

        let open = Rc::new(ExclusiveSelection::<u8>::default()).reduce(SelectionAction::Select(3));
        assert!(open.is_active(&3));
        let toggled = open.reduce(SelectionAction::Select(3));
        assert_eq!(toggled.active(), None);
    }

    #[test]
    fn arrow_keys_map_to_steps() {
        assert_eq!(FocusStep::from_key("ArrowDown"), Some(FocusStep::Next));
        assert_eq!(FocusStep::from_key("ArrowUp"), Some(FocusStep::Previous));
        assert_eq!(FocusStep::from_key("Enter"), None);
    }

    #[test]
    fn focus_wraps_in_both_directions() {
        assert_eq!(cycle_index(Some(2), 3, FocusStep::Next), Some(0));
        assert_eq!(cycle_index(Some(0), 3, FocusStep::Previous), Some(2));
        assert_eq!(cycle_index(None, 3, FocusStep::Next), Some(0));
        assert_eq!(cycle_index(None, 3, FocusStep::Previous), Some(2));
        assert_eq!(cycle_index(Some(0), 0, FocusStep::Next), None);
    }

    proptest! {
        #[test]
        fn selecting_twice_from_closed_toggles_back(key in any::<u16>()) {
            let mut sel = ExclusiveSelection::default();
            sel.select(key);
            sel.select(key);
            prop_assert_eq!(sel.active(), None);
        }

        #[test]
        fn last_distinct_select_wins(a in any::<u16>(), b in any::<u16>()) {
            prop_assume!(a != b);
            let mut sel = ExclusiveSelection::default();
            sel.select(a);
            sel.select(b);
            prop_assert!(sel.is_active(&b));
            prop_assert!(!sel.is_active(&a));
        }

        #[test]
        fn never_more_than_one_active(keys in proptest::collection::vec(0u8..6, 0..40)) {
            let mut sel = ExclusiveSelection::default();
            for k in keys {
                sel.select(k);
                let active = (0u8..6).filter(|c| sel.is_active(c)).count();
                prop_assert!(active <= 1);
            }
        }

        #[test]
        fn cycling_forward_len_times_returns_home(len in 1usize..20, start in 0usize..20) {
            let start = start % len;
            let mut at = Some(start);
            for _ in 0..len {
                at = cycle_index(at, len, FocusStep::Next);
            }
            prop_assert_eq!(at, Some(start));
        }
    }
}
