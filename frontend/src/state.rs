use std::rc::Rc;

use log::debug;
use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    pub open: bool,
}

pub enum MenuAction {
    Toggle,
    Close,
}

impl Reducible for MobileMenu {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Close => false,
        };
        if open == self.open {
            return self;
        }
        debug!("mobile menu open: {}", open);
        Rc::new(MobileMenu { open })
    }
}

/// Single-open accordion. `open` is either `None` or an index below `len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Option<usize>,
    len: usize,
}

pub enum FaqAction {
    Select(usize),
}

impl FaqAccordion {
    /// First entry expanded, or nothing when there are no entries.
    pub fn new(len: usize) -> Self {
        Self {
            open: if len > 0 { Some(0) } else { None },
            len,
        }
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn select(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        let open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        Self { open, ..self }
    }
}

impl Reducible for FaqAccordion {
    type Action = FaqAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FaqAction::Select(index) => {
                let next = self.select(index);
                if next == *self {
                    return self;
                }
                debug!("faq open index: {:?}", next.open);
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: usize = 4;

    fn at(open: Option<usize>) -> FaqAccordion {
        FaqAccordion { open, len: N }
    }

    #[test]
    fn accordion_starts_on_first_entry() {
        assert_eq!(FaqAccordion::new(N).open(), Some(0));
        assert_eq!(FaqAccordion::new(0).open(), None);
    }

    #[test]
    fn selecting_from_closed_opens() {
        for i in 0..N {
            assert_eq!(at(None).select(i).open(), Some(i));
        }
    }

    #[test]
    fn selecting_open_entry_closes_it() {
        for i in 0..N {
            assert_eq!(at(Some(i)).select(i).open(), None);
        }
    }

    #[test]
    fn selecting_other_entry_moves_focus() {
        for i in 0..N {
            for j in (0..N).filter(|&j| j != i) {
                let next = at(Some(j)).select(i);
                assert_eq!(next.open(), Some(i));
                assert_ne!(next.open(), Some(j));
            }
        }
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        assert_eq!(at(Some(1)).select(N).open(), Some(1));
        assert_eq!(at(None).select(usize::MAX).open(), None);
    }

    #[test]
    fn reducer_keeps_rc_when_nothing_changes() {
        let state = Rc::new(at(Some(2)));
        let next = state.clone().reduce(FaqAction::Select(N + 3));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn menu_toggle_has_period_two() {
        let mut menu = Rc::new(MobileMenu::default());
        for n in 1..=6 {
            menu = menu.reduce(MenuAction::Toggle);
            assert_eq!(menu.open, n % 2 == 1);
        }
        assert_eq!(*menu, MobileMenu::default());
    }

    #[test]
    fn menu_close_always_closes() {
        let closed = Rc::new(MobileMenu { open: true }).reduce(MenuAction::Close);
        assert!(!closed.open);
        let still_closed = Rc::new(MobileMenu::default()).reduce(MenuAction::Close);
        assert!(!still_closed.open);
    }
}
