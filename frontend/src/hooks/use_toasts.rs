use std::rc::Rc;

use shared::Notice;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Mounted off-screen, slides in on the next tick
    Entering,
    Shown,
    Leaving,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
    pub phase: ToastPhase,
}

pub enum ToastAction {
    Show { id: u32, notice: Notice },
    Enter(u32),
    Leave(u32),
    Remove(u32),
}

/// Stack of visible toasts, newest last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStack {
    pub toasts: Vec<Toast>,
}

impl ToastStack {
    fn with_phase(&self, id: u32, phase: ToastPhase) -> Vec<Toast> {
        self.toasts
            .iter()
            .cloned()
            .map(|mut toast| {
                if toast.id == id {
                    toast.phase = phase;
                }
                toast
            })
            .collect()
    }
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let toasts = match action {
            ToastAction::Show { id, notice } => {
                let mut toasts = self.toasts.clone();
                toasts.push(Toast {
                    id,
                    notice,
                    phase: ToastPhase::Entering,
                });
                toasts
            }
            ToastAction::Enter(id) => self.with_phase(id, ToastPhase::Shown),
            ToastAction::Leave(id) => self.with_phase(id, ToastPhase::Leaving),
            ToastAction::Remove(id) => self.toasts.iter().filter(|toast| toast.id != id).cloned().collect(),
        };
        Rc::new(ToastStack { toasts })
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub notify: Callback<Notice>,
}

/// Callback that shows a notice; without a provider notices are only logged.
#[hook]
pub fn use_notify() -> Callback<Notice> {
    match use_context::<ToastContext>() {
        Some(context) => context.notify,
        None => Callback::from(|notice: Notice| {
            log::warn!("No toast provider for notice: {}", notice.message());
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_stack() -> Rc<ToastStack> {
        Rc::new(ToastStack::default())
            .reduce(ToastAction::Show {
                id: 1,
                notice: Notice::SelectDateFirst,
            })
            .reduce(ToastAction::Show {
                id: 2,
                notice: Notice::BookingSent,
            })
    }

    #[test]
    fn test_toast_lifecycle() {
        let stack = create_test_stack();
        assert_eq!(stack.toasts.len(), 2);
        assert_eq!(stack.toasts[0].phase, ToastPhase::Entering);

        let stack = stack.reduce(ToastAction::Enter(1)).reduce(ToastAction::Leave(1));
        assert_eq!(stack.toasts[0].phase, ToastPhase::Leaving);
        assert_eq!(stack.toasts[1].phase, ToastPhase::Entering);

        let stack = stack.reduce(ToastAction::Remove(1));
        assert_eq!(stack.toasts.len(), 1);
        assert_eq!(stack.toasts[0].notice, Notice::BookingSent);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let stack = create_test_stack().reduce(ToastAction::Remove(9)).reduce(ToastAction::Leave(9));
        assert_eq!(*stack, *create_test_stack());
    }
}
