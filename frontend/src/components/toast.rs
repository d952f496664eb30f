use gloo::timers::future::TimeoutFuture;
use shared::config::NoticeConfig;
use shared::{Notice, NoticeTone};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_toasts::{Toast, ToastAction, ToastPhase, ToastStack};
use crate::hooks::ToastContext;
use crate::services::browser::element_by_id;

/// Page element toasts are portalled into, shared by all islands.
const TOAST_CONTAINER_ID: &str = "toast-container";

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub notices: NoticeConfig,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let stack = use_reducer(ToastStack::default);
    let next_id = use_mut_ref(|| 0u32);

    let notify = {
        let dispatcher = stack.dispatcher();
        use_callback(props.notices.clone(), move |notice: Notice, notices| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                *next_id += 1;
                *next_id
            };
            dispatcher.dispatch(ToastAction::Show { id, notice });

            let dispatcher = dispatcher.clone();
            let visible_ms = notice.duration_ms(notices);
            let exit_ms = notices.exit_ms;
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                dispatcher.dispatch(ToastAction::Enter(id));
                TimeoutFuture::new(visible_ms).await;
                dispatcher.dispatch(ToastAction::Leave(id));
                TimeoutFuture::new(exit_ms).await;
                dispatcher.dispatch(ToastAction::Remove(id));
            });
        })
    };

    let toasts = html! {
        <>{ for stack.toasts.iter().map(render_toast) }</>
    };
    let rendered = match element_by_id(TOAST_CONTAINER_ID) {
        Some(host) => yew::create_portal(toasts, host),
        None => html! {
            <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2">{toasts}</div>
        },
    };

    html! {
        <ContextProvider<ToastContext> context={ToastContext { notify }}>
            {props.children.clone()}
            {rendered}
        </ContextProvider<ToastContext>>
    }
}

fn toast_class(phase: ToastPhase) -> String {
    let base = "bg-gray-800 dark:bg-gray-900 text-white px-6 py-3 rounded-lg shadow-lg flex items-center gap-3 transform transition-transform duration-300";
    match phase {
        ToastPhase::Shown => base.to_string(),
        ToastPhase::Entering | ToastPhase::Leaving => format!("{} translate-x-full", base),
    }
}

fn render_toast(toast: &Toast) -> Html {
    let (icon, icon_class) = match toast.notice.tone() {
        NoticeTone::Info => ("info", "material-symbols-outlined text-primary"),
        NoticeTone::Success => ("check_circle", "material-symbols-outlined text-green-400"),
    };

    html! {
        <div key={toast.id} class={toast_class(toast.phase)} role="status">
            <span class={icon_class}>{icon}</span>
            <span>{toast.notice.message()}</span>
        </div>
    }
}
