use shared::status::{opening_status, OpeningStatus};
use yew::prelude::*;

use super::SiteProps;
use crate::services::date_utils::local_now;

#[function_component(StatusBadge)]
pub fn status_badge(props: &SiteProps) -> Html {
    let status = opening_status(local_now(), &props.config.business_hours);

    let (class, dot) = match status {
        OpeningStatus::Open => (
            "hidden sm:flex items-center gap-1.5 bg-green-50 dark:bg-green-900/20 text-green-700 dark:text-green-400 text-[11px] uppercase tracking-wide px-2.5 py-1 rounded-full font-bold border border-green-200 dark:border-green-800",
            "relative inline-flex rounded-full h-2 w-2 bg-green-500",
        ),
        OpeningStatus::Closed => (
            "hidden sm:flex items-center gap-1.5 bg-red-50 dark:bg-red-900/20 text-red-700 dark:text-red-400 text-[11px] uppercase tracking-wide px-2.5 py-1 rounded-full font-bold border border-red-200 dark:border-red-800",
            "relative inline-flex rounded-full h-2 w-2 bg-red-500",
        ),
    };

    html! {
        <span id="status-badge" class={class}>
            <span class="relative flex h-2 w-2">
                <span class={dot}></span>
            </span>
            <span>{status.label()}</span>
        </span>
    }
}
