use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    CheckCircle,
    ChevronDown,
    Download,
    Keyboard,
    Layers,
    Menu,
    Music,
    Printer,
    ShieldCheck,
    Star,
    X,
}

impl Icon {
    fn paths(self) -> Html {
        match self {
            Icon::ArrowRight => html! {
                <>
                    <path d="M5 12h14" />
                    <path d="m12 5 7 7-7 7" />
                </>
            },
            Icon::CheckCircle => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <path d="m9 12 2 2 4-4" />
                </>
            },
            Icon::ChevronDown => html! { <path d="m6 9 6 6 6-6" /> },
            Icon::Download => html! {
                <>
                    <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" />
                    <polyline points="7 10 12 15 17 10" />
                    <line x1="12" x2="12" y1="15" y2="3" />
                </>
            },
            Icon::Keyboard => html! {
                <>
                    <rect width="20" height="16" x="2" y="4" rx="2" ry="2" />
                    <path d="M6 8h.01" />
                    <path d="M10 8h.01" />
                    <path d="M14 8h.01" />
                    <path d="M18 8h.01" />
                    <path d="M8 12h.01" />
                    <path d="M12 12h.01" />
                    <path d="M16 12h.01" />
                    <path d="M7 16h10" />
                </>
            },
            Icon::Layers => html! {
                <>
                    <polygon points="12 2 2 7 12 12 22 7 12 2" />
                    <polyline points="2 17 12 22 22 17" />
                    <polyline points="2 12 12 17 22 12" />
                </>
            },
            Icon::Menu => html! {
                <>
                    <line x1="4" x2="20" y1="12" y2="12" />
                    <line x1="4" x2="20" y1="6" y2="6" />
                    <line x1="4" x2="20" y1="18" y2="18" />
                </>
            },
            Icon::Music => html! {
                <>
                    <path d="M9 18V5l12-2v13" />
                    <circle cx="6" cy="18" r="3" />
                    <circle cx="18" cy="16" r="3" />
                </>
            },
            Icon::Printer => html! {
                <>
                    <polyline points="6 9 6 2 18 2 18 9" />
                    <path d="M6 18H4a2 2 0 0 1-2-2v-5a2 2 0 0 1 2-2h16a2 2 0 0 1 2 2v5a2 2 0 0 1-2 2h-2" />
                    <rect width="12" height="8" x="6" y="14" />
                </>
            },
            Icon::ShieldCheck => html! {
                <>
                    <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10" />
                    <path d="m9 12 2 2 4-4" />
                </>
            },
            Icon::Star => html! {
                <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
            },
            Icon::X => html! {
                <>
                    <path d="M18 6 6 18" />
                    <path d="m6 6 12 12" />
                </>
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SvgIconProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
    /// Fill the shape with the current text colour (rating stars).
    #[prop_or_default]
    pub filled: bool,
}

#[function_component(SvgIcon)]
pub fn svg_icon(props: &SvgIconProps) -> Html {
    let fill = if props.filled { "currentColor" } else { "none" };

    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill={fill}
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { props.icon.paths() }
        </svg>
    }
}
