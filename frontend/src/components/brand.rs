use yew::prelude::*;

use crate::components::icons::{Icon, SvgIcon};
use crate::config::{BRAND_ACCENT, BRAND_NAME};

#[function_component(BrandMark)]
pub fn brand_mark() -> Html {
    html! {
        <div class="brand">
            <div class="brand-badge">
                <SvgIcon icon={Icon::Music} />
            </div>
            <span class="brand-name">
                {BRAND_NAME}{" "}<span class="brand-accent">{BRAND_ACCENT}</span>
            </span>
            <style>
                {r#"
                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .brand-badge {
                    background: #059669;
                    padding: 0.375rem;
                    border-radius: 0.5rem;
                    display: flex;
                }

                .brand-badge .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                    color: #fff;
                }

                .brand-name {
                    font-weight: 700;
                    font-size: 1.25rem;
                    letter-spacing: -0.025em;
                }

                .brand-accent {
                    color: #059669;
                }
                "#}
            </style>
        </div>
    }
}
