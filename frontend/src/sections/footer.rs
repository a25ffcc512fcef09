use chrono::{DateTime, Datelike, Local, TimeZone};
use yew::prelude::*;

use crate::components::brand::BrandMark;
use crate::config::brand_full_name;

pub fn copyright_notice<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    format!("© {} {}. All rights reserved.", now.year(), brand_full_name())
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let notice = copyright_notice(&Local::now());

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <BrandMark />
                <div class="copyright">{notice}</div>
                <div class="legal-links">
                    <a href="#">{"Terms"}</a>
                    <a href="#">{"Privacy"}</a>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #1c1917;
                    color: #fff;
                    padding: 3rem 1.5rem;
                }

                .footer-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2rem;
                }

                .copyright {
                    color: #a8a29e;
                    font-size: 0.875rem;
                }

                .legal-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .legal-links a {
                    color: #a8a29e;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .legal-links a:hover {
                    color: #fff;
                }

                @media (max-width: 768px) {
                    .footer-content {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn notice_tracks_the_calendar_year() {
        let earlier = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2031, 1, 15, 8, 30, 0).unwrap();

        assert_eq!(copyright_notice(&earlier), "© 2025 Eliab Campos Keys. All rights reserved.");
        assert!(copyright_notice(&later).starts_with("© 2031 "));
        assert_ne!(copyright_notice(&earlier), copyright_notice(&later));
    }

    #[test]
    fn year_is_read_in_the_local_offset() {
        // 23:30 UTC on new year's eve is already the next year at UTC+2.
        let utc = Utc.with_ymd_and_hms(2026, 12, 31, 23, 30, 0).unwrap();
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();

        assert!(copyright_notice(&utc).starts_with("© 2026 "));
        assert!(copyright_notice(&utc.with_timezone(&offset)).starts_with("© 2027 "));
    }

    #[tokio::test]
    async fn renders_current_year() {
        let rendered = yew::ServerRenderer::<Footer>::new()
            .hydratable(false)
            .render()
            .await;

        assert!(rendered.contains(&format!("© {} ", Local::now().year())));
        assert!(rendered.contains("Terms"));
        assert!(rendered.contains("Privacy"));
    }
}
