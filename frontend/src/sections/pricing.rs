use std::fmt;

use yew::prelude::*;

use crate::components::icons::{Icon, SvgIcon};
use crate::config::{checkout_url, LIST_PRICE_CENTS, OFFER_PRICE_CENTS, PRODUCT_NAME};
use crate::content::PRICING_INCLUSIONS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Price {
    cents: u32,
}

impl Price {
    pub const fn from_cents(cents: u32) -> Self {
        Self { cents }
    }

    /// Whole-percent reduction from `list` to `self`, rounded half up.
    pub fn discount_from(self, list: Price) -> u32 {
        if list.cents == 0 || self.cents >= list.cents {
            return 0;
        }
        let saved = u64::from(list.cents - self.cents);
        ((saved * 200 + u64::from(list.cents)) / (u64::from(list.cents) * 2)) as u32
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let offer = Price::from_cents(OFFER_PRICE_CENTS);
    let list = Price::from_cents(LIST_PRICE_CENTS);

    html! {
        <section id="pricing" class="pricing">
            <div class="pricing-header">
                <h2>{"Invest in your Musical Talent"}</h2>
                <p>{"Immediate and lifetime access to the complete material."}</p>
            </div>

            <div class="pricing-card">
                <div class="pricing-banner">{"Launch Offer"}</div>
                <div class="pricing-body">
                    <div class="pricing-product">
                        <h3>{PRODUCT_NAME}</h3>
                        <p>{"Complete Visual Guide in PDF"}</p>
                    </div>

                    <div class="price-row">
                        <span class="price-offer">{offer.to_string()}</span>
                        <span class="price-list">{list.to_string()}</span>
                        <span class="price-discount">{format!("{}% OFF", offer.discount_from(list))}</span>
                    </div>

                    <ul class="inclusions">
                        { for PRICING_INCLUSIONS.iter().map(|item| html! {
                            <li key={*item}>
                                <SvgIcon icon={Icon::CheckCircle} />
                                <span>{*item}</span>
                            </li>
                        }) }
                    </ul>

                    <a
                        class="buy-button"
                        href={checkout_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"Buy Now"}
                        <SvgIcon icon={Icon::Download} />
                    </a>

                    <div class="trust-badges">
                        <div class="trust-badge">
                            <SvgIcon icon={Icon::ShieldCheck} />
                            <span>{"Secure Payment"}</span>
                        </div>
                        <div class="trust-badge">
                            <SvgIcon icon={Icon::Star} />
                            <span>{"7-day Guarantee"}</span>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .pricing {
                    padding: 6rem 1.5rem;
                    background: #fafaf9;
                    scroll-margin-top: 4rem;
                }

                .pricing-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .pricing-header h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #1c1917;
                    margin-bottom: 1rem;
                }

                .pricing-header p {
                    color: #57534e;
                }

                .pricing-card {
                    max-width: 32rem;
                    margin: 0 auto;
                    background: #fff;
                    border: 2px solid #059669;
                    border-radius: 3rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    transition: transform 0.3s ease;
                }

                .pricing-card:hover {
                    transform: scale(1.02);
                }

                .pricing-banner {
                    background: #059669;
                    color: #fff;
                    padding: 1rem 0;
                    text-align: center;
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                .pricing-body {
                    padding: 3rem;
                }

                .pricing-product {
                    margin-bottom: 2rem;
                }

                .pricing-product h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #1c1917;
                    margin-bottom: 0.5rem;
                }

                .pricing-product p {
                    color: #78716c;
                    font-size: 0.875rem;
                }

                .price-row {
                    display: flex;
                    align-items: baseline;
                    gap: 0.75rem;
                    margin-bottom: 2rem;
                }

                .price-offer {
                    font-size: 3rem;
                    font-weight: 900;
                    color: #1c1917;
                }

                .price-list {
                    font-size: 1.25rem;
                    color: #a8a29e;
                    text-decoration: line-through;
                }

                .price-discount {
                    background: #d1fae5;
                    color: #047857;
                    padding: 0.25rem 0.5rem;
                    border-radius: 0.5rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                }

                .inclusions {
                    list-style: none;
                    padding: 0;
                    margin-bottom: 2.5rem;
                }

                .inclusions li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #44403c;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 1rem;
                }

                .inclusions .icon {
                    width: 1.25rem;
                    height: 1.25rem;
                    color: #059669;
                    flex-shrink: 0;
                }

                .buy-button {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    width: 100%;
                    background: #059669;
                    color: #fff;
                    padding: 1.25rem 0;
                    border-radius: 1rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                    text-decoration: none;
                    box-shadow: 0 20px 25px -5px rgba(167, 243, 208, 0.8);
                    margin-bottom: 1.5rem;
                    transition: background 0.2s ease;
                }

                .buy-button:hover {
                    background: #047857;
                }

                .buy-button .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                }

                .trust-badges {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    color: #a8a29e;
                }

                .trust-badge {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.25rem;
                    font-size: 10px;
                    font-weight: 700;
                    text-transform: uppercase;
                }

                .trust-badge .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                }

                @media (max-width: 768px) {
                    .pricing-body {
                        padding: 2.5rem;
                    }

                    .price-offer {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_offer_is_82_percent_off() {
        let offer = Price::from_cents(OFFER_PRICE_CENTS);
        let list = Price::from_cents(LIST_PRICE_CENTS);
        assert_eq!(offer.discount_from(list), 82);
        assert_eq!(offer.to_string(), "$4.90");
        assert_eq!(list.to_string(), "$27.00");
    }

    #[test]
    fn no_discount_when_not_cheaper() {
        let list = Price::from_cents(1000);
        assert_eq!(Price::from_cents(1000).discount_from(list), 0);
        assert_eq!(Price::from_cents(1500).discount_from(list), 0);
        assert_eq!(Price::from_cents(1).discount_from(Price::from_cents(0)), 0);
    }

    #[tokio::test]
    async fn buy_button_targets_checkout_in_new_context() {
        let rendered = yew::ServerRenderer::<Pricing>::new()
            .hydratable(false)
            .render()
            .await;

        let raw = format!(r#"href="{}""#, checkout_url());
        let escaped = format!(r#"href="{}""#, checkout_url().replace('&', "&amp;"));
        let hits = if raw == escaped {
            rendered.matches(raw.as_str()).count()
        } else {
            rendered.matches(raw.as_str()).count() + rendered.matches(escaped.as_str()).count()
        };
        assert_eq!(hits, 1);
        assert!(rendered.contains(r#"target="_blank""#));
        assert!(rendered.contains(r#"rel="noopener noreferrer""#));
        assert!(rendered.contains("82% OFF"));
        assert_eq!(rendered.matches("<li>").count(), PRICING_INCLUSIONS.len());
    }
}
