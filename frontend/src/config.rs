pub const BRAND_NAME: &str = "Eliab Campos";
pub const BRAND_ACCENT: &str = "Keys";
pub const PRODUCT_NAME: &str = "Chord Dictionary";
pub const PAGE_TITLE: &str = "Chord Dictionary | Eliab Campos Keys";

const DEFAULT_CHECKOUT_URL: &str =
    "https://pay.hotmart.com/J91552660E?off=xo970lul&checkoutMode=10";

pub const PRODUCT_IMAGE_URL: &str =
    "https://eliabcamposteclas.com/wp-content/uploads/2026/02/ChatGPT-Image-26-de-fev.-de-2026-14_24_21.jpg";
pub const AUTHOR_IMAGE_URL: &str =
    "https://eliabcamposteclas.com/wp-content/uploads/2025/01/PERFIL-2-ELIAB.jpg";

/// Offer and list price in cents.
pub const OFFER_PRICE_CENTS: u32 = 490;
pub const LIST_PRICE_CENTS: u32 = 2700;

/// Hosted checkout page. Set `CHECKOUT_URL` when building to point at another offer.
pub fn checkout_url() -> &'static str {
    match option_env!("CHECKOUT_URL") {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_CHECKOUT_URL,
    }
}

pub fn avatar_url(seed: u32) -> String {
    format!("https://picsum.photos/seed/{}/100/100", seed)
}

pub fn brand_full_name() -> String {
    format!("{} {}", BRAND_NAME, BRAND_ACCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_url_is_absolute_https() {
        assert!(checkout_url().starts_with("https://"));
    }

    #[test]
    fn avatar_url_uses_seed() {
        assert_eq!(avatar_url(11), "https://picsum.photos/seed/11/100/100");
    }

    #[test]
    fn full_brand_name() {
        assert_eq!(brand_full_name(), "Eliab Campos Keys");
    }
}
