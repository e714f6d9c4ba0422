#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://freebirdtravelers.com"
}

pub struct CompanyInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub phone: &'static str,
    pub whatsapp: &'static str,
    pub email: &'static str,
    pub address: &'static str,
}

pub const COMPANY_INFO: CompanyInfo = CompanyInfo {
    name: "Free Bird Travelers",
    tagline: "Where Dreams Take Flight",
    phone: "+91 98765 43210",
    whatsapp: "+91 98765 43210",
    email: "hello@freebirdtravelers.com",
    address: "Kochi, Kerala, India",
};

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAVIGATION_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "/" },
    NavLink { label: "Services", href: "/services" },
    NavLink { label: "Destinations", href: "/destinations" },
    NavLink { label: "Gallery", href: "/gallery" },
];

fn digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// `tel:` link for a display-formatted number.
pub fn phone_call_href(phone: &str) -> String {
    let plus = if phone.trim_start().starts_with('+') { "+" } else { "" };
    format!("tel:{}{}", plus, digits(phone))
}

/// WhatsApp click-to-chat link. Callers append `&text=...`.
pub fn whatsapp_href(phone: &str) -> String {
    format!("https://api.whatsapp.com/send?phone={}", digits(phone))
}

pub fn whatsapp_message_href(phone: &str, message: &str) -> String {
    format!("{}&text={}", whatsapp_href(phone), urlencoding::encode(message))
}

pub fn default_enquiry_message() -> String {
    format!(
        "Hi {}! I'm interested in planning a trip. Could you help me with more details?",
        COMPANY_INFO.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_links_strip_formatting() {
        assert_eq!(phone_call_href("+91 98765 43210"), "tel:+919876543210");
        assert_eq!(phone_call_href("(0484) 123-456"), "tel:0484123456");
        assert_eq!(
            whatsapp_href("+91 98765 43210"),
            "https://api.whatsapp.com/send?phone=919876543210"
        );
    }

    #[test]
    fn whatsapp_message_is_percent_encoded() {
        let href = whatsapp_message_href("+1 555", "Hi there & bye?");
        assert_eq!(href, "https://api.whatsapp.com/send?phone=1555&text=Hi%20there%20%26%20bye%3F");
    }
}
