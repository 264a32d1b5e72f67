use contracts::shared::validation::digits_only;

/// `https://wa.me/<digits>?text=<message>`
pub fn whatsapp_url(phone: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        digits_only(phone),
        urlencoding::encode(message)
    )
}

/// Opens the chat in a new tab. Returns false when the browser blocked it.
pub fn open_whatsapp(phone: &str, message: &str) -> bool {
    let url = whatsapp_url(phone, message);
    let opened = web_sys::window()
        .and_then(|w| w.open_with_url_and_target(&url, "_blank").ok().flatten())
        .is_some();
    if !opened {
        log::warn!("could not open WhatsApp link {}", url);
    }
    opened
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_url() {
        assert_eq!(
            whatsapp_url("+91 98765-43210", "Hello"),
            "https://wa.me/919876543210?text=Hello"
        );
    }

    #[test]
    fn test_message_is_encoded() {
        assert_eq!(
            whatsapp_url("9876543210", "Invoice #12 & due 5/6"),
            "https://wa.me/9876543210?text=Invoice%20%2312%20%26%20due%205%2F6"
        );
    }
}
