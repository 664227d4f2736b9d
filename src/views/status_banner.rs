/// Fixed banner telling the visitor whether the backend answered
pub fn render(online: bool) -> String {
    let (class, icon, message) = if online {
        ("online", "&#10004;", "Backend API is connected")
    } else {
        ("offline", "&#9888;", "Backend offline - Using mock data")
    };

    format!(
        r#"<div class="banner {class}" role="status"><span>{icon} {message}</span><button type="button" onclick="this.parentElement.remove()">Dismiss</button></div>"#,
        class = class,
        icon = icon,
        message = message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_messages() {
        assert!(render(true).contains("Backend API is connected"));
        let offline = render(false);
        assert!(offline.contains("Backend offline - Using mock data"));
        assert!(offline.contains("banner offline"));
        assert!(offline.contains("Dismiss"));
    }
}
