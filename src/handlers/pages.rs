// Bare forms for the auth routes. Page layout and styling live outside this service.

pub fn login_page(error: &str) -> String {
    form_page("login", "/login", error)
}

pub fn signup_page(error: &str) -> String {
    form_page("signup", "/signup", error)
}

fn form_page(title: &str, action: &str, error: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>{title}</title></head>
<body>
<h1>{title}</h1>
<p class="error">{error}</p>
<form method="post" action="{action}">
<input name="username" placeholder="username" required>
<input name="password" type="password" placeholder="password" required>
<button type="submit">{title}</button>
</form>
</body>
</html>"#
    )
}
