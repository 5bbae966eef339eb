//! Server-rendered HTML. Pages are a layout shell plus a per-page body;
//! anything user-supplied goes through [`escape_html`] first.

use kiroku::db::models::User;
use std::fmt::Write;

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n",
            "<body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n"
        ),
        title = escape_html(title),
        body = body,
    )
}

pub fn users_page(users: &[User]) -> String {
    let mut body = String::from("<table>\n<tr><th>ID</th><th>Username</th><th>Email</th><th></th><th></th></tr>\n");
    for user in users {
        let _ = write!(
            body,
            concat!(
                "<tr><td>{id}</td><td>{username}</td><td>{email}</td>",
                "<td><a href=\"/user/{id}\">edit</a></td>",
                "<td><form method=\"post\" action=\"/delete_user/{id}\">",
                "<button type=\"submit\">delete</button></form></td></tr>\n"
            ),
            id = user.id,
            username = escape_html(&user.username),
            email = escape_html(&user.email),
        );
    }
    body.push_str("</table>\n");
    body.push_str(concat!(
        "<h2>New user</h2>\n",
        "<form method=\"post\" action=\"/users\">\n",
        "<label>Username <input name=\"username\"></label>\n",
        "<label>Email <input name=\"email\"></label>\n",
        "<button type=\"submit\">Create</button>\n",
        "</form>"
    ));
    layout("Users", &body)
}

pub fn user_page(user: &User) -> String {
    let body = format!(
        concat!(
            "<form method=\"post\" action=\"/user/{id}\">\n",
            "<label>Username <input name=\"username\" value=\"{username}\"></label>\n",
            "<label>Email <input name=\"email\" value=\"{email}\"></label>\n",
            "<button type=\"submit\">Save</button>\n",
            "</form>\n",
            "<p>Leave a field blank to keep its current value.</p>\n",
            "<p><a href=\"/users\">Back to users</a></p>"
        ),
        id = user.id,
        username = escape_html(&user.username),
        email = escape_html(&user.email),
    );
    layout("Edit user", &body)
}

pub fn dashboard_page(chart_svg: &str) -> String {
    // The chart fragment is generated markup, not user input.
    layout("Workout Dashboard", chart_svg)
}
