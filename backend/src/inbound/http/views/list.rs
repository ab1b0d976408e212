//! Directory listing page.

use crate::domain::UserRecord;

use super::{Views, escape_html};

impl Views {
    /// Render the listing, in the order given.
    #[must_use]
    pub fn list(&self, users: &[UserRecord]) -> String {
        let mut body = String::from("<p><a class=\"button\" href=\"/addnew\">Add user</a></p>\n");
        if users.is_empty() {
            body.push_str("<p class=\"empty\">No users yet.</p>\n");
            return self.layout("Users", &body);
        }

        body.push_str(
            "<table>\n<thead><tr><th>ID</th><th>Name</th><th>Position</th>\
             <th>Office</th><th></th></tr></thead>\n<tbody>\n",
        );
        for user in users {
            body.push_str(&row(user));
        }
        body.push_str("</tbody>\n</table>\n");
        self.layout("Users", &body)
    }
}

fn row(user: &UserRecord) -> String {
    let id = user.id();
    format!(
        "<tr><td>{id}</td><td>{name}</td><td>{position}</td><td>{office}</td>\
         <td><a href=\"/edit/{id}\">Edit</a> <a href=\"/delete/{id}\">Delete</a></td></tr>\n",
        name = escape_html(user.name()),
        position = escape_html(user.position()),
        office = escape_html(user.office()),
    )
}
