//! Create and edit forms.
//!
//! Both forms post `name`, `position`, and `office`; the inputs carry the
//! `required` attribute, which is the only client-side validation.

use crate::domain::{UserDetails, UserRecord};

use super::{Views, escape_html};

impl Views {
    /// Empty form posting to `/add`.
    #[must_use]
    pub fn create_form(&self) -> String {
        let body = fields_form("/add", &UserDetails::default(), "Save");
        self.layout("Add user", &body)
    }

    /// Form pre-filled with `user`, posting to `/update/{id}`.
    ///
    /// An absent record renders a not-found notice instead of the form.
    #[must_use]
    pub fn edit_form(&self, user: Option<&UserRecord>) -> String {
        let body = match user {
            Some(user) => fields_form(&format!("/update/{}", user.id()), user.details(), "Update"),
            None => String::from(
                "<p class=\"notice\">This user does not exist or has been deleted.</p>\n\
                 <p><a href=\"/\">Back to the directory</a></p>\n",
            ),
        };
        self.layout("Edit user", &body)
    }
}

fn fields_form(action: &str, values: &UserDetails, submit: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\n\
         {name}{position}{office}\
         <button type=\"submit\">{submit}</button>\n\
         <a href=\"/\">Cancel</a>\n\
         </form>\n",
        action = escape_html(action),
        name = input("name", "Name", values.name()),
        position = input("position", "Position", values.position()),
        office = input("office", "Office", values.office()),
        submit = escape_html(submit),
    )
}

fn input(field: &str, label: &str, value: &str) -> String {
    format!(
        "<label for=\"{field}\">{label}</label>\n\
         <input type=\"text\" id=\"{field}\" name=\"{field}\" value=\"{value}\" required>\n",
        value = escape_html(value),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use rstest::rstest;

    #[rstest]
    fn create_form_posts_required_fields_to_add() {
        let page = Views::default().create_form();
        assert!(page.contains("action=\"/add\""));
        for field in ["name", "position", "office"] {
            assert!(page.contains(&format!("name=\"{field}\" value=\"\" required")));
        }
    }

    #[rstest]
    fn edit_form_is_prefilled_and_targets_update() {
        let user = UserRecord::new(UserId::new(5), UserDetails::new("Ann", "Engineer", "N\"Y"));
        let page = Views::default().edit_form(Some(&user));

        assert!(page.contains("action=\"/update/5\""));
        assert!(page.contains("value=\"Ann\""));
        assert!(page.contains("value=\"Engineer\""));
        assert!(page.contains("value=\"N&quot;Y\""));
    }

    #[rstest]
    fn edit_form_tolerates_absent_record() {
        let page = Views::default().edit_form(None);
        assert!(page.contains("does not exist"));
        assert!(!page.contains("<form"));
    }
}
