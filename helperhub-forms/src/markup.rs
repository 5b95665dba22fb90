//! Element trees for the application's forms.

use formcheck::FormKind;
use formdom::{Document, Element};

/// ID of the form element for a form kind, e.g. `login-form`.
pub fn form_id(kind: FormKind) -> String {
    format!("{kind}-form")
}

/// Build the document for a form.
pub fn document(kind: FormKind) -> Document {
    let fields = match kind {
        FormKind::Login => vec![
            group("Email", Element::input("email")),
            group("Password", Element::password("password")),
        ],
        FormKind::Registration => vec![
            group("Full name", Element::input("name")),
            group("Email", Element::input("email")),
            group("Password", Element::password("password")),
            group("Confirm password", Element::password("confirm_password")),
        ],
        FormKind::ServiceRequest => vec![
            group("Category", Element::select("category")),
            group("Title", Element::input("title")),
            group("Description", Element::textarea("description")),
            group("Location", Element::input("location")),
            group("Date", Element::input("date")),
        ],
    };

    Document::new(
        Element::form()
            .id(form_id(kind))
            .children(fields)
            .child(Element::button("Submit").id(format!("{kind}-submit"))),
    )
}

fn group(label: &str, field: Element) -> Element {
    let id = field.name.clone().unwrap_or_default();
    Element::group()
        .id(format!("{id}-group"))
        .class("mb-3")
        .child(Element::label(label))
        .child(field.id(id).class("form-control"))
}
