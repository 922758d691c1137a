use dialbook_core::Contact;

const MISSING_PHONE: &str = "-";

pub fn format_contact_line(contact: &Contact) -> String {
    format!(
        "{}\t{}",
        contact.phone.as_deref().unwrap_or(MISSING_PHONE),
        contact.name
    )
}
