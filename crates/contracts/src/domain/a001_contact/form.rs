use serde::Serialize;

/// HTTP method of the shared contacts form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMethod {
    Post,
}

impl FormMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            FormMethod::Post => "post",
        }
    }
}

/// Скрытые поля формы `contactsForm`, выставленные перед отправкой
///
/// Поля, которые обработчик не трогал, остаются `None` и не попадают
/// в сериализованное представление.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactsFormPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_contacts_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleting_contacts_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_lower_ids: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_contact_id_for_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_search: Option<bool>,
}

/// A retargeted submission of the contacts form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub action: String,
    pub method: FormMethod,
    pub payload: ContactsFormPayload,
}

impl FormSubmission {
    pub fn post(action: impl Into<String>, payload: ContactsFormPayload) -> Self {
        Self {
            action: action.into(),
            method: FormMethod::Post,
            payload,
        }
    }

    /// Form-encoded rendering of the fields this submission set.
    pub fn encoded_payload(&self) -> Result<String, serde_qs::Error> {
        serde_qs::to_string(&self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_submission() {
        let submission = FormSubmission::post("/contacts/delete", ContactsFormPayload::default());
        assert_eq!(submission.method, FormMethod::Post);
        assert_eq!(submission.method.as_str(), "post");
        assert_eq!(submission.action, "/contacts/delete");
    }

    #[test]
    fn test_encoded_payload_only_contains_set_fields() {
        let submission = FormSubmission::post(
            "/contacts",
            ContactsFormPayload {
                is_lower_ids: Some(false),
                start_contact_id_for_page: Some("42".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(
            submission.encoded_payload().unwrap(),
            "isLowerIds=false&startContactIdForPage=42"
        );
    }

    #[test]
    fn test_empty_payload_encodes_to_empty_string() {
        let submission = FormSubmission::post("/contacts", ContactsFormPayload::default());
        assert_eq!(submission.encoded_payload().unwrap(), "");
    }
}
