//! Informational pages: the two legal documents and the contact page.

use serde::Deserialize;

use crate::config;
use crate::core::i18n::Localizer;
use crate::models::StaticPage;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DocumentSection {
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DocumentFile {
    title_key: String,
    updated: String,
    #[serde(default)]
    sections: Vec<DocumentSection>,
}

/// Legal document with a localized title and update line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentPage {
    pub title: String,
    pub updated: String,
    pub sections: Vec<DocumentSection>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: String,
    pub links: Vec<Link>,
}

/// Labels for the message form. Submitting swaps the form for `sent_message`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    pub heading: String,
    pub name_label: String,
    pub email_label: String,
    pub subject_label: String,
    pub message_label: String,
    pub submit_label: String,
    pub sent_message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactPage {
    pub title: String,
    pub intro: String,
    pub info_heading: String,
    pub channels: Vec<ContactChannel>,
    pub form: ContactForm,
}

pub(super) fn legal(page: StaticPage, i18n: &Localizer) -> DocumentPage {
    let (source, fallback_key) = match page {
        StaticPage::PrivacyPolicy => (config::PRIVACY_POLICY_TOML, "privacyPolicy"),
        StaticPage::TermsOfService | StaticPage::Contact => {
            (config::TERMS_OF_SERVICE_TOML, "termsOfService")
        }
    };

    match toml::from_str::<DocumentFile>(source) {
        Ok(file) => DocumentPage {
            title: i18n.translate(&file.title_key),
            updated: i18n.format("lastUpdated", &[("date", &file.updated)]),
            sections: file.sections,
        },
        Err(err) => {
            tracing::error!(%err, ?page, "document asset unusable");
            DocumentPage {
                title: i18n.translate(fallback_key),
                updated: String::new(),
                sections: Vec::new(),
            }
        }
    }
}

pub(super) fn contact(i18n: &Localizer) -> ContactPage {
    let link = |label: &str, href: String| Link {
        label: label.to_string(),
        href,
    };

    ContactPage {
        title: i18n.translate("contactUs"),
        intro: i18n.translate("contactIntro"),
        info_heading: i18n.translate("contactInformation"),
        channels: vec![
            ContactChannel {
                label: i18n.translate("email"),
                links: vec![link(
                    config::CONTACT_EMAIL,
                    format!("mailto:{}", config::CONTACT_EMAIL),
                )],
            },
            ContactChannel {
                label: i18n.translate("website"),
                links: vec![link(config::CONTACT_WEBSITE, config::CONTACT_WEBSITE.to_string())],
            },
            ContactChannel {
                label: i18n.translate("socialMedia"),
                links: config::SOCIAL_LINKS
                    .iter()
                    .map(|(label, href)| link(label, href.to_string()))
                    .collect(),
            },
        ],
        form: ContactForm {
            heading: i18n.translate("sendMessage"),
            name_label: i18n.translate("yourName"),
            email_label: i18n.translate("emailAddress"),
            subject_label: i18n.translate("subject"),
            message_label: i18n.translate("message"),
            submit_label: i18n.translate("sendMessage"),
            sent_message: i18n.translate("messageSent"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::i18n::fixtures::localizer;
    use crate::models::Language;

    #[test]
    fn test_legal_documents_load() {
        let i18n = localizer();
        for page in [StaticPage::PrivacyPolicy, StaticPage::TermsOfService] {
            let doc = legal(page, &i18n);
            assert!(!doc.sections.is_empty());
            assert_eq!(doc.updated, "Last updated: March 23, 2025");
        }
        assert_eq!(legal(StaticPage::PrivacyPolicy, &i18n).title, "Privacy Policy");
    }

    #[test]
    fn test_localized_document_title() {
        let mut i18n = localizer();
        i18n.switch_language(Language::Zh);
        assert_eq!(legal(StaticPage::TermsOfService, &i18n).title, "服务条款");
    }

    #[test]
    fn test_contact_page() {
        let page = contact(&localizer());
        assert_eq!(page.title, "Contact Us");
        assert_eq!(page.channels.len(), 3);
        assert_eq!(page.channels[0].links[0].href, "mailto:contact@monstersurvivors.com");
        assert_eq!(page.form.submit_label, "Send a Message");
    }
}
