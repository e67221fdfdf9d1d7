use crate::config::{self, tags};
use crate::core::catalog::Catalog;
use crate::core::i18n::Localizer;
use crate::models::View;

use super::card::{Card, card};

/// Featured-item banner at the top of the home page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hero {
    pub path: String,
    pub badge: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub play_label: String,
}

/// A titled, capped group of cards with a link to the full listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardSection {
    pub title: String,
    pub view_all_label: String,
    pub view_all_path: String,
    pub cards: Vec<Card>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AboutBlock {
    pub title: String,
    pub intro: String,
    pub features_lead: String,
    pub features: Vec<String>,
    pub closing: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomePage {
    pub hero: Option<Hero>,
    pub popular: CardSection,
    pub fresh: CardSection,
    pub about: AboutBlock,
}

const FEATURE_KEYS: [&str; 5] = [
    "proceduralLevels",
    "characterProgression",
    "monsterVariety",
    "increasingDifficulty",
    "quickGameplay",
];

pub(super) fn build(catalog: &Catalog, i18n: &Localizer) -> HomePage {
    let hero = catalog.featured().map(|item| Hero {
        path: item.path(),
        badge: i18n.translate("featuredGame"),
        title: item.title.clone(),
        description: item.description.clone(),
        thumbnail_url: item.thumbnail_url.clone(),
        play_label: i18n.translate("playGame"),
    });

    let popular = section(tags::POPULAR, "popular", None, catalog, i18n);
    let fresh = section(tags::NEW, "newGames", Some(i18n.translate("new")), catalog, i18n);

    HomePage {
        hero,
        popular,
        fresh,
        about: AboutBlock {
            title: i18n.translate("aboutMonsterSurvivors"),
            intro: i18n.translate("monsterSurvivorsIntro"),
            features_lead: i18n.translate("gameFeatures"),
            features: FEATURE_KEYS.iter().map(|key| i18n.translate(key)).collect(),
            closing: i18n.translate("casualOrHardcore"),
        },
    }
}

fn section(
    tag_id: &str,
    title_key: &str,
    badge: Option<String>,
    catalog: &Catalog,
    i18n: &Localizer,
) -> CardSection {
    let cards = catalog
        .all()
        .iter()
        .filter(|item| item.has_tag(tag_id))
        .take(config::HOME_SECTION_LIMIT)
        .map(|item| Card {
            badge: badge.clone(),
            ..card(item, catalog, i18n)
        })
        .collect();

    CardSection {
        title: i18n.translate(title_key),
        view_all_label: i18n.translate("viewAll"),
        view_all_path: View::Tag(tag_id.to_string()).path(),
        cards,
    }
}
